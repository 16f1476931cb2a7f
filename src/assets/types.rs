//! Core asset data types
//!
//! An [`Asset`] is one showcase card: a title, a short description, a
//! category tag, and a body holding either flat detail entries or grouped
//! child sections.
//!
//! # Types
//!
//! - **`AssetId`**: Unique, stable integer identifier
//! - **`Category`**: Case-preserved classification tag, compared exactly
//! - **`DetailEntry`**: Plain text or a labelled external link
//! - **`ChildSection`**: Titled group of plain-text entries
//! - **`AssetBody`**: Exactly one of sections, details, or nothing
//!
//! # Examples
//!
//! ```
//! use assethub::assets::{Asset, AssetId, DetailEntry};
//!
//! let asset = Asset::new(2, "Media", "Press mentions.", "media")
//!     .with_details(vec![
//!         DetailEntry::text("Ted X"),
//!         DetailEntry::link("Economic Times", "https://economictimes.indiatimes.com/"),
//!     ]);
//!
//! assert_eq!(asset.id, AssetId::new(2));
//! assert_eq!(asset.body.links().count(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique asset identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(u32);

impl AssetId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AssetId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Category tag attached to every asset
///
/// Equality is exact: `"media"` and `"Media"` are different categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// A single detail line: plain text or a labelled external link
///
/// Link entries accept both `label`/`url` and `text`/`link` keys when loaded
/// from a data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailEntry {
    /// Plain text entry
    Text(String),
    /// External link with a display label
    Link {
        #[serde(alias = "text")]
        label: String,
        #[serde(alias = "link")]
        url: String,
    },
}

impl DetailEntry {
    /// Create a plain-text entry
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a link entry
    #[must_use]
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Text shown for this entry
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Link { label, .. } => label,
        }
    }

    /// URL of a link entry
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Link { url, .. } => Some(url),
        }
    }
}

/// Titled group of plain-text entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildSection {
    pub title: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl ChildSection {
    #[must_use]
    pub fn new(title: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            title: title.into(),
            details,
        }
    }
}

/// Expanded content of an asset
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetBody {
    /// No expanded content
    #[default]
    Empty,
    /// Flat list of detail entries
    Details(Vec<DetailEntry>),
    /// Grouped child sections
    Sections(Vec<ChildSection>),
}

impl AssetBody {
    /// Link entries in display order
    ///
    /// Sections never contain links, so only `Details` bodies yield anything.
    pub fn links(&self) -> impl Iterator<Item = &DetailEntry> {
        let entries: &[DetailEntry] = match self {
            Self::Details(entries) => entries,
            Self::Empty | Self::Sections(_) => &[],
        };
        entries.iter().filter(|entry| entry.url().is_some())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A showcase asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "super::record::AssetRecord")]
pub struct Asset {
    pub id: AssetId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub body: AssetBody,
}

impl Asset {
    /// Create an asset with an empty body
    #[must_use]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: AssetId::new(id),
            title: title.into(),
            description: description.into(),
            category: Category::new(category),
            body: AssetBody::Empty,
        }
    }

    /// Replace the body with flat detail entries
    #[must_use]
    pub fn with_details(mut self, details: Vec<DetailEntry>) -> Self {
        self.body = AssetBody::Details(details);
        self
    }

    /// Replace the body with child sections
    #[must_use]
    pub fn with_sections(mut self, sections: Vec<ChildSection>) -> Self {
        self.body = AssetBody::Sections(sections);
        self
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

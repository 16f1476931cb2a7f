//! Raw on-disk asset records and their validation
//!
//! Records are deserialized with every field optional so that a missing
//! field can be reported against the record that lacks it, instead of as a
//! bare parser message.

use super::error::{AssetError, Result};
use super::types::{Asset, AssetBody, AssetId, Category, ChildSection, DetailEntry};
use crate::filter::ALL_LABEL;
use serde::{Deserialize, Serialize};

/// An asset as written in a data file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<DetailEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ChildSection>>,
}

/// Top-level layout of a TOML data file (`[[assets]]` tables)
///
/// Any other top-level key is a parse fault, so a misspelled table name
/// cannot load as an empty data set.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetDocument {
    #[serde(default)]
    pub assets: Vec<AssetRecord>,
}

/// Top-level layout of a JSON data file: a bare array or `{ "assets": [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JsonDocument {
    List(Vec<AssetRecord>),
    Document(AssetDocument),
}

impl JsonDocument {
    pub fn into_records(self) -> Vec<AssetRecord> {
        match self {
            Self::List(records) => records,
            Self::Document(doc) => doc.assets,
        }
    }
}

fn required<T>(value: Option<T>, position: usize, field: &'static str) -> Result<T> {
    value.ok_or(AssetError::MissingField { position, field })
}

fn non_blank(value: String, id: AssetId, field: &'static str) -> Result<String> {
    if value.trim().is_empty() {
        Err(AssetError::EmptyField { id, field })
    } else {
        Ok(value)
    }
}

fn check_links(id: AssetId, details: &[DetailEntry]) -> Result<()> {
    for entry in details {
        if let DetailEntry::Link { label, url } = entry {
            let scheme_ok = url.starts_with("http://") || url.starts_with("https://");
            if label.trim().is_empty() || !scheme_ok {
                return Err(AssetError::InvalidLink {
                    id,
                    label: label.clone(),
                    url: url.clone(),
                });
            }
        }
    }
    Ok(())
}

impl AssetRecord {
    /// Validate this record and convert it into an [`Asset`]
    ///
    /// `position` is the one-based index of the record in its source and is
    /// only used for error reporting. When both `children` and `details` are
    /// present, `children` wins and the details are dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `AssetError` if a required field is missing or blank, if the
    /// category is the reserved wildcard name, or if a link entry is malformed.
    pub fn into_asset(self, position: usize) -> Result<Asset> {
        let id = AssetId::new(required(self.id, position, "id")?);
        let title = required(self.title, position, "title")?;
        let description = required(self.description, position, "description")?;
        let category = required(self.category, position, "category")?;

        let title = non_blank(title, id, "title")?;
        let category = non_blank(category, id, "category")?;
        if category.eq_ignore_ascii_case(ALL_LABEL) {
            return Err(AssetError::ReservedCategory { id, category });
        }

        let body = match (self.children, self.details) {
            (Some(children), details) => {
                if details.is_some() {
                    tracing::warn!(asset = %id, "asset has both children and details; showing children");
                }
                AssetBody::Sections(children)
            }
            (None, Some(details)) => {
                check_links(id, &details)?;
                AssetBody::Details(details)
            }
            (None, None) => AssetBody::Empty,
        };

        Ok(Asset {
            id,
            title,
            description,
            category: Category::new(category),
            body,
        })
    }
}

impl From<Asset> for AssetRecord {
    fn from(asset: Asset) -> Self {
        let (details, children) = match asset.body {
            AssetBody::Empty => (None, None),
            AssetBody::Details(details) => (Some(details), None),
            AssetBody::Sections(sections) => (None, Some(sections)),
        };

        Self {
            id: Some(asset.id.get()),
            title: Some(asset.title),
            description: Some(asset.description),
            category: Some(asset.category.as_str().to_string()),
            details,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, title: &str) -> AssetRecord {
        AssetRecord {
            id: Some(id),
            title: Some(title.to_string()),
            description: Some("desc".to_string()),
            category: Some("media".to_string()),
            ..AssetRecord::default()
        }
    }

    #[test]
    fn test_missing_title_reports_position() {
        let mut rec = record(1, "x");
        rec.title = None;
        let err = rec.into_asset(4).unwrap_err();
        assert!(matches!(
            err,
            AssetError::MissingField { position: 4, field: "title" }
        ));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let mut rec = record(1, "x");
        rec.id = None;
        assert!(matches!(
            rec.into_asset(1),
            Err(AssetError::MissingField { field: "id", .. })
        ));
    }

    #[test]
    fn test_blank_category_is_rejected() {
        let mut rec = record(9, "Media");
        rec.category = Some("   ".to_string());
        assert!(matches!(
            rec.into_asset(1),
            Err(AssetError::EmptyField { field: "category", .. })
        ));
    }

    #[test]
    fn test_wildcard_category_name_is_reserved() {
        for name in ["All", "all", "ALL"] {
            let mut rec = record(5, "Reports");
            rec.category = Some(name.to_string());
            assert!(matches!(
                rec.into_asset(1),
                Err(AssetError::ReservedCategory { category, .. }) if category == name
            ));
        }

        let mut rec = record(5, "Reports");
        rec.category = Some("allies".to_string());
        assert!(rec.into_asset(1).is_ok());
    }

    #[test]
    fn test_children_take_precedence_over_details() {
        let mut rec = record(1, "Frameworks");
        rec.details = Some(vec![DetailEntry::text("ignored")]);
        rec.children = Some(vec![ChildSection::new("Consulting", vec!["PPTG".into()])]);

        let asset = rec.into_asset(1).unwrap();
        assert!(matches!(asset.body, AssetBody::Sections(_)));
    }

    #[test]
    fn test_link_without_scheme_is_rejected() {
        let mut rec = record(2, "Media");
        rec.details = Some(vec![DetailEntry::link("ET", "economictimes.com")]);
        assert!(matches!(
            rec.into_asset(1),
            Err(AssetError::InvalidLink { .. })
        ));
    }

    #[test]
    fn test_empty_description_is_allowed() {
        let mut rec = record(3, "Collaborations");
        rec.description = Some(String::new());
        let asset = rec.into_asset(1).unwrap();
        assert!(asset.description.is_empty());
        assert!(asset.body.is_empty());
    }

    #[test]
    fn test_json_document_accepts_array_and_object() {
        let list: JsonDocument = serde_json::from_str(r#"[{"id": 1}]"#).unwrap();
        assert_eq!(list.into_records().len(), 1);

        let doc: JsonDocument = serde_json::from_str(r#"{"assets": [{"id": 1}, {"id": 2}]}"#).unwrap();
        assert_eq!(doc.into_records().len(), 2);
    }
}

//! Asset loading error types
//!
//! Every fault here is raised at load time, before anything is rendered.
//! A data set that fails validation is rejected as a whole.
//!
//! # Error Types
//!
//! - **`Io`** / **`Toml`** / **`Json`**: the source file could not be read or parsed
//! - **`MissingField`**: a record lacks one of `id`, `title`, `description`, `category`
//! - **`EmptyField`**: a required text field is blank
//! - **`DuplicateId`**: two records share an id
//! - **`InvalidLink`**: a link entry has no label or a non-http(s) URL
//! - **`ReservedCategory`**: a record uses the wildcard name as its category

use super::types::AssetId;
use std::path::PathBuf;
use thiserror::Error;

/// Asset loading errors
#[derive(Debug, Error)]
pub enum AssetError {
    /// The data file could not be read
    #[error("Failed to read asset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid TOML
    #[error("Failed to parse asset file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The data file is not valid JSON
    #[error("Failed to parse asset file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file extension does not name a supported format
    #[error("Unsupported asset file format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    /// A record is missing a required field
    #[error("Asset record #{position}: missing required field `{field}`")]
    MissingField {
        /// One-based position of the record in its source
        position: usize,
        field: &'static str,
    },

    /// A required text field is empty or whitespace
    #[error("Asset {id}: field `{field}` must not be empty")]
    EmptyField { id: AssetId, field: &'static str },

    /// Two records share the same id
    #[error("Duplicate asset id: {0}")]
    DuplicateId(AssetId),

    /// A link entry is unusable
    #[error("Asset {id}: invalid link '{label}' -> '{url}'")]
    InvalidLink {
        id: AssetId,
        label: String,
        url: String,
    },

    /// The category tag collides with the "All" wildcard
    #[error("Asset {id}: category '{category}' is reserved for the all-categories filter")]
    ReservedCategory { id: AssetId, category: String },
}

/// Result type for asset loading
pub type Result<T> = std::result::Result<T, AssetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_record() {
        let err = AssetError::MissingField {
            position: 3,
            field: "title",
        };
        assert_eq!(
            err.to_string(),
            "Asset record #3: missing required field `title`"
        );
    }

    #[test]
    fn test_duplicate_id_message() {
        let err = AssetError::DuplicateId(AssetId::new(7));
        assert_eq!(err.to_string(), "Duplicate asset id: 7");
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = AssetError::UnsupportedFormat(PathBuf::from("assets.yaml"));
        assert!(err.to_string().contains("assets.yaml"));
    }
}

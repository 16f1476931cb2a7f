//! Asset data providers
//!
//! A [`DataProvider`] is read exactly once at startup. The returned list is
//! treated as immutable for the rest of the process.
//!
//! Two providers ship with the crate:
//!
//! - [`BuiltinAssets`]: the hard-coded showcase data set
//! - [`FileAssets`]: records loaded from a `.toml` or `.json` file

use super::error::{AssetError, Result};
use super::record::{AssetDocument, AssetRecord, JsonDocument};
use super::types::{Asset, ChildSection, DetailEntry};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of the showcase data set
pub trait DataProvider {
    /// Load and validate every asset, in display order
    ///
    /// # Errors
    ///
    /// Returns `AssetError` if the data cannot be read or a record is malformed.
    fn get_assets(&self) -> Result<Vec<Asset>>;

    /// Human-readable name of the source, used in log output
    fn describe(&self) -> String;
}

/// Validate a full record list and convert it into assets
///
/// Records are converted in order; the first fault aborts the load.
///
/// # Errors
///
/// Returns `AssetError` for the first malformed record or duplicate id.
pub fn validate_records(records: Vec<AssetRecord>) -> Result<Vec<Asset>> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut assets = Vec::with_capacity(records.len());

    for (idx, record) in records.into_iter().enumerate() {
        let asset = record.into_asset(idx + 1)?;
        if !seen.insert(asset.id) {
            return Err(AssetError::DuplicateId(asset.id));
        }
        assets.push(asset);
    }

    Ok(assets)
}

/// The built-in showcase data set
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAssets;

impl BuiltinAssets {
    fn records() -> Vec<Asset> {
        fn texts(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| (*s).to_string()).collect()
        }
        fn entries(items: &[&str]) -> Vec<DetailEntry> {
            items.iter().map(|s| DetailEntry::text(*s)).collect()
        }

        let mut media = entries(&[
            "E.T 2012",
            "Ted X",
            "IIM B Courses",
            "Outlook",
            "Guest Lectures",
        ]);
        media.push(DetailEntry::link(
            "Venturebean Consulting on Economic Times",
            "https://economictimes.indiatimes.com/",
        ));

        vec![
            Asset::new(
                1,
                "Frameworks",
                "Proprietary models for consulting and coaching engagements.",
                "frameworks",
            )
            .with_sections(vec![
                ChildSection::new(
                    "Consulting",
                    texts(&["PPTG", "COACHING - 4 PILLARS", "Z FRAMEWORK", "Giant"]),
                ),
                ChildSection::new(
                    "Coaching",
                    texts(&["Motivations Factor", "Greenspire", "Mcode"]),
                ),
            ]),
            Asset::new(
                2,
                "Media",
                "Our presence and contributions in leading publications and forums.",
                "media",
            )
            .with_details(media),
            Asset::new(
                3,
                "Collaborations",
                "Key partnerships that enhance our service delivery and reach.",
                "collaborations",
            )
            .with_details(entries(&["Zoho", "Zyxware", "Insight Consultants"])),
            Asset::new(
                4,
                "Assessments",
                "Self-assessment tools to foster growth and self-awareness.",
                "assessments",
            )
            .with_details(entries(&[
                "How coachable am I?",
                "What is my leadership style?",
                "How well do I manage my time and priorities?",
                "What are my core motivators and drivers?",
                "Am I leading or managing?",
            ])),
            Asset::new(
                5,
                "Industry Reports",
                "In-depth analysis and summaries from leading consulting firms.",
                "reports",
            )
            .with_details(entries(&[
                "Red Seer Consulting",
                "PwC",
                "McKinsey",
                "Format: Summary and Venture Bean's Take",
            ])),
        ]
    }
}

impl DataProvider for BuiltinAssets {
    fn get_assets(&self) -> Result<Vec<Asset>> {
        // Round-trip through records so the built-in set obeys the same rules as files
        validate_records(Self::records().into_iter().map(AssetRecord::from).collect())
    }

    fn describe(&self) -> String {
        "built-in showcase".to_string()
    }
}

/// Assets loaded from a TOML or JSON file
#[derive(Debug, Clone)]
pub struct FileAssets {
    path: PathBuf,
}

/// Supported data file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Json,
}

impl FileAssets {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> Result<FileFormat> {
        match self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(FileFormat::Toml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(AssetError::UnsupportedFormat(self.path.clone())),
        }
    }

    fn read_records(&self) -> Result<Vec<AssetRecord>> {
        let format = self.format()?;
        let content = fs::read_to_string(&self.path).map_err(|source| AssetError::Io {
            path: self.path.clone(),
            source,
        })?;

        match format {
            FileFormat::Toml => toml::from_str::<AssetDocument>(&content)
                .map(|doc| doc.assets)
                .map_err(|source| AssetError::Toml {
                    path: self.path.clone(),
                    source,
                }),
            FileFormat::Json => serde_json::from_str::<JsonDocument>(&content)
                .map(JsonDocument::into_records)
                .map_err(|source| AssetError::Json {
                    path: self.path.clone(),
                    source,
                }),
        }
    }
}

impl DataProvider for FileAssets {
    fn get_assets(&self) -> Result<Vec<Asset>> {
        validate_records(self.read_records()?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Load assets from a provider, logging the outcome
///
/// # Errors
///
/// Propagates the provider's `AssetError`.
pub fn load(provider: &dyn DataProvider) -> Result<Vec<Asset>> {
    let source = provider.describe();
    match provider.get_assets() {
        Ok(assets) => {
            tracing::info!(source = %source, count = assets.len(), "loaded assets");
            Ok(assets)
        }
        Err(e) => {
            tracing::error!(source = %source, error = %e, "failed to load assets");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetBody, AssetId};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_assets() {
        let assets = BuiltinAssets.get_assets().unwrap();
        let titles: Vec<&str> = assets.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Frameworks", "Media", "Collaborations", "Assessments", "Industry Reports"]
        );
        assert!(matches!(assets[0].body, AssetBody::Sections(ref s) if s.len() == 2));
        assert_eq!(assets[1].body.links().count(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let records = vec![
            AssetRecord::from(Asset::new(1, "A", "a", "x")),
            AssetRecord::from(Asset::new(1, "B", "b", "y")),
        ];
        assert!(matches!(
            validate_records(records),
            Err(AssetError::DuplicateId(id)) if id == AssetId::new(1)
        ));
    }

    #[test]
    fn test_toml_file() {
        let file = temp_file(
            ".toml",
            r#"
[[assets]]
id = 10
title = "Frameworks"
description = "Models"
category = "frameworks"

[[assets.children]]
title = "Consulting"
details = ["PPTG", "Giant"]

[[assets]]
id = 11
title = "Media"
description = "Press"
category = "media"
details = ["Ted X", { label = "ET", url = "https://economictimes.indiatimes.com/" }]
"#,
        );

        let assets = FileAssets::new(file.path()).get_assets().unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].id, AssetId::new(10));
        assert!(matches!(assets[0].body, AssetBody::Sections(_)));
        assert_eq!(assets[1].body.links().count(), 1);
    }

    #[test]
    fn test_json_file() {
        let file = temp_file(
            ".json",
            r#"[{"id": 1, "title": "Media", "description": "d", "category": "media",
                "details": [{"text": "ET", "link": "https://economictimes.indiatimes.com/"}]}]"#,
        );

        let assets = FileAssets::new(file.path()).get_assets().unwrap();
        assert_eq!(assets[0].body.links().count(), 1);
    }

    #[test]
    fn test_missing_field_in_file_fails_fast() {
        let file = temp_file(
            ".toml",
            r#"
[[assets]]
id = 1
title = "Media"
category = "media"
"#,
        );

        let err = FileAssets::new(file.path()).get_assets().unwrap_err();
        assert!(matches!(
            err,
            AssetError::MissingField { position: 1, field: "description" }
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_file(".yaml", "assets: []");
        assert!(matches!(
            FileAssets::new(file.path()).get_assets(),
            Err(AssetError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let provider = FileAssets::new("/definitely/not/here/assets.toml");
        assert!(matches!(provider.get_assets(), Err(AssetError::Io { .. })));
    }

    #[test]
    fn test_empty_file_is_empty_data_set() {
        let file = temp_file(".toml", "");
        assert!(FileAssets::new(file.path()).get_assets().unwrap().is_empty());
    }

    #[test]
    fn test_misspelled_table_is_rejected() {
        let file = temp_file(
            ".toml",
            r#"
[[asset]]
id = 1
title = "Media"
description = "m"
category = "media"
"#,
        );
        assert!(matches!(
            FileAssets::new(file.path()).get_assets(),
            Err(AssetError::Toml { .. })
        ));
    }

    #[test]
    fn test_unknown_json_document_key_is_rejected() {
        let file = temp_file(".json", r#"{ "asset": [] }"#);
        assert!(matches!(
            FileAssets::new(file.path()).get_assets(),
            Err(AssetError::Json { .. })
        ));
    }
}

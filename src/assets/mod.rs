//! Asset data model and providers
//!
//! This module owns everything about the showcase data set: the typed
//! model, the on-disk record format, and the providers that load it.
//!
//! # Submodules
//!
//! - `types`: `Asset`, `AssetId`, `Category`, `DetailEntry`, `ChildSection`, `AssetBody`
//! - `record`: raw file records and per-record validation
//! - `provider`: `DataProvider` trait, `BuiltinAssets`, `FileAssets`
//! - `error`: `AssetError`

pub mod error;
pub mod provider;
pub mod record;
pub mod types;

pub use error::AssetError;
pub use provider::{BuiltinAssets, DataProvider, FileAssets, load, validate_records};
pub use record::AssetRecord;
pub use types::{Asset, AssetBody, AssetId, Category, ChildSection, DetailEntry};

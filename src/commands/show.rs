//! Show command - print one asset with its details

use crate::{assets::{Asset, AssetId}, output, HubError};
use std::io::{self, Write};

type Result<T> = std::result::Result<T, HubError>;

/// Execute the show command against stdout
///
/// # Errors
/// Returns `HubError::NotFound` for an unknown id, or an I/O error.
pub fn execute(assets: &[Asset], id: AssetId, quiet: bool) -> Result<()> {
    execute_to(&mut io::stdout().lock(), assets, id, quiet)
}

/// Execute the show command, writing to `out`
///
/// Quiet mode prints the description only.
///
/// # Errors
/// Returns `HubError::NotFound` for an unknown id, or an I/O error.
pub fn execute_to(out: &mut impl Write, assets: &[Asset], id: AssetId, quiet: bool) -> Result<()> {
    let asset = assets
        .iter()
        .find(|asset| asset.id == id)
        .ok_or(HubError::NotFound(id))?;

    if quiet {
        writeln!(out, "{}", asset.description)?;
    } else {
        writeln!(out, "{}", output::asset_details(asset))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_assets;

    #[test]
    fn test_show_known_asset() {
        let mut out = Vec::new();
        execute_to(&mut out, &sample_assets(), AssetId::new(3), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Collaborations"));
        assert!(text.contains("• Zoho"));
        assert!(text.contains("• Zyxware"));
    }

    #[test]
    fn test_show_quiet_prints_description() {
        let mut out = Vec::new();
        execute_to(&mut out, &sample_assets(), AssetId::new(2), true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Our presence and contributions in leading publications and forums.\n"
        );
    }

    #[test]
    fn test_show_unknown_id() {
        let mut out = Vec::new();
        let err = execute_to(&mut out, &sample_assets(), AssetId::new(99), false).unwrap_err();
        assert!(matches!(err, HubError::NotFound(id) if id.get() == 99));
        assert!(out.is_empty());
    }
}

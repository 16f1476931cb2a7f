//! Categories command - print the category registry

use crate::{assets::Asset, filter::{compute_visible, derive_categories}, output, HubError};
use std::io::{self, Write};

type Result<T> = std::result::Result<T, HubError>;

/// Execute the categories command against stdout
///
/// # Errors
/// Returns an error if output cannot be written.
pub fn execute(assets: &[Asset], quiet: bool) -> Result<()> {
    execute_to(&mut io::stdout().lock(), assets, quiet)
}

/// Execute the categories command, writing to `out`
///
/// # Errors
/// Returns an error if output cannot be written.
pub fn execute_to(out: &mut impl Write, assets: &[Asset], quiet: bool) -> Result<()> {
    if !quiet {
        writeln!(out, "Categories:")?;
    }
    for category in derive_categories(assets) {
        let count = compute_visible(assets, "", &category).len();
        writeln!(out, "{}", output::category_line(&category, count, quiet))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_assets;

    #[test]
    fn test_registry_order() {
        let mut out = Vec::new();
        execute_to(&mut out, &sample_assets(), true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "All\nframeworks\nmedia\ncollaborations\n"
        );
    }

    #[test]
    fn test_empty_set_still_lists_all() {
        let mut out = Vec::new();
        execute_to(&mut out, &[], true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "All\n");
    }

    #[test]
    fn test_counts_in_normal_mode() {
        let mut out = Vec::new();
        execute_to(&mut out, &sample_assets(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Categories:\n"));
        assert!(text.contains("(3 asset(s))"));
        assert!(text.contains("(1 asset(s))"));
    }
}

//! List command - print the assets visible under a query and category

use crate::{assets::Asset, filter::FilterState, output, HubError};
use std::io::{self, Write};

type Result<T> = std::result::Result<T, HubError>;

/// Execute the list command against stdout
///
/// # Errors
/// Returns an error if output cannot be written or serialized.
pub fn execute(assets: &[Asset], filter: &FilterState, json: bool, quiet: bool) -> Result<()> {
    execute_to(&mut io::stdout().lock(), assets, filter, json, quiet)
}

/// Execute the list command, writing to `out`
///
/// # Errors
/// Returns an error if output cannot be written or serialized.
pub fn execute_to(
    out: &mut impl Write,
    assets: &[Asset],
    filter: &FilterState,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let visible = filter.apply(assets);

    if json {
        serde_json::to_writer_pretty(&mut *out, &visible)?;
        writeln!(out)?;
        return Ok(());
    }

    if visible.is_empty() {
        if !quiet {
            writeln!(out, "{}", output::empty_state(&filter.query))?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(out, "Assets in {} ({} shown):", filter.category, visible.len())?;
    }
    for asset in visible {
        writeln!(out, "{}", output::asset_line(asset, quiet))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilter;
    use crate::testing::sample_assets;

    fn run(filter: &FilterState, json: bool, quiet: bool) -> String {
        let mut out = Vec::new();
        execute_to(&mut out, &sample_assets(), filter, json, quiet).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quiet_lists_in_input_order() {
        let text = run(&FilterState::default(), false, true);
        assert_eq!(text, "1\tFrameworks\n2\tMedia\n3\tCollaborations\n");
    }

    #[test]
    fn test_query_and_category_filter() {
        let filter = FilterState::new("PRES", CategoryFilter::parse("media"));
        assert_eq!(run(&filter, false, true), "2\tMedia\n");
    }

    #[test]
    fn test_empty_result_prints_empty_state() {
        let filter = FilterState::new("zzz", CategoryFilter::All);
        let text = run(&filter, false, false);
        assert!(text.contains("No Assets Found"));
        assert!(text.contains("Your search for \"zzz\" did not match any assets."));

        assert_eq!(run(&filter, false, true), "");
    }

    #[test]
    fn test_json_output() {
        let filter = FilterState::new("", CategoryFilter::parse("media"));
        let value: serde_json::Value = serde_json::from_str(&run(&filter, true, false)).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], 2);
        assert_eq!(items[0]["title"], "Media");
        assert_eq!(items[0]["category"], "media");
    }

    #[test]
    fn test_json_empty_is_empty_array() {
        let filter = FilterState::new("zzz", CategoryFilter::All);
        let value: serde_json::Value = serde_json::from_str(&run(&filter, true, false)).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }
}

//! Output formatting for CLI display
//!
//! This module provides utilities for formatting assets and categories in
//! the non-interactive commands. Quiet mode drops decoration so output can
//! be piped.

use crate::assets::{Asset, AssetBody, DetailEntry};
use crate::filter::CategoryFilter;
use colored::Colorize;

/// Heading shown when no asset is visible
pub const EMPTY_TITLE: &str = "No Assets Found";

/// Message under the empty-state heading, echoing the query
#[must_use]
pub fn empty_message(query: &str) -> String {
    format!("Your search for \"{query}\" did not match any assets.")
}

/// Format the empty state as two lines
#[must_use]
pub fn empty_state(query: &str) -> String {
    format!("{}\n{}", EMPTY_TITLE.bold(), empty_message(query).dimmed())
}

/// Format an asset as a list entry
///
/// Quiet mode prints `id<TAB>title`.
#[must_use]
pub fn asset_line(asset: &Asset, quiet: bool) -> String {
    if quiet {
        format!("{}\t{}", asset.id, asset.title)
    } else {
        format!(
            "  {:>3}  {} {}\n       {}",
            asset.id.to_string().dimmed(),
            asset.title.bold(),
            format!("[{}]", asset.category).magenta(),
            asset.description
        )
    }
}

/// Format a registry entry with the number of assets it shows
#[must_use]
pub fn category_line(category: &CategoryFilter, count: usize, quiet: bool) -> String {
    if quiet {
        category.to_string()
    } else {
        let label = match category {
            CategoryFilter::All => category.label().bold(),
            CategoryFilter::Only(_) => category.label().magenta(),
        };
        format!("  {label} ({count} asset(s))")
    }
}

fn detail_line(entry: &DetailEntry) -> String {
    match entry {
        DetailEntry::Text(text) => format!("    • {text}"),
        DetailEntry::Link { label, url } => {
            format!("    ↗ {} {}", label.cyan().underline(), url.dimmed())
        }
    }
}

/// Format an asset with its full body for `show`
#[must_use]
pub fn asset_details(asset: &Asset) -> String {
    let mut lines = vec![
        format!("{} {}", asset.title.bold(), format!("#{}", asset.id).dimmed()),
        format!("{}", format!("[{}]", asset.category).magenta()),
        String::new(),
        asset.description.clone(),
    ];

    match &asset.body {
        AssetBody::Sections(sections) => {
            for section in sections {
                lines.push(String::new());
                lines.push(format!("  {}", section.title.yellow().bold()));
                lines.extend(section.details.iter().map(|item| format!("    • {item}")));
            }
        }
        AssetBody::Details(entries) => {
            lines.push(String::new());
            lines.extend(entries.iter().map(detail_line));
        }
        AssetBody::Empty => {}
    }

    lines.join("\n")
}

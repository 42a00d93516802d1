//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use namefmt::filters::CATALOG;

/// Format the filter catalog as an ASCII table.
pub fn format_filter_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Filter", "Signature", "Description"]);

    for entry in CATALOG {
        table.add_row(vec![entry.name, entry.signature, entry.summary]);
    }

    table
}

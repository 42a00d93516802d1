//! Implementation of the `namefmt filters` command.

use namefmt::filters::CATALOG;
use serde::Serialize;

use crate::output::table::format_filter_table;

/// Arguments for the filters command.
#[derive(Debug, clap::Args)]
pub struct FiltersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one catalog row.
#[derive(Serialize)]
struct FilterRow {
    name: &'static str,
    signature: &'static str,
    summary: &'static str,
}

/// Run the filters command.
pub fn run_filters(args: FiltersArgs) -> miette::Result<i32> {
    if args.json {
        let rows: Vec<FilterRow> = CATALOG
            .iter()
            .map(|entry| FilterRow {
                name: entry.name,
                signature: entry.signature,
                summary: entry.summary,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", format_filter_table());
    }
    Ok(exitcode::OK)
}

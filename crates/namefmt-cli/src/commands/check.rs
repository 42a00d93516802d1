//! Implementation of the `namefmt check` command.

use namefmt::{parse_template, validate_template};

use crate::output::diagnostic::PatternDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Pattern to validate
    #[arg(required = true)]
    pub pattern: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    if args.json {
        let validation = validate_template(&args.pattern);
        println!(
            "{}",
            serde_json::to_string_pretty(&validation).expect("JSON serialization should not fail")
        );
        return Ok(if validation.valid {
            exitcode::OK
        } else {
            exitcode::DATAERR
        });
    }

    match parse_template(&args.pattern) {
        Ok(tokens) => {
            println!("OK: {} token(s)", tokens.len());
            Ok(exitcode::OK)
        }
        Err(e) => {
            let diagnostic = PatternDiagnostic::from_parse_error(&args.pattern, &e);
            eprintln!("{:?}", miette::Report::new(diagnostic));
            Ok(exitcode::DATAERR)
        }
    }
}

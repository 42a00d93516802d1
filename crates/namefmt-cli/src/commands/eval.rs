//! Implementation of the `namefmt eval` command.

use namefmt::{evaluate_template, safe_evaluate_template, sanitize_filename, TemplateContext, Value};
use serde::Serialize;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Pattern to evaluate
    #[arg(required = true)]
    pub pattern: String,

    /// Variables in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Fall back to this string instead of failing on a bad pattern
    #[arg(long)]
    pub fallback: Option<String>,

    /// Run the result through filename sanitization
    #[arg(long)]
    pub sanitize: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    // Convert parameters to a TemplateContext
    let context: TemplateContext = args
        .params
        .into_iter()
        .map(|(k, v)| {
            // Try parsing as i64 first, fall back to String
            let value = if let Ok(n) = v.parse::<i64>() {
                Value::from(n)
            } else {
                Value::from(v)
            };
            (k, value)
        })
        .collect();

    let outcome = if let Some(fallback) = &args.fallback {
        Ok(safe_evaluate_template(
            &args.pattern,
            &context,
            Some(fallback),
        ))
    } else {
        evaluate_template(&args.pattern, &context)
    };

    match outcome {
        Ok(raw) => {
            let result = if args.sanitize {
                sanitize_filename(&raw)
            } else {
                raw
            };
            if args.json {
                let output = EvalResult { result };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("Evaluation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}

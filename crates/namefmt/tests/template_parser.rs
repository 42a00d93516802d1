//! Integration tests for pattern parsing.
//!
//! These tests validate the public API of the pattern parser against every
//! syntax form the filename generator accepts.

use namefmt::{parse_template, validate_template, FilterArg, ParseError, Token};

// =============================================================================
// Basic parsing
// =============================================================================

#[test]
fn test_pure_literal() {
    let tokens = parse_template("Hello, world!").unwrap();
    assert_eq!(tokens, vec![Token::Literal("Hello, world!".into())]);
}

#[test]
fn test_empty_pattern() {
    let tokens = parse_template("").unwrap();
    assert_eq!(tokens, vec![]);
}

#[test]
fn test_literal_preserves_whitespace() {
    let tokens = parse_template("  spaced   out  ").unwrap();
    assert_eq!(tokens, vec![Token::Literal("  spaced   out  ".into())]);
}

#[test]
fn test_simple_variable() {
    let tokens = parse_template("{videoTitle}").unwrap();
    assert_eq!(
        tokens,
        vec![Token::Variable {
            name: "videoTitle".into(),
            filters: vec![],
        }]
    );
}

#[test]
fn test_literal_and_variables_in_order() {
    let tokens = parse_template("{host}_{date}.{ext}").unwrap();
    assert_eq!(tokens.len(), 5);
    match &tokens[0] {
        Token::Variable { name, .. } => assert_eq!(name, "host"),
        Token::Literal(_) => panic!("expected variable"),
    }
    assert_eq!(tokens[1], Token::Literal("_".into()));
    match &tokens[2] {
        Token::Variable { name, .. } => assert_eq!(name, "date"),
        Token::Literal(_) => panic!("expected variable"),
    }
    assert_eq!(tokens[3], Token::Literal(".".into()));
    match &tokens[4] {
        Token::Variable { name, .. } => assert_eq!(name, "ext"),
        Token::Literal(_) => panic!("expected variable"),
    }
}

#[test]
fn test_adjacent_variables() {
    let tokens = parse_template("{a}{b}{c}").unwrap();
    assert_eq!(tokens.len(), 3);
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Variable { .. } => {}
            Token::Literal(_) => panic!("expected variable at index {i}"),
        }
    }
}

#[test]
fn test_unicode_literal() {
    let tokens = parse_template("Zerstöre die Karte").unwrap();
    assert_eq!(tokens, vec![Token::Literal("Zerstöre die Karte".into())]);
}

// =============================================================================
// Filter chains
// =============================================================================

#[test]
fn test_single_filter() {
    let tokens = parse_template("{title | lowercase}").unwrap();
    match &tokens[0] {
        Token::Variable { name, filters } => {
            assert_eq!(name, "title");
            assert_eq!(filters.len(), 1);
            assert_eq!(filters[0].name, "lowercase");
            assert!(filters[0].args.is_empty());
        }
        Token::Literal(_) => panic!("expected variable"),
    }
}

#[test]
fn test_chained_filters_preserve_order() {
    let tokens = parse_template("{title | trim | lowercase | slugify}").unwrap();
    match &tokens[0] {
        Token::Variable { filters, .. } => {
            let names: Vec<&str> = filters.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names, vec!["trim", "lowercase", "slugify"]);
        }
        Token::Literal(_) => panic!("expected variable"),
    }
}

#[test]
fn test_filter_with_string_args() {
    let tokens = parse_template(r#"{title | replace(" ", "_")}"#).unwrap();
    match &tokens[0] {
        Token::Variable { filters, .. } => {
            assert_eq!(filters[0].name, "replace");
            assert_eq!(
                filters[0].args,
                vec![FilterArg::Str(" ".into()), FilterArg::Str("_".into())]
            );
        }
        Token::Literal(_) => panic!("expected variable"),
    }
}

#[test]
fn test_filter_with_mixed_args() {
    let tokens = parse_template(r#"{title | truncate(10, "...")}"#).unwrap();
    match &tokens[0] {
        Token::Variable { filters, .. } => {
            assert_eq!(
                filters[0].args,
                vec![FilterArg::Int(10), FilterArg::Str("...".into())]
            );
        }
        Token::Literal(_) => panic!("expected variable"),
    }
}

#[test]
fn test_negative_integer_arg() {
    let tokens = parse_template("{title | substring(-3, 5)}").unwrap();
    match &tokens[0] {
        Token::Variable { filters, .. } => {
            assert_eq!(
                filters[0].args,
                vec![FilterArg::Int(-3), FilterArg::Int(5)]
            );
        }
        Token::Literal(_) => panic!("expected variable"),
    }
}

#[test]
fn test_single_quoted_args() {
    let tokens = parse_template("{title | replace(' ', '-')}").unwrap();
    match &tokens[0] {
        Token::Variable { filters, .. } => {
            assert_eq!(
                filters[0].args,
                vec![FilterArg::Str(" ".into()), FilterArg::Str("-".into())]
            );
        }
        Token::Literal(_) => panic!("expected variable"),
    }
}

#[test]
fn test_escaped_quote_round_trips() {
    let tokens = parse_template(r#"{title | replace("\"", "''")}"#).unwrap();
    match &tokens[0] {
        Token::Variable { filters, .. } => {
            assert_eq!(
                filters[0].args,
                vec![FilterArg::Str("\"".into()), FilterArg::Str("''".into())]
            );
        }
        Token::Literal(_) => panic!("expected variable"),
    }
}

#[test]
fn test_escaped_backslash() {
    let tokens = parse_template(r#"{title | replace("\\", "-")}"#).unwrap();
    match &tokens[0] {
        Token::Variable { filters, .. } => {
            assert_eq!(filters[0].args[0], FilterArg::Str("\\".into()));
        }
        Token::Literal(_) => panic!("expected variable"),
    }
}

#[test]
fn test_pipe_inside_quoted_arg() {
    let tokens = parse_template(r#"{title | replace("|", "-") | trim}"#).unwrap();
    match &tokens[0] {
        Token::Variable { filters, .. } => {
            assert_eq!(filters.len(), 2);
            assert_eq!(filters[0].args[0], FilterArg::Str("|".into()));
            assert_eq!(filters[1].name, "trim");
        }
        Token::Literal(_) => panic!("expected variable"),
    }
}

#[test]
fn test_empty_arg_list() {
    let tokens = parse_template("{title | trim()}").unwrap();
    match &tokens[0] {
        Token::Variable { filters, .. } => {
            assert_eq!(filters[0].name, "trim");
            assert!(filters[0].args.is_empty());
        }
        Token::Literal(_) => panic!("expected variable"),
    }
}

// =============================================================================
// Whitespace insensitivity
// =============================================================================

#[test]
fn test_whitespace_around_name() {
    let tokens = parse_template("{ videoTitle }").unwrap();
    match &tokens[0] {
        Token::Variable { name, .. } => assert_eq!(name, "videoTitle"),
        Token::Literal(_) => panic!("expected variable"),
    }
}

#[test]
fn test_whitespace_around_pipes_and_commas() {
    let tokens = parse_template(r#"{ title |  truncate( 10 ,  "..." ) | trim }"#).unwrap();
    match &tokens[0] {
        Token::Variable { filters, .. } => {
            assert_eq!(filters.len(), 2);
            assert_eq!(filters[0].name, "truncate");
            assert_eq!(
                filters[0].args,
                vec![FilterArg::Int(10), FilterArg::Str("...".into())]
            );
        }
        Token::Literal(_) => panic!("expected variable"),
    }
}

// =============================================================================
// Graceful degradation
// =============================================================================

#[test]
fn test_unmatched_open_brace_is_literal() {
    let tokens = parse_template("file_{name").unwrap();
    assert_eq!(tokens, vec![Token::Literal("file_{name".into())]);
}

#[test]
fn test_unmatched_open_brace_after_group() {
    let tokens = parse_template("{a} {").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1], Token::Literal(" {".into()));
}

#[test]
fn test_stray_close_brace_is_literal() {
    let tokens = parse_template("a}b").unwrap();
    assert_eq!(tokens, vec![Token::Literal("a}b".into())]);
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn test_numeric_leading_variable_name() {
    let err = parse_template("{123invalid}").unwrap_err();
    assert!(
        matches!(err, ParseError::InvalidVariableName { ref name, .. } if name == "123invalid"),
        "expected InvalidVariableName, got: {err:?}"
    );
}

#[test]
fn test_dotted_variable_name_rejected() {
    let err = parse_template("{window.location}").unwrap_err();
    assert!(matches!(err, ParseError::InvalidVariableName { .. }));
}

#[test]
fn test_empty_group_rejected() {
    let err = parse_template("{}").unwrap_err();
    assert!(matches!(err, ParseError::InvalidVariableName { .. }));
}

#[test]
fn test_hyphenated_filter_name_rejected() {
    let err = parse_template("{x | bad-name}").unwrap_err();
    assert!(matches!(err, ParseError::InvalidFilterSyntax { .. }));
}

#[test]
fn test_empty_filter_segment_rejected() {
    let err = parse_template("{x | }").unwrap_err();
    assert!(matches!(err, ParseError::InvalidFilterSyntax { .. }));
}

#[test]
fn test_unterminated_arg_list_rejected() {
    let err = parse_template("{x | truncate(10}").unwrap_err();
    assert!(matches!(err, ParseError::InvalidFilterSyntax { .. }));
}

#[test]
fn test_bare_word_arg_rejected() {
    let err = parse_template("{x | replace(unquoted, bad)}").unwrap_err();
    assert!(matches!(err, ParseError::InvalidFilterSyntax { .. }));
}

#[test]
fn test_error_carries_group_offset() {
    let err = parse_template("prefix {9bad}").unwrap_err();
    match err {
        ParseError::InvalidVariableName { offset, .. } => assert_eq!(offset, 7),
        other => panic!("expected InvalidVariableName, got: {other:?}"),
    }
}

// =============================================================================
// Length ceiling
// =============================================================================

#[test]
fn test_pattern_at_ceiling_parses() {
    let pattern = "x".repeat(1000);
    assert!(parse_template(&pattern).is_ok());
}

#[test]
fn test_pattern_over_ceiling_rejected() {
    let pattern = "x".repeat(1001);
    let err = parse_template(&pattern).unwrap_err();
    assert!(
        matches!(err, ParseError::TooLong { length: 1001, max: 1000 }),
        "expected TooLong, got: {err:?}"
    );
}

// =============================================================================
// validate_template
// =============================================================================

#[test]
fn test_validate_ok() {
    let validation = validate_template("{title | slugify}.{ext}");
    assert!(validation.valid);
    assert!(validation.error.is_none());
}

#[test]
fn test_validate_reports_error_text() {
    let validation = validate_template("{123invalid}");
    assert!(!validation.valid);
    let error = validation.error.expect("error text");
    assert!(error.contains("123invalid"));
}

#[test]
fn test_validate_serializes_for_ui() {
    let value = serde_json::to_value(validate_template("{ok}")).unwrap();
    assert_eq!(value, serde_json::json!({ "valid": true }));
}

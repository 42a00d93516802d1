//! Tests for evaluation error kinds and typo suggestions.

use namefmt::{compute_suggestions, context, evaluate_template, EvalError, ParseError};

// =============================================================================
// Parse errors surface through the strict evaluator
// =============================================================================

#[test]
fn invalid_variable_name_kind() {
    let err = evaluate_template("{123invalid}", &context! {}).unwrap_err();
    assert!(
        matches!(
            err,
            EvalError::Parse(ParseError::InvalidVariableName { ref name, .. }) if name == "123invalid"
        ),
        "expected InvalidVariableName, got: {err:?}"
    );
}

#[test]
fn oversized_pattern_kind() {
    let pattern = "y".repeat(2000);
    let err = evaluate_template(&pattern, &context! {}).unwrap_err();
    assert!(matches!(err, EvalError::Parse(ParseError::TooLong { .. })));
}

#[test]
fn invalid_filter_syntax_kind() {
    let ctx = context! { "x" => "v" };
    let err = evaluate_template("{x | 42bad}", &ctx).unwrap_err();
    assert!(matches!(
        err,
        EvalError::Parse(ParseError::InvalidFilterSyntax { .. })
    ));
}

// =============================================================================
// Unknown filters are always a hard error in strict mode
// =============================================================================

#[test]
fn unknown_filter_names_the_filter() {
    let ctx = context! { "x" => "v" };
    let err = evaluate_template("{x | frobnicate}", &ctx).unwrap_err();
    assert!(
        matches!(err, EvalError::UnknownFilter { ref name, .. } if name == "frobnicate"),
        "expected UnknownFilter, got: {err:?}"
    );
}

#[test]
fn unknown_filter_suggests_close_names() {
    let ctx = context! { "x" => "v" };
    let err = evaluate_template("{x | lowercas}", &ctx).unwrap_err();
    match err {
        EvalError::UnknownFilter { suggestions, .. } => {
            assert_eq!(suggestions, vec!["lowercase".to_string()]);
        }
        other => panic!("expected UnknownFilter, got: {other:?}"),
    }
}

#[test]
fn unknown_filter_far_from_catalog_has_no_suggestions() {
    let ctx = context! { "x" => "v" };
    let err = evaluate_template("{x | zzzzzzzz}", &ctx).unwrap_err();
    match err {
        EvalError::UnknownFilter { suggestions, .. } => assert!(suggestions.is_empty()),
        other => panic!("expected UnknownFilter, got: {other:?}"),
    }
}

#[test]
fn unknown_filter_aborts_before_later_filters() {
    // The chain stops at the unknown name; it is never silently skipped.
    let ctx = context! { "x" => "v" };
    let err = evaluate_template("{x | nope | uppercase}", &ctx).unwrap_err();
    assert!(matches!(err, EvalError::UnknownFilter { .. }));
}

// =============================================================================
// Argument contract violations
// =============================================================================

#[test]
fn string_where_integer_required() {
    let ctx = context! { "x" => "value" };
    let err = evaluate_template(r#"{x | truncate("invalid")}"#, &ctx).unwrap_err();
    assert!(
        matches!(err, EvalError::ArgumentType { ref filter, .. } if filter == "truncate"),
        "expected ArgumentType, got: {err:?}"
    );
}

#[test]
fn negative_length_rejected() {
    let ctx = context! { "x" => "value" };
    let err = evaluate_template("{x | truncate(-1)}", &ctx).unwrap_err();
    assert!(matches!(err, EvalError::ArgumentType { .. }));
}

#[test]
fn missing_required_argument() {
    let ctx = context! { "x" => "value" };
    let err = evaluate_template("{x | truncate}", &ctx).unwrap_err();
    assert!(
        matches!(err, EvalError::ArgumentCount { got: 0, .. }),
        "expected ArgumentCount, got: {err:?}"
    );
}

#[test]
fn too_many_arguments() {
    let ctx = context! { "x" => "value" };
    let err = evaluate_template(r#"{x | replace("a", "b", "c")}"#, &ctx).unwrap_err();
    assert!(matches!(err, EvalError::ArgumentCount { got: 3, .. }));
}

#[test]
fn zero_arg_filter_rejects_arguments() {
    let ctx = context! { "x" => "value" };
    let err = evaluate_template("{x | trim(1)}", &ctx).unwrap_err();
    assert!(matches!(err, EvalError::ArgumentCount { got: 1, .. }));
}

// =============================================================================
// compute_suggestions
// =============================================================================

#[test]
fn compute_suggestions_finds_similar_names() {
    let available = ["one", "other", "few", "many"];

    // "on" is close to "one" (distance 1)
    let suggestions = compute_suggestions("on", available);
    assert_eq!(suggestions, vec!["one"]);

    // "oter" is close to "other" (distance 1), also close to "one" (distance 2)
    let suggestions = compute_suggestions("oter", available);
    assert!(suggestions.contains(&"other".to_string()));
    assert_eq!(suggestions[0], "other"); // closest match first

    // "xyz" has no close matches
    let suggestions = compute_suggestions("xyz", available);
    assert!(suggestions.is_empty());
}

#[test]
fn compute_suggestions_limits_to_three() {
    let available = ["item0", "item1", "item2", "item3", "item4"];
    let suggestions = compute_suggestions("item", available);
    assert!(suggestions.len() <= 3);
}

#[test]
fn compute_suggestions_skips_exact_match() {
    // Distance zero is excluded; an exact match is not a typo.
    let suggestions = compute_suggestions("trim", ["trim"]);
    assert!(suggestions.is_empty());
}

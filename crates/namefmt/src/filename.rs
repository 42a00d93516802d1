//! Filesystem-safe filename post-processing.
//!
//! The evaluator's raw output goes through [`sanitize_filename`] before it
//! reaches a download API. The rules run in a fixed order; the final name
//! is never empty and never longer than [`MAX_FILENAME_LEN`] characters.

/// Maximum filename length, in characters.
pub const MAX_FILENAME_LEN: usize = 255;

/// Name substituted when sanitization leaves nothing.
pub const DEFAULT_FILENAME: &str = "unnamed";

/// Characters that cannot appear in a filename on common filesystems.
pub(crate) fn is_illegal_char(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') || c.is_control()
}

/// Bracket characters dropped outright rather than replaced, so
/// `Movie (2024)` becomes `Movie_2024` and not `Movie__2024_`.
fn is_dropped_char(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '【' | '】')
}

/// Sanitize a raw evaluator output into a filesystem-safe filename.
///
/// Rules, in order:
/// 1. Replace each illegal character (`< > : " / \ | ? *` and controls)
///    with `_`; drop bracket characters.
/// 2. Collapse whitespace runs to a single `_`.
/// 3. Collapse `_` runs to a single `_`.
/// 4. Strip leading `.` characters (hidden-file convention); internal and
///    extension dots are preserved.
/// 5. Strip leading and trailing `_`.
/// 6. Trim surrounding whitespace.
/// 7. An empty result becomes [`DEFAULT_FILENAME`].
/// 8. A result over [`MAX_FILENAME_LEN`] characters is truncated to exactly
///    that length, preserving the extension (text after the final `.`).
///
/// # Example
///
/// ```
/// use namefmt::sanitize_filename;
///
/// assert_eq!(
///     sanitize_filename(r#"Movie (2024) - "The Best" [1080p].mp4"#),
///     "Movie_2024_-_The_Best_1080p.mp4",
/// );
/// assert_eq!(sanitize_filename("???"), "unnamed");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    // Rules 1-2 in one pass: brackets drop, whitespace runs and illegal
    // characters become '_'.
    let mut replaced = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if is_dropped_char(c) {
            continue;
        }
        if c.is_whitespace() {
            if !in_whitespace {
                replaced.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        replaced.push(if is_illegal_char(c) { '_' } else { c });
    }

    // Rule 3: collapse '_' runs.
    let mut collapsed = String::with_capacity(replaced.len());
    let mut prev_underscore = false;
    for c in replaced.chars() {
        if c == '_' {
            if !prev_underscore {
                collapsed.push(c);
            }
            prev_underscore = true;
        } else {
            collapsed.push(c);
            prev_underscore = false;
        }
    }

    // Rules 4-6.
    let trimmed = collapsed.trim_start_matches('.').trim_matches('_').trim();

    // Rule 7.
    if trimmed.is_empty() {
        return DEFAULT_FILENAME.to_string();
    }

    // Rule 8.
    truncate_preserving_extension(trimmed)
}

/// Truncate to [`MAX_FILENAME_LEN`] characters, keeping the extension.
fn truncate_preserving_extension(name: &str) -> String {
    let total = name.chars().count();
    if total <= MAX_FILENAME_LEN {
        return name.to_string();
    }

    match name.rfind('.') {
        Some(dot) if dot > 0 => {
            let ext = &name[dot..];
            let ext_chars = ext.chars().count();
            if ext_chars >= MAX_FILENAME_LEN {
                // Extension alone exceeds the limit; fall back to a plain cut.
                name.chars().take(MAX_FILENAME_LEN).collect()
            } else {
                let stem: String = name.chars().take(MAX_FILENAME_LEN - ext_chars).collect();
                format!("{stem}{ext}")
            }
        }
        _ => name.chars().take(MAX_FILENAME_LEN).collect(),
    }
}

//! Line-range splice: the single document mutation the engine performs.
//!
//! A splice replaces an inclusive line range of a base document with the
//! lines of a replacement string, producing a whole new document. The engine
//! re-applies it on every stream chunk against the same frozen base, so the
//! operation must be a function of its inputs alone — re-application with a
//! longer replacement yields the same result as a single direct splice.

/// Split a document into lines on `\n`.
///
/// Mirrors the line discipline used everywhere in the engine: a trailing
/// newline yields a trailing empty line, and the empty string is one empty
/// line. `split_lines(s).join("\n") == s` for all `s`.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Replace lines `start_line..=end_line` of `base` with the lines of
/// `replacement`, returning the new document.
///
/// Indices are 0-based and inclusive; both fence lines of a trigger region
/// are inside the range, so the replacement fully supplants the fenced
/// block. Out-of-range indices are clamped to the base document rather than
/// panicking — a stale trigger then degrades to replacing the tail.
#[must_use]
pub fn splice_lines(
    base: &str,
    start_line: usize,
    end_line: usize,
    replacement: &str,
) -> String {
    let lines = split_lines(base);
    let start = start_line.min(lines.len());
    let resume = end_line.saturating_add(1).max(start).min(lines.len());

    let mut out: Vec<&str> =
        Vec::with_capacity(start + (lines.len() - resume) + replacement.len() / 16 + 1);
    out.extend_from_slice(&lines[..start]);
    out.extend(replacement.split('\n'));
    out.extend_from_slice(&lines[resume..]);
    out.join("\n")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

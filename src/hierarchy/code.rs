//! Hierarchical code arithmetic.
//!
//! A code is a sequence of segments joined by `.`; its depth is the segment
//! count. Ancestry is a prefix test on segment boundaries only.

use crate::error::{CoreError, CoreResult};
use crate::models::constants::CODE_SEPARATOR;

/// Check the segment format: non-empty, no empty segments.
pub fn validate_code(code: &str) -> CoreResult<()> {
    if code.is_empty() {
        return Err(CoreError::MalformedCode {
            code: code.to_string(),
            reason: "empty code",
        });
    }
    if code.split(CODE_SEPARATOR).any(str::is_empty) {
        return Err(CoreError::MalformedCode {
            code: code.to_string(),
            reason: "empty segment",
        });
    }
    Ok(())
}

/// Number of segments in `code`.
pub fn depth(code: &str) -> CoreResult<usize> {
    validate_code(code)?;
    Ok(code.split(CODE_SEPARATOR).count())
}

/// True iff `b` lies strictly below `a`, i.e. `b` starts with `a` followed by `.`.
///
/// `AUT.AAA.AA` is not an ancestor of `AUT.AAA.AAC.AAH` even though it is a raw
/// prefix of it. Use [`Thesaurus::find_by_code_prefix`] for the raw match.
///
/// [`Thesaurus::find_by_code_prefix`]: super::Thesaurus::find_by_code_prefix
pub fn is_ancestor(a: &str, b: &str) -> CoreResult<bool> {
    validate_code(a)?;
    validate_code(b)?;
    Ok(is_strict_prefix(a, b))
}

/// Boundary-safe prefix test on already validated codes.
pub(crate) fn is_strict_prefix(a: &str, b: &str) -> bool {
    b.len() > a.len() && b.starts_with(a) && b[a.len()..].starts_with(CODE_SEPARATOR)
}

/// Code of the immediate parent, or `None` for a single-segment code.
pub fn parent_code(code: &str) -> CoreResult<Option<&str>> {
    validate_code(code)?;
    Ok(code.rsplit_once(CODE_SEPARATOR).map(|(parent, _)| parent))
}

/// All proper ancestor codes, root first.
pub fn ancestor_codes(code: &str) -> CoreResult<Vec<&str>> {
    validate_code(code)?;
    Ok(code
        .match_indices(CODE_SEPARATOR)
        .map(|(idx, _)| &code[..idx])
        .collect())
}

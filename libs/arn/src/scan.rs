//! Delimiter scans over raw ARN text.
//!
//! Each scan returns a byte range into the string it was given. `:` and `/`
//! are ASCII, so every range lands on a char boundary and can be used to
//! slice the input `&str` directly.

use std::ops::Range;

use crate::error::ArnError;
use crate::FIELDS;

/// Literal prefix of every ARN.
pub(crate) const PREFIX: &str = "arn:";

/// Index of the resource field.
pub(crate) const RESOURCE: usize = FIELDS - 1;

/// Returns true if `s` has the prefix and enough colons for every field.
pub(crate) fn is_valid(s: &str) -> bool {
    s.starts_with(PREFIX) && s.bytes().filter(|&b| b == b':').count() >= FIELDS
}

/// Returns the range of field `index`.
///
/// Fields below [`RESOURCE`] end at the next colon. The resource field and
/// any higher index run to the end of the string, so index 5 is the resource
/// text after its own first colon.
pub(crate) fn field(s: &str, index: usize) -> Result<Range<usize>, ArnError> {
    if !s.starts_with(PREFIX) {
        return Err(ArnError::invalid(s));
    }
    let mut start = PREFIX.len();
    let mut seen = 0;
    for (k, b) in s.bytes().enumerate().skip(PREFIX.len()) {
        if b != b':' {
            continue;
        }
        if seen == index {
            return Ok(start..k);
        }
        seen += 1;
        if index >= RESOURCE && seen == index {
            return Ok(k + 1..s.len());
        }
        start = k + 1;
    }
    Err(ArnError::invalid_field(index, s))
}

/// Returns the offset where the resource field begins.
fn resource_start(s: &str) -> Result<usize, ArnError> {
    field(s, RESOURCE)
        .map(|r| r.start)
        .map_err(|_| ArnError::invalid(s))
}

/// Returns the range of the resource type: the text before the first `/` or
/// `:`. The range is empty if the resource contains neither.
pub(crate) fn resource_type(s: &str) -> Result<Range<usize>, ArnError> {
    let start = resource_start(s)?;
    Ok(match s[start..].find(['/', ':']) {
        Some(n) => start..start + n,
        None => start..start,
    })
}

/// Returns the range between and including the first and last `/` that
/// follow the last `:`, or `None` if there is no such `/`.
pub(crate) fn path(s: &str) -> Result<Option<Range<usize>>, ArnError> {
    resource_start(s)?;
    let mut found: Option<Range<usize>> = None;
    for (i, b) in s.bytes().enumerate().rev() {
        match b {
            b'/' => {
                found = Some(match found {
                    Some(r) => i..r.end,
                    None => i..i + 1,
                });
            }
            b':' => return Ok(found),
            _ => {}
        }
    }
    Err(ArnError::invalid(s))
}

/// Returns the offset where the resource name begins: just past the last `/`
/// or `:`.
pub(crate) fn name_start(s: &str) -> Result<usize, ArnError> {
    resource_start(s)?;
    s.rfind(['/', ':'])
        .map(|i| i + 1)
        .ok_or_else(|| ArnError::invalid(s))
}

/// Returns the leading segment of `s` up to the first `/` or `:`.
pub(crate) fn leading_type(s: &str) -> &str {
    match s.find(['/', ':']) {
        Some(n) => &s[..n],
        None => s,
    }
}

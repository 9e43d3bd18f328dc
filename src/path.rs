//! # Path Segments
//!
//! Segment-level helpers for URL path templates such as `/pets/{id}/toys`.
//!
//! Every path is split once into its `/`-delimited segments, the grouping code
//! works on segment slices, and paths are rejoined only when a rewritten path is
//! stored back on an operation. This keeps separator handling in one place.
//!
//! ```rust
//! use opgroup::path::{segments, strip_leading_segments};
//!
//! assert_eq!(segments("/api/v1/pets"), vec!["api", "v1", "pets"]);
//! assert_eq!(strip_leading_segments("/api/v1/pets", 2), "/pets");
//! ```

/// Remove a single leading `/`, if present.
#[must_use]
pub fn strip_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Split a path template into its segments after dropping one leading `/`.
///
/// The root path `/` and the empty string have no segments. Empty segments
/// produced by doubled or trailing slashes are kept so that rejoining is lossless.
#[must_use]
pub fn segments(path: &str) -> Vec<&str> {
    let trimmed = strip_leading_slash(path);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').collect()
}

/// First segment of a path, or `""` for the root path.
#[must_use]
pub fn first_segment(path: &str) -> &str {
    let trimmed = strip_leading_slash(path);
    match trimmed.find('/') {
        Some(pos) => &trimmed[..pos],
        None => trimmed,
    }
}

/// Join segments back into a relative base path (`api/v1`).
#[must_use]
pub fn join_segments(segments: &[&str]) -> String {
    segments.join("/")
}

/// Rebuild an absolute path from the segments left after stripping a prefix.
///
/// No remaining segments yields the empty string, which callers read as
/// "the operation sits directly on its base path".
#[must_use]
pub fn rebuild_path(remaining: &[&str]) -> String {
    if remaining.is_empty() {
        String::new()
    } else {
        format!("/{}", remaining.join("/"))
    }
}

/// Drop the first `count` segments of `path` and rebuild the remainder.
///
/// Paths without a leading `/` keep their shape: the remainder is still
/// returned with a leading `/` because it is always relative to the dropped
/// prefix. A `count` larger than the segment count yields `""`.
#[must_use]
pub fn strip_leading_segments(path: &str, count: usize) -> String {
    if count == 0 {
        return path.to_string();
    }
    let segs = segments(path);
    let start = count.min(segs.len());
    rebuild_path(&segs[start..])
}

/// Remove the leading `/<segment>` from `path` exactly once.
///
/// Only a whole-segment match counts: `/petstore` is not stripped by `pets`.
/// Paths that do not start with `/` are returned unchanged. Returns `None`
/// when nothing was stripped.
#[must_use]
pub fn strip_first_segment<'a>(path: &'a str, segment: &str) -> Option<&'a str> {
    let rest = path.strip_prefix('/')?.strip_prefix(segment)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

use crate::operation::Operation;
use crate::path::{join_segments, segments, strip_leading_segments};
use tracing::debug;

/// Longest segment-aligned prefix shared by every path in `paths`.
///
/// The first path drives the scan: each of its segments is accepted while every
/// other path carries the same segment at the same position. The scan stops at
/// the first mismatch, when another path runs out of segments, or at an empty
/// segment (so the result never contains `//` and never ends in `/`).
///
/// With a single path the whole path is returned (`/widgets/{id}` →
/// `widgets/{id}`). Generated resources rely on that, so it stays.
///
/// ```rust
/// use opgroup::grouping::resolve_common_prefix;
///
/// assert_eq!(resolve_common_prefix(&["/api/v1/pets", "/api/v1/owners"]), "api/v1");
/// assert_eq!(resolve_common_prefix(&["/pets", "/owners"]), "");
/// assert_eq!(resolve_common_prefix::<&str>(&[]), "");
/// ```
#[must_use]
pub fn resolve_common_prefix<S: AsRef<str>>(paths: &[S]) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };

    let first = segments(first.as_ref());
    let others: Vec<Vec<&str>> = rest.iter().map(|p| segments(p.as_ref())).collect();

    let shared = first
        .iter()
        .enumerate()
        .take_while(|(pos, segment)| {
            !segment.is_empty()
                && others
                    .iter()
                    .all(|other| other.get(*pos).is_some_and(|s| s == *segment))
        })
        .count();

    join_segments(&first[..shared])
}

/// Strip `base_path` from every operation and record it as their base name.
///
/// An empty base path leaves paths and base names alone and only refreshes the
/// subresource flag.
pub fn apply_base_path<'a, I>(operations: I, base_path: &str)
where
    I: IntoIterator<Item = &'a mut Operation>,
{
    let depth = segments(base_path).len();
    for operation in operations {
        if depth > 0 {
            operation.path = strip_leading_segments(&operation.path, depth);
            operation.base_name = base_path.to_string();
        }
        operation.mark_subresource();
        debug!(
            operation_id = %operation.operation_id,
            path = %operation.path,
            subresource = operation.subresource_operation,
            "Applied base path"
        );
    }
}

use super::groups::OperationGroups;
use super::mode::GroupingMode;
use crate::operation::Operation;
use crate::path::{first_segment, strip_first_segment};
use tracing::debug;

/// Key for operations that have no usable tag or first path segment.
pub const DEFAULT_GROUP: &str = "default";

/// Partition `operations` into resource groups.
///
/// Every operation lands in exactly one group and groups keep input order.
///
/// In [`GroupingMode::ByTag`] the tag is the key and paths are left alone;
/// base-path extraction happens afterwards over the whole set (see
/// [`crate::grouping::process_operations`]). In [`GroupingMode::ByPathSegment`]
/// the first path segment is the key and is stripped from the path as the
/// operation is assigned.
#[must_use]
pub fn group(operations: Vec<Operation>, mode: GroupingMode) -> OperationGroups {
    let mut groups = OperationGroups::new();
    for mut operation in operations {
        let key = match mode {
            GroupingMode::ByTag => tag_key(&operation),
            GroupingMode::ByPathSegment => assign_path_segment(&mut operation),
        };
        debug!(
            group = %key,
            method = %operation.method,
            path = %operation.path,
            "Assigned operation to group"
        );
        groups.push(&key, operation);
    }
    debug!(
        mode = %mode,
        groups = groups.len(),
        operations = groups.operation_count(),
        "Grouped operations"
    );
    groups
}

fn tag_key(operation: &Operation) -> String {
    match operation.tag.as_deref() {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => DEFAULT_GROUP.to_string(),
    }
}

/// Resolve the path-segment group key for `operation` and rewrite it in place.
fn assign_path_segment(operation: &mut Operation) -> String {
    let segment = first_segment(&operation.path).to_string();
    let key = if segment.is_empty() {
        DEFAULT_GROUP.to_string()
    } else {
        strip_group_segment(operation, &segment);
        operation.mark_subresource();
        segment
    };
    operation.base_name.clone_from(&key);
    key
}

/// Remove the leading `/<key>` segment from the operation path, once.
///
/// A path whose first segment is no longer `key` is left untouched, so
/// applying this again after a rewrite is a no-op unless the next segment
/// happens to repeat the key.
pub fn strip_group_segment(operation: &mut Operation, key: &str) {
    if let Some(rest) = strip_first_segment(&operation.path, key) {
        operation.path = rest.to_string();
    }
}

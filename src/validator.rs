//! Structural checks on operation records before grouping.
//!
//! Grouping itself never fails: an empty path simply lands in the `default`
//! group. These checks exist so that a malformed manifest is reported instead
//! of silently producing odd resource classes.

use crate::grouping::GroupingMode;
use crate::operation::Operation;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub location: String,
    pub kind: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.location, self.message)
    }
}

/// Check `operations` for problems that would make grouping output misleading.
#[must_use]
pub fn validate_operations(operations: &[Operation], mode: GroupingMode) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut routes = HashSet::new();
    let mut ids = HashSet::new();

    for (index, operation) in operations.iter().enumerate() {
        let location = format!("operations[{index}] {}", operation.location());

        if operation.path.is_empty() {
            issues.push(ValidationIssue::new(
                &location,
                "EmptyPath",
                "Operation has an empty path and will be placed in the default group",
            ));
        } else if !operation.path.starts_with('/') {
            issues.push(ValidationIssue::new(
                &location,
                "MissingLeadingSlash",
                format!("Path '{}' should start with '/'", operation.path),
            ));
        }

        if !routes.insert((operation.method.clone(), operation.path.clone())) {
            issues.push(ValidationIssue::new(
                &location,
                "DuplicateRoute",
                "Method and path are already declared by another operation",
            ));
        }

        if !operation.operation_id.is_empty() && !ids.insert(operation.operation_id.as_str()) {
            issues.push(ValidationIssue::new(
                &location,
                "DuplicateOperationId",
                format!("operationId '{}' is used more than once", operation.operation_id),
            ));
        }

        if mode == GroupingMode::ByTag && operation.tag.as_deref().map_or(true, str::is_empty) {
            issues.push(ValidationIssue::new(
                &location,
                "MissingTag",
                "Operation has no tag and will be placed in the default group",
            ));
        }
    }

    issues
}

pub fn print_issues(issues: &[ValidationIssue]) {
    eprintln!("\n❌ Operations manifest validation failed. {} issue(s) found:\n", issues.len());
    for issue in issues {
        eprintln!("{issue}");
    }
    eprintln!("\nPlease fix the issues in your operations manifest before generating.\n");
}

/// Turn a non-empty issue list into an error.
pub fn fail_if_issues(issues: &[ValidationIssue]) -> anyhow::Result<()> {
    if issues.is_empty() {
        return Ok(());
    }
    print_issues(issues);
    anyhow::bail!("{} validation issue(s) found", issues.len())
}

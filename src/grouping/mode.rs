use std::fmt;
use std::str::FromStr;

/// How operations are partitioned into resource groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingMode {
    /// Group by the operation's declared tag; one shared base path is
    /// resolved across the whole operation set afterwards.
    ByTag,
    /// Group by the first path segment and strip it from each path inline.
    #[default]
    ByPathSegment,
}

impl GroupingMode {
    /// Pick the mode matching a `useTags` generator flag.
    #[must_use]
    pub fn from_use_tags(use_tags: bool) -> Self {
        if use_tags {
            GroupingMode::ByTag
        } else {
            GroupingMode::ByPathSegment
        }
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingMode::ByTag => write!(f, "tags"),
            GroupingMode::ByPathSegment => write!(f, "path"),
        }
    }
}

/// Returned when a grouping mode name is not one of the two recognised values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGroupingMode {
    /// The rejected input
    pub value: String,
}

impl fmt::Display for UnknownGroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown grouping mode '{}'. Expected 'tags' or 'path'",
            self.value
        )
    }
}

impl std::error::Error for UnknownGroupingMode {}

impl FromStr for GroupingMode {
    type Err = UnknownGroupingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tags" | "tag" | "by-tag" => Ok(GroupingMode::ByTag),
            "path" | "path-segment" | "by-path" => Ok(GroupingMode::ByPathSegment),
            _ => Err(UnknownGroupingMode {
                value: s.to_string(),
            }),
        }
    }
}

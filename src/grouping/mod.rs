//! # Grouping Module
//!
//! Partitions API operations into resource groups and rewrites each path
//! relative to its group's base path, ready for a template stage that emits
//! one resource class per group.
//!
//! ## Policies
//!
//! - **By path segment** (default) - the first path segment is the group key
//!   and is stripped from the path inline: `/pets/{id}` lands in `pets` as
//!   `/{id}`. Root paths fall into the `default` group untouched.
//! - **By tag** - the declared tag is the group key. A single base path is then
//!   resolved across *all* operations and stripped from every path:
//!   `/api/v1/pets` + `/api/v1/owners` share `api/v1`.
//!
//! ## Usage
//!
//! ```rust
//! use http::Method;
//! use opgroup::grouping::process_operations;
//! use opgroup::operation::Operation;
//! use opgroup::options::CodegenOptions;
//!
//! let operations = vec![
//!     Operation::new("get_pet", Method::GET, "/pets/{id}"),
//!     Operation::new("list_owners", Method::GET, "/owners"),
//! ];
//! let processed = process_operations(operations, &CodegenOptions::default());
//!
//! let keys: Vec<&str> = processed.groups.keys().collect();
//! assert_eq!(keys, ["pets", "owners"]);
//! assert_eq!(processed.groups.get("pets").unwrap()[0].path, "/{id}");
//! assert_eq!(processed.api_base_path, None);
//! ```

mod grouper;
mod groups;
mod mode;
mod prefix;
mod process;

pub use grouper::{group, strip_group_segment, DEFAULT_GROUP};
pub use groups::{OperationGroup, OperationGroups};
pub use mode::{GroupingMode, UnknownGroupingMode};
pub use prefix::{apply_base_path, resolve_common_prefix};
pub use process::{
    process_operations, ProcessedOperations, API_BASE_PATH_KEY, BASE_NAME_KEY, GROUPS_KEY,
};

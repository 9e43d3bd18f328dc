//! # opgroup
//!
//! **opgroup** is the resource-grouping stage of an API-specification-to-server
//! code generator. It takes the operations a spec parser produced (HTTP method,
//! path template, optional tag) and decides which resource class each one
//! belongs to, rewriting every path relative to that resource's base path.
//!
//! ## Overview
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Parser as Spec parser
//!     participant Manifest as manifest::load_manifest
//!     participant Options as options::resolve_options
//!     participant Group as grouping::process_operations
//!     participant Render as Template renderer
//!
//!     Parser->>Manifest: operations.yaml
//!     Manifest-->>Group: Vec<Operation>
//!     Options-->>Group: CodegenOptions { use_tags, .. }
//!     alt use_tags
//!         Group->>Group: resolve_common_prefix(all paths)
//!         Group->>Group: apply_base_path
//!         Group->>Group: group by tag
//!     else
//!         Group->>Group: group by first path segment
//!     end
//!     Group-->>Render: template_context()<br/>groups + apiBasePath
//! ```
//!
//! ## Modules
//!
//! - **[`grouping`]** - the grouper, the common-prefix resolver and the
//!   orchestration producing [`ProcessedOperations`]
//! - **[`operation`]** - the [`Operation`] record
//! - **[`path`]** - segment-level path helpers
//! - **[`manifest`]** - YAML/JSON operations manifest loading
//! - **[`options`]** - `opgroup.toml` generator flags
//! - **[`validator`]** - structural checks on operation records
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - the `opgroup` command line
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use opgroup::{process_operations, CodegenOptions, Operation};
//!
//! let operations = vec![
//!     Operation::new("list_pets", Method::GET, "/api/v1/pets").with_tag("pets"),
//!     Operation::new("list_owners", Method::GET, "/api/v1/owners").with_tag("owners"),
//! ];
//! let processed = process_operations(operations, &CodegenOptions::with_tags());
//!
//! assert_eq!(processed.api_base_path.as_deref(), Some("api/v1"));
//! assert_eq!(processed.groups.get("pets").unwrap()[0].path, "/pets");
//! ```

pub mod cli;
pub mod grouping;
pub mod logging;
pub mod manifest;
pub mod operation;
pub mod options;
pub mod path;
pub mod validator;

pub use grouping::{
    group, process_operations, resolve_common_prefix, GroupingMode, OperationGroups,
    ProcessedOperations,
};
pub use manifest::{load_manifest, OperationManifest};
pub use operation::Operation;
pub use options::CodegenOptions;

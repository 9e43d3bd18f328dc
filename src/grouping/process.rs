use super::grouper::group;
use super::groups::OperationGroups;
use super::mode::GroupingMode;
use super::prefix::{apply_base_path, resolve_common_prefix};
use crate::operation::Operation;
use crate::options::CodegenOptions;
use serde_json::{json, Map, Value};
use tracing::info;

/// Template-context key carrying the shared resource path.
pub const API_BASE_PATH_KEY: &str = "apiBasePath";
/// Template-context key set to `""` when no shared base path was found.
pub const BASE_NAME_KEY: &str = "baseName";
/// Template-context key holding the ordered groups.
pub const GROUPS_KEY: &str = "groups";

/// Result of the grouping pass, ready for template rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedOperations {
    /// Operations partitioned by group key, input order preserved
    pub groups: OperationGroups,
    /// Shared base path across all operations.
    ///
    /// `None` when it was never computed (path-segment grouping), `Some("")`
    /// when it was computed and came out empty.
    pub api_base_path: Option<String>,
    /// Top-level base name; only set (to `""`) when the computed base path is empty
    pub base_name: Option<String>,
    /// Options the pass ran with, passed through to the template context
    pub options: CodegenOptions,
}

impl ProcessedOperations {
    /// Grouping mode that produced this result.
    #[must_use]
    pub fn mode(&self) -> GroupingMode {
        self.options.grouping_mode()
    }

    /// Build the key/value context handed to the rendering stage.
    ///
    /// # Errors
    ///
    /// Returns an error if an operation's extensions cannot be serialized.
    pub fn template_context(&self) -> serde_json::Result<Value> {
        let mut context = Map::new();
        context.insert(GROUPS_KEY.to_string(), serde_json::to_value(&self.groups)?);
        if let Some(base_path) = &self.api_base_path {
            context.insert(API_BASE_PATH_KEY.to_string(), json!(base_path));
        }
        if let Some(base_name) = &self.base_name {
            context.insert(BASE_NAME_KEY.to_string(), json!(base_name));
        }
        context.insert("useTags".to_string(), json!(self.options.use_tags));
        context.insert("interfaceOnly".to_string(), json!(self.options.interface_only));
        context.insert("generatePom".to_string(), json!(self.options.generate_pom));
        context.insert("returnResponse".to_string(), json!(self.options.return_response));
        Ok(Value::Object(context))
    }
}

/// Group `operations` and rewrite their paths according to `options`.
///
/// Path-segment grouping rewrites each path as it is assigned and leaves the
/// shared base path uncomputed. Tag grouping resolves one base path across the
/// whole set (in input order), strips it from every operation, then partitions
/// by tag.
#[must_use]
pub fn process_operations(
    mut operations: Vec<Operation>,
    options: &CodegenOptions,
) -> ProcessedOperations {
    let mode = options.grouping_mode();
    match mode {
        GroupingMode::ByPathSegment => {
            let groups = group(operations, mode);
            info!(
                mode = %mode,
                groups = groups.len(),
                "Resolved resource groups"
            );
            ProcessedOperations {
                groups,
                api_base_path: None,
                base_name: None,
                options: options.clone(),
            }
        }
        GroupingMode::ByTag => {
            let base_path = {
                let paths: Vec<&str> = operations.iter().map(|op| op.path.as_str()).collect();
                resolve_common_prefix(&paths)
            };
            apply_base_path(operations.iter_mut(), &base_path);
            let base_name = if base_path.is_empty() && !operations.is_empty() {
                Some(String::new())
            } else {
                None
            };
            let api_base_path = if operations.is_empty() {
                None
            } else {
                Some(base_path)
            };
            let groups = group(operations, mode);
            info!(
                mode = %mode,
                groups = groups.len(),
                api_base_path = api_base_path.as_deref().unwrap_or(""),
                "Resolved resource groups"
            );
            ProcessedOperations {
                groups,
                api_base_path,
                base_name,
                options: options.clone(),
            }
        }
    }
}

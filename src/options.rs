//! # Codegen Options
//!
//! Generator flags that decide how operations are grouped, loaded from an
//! `opgroup.toml` file that sits alongside the operations manifest:
//!
//! ```toml
//! use_tags = true
//! interface_only = false
//! generate_pom = true
//! return_response = false
//! ```
//!
//! Only `use_tags` affects grouping. The remaining flags are passed through to
//! the template context untouched.

use crate::grouping::GroupingMode;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up next to the operations manifest.
pub const OPTIONS_FILE_NAME: &str = "opgroup.toml";

/// Generator flags for one grouping run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenOptions {
    /// Group operations by tag instead of by first path segment
    pub use_tags: bool,
    /// Only API interfaces are generated, no server scaffolding
    pub interface_only: bool,
    /// Generate a build descriptor when none exists
    pub generate_pom: bool,
    /// Resource methods return a response object
    pub return_response: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        CodegenOptions {
            use_tags: false,
            interface_only: false,
            generate_pom: true,
            return_response: false,
        }
    }
}

impl CodegenOptions {
    /// Options with tag grouping switched on.
    #[must_use]
    pub fn with_tags() -> Self {
        CodegenOptions {
            use_tags: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn grouping_mode(&self) -> GroupingMode {
        GroupingMode::from_use_tags(self.use_tags)
    }
}

/// Load options from a TOML file.
///
/// Returns `Ok(None)` if the file does not exist and an error if it exists but
/// cannot be read or parsed.
pub fn load_options(config_path: &Path) -> anyhow::Result<Option<CodegenOptions>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read options file: {}", config_path.display()))?;

    let options: CodegenOptions = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse options file: {}", config_path.display()))?;

    Ok(Some(options))
}

/// Look for `opgroup.toml` in the manifest's directory.
#[must_use]
pub fn auto_detect_options_path(manifest_path: &Path) -> Option<PathBuf> {
    let config_path = manifest_path.parent()?.join(OPTIONS_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Resolve the options for a run.
///
/// Priority:
/// 1. Explicitly provided path (must exist)
/// 2. `opgroup.toml` alongside the manifest
/// 3. Built-in defaults
pub fn resolve_options(
    explicit_path: Option<&Path>,
    manifest_path: &Path,
) -> anyhow::Result<CodegenOptions> {
    if let Some(path) = explicit_path {
        return load_options(path)?
            .with_context(|| format!("Options file not found: {}", path.display()));
    }

    match auto_detect_options_path(manifest_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Using options file found next to manifest");
            Ok(load_options(&path)?.unwrap_or_default())
        }
        None => Ok(CodegenOptions::default()),
    }
}

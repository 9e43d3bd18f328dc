//! # Operations Manifest
//!
//! Loads the operation records produced by the specification parser from a
//! YAML or JSON file. The format is chosen by file extension, as for spec
//! files: `.yaml`/`.yml` is YAML, anything else is JSON.
//!
//! ```yaml
//! title: Pet Store
//! operations:
//!   - operationId: list_pets
//!     method: GET
//!     path: /pets
//!     tag: pets
//!   - operationId: get_pet
//!     method: GET
//!     path: /pets/{id}
//!     tag: pets
//! ```

use crate::operation::Operation;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Serialization format of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    /// Pick the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => ManifestFormat::Yaml,
            _ => ManifestFormat::Json,
        }
    }
}

/// Operation records for one API, in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OperationManifest {
    /// API title, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Operations in the order the spec declares them
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// Parse manifest content that has already been read into memory.
pub fn parse_manifest(content: &str, format: ManifestFormat) -> anyhow::Result<OperationManifest> {
    let manifest: OperationManifest = match format {
        ManifestFormat::Yaml => serde_yaml::from_str(content)?,
        ManifestFormat::Json => serde_json::from_str(content)?,
    };
    Ok(manifest)
}

/// Read and parse a manifest file.
pub fn load_manifest(file_path: &Path) -> anyhow::Result<OperationManifest> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read operations manifest: {}", file_path.display()))?;
    let manifest = parse_manifest(&content, ManifestFormat::from_path(file_path))
        .with_context(|| format!("Failed to parse operations manifest: {}", file_path.display()))?;
    debug!(
        path = %file_path.display(),
        operations = manifest.operations.len(),
        "Loaded operations manifest"
    );
    Ok(manifest)
}

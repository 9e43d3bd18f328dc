use crate::grouping::{process_operations, resolve_common_prefix, GroupingMode};
use crate::manifest::load_manifest;
use crate::options::{resolve_options, CodegenOptions};
use crate::validator::{fail_if_issues, validate_operations};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Command-line interface for opgroup
#[derive(Parser, Debug)]
#[command(name = "opgroup", version)]
#[command(about = "Group API operations into resources for server code generation", long_about = None)]
pub struct Cli {
    /// Log at debug level (overrides OPGROUP_LOG_LEVEL=warn/info)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Group operations and print the template context as JSON
    Group {
        /// Operations manifest (YAML or JSON)
        #[arg(short = 'i', long)]
        operations: PathBuf,

        /// Options file (default: opgroup.toml next to the manifest)
        #[arg(long)]
        options: Option<PathBuf>,

        /// Group by tag instead of first path segment
        #[arg(long, default_value_t = false, conflicts_with = "group_by")]
        use_tags: bool,

        /// Grouping mode: `tags` or `path`
        #[arg(long)]
        group_by: Option<GroupingMode>,

        /// Print single-line JSON
        #[arg(long, default_value_t = false)]
        compact: bool,
    },
    /// Print the shared base path of the given paths
    Prefix {
        /// Path templates, e.g. /api/v1/pets
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },
    /// Validate an operations manifest
    Check {
        /// Operations manifest (YAML or JSON)
        #[arg(short = 'i', long)]
        operations: PathBuf,

        /// Options file (default: opgroup.toml next to the manifest)
        #[arg(long)]
        options: Option<PathBuf>,

        /// Check as if grouping by tag
        #[arg(long, default_value_t = false)]
        use_tags: bool,
    },
}

/// Parse arguments from the process and run the selected command against stdout.
///
/// # Errors
///
/// Returns an error if the manifest or options cannot be loaded, output cannot
/// be written, or `check` found issues.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

/// Run `cli`, writing command output to `out`.
pub fn execute(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Group {
            operations,
            options,
            use_tags,
            group_by,
            compact,
        } => {
            let options = effective_options(operations, options.as_deref(), *use_tags, *group_by)?;
            let manifest = load_manifest(operations)?;
            for issue in validate_operations(&manifest.operations, options.grouping_mode()) {
                warn!(
                    kind = %issue.kind,
                    location = %issue.location,
                    "{}",
                    issue.message
                );
            }

            let processed = process_operations(manifest.operations, &options);
            let context = processed
                .template_context()
                .context("Failed to build template context")?;
            let rendered = if *compact {
                serde_json::to_string(&context)?
            } else {
                serde_json::to_string_pretty(&context)?
            };
            writeln!(out, "{rendered}")?;
            info!(
                groups = processed.groups.len(),
                operations = processed.groups.operation_count(),
                "Grouping complete"
            );
            Ok(())
        }
        Commands::Prefix { paths } => {
            writeln!(out, "{}", resolve_common_prefix(paths.as_slice()))?;
            Ok(())
        }
        Commands::Check {
            operations,
            options,
            use_tags,
        } => {
            let options = effective_options(operations, options.as_deref(), *use_tags, None)?;
            let manifest = load_manifest(operations)?;
            let issues = validate_operations(&manifest.operations, options.grouping_mode());
            fail_if_issues(&issues)?;
            writeln!(
                out,
                "✅ {} operation(s) OK",
                manifest.operations.len()
            )?;
            Ok(())
        }
    }
}

/// Options file (or defaults) with command-line overrides applied.
fn effective_options(
    manifest: &Path,
    explicit: Option<&Path>,
    use_tags: bool,
    group_by: Option<GroupingMode>,
) -> anyhow::Result<CodegenOptions> {
    let mut options = resolve_options(explicit, manifest)?;
    if use_tags {
        options.use_tags = true;
    }
    if let Some(mode) = group_by {
        options.use_tags = mode == GroupingMode::ByTag;
    }
    Ok(options)
}

//! # CLI Module
//!
//! Command-line front end for the grouping pass, shipped as the `opgroup`
//! binary.
//!
//! ## Commands
//!
//! ### `group`
//!
//! Group the operations of a manifest and print the template context as JSON:
//!
//! ```bash
//! opgroup group --operations operations.yaml
//! opgroup group --operations operations.yaml --use-tags
//! opgroup group --operations operations.yaml --options opgroup.toml --compact
//! ```
//!
//! Options are read from `--options`, else from `opgroup.toml` next to the
//! manifest, else defaults. `--use-tags` and `--group-by` override the file.
//!
//! ### `prefix`
//!
//! Print the longest shared base path of a set of paths:
//!
//! ```bash
//! opgroup prefix /api/v1/pets /api/v1/owners   # api/v1
//! ```
//!
//! ### `check`
//!
//! Report manifest problems and exit non-zero if any were found:
//!
//! ```bash
//! opgroup check --operations operations.yaml --use-tags
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, run_cli, Cli, Commands};

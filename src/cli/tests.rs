//! Unit tests for CLI commands

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::cli::{execute, Cli, Commands};
use crate::grouping::GroupingMode;
use clap::Parser;
use std::fs;

const MANIFEST: &str = r#"
title: Pet Store
operations:
  - operationId: list_pets
    method: GET
    path: /api/v1/pets
    tag: pets
  - operationId: get_pet
    method: GET
    path: /api/v1/pets/{id}
    tag: pets
  - operationId: list_owners
    method: GET
    path: /api/v1/owners
    tag: owners
"#;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let mut out = Vec::new();
    execute(&cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_group_command_parses() {
    let cli = Cli::try_parse_from([
        "opgroup",
        "group",
        "--operations",
        "ops.yaml",
        "--use-tags",
        "--compact",
    ])
    .unwrap();

    match cli.command {
        Commands::Group {
            operations,
            use_tags,
            compact,
            group_by,
            options,
        } => {
            assert_eq!(operations.to_string_lossy(), "ops.yaml");
            assert!(use_tags);
            assert!(compact);
            assert!(group_by.is_none());
            assert!(options.is_none());
        }
        _ => panic!("Expected Group command"),
    }
}

#[test]
fn test_group_by_value_parses_mode() {
    let cli = Cli::try_parse_from(["opgroup", "group", "-i", "ops.yaml", "--group-by", "tags"])
        .unwrap();
    match cli.command {
        Commands::Group { group_by, .. } => assert_eq!(group_by, Some(GroupingMode::ByTag)),
        _ => panic!("Expected Group command"),
    }
}

#[test]
fn test_group_by_rejects_unknown_mode() {
    let result = Cli::try_parse_from(["opgroup", "group", "-i", "ops.yaml", "--group-by", "x"]);
    assert!(result.is_err());
}

#[test]
fn test_use_tags_conflicts_with_group_by() {
    let result = Cli::try_parse_from([
        "opgroup",
        "group",
        "-i",
        "ops.yaml",
        "--use-tags",
        "--group-by",
        "path",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_prefix_requires_paths() {
    assert!(Cli::try_parse_from(["opgroup", "prefix"]).is_err());
}

#[test]
fn test_prefix_prints_common_base() {
    let output = run(&["opgroup", "prefix", "/api/v1/pets", "/api/v1/owners"]).unwrap();
    assert_eq!(output, "api/v1\n");
}

#[test]
fn test_prefix_prints_empty_line_when_nothing_shared() {
    let output = run(&["opgroup", "prefix", "/pets", "/owners"]).unwrap();
    assert_eq!(output, "\n");
}

#[test]
fn test_group_by_path_segment() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("operations.yaml");
    fs::write(&manifest, MANIFEST).unwrap();

    let output = run(&["opgroup", "group", "-i", manifest.to_str().unwrap()]).unwrap();
    let context: serde_json::Value = serde_json::from_str(&output).unwrap();
    let groups = context["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["key"], "api");
    assert_eq!(groups[0]["operations"][0]["path"], "/v1/pets");
    assert!(context.get("apiBasePath").is_none());
}

#[test]
fn test_group_by_tags() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("operations.yaml");
    fs::write(&manifest, MANIFEST).unwrap();

    let output = run(&[
        "opgroup",
        "group",
        "-i",
        manifest.to_str().unwrap(),
        "--use-tags",
        "--compact",
    ])
    .unwrap();
    assert_eq!(output.lines().count(), 1);
    let context: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(context["apiBasePath"], "api/v1");
    assert_eq!(context["useTags"], true);
    let groups = context["groups"].as_array().unwrap();
    assert_eq!(groups[0]["key"], "pets");
    assert_eq!(groups[0]["operations"][1]["path"], "/pets/{id}");
    assert_eq!(groups[1]["key"], "owners");
}

#[test]
fn test_group_reads_options_file_alongside_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("operations.yaml");
    fs::write(&manifest, MANIFEST).unwrap();
    fs::write(
        dir.path().join("opgroup.toml"),
        "use_tags = true\ninterface_only = true\n",
    )
    .unwrap();

    let output = run(&["opgroup", "group", "-i", manifest.to_str().unwrap()]).unwrap();
    let context: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(context["apiBasePath"], "api/v1");
    assert_eq!(context["interfaceOnly"], true);

    let output = run(&[
        "opgroup",
        "group",
        "-i",
        manifest.to_str().unwrap(),
        "--group-by",
        "path",
    ])
    .unwrap();
    let context: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(context.get("apiBasePath").is_none());
    assert_eq!(context["interfaceOnly"], true);
}

#[test]
fn test_check_reports_issues() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("operations.json");
    fs::write(
        &manifest,
        r#"{"operations":[{"operationId":"a","method":"GET","path":"pets"}]}"#,
    )
    .unwrap();

    let err = run(&["opgroup", "check", "-i", manifest.to_str().unwrap()]).unwrap_err();
    assert!(err.to_string().contains("1 validation issue(s) found"), "{err}");
}

#[test]
fn test_check_passes_clean_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("operations.yaml");
    fs::write(&manifest, MANIFEST).unwrap();

    let output = run(&[
        "opgroup",
        "check",
        "-i",
        manifest.to_str().unwrap(),
        "--use-tags",
    ])
    .unwrap();
    assert!(output.contains("3 operation(s) OK"));
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

use http::Method;
use opgroup::grouping::{API_BASE_PATH_KEY, DEFAULT_GROUP};
use opgroup::manifest::{parse_manifest, ManifestFormat};
use opgroup::{process_operations, CodegenOptions, Operation};

const PET_STORE: &str = r#"
title: Pet Store
operations:
  - operationId: root
    method: GET
    path: /
  - operationId: list_pets
    method: GET
    path: /pets
    tag: pets
  - operationId: add_pet
    method: POST
    path: /pets
    tag: pets
  - operationId: get_pet
    method: GET
    path: /pets/{id}
    tag: pets
  - operationId: list_pet_toys
    method: GET
    path: /pets/{id}/toys
    tag: pets
  - operationId: list_owners
    method: GET
    path: /owners
    tag: owners
  - operationId: get_owner
    method: GET
    path: /owners/{owner_id}
    tag: owners
"#;

fn pet_store() -> Vec<Operation> {
    parse_manifest(PET_STORE, ManifestFormat::Yaml)
        .unwrap()
        .operations
}

fn paths(operations: &[Operation]) -> Vec<&str> {
    operations.iter().map(|o| o.path.as_str()).collect()
}

#[test]
fn test_pet_store_by_path_segment() {
    let processed = process_operations(pet_store(), &CodegenOptions::default());

    let keys: Vec<&str> = processed.groups.keys().collect();
    assert_eq!(keys, [DEFAULT_GROUP, "pets", "owners"]);

    assert_eq!(paths(processed.groups.get(DEFAULT_GROUP).unwrap()), ["/"]);
    assert_eq!(
        paths(processed.groups.get("pets").unwrap()),
        ["", "", "/{id}", "/{id}/toys"]
    );
    assert_eq!(
        paths(processed.groups.get("owners").unwrap()),
        ["", "/{owner_id}"]
    );

    let subresources: Vec<bool> = processed
        .groups
        .get("pets")
        .unwrap()
        .iter()
        .map(|o| o.subresource_operation)
        .collect();
    assert_eq!(subresources, [false, false, true, true]);
    assert_eq!(processed.api_base_path, None);
}

#[test]
fn test_pet_store_by_tag() {
    let processed = process_operations(pet_store(), &CodegenOptions::with_tags());

    let keys: Vec<&str> = processed.groups.keys().collect();
    assert_eq!(keys, [DEFAULT_GROUP, "pets", "owners"]);
    assert_eq!(processed.api_base_path.as_deref(), Some(""));
    assert_eq!(processed.base_name.as_deref(), Some(""));

    // No shared prefix: paths stay whole and everything but the root is a subresource
    let root = &processed.groups.get(DEFAULT_GROUP).unwrap()[0];
    assert_eq!(root.path, "/");
    assert!(root.subresource_operation);
    assert_eq!(
        paths(processed.groups.get("pets").unwrap()),
        ["/pets", "/pets", "/pets/{id}", "/pets/{id}/toys"]
    );
}

#[test]
fn test_versioned_api_by_tag() {
    let operations = vec![
        Operation::new("list_pets", Method::GET, "/api/v1/pets").with_tag("pets"),
        Operation::new("list_owners", Method::GET, "/api/v1/owners").with_tag("owners"),
    ];
    let processed = process_operations(operations, &CodegenOptions::with_tags());

    assert_eq!(processed.api_base_path.as_deref(), Some("api/v1"));
    assert_eq!(paths(processed.groups.get("pets").unwrap()), ["/pets"]);
    assert_eq!(paths(processed.groups.get("owners").unwrap()), ["/owners"]);
    for operation in processed.groups.operations() {
        assert_eq!(operation.base_name, "api/v1");
        assert!(operation.subresource_operation);
    }

    let context = processed.template_context().unwrap();
    assert_eq!(context[API_BASE_PATH_KEY], "api/v1");
}

#[test]
fn test_single_operation_by_tag_collapses_path() {
    let operations =
        vec![Operation::new("get_widget", Method::GET, "/widgets/{id}").with_tag("widgets")];
    let processed = process_operations(operations, &CodegenOptions::with_tags());
    assert_eq!(processed.api_base_path.as_deref(), Some("widgets/{id}"));
    assert_eq!(processed.groups.get("widgets").unwrap()[0].path, "");
}

#[test]
fn test_every_operation_lands_in_exactly_one_group() {
    for options in [CodegenOptions::default(), CodegenOptions::with_tags()] {
        let input = pet_store();
        let processed = process_operations(input.clone(), &options);
        assert_eq!(processed.groups.operation_count(), input.len());

        let mut ids: Vec<&str> = processed
            .groups
            .operations()
            .map(|o| o.operation_id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), input.len());
    }
}

#[test]
fn test_pass_through_fields_untouched() {
    let mut operation = Operation::new("get_pet", Method::DELETE, "/pets/{id}")
        .with_tag("pets")
        .with_summary("Delete a pet");
    operation
        .extensions
        .insert("x-handler".to_string(), serde_json::json!("delete_pet"));

    for options in [CodegenOptions::default(), CodegenOptions::with_tags()] {
        let processed = process_operations(vec![operation.clone()], &options);
        let out = &processed.groups.get("pets").unwrap()[0];
        assert_eq!(out.method, Method::DELETE);
        assert_eq!(out.summary.as_deref(), Some("Delete a pet"));
        assert_eq!(out.tag.as_deref(), Some("pets"));
        assert_eq!(out.extensions["x-handler"], "delete_pet");
    }
}

#[test]
fn test_independent_runs_do_not_share_state() {
    let first = process_operations(pet_store(), &CodegenOptions::default());
    let second = process_operations(pet_store(), &CodegenOptions::default());
    assert_eq!(first, second);
}

/// Schema behaviour checked across every built-in layout: defaults,
/// idempotence, and array cardinality bounds.

use serde_json::{Map, Value, json};

use presentation_layouts::errors::AppError;
use presentation_layouts::layouts::{LayoutEntry, LayoutRegistry};

/// Every key of `expected` is present in `actual` with an equal value.
/// Objects in `actual` may carry extra defaulted keys.
fn is_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(e), Value::Object(a)) => {
            e.iter().all(|(k, v)| a.get(k).is_some_and(|av| is_subset(v, av)))
        }
        (Value::Array(e), Value::Array(a)) => {
            e.len() == a.len() && e.iter().zip(a).all(|(ev, av)| is_subset(ev, av))
        }
        _ => expected == actual,
    }
}

/// Follow `$ref`, `allOf` and nullable `anyOf` to the schema of the value itself.
fn concrete<'a>(document: &'a Value, mut schema: &'a Value) -> &'a Value {
    loop {
        if let Some(target) = schema.get("$ref").and_then(Value::as_str) {
            schema = &document["definitions"][target.trim_start_matches("#/definitions/")];
            continue;
        }
        let wrapped = ["allOf", "anyOf"]
            .iter()
            .find_map(|key| schema.get(*key).and_then(Value::as_array))
            .and_then(|variants| variants.iter().find(|v| v["type"] != "null"));
        match wrapped {
            Some(inner) => schema = inner,
            None => return schema,
        }
    }
}

fn root_properties(document: &Value) -> &Map<String, Value> {
    document["properties"].as_object().expect("root properties")
}

fn validation_paths(err: AppError) -> Vec<String> {
    match err {
        AppError::Validation(errors) => errors.issues().iter().map(|i| i.path.clone()).collect(),
        other => panic!("expected validation error, got {other}"),
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_empty_object_resolves_to_declared_defaults() {
    let registry = LayoutRegistry::builtin();
    for layout in registry.layouts() {
        let resolved = layout
            .resolve(Some(&json!({})))
            .unwrap_or_else(|e| panic!("{}: {e}", layout.id));

        for (name, property) in root_properties(layout.schema()) {
            match property.get("default") {
                Some(default) => assert!(
                    is_subset(default, &resolved[name]),
                    "{}.{name} does not match its default",
                    layout.id
                ),
                None => assert!(resolved.get(name).is_none(), "{}.{name} should stay absent", layout.id),
            }
        }
    }
}

#[test]
fn test_missing_data_equals_empty_object() {
    let registry = LayoutRegistry::builtin();
    for layout in registry.layouts() {
        let from_none = layout.resolve(None).unwrap();
        let from_null = layout.resolve(Some(&Value::Null)).unwrap();
        let from_empty = layout.resolve(Some(&json!({}))).unwrap();
        assert_eq!(from_none, from_empty, "{}", layout.id);
        assert_eq!(from_null, from_empty, "{}", layout.id);
    }
}

#[test]
fn test_resolving_defaults_again_is_stable() {
    let registry = LayoutRegistry::builtin();
    for layout in registry.layouts() {
        let once = layout.resolve(None).unwrap();
        let twice = layout.resolve(Some(&once)).unwrap();
        assert_eq!(once, twice, "{}", layout.id);
    }
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let registry = LayoutRegistry::builtin();
    let layout = registry.find("01-title-slide").unwrap();
    let defaults = layout.resolve(None).unwrap();

    let resolved = layout
        .resolve(Some(&json!({ "title": "Quarterly Review", "unknown": true })))
        .unwrap();
    assert_eq!(resolved["title"], "Quarterly Review");
    assert!(resolved.get("unknown").is_none());
    for (key, value) in defaults.as_object().unwrap() {
        if key != "title" {
            assert_eq!(&resolved[key], value, "{key}");
        }
    }
}

// ---------------------------------------------------------------------------
// Array cardinality
// ---------------------------------------------------------------------------

/// Bounded array properties reachable through nested objects: (path, min, max).
fn array_fields(document: &Value, schema: &Value, prefix: &[String], out: &mut Vec<(Vec<String>, usize, usize)>) {
    let Some(properties) = concrete(document, schema)["properties"].as_object() else { return };
    for (name, property) in properties {
        let mut path = prefix.to_vec();
        path.push(name.clone());
        let property = concrete(document, property);
        match property["maxItems"].as_u64() {
            Some(max) => {
                let min = property["minItems"].as_u64().unwrap_or(0);
                out.push((path, min as usize, max as usize));
            }
            None => array_fields(document, property, &path, out),
        }
    }
}

fn arrays_of(layout: &LayoutEntry) -> Vec<(Vec<String>, usize, usize)> {
    let mut arrays = Vec::new();
    array_fields(layout.schema(), layout.schema(), &[], &mut arrays);
    arrays
}

fn set_path(root: &mut Value, path: &[String], value: Value) {
    let mut node = root;
    for key in &path[..path.len() - 1] {
        node = node
            .as_object_mut()
            .expect("object on path")
            .entry(key.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    node[path[path.len() - 1].as_str()] = value;
}

fn get_path<'a>(root: &'a Value, path: &[String]) -> &'a Value {
    path.iter().fold(root, |node, key| &node[key.as_str()])
}

/// `len` items cycled from the defaulted array.
fn cycled(items: &[Value], len: usize) -> Value {
    Value::Array(items.iter().cycle().take(len).cloned().collect())
}

fn assert_count_rejected(layout: &LayoutEntry, base: &Value, path: &[String], len: usize) {
    let items = get_path(base, path).as_array().expect("defaulted array").clone();
    assert!(!items.is_empty(), "{}: {} has no default items", layout.id, path.join("."));

    let mut data = base.clone();
    set_path(&mut data, path, cycled(&items, len));
    let err = layout.resolve(Some(&data)).expect_err(&format!(
        "{}: {} with {len} items should fail",
        layout.id,
        path.join(".")
    ));
    assert!(validation_paths(err).contains(&path.join(".")));
}

#[test]
fn test_array_one_outside_bounds_fails() {
    let registry = LayoutRegistry::builtin();
    let mut checked = 0;
    for layout in registry.layouts() {
        let base = layout.resolve(None).unwrap();
        for (path, min, max) in arrays_of(layout) {
            if min > 0 {
                assert_count_rejected(layout, &base, &path, min - 1);
            }
            assert_count_rejected(layout, &base, &path, max + 1);
            checked += 1;
        }
    }
    assert!(checked >= 20, "only {checked} array fields found");
}

#[test]
fn test_array_bounds_are_inclusive() {
    let registry = LayoutRegistry::builtin();
    for layout in registry.layouts() {
        let base = layout.resolve(None).unwrap();
        for (path, min, max) in arrays_of(layout) {
            let items = get_path(&base, &path).as_array().unwrap().clone();
            for len in [min.max(1), max] {
                let mut data = base.clone();
                set_path(&mut data, &path, cycled(&items, len));
                assert!(
                    layout.resolve(Some(&data)).is_ok(),
                    "{}: {} with {len} items should pass",
                    layout.id,
                    path.join(".")
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Field-level behaviour through real layouts
// ---------------------------------------------------------------------------

#[test]
fn test_nested_issue_paths_are_dotted() {
    let registry = LayoutRegistry::builtin();
    let layout = registry.find("06-process-flow-slide").unwrap();
    let mut data = layout.resolve(None).unwrap();
    data["steps"][1]["title"] = json!("");

    let paths = validation_paths(layout.resolve(Some(&data)).unwrap_err());
    assert_eq!(paths, vec!["steps.1.title".to_string()]);
}

#[test]
fn test_one_pager_truncates_instead_of_failing() {
    let registry = LayoutRegistry::builtin();
    let layout = registry.find("trade-compliance-one-pager").unwrap();
    let long = "x".repeat(500);

    let resolved = layout.resolve(Some(&json!({ "mainTitle": long }))).unwrap();
    let title = resolved["mainTitle"].as_str().unwrap();
    assert!(title.ends_with("..."));
    assert!(title.chars().count() < 500);

    let other = registry.find("01-title-slide").unwrap();
    assert!(matches!(
        other.resolve(Some(&json!({ "title": "x".repeat(500) }))),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn test_json_schema_export_is_a_closed_object() {
    let registry = LayoutRegistry::builtin();
    for layout in registry.layouts() {
        let exported = layout.schema();
        assert_eq!(exported["type"], "object", "{}", layout.id);
        assert_eq!(exported["additionalProperties"], false, "{}", layout.id);
        // Every top-level field is either defaulted or optional.
        assert!(exported.get("required").is_none(), "{}", layout.id);
    }
}

#[test]
fn test_nested_items_list_their_required_fields() {
    let registry = LayoutRegistry::builtin();
    let layout = registry.find("gamma-scenario-discussion").unwrap();
    let document = layout.schema();
    let items = concrete(document, &document["properties"]["steps"]["items"]);
    assert_eq!(items["required"], json!(["description", "heading", "number"]));
    assert_eq!(items["properties"]["number"]["minimum"], 1.0);
    assert_eq!(items["properties"]["number"]["maximum"], 4.0);
}

#[test]
fn test_string_lists_bound_each_item() {
    let registry = LayoutRegistry::builtin();
    let layout = registry.find("gamma-two-column-boxes").unwrap();
    let bullets = concrete(layout.schema(), &root_properties(layout.schema())["leftBoxBullets"]);
    assert_eq!(bullets["items"]["minLength"], 5);
    assert_eq!(bullets["items"]["maxLength"], 80);
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Integration tests for resolution across multiple engine instances.

use std::collections::HashMap;

use crate::engine::Depengine;
use crate::errors::ResolveError;

const FIRST_NAME: &str = "first_name";
const LAST_NAME: &str = "last_name";
const ID: &str = "id";
const FULL_NAME: &str = "full_name";
const NAMED_ID: &str = "named_id";

fn initials() -> HashMap<String, String> {
    HashMap::from([
        (FIRST_NAME.to_string(), "jon".to_string()),
        (LAST_NAME.to_string(), "anderson".to_string()),
        (ID.to_string(), "1234".to_string()),
    ])
}

fn generate_full_name(dependencies: &HashMap<String, String>) -> String {
    format!("{}{}", dependencies[FIRST_NAME], dependencies[LAST_NAME])
}

fn generate_named_id(dependencies: &HashMap<String, String>) -> String {
    format!("{}{}", dependencies[ID], dependencies[FULL_NAME])
}

#[test]
fn depend_on_other_engine() {
    let full_name_engine = Depengine::with_initials("full_name_engine", initials());
    let named_id_engine = Depengine::new("named_id_engine");

    full_name_engine.register(
        FULL_NAME.to_string(),
        generate_full_name,
        vec![
            full_name_engine.dependency(FIRST_NAME.to_string()),
            full_name_engine.dependency(LAST_NAME.to_string()),
        ],
    );
    named_id_engine.register(
        NAMED_ID.to_string(),
        generate_named_id,
        vec![
            full_name_engine.dependency(FULL_NAME.to_string()),
            full_name_engine.dependency(ID.to_string()),
        ],
    );

    let products = named_id_engine.resolve_all().unwrap();
    assert_eq!(products[NAMED_ID], "1234jonanderson");
}

/// A consumer's generator sees dependency products under the owning
/// engine's key names, never its own namespace.
#[test]
fn foreign_products_arrive_under_owner_key_names() {
    let provider = Depengine::with_initials(
        "provider",
        HashMap::from([("payload".to_string(), "42".to_string())]),
    );
    let consumer = Depengine::new("consumer");

    consumer.register(
        "report".to_string(),
        |deps: &HashMap<String, String>| {
            assert!(deps.contains_key("payload"));
            assert!(!deps.contains_key("report"));
            format!("got {}", deps["payload"])
        },
        vec![provider.dependency("payload".to_string())],
    );

    assert_eq!(consumer.resolve(&"report".to_string()).unwrap(), "got 42");
}

/// A handle is usable on its own as a lazy reference into its engine.
#[test]
fn handle_resolves_directly() {
    let engine = Depengine::with_initials("engine", initials());
    let handle = engine.dependency(FIRST_NAME.to_string());

    assert_eq!(handle.key(), FIRST_NAME);
    assert_eq!(handle.resolve().unwrap(), "jon");
}

#[test]
fn missing_dependency_names_source_and_destination() {
    let full_name_engine = Depengine::<String, String>::new("full_name_engine");
    let named_id_engine = Depengine::new("named_id_engine");

    named_id_engine.register(
        NAMED_ID.to_string(),
        generate_named_id,
        vec![
            full_name_engine.dependency(FULL_NAME.to_string()),
            full_name_engine.dependency(ID.to_string()),
        ],
    );

    let error = named_id_engine.resolve_all().unwrap_err();
    match error {
        ResolveError::MissingProduct {
            key,
            source,
            destination,
        } => {
            // Either handle can fail first; dependency order is
            // unspecified.
            assert!(key == FULL_NAME || key == ID);
            assert_eq!(source, "full_name_engine");
            assert_eq!(destination, Some("named_id_engine".to_string()));
        }
        other => panic!("expected missing product, got {other:?}"),
    }
}

/// Attribution is single-hop: only the engine whose generator directly
/// declared the failing handle is named, no matter how deep the chain of
/// consumers above it is.
#[test]
fn attribution_stops_at_the_direct_consumer() {
    let a = Depengine::<String, String>::new("a");
    let b = Depengine::new("b");
    let c = Depengine::new("c");

    b.register(
        "b_product".to_string(),
        |deps: &HashMap<String, String>| deps["k"].clone(),
        vec![a.dependency("k".to_string())],
    );
    c.register(
        "c_product".to_string(),
        |deps: &HashMap<String, String>| deps["b_product"].clone(),
        vec![b.dependency("b_product".to_string())],
    );

    let error = c.resolve_all().unwrap_err();
    assert_eq!(
        error,
        ResolveError::MissingProduct {
            key: "k".to_string(),
            source: "a".to_string(),
            destination: Some("b".to_string()),
        }
    );
}

#[test]
fn same_engine_consumer_attributes_itself() {
    let engine = Depengine::<String, String>::new("engine");
    engine.register(
        "needy".to_string(),
        |deps: &HashMap<String, String>| deps["absent"].clone(),
        vec![engine.dependency("absent".to_string())],
    );

    let error = engine.resolve(&"needy".to_string()).unwrap_err();
    assert_eq!(
        error,
        ResolveError::MissingProduct {
            key: "absent".to_string(),
            source: "engine".to_string(),
            destination: Some("engine".to_string()),
        }
    );
}

#[test]
fn cycle_spanning_two_engines_is_detected() {
    let a = Depengine::<String, String>::new("a");
    let b = Depengine::new("b");

    a.register(
        "x".to_string(),
        |deps: &HashMap<String, String>| deps["y"].clone(),
        vec![b.dependency("y".to_string())],
    );
    b.register(
        "y".to_string(),
        |deps: &HashMap<String, String>| deps["x"].clone(),
        vec![a.dependency("x".to_string())],
    );

    let error = a.resolve(&"x".to_string()).unwrap_err();
    assert_eq!(
        error,
        ResolveError::CycleDetected {
            path: vec!["a:x".to_string(), "b:y".to_string(), "a:x".to_string()],
        }
    );
}

/// Two engines may reuse a key name without colliding; handles are scoped
/// to the instance that created them, not to the id or the key text.
#[test]
fn same_key_on_different_engines_does_not_collide() {
    let metric = Depengine::with_initials(
        "metric",
        HashMap::from([("unit".to_string(), "meters".to_string())]),
    );
    let imperial = Depengine::with_initials(
        "imperial",
        HashMap::from([("unit".to_string(), "feet".to_string())]),
    );
    let report = Depengine::new("report");

    report.register(
        "summary".to_string(),
        |deps: &HashMap<String, String>| deps["unit"].clone(),
        vec![metric.dependency("unit".to_string())],
    );

    assert_eq!(report.resolve(&"summary".to_string()).unwrap(), "meters");
    assert_eq!(imperial.resolve(&"unit".to_string()).unwrap(), "feet");
}

#[test]
fn shared_subtree_generates_once_across_engine_boundary() {
    use std::cell::Cell;
    use std::rc::Rc;

    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let base = Depengine::new("base");
    base.register(
        "expensive".to_string(),
        move |_: &HashMap<String, String>| {
            counter.set(counter.get() + 1);
            "artifact".to_string()
        },
        vec![],
    );

    let consumer = Depengine::new("consumer");
    consumer.register(
        "first".to_string(),
        |deps: &HashMap<String, String>| format!("1:{}", deps["expensive"]),
        vec![base.dependency("expensive".to_string())],
    );
    consumer.register(
        "second".to_string(),
        |deps: &HashMap<String, String>| format!("2:{}", deps["expensive"]),
        vec![base.dependency("expensive".to_string())],
    );

    let products = consumer.resolve_all().unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(products["first"], "1:artifact");
    assert_eq!(products["second"], "2:artifact");
}

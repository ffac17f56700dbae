// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Demo showing two engines wired from a YAML blueprint: a `names` engine
//! concatenating a full name from initials, and a `records` engine that
//! reaches across the engine boundary for the full name and the id.
//!
//! Run with `RUST_LOG=debug` to watch the structured resolution events.

use std::collections::HashMap;
use std::io::Write;

use depengine::config::{build_engines, load_and_validate_blueprint, GeneratorRegistry};

const BLUEPRINT: &str = r#"
engines:
  - id: names
    initials:
      first_name: jon
      last_name: anderson
      id: "1234"
    entries:
      - key: full_name
        generator: concat_names
        depends_on:
          - key: first_name
          - key: last_name
  - id: records
    entries:
      - key: named_id
        generator: concat_named_id
        depends_on:
          - engine: names
            key: full_name
          - engine: names
            key: id
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Depengine Blueprint Demo ===\n");

    // Round-trip through a file so the demo exercises the loading path
    // rather than parsing a string.
    let mut blueprint_file = tempfile::NamedTempFile::new()?;
    write!(blueprint_file, "{}", BLUEPRINT)?;
    let blueprint = load_and_validate_blueprint(blueprint_file.path())?;
    println!("Blueprint declares {} engines", blueprint.engines.len());

    let mut registry = GeneratorRegistry::new();
    registry.insert("concat_names", |deps: &HashMap<String, String>| {
        format!("{}{}", deps["first_name"], deps["last_name"])
    });
    registry.insert("concat_named_id", |deps: &HashMap<String, String>| {
        format!("{}{}", deps["id"], deps["full_name"])
    });

    let engines = build_engines(&blueprint, &registry)?;

    let names = engines["names"].resolve_all()?;
    println!("\nnames engine products:");
    for (key, product) in &names {
        println!("  {key} = {product}");
    }

    let records = engines["records"].resolve_all()?;
    println!("\nrecords engine products:");
    for (key, product) in &records {
        println!("  {key} = {product}");
    }

    Ok(())
}

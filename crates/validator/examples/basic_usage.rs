//! Basic usage example for protego-validator
//!
//! Run with: cargo run -p protego-validator --example basic_usage

use std::collections::HashMap;

use protego_validator::prelude::*;
use serde_json::{Map, Value, json};

fn main() {
    // Map rejections are logged at DEBUG.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Sequential runner: first failure wins.
    let username: [&dyn Validate<Input = str>; 2] = [&min_length(3), &max_length(16)];
    for input in ["alice", "al"] {
        match validate(input, username) {
            Ok(()) => println!("✓ {input:?} is a valid username"),
            Err(e) => println!("✗ {input:?}: {e}"),
        }
    }

    // Element-wise validation tags failures with their index.
    let tags = ["rust", "go", "zig", "c"];
    if let Err(e) = each(min_length(3)).validate(&tags) {
        println!("\n✗ tags: {e}");
        for failure in &e.nested {
            println!("    {failure:#}");
        }
    }

    // Keyed map validation.
    let rules = [
        MapKeyRule::required("name").rule(not_empty()),
        MapKeyRule::optional("age").rule(matches_pattern(r"^\d+$").expect("valid pattern")),
    ];
    let mut form = HashMap::new();
    form.insert("age".to_string(), "thirty".to_string());
    form.insert("name".to_string(), "Ada".to_string());
    if let Err(e) = validate_string_map(&form, false, &rules) {
        println!("\n✗ form: {e}");
    }

    // Dynamic values narrowed to concrete types.
    let config = MapValidator::<Map<String, Value>>::new()
        .key(MapKeyRule::required("port").rule(int_value(in_range(1, 65535))))
        .key(MapKeyRule::optional("verbose").rule(bool_value(one_of(vec![true, false]))));
    let Value::Object(input) = json!({ "port": "8080", "verbose": true }) else {
        unreachable!()
    };
    match config.validate(&input) {
        Ok(()) => println!("\n✓ config accepted"),
        Err(e) => println!("\n✗ config: {e}\n{}", e.to_json_value()),
    }
}

//! Using the lua! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use luon::{lua, render_value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let nil_val = lua!(nil);
    let bool_val = lua!(true);
    let number = lua!(42);
    let text = lua!("Hello, Lua!");

    println!("Primitives:");
    println!("  nil:    {}", render_value(&nil_val)?);
    println!("  bool:   {}", render_value(&bool_val)?);
    println!("  number: {}", render_value(&number)?);
    println!("  text:   {}\n", render_value(&text)?);

    let numbers = lua!([1, 2, 3, 4, 5]);
    let mixed = lua!([1, "two", true, nil]);

    println!("Sequences:");
    println!("{}", render_value(&numbers)?);
    println!("{}\n", render_value(&mixed)?);

    let config = lua!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0",
        },
        "debug": false,
        "plugins": ["core", "net"],
    });

    println!("Nested:");
    println!("{}", render_value(&config)?);

    Ok(())
}

//! Basic Lua rendering from serde types.
//!
//! Run with: cargo run --example simple

use luon::{render_document, render_value, to_value};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Settings {
    title: String,
    width: u32,
    height: u32,
    fullscreen: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings {
        title: "My Game".to_string(),
        width: 1280,
        height: 720,
        fullscreen: false,
    };

    let value = to_value(&settings)?;

    // As a single table expression
    println!("Expression:\n{}\n", render_value(&value)?);

    // As a file of global assignments
    println!("Document:\n{}", render_document(&value)?);

    Ok(())
}

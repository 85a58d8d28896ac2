//! Whole-document rendering with layout options.
//!
//! Run with: cargo run --example document

use luon::{lua, render_document_with_options, LuaValue, RenderOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = lua!({
        "banner": "line one\nline two\nline three",
        "retries": nil,
        "limits": { "cpu": 4, "memory": 2048 },
        "hosts": ["alpha", "beta", "gamma"],
    });

    // Defaults: two-space indent, nil members kept, threshold 2.
    println!("Defaults:\n{}", render_document_with_options(&doc, RenderOptions::new())?);

    // Tab indent, nils dropped, collections inline until 4 entries.
    let options = RenderOptions::new()
        .with_indent("\t")
        .with_omit_nil_members(true)
        .with_multiline_threshold(4);
    println!("Tuned:\n{}", render_document_with_options(&doc, options)?);

    // Raw and decorated roots emit runnable statements directly.
    let stmt = LuaValue::decorated("return ", lua!({ "ok": true }), "");
    println!("Return:\n{}", render_document_with_options(&stmt, RenderOptions::new())?);

    Ok(())
}

//! Path, class and kind converters.
//!
//! Run with: cargo run --example converters

use luon::{
    lua, Converters, LuaObject, LuaValue, Renderer, RenderOptions, ValueKind,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let converters = Converters::builder()
        // A path rule pins an exact structural location.
        .path("window.title", |_| LuaValue::from("Release Build"))
        // A splat segment covers every element of a sequence.
        .path("users[*].id", |v| match v.as_i64() {
            Some(n) => LuaValue::from(n + 1000),
            None => v.clone(),
        })
        // A class rule rewrites every typed object of that class.
        .class("Color", |v| {
            let obj = v.as_object().expect("Color converter applied to object");
            LuaValue::raw(format!(
                "Color({}, {}, {})",
                obj.props.get("r").unwrap_or(&LuaValue::from(0)),
                obj.props.get("g").unwrap_or(&LuaValue::from(0)),
                obj.props.get("b").unwrap_or(&LuaValue::from(0)),
            ))
        })
        // Ancestry: a rule for the parent class covers subclasses too.
        .ancestor("Accent", "Color")
        // A kind rule is the structural default for everything unmatched.
        .kind(ValueKind::Bool, |v| match v.as_bool() {
            Some(b) => LuaValue::raw(if b { "1" } else { "0" }),
            None => v.clone(),
        })
        .build()?;

    let mut accent = LuaObject::of_class("Accent");
    accent.insert("r", LuaValue::from(255));
    accent.insert("g", LuaValue::from(128));
    accent.insert("b", LuaValue::from(0));

    let mut doc = lua!({
        "window": { "title": "dev", "resizable": true },
        "users": [{ "id": 1 }, { "id": 2 }],
    });
    if let LuaValue::Object(obj) = &mut doc {
        obj.insert("accent", LuaValue::Object(accent));
    }

    let renderer = Renderer::with_converters(RenderOptions::new(), converters);
    println!("{}", renderer.render_document(&doc)?);

    Ok(())
}

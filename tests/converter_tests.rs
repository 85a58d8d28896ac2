use luon::{
    lua, Converters, LuaObject, LuaValue, Renderer, RenderOptions, ValueKind,
};

fn render(converters: Converters, value: &LuaValue) -> String {
    Renderer::with_converters(RenderOptions::new(), converters)
        .render_document(value)
        .unwrap()
}

#[test]
fn test_path_rule_rewrites_one_location() {
    let converters = Converters::builder()
        .path("window.title", |_| LuaValue::from("Main"))
        .build()
        .unwrap();

    let value = lua!({
        "window": { "title": "old", "footer": "old" },
    });
    assert_eq!(
        render(converters, &value),
        "window = {\n  title = \"Main\";\n  footer = \"old\";\n}\n"
    );
}

#[test]
fn test_anchored_spec_matches_root_only() {
    let converters = Converters::builder()
        .path("^title", |_| LuaValue::from("root"))
        .build()
        .unwrap();

    let value = lua!({
        "title": "a",
        "window": { "title": "b" },
    });
    assert_eq!(
        render(converters, &value),
        "title = \"root\"\nwindow = { title = \"b\" }\n"
    );
}

#[test]
fn test_floating_spec_matches_any_depth() {
    let converters = Converters::builder()
        .path("title", |_| LuaValue::from("T"))
        .build()
        .unwrap();

    let value = lua!({
        "title": "a",
        "window": { "title": "b" },
    });
    assert_eq!(
        render(converters, &value),
        "title = \"T\"\nwindow = { title = \"T\" }\n"
    );
}

#[test]
fn test_splat_spec_matches_sequence_elements() {
    let converters = Converters::builder()
        .path("rows[*].id", |v| match v.as_i64() {
            Some(n) => LuaValue::from(n * 100),
            None => v.clone(),
        })
        .build()
        .unwrap();

    let value = lua!({
        "rows": [{ "id": 1 }, { "id": 2 }],
        "id": 3,
    });
    assert_eq!(
        render(converters, &value),
        "rows = {\n  { id = 100 },\n  { id = 200 }\n}\nid = 3\n"
    );
}

#[test]
fn test_wildcard_property_segment() {
    let converters = Converters::builder()
        .path("sizes.*", |v| match v.as_i64() {
            Some(n) => LuaValue::from(n + 1),
            None => v.clone(),
        })
        .build()
        .unwrap();

    let value = lua!({
        "sizes": { "w": 1, "h": 2 },
        "other": 5,
    });
    assert_eq!(
        render(converters, &value),
        "sizes = {\n  w = 2;\n  h = 3;\n}\nother = 5\n"
    );
}

#[test]
fn test_map_key_spec() {
    let converters = Converters::builder()
        .path("lookup[7]", |_| LuaValue::from("seven"))
        .build()
        .unwrap();

    let mut obj = LuaObject::new();
    obj.insert(
        "lookup",
        LuaValue::map(vec![
            (LuaValue::from(7), LuaValue::from(0)),
            (LuaValue::from(8), LuaValue::from(0)),
        ]),
    );
    assert_eq!(
        render(converters, &LuaValue::Object(obj)),
        "lookup = {\n  [7] = \"seven\";\n  [8] = 0;\n}\n"
    );
}

#[test]
fn test_kind_rule_is_structural_default() {
    let converters = Converters::builder()
        .kind(ValueKind::Number, |v| match v.as_i64() {
            Some(n) => LuaValue::from(n * 2),
            None => v.clone(),
        })
        .build()
        .unwrap();

    let value = lua!({ "a": 3, "b": "text" });
    assert_eq!(
        render(converters, &value),
        "a = 6\nb = \"text\"\n"
    );
}

#[test]
fn test_path_result_is_not_reconverted() {
    // The kind rule would double the path rule's result if resolution
    // ran twice.
    let converters = Converters::builder()
        .path("n", |_| LuaValue::from(10))
        .kind(ValueKind::Number, |v| match v.as_i64() {
            Some(n) => LuaValue::from(n * 2),
            None => v.clone(),
        })
        .build()
        .unwrap();

    let value = lua!({ "n": 1 });
    assert_eq!(render(converters, &value), "n = 10\n");
}

#[test]
fn test_children_of_converted_result_are_converted() {
    let converters = Converters::builder()
        .path("meta", |_| lua!({ "note": "hi" }))
        .kind(ValueKind::String, |v| match v.as_str() {
            Some(s) => LuaValue::from(s.to_uppercase()),
            None => v.clone(),
        })
        .build()
        .unwrap();

    let value = lua!({ "meta": 0 });
    assert_eq!(render(converters, &value), "meta = { note = \"HI\" }\n");
}

#[test]
fn test_class_rule_beats_object_kind() {
    let converters = Converters::builder()
        .class("Color", |v| {
            let obj = v.as_object().unwrap();
            LuaValue::raw(format!(
                "Color({}, {})",
                obj.props.get("r").unwrap(),
                obj.props.get("g").unwrap()
            ))
        })
        .kind(ValueKind::Object, |_| LuaValue::from("generic"))
        .build()
        .unwrap();

    let mut color = LuaObject::of_class("Color");
    color.insert("r", LuaValue::from(1));
    color.insert("g", LuaValue::from(2));

    let mut doc = LuaObject::new();
    doc.insert("tint", LuaValue::Object(color));
    doc.insert("misc", LuaValue::Object(LuaObject::of_class("Other")));

    assert_eq!(
        render(converters, &LuaValue::Object(doc)),
        "tint = Color(1, 2)\nmisc = \"generic\"\n"
    );
}

#[test]
fn test_ancestry_walk_through_renderer() {
    let converters = Converters::builder()
        .class("Widget", |_| LuaValue::from("widget"))
        .ancestor("Button", "Widget")
        .ancestor("IconButton", "Button")
        .build()
        .unwrap();

    let mut doc = LuaObject::new();
    doc.insert("a", LuaValue::Object(LuaObject::of_class("IconButton")));
    doc.insert("b", LuaValue::Object(LuaObject::of_class("Widget")));

    assert_eq!(
        render(converters, &LuaValue::Object(doc)),
        "a = \"widget\"\nb = \"widget\"\n"
    );
}

#[test]
fn test_primitive_kinds_have_no_hierarchy() {
    let converters = Converters::builder()
        .kind(ValueKind::Number, |_| LuaValue::from("num"))
        .build()
        .unwrap();

    let value = lua!({ "s": "keep", "b": true });
    assert_eq!(
        render(converters, &value),
        "s = \"keep\"\nb = true\n"
    );
}

#[test]
fn test_root_value_is_converted() {
    let converters = Converters::builder()
        .path("^", |_| lua!({ "replaced": true }))
        .build()
        .unwrap();

    let value = lua!({ "original": 1 });
    assert_eq!(render(converters, &value), "replaced = true\n");
}

#[test]
fn test_converted_nil_is_omitted() {
    let converters = Converters::builder()
        .path("secret", |_| LuaValue::Nil)
        .build()
        .unwrap();

    let value = lua!({ "secret": "hunter2", "public": 1 });
    let out = Renderer::with_converters(
        RenderOptions::new().with_omit_nil_members(true),
        converters,
    )
    .render_document(&value)
    .unwrap();
    assert_eq!(out, "public = 1\n");
}

#[test]
fn test_bad_spec_fails_at_build_time() {
    let err = Converters::builder()
        .path("a..b", |v| v.clone())
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("invalid path spec"));
}

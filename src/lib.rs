//! # luon
//!
//! A renderer that turns in-memory value trees into Lua table-literal
//! source text, with caller-installed converters that rewrite values by
//! structural path or by type before they hit the page.
//!
//! ## Why render Lua?
//!
//! Plenty of tools consume configuration, saved state, or generated data
//! as plain Lua files: a table literal per value, or a sequence of global
//! assignments the host interpreter executes directly. `luon` produces
//! that text from a [`LuaValue`] tree you build by hand, with the [`lua!`]
//! macro, or from any `Serialize` type via [`to_value`].
//!
//! ## Key Features
//!
//! - **Two output shapes**: a single expression ([`render_value`]) or a
//!   whole document of global assignments ([`render_document`])
//! - **Converters**: rewrite values at render time, selected by path spec
//!   (`window.title`, `rows[*].id`), by object class with ancestry
//!   fallback, or by structural kind
//! - **Layout control**: formatted collections break onto multiple lines
//!   past a threshold; plain ones always stay inline
//! - **Faithful Lua**: long-bracket strings for multiline text, `0/0` and
//!   `1/0` for the non-finite floats, reserved words never emitted bare
//! - **Serde Compatible**: build trees from `#[derive(Serialize)]` types;
//!   struct names carry over as object classes
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! luon = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Rendering a document
//!
//! ```rust
//! use luon::{lua, render_document};
//!
//! let config = lua!({
//!     "width": 120,
//!     "title": "demo",
//! });
//!
//! assert_eq!(
//!     render_document(&config).unwrap(),
//!     "width = 120\ntitle = \"demo\"\n"
//! );
//! ```
//!
//! ### Rendering from serde types
//!
//! ```rust
//! use luon::{to_value, render_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Window {
//!     title: String,
//!     width: u32,
//! }
//!
//! let window = Window { title: "main".to_string(), width: 80 };
//! let value = to_value(&window).unwrap();
//! assert_eq!(
//!     render_value(&value).unwrap(),
//!     "{\n  title = \"main\";\n  width = 80;\n}"
//! );
//! ```
//!
//! ### Converters
//!
//! ```rust
//! use luon::{lua, Converters, LuaValue, Renderer, RenderOptions};
//!
//! let converters = Converters::builder()
//!     .path("window.width", |v| match v.as_i64() {
//!         Some(n) => LuaValue::from(n * 2),
//!         None => v.clone(),
//!     })
//!     .build()
//!     .unwrap();
//!
//! let renderer = Renderer::with_converters(RenderOptions::new(), converters);
//! let value = lua!({ "window": { "width": 40, "height": 20 } });
//! assert_eq!(
//!     renderer.render_document(&value).unwrap(),
//!     "window = {\n  width = 80;\n  height = 20;\n}\n"
//! );
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - Your first rendered table
//! - **`macro.rs`** - Building values with the lua! macro
//! - **`converters.rs`** - Path, class and kind converters
//! - **`document.rs`** - Whole-document rendering with layout options
//!
//! Run any of them with: `cargo run --example <name>`

pub mod convert;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod render;
pub mod ser;
pub mod value;

pub use convert::{ConverterFn, Converters, ConvertersBuilder};
pub use error::{Error, Result};
pub use map::LuaMap;
pub use options::RenderOptions;
pub use path::{Path, PathEntry, PathSpec};
pub use render::Renderer;
pub use ser::{to_value, LuaValueSerializer};
pub use value::{Decoration, LuaObject, LuaValue, Number, ValueKind};

/// Renders a value as a single Lua expression with default options.
///
/// # Examples
///
/// ```rust
/// use luon::{lua, render_value};
///
/// assert_eq!(render_value(&lua!([1, 2, 3])).unwrap(), "{\n  1,\n  2,\n  3\n}");
/// assert_eq!(render_value(&lua!(nil)).unwrap(), "nil");
/// ```
///
/// # Errors
///
/// Returns an error if a table in the tree carries a nil or NaN key.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_value(value: &LuaValue) -> Result<String> {
    render_value_with_options(value, RenderOptions::default())
}

/// Renders a value as a single Lua expression with custom layout options.
///
/// # Examples
///
/// ```rust
/// use luon::{lua, render_value_with_options, RenderOptions};
///
/// let value = lua!({ "a": 1, "b": 2 });
/// let options = RenderOptions::new().with_multiline_threshold(3);
/// assert_eq!(
///     render_value_with_options(&value, options).unwrap(),
///     "{ a = 1; b = 2 }"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if a table in the tree carries a nil or NaN key.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_value_with_options(value: &LuaValue, options: RenderOptions) -> Result<String> {
    Renderer::new(options).render_value(value)
}

/// Renders a value as a document of global assignments with default
/// options.
///
/// The root must be object-like, map-like, or a raw/decorated value; each
/// member becomes one `name = value` line (non-identifier keys assign
/// through `_G[...]`).
///
/// # Examples
///
/// ```rust
/// use luon::{lua, render_document};
///
/// let doc = lua!({ "greeting": "hello" });
/// assert_eq!(render_document(&doc).unwrap(), "greeting = \"hello\"\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidRoot`] for scalar or sequence roots, and
/// propagates key errors from nested tables.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_document(value: &LuaValue) -> Result<String> {
    render_document_with_options(value, RenderOptions::default())
}

/// Renders a document of global assignments with custom layout options.
///
/// # Errors
///
/// Returns [`Error::InvalidRoot`] for scalar or sequence roots, and
/// propagates key errors from nested tables.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_document_with_options(value: &LuaValue, options: RenderOptions) -> Result<String> {
    Renderer::new(options).render_document(value)
}

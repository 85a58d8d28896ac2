//! The Lua layout renderer.
//!
//! [`Renderer`] turns a [`LuaValue`] tree into Lua source text, leaves
//! first: before any nested value is rendered, the converter table is asked
//! to rewrite it at its structural path. Rendering holds no mutable state
//! beyond the output buffer; a renderer can serve concurrent calls as long
//! as each call owns its input tree.
//!
//! Two entry points:
//!
//! - [`Renderer::render_value`] produces a single expression (the document
//!   root path, nesting level 0);
//! - [`Renderer::render_document`] produces a complete program of global
//!   assignments, one per named member, map entry, or positional element.
//!
//! ## Layout rules
//!
//! Formatted collections break onto multiple lines once their rendered
//! entry count reaches the configured threshold; plain collections and any
//! collection rendered without a nesting level (key contexts) stay inline.
//! Named entries terminate with `;`, positional elements separate with `,`.
//!
//! ## Examples
//!
//! ```rust
//! use luon::{lua, Renderer, RenderOptions};
//!
//! let renderer = Renderer::new(RenderOptions::new());
//! let value = lua!({ "width": 120, "full": true });
//! assert_eq!(
//!     renderer.render_value(&value).unwrap(),
//!     "{\n  width = 120;\n  full = true;\n}"
//! );
//! assert_eq!(
//!     renderer.render_document(&value).unwrap(),
//!     "width = 120\nfull = true\n"
//! );
//! ```

use crate::{
    Converters, Error, LuaObject, LuaValue, Number, Path, PathEntry, RenderOptions, Result,
};
use std::borrow::Cow;

/// Assignments whose key is not a bare identifier index the global
/// environment table explicitly.
const GLOBAL_TABLE: &str = "_G";

/// Highest long-bracket level tried before falling back to a quoted string.
const MAX_BRACKET_LEVEL: usize = 10;

const RESERVED_WORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// The Lua renderer.
///
/// Holds the layout options and the compiled converter table; both are
/// immutable for the renderer's lifetime.
pub struct Renderer {
    options: RenderOptions,
    converters: Converters,
}

/// One gathered table entry: the rendered key text (if named), the already
/// converted child, and the path step to re-push while rendering it.
struct Slot<'a> {
    key: Option<String>,
    value: Cow<'a, LuaValue>,
    step: PathEntry,
}

impl Renderer {
    /// Creates a renderer with an empty converter table.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Renderer {
            options,
            converters: Converters::empty(),
        }
    }

    /// Creates a renderer with a converter table.
    #[must_use]
    pub fn with_converters(options: RenderOptions, converters: Converters) -> Self {
        Renderer {
            options,
            converters,
        }
    }

    /// The layout options this renderer was built with.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Converts and renders a value as a single expression, at the root
    /// path and nesting level 0.
    ///
    /// # Errors
    ///
    /// Fails if a nil or NaN key is encountered anywhere in the tree.
    pub fn render_value(&self, value: &LuaValue) -> Result<String> {
        let mut path = Path::root();
        let converted = self.converters.convert(value, Some(&path));
        let mut out = String::with_capacity(256);
        self.write_value(&converted, Some(&mut path), Some(0), &mut out)?;
        Ok(out)
    }

    /// Converts and renders a value as a complete document: one global
    /// assignment per named member (or map entry), then one per positional
    /// element at successive 1-based indices.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidRoot`] if the converted root is neither
    /// object-like nor map-like nor a raw/decorated value, and propagates
    /// key errors from nested tables.
    pub fn render_document(&self, value: &LuaValue) -> Result<String> {
        let mut path = Path::root();
        let converted = self.converters.convert(value, Some(&path));
        let mut out = String::with_capacity(256);

        match converted.as_ref() {
            LuaValue::Raw(text) => {
                out.push_str(text);
                out.push('\n');
            }
            LuaValue::Decorated(d) => {
                out.push_str(&d.before);
                self.write_value(&d.value, Some(&mut path), Some(0), &mut out)?;
                out.push_str(&d.after);
                out.push('\n');
            }
            LuaValue::Object(obj) => {
                for (name, child) in obj.props.iter() {
                    let key = LuaValue::String(name.clone());
                    let lhs = self.write_key(&key, GLOBAL_TABLE)?;
                    let step = PathEntry::Property(name.clone());
                    self.write_assignment(&lhs, child, step, true, &mut path, &mut out)?;
                }
                for (i, child) in obj.elems.iter().enumerate() {
                    let key = LuaValue::Number(Number::Integer(i as i64 + 1));
                    let lhs = self.write_key(&key, GLOBAL_TABLE)?;
                    self.write_assignment(&lhs, child, PathEntry::element(), false, &mut path, &mut out)?;
                }
            }
            LuaValue::Map { entries, .. } => {
                // Omission applies to object named members only; map
                // entries are kept even when their value is nil.
                for (key, child) in entries {
                    let lhs = self.write_key(key, GLOBAL_TABLE)?;
                    let step = PathEntry::Key(key.clone());
                    self.write_assignment(&lhs, child, step, false, &mut path, &mut out)?;
                }
            }
            other => {
                return Err(Error::invalid_root(format!(
                    "expected an object-like or map-like value, found {}",
                    other.kind()
                )));
            }
        }

        Ok(out)
    }

    fn write_assignment(
        &self,
        lhs: &str,
        child: &LuaValue,
        step: PathEntry,
        omittable: bool,
        path: &mut Path,
        out: &mut String,
    ) -> Result<()> {
        path.push(step);
        let converted = self.converters.convert(child, Some(path));
        if omittable && self.options.omit_nil_members && converted.is_nil() {
            path.pop();
            return Ok(());
        }
        out.push_str(lhs);
        out.push_str(" = ");
        self.write_value(&converted, Some(path), Some(0), out)?;
        path.pop();
        out.push('\n');
        Ok(())
    }

    /// Renders one value into the buffer. `path == None` disables
    /// conversion for everything below; `level == None` forces compact
    /// (never multiline) layout.
    fn write_value(
        &self,
        value: &LuaValue,
        mut path: Option<&mut Path>,
        level: Option<usize>,
        out: &mut String,
    ) -> Result<()> {
        match value {
            LuaValue::Nil => out.push_str("nil"),
            LuaValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            LuaValue::Number(n) => write_number(n, out),
            LuaValue::String(s) => self.write_string(s, level.is_some(), out),
            LuaValue::Raw(text) => out.push_str(text),
            LuaValue::Decorated(d) => {
                out.push_str(&d.before);
                self.write_value(&d.value, path, level, out)?;
                out.push_str(&d.after);
            }
            LuaValue::Seq { items, formatted } => {
                let slots = self.gather_seq(items, path.as_deref_mut())?;
                self.write_table(&slots, *formatted, path, level, out)?;
            }
            LuaValue::Map { entries, formatted } => {
                let slots = self.gather_map(entries, path.as_deref_mut())?;
                self.write_table(&slots, *formatted, path, level, out)?;
            }
            LuaValue::Object(obj) => {
                let slots = self.gather_object(obj, path.as_deref_mut())?;
                self.write_table(&slots, true, path, level, out)?;
            }
        }
        Ok(())
    }

    fn convert_child<'a>(
        &self,
        child: &'a LuaValue,
        step: PathEntry,
        path: Option<&mut Path>,
    ) -> Cow<'a, LuaValue> {
        match path {
            Some(p) => {
                p.push(step);
                let converted = self.converters.convert(child, Some(p));
                p.pop();
                converted
            }
            None => Cow::Borrowed(child),
        }
    }

    fn gather_seq<'a>(
        &self,
        items: &'a [LuaValue],
        mut path: Option<&mut Path>,
    ) -> Result<Vec<Slot<'a>>> {
        let mut slots = Vec::with_capacity(items.len());
        for item in items {
            let value = self.convert_child(item, PathEntry::element(), path.as_deref_mut());
            slots.push(Slot {
                key: None,
                value,
                step: PathEntry::element(),
            });
        }
        Ok(slots)
    }

    fn gather_map<'a>(
        &self,
        entries: &'a [(LuaValue, LuaValue)],
        mut path: Option<&mut Path>,
    ) -> Result<Vec<Slot<'a>>> {
        let mut slots = Vec::with_capacity(entries.len());
        for (key, child) in entries {
            let rendered_key = self.write_key(key, "")?;
            let step = PathEntry::Key(key.clone());
            let value = self.convert_child(child, step.clone(), path.as_deref_mut());
            slots.push(Slot {
                key: Some(rendered_key),
                value,
                step,
            });
        }
        Ok(slots)
    }

    fn gather_object<'a>(
        &self,
        obj: &'a LuaObject,
        mut path: Option<&mut Path>,
    ) -> Result<Vec<Slot<'a>>> {
        let mut slots = Vec::with_capacity(obj.props.len() + obj.elems.len());
        for (name, child) in obj.props.iter() {
            let key = LuaValue::String(name.clone());
            let rendered_key = self.write_key(&key, "")?;
            let step = PathEntry::Property(name.clone());
            let value = self.convert_child(child, step.clone(), path.as_deref_mut());
            if self.options.omit_nil_members && value.is_nil() {
                continue;
            }
            slots.push(Slot {
                key: Some(rendered_key),
                value,
                step,
            });
        }
        for child in &obj.elems {
            let value = self.convert_child(child, PathEntry::element(), path.as_deref_mut());
            slots.push(Slot {
                key: None,
                value,
                step: PathEntry::element(),
            });
        }
        Ok(slots)
    }

    fn write_table(
        &self,
        slots: &[Slot<'_>],
        formatted: bool,
        mut path: Option<&mut Path>,
        level: Option<usize>,
        out: &mut String,
    ) -> Result<()> {
        if slots.is_empty() {
            out.push_str("{}");
            return Ok(());
        }

        let multiline =
            formatted && level.is_some() && slots.len() >= self.options.multiline_threshold;

        if multiline {
            let level = level.unwrap_or(0);
            let last = slots.len() - 1;
            out.push('{');
            for (i, slot) in slots.iter().enumerate() {
                out.push('\n');
                self.write_indent(level + 1, out);
                if let Some(key) = &slot.key {
                    out.push_str(key);
                    out.push_str(" = ");
                }
                self.write_slot_value(slot, path.as_deref_mut(), Some(level + 1), out)?;
                if slot.key.is_some() {
                    out.push(';');
                } else if i != last {
                    out.push(',');
                }
            }
            out.push('\n');
            self.write_indent(level, out);
            out.push('}');
        } else {
            out.push_str("{ ");
            let child_level = level.map(|l| l + 1);
            for (i, slot) in slots.iter().enumerate() {
                if i > 0 {
                    // The separator follows the kind of the previous entry.
                    out.push_str(if slots[i - 1].key.is_some() { "; " } else { ", " });
                }
                if let Some(key) = &slot.key {
                    out.push_str(key);
                    out.push_str(" = ");
                }
                self.write_slot_value(slot, path.as_deref_mut(), child_level, out)?;
            }
            out.push_str(" }");
        }
        Ok(())
    }

    fn write_slot_value(
        &self,
        slot: &Slot<'_>,
        path: Option<&mut Path>,
        level: Option<usize>,
        out: &mut String,
    ) -> Result<()> {
        match path {
            Some(p) => {
                p.push(slot.step.clone());
                let result = self.write_value(&slot.value, Some(p), level, out);
                p.pop();
                result
            }
            None => self.write_value(&slot.value, None, level, out),
        }
    }

    /// Renders a table key. Bare identifiers pass through unchanged, raw
    /// keys emit their text, everything else becomes `prefix[expr]` with
    /// the key rendered compactly and unconverted.
    fn write_key(&self, key: &LuaValue, prefix: &str) -> Result<String> {
        match key {
            LuaValue::Nil => Err(Error::invalid_key("nil is not a valid key")),
            LuaValue::Number(n) if n.is_nan() => Err(Error::invalid_key("NaN is not a valid key")),
            LuaValue::String(s) if is_identifier(s) => Ok(s.clone()),
            LuaValue::Raw(text) => Ok(text.clone()),
            other => {
                let mut rendered = String::new();
                self.write_value(other, None, None, &mut rendered)?;
                Ok(format!("{}[{}]", prefix, rendered))
            }
        }
    }

    /// Encodes a string literal. With `allow_multiline`, strings carrying an
    /// interior newline try the long-bracket form first: the lowest bracket
    /// level (0..=10) whose closing sequence does not occur in the text
    /// wraps the raw string. Control characters other than the newline, or
    /// no safe level, abandon the attempt for a quoted form whose newlines
    /// escape as line continuations.
    ///
    /// The level search checks for the closing sequence occurring verbatim
    /// inside the text, so two Lua long-bracket quirks pass through: a
    /// string ending in `]` merges with the closing bracket at level 0
    /// (Lua closes the literal one character early), and Lua discards a
    /// newline that immediately follows the opening bracket. Strings that
    /// must survive either shape byte-exactly should avoid the long form by
    /// carrying no interior newline.
    fn write_string(&self, s: &str, allow_multiline: bool, out: &mut String) {
        let quote = if s.contains('"') && !s.contains('\'') {
            '\''
        } else {
            '"'
        };

        if allow_multiline && has_interior_newline(s) {
            if s.chars().any(|c| c.is_control() && c != '\n') {
                write_quoted(s, quote, true, out);
                return;
            }
            if let Some(level) = safe_bracket_level(s) {
                let eq = "=".repeat(level);
                out.push('[');
                out.push_str(&eq);
                out.push('[');
                out.push_str(s);
                out.push(']');
                out.push_str(&eq);
                out.push(']');
                return;
            }
            write_quoted(s, quote, true, out);
            return;
        }

        write_quoted(s, quote, false, out);
    }

    fn write_indent(&self, level: usize, out: &mut String) {
        for _ in 0..level {
            out.push_str(&self.options.indent);
        }
    }
}

fn write_number(n: &Number, out: &mut String) {
    match n {
        Number::Integer(i) => out.push_str(&i.to_string()),
        Number::Float(f) if f.is_nan() => out.push_str("0/0"),
        Number::Float(f) if f.is_infinite() => {
            out.push_str(if *f > 0.0 { "1/0" } else { "-1/0" })
        }
        Number::Float(f) => out.push_str(&f.to_string()),
        Number::Infinity => out.push_str("1/0"),
        Number::NegativeInfinity => out.push_str("-1/0"),
        Number::NaN => out.push_str("0/0"),
    }
}

/// A bare Lua identifier: ASCII letter or underscore, then letters, digits
/// or underscores, and not a reserved word.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return false;
    }
    !RESERVED_WORDS.contains(&s)
}

/// A newline with at least one character before and after it.
fn has_interior_newline(s: &str) -> bool {
    s.char_indices()
        .any(|(i, c)| c == '\n' && i > 0 && i + 1 < s.len())
}

/// The lowest bracket level whose closing sequence does not already occur in
/// the text; `None` when every level up to [`MAX_BRACKET_LEVEL`] is unsafe.
fn safe_bracket_level(s: &str) -> Option<usize> {
    (0..=MAX_BRACKET_LEVEL).find(|&level| {
        let closing = format!("]{}]", "=".repeat(level));
        !s.contains(&closing)
    })
}

fn write_quoted(s: &str, quote: char, continue_lines: bool, out: &mut String) {
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' if continue_lines => {
                out.push('\\');
                out.push('\n');
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(quote);
            }
            c if c.is_control() => {
                out.push_str(&format!("\\u{{{:x}}}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("a"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("snake_case_2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2x"));
        assert!(!is_identifier("a b"));
        assert!(!is_identifier("end"));
        assert!(!is_identifier("nil"));
    }

    #[test]
    fn test_has_interior_newline() {
        assert!(has_interior_newline("a\nb"));
        assert!(has_interior_newline("a\n\nb"));
        assert!(!has_interior_newline("\nab"));
        assert!(!has_interior_newline("ab\n"));
        assert!(!has_interior_newline("ab"));
        assert!(!has_interior_newline("\n"));
    }

    #[test]
    fn test_safe_bracket_level() {
        assert_eq!(safe_bracket_level("plain text"), Some(0));
        assert_eq!(safe_bracket_level("has ]] inside"), Some(1));
        assert_eq!(safe_bracket_level("]] and ]=]"), Some(2));

        let all_levels: String = (0..=MAX_BRACKET_LEVEL)
            .map(|l| format!("]{}]", "=".repeat(l)))
            .collect();
        assert_eq!(safe_bracket_level(&all_levels), None);
    }
}

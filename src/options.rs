//! Configuration options for Lua rendering.
//!
//! [`RenderOptions`] controls the layout side of rendering: indentation
//! text, whether nil-valued named members are omitted, and how many entries
//! a formatted collection needs before it breaks onto multiple lines.
//!
//! ## Examples
//!
//! ```rust
//! use luon::{lua, render_value_with_options, RenderOptions};
//!
//! let value = lua!({ "a": 1, "b": 2 });
//!
//! // Default: threshold 2, so two entries go multiline.
//! let out = render_value_with_options(&value, RenderOptions::new()).unwrap();
//! assert_eq!(out, "{\n  a = 1;\n  b = 2;\n}");
//!
//! // Raise the threshold and the same value stays inline.
//! let options = RenderOptions::new().with_multiline_threshold(3);
//! let out = render_value_with_options(&value, options).unwrap();
//! assert_eq!(out, "{ a = 1; b = 2 }");
//! ```

/// Configuration options for Lua rendering.
///
/// # Examples
///
/// ```rust
/// use luon::RenderOptions;
///
/// // Defaults: two-space indent, keep nil members, threshold 2.
/// let options = RenderOptions::new();
///
/// // Custom configuration
/// let options = RenderOptions::new()
///     .with_indent("\t")
///     .with_omit_nil_members(true)
///     .with_multiline_threshold(4);
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Text prepended once per nesting level.
    pub indent: String,
    /// Skip named members whose converted value is nil. Positional elements
    /// are never skipped.
    pub omit_nil_members: bool,
    /// Minimum rendered-entry count for a formatted collection to go
    /// multiline.
    pub multiline_threshold: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: "  ".to_string(),
            omit_nil_members: false,
            multiline_threshold: 2,
        }
    }
}

impl RenderOptions {
    /// Creates the default options (two-space indent, nil members kept,
    /// multiline threshold 2).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::RenderOptions;
    ///
    /// let options = RenderOptions::new();
    /// assert_eq!(options.indent, "  ");
    /// assert_eq!(options.multiline_threshold, 2);
    /// assert!(!options.omit_nil_members);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation text for one nesting level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::RenderOptions;
    ///
    /// let options = RenderOptions::new().with_indent("    ");
    /// assert_eq!(options.indent, "    ");
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets whether named members whose converted value is nil are omitted.
    #[must_use]
    pub fn with_omit_nil_members(mut self, omit: bool) -> Self {
        self.omit_nil_members = omit;
        self
    }

    /// Sets the rendered-entry count at which a formatted collection goes
    /// multiline.
    ///
    /// A collection with `threshold - 1` entries renders inline; one with
    /// `threshold` entries breaks onto multiple lines.
    #[must_use]
    pub fn with_multiline_threshold(mut self, threshold: usize) -> Self {
        self.multiline_threshold = threshold;
        self
    }
}

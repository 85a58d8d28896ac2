//! Error types for Lua rendering.
//!
//! All rendering failures are synchronous and terminate the current render
//! call; nothing is retried internally. Path-spec syntax problems are raised
//! eagerly when a converter table is built, never at render time.
//!
//! ## Error Categories
//!
//! - **Invalid key**: a `nil` or NaN value used as a table key
//! - **Invalid document root**: [`render_document`](crate::render_document)
//!   called on a value that is not object-like, map-like, or a raw/decorated
//!   wrapper around one
//! - **Invalid path spec**: a converter path string that does not match the
//!   path grammar
//! - **Unsupported type**: a serde shape with no Lua counterpart reached
//!   [`to_value`](crate::to_value)
//!
//! ## Examples
//!
//! ```rust
//! use luon::{render_document, LuaValue};
//!
//! // A bare scalar cannot be a document root.
//! let err = render_document(&LuaValue::from(42)).unwrap_err();
//! assert!(err.to_string().contains("document root"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while building converter
/// tables or rendering values.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A `nil` or NaN value was used as a table key
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The document root is not an assignment-compatible shape
    #[error("invalid document root: {0}")]
    InvalidRoot(String),

    /// A converter path specification failed to parse
    #[error("invalid path spec `{spec}`: {reason}")]
    InvalidPathSpec { spec: String, reason: String },

    /// Unsupported type for value-tree construction
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid-key error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::Error;
    ///
    /// let err = Error::invalid_key("nil is not a valid key");
    /// assert!(err.to_string().contains("invalid key"));
    /// ```
    pub fn invalid_key<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidKey(msg.to_string())
    }

    /// Creates an invalid-document-root error.
    pub fn invalid_root<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidRoot(msg.to_string())
    }

    /// Creates an invalid-path-spec error for a spec string that failed to
    /// parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::Error;
    ///
    /// let err = Error::invalid_path_spec("a..b", "empty segment");
    /// assert!(err.to_string().contains("a..b"));
    /// ```
    pub fn invalid_path_spec(spec: &str, reason: &str) -> Self {
        Error::InvalidPathSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an unsupported-type error for serde shapes that cannot be
    /// expressed as a [`LuaValue`](crate::LuaValue).
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

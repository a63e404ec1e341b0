//! Configuration options for INI encoding.
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::{encode_with_options, ini, EncodeOptions};
//!
//! let doc = ini!({ "": { "a": "b" } });
//!
//! let options = EncodeOptions::new().with_byte_order_mark(true);
//! let text = encode_with_options(&doc, options);
//! assert_eq!(text, "\u{FEFF}a=b\n");
//! ```

/// Configuration options for INI encoding.
///
/// The encoder always writes `\n` line terminators and never escapes, quotes
/// or trims keys and values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Prefix the output with the UTF-8 byte order mark.
    pub byte_order_mark: bool,
}

impl EncodeOptions {
    /// Creates default options (no byte order mark).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_doc::EncodeOptions;
    ///
    /// let options = EncodeOptions::new();
    /// assert!(!options.byte_order_mark);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the output starts with a byte order mark.
    #[must_use]
    pub fn with_byte_order_mark(mut self, byte_order_mark: bool) -> Self {
        self.byte_order_mark = byte_order_mark;
        self
    }
}

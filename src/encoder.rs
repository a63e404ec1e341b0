//! INI encoding.
//!
//! The [`Encoder`] writes a [`Document`] as canonical INI text:
//!
//! - sections in name order, each introduced by `[name]`
//! - the main (unnamed) section first and without a header
//! - entries in key order as `key=value`, written verbatim
//! - names, keys and values copied byte for byte, UTF-8 or not
//! - `\n` after every line
//!
//! Comments, blank lines and original whitespace are not reconstructed, so
//! only the section/key/value bytes survive a parse-encode round trip.
//!
//! Most users should use [`encode`](crate::encode) in the crate root:
//!
//! ```rust
//! use ini_doc::{encode, ini};
//!
//! let doc = ini!({
//!     "": { "a": "a" },
//!     "foo": { "bar": "b", "baz": "ā" }
//! });
//! assert_eq!(encode(&doc, false), "a=a\n[foo]\nbar=b\nbaz=ā\n");
//! ```

use crate::text::UTF8_BYTE_ORDER_MARK;
use crate::{Document, EncodeOptions};
use bstr::BString;

/// The INI encoder.
pub struct Encoder {
    output: BString,
    options: EncodeOptions,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Self {
        Encoder {
            output: BString::from(Vec::with_capacity(256)),
            options,
        }
    }

    pub fn into_inner(self) -> BString {
        self.output
    }

    /// Appends `document` to the output. A byte order mark, if enabled, is
    /// only written while the output is still empty.
    pub fn encode_document(&mut self, document: &Document) {
        if self.options.byte_order_mark && self.output.is_empty() {
            self.output.extend_from_slice(&UTF8_BYTE_ORDER_MARK);
        }

        for (name, section) in document {
            if !name.is_empty() {
                self.output.push(b'[');
                self.output.extend_from_slice(name);
                self.output.extend_from_slice(b"]\n");
            }

            for (key, value) in section {
                self.output.extend_from_slice(key);
                self.output.push(b'=');
                self.output.extend_from_slice(value);
                self.output.push(b'\n');
            }
        }

        log::debug!(
            "encoded {} sections into {} bytes",
            document.len(),
            self.output.len()
        );
    }
}

//! # ini_doc
//!
//! A parser and encoder for the INI configuration format.
//!
//! ## What is INI?
//!
//! INI is a line-oriented format of bracketed section headers, `key=value`
//! pairs and `;` comments. Entries before any header belong to an implicit,
//! unnamed main section.
//!
//! ## Key Features
//!
//! - **Single pass**: one forward scan, linear in the input length
//! - **Bytes or text**: parses `&str`, `&[u8]`, readers, or any iterator of bytes
//! - **Byte transparent**: names, keys and values are [`BString`]s, so input
//!   that is not UTF-8 is kept and written back unchanged
//! - **Deterministic output**: sections and keys are encoded in name order
//! - **Two access modes**: auto-creating accessors for building documents,
//!   strict ones that fail on a missing section or key
//! - **Serde Compatible**: [`Document`] serializes as a map of maps
//!
//! ## Quick Start
//!
//! ```rust
//! use ini_doc::{encode, from_str};
//!
//! let mut doc = from_str("; settings\n[server]\nhost = localhost\nport=8080\n").unwrap();
//!
//! let server = doc.section("server").unwrap();
//! assert_eq!(server.value_str("host"), Some("localhost"));
//! assert_eq!(server.value_or("timeout", "30"), "30");
//!
//! doc.get_or_create_section("server").set_value("timeout", "60");
//! assert_eq!(
//!     encode(&doc, false),
//!     "[server]\nhost=localhost\nport=8080\ntimeout=60\n"
//! );
//! ```
//!
//! ### Raw bytes
//!
//! ```rust
//! use ini_doc::from_slice;
//!
//! let doc = from_slice(b"\xEF\xBB\xBFa=b\nname=Jos\xE9").unwrap();
//! let main = doc.section("").unwrap();
//! assert_eq!(main.value("a").unwrap(), "b");
//! assert_eq!(main.value("name").unwrap(), b"Jos\xE9".as_slice());
//! ```
//!
//! ### Building documents with the ini! macro
//!
//! ```rust
//! use ini_doc::ini;
//!
//! let doc = ini!({
//!     "": { "a": "a" },
//!     "foo": { "bar": "b" }
//! });
//! assert_eq!(doc.to_string(), "a=a\n[foo]\nbar=b\n");
//! ```
//!
//! ## Round trips
//!
//! Comments, blank lines and original whitespace are dropped by the parser,
//! so `encode(parse(text))` reproduces the structured content of `text`, not
//! its exact bytes.
//!
//! ## Format Specification
//!
//! See the [`format`] module.

pub mod document;
pub mod encoder;
pub mod error;
pub mod format;
pub mod macros;
pub mod options;
pub mod parser;
pub mod text;

pub use document::{Document, Section};
pub use encoder::Encoder;
pub use error::{ParseError, RangeError, Result};
pub use options::EncodeOptions;
pub use parser::Parser;
pub use text::{Byte, UTF8_BYTE_ORDER_MARK};

pub use bstr::{BStr, BString};

use std::io;

/// Parses INI from any sequence of byte-sized elements.
///
/// # Examples
///
/// ```rust
/// use ini_doc::parse;
///
/// let signed: Vec<i8> = vec![b'a' as i8, b'=' as i8, b'b' as i8];
/// let doc = parse(signed).unwrap();
/// assert_eq!(doc.section("").unwrap().value("a").unwrap(), "b");
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse<I>(input: I) -> Result<Document>
where
    I: IntoIterator,
    I::Item: Byte,
{
    Parser::new(input.into_iter().map(|b| b.to_byte())).parse()
}

/// Parses INI text.
///
/// # Examples
///
/// ```rust
/// use ini_doc::from_str;
///
/// let doc = from_str("[s]\na=b").unwrap();
/// assert_eq!(doc.len(), 1);
/// assert_eq!(doc.section("s").unwrap().value("a").unwrap(), "b");
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is malformed. Error messages include
/// line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    parse(s.bytes())
}

/// Parses INI from raw bytes.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Document> {
    parse(v)
}

/// Reads `reader` to the end and parses it as INI.
///
/// # Examples
///
/// ```rust
/// use ini_doc::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[s]\r\na=b\r\n")).unwrap();
/// assert_eq!(doc.section("s").unwrap().value("a").unwrap(), "b");
/// ```
///
/// # Errors
///
/// Returns [`ParseError::Io`] if reading fails, or any other [`ParseError`]
/// if the input is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|e| ParseError::io(&e.to_string()))?;
    from_slice(&buffer)
}

/// Encodes `document` as INI text, optionally prefixed with a UTF-8 byte
/// order mark.
///
/// The result is UTF-8 whenever every name, key and value is.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{encode, Document};
///
/// let mut doc = Document::new();
/// doc.get_or_create_section("").set_value("a", "a");
/// assert_eq!(encode(&doc, false), "a=a\n");
/// assert_eq!(encode(&doc, true).as_slice(), b"\xEF\xBB\xBFa=a\n");
/// ```
#[must_use]
pub fn encode(document: &Document, byte_order_mark: bool) -> BString {
    encode_with_options(
        document,
        EncodeOptions::new().with_byte_order_mark(byte_order_mark),
    )
}

/// Encodes `document` as INI text with custom options.
#[must_use]
pub fn encode_with_options(document: &Document, options: EncodeOptions) -> BString {
    let mut encoder = Encoder::new(options);
    encoder.encode_document(document);
    encoder.into_inner()
}

/// Encodes `document` and writes it to `writer`.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{ini, to_writer, EncodeOptions};
///
/// let doc = ini!({ "s": { "a": "b" } });
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc, EncodeOptions::default()).unwrap();
/// assert_eq!(buffer, b"[s]\na=b\n");
/// ```
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn to_writer<W>(mut writer: W, document: &Document, options: EncodeOptions) -> io::Result<()>
where
    W: io::Write,
{
    writer.write_all(&encode_with_options(document, options))
}

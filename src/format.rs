//! INI Format Reference
//!
//! This module documents the INI dialect read and written by this library.
//! It contains no code.
//!
//! # Overview
//!
//! An INI file is line oriented. Each line is one of: a section header, a
//! key/value entry, a comment, or blank. Entries before the first header
//! belong to the unnamed main section.
//!
//! ```text
//! ; global settings
//! name = demo
//!
//! [server]      ; trailing comments are allowed
//! host = localhost
//! port = 8080
//! ```
//!
//! # Lines
//!
//! | Line | Syntax | Notes |
//! |------|--------|-------|
//! | Header | `[name]` | Name trimmed of spaces and tabs; must not be empty |
//! | Entry | `key=value` | Key and value trimmed of spaces and tabs; key must not be empty |
//! | Comment | `; text` | Discarded |
//! | Blank | spaces, tabs | Ignored |
//!
//! Lines end at `\n`, `\r` or `\r\n`. The end of input ends the last line.
//!
//! ## Section headers
//!
//! - Everything between `[` and the first `]` is the name, including inner
//!   spaces and a stray `[`.
//! - After `]` only spaces, tabs and a `;` comment may follow. A second `]`
//!   is an error, so `[s]]` is rejected rather than read as section `s]`.
//! - A header that hits the end of its line before `]` is an error, as is a
//!   `;` before `]`.
//! - Declaring a section again empties it: later entries replace, they do not
//!   merge.
//!
//! ## Entries
//!
//! - The first `=` separates the key from the value. A second `=` on the
//!   same line is an error, so values cannot contain `=`.
//! - A `;` anywhere on the line starts a comment and ends the entry.
//! - A line without `=` stores its key with an empty value.
//! - An empty value is allowed; an empty key is an error.
//! - The same key given twice keeps the last value.
//!
//! There are no escapes, quotes, multi-line values, interpolation or typed
//! values. Every value is a byte string.
//!
//! # Encoding
//!
//! - A UTF-8 byte order mark at the very start of input is skipped.
//! - Bytes other than the structural ASCII characters are copied through
//!   undecoded. UTF-8 text round-trips unchanged, and so do Latin-1 or other
//!   non-UTF-8 bytes. Only the first three bytes are compared with the byte
//!   order mark, so a partial mark such as `EF BB` stays in the first key.
//!
//! # Output
//!
//! The encoder writes sections in name order (main section first, no
//! header) and entries in key order, each as `key=value\n`, verbatim. An
//! optional byte order mark may prefix the output. Comments and formatting
//! from parsed input are not retained.
//!
//! ```text
//! a=a
//! [foo]
//! bar=b
//! baz=ā
//! ```

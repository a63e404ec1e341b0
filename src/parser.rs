//! INI parsing.
//!
//! The [`Parser`] makes a single forward pass over a byte stream and builds a
//! [`Document`]. There is no backtracking: each scanning loop either advances
//! the cursor or stops at the end of input, and the end of input is treated
//! as the end of a line everywhere.
//!
//! Only ASCII bytes carry meaning (`[`, `]`, `=`, `;`, space, tab, `\r`,
//! `\n`). Every other byte, including each byte of a multi-byte UTF-8
//! sequence, is copied into the current name, key or value unchanged. Input
//! is never decoded, so bytes that are not valid UTF-8 are kept as they are.
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use ini_doc::from_str;
//!
//! let doc = from_str("[s];aa\na=b; bb").unwrap();
//! assert_eq!(doc.section("s").unwrap().value("a").unwrap(), "b");
//! ```

use crate::text::{is_blank, is_line_end, trim_blanks, UTF8_BYTE_ORDER_MARK};
use crate::{Document, ParseError, Result};
use bstr::BString;
use std::iter::{Chain, Peekable};
use std::vec;

/// The INI parser.
///
/// Created via [`Parser::new`] over any iterator of bytes. A leading UTF-8
/// byte order mark is skipped.
pub struct Parser<I: Iterator<Item = u8>> {
    input: Peekable<Chain<vec::IntoIter<u8>, I>>,
    line: usize,
    column: usize,
    after_cr: bool,
}

impl<I: Iterator<Item = u8>> Parser<I> {
    pub fn new(mut input: I) -> Self {
        // Up to three bytes are buffered so they can be replayed when they
        // turn out not to be a byte order mark.
        let mut prefix: Vec<u8> = input.by_ref().take(UTF8_BYTE_ORDER_MARK.len()).collect();
        if prefix == UTF8_BYTE_ORDER_MARK {
            prefix.clear();
        }

        Parser {
            input: prefix.into_iter().chain(input).peekable(),
            line: 1,
            column: 1,
            after_cr: false,
        }
    }

    /// Consumes the input and returns the parsed document.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first malformed construct. No
    /// partial document is returned.
    pub fn parse(mut self) -> Result<Document> {
        let mut document = Document::new();
        let mut current = BString::default();

        while let Some(&byte) = self.input.peek() {
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' => {
                    self.next_byte();
                }
                b'[' => {
                    current = self.parse_section_header()?;
                    log::debug!("section {:?} ends at line {}", current, self.line);
                    // Re-declaring a section starts it over.
                    document.get_or_create_section(&current).clear();
                }
                b';' => self.skip_line(),
                _ => {
                    let (key, value) = self.parse_entry()?;
                    log::trace!("[{:?}] {:?} = {:?}", current, key, value);
                    document.get_or_create_section(&current).set_value(key, value);
                }
            }
        }

        Ok(document)
    }

    fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.input.next()?;
        match byte {
            // Second half of "\r\n", the line was already counted.
            b'\n' if self.after_cr => self.after_cr = false,
            b'\n' | b'\r' => {
                self.line += 1;
                self.column = 1;
                self.after_cr = byte == b'\r';
            }
            _ => {
                self.column += 1;
                self.after_cr = false;
            }
        }
        Some(byte)
    }

    /// Consumes everything up to and including the next line terminator.
    fn skip_line(&mut self) {
        while let Some(byte) = self.next_byte() {
            if is_line_end(byte) {
                break;
            }
        }
    }

    /// Parses `[name]` plus an optional trailing comment. The cursor is on `[`.
    fn parse_section_header(&mut self) -> Result<BString> {
        let (start_line, start_col) = self.position();
        self.next_byte();

        let mut name = Vec::new();
        let mut closed = false;

        loop {
            let (line, col) = self.position();
            match self.next_byte() {
                None | Some(b'\n' | b'\r') => {
                    if !closed {
                        return Err(ParseError::UnexpectedEndOfSection { line, col });
                    }
                    break;
                }
                Some(b';') => {
                    if !closed {
                        return Err(ParseError::UnexpectedComment { line, col });
                    }
                    self.skip_line();
                    break;
                }
                Some(b']') if !closed => closed = true,
                Some(byte) if closed => {
                    if !is_blank(byte) {
                        return Err(ParseError::UnexpectedCharacterAfterSection {
                            line,
                            col,
                            found: byte,
                        });
                    }
                }
                Some(byte) => name.push(byte),
            }
        }

        let name = trim_blanks(&name);
        if name.is_empty() {
            return Err(ParseError::InvalidSectionName {
                line: start_line,
                col: start_col,
            });
        }
        Ok(BString::from(name))
    }

    /// Parses a `key=value` line. A `;` ends the entry wherever it appears,
    /// and a line without `=` stores the key with an empty value.
    fn parse_entry(&mut self) -> Result<(BString, BString)> {
        let (start_line, start_col) = self.position();

        let mut key = Vec::new();
        let mut value = Vec::new();
        let mut separated = false;

        loop {
            let (line, col) = self.position();
            match self.next_byte() {
                None | Some(b'\n' | b'\r') => break,
                Some(b'=') if separated => {
                    return Err(ParseError::UnexpectedCharacter {
                        line,
                        col,
                        found: b'=',
                    });
                }
                Some(b'=') => separated = true,
                Some(b';') => {
                    self.skip_line();
                    break;
                }
                Some(byte) if separated => value.push(byte),
                Some(byte) => key.push(byte),
            }
        }

        let key = trim_blanks(&key);
        if key.is_empty() {
            return Err(ParseError::InvalidKeyName {
                line: start_line,
                col: start_col,
            });
        }

        Ok((BString::from(key), BString::from(trim_blanks(&value))))
    }
}

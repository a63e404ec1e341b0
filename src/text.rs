//! Byte-level helpers shared by the parser and the encoder.

/// The UTF-8 encoding of U+FEFF.
pub const UTF8_BYTE_ORDER_MARK: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// An element the parser can read: anything that compares as a single byte.
///
/// Implemented for `u8` and `i8` (and references to them) so both decoded text
/// (`str::bytes`) and raw buffers can be fed to [`parse`](crate::parse)
/// without converting them first.
pub trait Byte: Copy {
    fn to_byte(self) -> u8;
}

impl Byte for u8 {
    #[inline]
    fn to_byte(self) -> u8 {
        self
    }
}

impl Byte for i8 {
    #[inline]
    fn to_byte(self) -> u8 {
        self as u8
    }
}

impl Byte for &u8 {
    #[inline]
    fn to_byte(self) -> u8 {
        *self
    }
}

impl Byte for &i8 {
    #[inline]
    fn to_byte(self) -> u8 {
        *self as u8
    }
}

/// Space or tab. Line terminators are not blanks.
#[inline]
pub(crate) const fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

#[inline]
pub(crate) const fn is_line_end(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r')
}

/// Strips leading and trailing blanks.
pub(crate) fn trim_blanks(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if !is_blank(*first) {
            break;
        }
        bytes = rest;
    }
    while let [rest @ .., last] = bytes {
        if !is_blank(*last) {
            break;
        }
        bytes = rest;
    }
    bytes
}

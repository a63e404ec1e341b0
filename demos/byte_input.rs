//! Parse raw bytes, such as a file read from disk, and report errors.
//!
//! Run with: cargo run --example byte_input

use ini_doc::{encode, encode_with_options, from_reader, from_slice, EncodeOptions, UTF8_BYTE_ORDER_MARK};
use std::error::Error;
use std::io::Cursor;

fn main() -> Result<(), Box<dyn Error>> {
    // Windows-style file with a byte order mark and CRLF line endings
    let bytes = b"\xEF\xBB\xBF[paths]\r\nhome = C:\\Users\\demo\r\n";
    let doc = from_slice(bytes)?;
    println!("home: {}", doc.section("paths")?.value("home")?);

    let doc = from_reader(Cursor::new(bytes.to_vec()))?;
    let text = encode_with_options(&doc, EncodeOptions::new().with_byte_order_mark(true));
    println!("re-encoded {} bytes, starts with BOM: {}", text.len(), text.starts_with(&UTF8_BYTE_ORDER_MARK));

    // Legacy Latin-1 files are kept byte for byte
    let latin1 = from_slice(b"[user]\nname = Jos\xE9\n")?;
    let name = latin1.section("user")?.value("name")?;
    println!("name: {} (utf-8: {})", name, std::str::from_utf8(name).is_ok());
    assert_eq!(encode(&latin1, false).as_slice(), b"[user]\nname=Jos\xE9\n");

    for broken in ["[paths", "[paths] extra", "key = a = b", "  = value"] {
        match from_slice(broken.as_bytes()) {
            Ok(_) => println!("{:?}: ok", broken),
            Err(err) => println!("{:?}: {}", broken, err),
        }
    }

    Ok(())
}

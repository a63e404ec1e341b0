//! Parse, inspect, edit and re-encode an INI document.
//!
//! Run with: cargo run --example simple

use ini_doc::{encode, from_slice, from_str};
use std::error::Error;

const CONFIG: &str = "\
; application settings
name = demo

[server]   ; listening socket
host = localhost
port = 8080

[cache]
enabled = yes
";

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc = from_str(CONFIG)?;

    let server = doc.section("server")?;
    println!("host: {}", server.value("host")?);
    println!("timeout: {}", server.value_or("timeout", "30"));

    // Strict lookups fail on typos
    if let Err(err) = doc.section("sever") {
        println!("lookup failed: {}", err);
    }

    doc.get_or_create_section("server").set_value("timeout", "60");
    doc.erase_section("cache");

    println!("\nEncoded:\n{}", encode(&doc, false));

    let back = from_slice(&encode(&doc, false))?;
    assert_eq!(doc, back);
    println!("✓ Round-trip successful");

    Ok(())
}

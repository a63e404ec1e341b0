use ini_doc::{encode, from_slice, from_str, ParseError};

#[test]
fn test_header_at_end_of_input_is_accepted() {
    let doc = from_str("[s]").unwrap();
    assert_eq!(doc.len(), 1);
    assert!(doc.section("s").unwrap().is_empty());
}

#[test]
fn test_unclosed_header_at_end_of_input_is_rejected() {
    assert!(matches!(
        from_str("[s"),
        Err(ParseError::UnexpectedEndOfSection { .. })
    ));
}

#[test]
fn test_redeclared_section_clears_entries() {
    let doc = from_str("[s]\na=1\nb=2\n[s]\nc=3\n").unwrap();
    let section = doc.section("s").unwrap();
    assert_eq!(section.len(), 1);
    assert_eq!(section.value("c").unwrap(), "3");
}

#[test]
fn test_main_section_is_not_reset_by_headers() {
    let doc = from_str("a=1\n[s]\nb=2\n").unwrap();
    assert_eq!(doc.section("").unwrap().value("a").unwrap(), "1");
    assert_eq!(doc.section("s").unwrap().value("b").unwrap(), "2");
}

#[test]
fn test_semicolon_never_reaches_key_or_value() {
    let inputs = ["a=b;c", "a=b ;c", "a ;=b", "a=;b", "a=b;;"];
    for input in inputs {
        let doc = from_str(input).unwrap();
        for (key, value) in doc.section("").unwrap() {
            assert!(!key.contains(&b';'), "{input:?} leaked into key {key:?}");
            assert!(!value.contains(&b';'), "{input:?} leaked into value {value:?}");
        }
    }
}

#[test]
fn test_whitespace_only_lines_produce_nothing() {
    let doc = from_str("   \n\t\t\n \t \r\n").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_comment_only_input_produces_nothing() {
    let doc = from_str("; one\n  ; two\r\n;three").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_only_space_and_tab_are_trimmed() {
    let doc = from_str("a=\u{a0}b\u{a0}").unwrap();
    assert_eq!(doc.section("").unwrap().value("a").unwrap(), "\u{a0}b\u{a0}");

    let doc = from_slice(b"a=\x0bb\x0c").unwrap();
    assert_eq!(doc.section("").unwrap().value("a").unwrap(), "\x0bb\x0c");
}

#[test]
fn test_value_with_separator_is_rejected() {
    assert!(matches!(
        from_str("url=http://x/?a=b"),
        Err(ParseError::UnexpectedCharacter { found: b'=', .. })
    ));
}

#[test]
fn test_brackets_inside_name_and_value() {
    let doc = from_str("[a[b]\nk=[v]").unwrap();
    assert_eq!(doc.section("a[b").unwrap().value("k").unwrap(), "[v]");
}

#[test]
fn test_byte_order_mark_only_at_start() {
    let doc = from_str("\u{FEFF}a=b").unwrap();
    assert_eq!(doc.section("").unwrap().value("a").unwrap(), "b");

    let doc = from_str("a=\u{FEFF}").unwrap();
    assert_eq!(doc.section("").unwrap().value("a").unwrap(), "\u{FEFF}");
}

#[test]
fn test_comments_are_not_encoded() {
    let doc = from_str("; header\n[s] ; note\n a = b ; trailing\n\n").unwrap();
    assert_eq!(encode(&doc, false), "[s]\na=b\n");
}

#[test]
fn test_line_terminators_normalize_to_newline() {
    let doc = from_str("[s]\r\na=b\rc=d").unwrap();
    assert_eq!(encode(&doc, false), "[s]\na=b\nc=d\n");
}

#[test]
fn test_non_utf8_bytes_pass_through() {
    let doc = from_slice(b"[\xC3]").unwrap();
    assert!(doc.section(b"\xC3").unwrap().is_empty());

    let text = b"[s]\nname=Jos\xE9\n";
    let doc = from_slice(text).unwrap();
    assert_eq!(
        doc.section("s").unwrap().value("name").unwrap(),
        b"Jos\xE9".as_slice()
    );
    assert_eq!(encode(&doc, false).as_slice(), text);
}

#[test]
fn test_partial_byte_order_mark_becomes_part_of_key() {
    let doc = from_slice(&[0xEF, 0xBB, b'k', b'=', b'x']).unwrap();
    let main = doc.section("").unwrap();
    assert_eq!(main.value(b"\xEF\xBBk").unwrap(), "x");
    assert_eq!(encode(&doc, false).as_slice(), b"\xEF\xBBk=x\n");
}

#[test]
fn test_second_closing_bracket_is_rejected() {
    assert!(matches!(
        from_str("[s]]"),
        Err(ParseError::UnexpectedCharacterAfterSection {
            line: 1,
            col: 4,
            found: b']'
        })
    ));
}

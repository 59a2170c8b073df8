use anyhow::Result;
use pretty_assertions::assert_eq;

use glossary_html::{
    error::GlossaryError,
    glossary::parser::{parse_glossary, parse_glossary_txt},
};

#[test]
fn test_parse_two_records() -> Result<()> {
    let glossary = parse_glossary([
        "alpha",
        "first term",
        "",
        "beta",
        "second term mentions alpha",
        "",
    ]);

    assert_eq!(glossary.terms(), ["alpha", "beta"]);
    assert_eq!(glossary.definition("alpha")?, " first term");
    assert_eq!(glossary.definition("beta")?, " second term mentions alpha");

    Ok(())
}

#[test]
fn test_parse_multi_line_definition() -> Result<()> {
    let glossary = parse_glossary(["word", "line one", "line two", "line three"]);

    assert_eq!(glossary.terms(), ["word"]);
    assert_eq!(glossary.definition("word")?, " line one line two line three");

    Ok(())
}

#[test]
fn test_parse_sorts_terms() {
    let glossary = parse_glossary([
        "zebra", "z", "", "Zebra", "Z", "", "apple", "a", "", "Apple", "A",
    ]);

    // codepoint order: upper case before lower case
    assert_eq!(glossary.terms(), ["Apple", "Zebra", "apple", "zebra"]);
}

#[test]
fn test_parse_leading_and_repeated_blank_lines() -> Result<()> {
    let glossary = parse_glossary(["", "x", "def of x", ""]);
    assert_eq!(glossary.terms(), ["x"]);
    assert_eq!(glossary.definition("x")?, " def of x");

    let glossary = parse_glossary(["", "", "x", "def", "", "", "", "y", "def", "", ""]);
    assert_eq!(glossary.terms(), ["x", "y"]);
    assert!(!glossary.contains(""));

    Ok(())
}

#[test]
fn test_parse_term_without_definition() -> Result<()> {
    let glossary = parse_glossary(["lonely"]);
    assert_eq!(glossary.definition("lonely")?, "");

    let glossary = parse_glossary(["lonely", "", "other", "text"]);
    assert_eq!(glossary.definition("lonely")?, "");
    assert_eq!(glossary.definition("other")?, " text");

    Ok(())
}

#[test]
fn test_parse_duplicate_term_last_wins() -> Result<()> {
    let glossary = parse_glossary(["a", "one", "", "a", "two", ""]);

    assert_eq!(glossary.terms(), ["a"]);
    assert_eq!(glossary.len(), 1);
    assert_eq!(glossary.definition("a")?, " two");

    Ok(())
}

#[test]
fn test_parse_empty_input() {
    let glossary = parse_glossary(Vec::<String>::new());
    assert!(glossary.is_empty());

    let glossary = parse_glossary_txt("\n\n");
    assert!(glossary.is_empty());
}

#[test]
fn test_parse_txt_with_crlf() -> Result<()> {
    let glossary = parse_glossary_txt("term\r\nfirst\r\nsecond\r\n\r\nnext\r\ndef\r\n");

    assert_eq!(glossary.terms(), ["next", "term"]);
    assert_eq!(glossary.definition("term")?, " first second");
    assert_eq!(glossary.definition("next")?, " def");

    Ok(())
}

#[test]
fn test_definition_not_found() {
    let glossary = parse_glossary(["a", "one"]);

    assert_eq!(
        glossary.definition("b"),
        Err(GlossaryError::NotFound {
            term: "b".to_owned()
        })
    );
}

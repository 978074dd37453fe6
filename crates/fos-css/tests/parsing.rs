//! Parsing tests for fos-css
//!
//! Stylesheet structure, shorthand expansion and the declaration-level error
//! recovery rules.

use fos_css::stylesheet::CssRule;
use fos_css::{parse_stylesheet, Color, CssError, CssParser, Keyword, PropertyId, Unit, Value};

fn px(n: f32) -> Value {
    Value::Numeric(n, Unit::Px)
}

#[test]
fn test_parse_empty() {
    let sheet = parse_stylesheet("");
    assert!(sheet.rules.is_empty());
}

#[test]
fn test_parse_rules_and_selector_groups() {
    let sheet = parse_stylesheet(
        r#"
        .foo { color: red; }
        h1, h2, h3 { margin: 0; }
        div.container > p.text { color: black; }
        "#,
    );
    assert_eq!(sheet.rules.len(), 3);
    let Some(CssRule::Style(group)) = sheet.rules.get(1) else {
        panic!("style rule expected");
    };
    assert_eq!(group.selectors.len(), 3);
    assert_eq!(group.declarations.len(), 4);
}

#[test]
fn test_invalid_selector_drops_rule() {
    let sheet = parse_stylesheet("p > { color: red } a { color: blue }");
    assert_eq!(sheet.rules.len(), 1);
}

#[test]
fn test_media_and_unknown_at_rules() {
    let sheet = parse_stylesheet(
        "@import url(a.css) screen; @font-face { font-family: x } @media print, tv { p { color: red } }",
    );
    assert_eq!(sheet.style_rules("print").len(), 1);
    assert!(sheet.style_rules("screen").is_empty());
    assert!(sheet.rules.iter().any(|r| matches!(r, CssRule::Import(_))));
}

#[test]
fn test_bad_declaration_is_dropped() {
    let block = CssParser::new().parse_declaration_block("color: red; width: -5px; colour: blue; height: 10px");
    assert_eq!(block.len(), 2);
    // Named colors stay keywords until they are applied
    assert_eq!(block.value(PropertyId::Color), Some(&Value::Keyword(Keyword::Red)));
    assert_eq!(block.value(PropertyId::Width), None);
    assert_eq!(block.value(PropertyId::Height), Some(&px(10.0)));
}

#[test]
fn test_shorthand_all_or_nothing() {
    let block = CssParser::new().parse_declaration_block("margin: 10px garbage 5px; padding-top: 2px");
    for side in [
        PropertyId::MarginTop,
        PropertyId::MarginRight,
        PropertyId::MarginBottom,
        PropertyId::MarginLeft,
    ] {
        assert_eq!(block.value(side), None);
    }
    assert_eq!(block.value(PropertyId::PaddingTop), Some(&px(2.0)));
}

#[test]
fn test_four_value_expansion() {
    let parser = CssParser::new();
    let sides = |css: &str| {
        let block = parser.parse_declaration_block(css);
        [
            PropertyId::PaddingTop,
            PropertyId::PaddingRight,
            PropertyId::PaddingBottom,
            PropertyId::PaddingLeft,
        ]
        .map(|p| match block.value(p) {
            Some(Value::Numeric(n, Unit::Px)) => *n,
            other => panic!("{p:?}: {other:?}"),
        })
    };
    assert_eq!(sides("padding: 1px"), [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(sides("padding: 1px 2px"), [1.0, 2.0, 1.0, 2.0]);
    assert_eq!(sides("padding: 1px 2px 3px"), [1.0, 2.0, 3.0, 2.0]);
    assert_eq!(sides("padding: 1px 2px 3px 4px"), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_quirks_numeric_color() {
    let quirks = CssParser::quirks().parse_declaration_block("color: 000080");
    let hashed = CssParser::new().parse_declaration_block("color: #000080");
    assert_eq!(quirks.value(PropertyId::Color), hashed.value(PropertyId::Color));
    assert_eq!(hashed.value(PropertyId::Color), Some(&Value::Color(Color::rgb(0, 0, 0x80))));

    let strict = CssParser::new().parse_declaration_block("color: 000080");
    assert!(strict.is_empty());
}

#[test]
fn test_quirks_color_digits_read_as_hex() {
    let quirks = CssParser::quirks();
    let block = quirks.parse_declaration_block("color: 000e00; background-color: 1e3");
    assert_eq!(block.value(PropertyId::Color), Some(&Value::Color(Color::rgb(0, 14, 0))));
    assert_eq!(
        block.value(PropertyId::BackgroundColor),
        Some(&Value::Color(Color::rgb(0x11, 0xee, 0x33)))
    );

    let values = quirks.parse_value("color", "000e00", false).expect("quirks color");
    let hashed = quirks.parse_value("color", "#000e00", false).expect("hash color");
    assert_eq!(values, hashed);
}

#[test]
fn test_quirks_only_values() {
    let quirks = CssParser::quirks();
    let strict = CssParser::new();

    let block = quirks.parse_declaration_block("width: 10; cursor: hand; color: grey");
    assert_eq!(block.value(PropertyId::Width), Some(&px(10.0)));
    assert_eq!(block.value(PropertyId::Cursor), Some(&Value::Keyword(Keyword::Pointer)));
    assert!(block.value(PropertyId::Color).is_some());

    let block = strict.parse_declaration_block("width: 10; width: 0; cursor: hand; color: grey");
    assert_eq!(block.len(), 1);
    assert_eq!(block.value(PropertyId::Width), Some(&px(0.0)));
}

#[test]
fn test_important_and_css_wide_keywords() {
    let block = CssParser::new().parse_declaration_block("color: inherit !important; margin: initial");
    assert!(block.is_important(PropertyId::Color));
    assert_eq!(block.value(PropertyId::Color), Some(&Value::Inherit));
    // CSS-wide keywords stay on the shorthand and fan out when applied
    assert_eq!(block.value(PropertyId::Margin), Some(&Value::Initial));
    assert_eq!(block.value(PropertyId::MarginLeft), None);

    // inherit cannot be combined with other values
    assert!(CssParser::new().parse_declaration_block("margin: inherit 2px").is_empty());
}

#[test]
fn test_errors() {
    let parser = CssParser::new();
    assert!(matches!(parser.parse_value("colr", "red", false), Err(CssError::UnknownProperty(_))));
    assert!(matches!(
        parser.parse_value("width", "red", false),
        Err(CssError::InvalidValue { .. })
    ));
    assert!(matches!(parser.parse_selectors("a >> b"), Err(CssError::InvalidSelector(_))));
    let err = parser.parse_value("colr", "red", false).unwrap_err();
    assert_eq!(err.to_string(), "Unknown property: colr");
}

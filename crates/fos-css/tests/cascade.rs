//! Cascade tests for fos-css
//!
//! Resolves styles against small documents and checks which declaration
//! wins.

use fos_css::computed::{Display, Length};
use fos_css::{Color, ComputedStyle, CssParser, NoHistory, StyleConfig, StyleResolver};
use fos_dom::{CompatMode, Document, NodeId};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `<html><body>` plus whatever the test appends
struct Page {
    doc: Document,
    body: NodeId,
}

impl Page {
    fn new() -> Self {
        let mut doc = Document::new("http://example.com/index.html");
        let tree = doc.tree_mut();
        let html = tree.create_element("html");
        tree.append_child(NodeId::ROOT, html);
        let body = tree.create_element("body");
        tree.append_child(html, body);
        Self { doc, body }
    }

    fn add(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let tree = self.doc.tree_mut();
        let e = tree.create_element(tag);
        tree.append_child(parent, e);
        for (name, value) in attrs {
            tree.set_attribute(e, name, value);
        }
        e
    }
}

fn resolver_with(user: Option<&str>, author: &str) -> StyleResolver {
    init_tracing();
    let config = StyleConfig {
        user_style_sheet: user.map(str::to_string),
        ..StyleConfig::default()
    };
    let mut resolver = StyleResolver::new(config);
    resolver.add_author_sheet(CssParser::new().parse(author));
    resolver
}

fn color_of(resolver: &StyleResolver, page: &Page, element: NodeId) -> Color {
    resolver.resolve_style(&page.doc, &NoHistory, element, None).color()
}

const RED: Color = Color::rgb(255, 0, 0);
const BLUE: Color = Color::rgb(0, 0, 255);
const GREEN: Color = Color::rgb(0, 128, 0);

#[test]
fn test_id_beats_three_classes() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.add(body, "p", &[("id", "x"), ("class", "y z w")]);
    let resolver = resolver_with(None, "#x { color: red } .y.z.w { color: blue }");
    assert_eq!(color_of(&resolver, &page, p), RED);
}

#[test]
fn test_later_rule_wins_on_equal_specificity() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.add(body, "p", &[("class", "a b")]);
    let resolver = resolver_with(None, ".a { color: red } .b { color: blue }");
    assert_eq!(color_of(&resolver, &page, p), BLUE);

    let resolver = resolver_with(None, ".b { color: blue } .a { color: red }");
    assert_eq!(color_of(&resolver, &page, p), RED);
}

#[test]
fn test_origin_and_importance() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.add(body, "p", &[]);

    // author normal beats user normal
    let resolver = resolver_with(Some("p { color: blue }"), "p { color: red }");
    assert_eq!(color_of(&resolver, &page, p), RED);

    // user important beats author normal
    let resolver = resolver_with(Some("p { color: blue !important }"), "p { color: red }");
    assert_eq!(color_of(&resolver, &page, p), BLUE);

    // author important beats user normal
    let resolver = resolver_with(Some("p { color: blue }"), "p { color: red !important }");
    assert_eq!(color_of(&resolver, &page, p), RED);

    // user important beats author important
    let resolver = resolver_with(Some("p { color: blue !important }"), "p { color: red !important }");
    assert_eq!(color_of(&resolver, &page, p), BLUE);

    // user normal beats the user agent
    let resolver = resolver_with(Some("p { display: inline }"), "");
    let style = resolver.resolve_style(&page.doc, &NoHistory, p, None);
    assert_eq!(style.display(), Display::Inline);
}

#[test]
fn test_important_beats_specificity() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.add(body, "p", &[("id", "x")]);
    let resolver = resolver_with(None, "p { color: green !important } #x { color: red }");
    assert_eq!(color_of(&resolver, &page, p), GREEN);
}

#[test]
fn test_inline_style_and_presentational_attributes() {
    let mut page = Page::new();
    let body = page.body;
    let font = page.add(body, "font", &[("color", "red")]);
    let styled = page.add(body, "font", &[("color", "red"), ("style", "color: green")]);
    let resolver = resolver_with(None, "");
    assert_eq!(color_of(&resolver, &page, font), RED);
    assert_eq!(color_of(&resolver, &page, styled), GREEN);

    let resolver = resolver_with(None, "font { color: blue }");
    assert_eq!(color_of(&resolver, &page, font), BLUE);
}

#[test]
fn test_inheritance_through_parent_style() {
    let mut page = Page::new();
    let body = page.body;
    let div = page.add(body, "div", &[]);
    let span = page.add(div, "span", &[]);
    let resolver = resolver_with(None, "div { color: green; padding-left: 4px; font-size: 20px }");

    let div_style = resolver.resolve_style(&page.doc, &NoHistory, div, None);
    let span_style = resolver.resolve_style(&page.doc, &NoHistory, span, Some(&div_style));
    assert_eq!(span_style.color(), GREEN);
    assert_eq!(span_style.font().computed_size, 20.0);
    assert_eq!(span_style.non_inherited.padding.left, Length::Fixed(0));
}

#[test]
fn test_em_units_follow_font_size() {
    let mut page = Page::new();
    let body = page.body;
    let h1 = page.add(body, "h1", &[]);
    let resolver = resolver_with(None, "");
    let parent = resolver.initial_style();
    let style = resolver.resolve_style(&page.doc, &NoHistory, h1, Some(&parent));
    assert_eq!(style.font().computed_size, 32.0);
    // .67em of 32px
    assert_eq!(style.non_inherited.margin.top, Length::Fixed(21));
}

#[test]
fn test_user_agent_sheet_in_quirks_mode() {
    let mut page = Page::new();
    let body = page.body;
    let table = page.add(body, "table", &[]);
    let div = page.add(body, "div", &[]);
    let resolver = resolver_with(None, "body { font-size: 30px }");

    let body_style = resolver.resolve_style(&page.doc, &NoHistory, body, None);
    let strict = resolver.resolve_style(&page.doc, &NoHistory, table, Some(&body_style));
    assert_eq!(strict.font().computed_size, 30.0);

    page.doc.set_compat_mode(CompatMode::Quirks);
    let body_style = resolver.resolve_style(&page.doc, &NoHistory, body, None);
    let quirks = resolver.resolve_style(&page.doc, &NoHistory, table, Some(&body_style));
    assert_eq!(quirks.font().computed_size, 16.0);
    let div_style = resolver.resolve_style(&page.doc, &NoHistory, div, Some(&body_style));
    assert_eq!(div_style.font().computed_size, 30.0);
}

#[test]
fn test_floats_become_blocks() {
    let mut page = Page::new();
    let body = page.body;
    let span = page.add(body, "span", &[]);
    let resolver = resolver_with(None, "span { float: left }");
    let style = resolver.resolve_style(&page.doc, &NoHistory, span, None);
    assert_eq!(style.display(), Display::Block);
    assert_eq!(style.non_inherited.original_display, Display::Inline);
}

#[test]
fn test_shorthand_failure_leaves_longhands() {
    let mut page = Page::new();
    let body = page.body;
    let div = page.add(body, "div", &[("class", "x")]);
    let resolver = resolver_with(None, "div { margin: 1px 2px 3px 4px } .x { margin: 10px garbage 5px }");
    let style = resolver.resolve_style(&page.doc, &NoHistory, div, None);
    let margin = style.non_inherited.margin;
    assert_eq!(margin.top, Length::Fixed(1));
    assert_eq!(margin.right, Length::Fixed(2));
    assert_eq!(margin.bottom, Length::Fixed(3));
    assert_eq!(margin.left, Length::Fixed(4));
}

#[test]
fn test_resolution_is_idempotent() {
    let mut page = Page::new();
    let body = page.body;
    let a = page.add(body, "a", &[("href", "/x"), ("class", "nav")]);
    let resolver = resolver_with(
        None,
        "a.nav { font: italic bold 12px/20px serif; background: url(bg.png) repeat-x; border: 1px solid }",
    );
    let first = resolver.resolve_style(&page.doc, &NoHistory, a, None);
    let second = resolver.resolve_style(&page.doc, &NoHistory, a, None);
    assert!(first.same_values(&second));
    assert_eq!(first, second);
    assert!(!first.same_values(&ComputedStyle::initial()));
}

#[test]
fn test_author_sheets_replaced() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.add(body, "p", &[]);
    let mut resolver = resolver_with(None, "p { color: red }");
    assert_eq!(color_of(&resolver, &page, p), RED);

    resolver.set_author_sheets(vec![CssParser::new().parse("p { color: blue }")]);
    assert_eq!(color_of(&resolver, &page, p), BLUE);
    assert_eq!(resolver.author_sheets().len(), 1);
}

#[test]
fn test_print_medium() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.add(body, "p", &[]);
    let config = StyleConfig {
        media_type: "print".into(),
        ..StyleConfig::default()
    };
    let mut resolver = StyleResolver::new(config);
    resolver.add_author_sheet(CssParser::new().parse(
        "@media screen { p { color: red } } @media print { p { color: blue } }",
    ));
    assert_eq!(color_of(&resolver, &page, p), BLUE);
}

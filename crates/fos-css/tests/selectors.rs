//! Selector tests for fos-css
//!
//! Matching is observed through resolved styles, the way layout sees it.

use fos_css::selectors::PseudoElement;
use fos_css::{Color, CssParser, NoHistory, StyleResolver, VisitedLinks};
use fos_dom::{Document, ElementState, NodeId};

const HIT: Color = Color::rgb(0, 128, 0);

struct Page {
    doc: Document,
    body: NodeId,
}

impl Page {
    fn new() -> Self {
        let mut doc = Document::new("http://example.com/docs/index.html");
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

    /// Whether `selector { color: green }` applies to `element`
    fn hits(&self, selector: &str, element: NodeId) -> bool {
        let mut resolver = StyleResolver::default();
        resolver.add_author_sheet(CssParser::new().parse(&format!("{selector} {{ color: green }}")));
        resolver.resolve_style(&self.doc, &NoHistory, element, None).color() == HIT
    }
}

#[test]
fn test_attribute_operators() {
    let mut page = Page::new();
    let body = page.body;
    let div = page.add(body, "div", &[("class", "foo bar")]);

    assert!(page.hits(".bar", div));
    assert!(page.hits("[class~=\"bar\"]", div));
    assert!(page.hits("[class^=\"fo\"]", div));
    assert!(page.hits("[class$=\"ar\"]", div));
    assert!(page.hits("[class*=\"oo b\"]", div));
    assert!(!page.hits("[class=\"bar\"]", div));
    assert!(page.hits("[class=\"foo bar\"]", div));
}

#[test]
fn test_combinators() {
    let mut page = Page::new();
    let body = page.body;
    let section = page.add(body, "section", &[("id", "main")]);
    let h2 = page.add(section, "h2", &[]);
    let p = page.add(section, "p", &[]);
    let em = page.add(p, "em", &[]);

    assert!(page.hits("#main em", em));
    assert!(page.hits("body em", em));
    assert!(page.hits("p > em", em));
    assert!(!page.hits("section > em", em));
    assert!(page.hits("h2 + p", p));
    assert!(!page.hits("h2 + em", em));
    assert!(!page.hits("p + h2", h2));
}

#[test]
fn test_structural_pseudo_classes() {
    let mut page = Page::new();
    let body = page.body;
    let ul = page.add(body, "ul", &[]);
    let first = page.add(ul, "li", &[]);
    let last = page.add(ul, "li", &[]);
    let empty = page.add(body, "p", &[]);

    assert!(page.hits("li:first-child", first));
    assert!(!page.hits("li:first-child", last));
    assert!(page.hits("li:last-child", last));
    assert!(!page.hits("li:only-child", first));
    assert!(page.hits("p:empty", empty));
    assert!(!page.hits("ul:empty", ul));
    assert!(page.hits("li:not(.x)", first));
    assert!(page.hits("html:root body > p", empty));
}

#[test]
fn test_dynamic_pseudo_classes() {
    let mut page = Page::new();
    let body = page.body;
    let div = page.add(body, "div", &[]);
    let link = page.add(body, "a", &[("href", "#top")]);
    page.doc.tree_mut().set_state(
        div,
        ElementState {
            hovered: true,
            ..ElementState::default()
        },
    );
    page.doc.tree_mut().set_state(
        link,
        ElementState {
            hovered: true,
            ..ElementState::default()
        },
    );

    assert!(page.hits("div:hover", div));
    // a bare `:hover` only reaches links
    assert!(!page.hits(":hover", div));
    assert!(page.hits(":hover", link));
    assert!(!page.hits("div:active", div));
}

#[test]
fn test_link_and_visited() {
    let mut page = Page::new();
    let body = page.body;
    let seen = page.add(body, "a", &[("href", "../about/./team.html")]);
    let fresh = page.add(body, "a", &[("href", "/contact.html")]);
    let anchor = page.add(body, "a", &[("name", "top")]);
    let mut history = VisitedLinks::new();
    history.add("http://example.com/about/team.html");

    let mut resolver = StyleResolver::default();
    resolver.add_author_sheet(CssParser::new().parse("a:link { color: blue } a:visited { color: green }"));
    let color = |e| resolver.resolve_style(&page.doc, &history, e, None).color();
    assert_eq!(color(seen), HIT);
    assert_eq!(color(fresh), Color::rgb(0, 0, 255));
    assert_eq!(color(anchor), Color::BLACK);
}

#[test]
fn test_pseudo_element_rules_mark_the_element() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.add(body, "p", &[("class", "intro")]);

    let mut resolver = StyleResolver::default();
    resolver.add_author_sheet(CssParser::new().parse(".intro::first-letter { color: green } p:after { content: \"!\" }"));
    let style = resolver.resolve_style(&page.doc, &NoHistory, p, None);
    assert!(style.has_pseudo_style(PseudoElement::FirstLetter));
    assert!(style.has_pseudo_style(PseudoElement::After));
    assert_ne!(style.color(), HIT);

    let first_letter = resolver
        .pseudo_style_for_element(&page.doc, &NoHistory, p, PseudoElement::FirstLetter, Some(&style))
        .expect("first-letter style");
    assert_eq!(first_letter.color(), HIT);
}

#[test]
fn test_unknown_pseudo_class_never_matches() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.add(body, "p", &[("lang", "en")]);
    assert!(!page.hits("p:nth-child(1)", p));
    assert!(!page.hits("p:lang(en)", p));
}

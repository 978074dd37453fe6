//! Selector matching
//!
//! Walks a selector chain from the subject outwards against the DOM tree.
//! Besides the yes/no answer, matching records the pseudo-element a rule
//! selected and whether the element's style depends on hover, active or
//! attribute state.

use std::collections::HashSet;

use fos_dom::{Document, NodeId};
use url::{Position, Url};

use crate::presentational::is_mapped_attribute;
use crate::selectors::{AttrMatch, Combinator, PseudoElement, PseudoKind, Selector, SelectorTest, SimpleSelector};

/// Visited-link lookup, keyed by normalized absolute URL
pub trait HistoryOracle {
    fn is_visited(&self, url: &str) -> bool;
}

/// History that has never visited anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistoryOracle for NoHistory {
    fn is_visited(&self, _url: &str) -> bool {
        false
    }
}

/// In-memory set of visited URLs
#[derive(Debug, Clone, Default)]
pub struct VisitedLinks {
    urls: HashSet<String>,
}

impl VisitedLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, url: impl Into<String>) {
        self.urls.insert(url.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl HistoryOracle for VisitedLinks {
    fn is_visited(&self, url: &str) -> bool {
        self.urls.contains(url)
    }
}

/// Link classification of an element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PseudoState {
    /// Not looked up yet
    #[default]
    Unknown,
    /// Not a hyperlink
    None,
    /// Hyperlink whose visited state was not needed
    AnyLink,
    Link,
    Visited,
}

/// Document URL prefixes used to absolutize relative links
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedUrl {
    /// Scheme and authority, `http://host:port`
    pub host: String,
    /// Up to and including the last `/`
    pub path: String,
    /// The whole URL without query and fragment
    pub file: String,
}

impl EncodedUrl {
    pub fn new(document_url: &str) -> Self {
        let (file, host) = match Url::parse(document_url) {
            Ok(mut url) => {
                url.set_query(None);
                url.set_fragment(None);
                let host = url[..Position::BeforePath].to_string();
                (url.as_str().to_string(), host)
            }
            Err(_) => {
                let end = document_url.find(['?', '#']).unwrap_or(document_url.len());
                (document_url[..end].to_string(), String::new())
            }
        };
        let path = match file.rfind('/') {
            Some(pos) if pos > 0 => file[..=pos].to_string(),
            _ => file.clone(),
        };
        Self { host, path, file }
    }

    /// Absolute, normalized form of an `href`
    pub fn resolve(&self, href: &str) -> String {
        if href.contains("://") {
            return href.to_string();
        }
        let prefix = if href.starts_with('/') {
            &self.host
        } else if href.starts_with('#') {
            &self.file
        } else {
            &self.path
        };
        let mut url = format!("{prefix}{href}");
        clean_path(&mut url);
        url
    }
}

/// Remove `seg/../`, duplicate slashes and `/./` from a URL.
///
/// `//` right after a `:` and anything inside the fragment is kept.
pub fn clean_path(path: &mut String) {
    while let Some(pos) = path.find("/../") {
        let prev = if pos > 0 { path[..pos].rfind('/') } else { Some(0) };
        match prev {
            // never climb above the host
            Some(prev) if !(prev > 3 && path[..=prev].ends_with("://")) => {
                path.replace_range(prev..pos + 3, "");
            }
            _ => path.replace_range(pos..pos + 3, ""),
        }
    }

    let mut pos = 0;
    let mut fragment: Option<Option<usize>> = None;
    while let Some(found) = path[pos..].find("//").map(|i| i + pos) {
        let fragment = *fragment.get_or_insert_with(|| path.find('#'));
        if fragment.is_some_and(|f| f > 0 && found >= f) {
            break;
        }
        if found == 0 || path.as_bytes()[found - 1] != b':' {
            path.remove(found);
            pos = found;
        } else {
            pos = found + 2;
        }
    }

    while let Some(pos) = path.find("/./") {
        path.replace_range(pos..pos + 2, "");
    }
}

/// State a style records from matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MatchFlags {
    pub affected_by_hover: bool,
    pub affected_by_active: bool,
    pub affected_by_attribute_selectors: bool,
}

/// Document-wide inputs to matching
#[derive(Clone, Copy)]
pub struct MatchContext<'a> {
    pub document: &'a Document,
    pub history: &'a dyn HistoryOracle,
    pub encoded_url: &'a EncodedUrl,
    /// Anything but quirks mode
    pub strict: bool,
}

impl<'a> MatchContext<'a> {
    pub fn new(document: &'a Document, history: &'a dyn HistoryOracle, encoded_url: &'a EncodedUrl) -> Self {
        Self {
            document,
            history,
            encoded_url,
            strict: !document.in_quirks_mode(),
        }
    }
}

/// Matching state for one element
pub struct SelectorMatcher<'a> {
    ctx: MatchContext<'a>,
    element: NodeId,
    pseudo_state: PseudoState,
    /// Pseudo-element being resolved, `None` for the element itself
    pseudo_style: Option<PseudoElement>,
    dynamic_pseudo: Option<PseudoElement>,
    flags: MatchFlags,
}

impl<'a> SelectorMatcher<'a> {
    pub fn new(ctx: MatchContext<'a>, element: NodeId) -> Self {
        Self {
            ctx,
            element,
            pseudo_state: PseudoState::Unknown,
            pseudo_style: None,
            dynamic_pseudo: None,
            flags: MatchFlags::default(),
        }
    }

    /// Match rules for a pseudo-element of the element instead
    pub fn set_pseudo_style(&mut self, pseudo: Option<PseudoElement>) {
        self.pseudo_style = pseudo;
    }

    #[inline]
    pub fn element(&self) -> NodeId {
        self.element
    }

    #[inline]
    pub fn context(&self) -> MatchContext<'a> {
        self.ctx
    }

    /// Pseudo-element selected by the last successful match
    #[inline]
    pub fn dynamic_pseudo(&self) -> Option<PseudoElement> {
        self.dynamic_pseudo
    }

    #[inline]
    pub fn flags(&self) -> MatchFlags {
        self.flags
    }

    /// Link state of the element, looked up once and cached
    pub fn link_state(&mut self, check_visited: bool) -> PseudoState {
        let stale = match self.pseudo_state {
            PseudoState::Unknown => true,
            PseudoState::AnyLink => check_visited,
            _ => false,
        };
        if stale {
            self.pseudo_state = self.compute_link_state(self.element, check_visited);
        }
        self.pseudo_state
    }

    /// Cached link state without triggering a lookup
    #[inline]
    pub fn cached_link_state(&self) -> PseudoState {
        self.pseudo_state
    }

    fn link_state_of(&mut self, e: NodeId, check_visited: bool) -> PseudoState {
        if e == self.element {
            self.link_state(check_visited)
        } else {
            self.compute_link_state(e, check_visited)
        }
    }

    fn compute_link_state(&self, e: NodeId, check_visited: bool) -> PseudoState {
        let tree = &self.ctx.document.tree;
        if !tree.is_link(e) {
            return PseudoState::None;
        }
        let Some(href) = tree.element(e).and_then(|d| d.get_attr("href")) else {
            return PseudoState::None;
        };
        if !check_visited {
            return PseudoState::AnyLink;
        }
        let url = self.ctx.encoded_url.resolve(href);
        if self.ctx.history.is_visited(&url) {
            PseudoState::Visited
        } else {
            PseudoState::Link
        }
    }

    /// Whether `selector` matches the element
    pub fn matches(&mut self, selector: &Selector) -> bool {
        self.dynamic_pseudo = None;
        let Some((first, rest)) = selector.components().split_first() else {
            return false;
        };
        // `*:hover` and `*:active` alone only apply to links, and leave no
        // hover or active dependency on anything else
        if only_hover_active(selector) && self.link_state(false) == PseudoState::None {
            return false;
        }
        let tree = &self.ctx.document.tree;
        let mut subject = true;
        let have_pseudo = self.pseudo_style.is_some();
        let mut node = self.element;

        if !self.check_one(&first.simple, node, subject) {
            return false;
        }

        let mut relation = first.relation;
        for component in rest {
            let Some(rel) = relation else {
                break;
            };
            if rel != Combinator::SubSelector {
                subject = false;
                if have_pseudo && self.dynamic_pseudo != self.pseudo_style {
                    return false;
                }
            }
            match rel {
                Combinator::Descendant => loop {
                    let Some(parent) = tree.parent_element(node) else {
                        return false;
                    };
                    node = parent;
                    if self.check_one(&component.simple, node, subject) {
                        break;
                    }
                },
                Combinator::Child => {
                    let mut parent = tree.parent(node);
                    if !self.ctx.strict {
                        while let Some(p) = parent.filter(|&p| tree.element(p).is_some_and(|d| d.implicit)) {
                            parent = tree.parent(p);
                        }
                    }
                    let Some(parent) = parent.filter(|&p| tree.is_element(p)) else {
                        return false;
                    };
                    node = parent;
                    if !self.check_one(&component.simple, node, subject) {
                        return false;
                    }
                }
                Combinator::Sibling => {
                    let Some(sibling) = tree.prev_element_sibling(node) else {
                        return false;
                    };
                    node = sibling;
                    if !self.check_one(&component.simple, node, subject) {
                        return false;
                    }
                }
                Combinator::SubSelector => {
                    // nothing may follow a pseudo-element
                    if self.dynamic_pseudo.is_some() {
                        return false;
                    }
                    if !self.check_one(&component.simple, node, subject) {
                        return false;
                    }
                }
            }
            relation = component.relation;
        }

        !(subject && have_pseudo && self.dynamic_pseudo != self.pseudo_style)
    }

    fn check_one(&mut self, sel: &SimpleSelector, e: NodeId, subject: bool) -> bool {
        let document = self.ctx.document;
        let tree = &document.tree;
        let Some(data) = tree.element(e) else {
            return false;
        };

        if let Some(tag) = &sel.tag {
            if tree.resolve(data.local_name) != tag.for_element(data.is_html) {
                return false;
            }
        }

        match &sel.test {
            SelectorTest::None => true,
            SelectorTest::Class(class) => data.classes().iter().any(|c| c.as_str() == &**class),
            SelectorTest::Id(id) => data.id() == Some(&**id),
            SelectorTest::Attribute { name, op, value } => {
                let attr = name.for_element(data.is_html);
                if e != self.element || !data.is_html || !is_mapped_attribute(attr) {
                    self.flags.affected_by_attribute_selectors = true;
                }
                match data.get_attr(attr) {
                    Some(actual) => attribute_matches(*op, actual, value, !document.is_html()),
                    None => false,
                }
            }
            SelectorTest::Pseudo { kind, .. } => self.check_pseudo(*kind, e, subject),
            SelectorTest::Not(inner) => {
                debug_assert!(!matches!(inner.test, SelectorTest::Not(_)), "nested :not");
                if matches!(inner.test, SelectorTest::Not(_)) {
                    return false;
                }
                !self.check_one(inner, e, subject)
            }
        }
    }

    fn check_pseudo(&mut self, kind: PseudoKind, e: NodeId, subject: bool) -> bool {
        let document = self.ctx.document;
        let tree = &document.tree;
        let Some(data) = tree.element(e) else {
            return false;
        };
        match kind {
            PseudoKind::Empty => tree.first_child(e).is_none(),
            PseudoKind::FirstChild => tree.parent(e).is_some() && tree.prev_element_sibling(e).is_none(),
            PseudoKind::LastChild => tree.parent(e).is_some() && tree.next_element_sibling(e).is_none(),
            PseudoKind::OnlyChild => {
                tree.parent(e).is_some()
                    && tree.prev_element_sibling(e).is_none()
                    && tree.next_element_sibling(e).is_none()
            }
            PseudoKind::FirstLine | PseudoKind::FirstLetter => {
                if subject {
                    self.dynamic_pseudo = kind.pseudo_element();
                }
                subject
            }
            PseudoKind::Selection | PseudoKind::Before | PseudoKind::After => {
                self.dynamic_pseudo = kind.pseudo_element();
                true
            }
            PseudoKind::Target => document.css_target() == Some(e),
            PseudoKind::AnyLink => matches!(
                self.link_state_of(e, false),
                PseudoState::AnyLink | PseudoState::Link | PseudoState::Visited
            ),
            PseudoKind::Link => self.link_state_of(e, true) == PseudoState::Link,
            PseudoKind::Visited => self.link_state_of(e, true) == PseudoState::Visited,
            PseudoKind::Hover | PseudoKind::Active => {
                // Quirks: anchors without href never hover
                let applies = self.ctx.strict
                    || !(data.is_html && tree.resolve(data.local_name) == "a")
                    || tree.is_link(e);
                if !applies {
                    return false;
                }
                if kind == PseudoKind::Hover {
                    if e == self.element {
                        self.flags.affected_by_hover = true;
                    }
                    data.state.hovered
                } else {
                    if e == self.element {
                        self.flags.affected_by_active = true;
                    }
                    data.state.active
                }
            }
            PseudoKind::Focus => data.state.focused,
            PseudoKind::Root => document.document_element() == Some(e),
            // :lang() is not supported
            PseudoKind::Lang | PseudoKind::Other => false,
        }
    }
}

/// Selector is one compound of `:hover`/`:active` tests with no type selector
fn only_hover_active(selector: &Selector) -> bool {
    let parts = selector.components();
    parts.first().is_some_and(|first| first.simple.tag.is_none())
        && parts.iter().all(|c| {
            is_hover_or_active(&c.simple) && matches!(c.relation, None | Some(Combinator::SubSelector))
        })
}

fn is_hover_or_active(sel: &SimpleSelector) -> bool {
    matches!(
        sel.test,
        SelectorTest::Pseudo {
            kind: PseudoKind::Hover | PseudoKind::Active,
            ..
        }
    )
}

/// Attribute value test. HTML documents compare values ASCII
/// case-insensitively.
pub fn attribute_matches(op: AttrMatch, actual: &str, expected: &str, case_sensitive: bool) -> bool {
    let (a, e) = (actual.as_bytes(), expected.as_bytes());
    let same = |x: &[u8], y: &[u8]| {
        if case_sensitive {
            x == y
        } else {
            x.eq_ignore_ascii_case(y)
        }
    };
    let starts = |x: &[u8], prefix: &[u8]| x.len() >= prefix.len() && same(&x[..prefix.len()], prefix);
    match op {
        AttrMatch::Exists => true,
        AttrMatch::Exact => same(a, e),
        AttrMatch::List => {
            if !a.contains(&b' ') {
                same(a, e)
            } else if e.contains(&b' ') {
                false
            } else {
                a.split(|&b| b == b' ').any(|token| same(token, e))
            }
        }
        AttrMatch::Contain => e.is_empty() || a.windows(e.len()).any(|w| same(w, e)),
        AttrMatch::Begin => starts(a, e),
        AttrMatch::End => a.len() >= e.len() && same(&a[a.len() - e.len()..], e),
        AttrMatch::Hyphen => starts(a, e) && (a.len() == e.len() || a[e.len()] == b'-'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::parse_selector_list;
    use fos_dom::{CompatMode, ElementState};

    struct Fixture {
        doc: Document,
        url: EncodedUrl,
    }

    impl Fixture {
        fn new() -> Self {
            let doc = Document::new("http://example.com/dir/page.html?q=1#top");
            let url = EncodedUrl::new(doc.url());
            Self { doc, url }
        }

        fn element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
            let tree = &mut self.doc.tree;
            let id = tree.create_element(tag);
            for (name, value) in attrs {
                tree.set_attribute(id, name, value);
            }
            tree.append_child(parent, id);
            id
        }

        fn matches(&self, css: &str, element: NodeId) -> bool {
            self.matches_with(css, element, &NoHistory)
        }

        fn matches_with(&self, css: &str, element: NodeId, history: &dyn HistoryOracle) -> bool {
            let ctx = MatchContext::new(&self.doc, history, &self.url);
            let mut matcher = SelectorMatcher::new(ctx, element);
            let selectors = parse_selector_list(css).expect("selector");
            selectors.iter().any(|s| matcher.matches(s))
        }
    }

    #[test]
    fn test_encoded_url() {
        let url = EncodedUrl::new("http://example.com:8080/a/b/page.html?x=1#frag");
        assert_eq!(url.host, "http://example.com:8080");
        assert_eq!(url.path, "http://example.com:8080/a/b/");
        assert_eq!(url.file, "http://example.com:8080/a/b/page.html");

        assert_eq!(url.resolve("/x.html"), "http://example.com:8080/x.html");
        assert_eq!(url.resolve("#sec"), "http://example.com:8080/a/b/page.html#sec");
        assert_eq!(url.resolve("../c.html"), "http://example.com:8080/a/c.html");
        assert_eq!(url.resolve("https://other.org//x"), "https://other.org//x");
    }

    #[test]
    fn test_clean_path() {
        let mut path = "http://a.com/b/../c/./d//e#x//y".to_string();
        clean_path(&mut path);
        assert_eq!(path, "http://a.com/c/d/e#x//y");

        let mut path = "http://a.com/../c".to_string();
        clean_path(&mut path);
        assert_eq!(path, "http://a.com/c");
    }

    #[test]
    fn test_attribute_operators() {
        let mut f = Fixture::new();
        let root = f.doc.tree.root();
        let div = f.element(root, "div", &[("class", "foo bar"), ("lang", "en-US")]);

        assert!(f.matches(".bar", div));
        assert!(f.matches("[class~=\"bar\"]", div));
        assert!(f.matches("[class^=\"fo\"]", div));
        assert!(f.matches("[class$=\"ar\"]", div));
        assert!(f.matches("[class*=\"oo b\"]", div));
        assert!(!f.matches("[class=\"bar\"]", div));
        assert!(f.matches("[lang|=en]", div));
        assert!(!f.matches("[lang|=e]", div));
        assert!(f.matches("[LANG=EN-us]", div));
        assert!(!f.matches("[title]", div));
    }

    #[test]
    fn test_xml_values_are_case_sensitive() {
        assert!(attribute_matches(AttrMatch::Exact, "Foo", "foo", false));
        assert!(!attribute_matches(AttrMatch::Exact, "Foo", "foo", true));
        assert!(!attribute_matches(AttrMatch::List, "a b", "a b", true));
        assert!(attribute_matches(AttrMatch::Hyphen, "en", "en", true));
        assert!(attribute_matches(AttrMatch::Hyphen, "EN-gb", "en", false));
        assert!(!attribute_matches(AttrMatch::Hyphen, "english", "en", false));
        assert!(attribute_matches(AttrMatch::Contain, "xxFOOxx", "foo", false));
        assert!(!attribute_matches(AttrMatch::Contain, "xxFOOxx", "foo", true));
        assert!(attribute_matches(AttrMatch::End, "image.PNG", ".png", false));
        assert!(!attribute_matches(AttrMatch::End, "png", ".png", false));
        assert!(attribute_matches(AttrMatch::List, "a B c", "b", false));
    }

    #[test]
    fn test_combinators() {
        let mut f = Fixture::new();
        let root = f.doc.tree.root();
        let html = f.element(root, "html", &[]);
        let body = f.element(html, "body", &[("id", "b")]);
        let ul = f.element(body, "ul", &[]);
        let first = f.element(ul, "li", &[]);
        let text = f.doc.tree.create_text(" ");
        f.doc.tree.append_child(ul, text);
        let second = f.element(ul, "li", &[("class", "x")]);

        assert!(f.matches("body li", second));
        assert!(f.matches("#b ul > li.x", second));
        assert!(!f.matches("body > li", second));
        assert!(f.matches("li + li", second));
        assert!(!f.matches("li + li", first));
        assert!(f.matches("html li:first-child", first));
        assert!(!f.matches("li:first-child", second));
        assert!(f.matches("li:last-child", second));
        assert!(!f.matches("li:only-child", second));
        assert!(f.matches(":root", html));
        assert!(!f.matches(":root", body));
        assert!(f.matches("li:empty", first));
        assert!(!f.matches("ul:empty", ul));
        assert!(f.matches("li:not(.x)", first));
        assert!(!f.matches("li:not(.x)", second));
    }

    #[test]
    fn test_implicit_parents_skipped_in_quirks() {
        let mut f = Fixture::new();
        let root = f.doc.tree.root();
        let table = f.element(root, "table", &[]);
        let tbody = f.element(table, "tbody", &[]);
        f.doc.tree.set_implicit(tbody, true);
        let tr = f.element(tbody, "tr", &[]);

        assert!(!f.matches("table > tr", tr));
        f.doc.set_compat_mode(CompatMode::Quirks);
        assert!(f.matches("table > tr", tr));
    }

    #[test]
    fn test_dynamic_state() {
        let mut f = Fixture::new();
        let root = f.doc.tree.root();
        let body = f.element(root, "body", &[]);
        let link = f.element(body, "a", &[("href", "next.html")]);
        let p = f.element(body, "p", &[]);
        let hovered = ElementState { hovered: true, active: false, focused: true };
        f.doc.tree.set_state(link, hovered);
        f.doc.tree.set_state(p, hovered);

        assert!(f.matches("a:hover", link));
        assert!(f.matches("p:hover", p));
        assert!(f.matches(":focus", p));
        assert!(!f.matches("a:active", link));
        // `*:hover` only applies to links
        assert!(f.matches(":hover", link));
        assert!(!f.matches(":hover", p));
        assert!(!f.matches("*:hover:active", p));
    }

    #[test]
    fn test_only_hover_rule_restores_flags() {
        let mut f = Fixture::new();
        let root = f.doc.tree.root();
        let p = f.element(root, "p", &[]);
        let ctx = MatchContext::new(&f.doc, &NoHistory, &f.url);
        let mut matcher = SelectorMatcher::new(ctx, p);
        let star = parse_selector_list(":hover").expect("selector");
        assert!(!matcher.matches(&star[0]));
        assert!(!matcher.flags().affected_by_hover);
        let both = parse_selector_list("*:hover:active").expect("selector");
        assert!(!matcher.matches(&both[0]));
        assert!(!matcher.flags().affected_by_active);
        let tagged = parse_selector_list("p:hover").expect("selector");
        assert!(!matcher.matches(&tagged[0]));
        assert!(matcher.flags().affected_by_hover);
    }

    #[test]
    fn test_only_hover_rule_tracks_links() {
        let mut f = Fixture::new();
        let root = f.doc.tree.root();
        let link = f.element(root, "a", &[("href", "/x")]);
        let ctx = MatchContext::new(&f.doc, &NoHistory, &f.url);
        let mut matcher = SelectorMatcher::new(ctx, link);
        let star = parse_selector_list(":hover").expect("selector");
        assert!(!matcher.matches(&star[0]));
        assert!(matcher.flags().affected_by_hover);
        assert_eq!(matcher.cached_link_state(), PseudoState::AnyLink);
    }

    #[test]
    fn test_link_states() {
        let mut f = Fixture::new();
        let root = f.doc.tree.root();
        let visited = f.element(root, "a", &[("href", "seen.html")]);
        let fresh = f.element(root, "a", &[("href", "/new.html")]);
        let anchor = f.element(root, "a", &[("name", "x")]);
        let mut history = VisitedLinks::new();
        history.add("http://example.com/dir/seen.html");

        assert!(f.matches_with(":visited", visited, &history));
        assert!(!f.matches_with(":link", visited, &history));
        assert!(f.matches_with(":link", fresh, &history));
        assert!(f.matches_with(":-khtml-any-link", fresh, &history));
        assert!(!f.matches_with(":link", anchor, &history));
        assert!(!f.matches_with(":any-link", anchor, &history));

        let ctx = MatchContext::new(&f.doc, &history, &f.url);
        let mut matcher = SelectorMatcher::new(ctx, visited);
        assert_eq!(matcher.link_state(false), PseudoState::AnyLink);
        assert_eq!(matcher.link_state(true), PseudoState::Visited);
        assert_eq!(matcher.cached_link_state(), PseudoState::Visited);
    }

    #[test]
    fn test_pseudo_elements() {
        let mut f = Fixture::new();
        let root = f.doc.tree.root();
        let div = f.element(root, "div", &[]);
        let p = f.element(div, "p", &[]);
        let ctx = MatchContext::new(&f.doc, &NoHistory, &f.url);
        let before = parse_selector_list("div p:before").expect("selector");
        let first_line = parse_selector_list("p:first-line").expect("selector");

        let mut matcher = SelectorMatcher::new(ctx, p);
        assert!(matcher.matches(&before[0]));
        assert_eq!(matcher.dynamic_pseudo(), Some(PseudoElement::Before));

        matcher.set_pseudo_style(Some(PseudoElement::After));
        assert!(!matcher.matches(&before[0]));
        matcher.set_pseudo_style(Some(PseudoElement::FirstLine));
        assert!(matcher.matches(&first_line[0]));
        assert!(!matcher.matches(&parse_selector_list("p").expect("selector")[0]));
    }

    #[test]
    fn test_target_and_unsupported() {
        let mut f = Fixture::new();
        let root = f.doc.tree.root();
        let h = f.element(root, "h2", &[("lang", "fr")]);
        f.doc.set_css_target(Some(h));
        assert!(f.matches(":target", h));
        assert!(!f.matches(":lang(fr)", h));
        assert!(!f.matches("h2:nth-child(1)", h));
    }

    #[test]
    fn test_attribute_selector_flag() {
        let mut f = Fixture::new();
        let root = f.doc.tree.root();
        let td = f.element(root, "td", &[("bgcolor", "red"), ("title", "t")]);
        let ctx = MatchContext::new(&f.doc, &NoHistory, &f.url);
        let mut matcher = SelectorMatcher::new(ctx, td);
        assert!(matcher.matches(&parse_selector_list("[bgcolor]").expect("selector")[0]));
        assert!(!matcher.flags().affected_by_attribute_selectors);
        assert!(matcher.matches(&parse_selector_list("[title]").expect("selector")[0]));
        assert!(matcher.flags().affected_by_attribute_selectors);
    }
}

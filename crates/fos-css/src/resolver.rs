//! Style Resolver
//!
//! Computes the style of an element from every origin: the user agent
//! sheets, the user sheet, presentational attributes, author sheets and the
//! inline `style` attribute.
//!
//! Matched declarations are collected per origin, each origin sorted by
//! specificity and position, then applied in two passes. The first pass
//! applies the properties other values depend on (font, color, display,
//! direction), the second everything else. In each pass normal declarations
//! go first, then important ones, so later declarations win.

use std::ops::Range;
use std::sync::Arc;

use fos_dom::{Document, NodeId};
use tracing::{debug, trace};

use crate::adjust::{adjust_render_style, AdjustTarget};
use crate::applier::StyleApplier;
use crate::computed::ComputedStyle;
use crate::config::StyleConfig;
use crate::declaration::DeclarationBlock;
use crate::font_size::{DefaultFontMetrics, FontMetrics, FontSizeSettings};
use crate::matcher::{EncodedUrl, HistoryOracle, MatchContext, PseudoState, SelectorMatcher};
use crate::parser::CssParser;
use crate::presentational::presentational_declarations;
use crate::rule_set::{RuleData, RuleSet};
use crate::selectors::PseudoElement;
use crate::style_sharing::{StyleMap, StyleSharing};
use crate::stylesheet::StyleSheet;

/// Default user agent sheet
const HTML4_CSS: &str = include_str!("../resources/html4.css");
/// User agent rules for quirks mode documents
const QUIRKS_CSS: &str = include_str!("../resources/quirks.css");
/// User agent rules for printing
const PRINT_CSS: &str = include_str!("../resources/print.css");

/// Match lists this short are sorted with a bubble sort
const BUBBLE_SORT_LIMIT: usize = 6;

/// Style resolver for one set of stylesheets
pub struct StyleResolver {
    config: StyleConfig,
    default_style: RuleSet,
    quirks_style: RuleSet,
    print_style: RuleSet,
    user_style: RuleSet,
    author_sheets: Vec<StyleSheet>,
    author_style: RuleSet,
    metrics: Box<dyn FontMetrics>,
}

impl StyleResolver {
    pub fn new(config: StyleConfig) -> Self {
        let medium = config.media_type.clone();
        let parser = CssParser::new();
        let default_style = RuleSet::from_sheets([&parser.parse(HTML4_CSS)], &medium);
        let quirks_style = RuleSet::from_sheets([&parser.parse(QUIRKS_CSS)], &medium);
        let print_style = RuleSet::from_sheets([&parser.parse(PRINT_CSS)], "print");
        let user_style = match &config.user_style_sheet {
            Some(text) => RuleSet::from_sheets([&parser.parse(text)], &medium),
            None => RuleSet::new(),
        };
        Self {
            config,
            default_style,
            quirks_style,
            print_style,
            user_style,
            author_sheets: Vec::new(),
            author_style: RuleSet::new(),
            metrics: Box::new(DefaultFontMetrics),
        }
    }

    /// Use real font metrics for `ex` units
    pub fn with_font_metrics(mut self, metrics: impl FontMetrics + 'static) -> Self {
        self.metrics = Box::new(metrics);
        self
    }

    #[inline]
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Add an author sheet; the author rule set is rebuilt
    pub fn add_author_sheet(&mut self, sheet: StyleSheet) {
        self.author_sheets.push(sheet);
        self.rebuild_author_style();
    }

    /// Replace every author sheet
    pub fn set_author_sheets(&mut self, sheets: Vec<StyleSheet>) {
        self.author_sheets = sheets;
        self.rebuild_author_style();
    }

    pub fn author_sheets(&self) -> &[StyleSheet] {
        &self.author_sheets
    }

    fn rebuild_author_style(&mut self) {
        self.author_style = RuleSet::from_sheets(&self.author_sheets, &self.config.media_type);
        debug!(
            sheets = self.author_sheets.len(),
            selectors = self.author_style.len(),
            "rebuilt author rules"
        );
    }

    /// Some rule depends on siblings or children, which rules out sharing
    pub fn uses_sibling_rules(&self) -> bool {
        self.author_style.uses_sibling_rules() || self.user_style.uses_sibling_rules()
    }

    /// Style the root element inherits from: initial values with the
    /// standard font at the medium size
    pub fn initial_style(&self) -> ComputedStyle {
        initial_style(&self.config, &self.config.font_size_settings(false))
    }

    /// Resolve the style of `element`, inheriting from `parent` or from the
    /// initial style when there is none
    pub fn resolve_style(
        &self,
        document: &Document,
        history: &dyn HistoryOracle,
        element: NodeId,
        parent: Option<&ComputedStyle>,
    ) -> ComputedStyle {
        let encoded = EncodedUrl::new(document.url());
        let ctx = MatchContext::new(document, history, &encoded);
        let mut matcher = SelectorMatcher::new(ctx, element);
        self.style_for_element(&mut matcher, parent)
    }

    /// Resolve the style of a pseudo-element of `element`. Only the user
    /// agent, user and author sheets take part; `None` when no rule matched.
    pub fn pseudo_style_for_element(
        &self,
        document: &Document,
        history: &dyn HistoryOracle,
        element: NodeId,
        pseudo: PseudoElement,
        parent: Option<&ComputedStyle>,
    ) -> Option<ComputedStyle> {
        let encoded = EncodedUrl::new(document.url());
        let ctx = MatchContext::new(document, history, &encoded);
        let mut matcher = SelectorMatcher::new(ctx, element);
        matcher.set_pseudo_style(Some(pseudo));
        let quirks = document.in_quirks_mode();
        let fonts = self.config.font_size_settings(quirks);

        let mut state = ResolveState::new(true);
        state.user_agent = state.match_rules(&self.default_style, &mut matcher);
        state.user = state.match_rules(&self.user_style, &mut matcher);
        state.author = state.match_rules(&self.author_style, &mut matcher);
        if state.matched.is_empty() {
            return None;
        }

        let fallback;
        let parent_style = match parent {
            Some(p) => p,
            None => {
                fallback = initial_style(&self.config, &fonts);
                &fallback
            }
        };
        let mut style = ComputedStyle::inherit_from(parent_style);
        style.style_type = Some(pseudo);
        self.cascade(&state, &mut style, &mut matcher, fonts, parent_style, parent.is_some());
        adjust_render_style(
            &mut style,
            parent_style,
            AdjustTarget {
                quirks,
                ..AdjustTarget::default()
            },
        );
        Some(style)
    }

    /// Resolve every element of a document in tree order, sharing styles
    /// between equivalent siblings and cousins
    pub fn resolve_document(&self, document: &Document, history: &dyn HistoryOracle) -> StyleMap {
        let encoded = EncodedUrl::new(document.url());
        let ctx = MatchContext::new(document, history, &encoded);
        let tree = &document.tree;
        let sibling_rules = self.uses_sibling_rules();
        let mut map = StyleMap::new();

        for element in tree.descendant_elements(tree.root()) {
            let mut matcher = SelectorMatcher::new(ctx, element);
            let shared = StyleSharing::new(&map, &self.config, sibling_rules, &mut matcher).locate_shared_style();
            if let Some(style) = shared {
                trace!(?element, "shared style");
                map.insert_shared(element, style);
                continue;
            }
            let parent = tree.parent_element(element).and_then(|p| map.get(p)).cloned();
            let style = self.style_for_element(&mut matcher, parent.as_deref());
            map.insert_resolved(element, Arc::new(style));
        }

        let stats = map.stats();
        debug!(
            resolved = stats.resolved,
            shared = stats.shared,
            share_rate = stats.share_rate(),
            "resolved document styles"
        );
        map
    }

    fn style_for_element(&self, matcher: &mut SelectorMatcher<'_>, parent: Option<&ComputedStyle>) -> ComputedStyle {
        let document = matcher.context().document;
        let tree = &document.tree;
        let element = matcher.element();
        let quirks = document.in_quirks_mode();
        let fonts = self.config.font_size_settings(quirks);

        let fallback;
        let parent_style = match parent {
            Some(p) => p,
            None => {
                fallback = initial_style(&self.config, &fonts);
                &fallback
            }
        };
        let Some(data) = tree.element(element) else {
            return ComputedStyle::inherit_from(parent_style);
        };

        let presentational = presentational_declarations(tree, element);
        let inline = data
            .inline_style()
            .filter(|_| data.is_html)
            .map(|text| CssParser::with_strict(!quirks).parse_declaration_block(text));

        let mut state = ResolveState::new(false);
        let ua_start = state.matched.len();
        state.match_rules(&self.default_style, matcher);
        if quirks {
            state.match_rules(&self.quirks_style, matcher);
        }
        if self.config.is_print() {
            state.match_rules(&self.print_style, matcher);
        }
        state.user_agent = ua_start..state.matched.len();
        state.user = state.match_rules(&self.user_style, matcher);

        let author_start = state.matched.len();
        state.add_declarations(&presentational);
        state.match_rules(&self.author_style, matcher);
        if let Some(inline) = &inline {
            state.add_declarations(inline);
        }
        state.author = author_start..state.matched.len();
        trace!(?element, matched = state.matched.len(), "matched declarations");

        let mut style = ComputedStyle::inherit_from(parent_style);
        self.cascade(&state, &mut style, matcher, fonts, parent_style, parent.is_some());

        let tag = tree.resolve(data.local_name).to_ascii_lowercase();
        let target = AdjustTarget {
            html_tag: data.is_html.then_some(tag.as_str()),
            is_root: document.document_element() == Some(element),
            quirks,
        };
        adjust_render_style(&mut style, parent_style, target);

        if tree.is_link(element) {
            style.pseudo_state = match matcher.cached_link_state() {
                PseudoState::Unknown => matcher.link_state(false),
                state => state,
            };
        }
        style.match_flags = matcher.flags();
        for pseudo in state.pseudo_styles {
            style.set_has_pseudo_style(pseudo);
        }
        style
    }

    /// Both passes over the matched declarations
    fn cascade(
        &self,
        state: &ResolveState<'_>,
        style: &mut ComputedStyle,
        matcher: &mut SelectorMatcher<'_>,
        fonts: FontSizeSettings,
        parent: &ComputedStyle,
        has_parent: bool,
    ) {
        let mut applier = StyleApplier::new(&self.config, fonts, self.metrics.as_ref(), matcher, parent);
        state.apply(&mut applier, style, true);
        let parent_font = has_parent.then_some(&parent.inherited.font);
        applier
            .font_settings()
            .check_generic_family_change(&mut style.inherited.font, parent_font);
        state.apply(&mut applier, style, false);
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}

fn initial_style(config: &StyleConfig, fonts: &FontSizeSettings) -> ComputedStyle {
    let mut style = ComputedStyle::initial();
    let font = &mut style.inherited.font;
    if !config.standard_font_family.is_empty() {
        font.families = vec![config.standard_font_family.clone()];
    }
    fonts.set_font_size(font, fonts.medium);
    style
}

/// Scratch for one resolution. Lives on the caller's stack so a nested
/// resolution never sees another one's matches.
struct ResolveState<'r> {
    matched: Vec<&'r DeclarationBlock>,
    user_agent: Range<usize>,
    user: Range<usize>,
    /// Presentational attributes, author sheets and the inline style
    author: Range<usize>,
    /// Resolving a pseudo-element rather than the element itself
    for_pseudo: bool,
    pseudo_styles: Vec<PseudoElement>,
    rules: Vec<&'r RuleData>,
}

impl<'r> ResolveState<'r> {
    fn new(for_pseudo: bool) -> Self {
        Self {
            matched: Vec::new(),
            user_agent: 0..0,
            user: 0..0,
            author: 0..0,
            for_pseudo,
            pseudo_styles: Vec::new(),
            rules: Vec::new(),
        }
    }

    fn add_declarations(&mut self, block: &'r DeclarationBlock) {
        if !block.is_empty() {
            self.matched.push(block);
        }
    }

    /// Match one origin's rules and append their declarations in cascade
    /// order. Returns the range they occupy.
    fn match_rules(&mut self, rules: &'r RuleSet, matcher: &mut SelectorMatcher<'_>) -> Range<usize> {
        let start = self.matched.len();
        if rules.is_empty() {
            return start..start;
        }
        let tree = &matcher.context().document.tree;
        let element = matcher.element();
        let Some(data) = tree.element(element) else {
            return start..start;
        };
        let name = tree.resolve(data.local_name);

        self.rules.clear();
        if let Some(id) = data.id() {
            self.collect(rules.id_rules(id), matcher, name, data.is_html);
        }
        for class in data.classes() {
            self.collect(rules.class_rules(class), matcher, name, data.is_html);
        }
        self.collect(rules.tag_rules(name), matcher, name, data.is_html);
        self.collect(rules.universal_rules(), matcher, name, data.is_html);

        sort_matched_rules(&mut self.rules);
        self.matched
            .extend(self.rules.iter().copied().map(|rule: &'r RuleData| &rule.rule().declarations));
        start..self.matched.len()
    }

    fn collect(&mut self, bucket: &'r [RuleData], matcher: &mut SelectorMatcher<'_>, name: &str, is_html: bool) {
        for rule in bucket {
            if rule.rule().declarations.is_empty() {
                continue;
            }
            if rule
                .selector()
                .subject()
                .tag
                .as_ref()
                .is_some_and(|tag| tag.for_element(is_html) != name)
            {
                continue;
            }
            if !matcher.matches(rule.selector()) {
                continue;
            }
            match matcher.dynamic_pseudo() {
                Some(pseudo) if !self.for_pseudo => {
                    if !self.pseudo_styles.contains(&pseudo) {
                        self.pseudo_styles.push(pseudo);
                    }
                }
                _ => self.rules.push(rule),
            }
        }
    }

    /// One pass: normal declarations of every origin, then important author,
    /// user and user agent declarations
    fn apply(&self, applier: &mut StyleApplier<'_, '_>, style: &mut ComputedStyle, high_priority: bool) {
        let bands = [
            (0..self.matched.len(), false),
            (self.author.clone(), true),
            (self.user.clone(), true),
            (self.user_agent.clone(), true),
        ];
        for (range, important) in bands {
            for block in &self.matched[range] {
                for decl in block.iter() {
                    if decl.important == important && decl.property.is_high_priority() == high_priority {
                        applier.apply(style, decl.property, &decl.value);
                    }
                }
            }
        }
    }
}

/// Sort into cascade order, lowest precedence first
fn sort_matched_rules(rules: &mut [&RuleData]) {
    if rules.len() <= BUBBLE_SORT_LIMIT {
        for end in (1..rules.len()).rev() {
            let mut swapped = false;
            for i in 0..end {
                if rules[i].cascades_after(rules[i + 1]) {
                    rules.swap(i, i + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    } else {
        rules.sort_by_key(|rule| (rule.specificity(), rule.position()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computed::{Display, Length};
    use crate::matcher::{NoHistory, VisitedLinks};
    use crate::values::Color;
    use fos_dom::CompatMode;

    struct Page {
        doc: Document,
        html: NodeId,
        body: NodeId,
    }

    impl Page {
        fn new() -> Self {
            let mut doc = Document::new("http://example.com/dir/page.html");
            let tree = doc.tree_mut();
            let html = tree.create_element("html");
            tree.append_child(NodeId::ROOT, html);
            let body = tree.create_element("body");
            tree.append_child(html, body);
            Self { doc, html, body }
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

    fn resolver(css: &str) -> StyleResolver {
        let mut resolver = StyleResolver::default();
        resolver.add_author_sheet(CssParser::new().parse(css));
        resolver
    }

    #[test]
    fn test_user_agent_defaults() {
        let page = Page::new();
        let resolver = StyleResolver::default();
        let html = resolver.resolve_style(&page.doc, &NoHistory, page.html, None);
        assert_eq!(html.display(), Display::Block);
        let body = resolver.resolve_style(&page.doc, &NoHistory, page.body, Some(&html));
        assert_eq!(body.non_inherited.margin.top, Length::Fixed(8));
        assert_eq!(body.font().computed_size, 16.0);
        assert_eq!(body.font().families, vec!["Times New Roman".to_string()]);
    }

    #[test]
    fn test_sort_orders_by_specificity_then_position() {
        let sheet = CssParser::new().parse("#a, .b, p, *, .c, p.d, #e .f, div { color: red }");
        let mut set = RuleSet::new();
        for rule in sheet.style_rules("screen") {
            set.add_style_rule(&rule);
        }
        let mut all: Vec<&RuleData> = Vec::new();
        all.extend(set.id_rules("a"));
        all.extend(set.class_rules("b"));
        all.extend(set.class_rules("c"));
        all.extend(set.class_rules("d"));
        all.extend(set.class_rules("f"));
        all.extend(set.tag_rules("p"));
        all.extend(set.tag_rules("div"));
        all.extend(set.universal_rules());

        let mut bubble = all[..5].to_vec();
        sort_matched_rules(&mut bubble);
        assert!(bubble.windows(2).all(|w| w[1].cascades_after(w[0])));

        sort_matched_rules(&mut all);
        assert!(all.windows(2).all(|w| w[1].cascades_after(w[0])));
        assert_eq!(all[0].specificity(), 0);
    }

    #[test]
    fn test_inline_style_wins_over_author() {
        let mut page = Page::new();
        let body = page.body;
        let p = page.add(body, "p", &[("id", "x"), ("style", "color: green")]);
        let resolver = resolver("#x { color: red }");
        let style = resolver.resolve_style(&page.doc, &NoHistory, p, None);
        assert_eq!(style.color(), Color::rgb(0, 128, 0));
    }

    #[test]
    fn test_important_bands() {
        let mut page = Page::new();
        let body = page.body;
        let p = page.add(body, "p", &[("style", "color: green")]);
        let resolver = resolver("p { color: red !important }");
        let style = resolver.resolve_style(&page.doc, &NoHistory, p, None);
        assert_eq!(style.color(), Color::rgb(255, 0, 0));

        let config = StyleConfig {
            user_style_sheet: Some("p { color: blue !important }".into()),
            ..StyleConfig::default()
        };
        let mut resolver = StyleResolver::new(config);
        resolver.add_author_sheet(CssParser::new().parse("p { color: red !important }"));
        let style = resolver.resolve_style(&page.doc, &NoHistory, p, None);
        assert_eq!(style.color(), Color::rgb(0, 0, 255));
    }

    #[test]
    fn test_em_lengths_use_final_font() {
        let mut page = Page::new();
        let body = page.body;
        let div = page.add(body, "div", &[]);
        let resolver = resolver("div { margin-left: 2em; font-size: 10px }");
        let style = resolver.resolve_style(&page.doc, &NoHistory, div, None);
        assert_eq!(style.non_inherited.margin.left, Length::Fixed(20));
    }

    #[test]
    fn test_presentational_attributes_below_author_rules() {
        let mut page = Page::new();
        let body = page.body;
        let table = page.add(body, "table", &[]);
        let td = page.add(table, "td", &[("bgcolor", "red"), ("width", "40")]);
        let resolver = resolver("td { background-color: blue }");
        let style = resolver.resolve_style(&page.doc, &NoHistory, td, None);
        assert_eq!(style.non_inherited.background_color, Some(Color::rgb(0, 0, 255)));
        assert_eq!(style.non_inherited.width, Length::Fixed(40));
    }

    #[test]
    fn test_quirks_sheet_only_in_quirks_mode() {
        let mut page = Page::new();
        let body = page.body;
        let form = page.add(body, "form", &[]);
        let resolver = StyleResolver::default();

        let strict = resolver.resolve_style(&page.doc, &NoHistory, form, None);
        assert_eq!(strict.non_inherited.margin.bottom, Length::Fixed(0));

        page.doc.set_compat_mode(CompatMode::Quirks);
        let quirks = resolver.resolve_style(&page.doc, &NoHistory, form, None);
        assert_eq!(quirks.non_inherited.margin.bottom, Length::Fixed(16));
    }

    #[test]
    fn test_pseudo_styles() {
        let mut page = Page::new();
        let body = page.body;
        let p = page.add(body, "p", &[]);
        let div = page.add(body, "div", &[]);
        let resolver = resolver("p:before { content: \"> \"; color: red } p:first-line { color: blue }");

        let style = resolver.resolve_style(&page.doc, &NoHistory, p, None);
        assert!(style.has_pseudo_style(PseudoElement::Before));
        assert!(style.has_pseudo_style(PseudoElement::FirstLine));
        assert!(!style.has_pseudo_style(PseudoElement::After));
        assert_eq!(style.color(), Color::BLACK);

        let before = resolver
            .pseudo_style_for_element(&page.doc, &NoHistory, p, PseudoElement::Before, Some(&style))
            .expect("before style");
        assert_eq!(before.style_type, Some(PseudoElement::Before));
        assert_eq!(before.color(), Color::rgb(255, 0, 0));
        assert_eq!(before.non_inherited.content.as_ref().map(Vec::len), Some(1));

        assert!(
            resolver
                .pseudo_style_for_element(&page.doc, &NoHistory, div, PseudoElement::Before, None)
                .is_none()
        );
    }

    #[test]
    fn test_link_state_recorded() {
        let mut page = Page::new();
        let body = page.body;
        let seen = page.add(body, "a", &[("href", "seen.html")]);
        let fresh = page.add(body, "a", &[("href", "/new.html")]);
        let mut history = VisitedLinks::new();
        history.add("http://example.com/dir/seen.html");
        let resolver = resolver("a:visited { color: purple }");

        let style = resolver.resolve_style(&page.doc, &history, seen, None);
        assert_eq!(style.pseudo_state, PseudoState::Visited);
        assert_eq!(style.color(), Color::rgb(128, 0, 128));
        let style = resolver.resolve_style(&page.doc, &history, fresh, None);
        assert_eq!(style.pseudo_state, PseudoState::Link);
        assert_ne!(style.color(), Color::rgb(128, 0, 128));
    }

    #[test]
    fn test_resolve_document_shares_and_inherits() {
        let mut page = Page::new();
        let body = page.body;
        let a = page.add(body, "span", &[("class", "a")]);
        let b = page.add(body, "span", &[("class", "a")]);
        let c = page.add(body, "span", &[("class", "a"), ("style", "color: red")]);
        let resolver = resolver("body { color: green } .a { margin-left: 3px }");

        let map = resolver.resolve_document(&page.doc, &NoHistory);
        assert_eq!(map.len(), 5);
        assert!(map.shares_style(a, b));
        assert!(!map.shares_style(a, c));
        let styles = (map.get(a).expect("a"), map.get(c).expect("c"));
        assert_eq!(styles.0.color(), Color::rgb(0, 128, 0));
        assert_eq!(styles.1.color(), Color::rgb(255, 0, 0));
        assert_eq!(styles.1.non_inherited.margin.left, Length::Fixed(3));
        assert_eq!(map.stats().shared, 1);
    }

    #[test]
    fn test_nested_resolution_is_independent() {
        let mut page = Page::new();
        let body = page.body;
        let p = page.add(body, "p", &[("class", "x")]);
        let resolver = resolver(".x { color: red; padding-top: 4px }");
        let first = resolver.resolve_style(&page.doc, &NoHistory, p, None);
        let second = resolver.resolve_style(&page.doc, &NoHistory, p, None);
        assert!(first.same_values(&second));
    }
}

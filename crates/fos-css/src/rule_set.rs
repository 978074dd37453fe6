//! Rule Set
//!
//! Index of style rules by the key of each selector's subject: id, class,
//! tag name or nothing. Matching only walks the buckets an element can hit.
//! Every selector gets a position from a counter that never goes back, which
//! breaks specificity ties in the cascade.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::selectors::{Combinator, PseudoKind, Selector, SelectorTest};
use crate::stylesheet::{StyleRule, StyleSheet};

/// One selector of a rule, with its insertion position
#[derive(Debug, Clone)]
pub struct RuleData {
    rule: Arc<StyleRule>,
    selector: usize,
    position: u32,
}

impl RuleData {
    #[inline]
    pub fn rule(&self) -> &Arc<StyleRule> {
        &self.rule
    }

    #[inline]
    pub fn selector(&self) -> &Selector {
        &self.rule.selectors[self.selector]
    }

    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    #[inline]
    pub fn specificity(&self) -> u32 {
        self.selector().specificity()
    }

    /// Cascade order: specificity, then position
    #[inline]
    pub fn cascades_after(&self, other: &RuleData) -> bool {
        let (a, b) = (self.specificity(), other.specificity());
        if a == b { self.position > other.position } else { a > b }
    }
}

/// Bucketed rules of one cascade origin
#[derive(Debug, Default)]
pub struct RuleSet {
    id_rules: HashMap<Box<str>, Vec<RuleData>>,
    class_rules: HashMap<Box<str>, Vec<RuleData>>,
    tag_rules: HashMap<Box<str>, Vec<RuleData>>,
    universal_rules: Vec<RuleData>,
    rule_count: u32,
    uses_sibling_rules: bool,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule set from sheets that apply to `medium`
    pub fn from_sheets<'a>(sheets: impl IntoIterator<Item = &'a StyleSheet>, medium: &str) -> Self {
        let mut set = Self::new();
        for sheet in sheets {
            set.add_rules_from_sheet(sheet, medium);
        }
        debug!(
            medium,
            selectors = set.rule_count,
            ids = set.id_rules.len(),
            classes = set.class_rules.len(),
            tags = set.tag_rules.len(),
            universal = set.universal_rules.len(),
            "built rule set"
        );
        set
    }

    /// Add the style rules of a sheet, following `@import` and `@media`
    /// rules whose media list contains `medium`
    pub fn add_rules_from_sheet(&mut self, sheet: &StyleSheet, medium: &str) {
        for rule in sheet.style_rules(medium) {
            self.add_style_rule(&rule);
        }
    }

    /// Index every selector of a rule
    pub fn add_style_rule(&mut self, rule: &Arc<StyleRule>) {
        for (index, selector) in rule.selectors.iter().enumerate() {
            if needs_sibling_checks(selector) {
                self.uses_sibling_rules = true;
            }
            let data = RuleData {
                rule: Arc::clone(rule),
                selector: index,
                position: self.rule_count,
            };
            self.rule_count += 1;

            let subject = selector.subject();
            if let Some(id) = subject.id() {
                self.id_rules.entry(id.into()).or_default().push(data);
            } else if let Some(class) = subject.class() {
                self.class_rules.entry(class.into()).or_default().push(data);
            } else if let Some(tag) = &subject.tag {
                self.tag_rules.entry(tag.lower().into()).or_default().push(data);
            } else {
                self.universal_rules.push(data);
            }
        }
    }

    pub fn id_rules(&self, id: &str) -> &[RuleData] {
        self.id_rules.get(id).map_or(&[], Vec::as_slice)
    }

    pub fn class_rules(&self, class: &str) -> &[RuleData] {
        self.class_rules.get(class).map_or(&[], Vec::as_slice)
    }

    /// Rules keyed by a tag name (compared lowercased)
    pub fn tag_rules(&self, tag: &str) -> &[RuleData] {
        if tag.bytes().any(|b| b.is_ascii_uppercase()) {
            return self
                .tag_rules
                .get(tag.to_ascii_lowercase().as_str())
                .map_or(&[], Vec::as_slice);
        }
        self.tag_rules.get(tag).map_or(&[], Vec::as_slice)
    }

    pub fn universal_rules(&self) -> &[RuleData] {
        &self.universal_rules
    }

    /// Number of indexed selectors
    #[inline]
    pub fn len(&self) -> usize {
        self.rule_count as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }

    /// Some selector depends on an element's siblings or children, so
    /// siblings with equal attributes may still resolve differently
    #[inline]
    pub fn uses_sibling_rules(&self) -> bool {
        self.uses_sibling_rules
    }
}

fn needs_sibling_checks(selector: &Selector) -> bool {
    selector
        .components()
        .iter()
        .any(|c| c.relation == Some(Combinator::Sibling) || tests_siblings(&c.simple.test))
}

/// Test depends on the element's siblings or children, also inside `:not()`
fn tests_siblings(test: &SelectorTest) -> bool {
    match test {
        SelectorTest::Pseudo { kind, .. } => matches!(
            kind,
            PseudoKind::FirstChild | PseudoKind::LastChild | PseudoKind::OnlyChild | PseudoKind::Empty
        ),
        SelectorTest::Not(inner) => tests_siblings(&inner.test),
        _ => false,
    }
}

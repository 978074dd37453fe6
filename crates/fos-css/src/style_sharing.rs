//! Style Sharing
//!
//! Elements that the cascade cannot tell apart get the same style object.
//! Before resolving an element, a few previous siblings and cousins are
//! checked; a candidate qualifies when it has the same tag, classes, mapped
//! attributes, link state and dynamic state, and nothing about either
//! element could make selectors treat them differently.

use std::collections::HashMap;
use std::sync::Arc;

use fos_dom::{DomTree, ElementData, NodeId};

use crate::computed::ComputedStyle;
use crate::config::StyleConfig;
use crate::matcher::{PseudoState, SelectorMatcher};
use crate::presentational::{has_mapped_attributes, same_mapped_attributes};

/// Siblings (and cousins) examined before giving up on sharing
pub const SIBLING_THRESHOLD: usize = 10;

/// Resolved styles by element
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    styles: HashMap<NodeId, Arc<ComputedStyle>>,
    stats: SharingStats,
}

/// Counters for one resolution sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SharingStats {
    /// Styles computed by the cascade
    pub resolved: u32,
    /// Styles taken from a sibling or cousin
    pub shared: u32,
}

impl SharingStats {
    /// Share rate in percent
    pub fn share_rate(&self) -> f64 {
        let total = self.resolved + self.shared;
        if total == 0 {
            0.0
        } else {
            f64::from(self.shared) / f64::from(total) * 100.0
        }
    }
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, element: NodeId) -> Option<&Arc<ComputedStyle>> {
        self.styles.get(&element)
    }

    /// Store a style computed by the cascade
    pub fn insert_resolved(&mut self, element: NodeId, style: Arc<ComputedStyle>) {
        self.stats.resolved += 1;
        self.styles.insert(element, style);
    }

    /// Store a style shared with another element
    pub fn insert_shared(&mut self, element: NodeId, style: Arc<ComputedStyle>) {
        self.stats.shared += 1;
        self.styles.insert(element, style);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Arc<ComputedStyle>)> {
        self.styles.iter().map(|(id, style)| (*id, style))
    }

    #[inline]
    pub fn stats(&self) -> SharingStats {
        self.stats
    }

    /// Whether two elements hold the same style object
    pub fn shares_style(&self, a: NodeId, b: NodeId) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Looks for an already resolved style the matcher's element can reuse
pub struct StyleSharing<'s, 'a> {
    tree: &'a DomTree,
    map: &'s StyleMap,
    config: &'s StyleConfig,
    uses_sibling_rules: bool,
    matcher: &'s mut SelectorMatcher<'a>,
}

impl<'s, 'a> StyleSharing<'s, 'a> {
    /// `uses_sibling_rules` disables sharing: such rules can tell equal
    /// siblings apart
    pub fn new(
        map: &'s StyleMap,
        config: &'s StyleConfig,
        uses_sibling_rules: bool,
        matcher: &'s mut SelectorMatcher<'a>,
    ) -> Self {
        Self {
            tree: &matcher.context().document.tree,
            map,
            config,
            uses_sibling_rules,
            matcher,
        }
    }

    /// Style of a sibling or cousin equivalent to the element
    pub fn locate_shared_style(&mut self) -> Option<Arc<ComputedStyle>> {
        let tree = self.tree;
        let element = self.matcher.element();
        let data = tree.element(element)?;
        if !data.is_html || data.inline_style().is_some() || data.id().is_some() || self.uses_sibling_rules {
            return None;
        }

        let mut count = 0;
        let mut candidate = tree.prev_element_sibling(element);
        while let Some(n) = candidate {
            if let Some(style) = self.can_share_with(data, n) {
                return Some(style);
            }
            if count == SIBLING_THRESHOLD {
                return None;
            }
            count += 1;
            candidate = tree.prev_element_sibling(n);
        }

        let mut candidate = tree
            .parent_element(element)
            .and_then(|parent| self.locate_cousin_list(parent, &mut 0));
        while let Some(n) = candidate {
            if let Some(style) = self.can_share_with(data, n) {
                return Some(style);
            }
            if count == SIBLING_THRESHOLD {
                return None;
            }
            count += 1;
            candidate = tree.prev_element_sibling(n);
        }
        None
    }

    /// Last child of a previous sibling (or cousin) of `parent` that holds
    /// the same style object as `parent`
    fn locate_cousin_list(&self, parent: NodeId, subcount: &mut usize) -> Option<NodeId> {
        let tree = self.tree;
        let data = tree.element(parent)?;
        if !data.is_html || data.inline_style().is_some() || data.id().is_some() {
            return None;
        }
        let style = self.map.get(parent)?;

        let mut r = tree.prev_element_sibling(parent);
        let mut climbed = false;
        loop {
            while let Some(node) = r {
                if self.map.get(node).is_some_and(|s| Arc::ptr_eq(s, style)) {
                    return tree.last_child(node).and_then(|c| element_or_previous(tree, c));
                }
                if *subcount == SIBLING_THRESHOLD {
                    return None;
                }
                *subcount += 1;
                r = tree.prev_element_sibling(node);
            }
            if climbed {
                return None;
            }
            climbed = true;
            r = tree
                .parent_element(parent)
                .and_then(|grandparent| self.locate_cousin_list(grandparent, subcount));
        }
    }

    fn can_share_with(&mut self, data: &ElementData, candidate: NodeId) -> Option<Arc<ComputedStyle>> {
        let tree = self.tree;
        let map = self.map;
        let other = tree.element(candidate)?;
        let style = map.get(candidate)?;
        let element = self.matcher.element();

        if !other.is_html
            || other.local_name != data.local_name
            || other.id().is_some()
            || other.inline_style().is_some()
            || other.has_class() != data.has_class()
            || has_mapped_attributes(other) != has_mapped_attributes(data)
            || tree.is_link(candidate) != tree.is_link(element)
            || style.match_flags.affected_by_attribute_selectors
            || other.state != data.state
        {
            return None;
        }
        if data.has_class() && other.get_attr("class") != data.get_attr("class") {
            return None;
        }
        if has_mapped_attributes(data) && !same_mapped_attributes(other, data) {
            return None;
        }
        if tree.is_link(element) {
            let check_visited = style.pseudo_state != PseudoState::AnyLink
                || self.config.link_color != self.config.visited_link_color;
            if self.matcher.link_state(check_visited) != style.pseudo_state {
                return None;
            }
        }
        Some(Arc::clone(style))
    }
}

/// `node` if it is an element, else its closest previous element sibling
fn element_or_previous(tree: &DomTree, node: NodeId) -> Option<NodeId> {
    if tree.is_element(node) {
        Some(node)
    } else {
        tree.prev_element_sibling(node)
    }
}

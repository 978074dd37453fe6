//! Document - High-level document API

use tracing::debug;

use crate::{DomTree, NodeId};

/// Document compatibility mode, as chosen from the doctype
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompatMode {
    /// Standards mode
    #[default]
    Strict,
    /// Standards mode with quirky table cell heights
    AlmostStrict,
    /// Legacy quirks mode
    Quirks,
}

/// HTML or XML document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    url: String,
    mode: CompatMode,
    is_html: bool,
    css_target: Option<NodeId>,
}

impl Document {
    /// Create an empty HTML document
    pub fn new(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            mode: CompatMode::Strict,
            is_html: true,
            css_target: None,
        }
    }

    /// Create an empty XML document
    pub fn new_xml(url: &str) -> Self {
        Self {
            is_html: false,
            ..Self::new(url)
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Set document URL
    pub fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }

    /// Compatibility mode
    #[inline]
    pub fn compat_mode(&self) -> CompatMode {
        self.mode
    }

    pub fn set_compat_mode(&mut self, mode: CompatMode) {
        if mode != self.mode {
            debug!(url = %self.url, ?mode, "compat mode changed");
        }
        self.mode = mode;
    }

    /// Only full standards mode counts as strict
    #[inline]
    pub fn in_strict_mode(&self) -> bool {
        self.mode == CompatMode::Strict
    }

    #[inline]
    pub fn in_quirks_mode(&self) -> bool {
        self.mode == CompatMode::Quirks
    }

    /// HTML document (attribute values compare case-insensitively)
    #[inline]
    pub fn is_html(&self) -> bool {
        self.is_html
    }

    /// Element targeted by the URL fragment
    #[inline]
    pub fn css_target(&self) -> Option<NodeId> {
        self.css_target
    }

    pub fn set_css_target(&mut self, target: Option<NodeId>) {
        self.css_target = target;
    }

    /// First element child of the document node
    pub fn document_element(&self) -> Option<NodeId> {
        self.tree
            .children(self.tree.root())
            .find(|(_, node)| node.is_element())
            .map(|(id, _)| id)
    }

    /// The `<body>` element, if present
    pub fn body(&self) -> Option<NodeId> {
        let html = self.document_element()?;
        self.tree
            .children(html)
            .find(|(id, _)| self.tree.local_name(*id) == Some("body"))
            .map(|(id, _)| id)
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendant_elements(self.tree.root())
            .into_iter()
            .find(|&n| self.tree.element(n).and_then(|e| e.id()) == Some(id))
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

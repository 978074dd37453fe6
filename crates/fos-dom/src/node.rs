//! DOM Node - Compact representation
//!
//! Nodes link to each other through `NodeId`s into the tree arena.

use crate::{InternedString, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(local_name: InternedString, is_html: bool) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(local_name, is_html)))
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self::with_data(NodeData::Text(content))
    }

    /// Create a new comment node
    pub fn comment(content: String) -> Self {
        Self::with_data(NodeData::Comment(content))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Attribute in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name (lowercased for HTML elements)
    pub name: String,
    pub value: String,
}

/// Live user-interaction state of an element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ElementState {
    pub hovered: bool,
    pub active: bool,
    pub focused: bool,
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Local tag name
    pub local_name: InternedString,
    /// HTML element (as opposed to a generic XML element)
    pub is_html: bool,
    /// Dynamic state
    pub state: ElementState,
    /// Inserted by the HTML parser rather than present in the markup
    pub implicit: bool,
    attrs: Vec<Attribute>,
    id: Option<String>,
    classes: Vec<String>,
}

impl ElementData {
    pub fn new(local_name: InternedString, is_html: bool) -> Self {
        Self {
            local_name,
            is_html,
            state: ElementState::default(),
            implicit: false,
            attrs: Vec::new(),
            id: None,
            classes: Vec::new(),
        }
    }

    /// Attributes in document order
    #[inline]
    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check for an attribute
    #[inline]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Cached id attribute
    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Cached class list, split on whitespace
    #[inline]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether a `class` attribute is present
    #[inline]
    pub fn has_class(&self) -> bool {
        self.has_attr("class")
    }

    /// Inline `style` attribute text
    #[inline]
    pub fn inline_style(&self) -> Option<&str> {
        self.get_attr("style")
    }

    /// Set an attribute, keeping the id and class caches in sync
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let name = if self.is_html {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        };
        match name.as_str() {
            "id" => self.id = (!value.is_empty()).then(|| value.to_string()),
            "class" => {
                self.classes = value.split_ascii_whitespace().map(str::to_string).collect();
            }
            _ => {}
        }
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            attr.value = value.to_string();
            return;
        }
        self.attrs.push(Attribute {
            name,
            value: value.to_string(),
        });
    }

    /// Remove an attribute
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|a| a.name.eq_ignore_ascii_case(name))?;
        let attr = self.attrs.remove(pos);
        match attr.name.as_str() {
            "id" => self.id = None,
            "class" => self.classes.clear(),
            _ => {}
        }
        Some(attr.value)
    }
}

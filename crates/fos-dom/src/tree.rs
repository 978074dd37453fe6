//! DOM Tree (arena-based allocation)

use crate::{ElementData, ElementState, InternedString, Node, NodeId, StringInterner};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            interner: StringInterner::new(),
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Element data of a node, if it is an element
    #[inline]
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Whether the node is an element
    #[inline]
    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Tag name interner
    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Resolve an interned string
    #[inline]
    pub fn resolve(&self, s: InternedString) -> &str {
        self.interner.get(s)
    }

    /// Local name of an element
    pub fn local_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| self.resolve(e.local_name))
    }

    /// Whether the element is an HTML hyperlink carrying an `href`
    pub fn is_link(&self, id: NodeId) -> bool {
        let Some(e) = self.element(id) else {
            return false;
        };
        e.is_html
            && matches!(self.resolve(e.local_name), "a" | "area" | "link")
            && e.has_attr("href")
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached HTML element (tag name lowercased)
    pub fn create_element(&mut self, name: &str) -> NodeId {
        let local = self.interner.intern(&name.to_ascii_lowercase());
        self.push(Node::element(local, true))
    }

    /// Create a detached non-HTML element (tag name kept as is)
    pub fn create_xml_element(&mut self, name: &str) -> NodeId {
        let local = self.interner.intern(name);
        self.push(Node::element(local, false))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content.to_string()))
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent.index() >= self.nodes.len() || child.index() >= self.nodes.len() {
            return;
        }
        let last = self.nodes[parent.index()].last_child;
        {
            let c = &mut self.nodes[child.index()];
            c.parent = parent;
            c.prev_sibling = last;
            c.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(e) = self.get_mut(id).and_then(Node::as_element_mut) {
            e.set_attr(name, value);
        }
    }

    /// Remove an attribute from an element
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.get_mut(id)
            .and_then(Node::as_element_mut)
            .and_then(|e| e.remove_attr(name))
    }

    /// Replace the dynamic state of an element
    pub fn set_state(&mut self, id: NodeId, state: ElementState) {
        if let Some(e) = self.get_mut(id).and_then(Node::as_element_mut) {
            e.state = state;
        }
    }

    /// Mark an element as parser-inserted
    pub fn set_implicit(&mut self, id: NodeId, implicit: bool) {
        if let Some(e) = self.get_mut(id).and_then(Node::as_element_mut) {
            e.implicit = implicit;
        }
    }

    /// Parent node
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent.option())
    }

    /// First child node
    #[inline]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.first_child.option())
    }

    /// Last child node
    #[inline]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.last_child.option())
    }

    /// Previous sibling node
    #[inline]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling.option())
    }

    /// Next sibling node
    #[inline]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling.option())
    }

    /// Parent, if it is an element
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).filter(|&p| self.is_element(p))
    }

    /// Nearest previous sibling that is an element
    pub fn prev_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut cur = self.prev_sibling(id);
        while let Some(n) = cur {
            if self.is_element(n) {
                return Some(n);
            }
            cur = self.prev_sibling(n);
        }
        None
    }

    /// Nearest next sibling that is an element
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut cur = self.next_sibling(id);
        while let Some(n) = cur {
            if self.is_element(n) {
                return Some(n);
            }
            cur = self.next_sibling(n);
        }
        None
    }

    /// Iterate over the children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.first_child(id),
        }
    }

    /// All elements below `root` in document order
    pub fn descendant_elements(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();
        let mut child = self.last_child(root);
        while let Some(c) = child {
            stack.push(c);
            child = self.prev_sibling(c);
        }
        while let Some(id) = stack.pop() {
            if self.is_element(id) {
                out.push(id);
            }
            let mut child = self.last_child(id);
            while let Some(c) = child {
                stack.push(c);
                child = self.prev_sibling(c);
            }
        }
        out
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over child nodes
pub struct Children<'a> {
    tree: &'a DomTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling.option();
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_navigate() {
        let mut tree = DomTree::new();
        let div = tree.create_element("DIV");
        let text = tree.create_text("hi");
        let span = tree.create_element("span");
        tree.append_child(tree.root(), div);
        tree.append_child(div, text);
        tree.append_child(div, span);

        assert_eq!(tree.local_name(div), Some("div"));
        assert_eq!(tree.first_child(div), Some(text));
        assert_eq!(tree.last_child(div), Some(span));
        assert_eq!(tree.prev_sibling(span), Some(text));
        assert_eq!(tree.prev_element_sibling(span), None);
        assert_eq!(tree.parent_element(span), Some(div));
        assert_eq!(tree.parent_element(div), None);
        assert_eq!(tree.children(div).count(), 2);
    }

    #[test]
    fn test_is_link() {
        let mut tree = DomTree::new();
        let a = tree.create_element("a");
        assert!(!tree.is_link(a));
        tree.set_attribute(a, "href", "/x");
        assert!(tree.is_link(a));
        let div = tree.create_element("div");
        tree.set_attribute(div, "href", "/x");
        assert!(!tree.is_link(div));
    }

    #[test]
    fn test_descendant_elements_in_document_order() {
        let mut tree = DomTree::new();
        let a = tree.create_element("a");
        let b = tree.create_element("b");
        let c = tree.create_element("c");
        let d = tree.create_element("d");
        tree.append_child(tree.root(), a);
        tree.append_child(a, b);
        tree.append_child(b, c);
        tree.append_child(a, d);
        assert_eq!(tree.descendant_elements(tree.root()), vec![a, b, c, d]);
    }
}

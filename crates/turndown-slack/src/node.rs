//! CDP-style DOM Node structure consumed by the Slack rules.
//!
//! The tree is owned by the caller. Rules only ever see it through a
//! [`NodeRef`], which adds the upward and sideways navigation (parent, next
//! sibling, position among siblings) that an owned tree of children cannot
//! provide on its own.

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
}

/// A DOM node following the CDP DOM.Node structure.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node type (1 = Element, 3 = Text, etc.)
    pub node_type: NodeType,

    /// Node name (uppercase for elements, e.g., "DIV", "#text" for text nodes)
    pub node_name: String,

    /// Text content for text and comment nodes
    pub node_value: Option<String>,

    /// Attributes as flat array [name, value, name, value, ...] (CDP style)
    pub attributes: Option<Vec<String>>,

    /// Child nodes
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_uppercase(),
            node_value: None,
            attributes: Some(Vec::new()),
            children: Some(Vec::new()),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let flat_attrs: Vec<String> = attrs
            .into_iter()
            .flat_map(|(k, v)| [k.to_string(), v.to_string()])
            .collect();

        Self {
            attributes: Some(flat_attrs),
            ..Self::element(tag_name)
        }
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: None,
            children: None,
        }
    }

    /// Create a comment node
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            node_name: "#comment".to_string(),
            node_value: Some(content.to_string()),
            attributes: None,
            children: None,
        }
    }

    /// Builder-style variant of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.node_name.to_lowercase()
    }

    /// Case-insensitive tag comparison, false for non-elements
    pub fn is_tag(&self, name: &str) -> bool {
        self.is_element() && self.node_name.eq_ignore_ascii_case(name)
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        let attrs = self.attributes.as_ref()?;

        // CDP stores attributes as flat array: [name, value, name, value, ...]
        attrs
            .chunks_exact(2)
            .find(|pair| pair[0].eq_ignore_ascii_case(name))
            .map(|pair| pair[1].as_str())
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Check whether the whitespace-separated `class` list contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|list| list.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().flat_map(|c| c.iter())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Set an attribute, replacing an existing value of the same name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let attrs = self.attributes.get_or_insert_with(Vec::new);

        if let Some(pair) = attrs
            .chunks_exact_mut(2)
            .find(|pair| pair[0].eq_ignore_ascii_case(name))
        {
            pair[1] = value.to_string();
            return;
        }
        attrs.push(name.to_string());
        attrs.push(value.to_string());
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.node_value.clone().unwrap_or_default(),
            NodeType::Comment => String::new(),
            _ => self.children().map(Node::text_content).collect(),
        }
    }
}

/// A read-only handle to a node together with its ancestry.
///
/// Each handle links to its parent's handle, so a chain of `NodeRef`s lives on
/// the stack of whoever walks the tree. Nothing is ever written back into the
/// [`Node`] tree.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    /// The node itself
    pub node: &'a Node,
    parent: Option<&'a NodeRef<'a>>,
    /// Index among all of the parent's child nodes
    position: usize,
}

impl<'a> NodeRef<'a> {
    /// Create a handle for a node with no known parent
    pub fn root(node: &'a Node) -> Self {
        Self {
            node,
            parent: None,
            position: 0,
        }
    }

    /// Handles for every child node, text nodes included
    pub fn children<'b>(&'b self) -> impl Iterator<Item = NodeRef<'b>> + 'b {
        let this: &'b NodeRef<'b> = self;
        this.node
            .children()
            .enumerate()
            .map(move |(position, node)| NodeRef {
                node,
                parent: Some(this),
                position,
            })
    }

    /// Handle for the first child node of any type
    pub fn first_child<'b>(&'b self) -> Option<NodeRef<'b>> {
        self.children().next()
    }

    /// The parent handle, if this node was reached from one
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.parent.copied()
    }

    /// Tag name of the parent element, lowercase
    pub fn parent_tag(&self) -> Option<String> {
        self.parent
            .filter(|p| p.is_element())
            .map(|p| p.tag_name())
    }

    /// Check the parent's tag without allocating
    pub fn parent_is(&self, tag: &str) -> bool {
        self.parent.map(|p| p.node.is_tag(tag)).unwrap_or(false)
    }

    /// The node immediately after this one, of any type
    pub fn next_sibling(&self) -> Option<NodeRef<'a>> {
        let parent = self.parent?;
        parent
            .node
            .children()
            .nth(self.position + 1)
            .map(|node| NodeRef {
                node,
                parent: Some(parent),
                position: self.position + 1,
            })
    }

    /// Zero-based index among the parent's element children
    pub fn element_index(&self) -> Option<usize> {
        let parent = self.parent?;
        Some(
            parent
                .node
                .children()
                .take(self.position)
                .filter(|n| n.is_element())
                .count(),
        )
    }

    /// Whether the boolean `checked` attribute is present
    pub fn is_checked(&self) -> bool {
        self.node.has_attr("checked")
    }

    /// Raw `class` attribute, empty when absent
    pub fn class_name(&self) -> &'a str {
        self.node.attr("class").unwrap_or("")
    }

    /// Delegate to Node methods
    pub fn is_element(&self) -> bool {
        self.node.is_element()
    }

    pub fn is_text(&self) -> bool {
        self.node.is_text()
    }

    pub fn tag_name(&self) -> String {
        self.node.tag_name()
    }

    pub fn is_tag(&self, name: &str) -> bool {
        self.node.is_tag(name)
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attr(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.node.has_attr(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.node.has_class(class)
    }

    pub fn text_content(&self) -> String {
        self.node.text_content()
    }
}

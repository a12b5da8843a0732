//! In-memory rendering of the markup contract
//!
//! A `Page` is a flat collection of nodes standing in for the host document.
//! A translatable block and its trigger are paired through a shared item
//! identifier: the trigger node's id equals the value of the block node's
//! item attribute. Nodes can be added at any time; dispatch does not depend
//! on when a node appeared.

use std::collections::HashMap;

/// A displayable element: id, classes, attributes, and text content
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    text: String,
}

impl Node {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            classes: Vec::new(),
            attrs: HashMap::new(),
            text: String::new(),
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|v| v.as_str())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// The stable root under which all nodes live
#[derive(Debug, Default)]
pub struct Page {
    nodes: Vec<Node>,
}

impl Page {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node to the page; late additions are dispatched like any other
    pub fn add_node(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Find the text block paired with an item id: a node carrying `class`
    /// whose `attr_name` attribute equals `item_id`
    pub fn find_block_mut(
        &mut self,
        class: &str,
        attr_name: &str,
        item_id: &str,
    ) -> Option<&mut Node> {
        self.nodes
            .iter_mut()
            .find(|n| n.has_class(class) && n.attr(attr_name) == Some(item_id))
    }

    pub fn find_block(&self, class: &str, attr_name: &str, item_id: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.has_class(class) && n.attr(attr_name) == Some(item_id))
    }
}

/// A click dispatched from the page root
#[derive(Debug, Clone)]
pub struct ClickEvent {
    target_id: String,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(target_id: &str) -> Self {
        Self {
            target_id: target_id.to_string(),
            default_prevented: false,
        }
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Suppress the target's default action (e.g. link navigation)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

use serde::{Deserialize, Serialize};

use crate::core::node::NodeRole;

/// Blueprint for one node of the private subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateNode {
    pub role: NodeRole,
    pub attributes: Vec<(String, String)>,
    pub text: String,
}

impl TemplateNode {
    #[must_use]
    pub fn new(role: NodeRole) -> Self {
        Self {
            role,
            attributes: Vec::new(),
            text: String::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }
}

/// The fixed fragment cloned into every widget instance.
///
/// The node roles stand in for the fixed internal selectors of the
/// fragment; they are a private interface between the widget and its
/// template collaborator, not user-configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Template {
    nodes: Vec<TemplateNode>,
}

impl Template {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_node(mut self, node: TemplateNode) -> Self {
        self.nodes.push(node);
        self
    }

    #[must_use]
    pub fn nodes(&self) -> &[TemplateNode] {
        &self.nodes
    }

    /// The stock progress-bar fragment: a range input, a track, an
    /// indicator starting at zero width, and a textual readout.
    #[must_use]
    pub fn progress_bar() -> Self {
        Self::new()
            .with_node(TemplateNode::new(NodeRole::Input).with_attribute("type", "range"))
            .with_node(TemplateNode::new(NodeRole::Background).with_attribute("width", "100%"))
            .with_node(TemplateNode::new(NodeRole::Progress).with_attribute("width", "0%"))
            .with_node(TemplateNode::new(NodeRole::Output))
    }
}

use serde::{Deserialize, Serialize};

use crate::core::node::{Node, NodeRole};
use crate::core::template::Template;
use crate::error::{WidgetError, WidgetResult};

/// Index into an [`InternalTree`]'s node arena.
///
/// Handles are resolved once at construction and stay valid for the
/// lifetime of the owning tree; they are never re-queried per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeHandle(usize);

/// The widget's private subtree: an owned node arena plus cached handles
/// to the roles the render path touches.
///
/// Isolated by ownership: nothing outside the owning widget instance can
/// reach these nodes, which is the crate's stand-in for style/selector
/// encapsulation.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalTree {
    nodes: Vec<Node>,
    input: NodeHandle,
    progress: NodeHandle,
    background: Option<NodeHandle>,
    output: Option<NodeHandle>,
}

impl InternalTree {
    /// Clones `template` into an owned arena and caches role handles.
    ///
    /// Missing input or progress roles, or any duplicated role, are
    /// configuration errors: the template contract is fixed and a bad
    /// fragment means the widget cannot be constructed at all.
    pub fn build(template: &Template) -> WidgetResult<Self> {
        let mut nodes = Vec::with_capacity(template.nodes().len());
        let mut input = None;
        let mut progress = None;
        let mut background = None;
        let mut output = None;

        for blueprint in template.nodes() {
            let handle = NodeHandle(nodes.len());
            let mut node = Node::new(blueprint.role);
            for (name, value) in &blueprint.attributes {
                node.set_attribute(name, value);
            }
            node.set_text(&blueprint.text);
            nodes.push(node);

            let slot = match blueprint.role {
                NodeRole::Input => &mut input,
                NodeRole::Progress => &mut progress,
                NodeRole::Background => &mut background,
                NodeRole::Output => &mut output,
            };
            if slot.replace(handle).is_some() {
                return Err(WidgetError::DuplicateTemplateNode {
                    role: blueprint.role.as_str(),
                });
            }
        }

        let input = input.ok_or(WidgetError::MissingTemplateNode {
            role: NodeRole::Input.as_str(),
        })?;
        let progress = progress.ok_or(WidgetError::MissingTemplateNode {
            role: NodeRole::Progress.as_str(),
        })?;

        Ok(Self {
            nodes,
            input,
            progress,
            background,
            output,
        })
    }

    #[must_use]
    pub fn resolve(&self, role: NodeRole) -> Option<NodeHandle> {
        match role {
            NodeRole::Input => Some(self.input),
            NodeRole::Progress => Some(self.progress),
            NodeRole::Background => self.background,
            NodeRole::Output => self.output,
        }
    }

    #[must_use]
    pub fn node(&self, handle: NodeHandle) -> &Node {
        &self.nodes[handle.0]
    }

    pub fn node_mut(&mut self, handle: NodeHandle) -> &mut Node {
        &mut self.nodes[handle.0]
    }

    #[must_use]
    pub fn input(&self) -> &Node {
        self.node(self.input)
    }

    pub fn input_mut(&mut self) -> &mut Node {
        let handle = self.input;
        self.node_mut(handle)
    }

    #[must_use]
    pub fn progress(&self) -> &Node {
        self.node(self.progress)
    }

    pub fn progress_mut(&mut self) -> &mut Node {
        let handle = self.progress;
        self.node_mut(handle)
    }

    #[must_use]
    pub fn background(&self) -> Option<&Node> {
        self.background.map(|handle| self.node(handle))
    }

    #[must_use]
    pub fn output(&self) -> Option<&Node> {
        self.output.map(|handle| self.node(handle))
    }

    pub fn output_mut(&mut self) -> Option<&mut Node> {
        self.output.map(|handle| &mut self.nodes[handle.0])
    }
}

#[cfg(test)]
mod tests {
    use super::InternalTree;
    use crate::core::node::NodeRole;
    use crate::core::template::{Template, TemplateNode};
    use crate::error::WidgetError;

    #[test]
    fn build_caches_every_stock_role() {
        let tree = InternalTree::build(&Template::progress_bar()).expect("stock template builds");
        assert_eq!(tree.input().attribute("type"), Some("range"));
        assert_eq!(tree.progress().attribute("width"), Some("0%"));
        assert!(tree.background().is_some());
        assert!(tree.output().is_some());
    }

    #[test]
    fn missing_progress_node_is_a_configuration_error() {
        let template = Template::new().with_node(TemplateNode::new(NodeRole::Input));
        let err = InternalTree::build(&template).expect_err("must fail");
        assert!(matches!(
            err,
            WidgetError::MissingTemplateNode { role: "progress" }
        ));
    }

    #[test]
    fn duplicate_role_is_a_configuration_error() {
        let template = Template::new()
            .with_node(TemplateNode::new(NodeRole::Input))
            .with_node(TemplateNode::new(NodeRole::Progress))
            .with_node(TemplateNode::new(NodeRole::Progress));
        let err = InternalTree::build(&template).expect_err("must fail");
        assert!(matches!(
            err,
            WidgetError::DuplicateTemplateNode { role: "progress" }
        ));
    }

    #[test]
    fn optional_roles_may_be_absent() {
        let template = Template::new()
            .with_node(TemplateNode::new(NodeRole::Input))
            .with_node(TemplateNode::new(NodeRole::Progress));
        let tree = InternalTree::build(&template).expect("minimal template builds");
        assert!(tree.background().is_none());
        assert!(tree.output().is_none());
    }
}

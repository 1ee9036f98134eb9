pub mod node;
pub mod template;
pub mod tree;

pub use node::{DEFAULT_MAX, DEFAULT_MIN, Node, NodeRole, format_number};
pub use template::{Template, TemplateNode};
pub use tree::{InternalTree, NodeHandle};

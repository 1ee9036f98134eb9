//! Attribute mirroring from the host element onto internal nodes.
//!
//! The binding table is the widget's host-facing configuration surface:
//! every recognized host attribute maps to one target attribute on one or
//! more internal node roles. Unknown host attributes pass through
//! untouched so hosts can carry unrelated markup without breaking the
//! widget.

use smallvec::SmallVec;
use tracing::trace;

use crate::api::HostElement;
use crate::core::node::NodeRole;
use crate::core::tree::{InternalTree, NodeHandle};

/// One static rule mapping a host attribute to internal targets.
///
/// Shared, read-only configuration: the same table serves every widget
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeBinding {
    pub host_attribute: &'static str,
    pub target_attribute: &'static str,
    pub targets: &'static [NodeRole],
}

/// The full binding table: numeric constraints onto the input node,
/// visual styling onto the indicator and track nodes.
pub const BINDINGS: &[AttributeBinding] = &[
    AttributeBinding {
        host_attribute: "min",
        target_attribute: "min",
        targets: &[NodeRole::Input],
    },
    AttributeBinding {
        host_attribute: "max",
        target_attribute: "max",
        targets: &[NodeRole::Input],
    },
    AttributeBinding {
        host_attribute: "step",
        target_attribute: "step",
        targets: &[NodeRole::Input],
    },
    AttributeBinding {
        host_attribute: "bar-color",
        target_attribute: "fill",
        targets: &[NodeRole::Progress],
    },
    AttributeBinding {
        host_attribute: "track-color",
        target_attribute: "fill",
        targets: &[NodeRole::Background],
    },
    AttributeBinding {
        host_attribute: "corner-radius",
        target_attribute: "corner-radius",
        targets: &[NodeRole::Progress, NodeRole::Background],
    },
];

#[must_use]
pub fn binding_for(host_attribute: &str) -> Option<&'static AttributeBinding> {
    BINDINGS
        .iter()
        .find(|binding| binding.host_attribute == host_attribute)
}

/// Copies every recognized host attribute onto its target nodes.
///
/// Runs at construction time before the first render so bounds exist
/// before any value computation; re-run on host attribute change.
pub fn apply(host: &HostElement, tree: &mut InternalTree) {
    for (name, value) in host.attributes() {
        mirror_one(tree, name, value);
    }
}

/// Mirrors a single host attribute. Returns `true` when the attribute is
/// recognized and at least one target node exists in `tree`.
pub fn mirror_one(tree: &mut InternalTree, name: &str, value: &str) -> bool {
    let Some(binding) = binding_for(name) else {
        return false;
    };

    let handles: SmallVec<[NodeHandle; 2]> = binding
        .targets
        .iter()
        .filter_map(|role| tree.resolve(*role))
        .collect();

    for handle in &handles {
        tree.node_mut(*handle)
            .set_attribute(binding.target_attribute, value);
        trace!(
            host_attribute = name,
            target_attribute = binding.target_attribute,
            value,
            "mirrored host attribute"
        );
    }

    !handles.is_empty()
}

//! Lifecycle hooks invoked by the host environment.
//!
//! The host owns the moments; this module owns the ordering. Construction
//! is: build tree → mirror host attributes → one initial render → attach
//! the bridge. Bounds must exist before the first render, the tree before
//! the bounds, and listeners last so no trigger fires before the tree is
//! renderable.

use tracing::debug;

use crate::api::host::HostElement;
use crate::api::widget::ProgressWidget;
use crate::bridge::ChangeBridge;
use crate::core::template::Template;
use crate::core::tree::InternalTree;
use crate::error::WidgetResult;
use crate::mirror;
use crate::render::RenderEngine;

impl ProgressWidget {
    /// Host instantiation hook. Construction happens at most once per
    /// instance; a failure surfaces to the host and is never retried.
    pub fn on_create(host: &HostElement) -> WidgetResult<Self> {
        Self::on_create_with_template(host, &Self::template())
    }

    /// Construction against a caller-supplied template fragment.
    pub fn on_create_with_template(
        host: &HostElement,
        template: &Template,
    ) -> WidgetResult<Self> {
        debug!(tag = host.tag(), "creating widget instance");

        let mut tree = InternalTree::build(template)?;
        mirror::apply(host, &mut tree);
        RenderEngine::render(&mut tree);

        let mut bridge = ChangeBridge::new();
        bridge.attach();

        Ok(Self { tree, bridge })
    }

    /// Reserved extension point; no required effect.
    pub fn on_attach_to_document(&mut self, host: &HostElement) {
        debug!(tag = host.tag(), "widget attached to document");
    }

    /// Host detachment hook: stops honoring render triggers. Safe to call
    /// repeatedly and safe after a partially failed construction.
    pub fn on_detach_from_document(&mut self, host: &HostElement) {
        debug!(tag = host.tag(), "widget detached from document");
        self.bridge.detach();
    }

    /// Host attribute mutation hook.
    ///
    /// Policy: recognized attributes are re-mirrored and followed by one
    /// render while attached; unrecognized attributes are ignored. Must
    /// not crash under any input.
    pub fn on_host_attribute_changed(
        &mut self,
        host: &HostElement,
        name: &str,
        old_value: Option<&str>,
        new_value: Option<&str>,
    ) {
        debug!(
            tag = host.tag(),
            attribute = name,
            ?old_value,
            ?new_value,
            "host attribute changed"
        );

        let Some(new_value) = new_value else {
            return;
        };
        if !mirror::mirror_one(&mut self.tree, name, new_value) {
            return;
        }

        // A bounds change can strand the stored value outside the new
        // range; the input node re-sanitizes it, as a host range input
        // would, so the next render stays inside the track.
        if matches!(name, "min" | "max") {
            let current = self.tree.input().value_as_number();
            if current.is_finite() {
                self.tree.input_mut().assign_value(current);
            }
        }

        if self.bridge.accepts_triggers() {
            RenderEngine::render(&mut self.tree);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::host::HostElement;
    use crate::api::widget::ProgressWidget;
    use crate::bridge::BridgeState;

    #[test]
    fn creation_mirrors_before_first_render() {
        let host = HostElement::new("progress-bar")
            .with_attribute("min", "0")
            .with_attribute("max", "4");
        let widget = ProgressWidget::on_create(&host).expect("create");

        // The initial render already saw the mirrored bounds.
        assert_eq!(widget.tree().input().attribute("max"), Some("4"));
        assert_eq!(widget.bridge_state(), BridgeState::Attached);
    }

    #[test]
    fn attribute_change_hook_ignores_unknown_names() {
        let host = HostElement::new("progress-bar");
        let mut widget = ProgressWidget::on_create(&host).expect("create");
        let before = widget.tree().clone();

        widget.on_host_attribute_changed(&host, "aria-label", None, Some("loading"));
        assert_eq!(widget.tree(), &before);
    }

    #[test]
    fn attribute_removal_is_tolerated() {
        let host = HostElement::new("progress-bar").with_attribute("min", "1");
        let mut widget = ProgressWidget::on_create(&host).expect("create");

        widget.on_host_attribute_changed(&host, "min", Some("1"), None);
        assert_eq!(widget.tree().input().attribute("min"), Some("1"));
    }
}

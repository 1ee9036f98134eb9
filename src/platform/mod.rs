//! Host-environment glue: tag registration and hook dispatch.
//!
//! `WidgetRegistry` stands in for the host document: it owns the host
//! elements, instantiates one widget per element for the registered tag,
//! and invokes the lifecycle hooks at the defined moments. The engine
//! modules never depend on it; it lives at the crate edge the way a
//! platform adapter does.

use indexmap::IndexMap;
use tracing::debug;

use crate::api::{HostElement, ProgressWidget};
use crate::error::{WidgetError, WidgetResult};

/// Identity the host environment assigns to an instantiated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

#[derive(Debug)]
struct Instance {
    host: HostElement,
    widget: ProgressWidget,
}

/// Minimal host document: one registered tag, many live instances.
#[derive(Debug)]
pub struct WidgetRegistry {
    tag: String,
    next_id: u64,
    instances: IndexMap<InstanceId, Instance>,
}

impl WidgetRegistry {
    /// Registers `tag` as the widget's element name.
    #[must_use]
    pub fn register(tag: &str) -> Self {
        debug!(tag, "registered widget tag");
        Self {
            tag: tag.to_owned(),
            next_id: 0,
            instances: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Instantiates a widget for `host` and runs its creation hook.
    ///
    /// A construction failure propagates to the caller and leaves no
    /// half-built instance behind.
    pub fn instantiate(&mut self, host: HostElement) -> WidgetResult<InstanceId> {
        if host.tag() != self.tag {
            return Err(WidgetError::UnknownTag {
                tag: host.tag().to_owned(),
            });
        }

        let widget = ProgressWidget::on_create(&host)?;
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.instances.insert(id, Instance { host, widget });
        Ok(id)
    }

    #[must_use]
    pub fn widget(&self, id: InstanceId) -> Option<&ProgressWidget> {
        self.instances.get(&id).map(|instance| &instance.widget)
    }

    pub fn widget_mut(&mut self, id: InstanceId) -> Option<&mut ProgressWidget> {
        self.instances
            .get_mut(&id)
            .map(|instance| &mut instance.widget)
    }

    #[must_use]
    pub fn host(&self, id: InstanceId) -> Option<&HostElement> {
        self.instances.get(&id).map(|instance| &instance.host)
    }

    /// Routes a user input event to the instance's internal input node.
    pub fn dispatch_input(&mut self, id: InstanceId, value: f64) -> WidgetResult<()> {
        let instance = self
            .instances
            .get_mut(&id)
            .ok_or(WidgetError::UnknownInstance { id: id.0 })?;
        instance.widget.dispatch_input(value);
        Ok(())
    }

    /// Mutates a host attribute and fires the attribute-changed hook with
    /// the old and new values, as the host document would.
    pub fn set_host_attribute(
        &mut self,
        id: InstanceId,
        name: &str,
        value: &str,
    ) -> WidgetResult<()> {
        let instance = self
            .instances
            .get_mut(&id)
            .ok_or(WidgetError::UnknownInstance { id: id.0 })?;
        let old = instance.host.set_attribute(name, value);
        instance
            .widget
            .on_host_attribute_changed(&instance.host, name, old.as_deref(), Some(value));
        Ok(())
    }

    /// Detaches the element from the document. The instance stays
    /// addressable (the host may re-read its state) but honors no further
    /// render triggers.
    pub fn detach(&mut self, id: InstanceId) -> WidgetResult<()> {
        let instance = self
            .instances
            .get_mut(&id)
            .ok_or(WidgetError::UnknownInstance { id: id.0 })?;
        instance.widget.on_detach_from_document(&instance.host);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::WidgetRegistry;
    use crate::api::HostElement;
    use crate::error::WidgetError;

    #[test]
    fn foreign_tag_is_rejected() {
        let mut registry = WidgetRegistry::register("progress-bar");
        let err = registry
            .instantiate(HostElement::new("other-widget"))
            .expect_err("must fail");
        assert!(matches!(err, WidgetError::UnknownTag { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn instances_get_distinct_ids() {
        let mut registry = WidgetRegistry::register("progress-bar");
        let first = registry
            .instantiate(HostElement::new("progress-bar"))
            .expect("first");
        let second = registry
            .instantiate(HostElement::new("progress-bar"))
            .expect("second");
        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unknown_instance_ids_error() {
        let mut registry = WidgetRegistry::register("progress-bar");
        let id = registry
            .instantiate(HostElement::new("progress-bar"))
            .expect("create");
        let mut other = WidgetRegistry::register("progress-bar");
        assert!(matches!(
            other.dispatch_input(id, 1.0),
            Err(WidgetError::UnknownInstance { .. })
        ));
    }
}

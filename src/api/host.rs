use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The host document element a widget instance is bound to.
///
/// The host environment owns the element; the widget only ever observes
/// its tag and attributes through lifecycle hooks. Attribute order is
/// preserved so mirroring is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostElement {
    tag: String,
    attributes: IndexMap<String, String>,
}

impl HostElement {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            attributes: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Sets an attribute and returns its previous value, if any.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Option<String> {
        self.attributes.insert(name.to_owned(), value.to_owned())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default bounds applied when the input node carries no explicit
/// `min`/`max` attributes, matching host range-input semantics.
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;

/// Role a node plays inside the widget's private subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    /// The input-capable node holding the widget's numeric value.
    Input,
    /// The progress-indicator node whose width tracks the fill proportion.
    Progress,
    /// Optional track/background node behind the indicator.
    Background,
    /// Optional textual readout node.
    Output,
}

impl NodeRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Progress => "progress",
            Self::Background => "background",
            Self::Output => "output",
        }
    }
}

/// One node of the widget's private subtree.
///
/// Nodes are plain attribute bags plus a text slot; the input node layers
/// numeric semantics (parsing, bounds, clamp-on-assign) on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    role: NodeRole,
    attributes: IndexMap<String, String>,
    text: String,
}

impl Node {
    #[must_use]
    pub fn new(role: NodeRole) -> Self {
        Self {
            role,
            attributes: IndexMap::new(),
            text: String::new(),
        }
    }

    #[must_use]
    pub fn role(&self) -> NodeRole {
        self.role
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Parses an attribute as a finite float; `None` when absent or
    /// unparseable.
    #[must_use]
    pub fn number_attribute(&self, name: &str) -> Option<f64> {
        self.attribute(name)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }

    /// Lower bound of the input node, defaulting per host semantics.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.number_attribute("min").unwrap_or(DEFAULT_MIN)
    }

    /// Upper bound of the input node, defaulting per host semantics.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.number_attribute("max").unwrap_or(DEFAULT_MAX)
    }

    #[must_use]
    pub fn step(&self) -> Option<f64> {
        self.number_attribute("step")
    }

    /// Current value of the input node as a number; NaN when the `value`
    /// attribute is absent or non-numeric, mirroring `valueAsNumber`.
    #[must_use]
    pub fn value_as_number(&self) -> f64 {
        self.attribute("value")
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }

    /// Assigns the input node's value, clamped to its valid range.
    ///
    /// Clamping lives here, not in the render engine: the input node owns
    /// its range and downstream consumers never re-clamp. Inverted bounds
    /// (max < min) collapse assignments onto the minimum, matching host
    /// range-input sanitization.
    pub fn assign_value(&mut self, value: f64) {
        let min = self.min();
        let max = self.max();
        let clamped = if !value.is_finite() {
            value
        } else if min <= max {
            value.clamp(min, max)
        } else {
            min
        };
        self.set_attribute("value", &format_number(clamped));
    }
}

/// Formats a float the way the host serializes numeric attributes:
/// integral values without a fractional part.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MAX, DEFAULT_MIN, Node, NodeRole, format_number};

    #[test]
    fn input_bounds_default_per_host_semantics() {
        let node = Node::new(NodeRole::Input);
        assert_eq!(node.min(), DEFAULT_MIN);
        assert_eq!(node.max(), DEFAULT_MAX);
        assert_eq!(node.step(), None);
    }

    #[test]
    fn assign_value_clamps_to_declared_range() {
        let mut node = Node::new(NodeRole::Input);
        node.set_attribute("min", "2");
        node.set_attribute("max", "8");

        node.assign_value(10.0);
        assert_eq!(node.attribute("value"), Some("8"));

        node.assign_value(-3.0);
        assert_eq!(node.attribute("value"), Some("2"));

        node.assign_value(5.5);
        assert_eq!(node.attribute("value"), Some("5.5"));
    }

    #[test]
    fn inverted_bounds_collapse_assignments_onto_min() {
        let mut node = Node::new(NodeRole::Input);
        node.set_attribute("min", "10");
        node.set_attribute("max", "3");

        node.assign_value(7.0);
        assert_eq!(node.attribute("value"), Some("10"));
    }

    #[test]
    fn missing_value_reads_as_nan() {
        let node = Node::new(NodeRole::Input);
        assert!(node.value_as_number().is_nan());
    }

    #[test]
    fn non_numeric_bounds_fall_back_to_defaults() {
        let mut node = Node::new(NodeRole::Input);
        node.set_attribute("min", "low");
        node.set_attribute("max", "");
        assert_eq!(node.min(), DEFAULT_MIN);
        assert_eq!(node.max(), DEFAULT_MAX);
    }

    #[test]
    fn format_number_drops_trailing_zero_fraction() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-3.0), "-3");
    }
}

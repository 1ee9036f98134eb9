use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::bridge::{BridgeState, ChangeBridge};
use crate::core::template::Template;
use crate::core::tree::InternalTree;
use crate::render::{RenderEngine, RenderState};

/// One widget instance bound to one host element.
///
/// Owns the private subtree and the trigger bridge; the host element
/// itself stays owned by the host environment and is only passed into
/// lifecycle hooks. The tree is built exactly once and never rebuilt for
/// the instance's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressWidget {
    pub(super) tree: InternalTree,
    pub(super) bridge: ChangeBridge,
}

impl ProgressWidget {
    /// Current numeric value, read from the internal input node.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.tree.input().value_as_number()
    }

    /// Assigns the value and, when the bridge is attached, performs one
    /// render, observably equivalent to the user dragging to `value`.
    ///
    /// The write happens regardless of bridge state; only the render is
    /// gated. Assignments are clamped by the input node's own range.
    pub fn set_value(&mut self, value: f64) {
        self.tree.input_mut().assign_value(value);
        if self.bridge.accepts_triggers() {
            RenderEngine::render(&mut self.tree);
        }
    }

    /// User interaction with the internal input: the host dispatches an
    /// input event carrying the new value. The input control takes the
    /// value either way; detaching only removes the render listener, so
    /// this gates exactly like `set_value`.
    pub fn dispatch_input(&mut self, value: f64) {
        self.tree.input_mut().assign_value(value);
        if self.bridge.accepts_triggers() {
            RenderEngine::render(&mut self.tree);
        }
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.tree.input().min()
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.tree.input().max()
    }

    #[must_use]
    pub fn step(&self) -> Option<f64> {
        self.tree.input().step()
    }

    #[must_use]
    pub fn bridge_state(&self) -> BridgeState {
        self.bridge.state()
    }

    /// Read-only view of the private subtree, for hosts that need to
    /// paint it.
    #[must_use]
    pub fn tree(&self) -> &InternalTree {
        &self.tree
    }

    /// Recomputes the visual state without writing it anywhere.
    #[must_use]
    pub fn render_state(&self) -> RenderState {
        RenderEngine::compute(&self.tree)
    }

    /// Template every stock instance is built from.
    #[must_use]
    pub fn template() -> Template {
        Template::progress_bar()
    }

    #[must_use]
    pub fn snapshot(&self) -> WidgetSnapshot {
        let state = self.render_state();
        WidgetSnapshot {
            value: self.value(),
            min: self.min(),
            max: self.max(),
            step: self.step(),
            fill_percent: state.fill_percent,
            progress_width: self
                .tree
                .progress()
                .attribute("width")
                .unwrap_or_default()
                .to_owned(),
            readout: self.tree.output().map(|node| node.text().to_owned()),
            bridge: self.bridge.state(),
        }
    }

    /// Diagnostic snapshot as JSON, for logging and contract tests.
    #[must_use]
    pub fn snapshot_json(&self) -> Value {
        let snapshot = self.snapshot();
        json!({
            "value": snapshot.value,
            "min": snapshot.min,
            "max": snapshot.max,
            "step": snapshot.step,
            "fill_percent": snapshot.fill_percent,
            "progress_width": snapshot.progress_width,
            "readout": snapshot.readout,
            "bridge": snapshot.bridge,
        })
    }
}

/// Serializable view of one instance's synchronized state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
    pub fill_percent: f64,
    pub progress_width: String,
    pub readout: Option<String>,
    pub bridge: BridgeState,
}

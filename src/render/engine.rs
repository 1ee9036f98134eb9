use crate::core::node::format_number;
use crate::core::tree::InternalTree;
use crate::render::state::{RenderState, fill_percent};

/// Computes the visual state from the input node and writes it to the
/// indicator and readout nodes.
///
/// The compute/write split keeps the math independently testable and the
/// write side trivially idempotent: re-rendering without an intervening
/// value change overwrites the same attributes with the same strings.
#[derive(Debug, Default)]
pub struct RenderEngine;

impl RenderEngine {
    /// Pure computation pass; touches nothing.
    #[must_use]
    pub fn compute(tree: &InternalTree) -> RenderState {
        let input = tree.input();
        RenderState {
            fill_percent: fill_percent(input.value_as_number(), input.min(), input.max()),
            readout: input.value_as_number(),
        }
    }

    /// One full render pass. Exactly two node writes: the indicator's
    /// `width` and, when present, the readout's text. Never mutates
    /// bounds and never triggers further events.
    pub fn render(tree: &mut InternalTree) -> RenderState {
        let state = Self::compute(tree);

        let width = format!("{}%", format_number(state.fill_percent));
        tree.progress_mut().set_attribute("width", &width);

        if let Some(output) = tree.output_mut() {
            let readout = if state.readout.is_finite() {
                format_number(state.readout)
            } else {
                String::new()
            };
            output.set_text(&readout);
        }

        state
    }
}

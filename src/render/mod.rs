mod engine;
mod state;

pub use engine::RenderEngine;
pub use state::{RenderState, fill_percent};

//! progress-rs: encapsulated progress-bar widget engine.
//!
//! One widget instance wraps a numeric input node inside a private,
//! owned subtree, mirrors constrained host attributes onto it, and keeps
//! a visual fill indicator and an optional readout synchronized with the
//! input's value. External attribute changes, user interaction, and
//! programmatic value assignment all converge on a single render path.

pub mod api;
pub mod bridge;
pub mod core;
pub mod error;
pub mod mirror;
pub mod platform;
pub mod render;
pub mod telemetry;

pub use api::{HostElement, ProgressWidget, WidgetSnapshot};
pub use error::{WidgetError, WidgetResult};

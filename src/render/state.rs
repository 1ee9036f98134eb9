use serde::{Deserialize, Serialize};

/// Visual state for one render pass, computed fresh on every trigger.
///
/// Never cached between renders: render is synchronous with its trigger,
/// so staleness is unobservable and a cache would only add a place for
/// the two sources of truth to diverge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    /// Fill proportion of the indicator, in percent of the track.
    pub fill_percent: f64,
    /// Raw numeric value shown by the readout node.
    pub readout: f64,
}

/// Fill proportion for `value` within `[min, max]`, in percent.
///
/// Degenerate bounds (max == min, non-numeric attributes) yield a
/// non-finite ratio; the deterministic fallback for those is 0%. The
/// result is deliberately not clamped; keeping assignments inside the
/// valid range is the input node's job.
#[must_use]
pub fn fill_percent(value: f64, min: f64, max: f64) -> f64 {
    let percent = 100.0 * (value - min) / (max - min);
    if percent.is_finite() { percent } else { 0.0 }
}

//! Easing profiles for time-driven motion.
//!
//! Progress is clamped to `[0, 1]` before shaping, so callers can feed raw
//! window progress without guarding the edges.

/// Remaps linear progress onto an acceleration profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    /// No shaping: progress passes through unchanged.
    #[default]
    Linear,
    /// Fast start that decelerates into the endpoint.
    OutCubic,
    /// Accelerates through the first half, decelerates through the second.
    InOutQuad,
}

impl Ease {
    /// Evaluates the profile at `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

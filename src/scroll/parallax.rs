use crate::foundation::math::{clamp_f64, clamp01};

/// A background layer that drifts and fades with scroll.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxLayer {
    /// Pixels of vertical shift per pixel scrolled (negative drifts up).
    pub factor: f64,
    /// Largest shift, in pixels, in either direction.
    pub max_shift: f64,
    /// Scroll distance over which the layer fades out completely.
    pub fade_distance: f64,
}

/// Derived per-frame values for one layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerParams {
    pub translate_y: f64,
    pub opacity: f64,
}

impl ParallaxLayer {
    pub const HEARTS: Self = Self {
        factor: -0.08,
        max_shift: 180.0,
        fade_distance: 800.0,
    };

    pub const SPARKLES: Self = Self {
        factor: -0.04,
        max_shift: 120.0,
        fade_distance: 900.0,
    };

    /// Shift clamped to `[-max_shift, 0]` for an upward drift, or
    /// `[0, max_shift]` when the factor is positive.
    pub fn translate_y(&self, offset: f64) -> f64 {
        let shift = offset * self.factor;
        if self.factor < 0.0 {
            clamp_f64(shift, -self.max_shift, 0.0)
        } else {
            clamp_f64(shift, 0.0, self.max_shift)
        }
    }

    pub fn opacity(&self, offset: f64) -> f64 {
        if self.fade_distance <= 0.0 {
            return 1.0;
        }
        clamp01(1.0 - offset / self.fade_distance)
    }

    pub fn params(&self, offset: f64) -> LayerParams {
        LayerParams {
            translate_y: self.translate_y(offset),
            opacity: self.opacity(offset),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/parallax.rs"]
mod tests;

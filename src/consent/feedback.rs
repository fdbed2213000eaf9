use crate::foundation::core::Transform2D;

pub const ACCEPT_SCALE_RANGE: (f64, f64) = (1.0, 1.6);
pub const ACCEPT_SHIFT_RANGE: (f64, f64) = (0.0, 48.0);
pub const DECLINE_SHIFT_RANGE: (f64, f64) = (20.0, 220.0);
pub const DECLINE_SCALE_RANGE: (f64, f64) = (0.55, 1.0);

/// Visual escalation of the two dialog buttons after `n` declines.
///
/// Every field is monotonic in `n`. The accept button grows and slides toward
/// the centre; the decline button shrinks, tilts and drifts away, but its
/// shift and scale are clamped so it stays on screen and clickable.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ConsentFeedback {
    pub accept_scale: f64,
    pub accept_shift_px: f64,
    pub decline_shift_px: f64,
    pub decline_scale: f64,
    pub decline_rotation_deg: f64,
}

impl ConsentFeedback {
    pub fn for_declines(n: u32) -> Self {
        let n = f64::from(n);
        Self {
            accept_scale: ACCEPT_SCALE_RANGE.0 + (n * 0.06).min(0.6),
            accept_shift_px: (n * 8.0).min(ACCEPT_SHIFT_RANGE.1),
            decline_shift_px: (DECLINE_SHIFT_RANGE.0 + n * 36.0).min(DECLINE_SHIFT_RANGE.1),
            decline_scale: (1.0 - n * 0.08).max(DECLINE_SCALE_RANGE.0),
            decline_rotation_deg: n * 6.0,
        }
    }

    pub fn accept_transform(&self) -> Transform2D {
        Transform2D::translate_x(self.accept_shift_px).with_scale(self.accept_scale)
    }

    pub fn decline_transform(&self) -> Transform2D {
        Transform2D::translate_x(self.decline_shift_px)
            .with_scale(self.decline_scale)
            .with_rotation_deg(self.decline_rotation_deg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/consent/feedback.rs"]
mod tests;

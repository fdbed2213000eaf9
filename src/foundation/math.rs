/// Clamp into `[min, max]`; NaN collapses to `min`.
pub(crate) fn clamp_f64(v: f64, min: f64, max: f64) -> f64 {
    if v.is_nan() {
        return min;
    }
    v.clamp(min, max)
}

pub(crate) fn clamp01(v: f64) -> f64 {
    clamp_f64(v, 0.0, 1.0)
}

/// Non-negative finite sample; anything else reads as zero.
pub(crate) fn sanitize_offset(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

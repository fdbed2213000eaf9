//! Deterministic decorative particle fields.
//!
//! Positions and timings are pure functions of the particle index, so the
//! same page always lays out the same hearts and sparkles.

pub const HEART_COLORS: [&str; 3] = ["#FF6B6B", "#FFB3C1", "#FFD66B"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleKind {
    Heart,
    Sparkle,
}

/// One particle. Positions are percentages of the layer box, times are in
/// seconds, sizes in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    pub kind: ParticleKind,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub size_px: f64,
    pub drift_px: f64,
    pub opacity: f64,
    pub color: Option<&'static str>,
}

pub const FLOATING_HEART_COUNT: usize = 34;
pub const SPARKLE_COUNT: usize = 26;
pub const DIALOG_HEART_COUNT: usize = 18;

pub fn floating_hearts() -> Vec<Particle> {
    (0..FLOATING_HEART_COUNT)
        .map(|i| {
            let f = i as f64;
            Particle {
                kind: ParticleKind::Heart,
                left_pct: ((i * 97) % 100) as f64,
                top_pct: ((i * 53) % 100) as f64 * 1.02,
                delay_s: (f * 0.45) % 6.0,
                duration_s: 6.0 + (f * 0.77) % 8.0,
                size_px: (8 + (i * 11) % 28) as f64,
                drift_px: -18.0 + ((i * 7) % 36) as f64,
                opacity: 0.06 + ((i * 13) % 14) as f64 / 100.0,
                color: Some(HEART_COLORS[i % 3]),
            }
        })
        .collect()
}

pub fn sparkles() -> Vec<Particle> {
    (0..SPARKLE_COUNT)
        .map(|i| {
            let f = i as f64;
            Particle {
                kind: ParticleKind::Sparkle,
                left_pct: ((i * 37) % 100) as f64,
                top_pct: ((i * 61) % 100) as f64,
                delay_s: (f * 0.33) % 5.0,
                duration_s: 3.6 + (f * 0.41) % 3.2,
                size_px: (10 + (i * 9) % 16) as f64,
                drift_px: 0.0,
                opacity: 0.08 + ((i * 17) % 10) as f64 / 100.0,
                color: None,
            }
        })
        .collect()
}

/// Hearts rising behind the consent dialog.
pub fn dialog_hearts() -> Vec<Particle> {
    (0..DIALOG_HEART_COUNT)
        .map(|i| {
            let f = i as f64;
            Particle {
                kind: ParticleKind::Heart,
                left_pct: ((i * 73) % 100) as f64,
                top_pct: 0.0,
                delay_s: (f * 0.29) % 2.2,
                duration_s: 4.0 + (f * 1.2) % 7.0,
                size_px: (6 + (i * 7) % 18) as f64,
                drift_px: 0.0,
                opacity: 0.6 + ((i * 5) % 4) as f64 / 10.0,
                color: Some(HEART_COLORS[i % 3]),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/particles.rs"]
mod tests;

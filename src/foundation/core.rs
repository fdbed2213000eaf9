use std::ops::{Add, Sub};

pub use kurbo::{Affine, Vec2};

/// A point or span on the virtual clock, in milliseconds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Millis {
    type Output = Millis;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Millis {
    type Output = Millis;

    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Element transform handed to the renderer.
///
/// Rotation is kept in degrees because that is what the page animates in; the
/// affine form converts at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    pub translate: Vec2,
    pub rotation_deg: f64,
    pub scale: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform2D {
    pub fn translate_x(px: f64) -> Self {
        Self {
            translate: Vec2::new(px, 0.0),
            ..Self::default()
        }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn with_rotation_deg(self, rotation_deg: f64) -> Self {
        Self {
            rotation_deg,
            ..self
        }
    }

    pub fn to_affine(self) -> Affine {
        // Same order a CSS `translate() scale() rotate()` list applies.
        Affine::translate(self.translate)
            * Affine::scale(self.scale)
            * Affine::rotate(self.rotation_deg.to_radians())
    }

    pub fn to_css(self) -> String {
        let mut out = String::new();
        if self.translate.y == 0.0 {
            out.push_str(&format!("translateX({}px)", self.translate.x));
        } else {
            out.push_str(&format!(
                "translate3d({}px, {}px, 0)",
                self.translate.x, self.translate.y
            ));
        }
        if self.scale != 1.0 {
            out.push_str(&format!(" scale({})", self.scale));
        }
        if self.rotation_deg != 0.0 {
            out.push_str(&format!(" rotate({}deg)", self.rotation_deg));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

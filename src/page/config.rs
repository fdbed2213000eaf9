use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context as _;

use crate::{
    carousel::controller::CarouselTiming,
    carousel::slide::{Slide, default_slides},
    consent::dialog::ConsentTiming,
    consent::keys::KeyBindings,
    foundation::error::{GreetError, GreetResult},
    scroll::parallax::ParallaxLayer,
    typewriter::reveal::TypewriterSource,
};

/// Everything the page needs to run, loadable from JSON.
///
/// Every field has a default, so `{}` is a valid config describing the
/// stock greeting page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub slides: Vec<Slide>,
    pub carousel: CarouselTiming,
    pub typewriter: TypewriterSource,
    pub consent: ConsentTiming,
    pub keys: KeyBindings,
    pub layers: LayerConfig,
    /// Section ids the navigation may scroll to, in page order.
    pub sections: Vec<String>,
    /// Show the consent dialog on mount.
    pub intro: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    pub hearts: ParallaxLayer,
    pub sparkles: ParallaxLayer,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            hearts: ParallaxLayer::HEARTS,
            sparkles: ParallaxLayer::SPARKLES,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            slides: default_slides(),
            carousel: CarouselTiming::default(),
            typewriter: TypewriterSource::default(),
            consent: ConsentTiming::default(),
            keys: KeyBindings::default(),
            layers: LayerConfig::default(),
            sections: ["hero", "gallery", "message", "memories", "final"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            intro: true,
        }
    }
}

impl PageConfig {
    pub fn from_json_str(s: &str) -> GreetResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> GreetResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read page config '{}'", path.display()))?;
        Self::from_json_str(&s)
            .map_err(|e| GreetError::config(format!("{}: {e}", path.display())))
    }

    pub fn validate(&self) -> GreetResult<()> {
        for (i, slide) in self.slides.iter().enumerate() {
            if slide.src.trim().is_empty() {
                return Err(GreetError::validation(format!(
                    "slide {i} src must be non-empty"
                )));
            }
        }

        if self.carousel.slide_interval.0 == 0 {
            return Err(GreetError::validation(
                "carousel slide_interval must be > 0",
            ));
        }
        if self.typewriter.speed.0 == 0 {
            return Err(GreetError::validation("typewriter speed must be > 0"));
        }

        for (name, layer) in [
            ("hearts", &self.layers.hearts),
            ("sparkles", &self.layers.sparkles),
        ] {
            for (field, value) in [
                ("factor", layer.factor),
                ("max_shift", layer.max_shift),
                ("fade_distance", layer.fade_distance),
            ] {
                if !value.is_finite() {
                    return Err(GreetError::validation(format!(
                        "layers.{name}.{field} must be finite"
                    )));
                }
            }
            if layer.max_shift < 0.0 {
                return Err(GreetError::validation(format!(
                    "layers.{name}.max_shift must be >= 0"
                )));
            }
            if layer.fade_distance <= 0.0 {
                return Err(GreetError::validation(format!(
                    "layers.{name}.fade_distance must be > 0"
                )));
            }
        }

        if self.keys.accept.eq_ignore_ascii_case(&self.keys.decline) {
            return Err(GreetError::validation(
                "keys.accept and keys.decline must differ",
            ));
        }

        let mut seen = BTreeSet::new();
        for id in &self.sections {
            if id.trim().is_empty() {
                return Err(GreetError::validation("section id must be non-empty"));
            }
            if !seen.insert(id.as_str()) {
                return Err(GreetError::validation(format!(
                    "duplicate section id '{id}'"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/config.rs"]
mod tests;

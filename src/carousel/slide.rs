/// One displayable image in the slideshow.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "SlideDef")]
pub struct Slide {
    pub src: String,
    pub alt: String,
}

impl Slide {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

// Config files may list slides as bare paths.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum SlideDef {
    Path(String),
    Full {
        src: String,
        #[serde(default)]
        alt: String,
    },
}

impl From<SlideDef> for Slide {
    fn from(def: SlideDef) -> Self {
        match def {
            SlideDef::Path(src) => Slide::new(src, ""),
            SlideDef::Full { src, alt } => Slide::new(src, alt),
        }
    }
}

/// A user-selected file, as handed over by the host's file picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageHandle {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageHandle {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Media type sniffed from the leading bytes.
    pub fn media_type(&self) -> &'static str {
        match image::guess_format(&self.bytes) {
            Ok(format) => format.to_mime_type(),
            Err(_) => "application/octet-stream",
        }
    }

    /// Turns the handle into a slide with an in-memory `blob:` reference.
    ///
    /// `seq` keeps references unique for the lifetime of the page.
    pub fn into_slide(self, seq: u64) -> Slide {
        let src = format!("blob:{}#{seq}", self.media_type());
        Slide::new(src, self.name)
    }
}

/// Stock gallery: placeholder photos served from the site root, no captions.
pub fn default_slides() -> Vec<Slide> {
    ["/1.png", "/2.png", "/3.png", "/4.png"]
        .into_iter()
        .map(|src| Slide::new(src, ""))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/slide.rs"]
mod tests;

use std::collections::BTreeMap;

/// Reveal flags per watched section, driven by the host's intersection
/// signal. A section that scrolls out of view hides again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    visible: BTreeMap<String, bool>,
}

impl RevealTracker {
    pub fn new<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            visible: ids.into_iter().map(|id| (id.to_owned(), false)).collect(),
        }
    }

    /// Records an intersection change; unknown ids are ignored.
    pub fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.visible.get_mut(id) {
            Some(v) => {
                *v = visible;
                true
            }
            None => false,
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    pub fn snapshot(&self) -> BTreeMap<String, bool> {
        self.visible.clone()
    }
}

/// Mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/sections.rs"]
mod tests;

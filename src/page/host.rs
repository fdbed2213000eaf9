/// What the page asks of the surrounding document.
pub trait ViewportHost {
    /// Disable (`true`) or restore (`false`) page scrolling.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Smooth-scroll the section with `id` into view. Returns false when the
    /// document has no such element.
    fn scroll_into_view(&mut self, id: &str) -> bool;
}

/// Host that records requests instead of touching a real document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingHost {
    /// Ids present in the document.
    pub known_sections: Vec<String>,
    pub scroll_locked: bool,
    pub lock_changes: u32,
    pub scrolled_to: Vec<String>,
}

impl RecordingHost {
    pub fn with_sections<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_sections: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl ViewportHost for RecordingHost {
    fn set_scroll_locked(&mut self, locked: bool) {
        if self.scroll_locked != locked {
            self.lock_changes += 1;
        }
        self.scroll_locked = locked;
    }

    fn scroll_into_view(&mut self, id: &str) -> bool {
        if !self.known_sections.iter().any(|s| s == id) {
            return false;
        }
        self.scrolled_to.push(id.to_owned());
        true
    }
}

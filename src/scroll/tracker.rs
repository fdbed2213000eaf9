use crate::foundation::math::sanitize_offset;

/// Frame-throttled view of the viewport scroll offset.
///
/// Scroll events may arrive many times per frame. Only the latest sample is
/// kept, and it is published on the next animation frame. The offset can go
/// down as well as up.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    current: f64,
    pending: Option<f64>,
    mounted: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking with `initial` as the first sample, published on the
    /// next frame like any other.
    pub fn mount(&mut self, initial: f64) {
        self.mounted = true;
        self.on_scroll_event(initial);
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.pending = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Drop-and-replace: a newer sample supersedes an unpublished one.
    pub fn on_scroll_event(&mut self, offset: f64) {
        if !self.mounted {
            return;
        }
        self.pending = Some(sanitize_offset(offset));
    }

    pub fn frame_requested(&self) -> bool {
        self.pending.is_some()
    }

    /// Publishes the pending sample. Returns true when the offset changed.
    pub fn on_animation_frame(&mut self) -> bool {
        let Some(sample) = self.pending.take() else {
            return false;
        };
        let changed = sample != self.current;
        self.current = sample;
        if changed {
            tracing::trace!(offset = sample, "scroll offset published");
        }
        changed
    }

    pub fn current_offset(&self) -> f64 {
        self.current
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;

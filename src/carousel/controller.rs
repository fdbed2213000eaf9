use crate::{
    carousel::slide::{ImageHandle, Slide},
    foundation::core::Millis,
    foundation::ease::Ease,
    timing::queue::{TimerId, TimerQueue},
};

/// Flip direction; alternates on every slide change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// New slide enters from the right, old one leaves to the left.
    #[default]
    Forward,
    /// New slide enters from the left, old one leaves to the right.
    Backward,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CarouselState {
    pub current: usize,
    pub previous: Option<usize>,
    pub direction: Direction,
    pub paused: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CarouselTiming {
    /// Autoplay period.
    pub slide_interval: Millis,
    /// Length of the flip animation.
    pub transition: Millis,
    /// Extra time the leaving slide is kept after the animation ends.
    pub clear_margin: Millis,
    pub ease: Ease,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            slide_interval: Millis(3000),
            transition: Millis(2000),
            clear_margin: Millis(120),
            ease: Ease::InOutCubic,
        }
    }
}

impl CarouselTiming {
    pub fn clear_window(&self) -> Millis {
        self.transition + self.clear_margin
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CarouselTimer {
    Autoplay,
    ClearPrevious,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideRole {
    Active,
    Leaving,
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipAnimation {
    InRight,
    InLeft,
    OutLeft,
    OutRight,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SlideView {
    pub src: String,
    pub alt: String,
    pub role: SlideRole,
    pub animation: Option<FlipAnimation>,
    pub tilt_deg: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CarouselView {
    pub state: CarouselState,
    /// Eased progress of the running flip, if any.
    pub transition_progress: Option<f64>,
    pub slides: Vec<SlideView>,
    /// One entry per slide; true for the active dot.
    pub dots: Vec<bool>,
}

/// Slideshow state machine: autoplay, manual selection, flip bookkeeping.
#[derive(Clone, Debug)]
pub struct CarouselController {
    slides: Vec<Slide>,
    state: CarouselState,
    timing: CarouselTiming,
    timers: TimerQueue<CarouselTimer>,
    autoplay: Option<TimerId>,
    pending_clear: Option<TimerId>,
    transition_started: Option<Millis>,
    upload_seq: u64,
}

impl CarouselController {
    /// Creates the controller at `now` and arms autoplay.
    pub fn new(slides: Vec<Slide>, timing: CarouselTiming, now: Millis) -> Self {
        let mut out = Self {
            slides,
            state: CarouselState::default(),
            timing,
            timers: TimerQueue::new(now),
            autoplay: None,
            pending_clear: None,
            transition_started: None,
            upload_seq: 0,
        };
        out.rearm_autoplay();
        out
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn autoplay_armed(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Shows `target`, starting a flip from the current slide.
    ///
    /// Selecting the current slide, or an index past the end, changes nothing.
    pub fn go_to(&mut self, target: usize) {
        if target >= self.slides.len() {
            tracing::debug!(target, len = self.slides.len(), "go_to out of range");
            return;
        }
        if target == self.state.current {
            return;
        }

        self.state.previous = Some(self.state.current);
        self.state.direction = self.state.direction.flipped();
        self.state.current = target;
        tracing::debug!(
            from = self.state.previous,
            to = target,
            direction = ?self.state.direction,
            "carousel transition"
        );

        // At most one clear is ever pending.
        if let Some(id) = self.pending_clear.take() {
            self.timers.cancel(id);
        }
        self.pending_clear = Some(
            self.timers
                .once(self.timing.clear_window(), CarouselTimer::ClearPrevious),
        );
        self.transition_started = Some(self.timers.now());

        self.rearm_autoplay();
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.state.paused == paused {
            return;
        }
        self.state.paused = paused;
        self.rearm_autoplay();
    }

    /// Inserts `slides` ahead of the existing ones and shows the first of them.
    pub fn prepend_slides(&mut self, slides: Vec<Slide>) {
        if slides.is_empty() {
            return;
        }
        let n = slides.len();
        let was_empty = self.slides.is_empty();
        self.slides.splice(0..0, slides);
        if was_empty {
            tracing::debug!(added = n, "slides added to empty carousel");
            self.rearm_autoplay();
            return;
        }

        // Indices keep pointing at the same images after the shift.
        self.state.current += n;
        self.state.previous = self.state.previous.map(|p| p + n);
        tracing::debug!(added = n, len = self.slides.len(), "slides prepended");

        self.go_to(0);
    }

    pub fn upload_images(&mut self, handles: Vec<ImageHandle>) {
        let slides: Vec<Slide> = handles
            .into_iter()
            .map(|h| {
                self.upload_seq += 1;
                h.into_slide(self.upload_seq)
            })
            .collect();
        self.prepend_slides(slides);
    }

    /// Runs every timer due up to `until`, in firing order.
    pub fn advance_to(&mut self, until: Millis) {
        while let Some(fired) = self.timers.pop_due(until) {
            match fired.event {
                CarouselTimer::Autoplay => {
                    // Read the index now, not when the timer was armed.
                    let len = self.slides.len();
                    if len > 1 {
                        self.go_to((self.state.current + 1) % len);
                    }
                }
                CarouselTimer::ClearPrevious => {
                    if self.pending_clear == Some(fired.id) {
                        self.pending_clear = None;
                        self.state.previous = None;
                        self.transition_started = None;
                    }
                }
            }
        }
    }

    /// Cancels every timer. The controller keeps its state but stops moving.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.autoplay = None;
        self.pending_clear = None;
    }

    pub fn view(&self) -> CarouselView {
        let (enter, leave) = match self.state.direction {
            Direction::Forward => (FlipAnimation::InRight, FlipAnimation::OutLeft),
            Direction::Backward => (FlipAnimation::InLeft, FlipAnimation::OutRight),
        };

        let slides = self
            .slides
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let (role, animation) = if i == self.state.current {
                    (SlideRole::Active, Some(enter))
                } else if Some(i) == self.state.previous {
                    (SlideRole::Leaving, Some(leave))
                } else {
                    (SlideRole::Idle, None)
                };
                SlideView {
                    src: s.src.clone(),
                    alt: s.alt.clone(),
                    role,
                    animation,
                    tilt_deg: -8.0 + ((i % 5) as f64) * 6.0,
                }
            })
            .collect();

        let transition_progress = self.transition_started.map(|start| {
            let elapsed = self.timers.now().saturating_sub(start);
            let t = if self.timing.transition.0 == 0 {
                1.0
            } else {
                (elapsed.0 as f64) / (self.timing.transition.0 as f64)
            };
            self.timing.ease.apply(t)
        });

        CarouselView {
            state: self.state,
            transition_progress,
            slides,
            dots: (0..self.slides.len())
                .map(|i| i == self.state.current)
                .collect(),
        }
    }

    // Autoplay is rebuilt whenever pause state, slide count or index changes.
    fn rearm_autoplay(&mut self) {
        if let Some(id) = self.autoplay.take() {
            self.timers.cancel(id);
        }
        if self.state.paused || self.slides.len() <= 1 {
            return;
        }
        self.autoplay = Some(
            self.timers
                .every(self.timing.slide_interval, CarouselTimer::Autoplay),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/controller.rs"]
mod tests;

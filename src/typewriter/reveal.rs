use crate::{
    foundation::core::Millis,
    timing::queue::{TimerId, TimerQueue},
};

pub const CURSOR: char = '|';

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TypewriterSource {
    pub text: String,
    /// Time between revealed characters.
    pub speed: Millis,
    /// Time before the first character starts typing.
    pub start_delay: Millis,
}

impl Default for TypewriterSource {
    fn default() -> Self {
        Self {
            text: "Mom, you are my strength, my home, and my forever Valentine. Thank you for loving me unconditionally.".to_owned(),
            speed: Millis(22),
            start_delay: Millis(200),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TypeTimer {
    Start,
    Tick,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TypewriterView {
    pub revealed: String,
    pub cursor: char,
    pub done: bool,
}

/// Reveals a fixed text one character at a time, never retracting.
#[derive(Clone, Debug)]
pub struct Typewriter {
    source: TypewriterSource,
    chars: Vec<char>,
    revealed: usize,
    timers: TimerQueue<TypeTimer>,
    tick: Option<TimerId>,
}

impl Typewriter {
    /// Creates the typewriter at `now` and starts the initial delay.
    pub fn new(source: TypewriterSource, now: Millis) -> Self {
        let mut out = Self {
            chars: source.text.chars().collect(),
            source,
            revealed: 0,
            timers: TimerQueue::new(now),
            tick: None,
        };
        out.restart();
        out
    }

    pub fn source(&self) -> &TypewriterSource {
        &self.source
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Swaps the source. Anything other than an identical source restarts
    /// from an empty prefix.
    pub fn set_source(&mut self, source: TypewriterSource) {
        if source == self.source {
            return;
        }
        self.chars = source.text.chars().collect();
        self.source = source;
        self.restart();
    }

    pub fn advance_to(&mut self, until: Millis) {
        while let Some(fired) = self.timers.pop_due(until) {
            match fired.event {
                TypeTimer::Start => {
                    if self.is_done() {
                        continue;
                    }
                    self.tick = Some(self.timers.every(self.source.speed, TypeTimer::Tick));
                }
                TypeTimer::Tick => {
                    if self.revealed < self.chars.len() {
                        self.revealed += 1;
                    }
                    if self.is_done()
                        && let Some(id) = self.tick.take()
                    {
                        self.timers.cancel(id);
                    }
                }
            }
        }
    }

    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.tick = None;
    }

    pub fn text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    pub fn view(&self) -> TypewriterView {
        TypewriterView {
            revealed: self.text(),
            cursor: CURSOR,
            done: self.is_done(),
        }
    }

    /// Prefix followed by the cursor, as displayed.
    pub fn display(&self) -> String {
        let mut out = self.text();
        out.push(CURSOR);
        out
    }

    fn restart(&mut self) {
        self.timers.cancel_all();
        self.tick = None;
        self.revealed = 0;
        self.timers.once(self.source.start_delay, TypeTimer::Start);
        tracing::trace!(len = self.chars.len(), "typewriter restarted");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/typewriter/reveal.rs"]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;

use crate::consent::dialog::AcceptHook;
use crate::foundation::error::{GreetError, GreetResult};

/// Background music volume used whenever playback starts.
pub const MUSIC_VOLUME: f64 = 0.35;

/// Host audio element. `play` may be refused, e.g. by an autoplay policy.
pub trait AudioSink {
    fn play(&mut self) -> GreetResult<()>;
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f64);
}

/// Owns the audio handle and the "music on" flag.
///
/// The flag always reflects what is actually audible: a refused `play`
/// leaves it off.
#[derive(Debug)]
pub struct MusicPlayer<A> {
    sink: Option<A>,
    music_on: bool,
}

impl<A: AudioSink> MusicPlayer<A> {
    pub fn new(sink: A) -> Self {
        Self {
            sink: Some(sink),
            music_on: false,
        }
    }

    /// A player whose audio element has not been attached yet.
    pub fn detached() -> Self {
        Self {
            sink: None,
            music_on: false,
        }
    }

    pub fn is_on(&self) -> bool {
        self.music_on
    }

    pub fn sink(&self) -> Option<&A> {
        self.sink.as_ref()
    }

    pub fn start(&mut self) -> GreetResult<()> {
        let Some(sink) = self.sink.as_mut() else {
            self.music_on = true;
            return Ok(());
        };
        sink.set_volume(MUSIC_VOLUME);
        match sink.play() {
            Ok(()) => {
                self.music_on = true;
                tracing::debug!("music started");
                Ok(())
            }
            Err(err) => {
                self.music_on = false;
                tracing::warn!(error = %err, "music playback refused");
                Err(err)
            }
        }
    }

    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.pause();
        }
        self.music_on = false;
    }

    /// Flips the flag; returns the resulting state. A refused start is not an
    /// error here, it just reads back as off.
    pub fn toggle(&mut self) -> bool {
        if self.music_on {
            self.stop();
        } else {
            let _ = self.start();
        }
        self.music_on
    }

    /// The host reports that an earlier `play` was rejected asynchronously.
    pub fn playback_failed(&mut self) {
        if self.music_on {
            tracing::warn!("music playback rejected after start");
        }
        self.music_on = false;
    }
}

impl<A: AudioSink> AcceptHook for MusicPlayer<A> {
    fn on_accept(&mut self) -> GreetResult<()> {
        self.start()
    }
}

impl<H: AcceptHook> AcceptHook for Rc<RefCell<H>> {
    fn on_accept(&mut self) -> GreetResult<()> {
        self.borrow_mut().on_accept()
    }
}

/// In-memory sink that records calls and can be told to refuse playback.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedSink {
    pub refuse_play: bool,
    pub plays: u32,
    pub pauses: u32,
    pub volume: Option<f64>,
    pub playing: bool,
}

impl ScriptedSink {
    pub fn refusing() -> Self {
        Self {
            refuse_play: true,
            ..Self::default()
        }
    }
}

impl AudioSink for ScriptedSink {
    fn play(&mut self) -> GreetResult<()> {
        self.plays += 1;
        if self.refuse_play {
            self.playing = false;
            return Err(GreetError::playback("play() was refused by the host"));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.pauses += 1;
        self.playing = false;
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = Some(volume);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/player.rs"]
mod tests;

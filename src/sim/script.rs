use std::path::Path;

use anyhow::Context as _;

use crate::{
    audio::player::{MusicPlayer, ScriptedSink},
    carousel::slide::ImageHandle,
    foundation::core::Millis,
    foundation::error::{GreetError, GreetResult},
    page::config::PageConfig,
    page::host::RecordingHost,
    page::runtime::{GreetingPage, PageSnapshot},
};

/// Timed host input for a headless page run.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptEvent {
    pub at: Millis,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Scroll { offset: f64 },
    Frame,
    Key { key: String },
    GoTo { index: usize },
    Hover { inside: bool },
    Decline,
    Accept,
    ToggleMusic,
    AudioRejected,
    Upload { files: Vec<UploadFile> },
    Navigate { section: String },
    Menu,
    Visible { section: String, visible: bool },
    Intro { visible: bool },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UploadFile {
    pub name: String,
    #[serde(default)]
    pub bytes: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOpts {
    /// Last instant simulated (inclusive).
    pub until: Millis,
    /// Snapshot period; a snapshot is also taken at time zero.
    pub sample_every: Millis,
    /// Make the audio sink refuse `play`.
    pub refuse_audio: bool,
}

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            until: Millis(10_000),
            sample_every: Millis(1_000),
            refuse_audio: false,
        }
    }
}

impl Script {
    pub fn from_json_str(s: &str) -> GreetResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> GreetResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read script '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

/// Runs `script` against a freshly mounted page and returns the sampled
/// snapshots. Events at the same instant as a sample are applied first.
#[tracing::instrument(skip_all, fields(events = script.events.len(), until = opts.until.0))]
pub fn run_script(
    config: PageConfig,
    script: &Script,
    opts: RunOpts,
) -> GreetResult<Vec<PageSnapshot>> {
    if opts.sample_every.0 == 0 {
        return Err(GreetError::validation("sample_every must be > 0"));
    }

    let mut events = script.events.clone();
    events.sort_by_key(|e| e.at);

    let sink = ScriptedSink {
        refuse_play: opts.refuse_audio,
        ..ScriptedSink::default()
    };
    let host = RecordingHost::with_sections(config.sections.clone());
    let mut page = GreetingPage::mount(config, MusicPlayer::new(sink), host, Millis::ZERO)?;

    let mut out = Vec::new();
    let mut pending = events.into_iter().peekable();
    let mut next_sample = Some(Millis::ZERO);
    while let Some(at) = next_sample.filter(|at| *at <= opts.until) {
        while let Some(ev) = pending.next_if(|e| e.at <= at) {
            page.advance_to(ev.at);
            apply(&mut page, ev.action);
        }
        page.advance_to(at);
        page.animation_frame();
        out.push(page.snapshot());
        next_sample = at.0.checked_add(opts.sample_every.0).map(Millis);
    }

    let skipped = pending.count();
    if skipped > 0 {
        tracing::debug!(skipped, "events after the end of the run were ignored");
    }
    page.unmount();
    Ok(out)
}

fn apply(page: &mut GreetingPage<ScriptedSink, RecordingHost>, action: Action) {
    tracing::trace!(?action, at = %page.now(), "script action");
    match action {
        Action::Scroll { offset } => page.on_scroll(offset),
        Action::Frame => {
            page.animation_frame();
        }
        Action::Key { key } => {
            page.press_key(&key);
        }
        Action::GoTo { index } => page.go_to(index),
        Action::Hover { inside } => page.set_paused(inside),
        Action::Decline => {
            page.decline();
        }
        Action::Accept => {
            page.accept();
        }
        Action::ToggleMusic => {
            page.toggle_music();
        }
        Action::AudioRejected => page.music_rejected(),
        Action::Upload { files } => page.upload_images(
            files
                .into_iter()
                .map(|f| ImageHandle::new(f.name, f.bytes))
                .collect(),
        ),
        Action::Navigate { section } => {
            page.navigate(&section);
        }
        Action::Menu => {
            page.toggle_menu();
        }
        Action::Visible { section, visible } => page.set_section_visible(&section, visible),
        Action::Intro { visible } => page.set_intro_visible(visible),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sim/script.rs"]
mod tests;

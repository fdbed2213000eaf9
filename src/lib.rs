//! greetfx is the presentation-state engine behind an animated greeting page.
//!
//! The page itself (markup, styles, icons) lives elsewhere. This crate owns the
//! small state machines that decide what the page shows on each frame:
//!
//! - **Consent gate** ([`ConsentDialog`]): accept/decline intro dialog with
//!   escalating button feedback; accepting starts the music and closes it.
//! - **Carousel** ([`CarouselController`]): autoplaying photo flip-book with
//!   manual selection, hover pause and image uploads.
//! - **Typewriter** ([`Typewriter`]): reveals a message one character at a time.
//! - **Scroll** ([`ScrollTracker`], [`ParallaxLayer`]): frame-throttled scroll
//!   offset and the clamped parallax values derived from it.
//!
//! [`GreetingPage`] wires them together behind a small command surface.
//!
//! # Time
//!
//! Nothing here reads a wall clock. Every controller schedules work on its own
//! [`TimerQueue`] and moves only when the host calls `advance_to`. The same
//! input sequence therefore always produces the same snapshots, which is what
//! the [`run_script`] harness and the `greetfx simulate` command rely on.
//!
//! # Failure model
//!
//! Nothing in a running page fails hard. Refused audio playback turns the
//! music flag off, unknown navigation targets and empty uploads are ignored.
//! [`GreetError`] is only returned when loading or validating configuration
//! and scripts.
#![forbid(unsafe_code)]

mod audio;
mod carousel;
mod consent;
mod effects;
mod foundation;
mod page;
mod scroll;
mod sim;
mod timing;
mod typewriter;

pub use audio::player::{AudioSink, MUSIC_VOLUME, MusicPlayer, ScriptedSink};
pub use carousel::controller::{
    CarouselController, CarouselState, CarouselTiming, CarouselView, Direction, FlipAnimation,
    SlideRole, SlideView,
};
pub use carousel::slide::{ImageHandle, Slide, default_slides};
pub use consent::dialog::{
    AcceptHook, ConsentDialog, ConsentPhase, ConsentState, ConsentTiming, DialogEvent, DialogView,
};
pub use consent::feedback::{
    ACCEPT_SCALE_RANGE, ACCEPT_SHIFT_RANGE, ConsentFeedback, DECLINE_SCALE_RANGE,
    DECLINE_SHIFT_RANGE,
};
pub use consent::keys::{KeyAction, KeyBindings, KeyListenerGuard, KeyRegistry};
pub use effects::particles::{
    DIALOG_HEART_COUNT, FLOATING_HEART_COUNT, HEART_COLORS, Particle, ParticleKind, SPARKLE_COUNT,
    dialog_hearts, floating_hearts, sparkles,
};
pub use foundation::core::{Affine, Millis, Transform2D, Vec2};
pub use foundation::ease::Ease;
pub use foundation::error::{GreetError, GreetResult};
pub use page::config::{LayerConfig, PageConfig};
pub use page::host::{RecordingHost, ViewportHost};
pub use page::runtime::{GreetingPage, PageSnapshot};
pub use page::sections::{NavMenu, RevealTracker};
pub use scroll::parallax::{LayerParams, ParallaxLayer};
pub use scroll::tracker::ScrollTracker;
pub use sim::script::{Action, RunOpts, Script, ScriptEvent, UploadFile, run_script};
pub use timing::queue::{Fired, TimerId, TimerQueue};
pub use typewriter::reveal::{CURSOR, Typewriter, TypewriterSource, TypewriterView};


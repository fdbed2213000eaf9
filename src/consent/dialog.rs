use crate::{
    consent::feedback::ConsentFeedback,
    consent::keys::{KeyBindings, KeyListenerGuard, KeyRegistry},
    foundation::core::Millis,
    foundation::error::GreetResult,
    timing::queue::{TimerId, TimerQueue},
};

/// Side effect run when the visitor accepts (starting the music).
///
/// Errors are logged by the dialog and otherwise ignored; accepting always
/// closes the dialog.
pub trait AcceptHook {
    fn on_accept(&mut self) -> GreetResult<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentPhase {
    Open,
    Closing,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ConsentState {
    pub decline_count: u32,
    pub closing: bool,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogEvent {
    /// The closing animation finished; the host should hide the dialog.
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConsentTiming {
    /// How long the decline button shrugs after each press.
    pub shrug: Millis,
    /// Closing animation length; `Closed` is emitted when it ends.
    pub close_delay: Millis,
    /// Delay before the entrance transition class is applied.
    pub enter_delay: Millis,
    /// Delay before the accept button takes focus.
    pub focus_delay: Millis,
}

impl Default for ConsentTiming {
    fn default() -> Self {
        Self {
            shrug: Millis(420),
            close_delay: Millis(520),
            enter_delay: Millis(20),
            focus_delay: Millis(80),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DialogTimer {
    ClearShrug,
    Close,
    Enter,
    Focus,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DialogView {
    pub phase: ConsentPhase,
    pub visible: bool,
    pub entered: bool,
    pub shrug: bool,
    pub accept_focused: bool,
    pub decline_count: u32,
    pub feedback: ConsentFeedback,
    pub accept_css: String,
    pub decline_css: String,
}

/// The intro "do you want to come in" gate.
///
/// A hidden dialog becomes a fresh `Open` instance with zero declines each
/// time it is shown. `accept` runs the hook exactly once per instance.
pub struct ConsentDialog<H> {
    hook: H,
    timing: ConsentTiming,
    bindings: KeyBindings,
    keys: KeyRegistry,
    phase: ConsentPhase,
    visible: bool,
    decline_count: u32,
    shrug: bool,
    entered: bool,
    accept_focused: bool,
    timers: TimerQueue<DialogTimer>,
    shrug_timer: Option<TimerId>,
    listener: Option<KeyListenerGuard>,
}

impl<H: AcceptHook> ConsentDialog<H> {
    /// Creates a hidden dialog; call [`ConsentDialog::set_visible`] to open it.
    pub fn new(
        hook: H,
        timing: ConsentTiming,
        bindings: KeyBindings,
        keys: KeyRegistry,
        now: Millis,
    ) -> Self {
        Self {
            hook,
            timing,
            bindings,
            keys,
            phase: ConsentPhase::Closed,
            visible: false,
            decline_count: 0,
            shrug: false,
            entered: false,
            accept_focused: false,
            timers: TimerQueue::new(now),
            shrug_timer: None,
            listener: None,
        }
    }

    pub fn phase(&self) -> ConsentPhase {
        self.phase
    }

    pub fn state(&self) -> ConsentState {
        ConsentState {
            decline_count: self.decline_count,
            closing: self.phase == ConsentPhase::Closing,
            visible: self.visible,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_open(&self) -> bool {
        self.phase == ConsentPhase::Open
    }

    pub fn shrugging(&self) -> bool {
        self.shrug
    }

    pub fn keys_registered(&self) -> bool {
        self.listener.is_some()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        if visible {
            self.open();
        } else {
            tracing::debug!("consent dialog hidden");
            self.shut_down();
        }
    }

    pub fn decline(&mut self) -> bool {
        if self.phase != ConsentPhase::Open {
            return false;
        }
        self.decline_count = self.decline_count.saturating_add(1);
        self.shrug = true;
        if let Some(id) = self.shrug_timer.take() {
            self.timers.cancel(id);
        }
        self.shrug_timer = Some(self.timers.once(self.timing.shrug, DialogTimer::ClearShrug));
        tracing::debug!(decline_count = self.decline_count, "consent declined");
        true
    }

    pub fn accept(&mut self) -> bool {
        if self.phase != ConsentPhase::Open {
            return false;
        }
        if let Err(err) = self.hook.on_accept() {
            tracing::warn!(error = %err, "accept hook failed; closing anyway");
        }
        self.phase = ConsentPhase::Closing;
        self.listener = None;
        self.timers.once(self.timing.close_delay, DialogTimer::Close);
        tracing::debug!(decline_count = self.decline_count, "consent accepted");
        true
    }

    /// Runs due timers and returns the notifications they produced.
    pub fn advance_to(&mut self, until: Millis) -> Vec<DialogEvent> {
        let mut events = Vec::new();
        while let Some(fired) = self.timers.pop_due(until) {
            match fired.event {
                DialogTimer::ClearShrug => {
                    if self.shrug_timer == Some(fired.id) {
                        self.shrug_timer = None;
                        self.shrug = false;
                    }
                }
                DialogTimer::Enter => self.entered = true,
                DialogTimer::Focus => self.accept_focused = true,
                DialogTimer::Close => {
                    tracing::debug!("consent dialog closed");
                    self.shut_down();
                    events.push(DialogEvent::Closed);
                }
            }
        }
        events
    }

    /// Drops every timer and key listener (page unmount).
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.shrug_timer = None;
        self.listener = None;
    }

    pub fn view(&self) -> DialogView {
        let feedback = ConsentFeedback::for_declines(self.decline_count);
        DialogView {
            phase: self.phase,
            visible: self.visible,
            entered: self.entered,
            shrug: self.shrug,
            accept_focused: self.accept_focused,
            decline_count: self.decline_count,
            feedback,
            accept_css: feedback.accept_transform().to_css(),
            decline_css: feedback.decline_transform().to_css(),
        }
    }

    fn open(&mut self) {
        self.teardown();
        self.phase = ConsentPhase::Open;
        self.visible = true;
        self.decline_count = 0;
        self.shrug = false;
        self.entered = false;
        self.accept_focused = false;
        self.listener = Some(self.keys.register(self.bindings));
        self.timers.once(self.timing.enter_delay, DialogTimer::Enter);
        self.timers.once(self.timing.focus_delay, DialogTimer::Focus);
        tracing::debug!("consent dialog opened");
    }

    fn shut_down(&mut self) {
        self.teardown();
        self.phase = ConsentPhase::Closed;
        self.visible = false;
        self.entered = false;
        self.accept_focused = false;
        self.shrug = false;
    }
}

impl<H> std::fmt::Debug for ConsentDialog<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsentDialog")
            .field("phase", &self.phase)
            .field("visible", &self.visible)
            .field("decline_count", &self.decline_count)
            .field("shrug", &self.shrug)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/consent/dialog.rs"]
mod tests;

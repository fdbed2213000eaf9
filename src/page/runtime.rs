use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::{
    audio::player::{AudioSink, MusicPlayer},
    carousel::controller::{CarouselController, CarouselView},
    carousel::slide::ImageHandle,
    consent::dialog::{ConsentDialog, DialogEvent, DialogView},
    consent::keys::{KeyAction, KeyRegistry},
    foundation::core::Millis,
    foundation::error::GreetResult,
    page::config::PageConfig,
    page::host::ViewportHost,
    page::sections::{NavMenu, RevealTracker},
    scroll::parallax::LayerParams,
    scroll::tracker::ScrollTracker,
    typewriter::reveal::{Typewriter, TypewriterView},
};

type SharedMusic<A> = Rc<RefCell<MusicPlayer<A>>>;

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageSnapshot {
    pub at: Millis,
    pub scroll_offset: f64,
    pub scroll_locked: bool,
    pub hearts: LayerParams,
    pub sparkles: LayerParams,
    pub carousel: CarouselView,
    pub dialog: DialogView,
    pub typewriter: TypewriterView,
    pub music_on: bool,
    pub menu_open: bool,
    pub revealed: BTreeMap<String, bool>,
}

/// The greeting page: owns every controller and routes host input to them.
///
/// All controllers share one virtual clock driven by [`GreetingPage::advance_to`].
/// Commands take effect at the time of the last advance.
pub struct GreetingPage<A: AudioSink, H: ViewportHost> {
    config: PageConfig,
    host: H,
    keys: KeyRegistry,
    music: SharedMusic<A>,
    dialog: ConsentDialog<SharedMusic<A>>,
    scroll: ScrollTracker,
    carousel: CarouselController,
    typewriter: Typewriter,
    reveal: RevealTracker,
    menu: NavMenu,
    scroll_locked: bool,
    now: Millis,
    mounted: bool,
}

impl<A: AudioSink, H: ViewportHost> GreetingPage<A, H> {
    /// Validates `config`, starts every controller at `now` and, if the
    /// config asks for it, shows the consent dialog.
    #[tracing::instrument(skip(config, music, host), fields(slides = config.slides.len()))]
    pub fn mount(
        config: PageConfig,
        music: MusicPlayer<A>,
        host: H,
        now: Millis,
    ) -> GreetResult<Self> {
        config.validate()?;

        let keys = KeyRegistry::new();
        let music = Rc::new(RefCell::new(music));
        let dialog = ConsentDialog::new(
            Rc::clone(&music),
            config.consent,
            config.keys,
            keys.clone(),
            now,
        );
        let carousel = CarouselController::new(config.slides.clone(), config.carousel, now);
        let typewriter = Typewriter::new(config.typewriter.clone(), now);
        let reveal = RevealTracker::new(config.sections.iter().map(String::as_str));

        let mut scroll = ScrollTracker::new();
        scroll.mount(0.0);

        let mut page = Self {
            config,
            host,
            keys,
            music,
            dialog,
            scroll,
            carousel,
            typewriter,
            reveal,
            menu: NavMenu::default(),
            scroll_locked: false,
            now,
            mounted: true,
        };
        if page.config.intro {
            page.dialog.set_visible(true);
        }
        page.sync_scroll_lock();
        tracing::info!(intro = page.config.intro, "page mounted");
        Ok(page)
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn keys(&self) -> &KeyRegistry {
        &self.keys
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn dialog(&self) -> &ConsentDialog<SharedMusic<A>> {
        &self.dialog
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    pub fn scroll(&self) -> &ScrollTracker {
        &self.scroll
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn music_on(&self) -> bool {
        self.music.borrow().is_on()
    }

    /// Runs the audio sink through `f` (e.g. to inspect a test sink).
    pub fn with_audio<R>(&self, f: impl FnOnce(Option<&A>) -> R) -> R {
        f(self.music.borrow().sink())
    }

    /// Moves the clock forward, firing due timers in every controller.
    pub fn advance_to(&mut self, until: Millis) {
        if !self.mounted {
            return;
        }
        let until = until.max(self.now);
        self.carousel.advance_to(until);
        self.typewriter.advance_to(until);
        for event in self.dialog.advance_to(until) {
            match event {
                DialogEvent::Closed => tracing::debug!(at = %until, "intro finished"),
            }
        }
        self.sync_scroll_lock();
        self.now = until;
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scroll.on_scroll_event(offset);
    }

    /// Publishes the latest scroll sample. Returns true if it changed.
    pub fn animation_frame(&mut self) -> bool {
        self.scroll.on_animation_frame()
    }

    /// Routes a key press through the registered listeners.
    pub fn press_key(&mut self, key: &str) -> Vec<KeyAction> {
        let actions = self.keys.dispatch(key);
        for action in &actions {
            match action {
                KeyAction::Accept => {
                    self.dialog.accept();
                }
                KeyAction::Decline => {
                    self.dialog.decline();
                }
            }
        }
        self.sync_scroll_lock();
        actions
    }

    pub fn set_section_visible(&mut self, id: &str, visible: bool) {
        self.reveal.set_visible(id, visible);
    }

    pub fn go_to(&mut self, index: usize) {
        self.carousel.go_to(index);
    }

    /// Pointer entered (`true`) or left (`false`) the gallery.
    pub fn set_paused(&mut self, paused: bool) {
        self.carousel.set_paused(paused);
    }

    pub fn decline(&mut self) -> bool {
        self.dialog.decline()
    }

    pub fn accept(&mut self) -> bool {
        let accepted = self.dialog.accept();
        self.sync_scroll_lock();
        accepted
    }

    /// Shows or hides the intro dialog. Showing it again starts a fresh
    /// instance with no declines.
    pub fn set_intro_visible(&mut self, visible: bool) {
        self.dialog.set_visible(visible);
        self.sync_scroll_lock();
    }

    pub fn toggle_music(&mut self) -> bool {
        self.music.borrow_mut().toggle()
    }

    /// The host reports that playback was rejected after it started.
    pub fn music_rejected(&mut self) {
        self.music.borrow_mut().playback_failed();
    }

    #[tracing::instrument(skip(self, handles), fields(count = handles.len()))]
    pub fn upload_images(&mut self, handles: Vec<ImageHandle>) {
        self.carousel.upload_images(handles);
    }

    /// Scrolls to a section and closes the mobile menu. Unknown or missing
    /// sections are ignored.
    pub fn navigate(&mut self, id: &str) -> bool {
        self.menu.close();
        if !self.config.sections.iter().any(|s| s == id) {
            tracing::debug!(id, "navigation to unknown section ignored");
            return false;
        }
        self.host.scroll_into_view(id)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let offset = self.scroll.current_offset();
        PageSnapshot {
            at: self.now,
            scroll_offset: offset,
            scroll_locked: self.scroll_locked,
            hearts: self.config.layers.hearts.params(offset),
            sparkles: self.config.layers.sparkles.params(offset),
            carousel: self.carousel.view(),
            dialog: self.dialog.view(),
            typewriter: self.typewriter.view(),
            music_on: self.music_on(),
            menu_open: self.menu.open,
            revealed: self.reveal.snapshot(),
        }
    }

    /// Cancels every timer, drops key listeners and gives scrolling back to
    /// the host. Safe to call more than once.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.carousel.teardown();
        self.typewriter.teardown();
        self.dialog.teardown();
        self.scroll.unmount();
        if self.scroll_locked {
            self.scroll_locked = false;
            self.host.set_scroll_locked(false);
        }
        tracing::info!("page unmounted");
    }

    // Scrolling is locked exactly while the dialog is visible, however it
    // got there.
    fn sync_scroll_lock(&mut self) {
        let want = self.dialog.is_visible();
        if want != self.scroll_locked {
            self.scroll_locked = want;
            self.host.set_scroll_locked(want);
        }
    }
}

impl<A: AudioSink, H: ViewportHost> Drop for GreetingPage<A, H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/runtime.rs"]
mod tests;

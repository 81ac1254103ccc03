//! Theme preference state machine.
//!
//! [`ThemeController`] owns the single active [`Mode`] and keeps persistent
//! storage, the in-memory state, and every dependent UI surface in
//! agreement. It is generic over its two seams - [`PreferenceStore`] and
//! [`ThemeSurface`] - so the whole state machine runs under host-side unit
//! tests with fakes, while the wasm build plugs in LocalStorage and the
//! real document.
//!
//! Precedence rules:
//! 1. A persisted preference wins over the live system signal on load.
//! 2. Without one, the system "prefers dark" signal decides; absent that,
//!    light.
//! 3. Once a choice is explicit (stored at load, or toggled this session),
//!    later system-preference changes are ignored.

use crate::theme::{Mode, Source};

/// Errors from the persistent preference store.
///
/// All of these are recoverable: the controller degrades to an
/// in-memory-only mode and logs a warning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Storage does not exist in this environment (sandboxed frame,
    /// storage disabled, no window object).
    #[error("persistent storage is not available")]
    Unavailable,

    /// Storage exists but the read or write was rejected.
    #[error("storage access failed: {0}")]
    Denied(String),
}

/// Persistence seam for the resolved mode.
///
/// Absence of a stored value (`Ok(None)`) means "no explicit preference";
/// an invalid stored value is reported the same way, not as an error.
pub trait PreferenceStore {
    /// Read the persisted mode, if any.
    fn load(&self) -> Result<Option<Mode>, StoreError>;

    /// Persist the given mode, overwriting any previous value.
    fn save(&mut self, mode: Mode) -> Result<(), StoreError>;
}

/// Everything in the UI that must agree with the active mode.
///
/// Implementations apply each piece unconditionally; the controller calls
/// all of them together so the surfaces can never drift apart.
pub trait ThemeSurface {
    /// Reflect the mode on the toggle control (pressed means light mode).
    fn set_toggle_pressed(&mut self, pressed: bool);

    /// Add or remove the mode's style flag on the document root.
    fn set_root_flag(&mut self, mode: Mode);

    /// Update the browser-chrome color hint.
    fn set_chrome_color(&mut self, color: &str);

    /// Announce a user-visible transition to assistive technology.
    fn announce(&mut self, message: &str);
}

/// Owns and synchronizes the theme preference across storage, memory, and
/// the UI surfaces.
pub struct ThemeController<S, U> {
    store: S,
    surface: U,
    mode: Mode,
    source: Source,
}

impl<S: PreferenceStore, U: ThemeSurface> ThemeController<S, U> {
    /// Resolve the initial mode and apply it silently.
    ///
    /// `system_prefers_dark` is the one-shot reading of the system
    /// color-scheme signal at startup.
    pub fn new(store: S, surface: U, system_prefers_dark: bool) -> Self {
        let (mode, source) = Self::resolve_initial_mode(&store, system_prefers_dark);
        let mut controller = Self {
            store,
            surface,
            mode,
            source,
        };
        controller.apply_mode(mode, false);
        controller
    }

    fn resolve_initial_mode(store: &S, system_prefers_dark: bool) -> (Mode, Source) {
        match store.load() {
            Ok(Some(stored)) => {
                log::debug!("using stored theme preference: {stored}");
                (stored, Source::Explicit)
            }
            Ok(None) => (Mode::from_prefers_dark(system_prefers_dark), Source::System),
            Err(e) => {
                log::warn!("failed to read theme preference, falling back to system signal: {e}");
                (Mode::from_prefers_dark(system_prefers_dark), Source::System)
            }
        }
    }

    /// The currently active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Where the active mode came from.
    pub fn source(&self) -> Source {
        self.source
    }

    /// Set the mode and push it to every surface.
    ///
    /// `announce == true` marks a user-visible transition: the new mode is
    /// persisted (best-effort) and announced. The silent path is used for
    /// the initial application and for system-driven changes, which are
    /// never persisted so the system signal keeps driving the page until
    /// the user makes an explicit choice.
    pub fn apply_mode(&mut self, mode: Mode, announce: bool) {
        self.mode = mode;
        self.surface.set_toggle_pressed(mode == Mode::Light);
        self.surface.set_root_flag(mode);
        self.surface.set_chrome_color(mode.chrome_color());

        if announce {
            if let Err(e) = self.store.save(mode) {
                log::warn!("failed to persist theme preference, continuing in memory: {e}");
            }
            self.surface.announce(&format!("{} theme enabled", mode.label()));
            log::info!("theme changed to: {mode}");
        } else {
            log::debug!("theme applied: {mode}");
        }
    }

    /// Switch to the opposite mode as an explicit user choice.
    pub fn toggle(&mut self) {
        self.source = Source::Explicit;
        self.apply_mode(self.mode.opposite(), true);
    }

    /// React to a change of the system color-scheme signal.
    ///
    /// A no-op once a preference is explicit; explicit choices win until
    /// storage is cleared.
    pub fn on_system_preference_changed(&mut self, prefers_dark: bool) {
        if self.source == Source::Explicit {
            log::debug!("ignoring system color-scheme change, explicit preference set");
            return;
        }
        let mode = Mode::from_prefers_dark(prefers_dark);
        log::info!("system color scheme changed, following: {mode}");
        self.apply_mode(mode, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Fake store sharing its state with the test through an `Rc`.
    #[derive(Default)]
    struct StoreState {
        stored: Option<Mode>,
        saves: Vec<Mode>,
        fail_load: bool,
        fail_save: bool,
    }

    #[derive(Clone, Default)]
    struct FakeStore(Rc<RefCell<StoreState>>);

    impl FakeStore {
        fn with_stored(mode: Mode) -> Self {
            let store = Self::default();
            store.0.borrow_mut().stored = Some(mode);
            store
        }
    }

    impl PreferenceStore for FakeStore {
        fn load(&self) -> Result<Option<Mode>, StoreError> {
            let state = self.0.borrow();
            if state.fail_load {
                return Err(StoreError::Unavailable);
            }
            Ok(state.stored)
        }

        fn save(&mut self, mode: Mode) -> Result<(), StoreError> {
            let mut state = self.0.borrow_mut();
            if state.fail_save {
                return Err(StoreError::Denied("quota exceeded".into()));
            }
            state.stored = Some(mode);
            state.saves.push(mode);
            Ok(())
        }
    }

    #[derive(Default)]
    struct SurfaceState {
        pressed: Option<bool>,
        root_flag: Option<Mode>,
        chrome_color: Option<String>,
        announcements: Vec<String>,
    }

    #[derive(Clone, Default)]
    struct FakeSurface(Rc<RefCell<SurfaceState>>);

    impl ThemeSurface for FakeSurface {
        fn set_toggle_pressed(&mut self, pressed: bool) {
            self.0.borrow_mut().pressed = Some(pressed);
        }

        fn set_root_flag(&mut self, mode: Mode) {
            self.0.borrow_mut().root_flag = Some(mode);
        }

        fn set_chrome_color(&mut self, color: &str) {
            self.0.borrow_mut().chrome_color = Some(color.to_string());
        }

        fn announce(&mut self, message: &str) {
            self.0.borrow_mut().announcements.push(message.to_string());
        }
    }

    fn controller(
        store: FakeStore,
        system_prefers_dark: bool,
    ) -> (ThemeController<FakeStore, FakeSurface>, FakeSurface) {
        let surface = FakeSurface::default();
        let controller = ThemeController::new(store, surface.clone(), system_prefers_dark);
        (controller, surface)
    }

    /// All surfaces must agree with the given mode after any apply.
    fn assert_surfaces_consistent(surface: &FakeSurface, mode: Mode) {
        let state = surface.0.borrow();
        assert_eq!(state.pressed, Some(mode == Mode::Light));
        assert_eq!(state.root_flag, Some(mode));
        assert_eq!(state.chrome_color.as_deref(), Some(mode.chrome_color()));
    }

    #[test]
    fn stored_mode_wins_over_system_signal() {
        for (stored, prefers_dark) in [
            (Mode::Light, true),
            (Mode::Light, false),
            (Mode::Dark, true),
            (Mode::Dark, false),
        ] {
            let (controller, _) = controller(FakeStore::with_stored(stored), prefers_dark);
            assert_eq!(controller.mode(), stored);
            assert_eq!(controller.source(), Source::Explicit);
        }
    }

    #[test]
    fn system_signal_decides_without_stored_mode() {
        let (dark, _) = controller(FakeStore::default(), true);
        assert_eq!(dark.mode(), Mode::Dark);
        assert_eq!(dark.source(), Source::System);

        let (light, _) = controller(FakeStore::default(), false);
        assert_eq!(light.mode(), Mode::Light);
    }

    #[test]
    fn storage_failure_falls_back_to_system_signal() {
        let store = FakeStore::default();
        store.0.borrow_mut().fail_load = true;
        let (controller, surface) = controller(store, true);
        assert_eq!(controller.mode(), Mode::Dark);
        assert_eq!(controller.source(), Source::System);
        assert_surfaces_consistent(&surface, Mode::Dark);
    }

    #[test]
    fn toggle_is_an_involution() {
        for prefers_dark in [true, false] {
            let (mut controller, _) = controller(FakeStore::default(), prefers_dark);
            let original = controller.mode();
            controller.toggle();
            assert_eq!(controller.mode(), original.opposite());
            controller.toggle();
            assert_eq!(controller.mode(), original);
        }
    }

    #[test]
    fn surfaces_stay_consistent_through_transitions() {
        let (mut controller, surface) = controller(FakeStore::default(), true);
        assert_surfaces_consistent(&surface, Mode::Dark);

        controller.toggle();
        assert_surfaces_consistent(&surface, Mode::Light);

        controller.apply_mode(Mode::Dark, false);
        assert_surfaces_consistent(&surface, Mode::Dark);
    }

    #[test]
    fn toggle_persists_and_announces() {
        let store = FakeStore::default();
        let (mut controller, surface) = controller(store.clone(), false);
        controller.toggle();

        assert_eq!(store.0.borrow().stored, Some(Mode::Dark));
        assert_eq!(store.0.borrow().saves, vec![Mode::Dark]);
        assert_eq!(
            surface.0.borrow().announcements,
            vec!["Dark theme enabled".to_string()]
        );
    }

    #[test]
    fn initial_application_does_not_persist() {
        let store = FakeStore::default();
        let (_, _) = controller(store.clone(), true);
        assert_eq!(store.0.borrow().stored, None);
        assert!(store.0.borrow().saves.is_empty());
    }

    #[test]
    fn save_failure_is_not_fatal() {
        let store = FakeStore::default();
        store.0.borrow_mut().fail_save = true;
        let (mut controller, surface) = controller(store.clone(), false);

        controller.toggle();
        assert_eq!(controller.mode(), Mode::Dark);
        assert_surfaces_consistent(&surface, Mode::Dark);
        assert_eq!(store.0.borrow().stored, None);
    }

    #[test]
    fn system_change_before_explicit_choice_applies() {
        let (mut controller, surface) = controller(FakeStore::default(), false);
        assert_eq!(controller.mode(), Mode::Light);

        controller.on_system_preference_changed(true);
        assert_eq!(controller.mode(), Mode::Dark);
        assert_surfaces_consistent(&surface, Mode::Dark);

        controller.on_system_preference_changed(false);
        assert_eq!(controller.mode(), Mode::Light);
    }

    #[test]
    fn system_change_after_toggle_is_ignored() {
        let (mut controller, _) = controller(FakeStore::default(), false);
        controller.toggle();
        assert_eq!(controller.mode(), Mode::Dark);

        controller.on_system_preference_changed(false);
        assert_eq!(controller.mode(), Mode::Dark);
    }

    #[test]
    fn system_change_with_stored_preference_is_ignored() {
        let (mut controller, _) = controller(FakeStore::with_stored(Mode::Light), false);
        controller.on_system_preference_changed(true);
        assert_eq!(controller.mode(), Mode::Light);
    }

    #[test]
    fn system_driven_change_is_not_persisted() {
        let store = FakeStore::default();
        let (mut controller, _) = controller(store.clone(), false);
        controller.on_system_preference_changed(true);
        assert_eq!(store.0.borrow().stored, None);
        assert_eq!(controller.source(), Source::System);
    }
}

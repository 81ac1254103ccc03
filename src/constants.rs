//! Global constants for the DevLinks enhancement layer.

/// LocalStorage key holding the persisted theme preference.
pub const STORAGE_KEY: &str = "theme-preference";

/// Element id of the theme toggle control.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Body class that switches the stylesheet to the light palette.
/// The dark palette is the default and has no class of its own.
pub const LIGHT_CLASS: &str = "light";

/// Body class set while the pointer glow effect is active.
pub const MOUSE_ACTIVE_CLASS: &str = "mouse-active";

/// Body class set while the user is navigating with the keyboard.
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-navigation";

/// Delay before the page loader overlay is hidden.
pub const LOADER_HIDE_DELAY_MS: i32 = 1500;

/// Number of dots in the cursor trail.
pub const CURSOR_DOT_COUNT: usize = 12;

/// Minimum viewport width for the cursor trail; below this the effect
/// is skipped entirely.
pub const CURSOR_TRAIL_MIN_WIDTH: f64 = 768.0;

/// Per-frame easing factor for trail dots chasing their predecessor.
pub const TRAIL_EASING: f64 = 0.3;

/// Number of floating particles appended to the particles container.
pub const PARTICLE_COUNT: usize = 30;

/// How long a link card keeps its ripple class after a click.
pub const RIPPLE_DURATION_MS: i32 = 600;

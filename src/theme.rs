//! Theme mode type for the DevLinks page.
//!
//! Provides the binary light/dark display mode, its string forms used by
//! the storage contract, and the per-mode browser-chrome color hint.

use std::fmt;
use std::str::FromStr;

/// The binary display mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// The other mode.
    pub fn opposite(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    /// Mode derived from the system "prefers dark" signal.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Mode::Dark } else { Mode::Light }
    }

    /// String form used as the persisted storage value.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// Capitalized display name for log lines and announcements.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Light => "Light",
            Mode::Dark => "Dark",
        }
    }

    /// Color hint for the browser chrome (`meta[name="theme-color"]`).
    pub fn chrome_color(self) -> &'static str {
        match self {
            Mode::Light => "#f8fafc",
            Mode::Dark => "#070a13",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored string is not a valid mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid theme mode: {0:?}")]
pub struct InvalidMode(pub String);

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(InvalidMode(other.to_string())),
        }
    }
}

/// Where the active mode came from. Derived state, never persisted:
/// only the resolved [`Mode`] is written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The system color-scheme signal (or the light fallback).
    System,
    /// A stored preference or an explicit user toggle.
    Explicit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        assert_eq!(Mode::Light.opposite(), Mode::Dark);
        assert_eq!(Mode::Dark.opposite(), Mode::Light);
        assert_eq!(Mode::Light.opposite().opposite(), Mode::Light);
    }

    #[test]
    fn parse_round_trips_storage_values() {
        assert_eq!("light".parse::<Mode>(), Ok(Mode::Light));
        assert_eq!("dark".parse::<Mode>(), Ok(Mode::Dark));
        assert_eq!(Mode::Light.as_str().parse::<Mode>(), Ok(Mode::Light));
        assert_eq!(Mode::Dark.as_str().parse::<Mode>(), Ok(Mode::Dark));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert!("Dark".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
        assert!("auto".parse::<Mode>().is_err());
    }

    #[test]
    fn chrome_colors_differ_per_mode() {
        assert_ne!(Mode::Light.chrome_color(), Mode::Dark.chrome_color());
    }
}

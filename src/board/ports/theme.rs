//! Theme port persisting the user's colour scheme choice.

/// Colour scheme applied to the application chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light backgrounds, dark text.
    #[default]
    Light,
    /// Dark backgrounds, light text.
    Dark,
}

impl Theme {
    /// Returns the opposite scheme.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Stores the active theme across sessions.
pub trait ThemeStore {
    /// Returns the active theme.
    fn current(&self) -> Theme;

    /// Flips the active theme, persists it, and returns the new value.
    fn toggle(&self) -> Theme;
}

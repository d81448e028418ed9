//! In-memory theme store.

use std::sync::{Arc, RwLock};

use crate::board::ports::theme::{Theme, ThemeStore};

/// Thread-safe theme store holding the active scheme in memory.
///
/// Clones share the same state, mirroring how a persistent store would
/// behave across application views.
#[derive(Debug, Clone, Default)]
pub struct InMemoryThemeStore {
    current: Arc<RwLock<Theme>>,
}

impl InMemoryThemeStore {
    /// Creates a store starting on the default light scheme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store starting on the given scheme.
    #[must_use]
    pub fn starting_with(theme: Theme) -> Self {
        Self {
            current: Arc::new(RwLock::new(theme)),
        }
    }
}

impl ThemeStore for InMemoryThemeStore {
    fn current(&self) -> Theme {
        self.current.read().map_or_else(|_| Theme::default(), |theme| *theme)
    }

    fn toggle(&self) -> Theme {
        self.current.write().map_or_else(
            |_| Theme::default(),
            |mut theme| {
                *theme = theme.toggle();
                *theme
            },
        )
    }
}

//! In-memory adapters for notifications and theming.

mod notifier;
mod theme;

pub use notifier::RecordingNotifier;
pub use theme::InMemoryThemeStore;

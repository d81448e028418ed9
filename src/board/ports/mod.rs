//! Port contracts the board service drives its surroundings through.

pub mod notifier;
pub mod theme;

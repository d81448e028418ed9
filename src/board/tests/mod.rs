//! Unit tests for the board module.
//!
//! Tests are organised by concern: domain value types, board operations,
//! deadline presentation, the starter board, the service layer, and the
//! notification wording.


use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a fixed instant for deterministic timestamps.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Midday on 4 March 2026, the instant most tests pin their clocks to.
pub(crate) fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0)
        .single()
        .expect("valid test instant")
}

//! Shared world state for board mutation BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use tasklight::board::{
    adapters::memory::RecordingNotifier,
    domain::{Board, BoardError, TaskId},
    seed::initial_board,
    services::BoardService,
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<FixedClock, RecordingNotifier>;

/// Clock pinned to 2026-03-04 12:00 UTC so deadlines are reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scenario world for board mutation behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub notifier: RecordingNotifier,
    pub snapshot: Option<Board>,
    pub last_error: Option<BoardError>,
    pub last_created: Option<TaskId>,
}

impl BoardWorld {
    /// Creates a world holding the starter board with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        let clock = FixedClock(
            Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0)
                .single()
                .unwrap_or_default(),
        );
        let notifier = RecordingNotifier::new();
        let service = BoardService::new(
            initial_board(&clock),
            Arc::new(clock),
            Arc::new(notifier.clone()),
        );

        Self {
            service,
            notifier,
            snapshot: None,
            last_error: None,
            last_created: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

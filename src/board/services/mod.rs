//! Orchestration services for the board.

mod store;

pub use store::BoardService;

//! Kanban board state and mutation logic for Tasklight.
//!
//! This module implements the board that backs the Tasklight application:
//! a fixed set of three status columns, the tasks they order, and the four
//! mutations a host drives the board with (create, update, move, delete).
//! Every mutation produces a fresh, internally consistent board value;
//! callers observe changes only through the service layer, which also
//! raises user-facing notifications. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Starter board data in [`seed`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod seed;
pub mod services;

#[cfg(test)]
mod tests;

//! Tasklight: kanban board core.
//!
//! This crate provides the state model and mutation logic for a small
//! three-column kanban board: tasks with deadlines and priorities, the
//! columns that order them, and the operations a host application drives
//! them with.
//!
//! # Architecture
//!
//! Tasklight follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (notifications, theming)
//!
//! # Modules
//!
//! - [`board`]: Board state, mutation operations, and presentation helpers

pub mod board;

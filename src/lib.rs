//! Taskboard: drag-and-drop task board core.
//!
//! This crate provides the state logic behind a three-column task board:
//! the task model, column partitioning, drag gesture reconciliation, and a
//! controller that applies board changes optimistically before persisting
//! them to a remote document store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, logging)
//!
//! # Modules
//!
//! - [`board`]: Task model, reconciliation, and the board controller
//! - [`telemetry`]: Log subscriber setup

pub mod board;
pub mod telemetry;

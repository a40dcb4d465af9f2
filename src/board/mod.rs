//! Drag-and-drop task board.
//!
//! Tasks live in three fixed status columns. A drag gesture is reconciled
//! into a new flat task list by a pure function, applied optimistically by
//! the controller, and then persisted through the store port. The module
//! follows hexagonal architecture:
//!
//! - Domain types and the reconciler in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The session controller in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

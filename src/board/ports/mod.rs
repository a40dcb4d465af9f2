//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod notifier;
pub mod session;
pub mod store;

pub use notifier::{Notification, Notifier, Severity};
pub use session::SessionProvider;
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};

//! Application services for the task board.

mod config;
mod controller;
pub mod messages;

pub use config::BoardConfig;
pub use controller::{
    BoardController, BoardError, BoardResult, CommitStatus, DragEndReport, Gated, PendingCommit,
};

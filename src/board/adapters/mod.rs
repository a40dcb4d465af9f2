//! Adapter implementations for board ports.

pub mod log;
pub mod memory;

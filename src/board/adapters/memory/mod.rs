//! In-memory adapters for the board ports.

mod notifier;
mod session;
mod store;

pub use notifier::RecordingNotifier;
pub use session::StaticSession;
pub use store::InMemoryTaskStore;

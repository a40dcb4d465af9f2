//! Identity port supplying the signed-in user.

use crate::board::domain::UserId;

/// Source of the currently signed-in user.
///
/// `None` means nobody is signed in, in which case no board operation is
/// permitted.
pub trait SessionProvider: Send + Sync {
    /// Returns the signed-in user, if any.
    fn current_user(&self) -> Option<UserId>;
}

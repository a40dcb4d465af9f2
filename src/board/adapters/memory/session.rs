//! Session provider with a switchable signed-in user.

use std::sync::{Arc, RwLock};

use crate::board::{domain::UserId, ports::SessionProvider};

/// In-memory session whose user can be changed at runtime.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Arc<RwLock<Option<UserId>>>,
}

impl StaticSession {
    /// Creates a session signed in as `user`.
    #[must_use]
    pub fn signed_in(user: UserId) -> Self {
        Self {
            user: Arc::new(RwLock::new(Some(user))),
        }
    }

    /// Creates a session with nobody signed in.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Replaces the signed-in user.
    pub fn set_user(&self, user: Option<UserId>) {
        if let Ok(mut current) = self.user.write() {
            *current = user;
        }
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<UserId> {
        self.user.read().ok().and_then(|user| user.clone())
    }
}

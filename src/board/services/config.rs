//! Behaviour switches for the board controller.

use crate::board::domain::CrossMovePlacement;

/// Configuration for board reconciliation and persistence.
///
/// # Examples
///
/// ```
/// use taskboard::board::{domain::CrossMovePlacement, services::BoardConfig};
///
/// let config = BoardConfig::default();
/// assert!(!config.persist_reorders);
/// assert_eq!(config.cross_move_placement, CrossMovePlacement::Append);
///
/// let persistent = BoardConfig::persistent_order();
/// assert!(persistent.persist_reorders);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Placement of tasks dropped on a card in another column.
    pub cross_move_placement: CrossMovePlacement,
    /// Whether same-column reorders write `order` hints to the store.
    ///
    /// When disabled, reorders only live for the current session.
    pub persist_reorders: bool,
    /// Whether successful mutations produce a success notification.
    pub notify_success: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cross_move_placement: CrossMovePlacement::Append,
            persist_reorders: false,
            notify_success: true,
        }
    }
}

impl BoardConfig {
    /// Returns a configuration that persists reorders.
    #[must_use]
    pub fn persistent_order() -> Self {
        Self {
            persist_reorders: true,
            ..Self::default()
        }
    }

    /// Sets the cross-column placement policy.
    #[must_use]
    pub const fn with_cross_move_placement(mut self, placement: CrossMovePlacement) -> Self {
        self.cross_move_placement = placement;
        self
    }

    /// Enables or disables reorder persistence.
    #[must_use]
    pub const fn with_persist_reorders(mut self, persist: bool) -> Self {
        self.persist_reorders = persist;
        self
    }

    /// Enables or disables success notifications.
    #[must_use]
    pub const fn with_notify_success(mut self, notify: bool) -> Self {
        self.notify_success = notify;
        self
    }
}

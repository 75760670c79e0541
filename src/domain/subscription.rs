use serde::{Deserialize, Serialize};

use super::id::Id;

/// Subscription record linking a subscriber to a channel
///
/// # Invariants
/// - At most one subscription exists per (channel, subscriber) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub channel_id: Id,
    pub subscriber_id: Id,
}

impl Subscription {
    /// Creates a subscription for the given pair
    pub fn new(channel_id: Id, subscriber_id: Id) -> Self {
        Self {
            channel_id,
            subscriber_id,
        }
    }
}

/// Effect of a toggle on a subscription pair
///
/// The toggle alternates: a pair with no subscription gains one, a pair
/// with a subscription loses it. Deciding the action up front from the
/// observed existence keeps the handler to a single read-then-write
/// sequence per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// No subscription exists for the pair; create one
    Subscribe,
    /// A subscription exists for the pair; remove it
    Unsubscribe,
}

impl ToggleAction {
    /// Picks the action for the observed existence state
    pub fn for_existing(exists: bool) -> Self {
        if exists {
            ToggleAction::Unsubscribe
        } else {
            ToggleAction::Subscribe
        }
    }

    /// The existence state after the action is applied
    pub fn resulting_state(&self) -> bool {
        matches!(self, ToggleAction::Subscribe)
    }
}

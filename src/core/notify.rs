//! Human-readable notifications.
//!
//! The store reports a handful of events (rejected plays, reclaims, forgotten
//! cards) as short messages. They are purely observational: nothing in the
//! store reads them back.

use serde::{Deserialize, Serialize};

/// Shown when a card costs more than the player's energy.
pub const NOT_ENOUGH_ENERGY: &str = "Not enough energy";
/// Shown when a player's whole discard returns to hand.
pub const RECLAIM_CARDS: &str = "Reclaim cards";
/// Shown when a card is removed from the game.
pub const FORGET_CARD: &str = "Forget card";
/// Shown when a played card is discarded.
pub const PUT_CARD_IN_DISCARD: &str = "Put card in discard";

/// Receiver for store notifications.
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

/// Drops every message.
impl NotificationSink for () {
    fn notify(&mut self, _message: &str) {}
}

impl<N: NotificationSink + ?Sized> NotificationSink for &mut N {
    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

/// In-memory message log, oldest first.
///
/// Every message is also forwarded to the `log` facade at info level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    messages: Vec<String>,
}

impl MessageLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The most recent message.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl NotificationSink for MessageLog {
    fn notify(&mut self, message: &str) {
        log::info!("{message}");
        self.messages.push(message.to_string());
    }
}

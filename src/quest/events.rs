//! Quest lifecycle notifications
//!
//! The lifecycle source publishes on three channels. Payloads are optional:
//! upstream feeds may deliver a notification without a quest attached, and
//! consumers are expected to log and skip those.

use super::definition::Quest;

/// Notification channel exposed by a quest lifecycle source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleChannel {
    /// A quest became active
    Registered,
    /// An active quest was turned in
    Completed,
    /// An active quest was abandoned or failed
    Canceled,
}

impl LifecycleChannel {
    pub const ALL: [LifecycleChannel; 3] = [
        LifecycleChannel::Registered,
        LifecycleChannel::Completed,
        LifecycleChannel::Canceled,
    ];

    /// Get channel name as string (for logging/debugging)
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleChannel::Registered => "quest_registered",
            LifecycleChannel::Completed => "quest_completed",
            LifecycleChannel::Canceled => "quest_canceled",
        }
    }
}

/// Callback invoked for every notification on a subscribed channel.
///
/// Returns false once the subscriber is gone; the source then drops it.
pub type QuestHandler = Box<dyn FnMut(Option<&Quest>) -> bool>;

/// Log an absent notification payload. Returns the quest when present.
pub(crate) fn require_quest<'a>(
    channel: LifecycleChannel,
    view: &str,
    quest: Option<&'a Quest>,
) -> Option<&'a Quest> {
    if quest.is_none() {
        log::warn!("{}: ignoring {} notification without a quest", view, channel.as_str());
    }
    quest
}

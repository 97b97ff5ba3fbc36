//! Contract consumed from the quest subsystem

use std::sync::atomic::{AtomicU64, Ordering};

use super::definition::Quest;
use super::events::{LifecycleChannel, QuestHandler};

static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a lifecycle source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(u64);

impl SourceId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        SourceId(NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle returned by [`QuestLifecycleSource::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken {
    /// Source that issued the token
    pub source: SourceId,
    pub channel: LifecycleChannel,
    pub id: u64,
}

/// Source of quest snapshots and lifecycle notifications.
///
/// Snapshots are ordered by insertion. Notifications for one quest arrive in
/// order: registered before completed or canceled.
pub trait QuestLifecycleSource {
    fn source_id(&self) -> SourceId;

    fn active_quests(&self) -> Vec<Quest>;

    fn completed_quests(&self) -> Vec<Quest>;

    /// Add a handler. Handlers returning false are dropped by the source.
    fn subscribe(&mut self, channel: LifecycleChannel, handler: QuestHandler) -> SubscriptionToken;

    /// Remove a handler. Unknown or foreign tokens are ignored and return false.
    fn unsubscribe(&mut self, token: SubscriptionToken) -> bool;
}

/// Subscriptions held by one view instance, all issued by the same source
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    source: Option<SourceId>,
    tokens: Vec<SubscriptionToken>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: SubscriptionToken) {
        debug_assert!(self.source.is_none() || self.source == Some(token.source));
        self.source = Some(token.source);
        self.tokens.push(token);
    }

    /// True when the held tokens were issued by another source than `source`
    pub fn is_bound_elsewhere(&self, source: &dyn QuestLifecycleSource) -> bool {
        self.source.is_some_and(|id| id != source.source_id())
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Unsubscribe every held token. Each token is revoked at most once.
    ///
    /// Tokens are only handed to the source that issued them; against any
    /// other source nothing is revoked and the tokens are kept.
    pub fn revoke(&mut self, source: &mut dyn QuestLifecycleSource) -> usize {
        if self.is_bound_elsewhere(source) {
            log::warn!("Not revoking {} subscriptions: they belong to another source", self.tokens.len());
            return 0;
        }

        let mut revoked = 0;
        for token in self.tokens.drain(..) {
            if source.unsubscribe(token) {
                revoked += 1;
            }
        }
        self.source = None;
        revoked
    }
}

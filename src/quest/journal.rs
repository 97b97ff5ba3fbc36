//! In-memory quest lifecycle source
//!
//! Tracks which quests are active or completed for the local player and
//! publishes lifecycle notifications to subscribed views.

use std::collections::HashMap;

use super::definition::Quest;
use super::events::{LifecycleChannel, QuestHandler};
use super::source::{QuestLifecycleSource, SourceId, SubscriptionToken};

struct Subscriber {
    id: u64,
    handler: QuestHandler,
}

/// Player quest journal
pub struct QuestJournal {
    id: SourceId,
    /// Active quests in acceptance order
    active: Vec<Quest>,
    /// Completed quests in completion order
    completed: Vec<Quest>,
    subscribers: HashMap<LifecycleChannel, Vec<Subscriber>>,
    next_subscription_id: u64,
}

impl QuestJournal {
    pub fn new() -> Self {
        Self {
            id: SourceId::next(),
            active: Vec::new(),
            completed: Vec::new(),
            subscribers: HashMap::new(),
            next_subscription_id: 0,
        }
    }

    /// Start a new quest. Returns false if the quest is already active or completed.
    pub fn start_quest(&mut self, quest: Quest) -> bool {
        if self.is_quest_active(&quest.code_name) || self.is_quest_completed(&quest.code_name) {
            log::debug!("Quest '{}' already known, not starting again", quest.code_name);
            return false;
        }

        log::info!("Quest accepted: {} - {}", quest.code_name, quest.display_name);
        self.active.push(quest.clone());
        self.notify(LifecycleChannel::Registered, Some(&quest));
        true
    }

    /// Complete an active quest and move it to the completed list
    pub fn complete_quest(&mut self, code_name: &str) -> bool {
        let Some(index) = self.active.iter().position(|q| q.code_name == code_name) else {
            log::warn!("Cannot complete quest '{}': not active", code_name);
            return false;
        };

        let quest = self.active.remove(index);
        log::info!("Quest completed: {} - {}", quest.code_name, quest.display_name);
        self.completed.push(quest.clone());
        self.notify(LifecycleChannel::Completed, Some(&quest));
        true
    }

    /// Cancel an active quest. Canceled quests are not kept.
    pub fn cancel_quest(&mut self, code_name: &str) -> bool {
        let Some(index) = self.active.iter().position(|q| q.code_name == code_name) else {
            log::warn!("Cannot cancel quest '{}': not active", code_name);
            return false;
        };

        let quest = self.active.remove(index);
        log::info!("Quest canceled: {} - {}", quest.code_name, quest.display_name);
        self.notify(LifecycleChannel::Canceled, Some(&quest));
        true
    }

    /// Deliver a notification to every subscriber of `channel`, in
    /// subscription order. Does not touch the journal's own lists.
    ///
    /// Subscribers whose handler reports them gone are removed.
    pub fn notify(&mut self, channel: LifecycleChannel, quest: Option<&Quest>) {
        let Some(subscribers) = self.subscribers.get_mut(&channel) else {
            return;
        };
        let before = subscribers.len();
        subscribers.retain_mut(|subscriber| (subscriber.handler)(quest));
        if subscribers.len() != before {
            log::debug!(
                "Dropped {} stale {} subscribers",
                before - subscribers.len(),
                channel.as_str()
            );
        }
    }

    pub fn is_quest_active(&self, code_name: &str) -> bool {
        self.active.iter().any(|q| q.code_name == code_name)
    }

    pub fn is_quest_completed(&self, code_name: &str) -> bool {
        self.completed.iter().any(|q| q.code_name == code_name)
    }

    /// Number of handlers subscribed to a channel
    pub fn subscriber_count(&self, channel: LifecycleChannel) -> usize {
        self.subscribers.get(&channel).map_or(0, |s| s.len())
    }
}

impl Default for QuestJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestLifecycleSource for QuestJournal {
    fn source_id(&self) -> SourceId {
        self.id
    }

    fn active_quests(&self) -> Vec<Quest> {
        self.active.clone()
    }

    fn completed_quests(&self) -> Vec<Quest> {
        self.completed.clone()
    }

    fn subscribe(&mut self, channel: LifecycleChannel, handler: QuestHandler) -> SubscriptionToken {
        let id = self.next_subscription_id;
        self.next_subscription_id += 1;
        self.subscribers
            .entry(channel)
            .or_default()
            .push(Subscriber { id, handler });
        SubscriptionToken {
            source: self.id,
            channel,
            id,
        }
    }

    fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        if token.source != self.id {
            log::warn!("Ignoring subscription token issued by another source");
            return false;
        }
        let Some(subscribers) = self.subscribers.get_mut(&token.channel) else {
            return false;
        };
        let before = subscribers.len();
        subscribers.retain(|s| s.id != token.id);
        subscribers.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::QuestCategory;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn quest(code: &str) -> Quest {
        Quest::new(code, code, QuestCategory::Side)
    }

    fn recorder(journal: &mut QuestJournal, channel: LifecycleChannel) -> (Rc<RefCell<Vec<Option<String>>>>, SubscriptionToken) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let token = journal.subscribe(
            channel,
            Box::new(move |q: Option<&Quest>| {
                sink.borrow_mut().push(q.map(|q| q.code_name.clone()));
                true
            }),
        );
        (seen, token)
    }

    #[test]
    fn test_start_complete_cancel() {
        let mut journal = QuestJournal::new();
        let (registered, _) = recorder(&mut journal, LifecycleChannel::Registered);
        let (completed, _) = recorder(&mut journal, LifecycleChannel::Completed);
        let (canceled, _) = recorder(&mut journal, LifecycleChannel::Canceled);

        assert!(journal.start_quest(quest("q1")));
        assert!(journal.start_quest(quest("q2")));
        assert!(!journal.start_quest(quest("q1")));

        assert!(journal.complete_quest("q1"));
        assert!(journal.cancel_quest("q2"));
        assert!(!journal.cancel_quest("q2"));

        assert_eq!(*registered.borrow(), vec![Some("q1".to_string()), Some("q2".to_string())]);
        assert_eq!(*completed.borrow(), vec![Some("q1".to_string())]);
        assert_eq!(*canceled.borrow(), vec![Some("q2".to_string())]);

        assert!(journal.active_quests().is_empty());
        assert_eq!(journal.completed_quests(), vec![quest("q1")]);
        // Completed quests cannot be started again
        assert!(!journal.start_quest(quest("q1")));
    }

    #[test]
    fn test_active_snapshot_keeps_acceptance_order() {
        let mut journal = QuestJournal::new();
        for code in ["c", "a", "b"] {
            journal.start_quest(quest(code));
        }

        let codes: Vec<String> = journal.active_quests().into_iter().map(|q| q.code_name).collect();
        assert_eq!(codes, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut journal = QuestJournal::new();
        let (seen, token) = recorder(&mut journal, LifecycleChannel::Registered);

        assert!(journal.unsubscribe(token));
        assert!(!journal.unsubscribe(token));
        assert_eq!(journal.subscriber_count(LifecycleChannel::Registered), 0);

        journal.start_quest(quest("q1"));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_notify_without_quest() {
        let mut journal = QuestJournal::new();
        let (seen, _) = recorder(&mut journal, LifecycleChannel::Completed);

        journal.notify(LifecycleChannel::Completed, None);

        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn test_foreign_token_is_ignored() {
        let mut first = QuestJournal::new();
        let mut second = QuestJournal::new();
        let (_, token) = recorder(&mut first, LifecycleChannel::Registered);
        recorder(&mut second, LifecycleChannel::Registered);

        // Same channel and id, different issuer
        assert_ne!(first.source_id(), second.source_id());
        assert!(!second.unsubscribe(token));
        assert_eq!(second.subscriber_count(LifecycleChannel::Registered), 1);
        assert!(first.unsubscribe(token));
    }

    #[test]
    fn test_finished_handlers_are_dropped() {
        let mut journal = QuestJournal::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        journal.subscribe(
            LifecycleChannel::Registered,
            Box::new(move |_: Option<&Quest>| {
                *counter.borrow_mut() += 1;
                false
            }),
        );
        let (seen, _) = recorder(&mut journal, LifecycleChannel::Registered);

        journal.start_quest(quest("q1"));
        journal.start_quest(quest("q2"));

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(journal.subscriber_count(LifecycleChannel::Registered), 1);
    }
}

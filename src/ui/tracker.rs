//! On-screen quest tracker
//!
//! Keeps one tracker widget per active quest, created and destroyed in
//! response to lifecycle notifications.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use super::palette::CategoryPalette;
use super::registry::{QuestViewRegistry, ViewFactory};
use crate::error::{QuestUiError, Result};
use crate::quest::events::require_quest;
use crate::quest::{LifecycleChannel, Quest, QuestLifecycleSource, SubscriptionSet};

const VIEW_NAME: &str = "quest tracker";

pub struct QuestTrackerBuilder<F: ViewFactory> {
    factory: Option<F>,
    palette: CategoryPalette,
}

impl<F: ViewFactory + 'static> QuestTrackerBuilder<F> {
    pub fn factory(mut self, factory: F) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn palette(mut self, palette: CategoryPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Fails when no widget factory was supplied
    pub fn build(self) -> Result<QuestTracker<F>> {
        let Some(factory) = self.factory else {
            log::error!("{}: no tracker widget factory configured, trackers disabled", VIEW_NAME);
            return Err(QuestUiError::MissingFactory { view: VIEW_NAME });
        };

        Ok(QuestTracker {
            views: Rc::new(RefCell::new(QuestViewRegistry::new(VIEW_NAME, factory, self.palette))),
            subscriptions: SubscriptionSet::new(),
        })
    }
}

/// One tracker per active quest, kept in sync with a lifecycle source
pub struct QuestTracker<F: ViewFactory> {
    views: Rc<RefCell<QuestViewRegistry<F>>>,
    subscriptions: SubscriptionSet,
}

impl<F: ViewFactory + 'static> QuestTracker<F> {
    pub fn builder() -> QuestTrackerBuilder<F> {
        QuestTrackerBuilder {
            factory: None,
            palette: CategoryPalette::default(),
        }
    }

    /// Subscribe to `source` and rebuild the trackers from its active quests.
    ///
    /// Attaching again first drops the previous subscriptions, so each
    /// channel is only ever handled once per tracker. A tracker still
    /// attached to another source must be detached from it first.
    pub fn attach(&mut self, source: &mut dyn QuestLifecycleSource) -> Result<()> {
        if self.subscriptions.is_bound_elsewhere(source) {
            log::error!("{}: still attached to another quest source", VIEW_NAME);
            return Err(QuestUiError::AttachedElsewhere { view: VIEW_NAME });
        }
        if !self.subscriptions.is_empty() {
            log::debug!("{}: re-attaching, dropping previous subscriptions", VIEW_NAME);
            self.subscriptions.revoke(source);
        }

        for channel in LifecycleChannel::ALL {
            let views = Rc::downgrade(&self.views);
            let token = source.subscribe(
                channel,
                Box::new(move |quest: Option<&Quest>| on_lifecycle(&views, channel, quest)),
            );
            self.subscriptions.push(token);
        }

        let active = source.active_quests();
        let mut views = self.views.borrow_mut();
        views.snapshot_rebuild(&active);
        log::info!("{}: attached, tracking {} quests", VIEW_NAME, views.len());
        Ok(())
    }

    /// Stop receiving notifications. Existing trackers stay on screen.
    ///
    /// A tracker dropped without detaching stops reacting at once; its
    /// handlers are released by the source on the next notification.
    pub fn detach(&mut self, source: &mut dyn QuestLifecycleSource) {
        let revoked = self.subscriptions.revoke(source);
        log::debug!("{}: detached ({} subscriptions revoked)", VIEW_NAME, revoked);
    }

    /// Detach and destroy every tracker
    pub fn shutdown(&mut self, source: &mut dyn QuestLifecycleSource) {
        self.detach(source);
        self.views.borrow_mut().clear_all();
    }

    /// Rebuild every tracker from the source's current active quests
    pub fn force_refresh(&mut self, source: &dyn QuestLifecycleSource) {
        let active = source.active_quests();
        self.views.borrow_mut().snapshot_rebuild(&active);
    }

    pub fn register(&mut self, quest: Option<&Quest>) -> bool {
        self.views.borrow_mut().register(quest).is_some()
    }

    pub fn unregister(&mut self, quest: Option<&Quest>) -> bool {
        self.views.borrow_mut().unregister(quest)
    }

    pub fn clear_all(&mut self) {
        self.views.borrow_mut().clear_all();
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn views(&self) -> Ref<'_, QuestViewRegistry<F>> {
        self.views.borrow()
    }
}

fn on_lifecycle<F: ViewFactory>(
    views: &Weak<RefCell<QuestViewRegistry<F>>>,
    channel: LifecycleChannel,
    quest: Option<&Quest>,
) -> bool {
    let Some(views) = views.upgrade() else {
        return false;
    };
    let Some(quest) = require_quest(channel, VIEW_NAME, quest) else {
        return true;
    };

    let mut views = views.borrow_mut();
    match channel {
        LifecycleChannel::Registered => {
            views.register(Some(quest));
        }
        LifecycleChannel::Completed | LifecycleChannel::Canceled => {
            views.unregister(Some(quest));
        }
    }
    true
}

//! Quest view registry
//!
//! Owns the live UI handle of every quest shown by a view, keyed by the
//! quest's code name. Widget creation and teardown go through an injected
//! [`ViewFactory`], so the registry never knows what a handle actually is.

use std::collections::HashMap;

use macroquad::color::Color;

use super::palette::CategoryPalette;
use crate::quest::Quest;

/// Creates and destroys the widgets backing quest views
pub trait ViewFactory {
    type Handle;

    /// Build the widget for `quest`, tinted with its category color
    fn create(&mut self, quest: &Quest, tint: Color) -> Self::Handle;

    /// Tear down a widget previously returned by `create`
    fn destroy(&mut self, handle: Self::Handle);
}

/// Mapping from quest code name to its live view handle
pub struct QuestViewRegistry<F: ViewFactory> {
    /// View name used in log messages
    name: &'static str,
    factory: F,
    palette: CategoryPalette,
    views: HashMap<String, F::Handle>,
    /// Registered quests in registration order
    order: Vec<Quest>,
}

impl<F: ViewFactory> QuestViewRegistry<F> {
    pub fn new(name: &'static str, factory: F, palette: CategoryPalette) -> Self {
        Self {
            name,
            factory,
            palette,
            views: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a view for `quest` unless one already exists.
    ///
    /// Returns the new handle, or `None` when nothing was created (quest
    /// absent or already registered).
    pub fn register(&mut self, quest: Option<&Quest>) -> Option<&F::Handle> {
        let Some(quest) = quest else {
            log::warn!("{}: cannot register view for a missing quest", self.name);
            return None;
        };

        if self.views.contains_key(&quest.code_name) {
            log::debug!("{}: view for '{}' already exists", self.name, quest.code_name);
            return None;
        }

        if quest.code_name.is_empty() {
            log::warn!(
                "{}: quest '{}' has an empty code name, views may collide",
                self.name,
                quest.display_name
            );
        }

        let tint = self.palette.color_for(quest.category);
        let handle = self.factory.create(quest, tint);
        self.order.push(quest.clone());
        self.views.insert(quest.code_name.clone(), handle);
        self.views.get(&quest.code_name)
    }

    /// Destroy the view for `quest`. Returns false if there was none.
    pub fn unregister(&mut self, quest: Option<&Quest>) -> bool {
        let Some(quest) = quest else {
            log::warn!("{}: cannot unregister view for a missing quest", self.name);
            return false;
        };

        let Some(handle) = self.views.remove(&quest.code_name) else {
            log::debug!("{}: no view for '{}' to remove", self.name, quest.code_name);
            return false;
        };

        self.order.retain(|q| q.code_name != quest.code_name);
        self.factory.destroy(handle);
        true
    }

    /// Destroy every view
    pub fn clear_all(&mut self) {
        for quest in self.order.drain(..) {
            if let Some(handle) = self.views.remove(&quest.code_name) {
                self.factory.destroy(handle);
            }
        }
        debug_assert!(self.views.is_empty());
    }

    /// Destroy every view, then register `quests` in order
    pub fn snapshot_rebuild(&mut self, quests: &[Quest]) {
        self.clear_all();
        for quest in quests {
            self.register(Some(quest));
        }
        log::info!("{}: rebuilt {} views", self.name, self.views.len());
    }

    pub fn contains(&self, code_name: &str) -> bool {
        self.views.contains_key(code_name)
    }

    pub fn get(&self, code_name: &str) -> Option<&F::Handle> {
        self.views.get(code_name)
    }

    /// Code names in registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|q| q.code_name.as_str())
    }

    /// Registered quests in registration order
    pub fn quests(&self) -> &[Quest] {
        &self.order
    }

    /// Handles in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&Quest, &F::Handle)> {
        self.order
            .iter()
            .filter_map(move |quest| self.views.get(&quest.code_name).map(|handle| (quest, handle)))
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}

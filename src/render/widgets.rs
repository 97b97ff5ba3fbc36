//! In-window widgets backing the quest views
//!
//! Widgets are plain data owned by the view registries; the renderer reads
//! them each frame.

use macroquad::prelude::Color;

use crate::quest::{Quest, QuestCategory};
use crate::ui::{DetailPanel, ViewFactory};

/// Tracker or list entry for one quest
#[derive(Debug, Clone, PartialEq)]
pub struct QuestWidget {
    pub code_name: String,
    pub title: String,
    pub category: QuestCategory,
    pub tint: Color,
}

/// Builds [`QuestWidget`]s for one container
#[derive(Debug)]
pub struct QuestWidgetFactory {
    container: &'static str,
    live: usize,
}

impl QuestWidgetFactory {
    pub fn new(container: &'static str) -> Self {
        Self {
            container,
            live: 0,
        }
    }

    /// Widgets created and not yet destroyed
    pub fn live(&self) -> usize {
        self.live
    }
}

impl ViewFactory for QuestWidgetFactory {
    type Handle = QuestWidget;

    fn create(&mut self, quest: &Quest, tint: Color) -> QuestWidget {
        self.live += 1;
        log::debug!("{}: spawned widget for '{}'", self.container, quest.code_name);
        QuestWidget {
            code_name: quest.code_name.clone(),
            title: quest.display_name.clone(),
            category: quest.category,
            tint,
        }
    }

    fn destroy(&mut self, handle: QuestWidget) {
        self.live = self.live.saturating_sub(1);
        log::debug!("{}: despawned widget for '{}'", self.container, handle.code_name);
    }
}

/// Detail panel drawn next to the quest log
#[derive(Debug, Default)]
pub struct DetailPanelWidget {
    quest: Option<Quest>,
}

impl DetailPanelWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quest currently displayed, if the panel is showing
    pub fn quest(&self) -> Option<&Quest> {
        self.quest.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.quest.is_some()
    }
}

impl DetailPanel for DetailPanelWidget {
    fn show(&mut self, quest: &Quest) {
        self.quest = Some(quest.clone());
    }

    fn hide(&mut self) {
        self.quest = None;
    }
}

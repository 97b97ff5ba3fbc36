//! macroquad widgets and drawing for the quest views

pub mod quest;
pub mod theme;
pub mod widgets;

pub use quest::QuestUiRenderer;
pub use widgets::{DetailPanelWidget, QuestWidget, QuestWidgetFactory};

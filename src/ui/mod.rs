//! Quest views synchronized with the quest lifecycle
//!
//! Events flow one way: lifecycle notifications update the view registries,
//! which create and destroy widgets through their factories. Player input
//! only changes what the quest log shows, never which views exist.

pub mod palette;
pub mod quest_log;
pub mod registry;
pub mod tracker;

pub use palette::{parse_hex_color, CategoryPalette};
pub use quest_log::{DetailPanel, QuestLog, QuestLogBuilder, QuestLogInput, QuestLogTab};
pub use registry::{QuestViewRegistry, ViewFactory};
pub use tracker::{QuestTracker, QuestTrackerBuilder};

//! Quest tracker and quest log for the isometric client
//!
//! Keeps on-screen quest widgets in sync with the quest lifecycle (accepted,
//! completed, canceled) and owns the session pause state the quest log
//! relies on while it is open.

pub mod config;
pub mod error;
pub mod quest;
pub mod render;
pub mod session;
pub mod ui;

pub use config::QuestUiConfig;
pub use error::{QuestUiError, Result};
pub use quest::{LifecycleChannel, Quest, QuestCategory, QuestJournal, QuestLifecycleSource};
pub use session::{GameSession, SessionControl, SessionState};
pub use ui::{CategoryPalette, QuestLog, QuestTracker, QuestViewRegistry, ViewFactory};

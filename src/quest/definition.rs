//! Quest identity as seen by the UI layer
//!
//! The UI never inspects objectives or rewards, only the stable code name,
//! the display name and the category used for presentation.

use serde::{Deserialize, Serialize};

/// Presentation category of a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestCategory {
    /// Main story line
    Main,
    /// Optional side content
    Side,
    /// Repeatable daily quest
    Daily,
    /// Limited-time world event
    Event,
    /// Onboarding steps
    Tutorial,
}

impl QuestCategory {
    pub const ALL: [QuestCategory; 5] = [
        QuestCategory::Main,
        QuestCategory::Side,
        QuestCategory::Daily,
        QuestCategory::Event,
        QuestCategory::Tutorial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestCategory::Main => "main",
            QuestCategory::Side => "side",
            QuestCategory::Daily => "daily",
            QuestCategory::Event => "event",
            QuestCategory::Tutorial => "tutorial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "main" => Some(QuestCategory::Main),
            "side" => Some(QuestCategory::Side),
            "daily" => Some(QuestCategory::Daily),
            "event" => Some(QuestCategory::Event),
            "tutorial" => Some(QuestCategory::Tutorial),
            _ => None,
        }
    }
}

/// A quest tracked by the lifecycle source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Stable identifier, the only key used by the view registries
    pub code_name: String,
    pub display_name: String,
    pub category: QuestCategory,
}

impl Quest {
    pub fn new(code_name: &str, display_name: &str, category: QuestCategory) -> Self {
        Self {
            code_name: code_name.to_string(),
            display_name: display_name.to_string(),
            category,
        }
    }

    /// Whether two quest values refer to the same quest
    pub fn same_quest(&self, other: &Quest) -> bool {
        self.code_name == other.code_name
    }
}

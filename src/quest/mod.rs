//! Quest lifecycle model consumed by the UI
//!
//! Quest identity, the lifecycle notification contract and an in-memory
//! journal implementing it.

pub mod definition;
pub mod events;
pub mod journal;
pub mod source;

pub use definition::{Quest, QuestCategory};
pub use events::{LifecycleChannel, QuestHandler};
pub use journal::QuestJournal;
pub use source::{QuestLifecycleSource, SourceId, SubscriptionSet, SubscriptionToken};

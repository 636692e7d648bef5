pub mod confidence;
pub mod level;
pub mod record;
pub mod source;

pub use confidence::Confidence;
pub use level::KnowledgeLevel;
pub use record::{MemoryDraft, MemoryId, MemoryRecord};
pub use source::KnowledgeSource;

mod storage;

pub use storage::IKnowledgeStorage;

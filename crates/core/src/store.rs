//! Per-user conversation storage.
//!
//! Records live for the lifetime of the process; nothing is persisted.

use dashmap::DashMap;

use crate::intake::states::ConversationRecord;

pub trait ConversationStore: Send + Sync {
    fn get(&self, user_id: &str) -> Option<ConversationRecord>;

    fn get_or_create(&self, user_id: &str) -> ConversationRecord;

    /// Replaces the user's record with a fresh one, creating it if absent.
    fn reset(&self, user_id: &str);

    fn exists(&self, user_id: &str) -> bool;

    /// Runs `apply` against the user's record (created on demand) while holding
    /// that user's entry. Concurrent calls for the same user are serialized and
    /// the mutations are committed together once `apply` returns.
    fn modify<R>(&self, user_id: &str, apply: impl FnOnce(&mut ConversationRecord) -> R) -> R;

    fn conversation_count(&self) -> usize;
}

#[derive(Debug, Default)]
pub struct InMemoryConversationStore {
    records: DashMap<String, ConversationRecord>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConversationStore for InMemoryConversationStore {
    fn get(&self, user_id: &str) -> Option<ConversationRecord> {
        self.records.get(user_id).map(|record| record.value().clone())
    }

    fn get_or_create(&self, user_id: &str) -> ConversationRecord {
        self.records.entry(user_id.to_owned()).or_default().value().clone()
    }

    fn reset(&self, user_id: &str) {
        self.records.insert(user_id.to_owned(), ConversationRecord::fresh());
    }

    fn exists(&self, user_id: &str) -> bool {
        self.records.contains_key(user_id)
    }

    fn modify<R>(&self, user_id: &str, apply: impl FnOnce(&mut ConversationRecord) -> R) -> R {
        let mut entry = self.records.entry(user_id.to_owned()).or_default();
        let mut working = entry.value().clone();
        let result = apply(&mut working);
        *entry = working;
        result
    }

    fn conversation_count(&self) -> usize {
        self.records.len()
    }
}

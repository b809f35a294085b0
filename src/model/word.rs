use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the word table: a fresh random id, the word and its language code.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(rename = "UUID")]
    id: Uuid,
    #[serde(rename = "Word")]
    word: String,
    #[serde(rename = "Language")]
    language: String,
}

impl WordRecord {
    pub fn new(word: String, language: String) -> Self {
        Self::with_id(Uuid::new_v4(), word, language)
    }

    pub fn with_id(id: Uuid, word: String, language: String) -> Self {
        Self { id, word, language }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

use crate::cache::errors::CacheError;
use crate::cache::structs::tag_index::TagIndex;

impl TagIndex {
    pub fn from_payload(payload: &[u8]) -> Result<TagIndex, CacheError> {
        serde_json::from_slice(payload)
            .map_err(|e| CacheError::SerializationError(format!("tag index: {e}")))
    }

    pub fn to_payload(&self) -> Result<Vec<u8>, CacheError> {
        serde_json::to_vec(self)
            .map_err(|e| CacheError::SerializationError(format!("tag index: {e}")))
    }

    pub fn insert(&mut self, key: &str) -> bool {
        self.keys.insert(key.to_string())
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

//! WAP push message-size cache.
//!
//! The push receiver learns the size of an inbound message before its content
//! is fetched; retrieval paths look that size up later by content location,
//! with or without the transaction id appended. Entries never expire; the
//! host clears the cache at reset boundaries.

use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;

use smsgate_core::error::{Result, SmsGateError};
use smsgate_core::latin1;

/// Keyed size cache, cheap to clone and share.
///
/// The key is exactly `location ‖ transaction_id` as written. A reader hits
/// it with the same concatenation, or with the location alone when the writer
/// supplied an empty transaction id — never with the transaction id alone.
/// Individual operations are linearizable (last writer wins); there is no
/// ordering across distinct keys.
#[derive(Clone, Default)]
pub struct WapPushSizeCache {
    sizes: Arc<DashMap<Bytes, i64>>,
}

impl WapPushSizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry at `location ‖ transaction_id`.
    pub fn put(&self, location: &[u8], transaction_id: &[u8], size: i64) {
        let mut key = Vec::with_capacity(location.len() + transaction_id.len());
        key.extend_from_slice(location);
        key.extend_from_slice(transaction_id);
        self.sizes.insert(Bytes::from(key), size);
    }

    /// Exact byte-key lookup.
    pub fn size_for_key(&self, key: &[u8]) -> Result<i64> {
        self.sizes
            .get(key)
            .map(|e| *e.value())
            .ok_or_else(|| SmsGateError::NotFound(latin1::decode(key)))
    }

    /// Text-keyed lookup used by the public API. The text is reinterpreted as
    /// Latin-1 bytes so it round-trips against byte-written keys.
    pub fn size_for_key_text(&self, key_text: &str) -> Result<i64> {
        self.size_for_key(&latin1::encode(key_text))
    }

    /// Drop every entry. Reset/teardown boundaries only.
    pub fn clear(&self) {
        self.sizes.clear();
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

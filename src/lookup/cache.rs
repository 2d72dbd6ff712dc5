//! LRU cache in front of a user lookup.

use super::UserLookup;
use crate::error::LookupError;
use crate::types::{User, UserId};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use tracing::trace;

/// Default number of cached profiles.
const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(n) => n,
    None => unreachable!(),
};

/// Caches successful lookups of an inner [`UserLookup`].
///
/// Safe to share between sessions behind an `Arc`. Failures are not cached,
/// so a transient error is retried on the next notice for that user.
pub struct CachedLookup<L> {
    inner: L,
    cache: Mutex<LruCache<UserId, User>>,
}

impl<L: UserLookup> CachedLookup<L> {
    pub fn new(inner: L) -> Self {
        Self::with_capacity(inner, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(inner: L, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Number of cached profiles.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

impl<L: UserLookup> UserLookup for CachedLookup<L> {
    fn show_user(&self, id: UserId) -> Result<User, LookupError> {
        if let Some(user) = self.cache.lock().get(&id) {
            trace!(user_id = %id, "Lookup cache hit");
            return Ok(user.clone());
        }

        // The lock is not held across the inner call.
        let user = self.inner.show_user(id)?;
        self.cache.lock().put(id, user.clone());
        Ok(user)
    }

    fn invalidate(&self, id: UserId) {
        if self.cache.lock().pop(&id).is_some() {
            trace!(user_id = %id, "Evicted cached profile");
        }
    }
}

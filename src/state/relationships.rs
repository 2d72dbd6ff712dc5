//! Follow-set of the session account.

use crate::types::UserId;
use std::collections::HashSet;
use tracing::debug;

/// Relationship state owned by one stream session.
///
/// The follow-set starts out unknown. Until the first friends list arrives
/// [`is_friend`](Self::is_friend) answers `false` for everyone, which makes
/// every reply author a stranger.
#[derive(Clone, Debug)]
pub struct RelationshipState {
    account_id: UserId,
    known: bool,
    friend_ids: HashSet<UserId>,
}

impl RelationshipState {
    pub fn new(account_id: UserId) -> Self {
        Self {
            account_id,
            known: false,
            friend_ids: HashSet::new(),
        }
    }

    pub fn account_id(&self) -> UserId {
        self.account_id
    }

    /// Whether a friends list has been received yet.
    pub fn is_known(&self) -> bool {
        self.known
    }

    /// Replace the follow-set wholesale. Never merges with the previous set.
    pub fn replace_friends(&mut self, ids: impl IntoIterator<Item = UserId>) {
        self.friend_ids = ids.into_iter().collect();
        self.known = true;
        debug!(
            account_id = %self.account_id,
            friends = self.friend_ids.len(),
            "Replaced follow-set"
        );
    }

    /// Record that `source` started following `target`.
    ///
    /// Only follows made by the session account change state.
    pub fn apply_follow(&mut self, source: UserId, target: UserId) {
        if source != self.account_id {
            return;
        }
        if self.friend_ids.insert(target) {
            debug!(target_id = %target, known = self.known, "Added friend");
        }
    }

    /// Record that `source` stopped following `target`.
    pub fn apply_unfollow(&mut self, source: UserId, target: UserId) {
        if source != self.account_id {
            return;
        }
        if self.friend_ids.remove(&target) {
            debug!(target_id = %target, "Removed friend");
        }
    }

    /// Whether the session account follows `id`. Always false while unknown.
    pub fn is_friend(&self, id: UserId) -> bool {
        self.known && self.friend_ids.contains(&id)
    }

    /// Number of followed accounts, or `None` while unknown.
    pub fn friend_count(&self) -> Option<usize> {
        self.known.then(|| self.friend_ids.len())
    }
}

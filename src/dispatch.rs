//! Ordered dispatch of decoded events to a listener.
//!
//! One [`Dispatcher`] is one session: it owns the relationship state for a
//! single connection and delivers events strictly in arrival order. Each
//! event finishes (state update, classification, callback) before the next
//! one is looked at.

use crate::classify::{classify, ClassificationOutcome};
use crate::config::SessionConfig;
use crate::events::{decode, Event};
use crate::listener::UserStreamListener;
use crate::lookup::UserLookup;
use crate::state::RelationshipState;
use crate::types::{User, UserId};
use crossbeam_channel::Receiver;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No event received yet.
    Idle,
    /// At least one event received.
    Streaming,
}

/// Counters for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Decoded events handed to the dispatcher.
    pub received: u64,
    /// Listener callbacks invoked.
    pub delivered: u64,
    /// Replies dropped by classification.
    pub suppressed: u64,
    /// Records dropped as unrecognized.
    pub unrecognized: u64,
    /// Malformed records reported through `on_exception`.
    pub exceptions: u64,
    /// Deletion notices delivered without their author profile.
    pub lookup_failures: u64,
}

/// Drives one stream session.
pub struct Dispatcher<L> {
    config: SessionConfig,
    state: RelationshipState,
    listener: L,
    lookup: Option<Arc<dyn UserLookup>>,
    phase: SessionPhase,
    stats: DispatchStats,
}

impl<L: UserStreamListener> Dispatcher<L> {
    pub fn new(config: SessionConfig, listener: L) -> Self {
        Self {
            state: RelationshipState::new(config.account_id),
            config,
            listener,
            lookup: None,
            phase: SessionPhase::Idle,
            stats: DispatchStats::default(),
        }
    }

    /// Resolve deletion notice authors through `lookup`.
    pub fn with_lookup(mut self, lookup: Arc<dyn UserLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &RelationshipState {
        &self.state
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Decode and dispatch one raw record.
    pub fn dispatch_raw(&mut self, raw: &str) {
        self.dispatch(decode(raw));
    }

    /// Dispatch every record from `records`, in order.
    pub fn drive<I, S>(&mut self, records: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in records {
            self.dispatch_raw(raw.as_ref());
        }
    }

    /// Dispatch records from a transport channel until the sender hangs up.
    pub fn run(&mut self, records: &Receiver<String>) -> DispatchStats {
        for raw in records.iter() {
            self.dispatch_raw(&raw);
        }
        info!(
            account_id = %self.config.account_id,
            received = self.stats.received,
            delivered = self.stats.delivered,
            "Stream closed"
        );
        self.stats
    }

    /// Dispatch one decoded event.
    pub fn dispatch(&mut self, event: Event) {
        if self.phase == SessionPhase::Idle {
            self.phase = SessionPhase::Streaming;
            debug!(account_id = %self.config.account_id, "Session streaming");
        }
        self.stats.received += 1;
        trace!(kind = event.kind(), "Dispatching event");

        // State first: classification of this and later events must see it.
        self.apply_relationships(&event);

        let listener = &mut self.listener;
        match event {
            Event::StatusPosted(status) => {
                let mut label = None;
                if status.reply_target().is_some() {
                    let outcome = classify(
                        &status,
                        self.config.account_id,
                        &self.state,
                        &self.config.visibility,
                    );
                    if outcome == ClassificationOutcome::Suppress {
                        self.stats.suppressed += 1;
                        debug!(
                            status_id = %status.id,
                            author_id = %status.author_id(),
                            "Suppressed reply"
                        );
                        return;
                    }
                    label = outcome.label();
                }
                listener.on_status(&status, label);
            }
            Event::DirectMessage(message) => listener.on_direct_message(&message),
            Event::FriendsList { friend_ids } => listener.on_friend_list(&friend_ids),
            Event::StatusDeletion(notice) => {
                let author = self.resolve_author(notice.user_id);
                self.listener.on_status_deletion(&notice, author.as_ref());
            }
            Event::DirectMessageDeletion(notice) => listener.on_direct_message_deletion(&notice),
            Event::Favorite {
                source,
                target,
                status,
            } => listener.on_favorite(&source, &target, &status),
            Event::Unfavorite {
                source,
                target,
                status,
            } => listener.on_unfavorite(&source, &target, &status),
            Event::Retweet {
                source,
                target,
                status,
            } => listener.on_retweet(&source, &target, &status),
            Event::Follow { source, target } => listener.on_follow(&source, &target),
            Event::Unfollow { source, target } => listener.on_unfollow(&source, &target),
            Event::Block { source, target } => listener.on_block(&source, &target),
            Event::Unblock { source, target } => listener.on_unblock(&source, &target),
            Event::ListCreated { owner, list } => listener.on_user_list_creation(&owner, &list),
            Event::ListDestroyed { owner, list } => listener.on_user_list_deletion(&owner, &list),
            Event::ListUpdated { owner, list } => listener.on_user_list_update(&owner, &list),
            Event::ListSubscribed {
                subscriber,
                owner,
                list,
            } => listener.on_user_list_subscription(&subscriber, &owner, &list),
            Event::ListUnsubscribed {
                subscriber,
                owner,
                list,
            } => listener.on_user_list_unsubscription(&subscriber, &owner, &list),
            Event::ListMemberAdded {
                member,
                owner,
                list,
            } => listener.on_user_list_member_addition(&member, &owner, &list),
            Event::ListMemberRemoved {
                member,
                owner,
                list,
            } => listener.on_user_list_member_deletion(&member, &owner, &list),
            Event::ScrubGeo {
                user_id,
                up_to_status_id,
            } => listener.on_scrub_geo(user_id, up_to_status_id),
            Event::TrackLimitation { limited } => listener.on_track_limitation_notice(limited),
            Event::UserProfileUpdate(user) => {
                if let Some(lookup) = &self.lookup {
                    lookup.invalidate(user.id);
                }
                listener.on_user_profile_update(&user);
            }
            Event::StreamException { cause } => {
                self.stats.exceptions += 1;
                warn!(error = %cause, "Malformed stream record");
                listener.on_exception(&cause);
            }
            Event::Unrecognized { raw } => {
                self.stats.unrecognized += 1;
                trace!(bytes = raw.len(), "Dropped unrecognized record");
                return;
            }
        }

        self.stats.delivered += 1;
    }

    fn apply_relationships(&mut self, event: &Event) {
        match event {
            Event::FriendsList { friend_ids } => {
                self.state.replace_friends(friend_ids.iter().copied());
                info!(
                    account_id = %self.config.account_id,
                    following = friend_ids.len(),
                    "Received friends list"
                );
            }
            Event::Follow { source, target } => self.state.apply_follow(source.id, target.id),
            Event::Unfollow { source, target } => self.state.apply_unfollow(source.id, target.id),
            _ => {}
        }
    }

    fn resolve_author(&mut self, user_id: UserId) -> Option<User> {
        let lookup = self.lookup.as_ref()?;
        match lookup.show_user(user_id) {
            Ok(user) => Some(user),
            Err(e) => {
                self.stats.lookup_failures += 1;
                warn!(user_id = %user_id, error = %e, "User lookup failed");
                None
            }
        }
    }
}

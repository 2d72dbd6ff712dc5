//! Observer surface for stream events.

use crate::classify::ReplyLabel;
use crate::error::StreamError;
use crate::types::{
    DirectMessage, DirectMessageDeletionNotice, Status, StatusDeletionNotice, StatusId, User,
    UserId, UserList,
};

/// Callbacks invoked by the dispatcher, one per event kind.
///
/// Every method defaults to a no-op, so an implementation only overrides
/// the events it cares about. Callbacks run inline on the dispatch loop and
/// block it until they return.
#[allow(unused_variables)]
pub trait UserStreamListener {
    /// A status was posted. `label` is set for replies that cross the follow boundary.
    fn on_status(&mut self, status: &Status, label: Option<ReplyLabel>) {}

    fn on_direct_message(&mut self, message: &DirectMessage) {}

    fn on_friend_list(&mut self, friend_ids: &[UserId]) {}

    /// A status was deleted. `author` is present when the lookup collaborator
    /// resolved the deleting account.
    fn on_status_deletion(&mut self, notice: &StatusDeletionNotice, author: Option<&User>) {}

    fn on_direct_message_deletion(&mut self, notice: &DirectMessageDeletionNotice) {}

    fn on_favorite(&mut self, source: &User, target: &User, status: &Status) {}

    fn on_unfavorite(&mut self, source: &User, target: &User, status: &Status) {}

    fn on_retweet(&mut self, source: &User, target: &User, status: &Status) {}

    fn on_follow(&mut self, source: &User, target: &User) {}

    fn on_unfollow(&mut self, source: &User, target: &User) {}

    fn on_block(&mut self, source: &User, target: &User) {}

    fn on_unblock(&mut self, source: &User, target: &User) {}

    fn on_user_list_creation(&mut self, owner: &User, list: &UserList) {}

    fn on_user_list_deletion(&mut self, owner: &User, list: &UserList) {}

    fn on_user_list_update(&mut self, owner: &User, list: &UserList) {}

    fn on_user_list_subscription(&mut self, subscriber: &User, owner: &User, list: &UserList) {}

    fn on_user_list_unsubscription(&mut self, subscriber: &User, owner: &User, list: &UserList) {}

    fn on_user_list_member_addition(&mut self, member: &User, owner: &User, list: &UserList) {}

    fn on_user_list_member_deletion(&mut self, member: &User, owner: &User, list: &UserList) {}

    /// Location data must be removed from `user_id`'s statuses up to `up_to_status_id`.
    fn on_scrub_geo(&mut self, user_id: UserId, up_to_status_id: StatusId) {}

    fn on_track_limitation_notice(&mut self, limited: u64) {}

    fn on_user_profile_update(&mut self, user: &User) {}

    /// A record could not be decoded. The stream keeps running.
    fn on_exception(&mut self, error: &StreamError) {}
}

impl<L: UserStreamListener + ?Sized> UserStreamListener for Box<L> {
    fn on_status(&mut self, status: &Status, label: Option<ReplyLabel>) {
        (**self).on_status(status, label)
    }

    fn on_direct_message(&mut self, message: &DirectMessage) {
        (**self).on_direct_message(message)
    }

    fn on_friend_list(&mut self, friend_ids: &[UserId]) {
        (**self).on_friend_list(friend_ids)
    }

    fn on_status_deletion(&mut self, notice: &StatusDeletionNotice, author: Option<&User>) {
        (**self).on_status_deletion(notice, author)
    }

    fn on_direct_message_deletion(&mut self, notice: &DirectMessageDeletionNotice) {
        (**self).on_direct_message_deletion(notice)
    }

    fn on_favorite(&mut self, source: &User, target: &User, status: &Status) {
        (**self).on_favorite(source, target, status)
    }

    fn on_unfavorite(&mut self, source: &User, target: &User, status: &Status) {
        (**self).on_unfavorite(source, target, status)
    }

    fn on_retweet(&mut self, source: &User, target: &User, status: &Status) {
        (**self).on_retweet(source, target, status)
    }

    fn on_follow(&mut self, source: &User, target: &User) {
        (**self).on_follow(source, target)
    }

    fn on_unfollow(&mut self, source: &User, target: &User) {
        (**self).on_unfollow(source, target)
    }

    fn on_block(&mut self, source: &User, target: &User) {
        (**self).on_block(source, target)
    }

    fn on_unblock(&mut self, source: &User, target: &User) {
        (**self).on_unblock(source, target)
    }

    fn on_user_list_creation(&mut self, owner: &User, list: &UserList) {
        (**self).on_user_list_creation(owner, list)
    }

    fn on_user_list_deletion(&mut self, owner: &User, list: &UserList) {
        (**self).on_user_list_deletion(owner, list)
    }

    fn on_user_list_update(&mut self, owner: &User, list: &UserList) {
        (**self).on_user_list_update(owner, list)
    }

    fn on_user_list_subscription(&mut self, subscriber: &User, owner: &User, list: &UserList) {
        (**self).on_user_list_subscription(subscriber, owner, list)
    }

    fn on_user_list_unsubscription(&mut self, subscriber: &User, owner: &User, list: &UserList) {
        (**self).on_user_list_unsubscription(subscriber, owner, list)
    }

    fn on_user_list_member_addition(&mut self, member: &User, owner: &User, list: &UserList) {
        (**self).on_user_list_member_addition(member, owner, list)
    }

    fn on_user_list_member_deletion(&mut self, member: &User, owner: &User, list: &UserList) {
        (**self).on_user_list_member_deletion(member, owner, list)
    }

    fn on_scrub_geo(&mut self, user_id: UserId, up_to_status_id: StatusId) {
        (**self).on_scrub_geo(user_id, up_to_status_id)
    }

    fn on_track_limitation_notice(&mut self, limited: u64) {
        (**self).on_track_limitation_notice(limited)
    }

    fn on_user_profile_update(&mut self, user: &User) {
        (**self).on_user_profile_update(user)
    }

    fn on_exception(&mut self, error: &StreamError) {
        (**self).on_exception(error)
    }
}

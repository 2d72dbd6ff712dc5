//! Shared helpers for integration tests.

#![allow(dead_code)]

use userstream::{
    DirectMessage, DirectMessageDeletionNotice, ListId, MessageId, ReplyLabel, Status,
    StatusDeletionNotice, StatusId, StreamError, User, UserId, UserList, UserStreamListener,
};

/// One observed listener callback, with its arguments in callback order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Status(StatusId, Option<ReplyLabel>),
    /// (message, sender, recipient)
    DirectMessage(MessageId, UserId, UserId),
    FriendList(usize),
    /// (status, resolved author name)
    Deletion(StatusId, Option<String>),
    DirectMessageDeletion(MessageId, UserId),
    /// (source, target, status)
    Favorite(UserId, UserId, StatusId),
    Unfavorite(UserId, UserId, StatusId),
    Retweet(UserId, UserId, StatusId),
    Follow(UserId, UserId),
    Unfollow(UserId, UserId),
    Block(UserId, UserId),
    Unblock(UserId, UserId),
    /// (owner, list)
    ListCreated(UserId, ListId),
    ListDestroyed(UserId, ListId),
    ListUpdated(UserId, ListId),
    /// (subscriber, owner, list)
    ListSubscribed(UserId, UserId, ListId),
    ListUnsubscribed(UserId, UserId, ListId),
    /// (member, owner, list)
    ListMemberAdded(UserId, UserId, ListId),
    ListMemberRemoved(UserId, UserId, ListId),
    ScrubGeo(UserId, StatusId),
    TrackLimitation(u64),
    ProfileUpdate(UserId, String),
    Exception(String),
}

/// Records every callback in order.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl UserStreamListener for Recorder {
    fn on_status(&mut self, status: &Status, label: Option<ReplyLabel>) {
        self.calls.push(Call::Status(status.id, label));
    }

    fn on_direct_message(&mut self, message: &DirectMessage) {
        self.calls.push(Call::DirectMessage(
            message.id,
            message.sender.id,
            message.recipient.id,
        ));
    }

    fn on_friend_list(&mut self, friend_ids: &[UserId]) {
        self.calls.push(Call::FriendList(friend_ids.len()));
    }

    fn on_status_deletion(&mut self, notice: &StatusDeletionNotice, author: Option<&User>) {
        self.calls.push(Call::Deletion(
            notice.status_id,
            author.map(|u| u.name.clone()),
        ));
    }

    fn on_direct_message_deletion(&mut self, notice: &DirectMessageDeletionNotice) {
        self.calls
            .push(Call::DirectMessageDeletion(notice.message_id, notice.user_id));
    }

    fn on_favorite(&mut self, source: &User, target: &User, status: &Status) {
        self.calls.push(Call::Favorite(source.id, target.id, status.id));
    }

    fn on_unfavorite(&mut self, source: &User, target: &User, status: &Status) {
        self.calls.push(Call::Unfavorite(source.id, target.id, status.id));
    }

    fn on_retweet(&mut self, source: &User, target: &User, status: &Status) {
        self.calls.push(Call::Retweet(source.id, target.id, status.id));
    }

    fn on_follow(&mut self, source: &User, target: &User) {
        self.calls.push(Call::Follow(source.id, target.id));
    }

    fn on_unfollow(&mut self, source: &User, target: &User) {
        self.calls.push(Call::Unfollow(source.id, target.id));
    }

    fn on_block(&mut self, source: &User, target: &User) {
        self.calls.push(Call::Block(source.id, target.id));
    }

    fn on_unblock(&mut self, source: &User, target: &User) {
        self.calls.push(Call::Unblock(source.id, target.id));
    }

    fn on_user_list_creation(&mut self, owner: &User, list: &UserList) {
        self.calls.push(Call::ListCreated(owner.id, list.id));
    }

    fn on_user_list_deletion(&mut self, owner: &User, list: &UserList) {
        self.calls.push(Call::ListDestroyed(owner.id, list.id));
    }

    fn on_user_list_update(&mut self, owner: &User, list: &UserList) {
        self.calls.push(Call::ListUpdated(owner.id, list.id));
    }

    fn on_user_list_subscription(&mut self, subscriber: &User, owner: &User, list: &UserList) {
        self.calls
            .push(Call::ListSubscribed(subscriber.id, owner.id, list.id));
    }

    fn on_user_list_unsubscription(&mut self, subscriber: &User, owner: &User, list: &UserList) {
        self.calls
            .push(Call::ListUnsubscribed(subscriber.id, owner.id, list.id));
    }

    fn on_user_list_member_addition(&mut self, member: &User, owner: &User, list: &UserList) {
        self.calls
            .push(Call::ListMemberAdded(member.id, owner.id, list.id));
    }

    fn on_user_list_member_deletion(&mut self, member: &User, owner: &User, list: &UserList) {
        self.calls
            .push(Call::ListMemberRemoved(member.id, owner.id, list.id));
    }

    fn on_scrub_geo(&mut self, user_id: UserId, up_to_status_id: StatusId) {
        self.calls.push(Call::ScrubGeo(user_id, up_to_status_id));
    }

    fn on_track_limitation_notice(&mut self, limited: u64) {
        self.calls.push(Call::TrackLimitation(limited));
    }

    fn on_user_profile_update(&mut self, user: &User) {
        self.calls
            .push(Call::ProfileUpdate(user.id, user.screen_name.clone()));
    }

    fn on_exception(&mut self, error: &StreamError) {
        self.calls.push(Call::Exception(error.to_string()));
    }
}

pub fn user_json(id: i64) -> String {
    format!(r#"{{"id": {id}, "id_str": "{id}", "name": "User {id}", "screen_name": "user{id}"}}"#)
}

pub fn status_json(id: i64, author: i64, reply_to: Option<i64>) -> String {
    let reply = reply_to.map_or("null".to_string(), |r| r.to_string());
    format!(
        r#"{{"id": {id}, "text": "status {id}", "user": {}, "in_reply_to_user_id": {reply}, "favorited": false}}"#,
        user_json(author)
    )
}

pub fn friends_json(ids: &[i64]) -> String {
    let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!(r#"{{"friends": [{}]}}"#, ids.join(","))
}

pub fn user_event_json(event: &str, source: i64, target: i64) -> String {
    format!(
        r#"{{"event": "{event}", "source": {}, "target": {}, "created_at": "Sat Sep 04 16:10:54 +0000 2010"}}"#,
        user_json(source),
        user_json(target)
    )
}

/// A user-pair event whose `target_object` is a status.
pub fn status_event_json(event: &str, source: i64, target: i64, status_id: i64) -> String {
    format!(
        r#"{{"event": "{event}", "source": {}, "target": {}, "target_object": {}}}"#,
        user_json(source),
        user_json(target),
        status_json(status_id, target, None)
    )
}

/// A user-pair event whose `target_object` is a list.
pub fn list_event_json(event: &str, source: i64, target: i64, list_id: i64) -> String {
    format!(
        r#"{{"event": "{event}", "source": {}, "target": {}, "target_object": {{"id": {list_id}, "name": "list{list_id}", "full_name": "@user{source}/list{list_id}"}}}}"#,
        user_json(source),
        user_json(target)
    )
}

/// Route crate logs to the test harness output. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

//! The event model.

use crate::error::StreamError;
use crate::types::{
    DirectMessage, DirectMessageDeletionNotice, Status, StatusDeletionNotice, StatusId, User,
    UserId, UserList,
};

/// One decoded unit of stream activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    // --- Content ---
    StatusPosted(Status),
    DirectMessage(DirectMessage),

    /// Full follow-set of the session account. Sent once near connection start.
    FriendsList {
        friend_ids: Vec<UserId>,
    },

    StatusDeletion(StatusDeletionNotice),
    DirectMessageDeletion(DirectMessageDeletionNotice),

    // --- User-pair events ---
    Favorite {
        source: User,
        target: User,
        status: Status,
    },
    Unfavorite {
        source: User,
        target: User,
        status: Status,
    },
    Retweet {
        source: User,
        target: User,
        status: Status,
    },
    Follow {
        source: User,
        target: User,
    },
    Unfollow {
        source: User,
        target: User,
    },
    Block {
        source: User,
        target: User,
    },
    Unblock {
        source: User,
        target: User,
    },

    // --- List events ---
    ListCreated {
        owner: User,
        list: UserList,
    },
    ListDestroyed {
        owner: User,
        list: UserList,
    },
    ListUpdated {
        owner: User,
        list: UserList,
    },
    ListSubscribed {
        subscriber: User,
        owner: User,
        list: UserList,
    },
    ListUnsubscribed {
        subscriber: User,
        owner: User,
        list: UserList,
    },
    ListMemberAdded {
        member: User,
        owner: User,
        list: UserList,
    },
    ListMemberRemoved {
        member: User,
        owner: User,
        list: UserList,
    },

    // --- Notices ---
    ScrubGeo {
        user_id: UserId,
        up_to_status_id: StatusId,
    },
    /// Number of statuses withheld because a track filter matched too much.
    TrackLimitation {
        limited: u64,
    },
    UserProfileUpdate(User),

    /// A recognized record that could not be decoded.
    StreamException {
        cause: StreamError,
    },

    /// A record the decoder does not understand. Dropped by the dispatcher.
    Unrecognized {
        raw: String,
    },
}

impl Event {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::StatusPosted(_) => "status",
            Event::DirectMessage(_) => "direct_message",
            Event::FriendsList { .. } => "friends",
            Event::StatusDeletion(_) => "status_deletion",
            Event::DirectMessageDeletion(_) => "direct_message_deletion",
            Event::Favorite { .. } => "favorite",
            Event::Unfavorite { .. } => "unfavorite",
            Event::Retweet { .. } => "retweet",
            Event::Follow { .. } => "follow",
            Event::Unfollow { .. } => "unfollow",
            Event::Block { .. } => "block",
            Event::Unblock { .. } => "unblock",
            Event::ListCreated { .. } => "list_created",
            Event::ListDestroyed { .. } => "list_destroyed",
            Event::ListUpdated { .. } => "list_updated",
            Event::ListSubscribed { .. } => "list_user_subscribed",
            Event::ListUnsubscribed { .. } => "list_user_unsubscribed",
            Event::ListMemberAdded { .. } => "list_member_added",
            Event::ListMemberRemoved { .. } => "list_member_removed",
            Event::ScrubGeo { .. } => "scrub_geo",
            Event::TrackLimitation { .. } => "limit",
            Event::UserProfileUpdate(_) => "user_update",
            Event::StreamException { .. } => "exception",
            Event::Unrecognized { .. } => "unrecognized",
        }
    }
}

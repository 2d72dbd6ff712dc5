//! Core identifier and payload types carried by stream events.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// True for ids the service actually assigns (strictly positive).
            pub fn is_assigned(self) -> bool {
                self.0 > 0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                $name(id)
            }
        }
    };
}

id_type!(
    /// Account identifier.
    UserId,
    "UserId"
);
id_type!(
    /// Status (tweet) identifier.
    StatusId,
    "StatusId"
);
id_type!(
    /// Direct message identifier.
    MessageId,
    "MessageId"
);
id_type!(
    /// User list identifier.
    ListId,
    "ListId"
);

/// Public profile of an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    pub screen_name: String,
}

/// A posted status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub user: User,
    pub text: String,
    #[serde(default)]
    pub in_reply_to_user_id: Option<UserId>,
    #[serde(default)]
    pub in_reply_to_status_id: Option<StatusId>,
}

impl Status {
    pub fn author_id(&self) -> UserId {
        self.user.id
    }

    /// The account this status replies to, if it is a reply.
    ///
    /// A missing or non-positive target means the status is not a reply.
    pub fn reply_target(&self) -> Option<UserId> {
        self.in_reply_to_user_id.filter(|id| id.is_assigned())
    }

    /// Public link to the status on the service's website.
    pub fn url(&self) -> String {
        format!(
            "https://twitter.com/{}/status/{}",
            self.user.screen_name, self.id
        )
    }
}

/// A direct message between two accounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessage {
    pub id: MessageId,
    pub sender: User,
    pub recipient: User,
    pub text: String,
}

/// A curated list of accounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserList {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub description: String,
}

/// Notice that a status was deleted by its author.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDeletionNotice {
    #[serde(rename = "id")]
    pub status_id: StatusId,
    pub user_id: UserId,
}

/// Notice that a direct message was deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessageDeletionNotice {
    #[serde(rename = "id")]
    pub message_id: MessageId,
    pub user_id: UserId,
}

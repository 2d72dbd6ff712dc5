//! Wire decoder for user-stream records.
//!
//! Records are JSON objects delimited by newlines. The record kind is not
//! tagged explicitly; it is inferred from which top-level keys are present.

use super::types::Event;
use crate::error::{Result, StreamError};
use crate::types::{
    DirectMessageDeletionNotice, Status, StatusDeletionNotice, StatusId, User, UserId, UserList,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::trace;

/// Decode one raw record.
///
/// Never fails: see the module docs for how bad input is reported.
pub fn decode(raw: &str) -> Event {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        trace!("keep-alive line");
        return unrecognized(raw);
    }

    let map = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            trace!("non-object record");
            return unrecognized(raw);
        }
        Err(e) => {
            trace!(error = %e, "unparsable record");
            return unrecognized(raw);
        }
    };

    match decode_object(map) {
        Ok(Some(event)) => event,
        Ok(None) => unrecognized(raw),
        Err(cause) => Event::StreamException { cause },
    }
}

fn unrecognized(raw: &str) -> Event {
    Event::Unrecognized {
        raw: raw.to_string(),
    }
}

#[derive(Deserialize)]
struct DeletionFields {
    #[serde(default)]
    status: Option<StatusDeletionNotice>,
    #[serde(default)]
    direct_message: Option<DirectMessageDeletionNotice>,
}

#[derive(Deserialize)]
struct ScrubGeoFields {
    user_id: UserId,
    up_to_status_id: StatusId,
}

#[derive(Deserialize)]
struct LimitFields {
    track: u64,
}

#[derive(Deserialize)]
struct UserEventFields {
    source: User,
    target: User,
    #[serde(default)]
    target_object: Option<Value>,
}

/// `event` names with a typed counterpart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UserEventKind {
    Favorite,
    Unfavorite,
    Retweet,
    Follow,
    Unfollow,
    Block,
    Unblock,
    ListCreated,
    ListDestroyed,
    ListUpdated,
    ListSubscribed,
    ListUnsubscribed,
    ListMemberAdded,
    ListMemberRemoved,
    UserUpdate,
}

impl UserEventKind {
    const ALL: [UserEventKind; 15] = [
        UserEventKind::Favorite,
        UserEventKind::Unfavorite,
        UserEventKind::Retweet,
        UserEventKind::Follow,
        UserEventKind::Unfollow,
        UserEventKind::Block,
        UserEventKind::Unblock,
        UserEventKind::ListCreated,
        UserEventKind::ListDestroyed,
        UserEventKind::ListUpdated,
        UserEventKind::ListSubscribed,
        UserEventKind::ListUnsubscribed,
        UserEventKind::ListMemberAdded,
        UserEventKind::ListMemberRemoved,
        UserEventKind::UserUpdate,
    ];

    fn as_str(self) -> &'static str {
        match self {
            UserEventKind::Favorite => "favorite",
            UserEventKind::Unfavorite => "unfavorite",
            UserEventKind::Retweet => "retweet",
            UserEventKind::Follow => "follow",
            UserEventKind::Unfollow => "unfollow",
            UserEventKind::Block => "block",
            UserEventKind::Unblock => "unblock",
            UserEventKind::ListCreated => "list_created",
            UserEventKind::ListDestroyed => "list_destroyed",
            UserEventKind::ListUpdated => "list_updated",
            UserEventKind::ListSubscribed => "list_user_subscribed",
            UserEventKind::ListUnsubscribed => "list_user_unsubscribed",
            UserEventKind::ListMemberAdded => "list_member_added",
            UserEventKind::ListMemberRemoved => "list_member_removed",
            UserEventKind::UserUpdate => "user_update",
        }
    }

    fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

fn parse<T: DeserializeOwned>(kind: &'static str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| StreamError::decode(kind, e.to_string()))
}

fn decode_object(mut map: Map<String, Value>) -> Result<Option<Event>> {
    if let Some(ids) = map.remove("friends") {
        let friend_ids = parse("friends", ids)?;
        return Ok(Some(Event::FriendsList { friend_ids }));
    }

    if let Some(ids) = map.remove("friends_str") {
        let raw_ids: Vec<String> = parse("friends", ids)?;
        let friend_ids = raw_ids
            .iter()
            .map(|s| {
                s.parse::<i64>()
                    .map(UserId)
                    .map_err(|e| StreamError::decode("friends", format!("bad id {s:?}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        return Ok(Some(Event::FriendsList { friend_ids }));
    }

    if let Some(delete) = map.remove("delete") {
        return decode_deletion(delete).map(Some);
    }

    if let Some(dm) = map.remove("direct_message") {
        return Ok(Some(Event::DirectMessage(parse("direct_message", dm)?)));
    }

    if let Some(scrub) = map.remove("scrub_geo") {
        let fields: ScrubGeoFields = parse("scrub_geo", scrub)?;
        return Ok(Some(Event::ScrubGeo {
            user_id: fields.user_id,
            up_to_status_id: fields.up_to_status_id,
        }));
    }

    if let Some(limit) = map.remove("limit") {
        let fields: LimitFields = parse("limit", limit)?;
        return Ok(Some(Event::TrackLimitation {
            limited: fields.track,
        }));
    }

    if let Some(name) = map.get("event") {
        let name = name
            .as_str()
            .ok_or_else(|| StreamError::decode("event", "event name is not a string"))?;
        let Some(kind) = UserEventKind::from_wire(name) else {
            trace!(event = name, "unknown event name");
            return Ok(None);
        };
        return decode_user_event(kind, map).map(Some);
    }

    if map.contains_key("text") && map.contains_key("user") {
        let status: Status = parse("status", Value::Object(map))?;
        return Ok(Some(Event::StatusPosted(status)));
    }

    Ok(None)
}

fn decode_deletion(value: Value) -> Result<Event> {
    let fields: DeletionFields = parse("delete", value)?;
    match (fields.status, fields.direct_message) {
        (Some(notice), _) => Ok(Event::StatusDeletion(notice)),
        (None, Some(notice)) => Ok(Event::DirectMessageDeletion(notice)),
        (None, None) => Err(StreamError::decode(
            "delete",
            "neither status nor direct_message present",
        )),
    }
}

fn target_object<T: DeserializeOwned>(kind: UserEventKind, object: Option<Value>) -> Result<T> {
    let object =
        object.ok_or_else(|| StreamError::decode(kind.as_str(), "missing target_object"))?;
    parse(kind.as_str(), object)
}

fn decode_user_event(kind: UserEventKind, map: Map<String, Value>) -> Result<Event> {
    let UserEventFields {
        source,
        target,
        target_object: object,
    } = parse(kind.as_str(), Value::Object(map))?;

    let event = match kind {
        UserEventKind::Favorite => Event::Favorite {
            status: target_object::<Status>(kind, object)?,
            source,
            target,
        },
        UserEventKind::Unfavorite => Event::Unfavorite {
            status: target_object::<Status>(kind, object)?,
            source,
            target,
        },
        UserEventKind::Retweet => Event::Retweet {
            status: target_object::<Status>(kind, object)?,
            source,
            target,
        },
        UserEventKind::Follow => Event::Follow { source, target },
        UserEventKind::Unfollow => Event::Unfollow { source, target },
        UserEventKind::Block => Event::Block { source, target },
        UserEventKind::Unblock => Event::Unblock { source, target },
        UserEventKind::ListCreated => Event::ListCreated {
            list: target_object::<UserList>(kind, object)?,
            owner: source,
        },
        UserEventKind::ListDestroyed => Event::ListDestroyed {
            list: target_object::<UserList>(kind, object)?,
            owner: source,
        },
        UserEventKind::ListUpdated => Event::ListUpdated {
            list: target_object::<UserList>(kind, object)?,
            owner: source,
        },
        // Subscriptions: the subscriber is the source, the list owner the target.
        UserEventKind::ListSubscribed => Event::ListSubscribed {
            list: target_object::<UserList>(kind, object)?,
            subscriber: source,
            owner: target,
        },
        UserEventKind::ListUnsubscribed => Event::ListUnsubscribed {
            list: target_object::<UserList>(kind, object)?,
            subscriber: source,
            owner: target,
        },
        // Membership: the owner is the source, the member the target.
        UserEventKind::ListMemberAdded => Event::ListMemberAdded {
            list: target_object::<UserList>(kind, object)?,
            member: target,
            owner: source,
        },
        UserEventKind::ListMemberRemoved => Event::ListMemberRemoved {
            list: target_object::<UserList>(kind, object)?,
            member: target,
            owner: source,
        },
        UserEventKind::UserUpdate => Event::UserProfileUpdate(source),
    };

    Ok(event)
}

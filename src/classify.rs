//! Reply visibility classification.
//!
//! A reply is either between the session account and someone else, among
//! accounts the session follows, or it crosses the follow boundary. Only the
//! last kind can be hidden, and only boundary-crossing replies get a label.

use crate::config::VisibilityConfig;
use crate::state::RelationshipState;
use crate::types::{Status, UserId};
use std::fmt;

/// Label attached to a reply that crosses the follow boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReplyLabel {
    /// From a followed account to one the session does not follow.
    ToStranger,
    /// From an account the session does not follow.
    FromStranger,
}

impl fmt::Display for ReplyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyLabel::ToStranger => f.write_str("[To stranger]"),
            ReplyLabel::FromStranger => f.write_str("[From stranger]"),
        }
    }
}

/// Result of classifying a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassificationOutcome {
    /// Do not deliver the status at all.
    Suppress,
    ShowPlain,
    ShowLabeled(ReplyLabel),
}

impl ClassificationOutcome {
    /// Label to hand to the listener, if the status is delivered with one.
    pub fn label(self) -> Option<ReplyLabel> {
        match self {
            ClassificationOutcome::ShowLabeled(label) => Some(label),
            _ => None,
        }
    }
}

/// Classify a reply against the current follow-set.
///
/// Statuses that are not replies (no positive reply target) are always
/// `ShowPlain`; the dispatcher does not call this for them.
pub fn classify(
    status: &Status,
    account_id: UserId,
    state: &RelationshipState,
    config: &VisibilityConfig,
) -> ClassificationOutcome {
    use ClassificationOutcome::*;

    let Some(reply_target) = status.reply_target() else {
        return ShowPlain;
    };
    let author = status.author_id();

    if reply_target == account_id {
        return if state.is_friend(author) {
            ShowPlain
        } else {
            ShowLabeled(ReplyLabel::FromStranger)
        };
    }

    if state.is_friend(author) {
        if state.is_friend(reply_target) {
            ShowPlain
        } else if config.show_replies_from_non_followed {
            ShowLabeled(ReplyLabel::ToStranger)
        } else {
            Suppress
        }
    } else if author != account_id {
        if config.show_replies_to_non_followed {
            ShowLabeled(ReplyLabel::FromStranger)
        } else {
            Suppress
        }
    } else {
        // The session account replying to someone else.
        ShowPlain
    }
}

//! Line-oriented listener that prints a human readable activity feed.

use crate::classify::ReplyLabel;
use crate::config::SessionConfig;
use crate::error::StreamError;
use crate::listener::UserStreamListener;
use crate::types::{
    DirectMessage, DirectMessageDeletionNotice, Status, StatusDeletionNotice, StatusId, User,
    UserId, UserList,
};
use std::fmt;
use std::io::{self, Write};
use tracing::warn;

/// Display form used in every line: `Name [screen_name]`.
struct Who<'a>(&'a User);

impl fmt::Display for Who<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.0.name, self.0.screen_name)
    }
}

struct ListName<'a>(&'a UserList);

impl fmt::Display for ListName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.0.name, self.0.full_name)
    }
}

/// Writes one line per event to `out`.
pub struct ConsoleListener<W> {
    out: W,
    show_status_urls: bool,
}

impl ConsoleListener<io::Stdout> {
    pub fn stdout(show_status_urls: bool) -> Self {
        Self::new(io::stdout(), show_status_urls)
    }
}

impl<W: Write> ConsoleListener<W> {
    pub fn new(out: W, show_status_urls: bool) -> Self {
        Self {
            out,
            show_status_urls,
        }
    }

    /// Build a listener using the session's output settings.
    pub fn from_config(out: W, config: &SessionConfig) -> Self {
        Self::new(out, config.show_status_urls)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{args}") {
            warn!(error = %e, "Failed to write stream line");
        }
    }
}

impl<W: Write> UserStreamListener for ConsoleListener<W> {
    fn on_status(&mut self, status: &Status, label: Option<ReplyLabel>) {
        let prefix = label.map(|l| format!("{l} ")).unwrap_or_default();
        if self.show_status_urls {
            self.line(format_args!(
                "{prefix}{} : {} - link: {}",
                Who(&status.user),
                status.text,
                status.url()
            ));
        } else {
            self.line(format_args!("{prefix}{} : {}", Who(&status.user), status.text));
        }
    }

    fn on_direct_message(&mut self, message: &DirectMessage) {
        self.line(format_args!(
            "DM from {} to {}: {}",
            message.sender.screen_name, message.recipient.screen_name, message.text
        ));
    }

    fn on_friend_list(&mut self, friend_ids: &[UserId]) {
        self.line(format_args!(
            "Received friends list - Following {} people",
            friend_ids.len()
        ));
    }

    fn on_status_deletion(&mut self, notice: &StatusDeletionNotice, author: Option<&User>) {
        match author {
            Some(user) => self.line(format_args!(
                "{} deleted the tweet {}",
                Who(user),
                notice.status_id
            )),
            None => self.line(format_args!(
                "User {} deleted the tweet {}",
                notice.user_id, notice.status_id
            )),
        }
    }

    fn on_direct_message_deletion(&mut self, notice: &DirectMessageDeletionNotice) {
        self.line(format_args!(
            "Got a direct message deletion notice id:{}",
            notice.message_id
        ));
    }

    fn on_favorite(&mut self, source: &User, target: &User, status: &Status) {
        self.line(format_args!(
            "{} favorited {}'s tweet: {}",
            Who(source),
            Who(target),
            status.text
        ));
    }

    fn on_unfavorite(&mut self, source: &User, target: &User, status: &Status) {
        self.line(format_args!(
            "{} unfavorited {}'s tweet: {}",
            Who(source),
            Who(target),
            status.text
        ));
    }

    fn on_follow(&mut self, source: &User, target: &User) {
        self.line(format_args!("{} started following {}", Who(source), Who(target)));
    }

    fn on_unfollow(&mut self, source: &User, target: &User) {
        self.line(format_args!("{} unfollowed {}", Who(source), Who(target)));
    }

    fn on_block(&mut self, source: &User, target: &User) {
        self.line(format_args!("{} blocked {}", Who(source), Who(target)));
    }

    fn on_unblock(&mut self, source: &User, target: &User) {
        self.line(format_args!("{} unblocked {}", Who(source), Who(target)));
    }

    fn on_user_list_creation(&mut self, owner: &User, list: &UserList) {
        self.line(format_args!("{} created list: {}", Who(owner), ListName(list)));
    }

    fn on_user_list_deletion(&mut self, owner: &User, list: &UserList) {
        self.line(format_args!("{} destroyed list: {}", Who(owner), ListName(list)));
    }

    fn on_user_list_update(&mut self, owner: &User, list: &UserList) {
        self.line(format_args!("{} updated list: {}", Who(owner), ListName(list)));
    }

    fn on_user_list_subscription(&mut self, subscriber: &User, owner: &User, list: &UserList) {
        self.line(format_args!(
            "{} subscribed to {}'s list: {}",
            Who(subscriber),
            Who(owner),
            ListName(list)
        ));
    }

    fn on_scrub_geo(&mut self, user_id: UserId, up_to_status_id: StatusId) {
        self.line(format_args!(
            "Got scrub_geo event userId:{user_id} upToStatusId:{up_to_status_id}"
        ));
    }

    fn on_track_limitation_notice(&mut self, limited: u64) {
        self.line(format_args!("track limitation: {limited}"));
    }

    fn on_user_profile_update(&mut self, user: &User) {
        self.line(format_args!("onUserProfileUpdated user:@{}", user.screen_name));
    }

    fn on_exception(&mut self, error: &StreamError) {
        self.line(format_args!("Stream error: {error}"));
    }
}

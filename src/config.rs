//! Session configuration.

use crate::error::{Result, StreamError};
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Which cross-boundary replies reach the listener.
///
/// Fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Show replies from followed accounts to accounts the session does not follow.
    pub show_replies_from_non_followed: bool,

    /// Show replies from accounts the session does not follow.
    pub show_replies_to_non_followed: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            show_replies_from_non_followed: true,
            show_replies_to_non_followed: false,
        }
    }
}

impl VisibilityConfig {
    /// Hide every reply that crosses the follow boundary.
    pub fn strict() -> Self {
        Self {
            show_replies_from_non_followed: false,
            show_replies_to_non_followed: false,
        }
    }

    /// Show every reply the service delivers, labeled where it crosses the boundary.
    pub fn permissive() -> Self {
        Self {
            show_replies_from_non_followed: true,
            show_replies_to_non_followed: true,
        }
    }

    /// Whether the stream must be opened with all replies enabled.
    ///
    /// By default the service only sends replies between followed accounts.
    pub fn requests_all_replies(&self) -> bool {
        self.show_replies_from_non_followed || self.show_replies_to_non_followed
    }
}

/// Configuration for one stream session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// The authenticated account the stream belongs to.
    pub account_id: UserId,

    #[serde(default)]
    pub visibility: VisibilityConfig,

    /// Append a status link to printed statuses.
    /// Default: false
    #[serde(default)]
    pub show_status_urls: bool,
}

impl SessionConfig {
    pub fn new(account_id: UserId) -> Self {
        Self {
            account_id,
            visibility: VisibilityConfig::default(),
            show_status_urls: false,
        }
    }

    pub fn with_visibility(mut self, visibility: VisibilityConfig) -> Self {
        self.visibility = visibility;
        self
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.account_id.is_assigned() {
            return Err(StreamError::Config(format!(
                "account_id must be positive, got {}",
                self.account_id
            )));
        }
        Ok(())
    }
}

//! # User Stream
//!
//! Typed decoding and stateful, ordered dispatch of social-network
//! user-stream events.
//!
//! ## Core Concepts
//!
//! - **Events**: Each raw record decodes to one typed [`Event`]
//! - **Relationships**: The session account's follow-set, built from the stream itself
//! - **Classification**: Replies are shown, labeled, or suppressed based on that follow-set
//! - **Dispatch**: One session delivers events in arrival order to a [`UserStreamListener`]
//!
//! ## Example
//!
//! ```ignore
//! use userstream::{ConsoleListener, Dispatcher, SessionConfig, UserId};
//!
//! let config = SessionConfig::from_json(r#"{"account_id": 12, "show_status_urls": true}"#)?;
//! let listener = ConsoleListener::from_config(std::io::stdout(), &config);
//! let mut session = Dispatcher::new(config, listener);
//!
//! // `records` is the receiving end of the transport's line channel.
//! session.run(&records);
//! ```

pub mod classify;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod listener;
pub mod lookup;
pub mod state;
pub mod types;

// Re-exports
pub use classify::{classify, ClassificationOutcome, ReplyLabel};
pub use config::{SessionConfig, VisibilityConfig};
pub use console::ConsoleListener;
pub use dispatch::{DispatchStats, Dispatcher, SessionPhase};
pub use error::{LookupError, Result, StreamError};
pub use events::{decode, Event};
pub use listener::UserStreamListener;
pub use lookup::{CachedLookup, UserLookup};
pub use state::RelationshipState;
pub use types::*;

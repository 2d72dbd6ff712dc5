//! Typed stream events and their wire decoder.
//!
//! Every raw record decodes to exactly one [`Event`]. Decoding never fails
//! the stream:
//! - unknown or unparsable shapes become [`Event::Unrecognized`]
//! - recognized shapes with bad fields become [`Event::StreamException`]
//!
//! # Example
//!
//! ```ignore
//! let event = decode(r#"{"friends": [2, 3]}"#);
//! assert!(matches!(event, Event::FriendsList { .. }));
//! ```

mod decode;
mod types;

pub use decode::decode;
pub use types::Event;

//! Relationship state derived from the stream.
//!
//! Only three event kinds mutate it (friends list, follow, unfollow), and
//! the dispatcher applies each mutation before classifying any later event.

mod relationships;

pub use relationships::RelationshipState;

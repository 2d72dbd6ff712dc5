//! On-demand user lookups used to enrich deletion notices.
//!
//! The lookup itself is an external collaborator (typically a REST call).
//! Failures are never fatal; the dispatcher delivers the notice without the
//! author profile.

mod cache;

pub use cache::CachedLookup;

use crate::error::LookupError;
use crate::types::{User, UserId};

/// Resolves a user id to a profile.
pub trait UserLookup: Send + Sync {
    fn show_user(&self, id: UserId) -> Result<User, LookupError>;

    /// Forget anything remembered about `id`. Called when its profile changes.
    fn invalidate(&self, _id: UserId) {}
}

impl<F> UserLookup for F
where
    F: Fn(UserId) -> Result<User, LookupError> + Send + Sync,
{
    fn show_user(&self, id: UserId) -> Result<User, LookupError> {
        self(id)
    }
}

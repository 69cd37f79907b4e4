//! Repositories for users and notes.
//!
//! Handlers only see the traits, so the in-memory [`MemoryStore`] can be
//! replaced by a real datastore without touching them.

pub mod error;
pub mod memory;
pub mod patch;

use chrono::{DateTime, Utc};
use glassdesk_types::models::{Note, User};
use uuid::Uuid;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use patch::ProfilePatch;

pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with [`StoreError::DuplicateUsername`] when the
    /// username is taken; the check and the insert happen atomically.
    fn insert_user(&self, user: User) -> Result<()>;

    fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// All users in registration order.
    fn list_users(&self) -> Result<Vec<User>>;

    /// Merge `patch` into the user's record and return the result.
    fn update_profile(&self, username: &str, patch: &ProfilePatch) -> Result<User>;
}

pub trait NoteRepository: Send + Sync {
    fn insert_note(&self, note: Note) -> Result<()>;

    /// Notes owned by `owner`, in insertion order.
    fn notes_for(&self, owner: &str) -> Result<Vec<Note>>;

    /// Replace the content of a note owned by `owner`. A note that does not
    /// exist and one owned by someone else are reported the same way.
    fn update_note(&self, owner: &str, id: Uuid, content: String, now: DateTime<Utc>)
    -> Result<Note>;

    fn delete_note(&self, owner: &str, id: Uuid) -> Result<()>;
}

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use glassdesk_types::models::{Note, User};
use tracing::debug;
use uuid::Uuid;

use crate::{NoteRepository, ProfilePatch, Result, StoreError, UserRepository};

/// Process-local store. Each collection sits behind its own mutex and every
/// mutation completes while the lock is held, so no caller ever observes a
/// half-applied change. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    notes: Mutex<Vec<Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_users<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<User>) -> Result<T>,
    {
        let mut users = self
            .users
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        f(&mut users)
    }

    fn with_notes<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Note>) -> Result<T>,
    {
        let mut notes = self
            .notes
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        f(&mut notes)
    }
}

impl UserRepository for MemoryStore {
    fn insert_user(&self, user: User) -> Result<()> {
        self.with_users(|users| {
            if users.iter().any(|u| u.username == user.username) {
                return Err(StoreError::DuplicateUsername(user.username));
            }
            debug!("Inserting user {} ({})", user.username, user.id);
            users.push(user);
            Ok(())
        })
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        self.with_users(|users| Ok(users.iter().find(|u| u.username == username).cloned()))
    }

    fn list_users(&self) -> Result<Vec<User>> {
        self.with_users(|users| Ok(users.clone()))
    }

    fn update_profile(&self, username: &str, patch: &ProfilePatch) -> Result<User> {
        self.with_users(|users| {
            let user = users
                .iter_mut()
                .find(|u| u.username == username)
                .ok_or_else(|| StoreError::UserNotFound(username.to_string()))?;
            patch.apply_to(user);
            Ok(user.clone())
        })
    }
}

impl NoteRepository for MemoryStore {
    fn insert_note(&self, note: Note) -> Result<()> {
        self.with_notes(|notes| {
            notes.push(note);
            Ok(())
        })
    }

    fn notes_for(&self, owner: &str) -> Result<Vec<Note>> {
        self.with_notes(|notes| Ok(notes.iter().filter(|n| n.user_id == owner).cloned().collect()))
    }

    fn update_note(
        &self,
        owner: &str,
        id: Uuid,
        content: String,
        now: DateTime<Utc>,
    ) -> Result<Note> {
        self.with_notes(|notes| {
            let note = notes
                .iter_mut()
                .find(|n| n.id == id && n.user_id == owner)
                .ok_or(StoreError::NoteNotFoundOrForbidden)?;
            note.content = content;
            note.updated_at = now;
            Ok(note.clone())
        })
    }

    fn delete_note(&self, owner: &str, id: Uuid) -> Result<()> {
        self.with_notes(|notes| {
            let index = notes
                .iter()
                .position(|n| n.id == id && n.user_id == owner)
                .ok_or(StoreError::NoteNotFoundOrForbidden)?;
            notes.remove(index);
            Ok(())
        })
    }
}

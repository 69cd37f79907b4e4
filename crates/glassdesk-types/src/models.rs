use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Picture shown until the user uploads their own. Sending this exact URL as the
/// `profilePicture` form value resets an uploaded picture back to it.
pub const PLACEHOLDER_PROFILE_PICTURE: &str =
    "https://tse1.mm.bing.net/th?q=profile%20pic%20blank&w=250&h=250&c=7";

/// Wallpaper bundled with the web client.
pub const DEFAULT_WALLPAPER: &str = "/Images/backgroundImage.jpeg";

pub const DEFAULT_SIDE_MENU_COLOR: &str = "rgba(255, 255, 255, 1)";

pub const DEFAULT_THEME_MODE: &str = "glass";

/// A registered account.
///
/// The password hash is serialized under `password` because the user listing
/// returns full records. See DESIGN.md (threat model) before changing that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    pub full_name: String,
    pub email: String,
    pub birth_month: String,
    pub birth_date: String,
    pub birth_year: String,
    pub gender: String,
    pub registration_date: String,
    pub profile_picture: String,
    pub wallpaper: String,
    pub side_menu_color: String,
    pub theme_mode: String,
}

/// A free-form text note owned by one user, keyed by username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub user_id: String,
    pub content: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(owner: &str, content: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: owner.to_string(),
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One entry of the built-in music catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Track {
    pub id: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub year: u16,
    pub cover: &'static str,
}

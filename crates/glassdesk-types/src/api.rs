use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Note, User};

// -- JWT Claims --

/// Bearer token claims. `username` is the identity every ownership check uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

// -- Generic --

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub birth_month: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub registration_date: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

// -- Users --

/// Text fields of a profile update. Absent and empty values leave the stored
/// value unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub birth_month: Option<String>,
    pub birth_date: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub side_menu_color: Option<String>,
    pub theme_mode: Option<String>,
    /// Only meaningful when equal to the placeholder URL (reset request).
    pub profile_picture: Option<String>,
    /// Arbitrary wallpaper URL, used when no wallpaper file is uploaded.
    pub wallpaper: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserResponse {
    pub message: String,
    pub updated_user: User,
}

// -- Notes --

#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub message: String,
    pub note: Note,
}

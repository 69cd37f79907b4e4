use std::sync::Arc;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use tracing::{error, info};
use uuid::Uuid;

use glassdesk_store::{MemoryStore, NoteRepository, UserRepository};
use glassdesk_types::api::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use glassdesk_types::models::{
    DEFAULT_SIDE_MENU_COLOR, DEFAULT_THEME_MODE, DEFAULT_WALLPAPER, PLACEHOLDER_PROFILE_PICTURE,
    User,
};

use crate::config::Config;
use crate::error::ApiError;
use crate::media::MediaStore;
use crate::token::TokenAuthority;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub config: Config,
    pub users: Arc<dyn UserRepository>,
    pub notes: Arc<dyn NoteRepository>,
    pub tokens: TokenAuthority,
    pub media: MediaStore,
}

impl AppStateInner {
    pub async fn new(
        config: Config,
        users: Arc<dyn UserRepository>,
        notes: Arc<dyn NoteRepository>,
    ) -> anyhow::Result<AppState> {
        let media = MediaStore::new(
            config.upload_dir.clone(),
            config.wallpaper_dir.clone(),
            &config.public_url,
        )
        .await?;
        let tokens = TokenAuthority::new(&config.jwt_secret, config.token_ttl);

        Ok(Arc::new(Self {
            config,
            users,
            notes,
            tokens,
            media,
        }))
    }

    /// State backed by a fresh [`MemoryStore`] for both collections.
    pub async fn in_memory(config: Config) -> anyhow::Result<AppState> {
        let store = Arc::new(MemoryStore::new());
        Self::new(config, store.clone(), store).await
    }
}

pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<RegisterRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    // Cheap rejection before paying for the hash; the store re-checks on insert.
    if state.users.find_by_username(&req.username)?.is_some() {
        return Err(ApiError::Validation("Username already exists".into()));
    }

    let RegisterRequest {
        username,
        password,
        full_name,
        email,
        birth_month,
        birth_date,
        birth_year,
        gender,
        registration_date,
    } = req;

    let password_hash = hash_password(password).await?;

    let user = User {
        id: Uuid::new_v4(),
        username,
        password_hash,
        full_name,
        email,
        birth_month,
        birth_date,
        birth_year,
        gender,
        registration_date,
        profile_picture: PLACEHOLDER_PROFILE_PICTURE.to_string(),
        wallpaper: DEFAULT_WALLPAPER.to_string(),
        side_menu_color: DEFAULT_SIDE_MENU_COLOR.to_string(),
        theme_mode: DEFAULT_THEME_MODE.to_string(),
    };
    let user_id = user.id;
    let username = user.username.clone();

    state.users.insert_user(user)?;
    info!("User {} registered", username);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".into(),
            user_id,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .users
        .find_by_username(&req.username)?
        .ok_or(ApiError::UserNotFound)?;

    if !verify_password(req.password, user.password_hash).await? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id, &user.username).map_err(|e| {
        error!("Failed to sign token for {}: {}", user.username, e);
        ApiError::Internal("Failed to log in")
    })?;

    info!("User {} logged in successfully", user.username);
    Ok(Json(LoginResponse { token }))
}

/// Argon2id with a random salt, off the async workers.
async fn hash_password(password: String) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        ApiError::Internal("Failed to register user")
    })?
    .map_err(|e| {
        error!("Password hashing failed: {}", e);
        ApiError::Internal("Failed to register user")
    })
}

async fn verify_password(password: String, stored_hash: String) -> Result<bool, ApiError> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&stored_hash)?;
        Ok::<_, argon2::password_hash::Error>(
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
        )
    })
    .await
    .map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        ApiError::Internal("Failed to log in")
    })?
    .map_err(|e| {
        error!("Stored password hash is unreadable: {}", e);
        ApiError::Internal("Failed to log in")
    })
}

use axum::{
    Extension, Json,
    body::Bytes,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::IntoResponse,
};
use tracing::{error, info};

use glassdesk_store::{ProfilePatch, StoreError};
use glassdesk_types::api::{Claims, ProfileFields, UpdateUserResponse};
use glassdesk_types::models::PLACEHOLDER_PROFILE_PICTURE;

use crate::auth::AppState;
use crate::error::ApiError;
use crate::media::{self, MediaKind, Upload};

const UPDATE_FAILED: &str = "Failed to update user data";

/// GET /api/users. Unauthenticated and returns full records, hashes included.
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.users.list_users()?))
}

/// A parsed profile update: text fields plus at most one file per media slot.
#[derive(Debug, Default)]
struct ProfileForm {
    fields: ProfileFields,
    profile_picture: Option<Upload>,
    wallpaper: Option<Upload>,
}

/// PUT /api/users. Accepts `multipart/form-data` or a JSON body.
pub async fn update_current_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    req: Request,
) -> Result<impl IntoResponse, ApiError> {
    let form = read_form(req).await?;

    if state.users.find_by_username(&claims.username)?.is_none() {
        return Err(ApiError::UserNotFound);
    }

    let uploaded_picture = match &form.profile_picture {
        Some(upload) => Some(store_upload(&state, upload).await?),
        None => None,
    };
    let uploaded_wallpaper = match &form.wallpaper {
        Some(upload) => Some(store_upload(&state, upload).await?),
        None => None,
    };

    let patch = resolve_patch(form.fields, uploaded_picture, uploaded_wallpaper);
    let updated_user = state
        .users
        .update_profile(&claims.username, &patch)
        .map_err(|e| match e {
            StoreError::UserNotFound(_) => ApiError::UserNotFound,
            other => {
                error!("Error updating user data for {}: {}", claims.username, other);
                ApiError::Internal(UPDATE_FAILED)
            }
        })?;
    info!("Profile of {} updated", claims.username);

    Ok(Json(UpdateUserResponse {
        message: "User data updated successfully".into(),
        updated_user,
    }))
}

async fn store_upload(state: &AppState, upload: &Upload) -> Result<String, ApiError> {
    state
        .media
        .store(upload)
        .await
        .map(|asset| asset.url)
        .map_err(|e| {
            error!("Failed to store {}: {}", upload.file_name, e);
            ApiError::Internal(UPDATE_FAILED)
        })
}

/// Multipart and JSON bodies are parsed; any other body, or none at all, is an
/// update with no fields. Only a JSON body that fails to parse is rejected.
async fn read_form(req: Request) -> Result<ProfileForm, ApiError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(req, &()).await?;
        return read_multipart(multipart).await;
    }

    let body = Bytes::from_request(req, &()).await?;
    if !content_type.starts_with("application/json") || body.is_empty() {
        return Ok(ProfileForm::default());
    }

    let Json(fields) = Json::<ProfileFields>::from_bytes(&body)?;
    Ok(ProfileForm {
        fields,
        ..Default::default()
    })
}

async fn read_multipart(mut multipart: Multipart) -> Result<ProfileForm, ApiError> {
    let mut form = ProfileForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        let Some(file_name) = field.file_name().map(str::to_string) else {
            let value = field.text().await?;
            set_text_field(&mut form.fields, &name, value);
            continue;
        };

        let kind = MediaKind::from_field(&name)
            .ok_or_else(|| ApiError::Validation("Invalid field name for file upload".into()))?;
        media::check_image(&file_name, field.content_type())?;
        let bytes = field.bytes().await?;

        let slot = match kind {
            MediaKind::ProfilePicture => &mut form.profile_picture,
            MediaKind::Wallpaper => &mut form.wallpaper,
        };
        if slot.is_some() {
            return Err(ApiError::Validation(format!("Unexpected field: {}", name)));
        }
        *slot = Some(Upload {
            kind,
            file_name,
            bytes,
        });
    }

    Ok(form)
}

/// Unknown text fields are ignored.
fn set_text_field(fields: &mut ProfileFields, name: &str, value: String) {
    let slot = match name {
        "email" => &mut fields.email,
        "fullName" => &mut fields.full_name,
        "birthMonth" => &mut fields.birth_month,
        "birthDate" => &mut fields.birth_date,
        "birthYear" => &mut fields.birth_year,
        "gender" => &mut fields.gender,
        "sideMenuColor" => &mut fields.side_menu_color,
        "themeMode" => &mut fields.theme_mode,
        "profilePicture" => &mut fields.profile_picture,
        "wallpaper" => &mut fields.wallpaper,
        _ => return,
    };
    *slot = Some(value);
}

/// Turn request fields and stored-upload URLs into a store patch.
///
/// Profile picture: placeholder reset, then uploaded file, then unchanged.
/// Wallpaper: uploaded file, then caller-supplied URL, then unchanged.
fn resolve_patch(
    fields: ProfileFields,
    uploaded_picture: Option<String>,
    uploaded_wallpaper: Option<String>,
) -> ProfilePatch {
    let profile_picture = if fields.profile_picture.as_deref() == Some(PLACEHOLDER_PROFILE_PICTURE) {
        Some(PLACEHOLDER_PROFILE_PICTURE.to_string())
    } else {
        uploaded_picture
    };
    let wallpaper = uploaded_wallpaper.or(fields.wallpaper);

    ProfilePatch {
        email: fields.email,
        full_name: fields.full_name,
        birth_month: fields.birth_month,
        birth_date: fields.birth_date,
        birth_year: fields.birth_year,
        gender: fields.gender,
        side_menu_color: fields.side_menu_color,
        theme_mode: fields.theme_mode,
        profile_picture,
        wallpaper,
    }
}

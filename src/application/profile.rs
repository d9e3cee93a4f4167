//! Logged-in user profile
//!
//! Mirrors a few fields of the session user and submits profile updates
//! through a [`ProfileApi`]. The component builders never touch this module.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::infrastructure::traits::ProfileApi;

/// Presence of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Online,
    Idle,
    DoNotDisturb,
    #[default]
    Offline,
}

/// Snapshot of the session's private user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub avatar_id: Option<String>,
    pub discriminator: u16,
    pub current_game: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
}

/// Account fields delivered by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ProfileModel {
    pub email: Option<String>,
    pub verified: Option<bool>,
}

/// Encoding of an uploaded avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageType {
    #[default]
    Png,
    Jpeg,
}

impl ImageType {
    fn mime(&self) -> &'static str {
        match self {
            ImageType::Png => "image/png",
            ImageType::Jpeg => "image/jpeg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub bytes: Vec<u8>,
    pub image_type: ImageType,
}

impl Avatar {
    /// `data:` URI accepted by the profile endpoint.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.image_type.mime(),
            STANDARD.encode(&self.bytes)
        )
    }
}

/// Requested changes; `None` keeps the current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileEdit {
    pub current_password: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<Avatar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(rename = "password")]
    pub current_password: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "new_password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// The current user's own profile.
#[derive(Debug, Clone)]
pub struct Profile {
    id: u64,
    user: SessionUser,
    email: Option<String>,
    verified: Option<bool>,
}

impl Profile {
    pub fn new(id: u64, user: SessionUser) -> Self {
        Self {
            id,
            user,
            email: None,
            verified: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    pub fn avatar_id(&self) -> Option<&str> {
        self.user.avatar_id.as_deref()
    }

    pub fn discriminator(&self) -> u16 {
        self.user.discriminator
    }

    pub fn current_game(&self) -> Option<&str> {
        self.user.current_game.as_deref()
    }

    pub fn status(&self) -> UserStatus {
        self.user.status
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn is_verified(&self) -> Option<bool> {
        self.verified
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    /// Replace the mirrored session user.
    pub fn set_user(&mut self, user: SessionUser) {
        self.user = user;
    }

    pub fn update(&mut self, model: &ProfileModel) {
        self.email = model.email.clone();
        self.verified = model.verified;
    }

    /// Submit `edit`; returns the fresh session token when the password changed.
    #[instrument(level = "debug", skip(self, api, edit), fields(id = self.id))]
    pub fn edit(
        &mut self,
        api: &dyn ProfileApi,
        edit: ProfileEdit,
    ) -> ApplicationResult<Option<String>> {
        let request = UpdateProfileRequest {
            current_password: edit.current_password,
            username: edit.username.unwrap_or_else(|| self.user.name.clone()),
            email: edit.email.or_else(|| self.email.clone()),
            password: edit.password.clone(),
            avatar: match &edit.avatar {
                Some(avatar) => Some(avatar.to_data_uri()),
                None => self.user.avatar_id.clone(),
            },
        };
        debug!(username = %request.username, "submitting profile update");
        api.update_profile(&request)
            .with_context("update profile")?;

        let Some(password) = edit.password else {
            return Ok(None);
        };
        let email = self.email.clone().ok_or_else(|| ApplicationError::Profile {
            message: "email unknown, cannot log in with the new password".to_string(),
        })?;
        let response = api
            .login(&LoginRequest { email, password })
            .with_context("log in after password change")?;
        info!("password changed, session token refreshed");
        Ok(Some(response.token))
    }
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Profile {}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

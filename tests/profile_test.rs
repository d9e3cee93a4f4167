//! Tests for Profile edits against a mock ProfileApi

use std::io;
use std::sync::Mutex;

use msgcomp::application::profile::{
    Avatar, ImageType, LoginRequest, LoginResponse, ProfileModel, SessionUser,
    UpdateProfileRequest,
};
use msgcomp::application::{ApplicationError, Profile, ProfileEdit};
use msgcomp::infrastructure::traits::ProfileApi;
use msgcomp::util::testing;

#[derive(Default)]
struct MockProfileApi {
    updates: Mutex<Vec<UpdateProfileRequest>>,
    logins: Mutex<Vec<LoginRequest>>,
    reject_update: bool,
}

impl ProfileApi for MockProfileApi {
    fn update_profile(&self, request: &UpdateProfileRequest) -> io::Result<()> {
        if self.reject_update {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "bad password"));
        }
        self.updates.lock().unwrap().push(request.clone());
        Ok(())
    }

    fn login(&self, request: &LoginRequest) -> io::Result<LoginResponse> {
        self.logins.lock().unwrap().push(request.clone());
        Ok(LoginResponse {
            token: "fresh-token".to_string(),
        })
    }
}

fn profile() -> Profile {
    let mut profile = Profile::new(
        1001,
        SessionUser {
            name: "ferris".to_string(),
            avatar_id: Some("abc123".to_string()),
            discriminator: 42,
            ..SessionUser::default()
        },
    );
    profile.update(&ProfileModel {
        email: Some("ferris@example.com".to_string()),
        verified: Some(true),
    });
    profile
}

#[test]
fn given_empty_edit_when_submitting_then_current_values_sent() {
    // Arrange
    testing::init_test_setup();
    let api = MockProfileApi::default();
    let mut profile = profile();

    // Act
    let token = profile
        .edit(
            &api,
            ProfileEdit {
                current_password: "hunter2".to_string(),
                ..ProfileEdit::default()
            },
        )
        .unwrap();

    // Assert
    assert_eq!(token, None);
    let updates = api.updates.lock().unwrap();
    assert_eq!(
        updates[0],
        UpdateProfileRequest {
            current_password: "hunter2".to_string(),
            username: "ferris".to_string(),
            email: Some("ferris@example.com".to_string()),
            password: None,
            avatar: Some("abc123".to_string()),
        }
    );
    assert!(api.logins.lock().unwrap().is_empty());
}

#[test]
fn given_new_avatar_when_submitting_then_sent_as_data_uri() {
    testing::init_test_setup();
    let api = MockProfileApi::default();
    let mut profile = profile();

    profile
        .edit(
            &api,
            ProfileEdit {
                current_password: "pw".to_string(),
                avatar: Some(Avatar {
                    bytes: vec![0xff, 0xd8, 0xff],
                    image_type: ImageType::Jpeg,
                }),
                ..ProfileEdit::default()
            },
        )
        .unwrap();

    let updates = api.updates.lock().unwrap();
    assert_eq!(updates[0].avatar.as_deref(), Some("data:image/jpeg;base64,/9j/"));
}

#[test]
fn given_password_change_when_submitting_then_logs_in_and_returns_token() {
    testing::init_test_setup();
    let api = MockProfileApi::default();
    let mut profile = profile();

    let token = profile
        .edit(
            &api,
            ProfileEdit {
                current_password: "old".to_string(),
                password: Some("new".to_string()),
                ..ProfileEdit::default()
            },
        )
        .unwrap();

    assert_eq!(token.as_deref(), Some("fresh-token"));
    let logins = api.logins.lock().unwrap();
    assert_eq!(
        logins[0],
        LoginRequest {
            email: "ferris@example.com".to_string(),
            password: "new".to_string(),
        }
    );
}

#[test]
fn given_unknown_email_when_changing_password_then_profile_error() {
    testing::init_test_setup();
    let api = MockProfileApi::default();
    let mut profile = Profile::new(7, SessionUser::default());

    let err = profile
        .edit(
            &api,
            ProfileEdit {
                password: Some("new".to_string()),
                ..ProfileEdit::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Profile { .. }));
}

#[test]
fn given_rejected_update_when_submitting_then_operation_failed_and_no_login() {
    testing::init_test_setup();
    let api = MockProfileApi {
        reject_update: true,
        ..MockProfileApi::default()
    };
    let mut profile = profile();

    let err = profile
        .edit(
            &api,
            ProfileEdit {
                password: Some("new".to_string()),
                ..ProfileEdit::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(api.logins.lock().unwrap().is_empty());
}

#[test]
fn given_update_request_when_serializing_then_uses_wire_names() {
    let request = UpdateProfileRequest {
        current_password: "old".to_string(),
        username: "ferris".to_string(),
        email: None,
        password: Some("new".to_string()),
        avatar: None,
    };

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "password": "old",
            "username": "ferris",
            "new_password": "new",
            "avatar": null
        })
    );
}

//! Handler-level tests for the admin surface.

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use serde_json::Value;

use auth::application::token::issue_token;
use auth::domain::repository::UserRepository;
use auth::models::{ChangePasswordRequest, SessionUser, UserRecord, UserRole};
use auth::{AuthConfig, AuthResult};
use platform::password::hash_password;

use crate::presentation::handlers::{self, AdminAppState};

/// In-memory user repository seeded with one admin.
#[derive(Clone, Default)]
struct MemoryUsers {
    users: Arc<Mutex<Vec<UserRecord>>>,
}

impl MemoryUsers {
    fn with_admin(password: &str) -> Self {
        let store = Self::default();
        store.users.lock().unwrap().push(UserRecord {
            id: 1,
            username: "admin".to_string(),
            name: "관리자".to_string(),
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
            password_hash: hash_password(password),
        });
        store
    }

    fn password_hash_of(&self, id: i64) -> String {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.password_hash.clone())
            .unwrap()
    }
}

impl UserRepository for MemoryUsers {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<UserRecord>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> AuthResult<Option<UserRecord>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.password_hash = password_hash.to_string();
        }
        Ok(())
    }
}

fn state_with(repo: MemoryUsers) -> AdminAppState<MemoryUsers> {
    AdminAppState {
        repo: Arc::new(repo),
        config: Arc::new(AuthConfig::development()),
    }
}

fn session_headers(config: &AuthConfig, role: UserRole) -> HeaderMap {
    let user = SessionUser {
        id: "1".to_string(),
        name: "관리자".to_string(),
        email: "admin@example.com".to_string(),
        role,
    };
    let token = issue_token(&user, &config.secret, config.token_ttl).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_str(&format!("{}={}", config.cookie_name, token)).unwrap(),
    );
    headers
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

mod env_check {
    use super::*;

    #[tokio::test]
    async fn test_no_session_gets_401_and_no_data() {
        let state = state_with(MemoryUsers::default());

        let response = handlers::env_check(State(state), HeaderMap::new())
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "관리자 권한이 필요합니다.");
        assert!(body.get("variables").is_none());
    }

    #[tokio::test]
    async fn test_non_admin_gets_401() {
        let state = state_with(MemoryUsers::default());
        let headers = session_headers(&state.config, UserRole::User);

        let response = handlers::env_check(State(state), headers)
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_gets_report() {
        let state = state_with(MemoryUsers::default());
        let headers = session_headers(&state.config, UserRole::Admin);

        let response = handlers::env_check(State(state), headers)
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["status"] == "healthy" || body["status"] == "warning");
        assert_eq!(body["variables"]["DATABASE_URL"]["masked"], "(database binding)");
        assert!(body.get("missingVariables").is_some());
    }
}

mod change_password {
    use super::*;

    #[tokio::test]
    async fn test_requires_admin_session() {
        let state = state_with(MemoryUsers::with_admin("old-password"));

        let response = handlers::change_password(
            State(state),
            HeaderMap::new(),
            Json(ChangePasswordRequest {
                current_password: Some("old-password".to_string()),
                new_password: Some("new-password".to_string()),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "관리자 권한이 필요합니다.");
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let state = state_with(MemoryUsers::with_admin("old-password"));
        let headers = session_headers(&state.config, UserRole::Admin);

        let response = handlers::change_password(
            State(state),
            headers,
            Json(ChangePasswordRequest {
                current_password: None,
                new_password: Some("new-password".to_string()),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "현재 비밀번호와 새 비밀번호가 필요합니다.");
    }

    #[tokio::test]
    async fn test_short_new_password_rejected() {
        let state = state_with(MemoryUsers::with_admin("old-password"));
        let headers = session_headers(&state.config, UserRole::Admin);

        let response = handlers::change_password(
            State(state),
            headers,
            Json(ChangePasswordRequest {
                current_password: Some("old-password".to_string()),
                new_password: Some("short".to_string()),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "새 비밀번호는 최소 8자 이상이어야 합니다.");
    }

    #[tokio::test]
    async fn test_wrong_current_password_rejected() {
        let state = state_with(MemoryUsers::with_admin("old-password"));
        let headers = session_headers(&state.config, UserRole::Admin);

        let response = handlers::change_password(
            State(state),
            headers,
            Json(ChangePasswordRequest {
                current_password: Some("not-the-password".to_string()),
                new_password: Some("new-password".to_string()),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "현재 비밀번호가 올바르지 않습니다.");
    }

    #[tokio::test]
    async fn test_success_updates_hash() {
        let repo = MemoryUsers::with_admin("old-password");
        let old_hash = repo.password_hash_of(1);
        let state = state_with(repo.clone());
        let headers = session_headers(&state.config, UserRole::Admin);

        let response = handlers::change_password(
            State(state),
            headers,
            Json(ChangePasswordRequest {
                current_password: Some("old-password".to_string()),
                new_password: Some("new-password".to_string()),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "비밀번호가 성공적으로 변경되었습니다.");

        let new_hash = repo.password_hash_of(1);
        assert_ne!(old_hash, new_hash);
        assert_eq!(new_hash, hash_password("new-password"));
    }
}

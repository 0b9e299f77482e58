//! Handler-level tests for the auth surface.

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use serde_json::Value;

use platform::password::hash_password;

use crate::application::config::AuthConfig;
use crate::application::token::issue_token;
use crate::domain::repository::UserRepository;
use crate::domain::user::{SessionUser, UserRecord, UserRole};
use crate::error::AuthResult;
use crate::presentation::dto::LoginRequest;
use crate::presentation::handlers::{self, AuthAppState};

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

fn state_with(repo: MemoryUsers) -> AuthAppState<MemoryUsers> {
    AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(AuthConfig::development()),
    }
}

fn set_cookie_of(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

mod login {
    use super::*;

    #[tokio::test]
    async fn test_success_sets_cookie_and_returns_user() {
        let state = state_with(MemoryUsers::with_admin("correct horse"));

        let response = handlers::login(
            State(state),
            Json(LoginRequest {
                username: Some("admin".to_string()),
                password: Some("correct horse".to_string()),
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = set_cookie_of(&response);
        assert!(cookie.starts_with("auth-token="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["id"], "1");
        assert_eq!(body["user"]["role"], "admin");
        assert!(body["user"].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let state = state_with(MemoryUsers::with_admin("correct horse"));

        for (username, password) in [
            (None, Some("pw".to_string())),
            (Some("admin".to_string()), None),
            (Some(String::new()), Some("pw".to_string())),
        ] {
            let response = handlers::login(
                State(state.clone()),
                Json(LoginRequest { username, password }),
            )
            .await
            .into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_look_alike() {
        let state = state_with(MemoryUsers::with_admin("correct horse"));

        let unknown = handlers::login(
            State(state.clone()),
            Json(LoginRequest {
                username: Some("nobody".to_string()),
                password: Some("whatever".to_string()),
            }),
        )
        .await
        .into_response();

        let wrong = handlers::login(
            State(state),
            Json(LoginRequest {
                username: Some("admin".to_string()),
                password: Some("wrong".to_string()),
            }),
        )
        .await
        .into_response();

        assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
        let a = body_json(unknown).await;
        let b = body_json(wrong).await;
        assert_eq!(a, b);
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    async fn test_clears_cookie() {
        let state = state_with(MemoryUsers::default());

        let response = handlers::logout(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = set_cookie_of(&response);
        assert!(cookie.starts_with("auth-token="));
        assert!(cookie.contains("Max-Age=0"));

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Logged out successfully");
    }
}

mod session {
    use super::*;

    #[tokio::test]
    async fn test_no_cookie_is_null_session() {
        let state = state_with(MemoryUsers::default());

        let response = handlers::session(State(state), HeaderMap::new())
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["session"].is_null());
    }

    #[tokio::test]
    async fn test_valid_cookie_returns_identity() {
        let state = state_with(MemoryUsers::default());
        let user = SessionUser {
            id: "1".to_string(),
            name: "관리자".to_string(),
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
        };
        let token = issue_token(&user, &state.config.secret, state.config.token_ttl).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("auth-token={token}")).unwrap(),
        );

        let response = handlers::session(State(state), headers)
            .await
            .into_response();
        let body = body_json(response).await;
        assert_eq!(body["session"]["user"]["id"], "1");
        assert_eq!(body["session"]["user"]["role"], "admin");
        assert!(body["session"]["expires"].is_string());
    }
}

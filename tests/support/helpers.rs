// tests/support/helpers.rs
use super::mocks::{
    FakeTokenManager, InMemoryArticleStore, InMemoryUserRepo, PlainPasswordHasher, TickingClock,
    fixed_now, token_for,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use penwise::application::services::ApplicationServices;
use penwise::domain::user::{Email, NewUser, PasswordHash, UserRepository, Username};
use penwise::infrastructure::util::DefaultSlugGenerator;
use penwise::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

/// Router wired to in-memory adapters, with handles to inspect them.
pub struct TestApp {
    pub router: axum::Router,
    pub users: Arc<InMemoryUserRepo>,
    pub articles: Arc<InMemoryArticleStore>,
}

/// A seeded account and a bearer token for it.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i64,
    pub token: String,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepo::default());
        let articles = Arc::new(InMemoryArticleStore::default());

        let services = Arc::new(ApplicationServices::new(
            users.clone(),
            articles.clone(),
            articles.clone(),
            Arc::new(PlainPasswordHasher),
            Arc::new(FakeTokenManager),
            Arc::new(TickingClock::default()),
            Arc::new(DefaultSlugGenerator),
        ));

        let router = build_router(HttpState { services }, &[]);
        Self {
            router,
            users,
            articles,
        }
    }

    /// Inserts a user straight into the store.
    pub async fn seed_user(&self, username: &str, bio: Option<&str>) -> TestUser {
        let new_user = NewUser::new(
            Username::new(username).expect("username"),
            Email::new(format!("{username}@example.com")).expect("email"),
            PasswordHash::new("plain$password123").expect("hash"),
            fixed_now(),
        )
        .with_avatar(Some(format!("https://img.example.com/{username}.png")))
        .with_bio(bio.map(str::to_string));

        let user = self.users.insert(new_user).await.expect("seed user");
        let id = i64::from(user.id);
        TestUser {
            id,
            token: token_for(id, username),
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, token, Some(body)).await
    }
}

/// Asserts an `{error, message}` body with the expected status.
pub fn assert_error(status: StatusCode, body: &Value, expected_status: StatusCode) {
    assert_eq!(status, expected_status, "unexpected body: {body}");
    let reason = expected_status.canonical_reason().unwrap_or("error");
    assert_eq!(body["error"], reason, "unexpected body: {body}");
    assert!(body["message"].is_string(), "missing message: {body}");
}

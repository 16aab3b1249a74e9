#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use watchlist::{AppState, config::Config, db, models::MovieForm, store::Store};

pub const MEMORY_DB: &str = "sqlite::memory:";

pub async fn empty_store() -> Store {
    let db = db::connect_and_migrate(MEMORY_DB).await.expect("Failed to open database");
    Store::new(db)
}

/// One user (`Test` / `test` / `123`) and one movie (`Test Movie`, 2023).
pub async fn seeded_store() -> Store {
    let store = empty_store().await;
    store.create_user("Test", "test", Some("123")).await.unwrap();
    store.create_movie(&MovieForm::new("Test Movie", "2023")).await.unwrap();
    store
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// Drives the router in memory, keeping the session cookie between requests.
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

impl TestClient {
    pub fn new(store: Store) -> Self {
        let state = AppState::new(Config::with_database(MEMORY_DB), store);
        Self { router: watchlist::router(state), cookie: None }
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub fn set_cookie(&mut self, cookie: Option<String>) {
        self.cookie = cookie;
    }

    pub async fn login(&mut self) {
        self.post("/login", &[("username", "test"), ("password", "123")]).await;
    }

    /// GET, following redirects.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let response = self.send(Method::GET, uri, None).await;
        self.follow(response).await
    }

    /// Form POST, following redirects.
    pub async fn post(&mut self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        let response = self.send(Method::POST, uri, Some(form)).await;
        self.follow(response).await
    }

    /// A single request; redirects are returned as-is.
    pub async fn send(
        &mut self,
        method: Method,
        uri: &str,
        form: Option<&[(&str, &str)]>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match form {
            Some(fields) => {
                builder =
                    builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(encode_form(fields))
            },
            None => Body::empty(),
        };

        let response = self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        self.store_cookie(response.headers());

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse { status, location, body: String::from_utf8(bytes.to_vec()).unwrap() }
    }

    async fn follow(&mut self, mut response: TestResponse) -> TestResponse {
        for _ in 0..5 {
            if !response.status.is_redirection() {
                break;
            }
            let location = response.location.clone().expect("redirect without location");
            response = self.send(Method::GET, &location, None).await;
        }
        response
    }

    fn store_cookie(&mut self, headers: &HeaderMap) {
        for value in headers.get_all(header::SET_COOKIE) {
            let raw = value.to_str().unwrap();
            let pair = raw.split(';').next().unwrap_or_default().trim();
            if pair.ends_with('=') || raw.to_ascii_lowercase().contains("max-age=0") {
                self.cookie = None;
            } else {
                self.cookie = Some(pair.to_string());
            }
        }
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

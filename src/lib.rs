pub mod auth;
pub mod commands;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod flash;
pub mod models;
pub mod paths;
pub mod routes;
pub mod store;
pub mod templates;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::SameSite};

use crate::{config::Config, store::Store};

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Store,
}

impl AppState {
    pub fn new(config: Config, store: Store) -> Arc<Self> {
        Arc::new(Self { config: Arc::new(config), store })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            state.config.session_ttl_minutes,
        )));

    Router::new()
        .route("/", get(routes::index).post(routes::create_movie))
        .route("/login", get(routes::login_page).post(routes::login))
        .route("/logout", get(routes::logout))
        .route("/settings", get(routes::settings_page).post(routes::update_settings))
        .route("/movie/edit/{movie_id}", get(routes::edit_movie_page).post(routes::update_movie))
        .route("/movie/delete/{movie_id}", post(routes::delete_movie))
        .route("/user/{name}", get(routes::user_page))
        .route("/test", get(routes::url_demo))
        .fallback(routes::not_found)
        .with_state(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
}

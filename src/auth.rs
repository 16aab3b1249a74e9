use std::sync::Arc;

use anyhow::anyhow;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{extract::FromRequestParts, http::request::Parts};
use tokio::task;
use tower_sessions::Session;

use crate::{
    AppState,
    entities::user,
    error::{AppError, AppResult},
    flash,
    store::Store,
};

const USER_ID_KEY: &str = "_user_id";

/// Hashing and verification run on the blocking pool.
pub async fn hash_password(password: &str) -> AppResult<String> {
    let password = password.to_string();
    let hash = task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| anyhow!("failed to hash password: {e}"))
    })
    .await??;
    Ok(hash)
}

pub async fn verify_password(password_hash: &str, password: &str) -> AppResult<bool> {
    let password_hash = password_hash.to_string();
    let password = password.to_string();
    let valid = task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&password_hash)
            .map_err(|e| anyhow!("invalid password hash format: {e}"))?;
        Ok::<bool, anyhow::Error>(
            Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok(),
        )
    })
    .await??;
    Ok(valid)
}

/// Stores the principal under a fresh session id; the pre-login id stops working.
pub async fn login(session: &Session, user: &user::Model) -> AppResult<()> {
    session.cycle_id().await?;
    session.insert(USER_ID_KEY, user.id).await?;
    Ok(())
}

pub async fn logout(session: &Session) -> AppResult<()> {
    session.remove::<i32>(USER_ID_KEY).await?;
    Ok(())
}

/// The logged-in user, if the session names one that still exists.
pub async fn session_user(session: &Session, store: &Store) -> AppResult<Option<user::Model>> {
    let Some(user_id) = session.get::<i32>(USER_ID_KEY).await? else {
        return Ok(None);
    };
    store.find_user(user_id).await
}

/// Route guard: rejects with a redirect to the login page when nobody is logged in.
pub struct CurrentUser(pub user::Model);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(anyhow!(msg)))?;

        match session_user(&session, &state.store).await? {
            Some(user) => Ok(Self(user)),
            None => {
                tracing::debug!(path = %parts.uri.path(), "rejecting anonymous request");
                flash::push(&session, AppError::Unauthorized.to_string()).await?;
                Err(AppError::Unauthorized)
            },
        }
    }
}

//! One-shot messages carried in the session until the next rendered page.

use tower_sessions::Session;

use crate::error::AppResult;

const FLASHES_KEY: &str = "_flashes";

pub async fn push(session: &Session, message: impl Into<String>) -> AppResult<()> {
    let mut flashes: Vec<String> = session.get(FLASHES_KEY).await?.unwrap_or_default();
    flashes.push(message.into());
    session.insert(FLASHES_KEY, flashes).await?;
    Ok(())
}

/// Removes and returns every pending message.
pub async fn take(session: &Session) -> AppResult<Vec<String>> {
    Ok(session.remove(FLASHES_KEY).await?.unwrap_or_default())
}

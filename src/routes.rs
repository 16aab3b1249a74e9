use std::sync::Arc;

use axum::{
    Json,
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use maud::html;
use tower_sessions::Session;
use tracing::{debug, info, warn};

use crate::{
    AppState,
    auth::{self, CurrentUser},
    error::{AppError, AppResult},
    flash,
    models::{LoginForm, MovieForm, SettingsForm},
    paths, templates,
    templates::PageContext,
};

async fn page_context(state: &AppState, session: &Session) -> AppResult<PageContext> {
    let owner = state.store.owner().await?;
    let viewer = auth::session_user(session, &state.store).await?;
    Ok(PageContext {
        owner_name: owner.map(|u| u.name),
        authenticated: viewer.is_some(),
        flashes: flash::take(session).await?,
    })
}

/// Ids that are not a valid integer name no movie, so they get the 404 page too.
fn parse_movie_id(raw: &str) -> AppResult<i32> {
    raw.parse().map_err(|_| AppError::NotFound)
}

/// Queues user-facing errors as a flash message and passes anything else on.
async fn flash_rejection(session: &Session, err: AppError) -> AppResult<()> {
    match err {
        AppError::InvalidInput | AppError::InvalidCredentials => {
            flash::push(session, err.to_string()).await
        },
        other => Err(other),
    }
}

pub async fn index(State(state): State<Arc<AppState>>, session: Session) -> AppResult<Html<String>> {
    let ctx = page_context(&state, &session).await?;
    let movies = state.store.list_movies().await?;
    Ok(Html(templates::index_page(&ctx, &movies)))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    session: Session,
    CurrentUser(_): CurrentUser,
    Form(form): Form<MovieForm>,
) -> AppResult<Redirect> {
    match state.store.create_movie(&form).await {
        Ok(movie) => {
            info!(movie_id = movie.id, title = %movie.title, "movie created");
            flash::push(&session, "Item created.").await?;
        },
        Err(err) => flash_rejection(&session, err).await?,
    }
    Ok(Redirect::to(paths::INDEX))
}

pub async fn edit_movie_page(
    State(state): State<Arc<AppState>>,
    session: Session,
    CurrentUser(_): CurrentUser,
    Path(movie_id): Path<String>,
) -> AppResult<Html<String>> {
    let movie = state.store.get_movie(parse_movie_id(&movie_id)?).await?;
    let ctx = page_context(&state, &session).await?;
    Ok(Html(templates::edit_page(&ctx, &movie)))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    session: Session,
    CurrentUser(_): CurrentUser,
    Path(movie_id): Path<String>,
    Form(form): Form<MovieForm>,
) -> AppResult<Redirect> {
    let movie_id = parse_movie_id(&movie_id)?;
    match state.store.update_movie(movie_id, &form).await {
        Ok(movie) => {
            info!(movie_id = movie.id, title = %movie.title, "movie updated");
            flash::push(&session, "Item updated.").await?;
            Ok(Redirect::to(paths::INDEX))
        },
        Err(err) => {
            flash_rejection(&session, err).await?;
            Ok(Redirect::to(&paths::edit_movie(movie_id)))
        },
    }
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    session: Session,
    CurrentUser(_): CurrentUser,
    Path(movie_id): Path<String>,
) -> AppResult<Redirect> {
    let movie_id = parse_movie_id(&movie_id)?;
    state.store.delete_movie(movie_id).await?;
    info!(movie_id, "movie deleted");
    flash::push(&session, "Item deleted.").await?;
    Ok(Redirect::to(paths::INDEX))
}

pub async fn login_page(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> AppResult<Html<String>> {
    let ctx = page_context(&state, &session).await?;
    Ok(Html(templates::login_page(&ctx)))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> AppResult<Redirect> {
    match state.store.authenticate(&form).await {
        Ok(user) => {
            auth::login(&session, &user).await?;
            info!(user_id = user.id, username = %user.username, "login succeeded");
            flash::push(&session, "Login success.").await?;
            Ok(Redirect::to(paths::INDEX))
        },
        Err(err) => {
            if matches!(err, AppError::InvalidCredentials) {
                warn!(username = %form.username.trim(), "login failed");
            }
            flash_rejection(&session, err).await?;
            Ok(Redirect::to(paths::LOGIN))
        },
    }
}

pub async fn logout(session: Session) -> AppResult<Redirect> {
    auth::logout(&session).await?;
    info!("logged out");
    flash::push(&session, "Goodbye.").await?;
    Ok(Redirect::to(paths::INDEX))
}

pub async fn settings_page(
    State(state): State<Arc<AppState>>,
    session: Session,
    CurrentUser(user): CurrentUser,
) -> AppResult<Html<String>> {
    let ctx = page_context(&state, &session).await?;
    Ok(Html(templates::settings_page(&ctx, &user)))
}

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    session: Session,
    CurrentUser(user): CurrentUser,
    Form(form): Form<SettingsForm>,
) -> AppResult<Redirect> {
    let name = match form.validate() {
        Ok(name) => name,
        Err(err) => {
            flash_rejection(&session, err).await?;
            return Ok(Redirect::to(paths::SETTINGS));
        },
    };

    let user = state.store.rename_user(user, name).await?;
    info!(user_id = user.id, name = %user.name, "settings updated");
    flash::push(&session, "Settings updated.").await?;
    Ok(Redirect::to(paths::INDEX))
}

pub async fn user_page(Path(name): Path<String>) -> Html<String> {
    Html(html! { "User: " (name) }.into_string())
}

pub async fn url_demo() -> Json<Vec<String>> {
    Json(vec![paths::INDEX.to_string(), paths::user_page("max"), paths::TEST.to_string()])
}

pub async fn not_found(uri: axum::http::Uri) -> (StatusCode, Html<String>) {
    debug!(path = %uri.path(), "no route");
    (StatusCode::NOT_FOUND, Html(templates::not_found_page()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_id_must_be_an_i32() {
        assert_eq!(parse_movie_id("7").unwrap(), 7);
        assert!(matches!(parse_movie_id("abc"), Err(AppError::NotFound)));
        assert!(matches!(parse_movie_id("99999999999"), Err(AppError::NotFound)));
        assert!(matches!(parse_movie_id(""), Err(AppError::NotFound)));
    }
}

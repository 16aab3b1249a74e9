//! Administrative commands. Progress lines go to the supplied writer.

use std::io::Write;

use tracing::info;

use crate::{db, error::AppResult, store::Store};

pub const OWNER_NAME: &str = "Grey Li";
pub const OWNER_USERNAME: &str = "admin";
pub const ADMIN_NAME: &str = "Admin";

pub const SAMPLE_MOVIES: &[(&str, &str)] = &[
    ("My Neighbor Totoro", "1988"),
    ("Dead Poets Society", "1989"),
    ("A Perfect World", "1993"),
    ("Leon", "1994"),
    ("Mahjong", "1996"),
    ("Swallowtail Butterfly", "1996"),
    ("King of Comedy", "1999"),
    ("Devils on the Doorstep", "1999"),
    ("WALL-E", "2008"),
    ("The Pork of Music", "2012"),
];

pub async fn initdb(store: &Store, drop: bool, out: &mut impl Write) -> AppResult<()> {
    db::init_schema(store.db(), drop).await?;
    info!(drop, "schema initialized");
    writeln!(out, "Initialized database.")?;
    Ok(())
}

/// Seeds the sample movies, plus a password-less owner when the user table is empty.
pub async fn forge(store: &Store, out: &mut impl Write) -> AppResult<()> {
    db::init_schema(store.db(), false).await?;

    if store.owner().await?.is_none() {
        store.create_user(OWNER_NAME, OWNER_USERNAME, None).await?;
    }
    store.insert_movies(SAMPLE_MOVIES).await?;

    info!(movies = SAMPLE_MOVIES.len(), "sample data inserted");
    writeln!(out, "Done.")?;
    Ok(())
}

pub async fn admin(
    store: &Store,
    username: &str,
    password: &str,
    out: &mut impl Write,
) -> AppResult<()> {
    db::init_schema(store.db(), false).await?;

    match store.owner().await? {
        Some(user) => {
            writeln!(out, "Updating user...")?;
            let user = store.set_credentials(user, username, password).await?;
            info!(user_id = user.id, username, "admin credentials updated");
        },
        None => {
            writeln!(out, "Creating user...")?;
            let user = store.create_user(ADMIN_NAME, username, Some(password)).await?;
            info!(user_id = user.id, username, "admin created");
        },
    }

    writeln!(out, "Done.")?;
    Ok(())
}

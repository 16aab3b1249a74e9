use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::{
    auth,
    entities::{movie, user},
    error::{AppError, AppResult},
    models::{LoginForm, MovieForm},
};

#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn list_movies(&self) -> AppResult<Vec<movie::Model>> {
        let movies = movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?;
        tracing::debug!(count = movies.len(), "listed movies");
        Ok(movies)
    }

    pub async fn get_movie(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound)
    }

    pub async fn count_movies(&self) -> AppResult<u64> {
        Ok(movie::Entity::find().count(&self.db).await?)
    }

    pub async fn create_movie(&self, form: &MovieForm) -> AppResult<movie::Model> {
        let input = form.validate()?;
        let model = movie::ActiveModel {
            title: Set(input.title),
            year: Set(input.year),
            ..Default::default()
        };
        Ok(model.insert(&self.db).await?)
    }

    /// Bulk insert used by the seed command.
    pub async fn insert_movies(&self, movies: &[(&str, &str)]) -> AppResult<()> {
        if movies.is_empty() {
            return Ok(());
        }
        let models = movies.iter().map(|(title, year)| movie::ActiveModel {
            title: Set((*title).to_string()),
            year: Set((*year).to_string()),
            ..Default::default()
        });
        movie::Entity::insert_many(models).exec(&self.db).await?;
        Ok(())
    }

    /// Unknown ids fail with `NotFound` before the form is looked at.
    pub async fn update_movie(&self, id: i32, form: &MovieForm) -> AppResult<movie::Model> {
        let movie = self.get_movie(id).await?;
        let input = form.validate()?;

        let mut active: movie::ActiveModel = movie.into();
        active.title = Set(input.title);
        active.year = Set(input.year);
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete_movie(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// The site owner: the first user ever created.
    pub async fn owner(&self) -> AppResult<Option<user::Model>> {
        Ok(user::Entity::find().order_by_asc(user::Column::Id).one(&self.db).await?)
    }

    pub async fn find_user(&self, id: i32) -> AppResult<Option<user::Model>> {
        Ok(user::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_user_by_username(&self, username: &str) -> AppResult<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    pub async fn count_users(&self) -> AppResult<u64> {
        Ok(user::Entity::find().count(&self.db).await?)
    }

    pub async fn create_user(
        &self,
        name: &str,
        username: &str,
        password: Option<&str>,
    ) -> AppResult<user::Model> {
        let password_hash = match password {
            Some(password) => Some(auth::hash_password(password).await?),
            None => None,
        };
        let model = user::ActiveModel {
            name: Set(name.to_string()),
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            ..Default::default()
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn set_credentials(
        &self,
        user: user::Model,
        username: &str,
        password: &str,
    ) -> AppResult<user::Model> {
        let password_hash = auth::hash_password(password).await?;
        let mut active: user::ActiveModel = user.into();
        active.username = Set(username.to_string());
        active.password_hash = Set(Some(password_hash));
        Ok(active.update(&self.db).await?)
    }

    pub async fn rename_user(&self, user: user::Model, name: String) -> AppResult<user::Model> {
        let mut active: user::ActiveModel = user.into();
        active.name = Set(name);
        Ok(active.update(&self.db).await?)
    }

    /// Checks a login attempt. An unknown username, a wrong password and a user
    /// without a password all fail the same way.
    pub async fn authenticate(&self, form: &LoginForm) -> AppResult<user::Model> {
        let (username, password) = form.validate()?;

        let Some(user) = self.find_user_by_username(username).await? else {
            return Err(AppError::InvalidCredentials);
        };
        let Some(hash) = user.password_hash.as_deref() else {
            return Err(AppError::InvalidCredentials);
        };
        if !auth::verify_password(hash, password).await? {
            return Err(AppError::InvalidCredentials);
        }
        Ok(user)
    }
}

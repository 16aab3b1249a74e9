use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const TITLE_MAX_LEN: usize = 60;
pub const YEAR_MAX_LEN: usize = 4;
pub const NAME_MAX_LEN: usize = 20;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MovieForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
}

/// A movie that passed validation and can be written as-is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MovieInput {
    pub title: String,
    pub year: String,
}

impl MovieForm {
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self { title: title.into(), year: year.into() }
    }

    pub fn validate(&self) -> AppResult<MovieInput> {
        Ok(MovieInput {
            title: bounded(&self.title, TITLE_MAX_LEN)?,
            year: bounded(&self.year, YEAR_MAX_LEN)?,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    /// Returns the trimmed username and the password exactly as typed.
    pub fn validate(&self) -> AppResult<(&str, &str)> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err(AppError::InvalidInput);
        }
        Ok((username, &self.password))
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub name: String,
}

impl SettingsForm {
    pub fn validate(&self) -> AppResult<String> {
        bounded(&self.name, NAME_MAX_LEN)
    }
}

/// Checks the trimmed value, so whitespace-only input counts as empty.
fn bounded(value: &str, max_len: usize) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() || value.chars().count() > max_len {
        return Err(AppError::InvalidInput);
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_form_trims_fields() {
        let input = MovieForm::new("  Leon ", " 1994").validate().unwrap();
        assert_eq!(input, MovieInput { title: "Leon".into(), year: "1994".into() });
    }

    #[test]
    fn movie_form_rejects_empty_fields() {
        assert!(matches!(MovieForm::new("", "2023").validate(), Err(AppError::InvalidInput)));
        assert!(matches!(MovieForm::new("New Movie", "").validate(), Err(AppError::InvalidInput)));
        assert!(matches!(MovieForm::new("   ", "2023").validate(), Err(AppError::InvalidInput)));
    }

    #[test]
    fn movie_form_enforces_length_bounds() {
        assert!(MovieForm::new("x".repeat(TITLE_MAX_LEN), "2023").validate().is_ok());
        assert!(matches!(
            MovieForm::new("x".repeat(TITLE_MAX_LEN + 1), "2023").validate(),
            Err(AppError::InvalidInput)
        ));
        assert!(matches!(MovieForm::new("Leon", "19945").validate(), Err(AppError::InvalidInput)));
    }

    #[test]
    fn length_is_counted_in_characters() {
        let title = "é".repeat(TITLE_MAX_LEN);
        assert!(MovieForm::new(title, "1988").validate().is_ok());
    }

    #[test]
    fn login_form_requires_both_fields() {
        let form = LoginForm { username: "test".into(), password: String::new() };
        assert!(matches!(form.validate(), Err(AppError::InvalidInput)));

        let form = LoginForm { username: " ".into(), password: "123".into() };
        assert!(matches!(form.validate(), Err(AppError::InvalidInput)));

        let form = LoginForm { username: " test ".into(), password: " 123".into() };
        assert_eq!(form.validate().unwrap(), ("test", " 123"));
    }

    #[test]
    fn settings_form_bounds_name() {
        assert_eq!(SettingsForm { name: " Parzivaal ".into() }.validate().unwrap(), "Parzivaal");
        assert!(matches!(SettingsForm { name: String::new() }.validate(), Err(AppError::InvalidInput)));
        assert!(matches!(
            SettingsForm { name: "n".repeat(NAME_MAX_LEN + 1) }.validate(),
            Err(AppError::InvalidInput)
        ));
    }
}

pub const INDEX: &str = "/";
pub const LOGIN: &str = "/login";
pub const LOGOUT: &str = "/logout";
pub const SETTINGS: &str = "/settings";
pub const TEST: &str = "/test";

pub fn edit_movie(id: i32) -> String {
    format!("/movie/edit/{id}")
}

pub fn delete_movie(id: i32) -> String {
    format!("/movie/delete/{id}")
}

pub fn user_page(name: &str) -> String {
    format!("/user/{}", urlencoding::encode(name))
}

pub fn imdb_search(title: &str) -> String {
    format!("https://www.imdb.com/find?q={}", urlencoding::encode(title))
}

use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::{movie, user},
    paths,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const BUTTON_CLASS: &str =
    "rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

/// Per-request data every page needs: whose list this is, who is looking, and
/// the flash messages queued for this render.
#[derive(Clone, Debug, Default)]
pub struct PageContext {
    pub owner_name: Option<String>,
    pub authenticated: bool,
    pub flashes: Vec<String>,
}

impl PageContext {
    fn site_title(&self) -> String {
        match &self.owner_name {
            Some(name) => format!("{name}'s Watchlist"),
            None => "Watchlist".to_string(),
        }
    }
}

pub fn index_page(ctx: &PageContext, movies: &[movie::Model]) -> String {
    page(
        ctx,
        html! {
            p class="text-gray-600" { (movies.len()) " Titles" }

            @if ctx.authenticated {
                form method="post" {
                    div class="mt-4 flex flex-wrap gap-2" {
                        label class="sr-only" for="title" { "Name" }
                        input class=(INPUT_CLASS) type="text" name="title" id="title" placeholder="Name" autocomplete="off" required;
                        label class="sr-only" for="year" { "Year" }
                        input class=(INPUT_CLASS) type="text" name="year" id="year" placeholder="Year" autocomplete="off" required;
                        input class=(BUTTON_CLASS) type="submit" name="submit" value="Add";
                    }
                }
            }

            ul class="mt-6 divide-y divide-gray-200" {
                @for movie in movies {
                    (movie_row(ctx, movie))
                }
            }
        },
    )
}

fn movie_row(ctx: &PageContext, movie: &movie::Model) -> Markup {
    html! {
        li class="flex items-center justify-between py-3" {
            span class="text-gray-900" { (movie.title) " - " (movie.year) }
            span class="flex items-center gap-3 text-sm" {
                @if ctx.authenticated {
                    a class="text-blue-600 hover:text-blue-800" href=(paths::edit_movie(movie.id)) { "Edit" }
                    form class="inline" method="post" action=(paths::delete_movie(movie.id)) {
                        input class="cursor-pointer text-red-600 hover:text-red-800" type="submit" name="delete" value="Delete" onclick="return confirm('Are you sure?')";
                    }
                }
                a class="text-gray-500 hover:text-gray-700" href=(paths::imdb_search(&movie.title)) target="_blank" rel="noopener noreferrer" title="Find this movie on IMDb" { "IMDb" }
            }
        }
    }
}

pub fn login_page(ctx: &PageContext) -> String {
    page(
        ctx,
        html! {
            h3 class="text-xl font-semibold text-gray-900" { "Login" }
            form method="post" {
                div {
                    label class="block text-sm font-medium text-gray-700" for="username" { "Username" }
                    input class=(INPUT_CLASS) type="text" name="username" id="username" required;
                }
                div {
                    label class="block text-sm font-medium text-gray-700" for="password" { "Password" }
                    input class=(INPUT_CLASS) type="password" name="password" id="password" required;
                }
                input class=(BUTTON_CLASS) type="submit" name="submit" value="Submit";
            }
        },
    )
}

pub fn settings_page(ctx: &PageContext, user: &user::Model) -> String {
    page(
        ctx,
        html! {
            h3 class="text-xl font-semibold text-gray-900" { "Settings" }
            form method="post" {
                div {
                    label class="block text-sm font-medium text-gray-700" for="name" { "Your Name" }
                    input class=(INPUT_CLASS) type="text" name="name" id="name" autocomplete="off" required value=(user.name);
                }
                input class=(BUTTON_CLASS) type="submit" name="submit" value="Save";
            }
        },
    )
}

pub fn edit_page(ctx: &PageContext, movie: &movie::Model) -> String {
    page(
        ctx,
        html! {
            h3 class="text-xl font-semibold text-gray-900" { "Edit item" }
            form method="post" {
                label class="sr-only" for="title" { "Name" }
                input class=(INPUT_CLASS) type="text" name="title" id="title" autocomplete="off" required value=(movie.title);
                label class="sr-only" for="year" { "Year" }
                input class=(INPUT_CLASS) type="text" name="year" id="year" autocomplete="off" required value=(movie.year);
                input class=(BUTTON_CLASS) type="submit" name="submit" value="Update";
            }
        },
    )
}

pub fn not_found_page() -> String {
    document(
        "404",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Page Not Found - 404" }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href=(paths::INDEX) { "Go Back" }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    document(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href=(paths::INDEX) { "Back" }
                    }
                }
            }
        },
    )
}

fn page(ctx: &PageContext, body: Markup) -> String {
    let title = ctx.site_title();
    document(
        &title,
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    h2 class="text-3xl font-bold text-gray-900" { (title) }

                    nav class="mt-4 flex gap-4 text-sm" {
                        a class="text-blue-600 hover:text-blue-800" href=(paths::INDEX) { "Home" }
                        @if ctx.authenticated {
                            a class="text-blue-600 hover:text-blue-800" href=(paths::SETTINGS) { "Settings" }
                            a class="text-blue-600 hover:text-blue-800" href=(paths::LOGOUT) { "Logout" }
                        } @else {
                            a class="text-blue-600 hover:text-blue-800" href=(paths::LOGIN) { "Login" }
                        }
                    }

                    @for message in &ctx.flashes {
                        div class="mt-4 rounded-md border border-blue-200 bg-blue-50 px-4 py-2 text-blue-800" { (message) }
                    }

                    div class="mt-6 bg-white shadow rounded-lg p-8" { (body) }
                }
            }
        },
    )
}

fn document(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

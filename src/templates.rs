use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    models::{Candidate, EditForm, FieldError},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-5xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Ranked by your ratings, best first." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/search" { "Add movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Search for a movie to add it." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for entry in movies {
                                (movie_card(entry))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn movie_card(entry: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="w-24 rounded-md object-cover" src=(entry.img_url) alt=(entry.title);
            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        span class="mr-2 text-gray-400" { "#" (entry.ranking) }
                        (entry.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (entry.year) ")" }
                    }
                    span class="rounded-full bg-blue-100 px-3 py-1 text-sm font-semibold text-blue-800" {
                        (format!("{:.1}", entry.rating)) " / 10"
                    }
                }
                p class="mt-2 text-sm text-gray-600" { (entry.description) }
                p class="mt-2 text-sm italic text-gray-700" { (entry.review) }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit/{}", urlencoding::encode(&entry.title))) { "Edit" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete/{}", urlencoding::encode(&entry.title))) { "Delete" }
                }
            }
        }
    }
}

pub fn edit_page(title: &str, form: &EditForm, errors: &[FieldError]) -> String {
    page(
        "Edit Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Edit " (title) }

                        form class="mt-8 space-y-6" method="post" action=(format!("/edit/{}", urlencoding::encode(title))) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Your rating out of 10 e.g. 7.5" }
                                input class=(input_class(errors, "rating")) name="rating" id="rating" value=(form.rating);
                                (field_messages(errors, "rating"))
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Your review" }
                                input class=(input_class(errors, "review")) name="review" id="review" value=(form.review);
                                (field_messages(errors, "review"))
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="description" { "Description" }
                                input class=(input_class(errors, "description")) name="description" id="description" value=(form.description);
                                (field_messages(errors, "description"))
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Done" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn search_page(title: &str, errors: &[FieldError]) -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Add a movie" }
                        p class="mt-2 text-gray-600" { "Search the movie database by title." }

                        form class="mt-8 space-y-6" method="post" action="/search" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="title" { "Movie title" }
                                input class=(input_class(errors, "title")) name="title" id="title" value=(title);
                                (field_messages(errors, "title"))
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search movies" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

/// Candidate picker. Each entry links to `/add` with the serialized
/// candidate as its selection token, so adding needs no second provider call.
pub fn select_page(query: &str, candidates: &[(Candidate, String)]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-3xl mx-auto px-6 py-12" {
                    h1 class="text-2xl font-bold text-gray-900" { "Results for \"" (query) "\"" }

                    @if candidates.is_empty() {
                        div class="mt-8 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No matches. Try a different title." }
                        }
                    } @else {
                        div class="mt-8 space-y-3" {
                            @for (candidate, token) in candidates {
                                div class="bg-white shadow rounded-lg p-5 flex items-start justify-between gap-4" {
                                    div {
                                        h2 class="font-semibold text-gray-900" {
                                            (candidate.title)
                                            @if !candidate.release_date.is_empty() {
                                                span class="ml-2 font-normal text-gray-500" { (candidate.release_date) }
                                            }
                                        }
                                        p class="mt-1 text-sm text-gray-600 line-clamp-2" { (candidate.overview) }
                                    }
                                    a class="shrink-0 rounded-md bg-blue-600 px-3 py-1.5 text-sm font-semibold text-white hover:bg-blue-700"
                                        href=(format!("/add?candidate={}", urlencoding::encode(token))) { "Add" }
                                }
                            }
                        }
                    }

                    a class="mt-8 inline-block text-sm text-blue-600 hover:text-blue-800" href="/search" { "Search again" }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
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

fn input_class(errors: &[FieldError], field: &str) -> &'static str {
    if errors.iter().any(|e| e.field == field) {
        "mt-2 w-full rounded-md border border-red-400 px-3 py-2 focus:border-red-500 focus:outline-none focus:ring-1 focus:ring-red-500"
    } else {
        "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500"
    }
}

fn field_messages(errors: &[FieldError], field: &str) -> Markup {
    html! {
        @for err in errors.iter().filter(|e| e.field == field) {
            p class="mt-2 text-sm text-red-600" { (err.message) }
        }
    }
}

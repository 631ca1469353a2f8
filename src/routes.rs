use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{Candidate, EditForm, FieldError, SearchForm},
    templates,
};

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.catalog.list().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> AppResult<Html<String>> {
    let entry = state.catalog.get(&title).await?;
    let form = EditForm {
        rating: entry.rating.to_string(),
        review: entry.review,
        description: entry.description,
    };
    Ok(Html(templates::edit_page(&entry.title, &form, &[])))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let changes = match form.parse() {
        Ok(changes) => changes,
        Err(errors) => {
            return Ok(Html(templates::edit_page(&title, &form, &errors)).into_response());
        },
    };

    match state.catalog.update(&title, &changes).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(AppError::Validation(errors)) => {
            Ok(Html(templates::edit_page(&title, &form, &errors)).into_response())
        },
        Err(err) => Err(err),
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> AppResult<Redirect> {
    state.catalog.delete(&title).await?;
    Ok(Redirect::to("/"))
}

pub async fn search_form() -> Html<String> {
    Html(templates::search_page("", &[]))
}

pub async fn search_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let query = form.title.trim();
    if query.is_empty() {
        let errors = [FieldError::new("title", "Movie title is required")];
        return Ok(Html(templates::search_page(&form.title, &errors)));
    }

    let candidates = state.tmdb.search_movie(query).await?;
    let candidates = candidates
        .into_iter()
        .map(|c| {
            let token = serde_json::to_string(&c)?;
            Ok((c, token))
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Html(templates::select_page(query, &candidates)))
}

#[derive(Debug, Deserialize)]
pub struct AddQuery {
    candidate: String,
}

/// Creates a catalog entry from the selection token produced by the search
/// page, then sends the user straight to the edit form to rate it.
pub async fn add(
    State(state): State<Arc<AppState>>,
    Query(q): Query<AddQuery>,
) -> AppResult<Redirect> {
    let candidate: Candidate = serde_json::from_str(&q.candidate)?;
    let created = state.catalog.create(&candidate).await?;
    Ok(Redirect::to(&format!("/edit/{}", urlencoding::encode(&created.title))))
}

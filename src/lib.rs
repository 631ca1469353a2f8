pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod templates;
pub mod tmdb;

use std::sync::Arc;

use crate::{catalog::Catalog, config::Config, tmdb::TmdbClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Catalog,
    pub tmdb: Arc<TmdbClient>,
}

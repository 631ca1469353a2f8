use std::{num::NonZeroU32, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::Candidate,
};

pub struct TmdbClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, access_token: String, base_url: String, rps: u32) -> Self {
        if access_token.trim().is_empty() {
            tracing::warn!("no TMDB_ACCESS_TOKEN provided - searches will fail");
        }

        let limiter =
            Arc::new(RateLimiter::direct(Quota::per_second(NonZeroU32::new(rps.max(1)).unwrap())));
        Self { client, access_token, base_url, limiter }
    }

    /// Forwards a title query to the provider and returns its result list in
    /// provider order. The title is percent-encoded by the query builder, so
    /// spaces need no special handling.
    pub async fn search_movie(&self, title: &str) -> AppResult<Vec<Candidate>> {
        self.limiter.until_ready().await;

        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/json")
            .query(&[
                ("query", title),
                ("include_adult", "false"),
                ("language", "en-US"),
                ("page", "1"),
            ])
            .send()
            .await
            .map_err(AppError::Upstream)?
            .error_for_status()
            .map_err(AppError::Upstream)?;

        let body: SearchResponse = resp.json().await.map_err(|e| {
            if e.is_decode() { AppError::UpstreamSchema(e) } else { AppError::Upstream(e) }
        })?;

        Ok(body.results)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Candidate>,
}

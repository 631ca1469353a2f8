use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{Candidate, MovieUpdate, REVIEW_PLACEHOLDER, image_url, year_from_release_date},
};

/// Owns the movie store. Rankings are derived from the rating order and
/// rewritten on every listing, so between a write and the next `list` call
/// the stored ranking may be stale.
#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
    poster_base_url: String,
}

impl Catalog {
    pub fn new(db: DatabaseConnection, poster_base_url: String) -> Self {
        Self { db, poster_base_url }
    }

    /// All movies sorted by rating descending, ties kept in insertion order.
    /// Rewrites each row's 1-based ranking to its sort position before
    /// returning, in a single transaction.
    pub async fn list(&self) -> AppResult<Vec<movie::Model>> {
        let txn = self.db.begin().await?;

        let mut movies = movie::Entity::find()
            .order_by_desc(movie::Column::Rating)
            .order_by_asc(movie::Column::Id)
            .all(&txn)
            .await?;

        for (pos, entry) in movies.iter_mut().enumerate() {
            let rank = (pos + 1) as i32;
            if entry.ranking != rank {
                let mut active: movie::ActiveModel = entry.clone().into();
                active.ranking = Set(rank);
                active.update(&txn).await?;
                entry.ranking = rank;
            }
        }

        txn.commit().await?;
        Ok(movies)
    }

    /// Adds a provider search result to the catalog. The ranking starts at a
    /// placeholder and only becomes meaningful after the next `list`.
    pub async fn create(&self, candidate: &Candidate) -> AppResult<movie::Model> {
        if self.find_by_title(&candidate.title).await?.is_some() {
            return Err(AppError::DuplicateTitle(candidate.title.clone()));
        }

        let year = year_from_release_date(&candidate.release_date).ok_or_else(|| {
            AppError::Candidate(format!(
                "release date {:?} has no leading year",
                candidate.release_date
            ))
        })?;

        let entry = movie::ActiveModel {
            id: NotSet,
            title: Set(candidate.title.clone()),
            year: Set(year),
            description: Set(candidate.overview.clone()),
            rating: Set(candidate.vote_average),
            ranking: Set(0),
            review: Set(REVIEW_PLACEHOLDER.to_string()),
            img_url: Set(image_url(&self.poster_base_url, candidate.poster_path.as_deref())),
        };

        let created = entry.insert(&self.db).await?;
        debug!(title = %created.title, year = created.year, "added movie to catalog");
        Ok(created)
    }

    /// Applies every present field of `changes` to the movie with the given
    /// title. Rejects the edit up front when neither rating nor review is
    /// supplied, or when the rating falls outside 0..=10.
    pub async fn update(&self, title: &str, changes: &MovieUpdate) -> AppResult<movie::Model> {
        let errors = changes.validate();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let existing = self
            .find_by_title(title)
            .await?
            .ok_or_else(|| AppError::NotFound(title.to_string()))?;

        let mut active: movie::ActiveModel = existing.into();
        if let Some(rating) = changes.rating {
            active.rating = Set(rating);
        }
        if let Some(review) = &changes.review {
            active.review = Set(review.clone());
        }
        if let Some(description) = &changes.description {
            active.description = Set(description.clone());
        }

        let updated = active.update(&self.db).await?;
        debug!(title = %updated.title, rating = updated.rating, "updated movie");
        Ok(updated)
    }

    /// Removes the movie with the given title. Deleting a title that is not
    /// in the catalog is a no-op.
    pub async fn delete(&self, title: &str) -> AppResult<()> {
        let result = movie::Entity::delete_many()
            .filter(movie::Column::Title.eq(title))
            .exec(&self.db)
            .await?;
        debug!(title = %title, rows = result.rows_affected, "delete");
        Ok(())
    }

    /// Single movie by exact title, or `NotFound`.
    pub async fn get(&self, title: &str) -> AppResult<movie::Model> {
        self.find_by_title(title)
            .await?
            .ok_or_else(|| AppError::NotFound(title.to_string()))
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<movie::Model>> {
        let found = movie::Entity::find()
            .filter(movie::Column::Title.eq(title))
            .one(&self.db)
            .await?;
        Ok(found)
    }
}

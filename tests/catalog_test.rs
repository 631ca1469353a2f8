use filmrank::{
    catalog::Catalog,
    error::AppError,
    models::{Candidate, MovieUpdate, REVIEW_PLACEHOLDER},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};

const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";

async fn catalog() -> Catalog {
    // Single connection: pooled in-memory SQLite handles would each see
    // their own empty database.
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Catalog::new(db, POSTER_BASE.to_string())
}

fn candidate(title: &str, rating: f64) -> Candidate {
    Candidate {
        title: title.to_string(),
        release_date: "2002-03-18".to_string(),
        overview: format!("About {title}."),
        vote_average: rating,
        poster_path: Some("/poster.jpg".to_string()),
    }
}

#[tokio::test]
async fn create_derives_year_image_url_and_placeholders() {
    let catalog = catalog().await;

    let created = catalog.create(&candidate("Phone Booth", 7.3)).await.unwrap();

    assert_eq!(created.year, 2002);
    assert_eq!(created.rating, 7.3);
    assert_eq!(created.review, REVIEW_PLACEHOLDER);
    assert_eq!(created.img_url, format!("{POSTER_BASE}/poster.jpg"));
    assert_eq!(created.ranking, 0);
}

#[tokio::test]
async fn create_rejects_duplicate_title() {
    let catalog = catalog().await;
    catalog.create(&candidate("Inception", 8.4)).await.unwrap();

    let err = catalog.create(&candidate("Inception", 9.0)).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateTitle(title) if title == "Inception"));
}

#[tokio::test]
async fn create_rejects_unparseable_release_date() {
    let catalog = catalog().await;
    let mut c = candidate("Mystery", 5.0);
    c.release_date = "".to_string();

    let err = catalog.create(&c).await.unwrap_err();
    assert!(matches!(err, AppError::Candidate(_)));
}

#[tokio::test]
async fn list_rewrites_rankings_by_rating_descending() {
    let catalog = catalog().await;
    catalog.create(&candidate("Middling", 5.0)).await.unwrap();
    catalog.create(&candidate("Best", 9.1)).await.unwrap();
    catalog.create(&candidate("Good", 7.3)).await.unwrap();

    let movies = catalog.list().await.unwrap();

    let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["Best", "Good", "Middling"]);
    let rankings: Vec<_> = movies.iter().map(|m| m.ranking).collect();
    assert_eq!(rankings, [1, 2, 3]);

    // Persisted, not just reflected in the returned rows.
    assert_eq!(catalog.get("Best").await.unwrap().ranking, 1);
    assert_eq!(catalog.get("Middling").await.unwrap().ranking, 3);
}

#[tokio::test]
async fn list_breaks_rating_ties_by_insertion_order() {
    let catalog = catalog().await;
    catalog.create(&candidate("First In", 7.0)).await.unwrap();
    catalog.create(&candidate("Second In", 7.0)).await.unwrap();

    let movies = catalog.list().await.unwrap();
    assert_eq!(movies[0].title, "First In");
    assert_eq!(movies[1].title, "Second In");
}

#[tokio::test]
async fn rankings_follow_rating_changes_on_next_list() {
    let catalog = catalog().await;
    catalog.create(&candidate("A", 9.0)).await.unwrap();
    catalog.create(&candidate("B", 5.0)).await.unwrap();
    catalog.list().await.unwrap();

    let changes = MovieUpdate { rating: Some(9.5), ..Default::default() };
    catalog.update("B", &changes).await.unwrap();

    // Stale until the next listing recomputes it.
    assert_eq!(catalog.get("B").await.unwrap().ranking, 2);

    let movies = catalog.list().await.unwrap();
    assert_eq!(movies[0].title, "B");
    assert_eq!(movies[0].ranking, 1);
    assert_eq!(movies[1].title, "A");
    assert_eq!(movies[1].ranking, 2);
}

#[tokio::test]
async fn update_without_rating_or_review_is_rejected_and_leaves_entry_unchanged() {
    let catalog = catalog().await;
    catalog.create(&candidate("Untouched", 6.0)).await.unwrap();

    let err = catalog.update("Untouched", &MovieUpdate::default()).await.unwrap_err();
    let AppError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, "rating");
    assert_eq!(errors[1].field, "review");

    let entry = catalog.get("Untouched").await.unwrap();
    assert_eq!(entry.rating, 6.0);
    assert_eq!(entry.review, REVIEW_PLACEHOLDER);
}

#[tokio::test]
async fn update_with_out_of_range_rating_is_rejected() {
    let catalog = catalog().await;
    catalog.create(&candidate("Untouched", 6.0)).await.unwrap();

    let changes = MovieUpdate { rating: Some(11.0), ..Default::default() };
    let err = catalog.update("Untouched", &changes).await.unwrap_err();
    let AppError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "rating");

    assert_eq!(catalog.get("Untouched").await.unwrap().rating, 6.0);
}

#[tokio::test]
async fn update_applies_every_present_field() {
    let catalog = catalog().await;
    catalog.create(&candidate("Editable", 6.0)).await.unwrap();

    let changes = MovieUpdate {
        rating: Some(8.5),
        review: Some("great".to_string()),
        description: Some("rewritten".to_string()),
    };
    let updated = catalog.update("Editable", &changes).await.unwrap();

    assert_eq!(updated.rating, 8.5);
    assert_eq!(updated.review, "great");
    assert_eq!(updated.description, "rewritten");
}

#[tokio::test]
async fn update_with_only_review_leaves_other_fields_alone() {
    let catalog = catalog().await;
    catalog.create(&candidate("Partial", 6.0)).await.unwrap();

    let changes = MovieUpdate { review: Some("just a note".to_string()), ..Default::default() };
    let updated = catalog.update("Partial", &changes).await.unwrap();

    assert_eq!(updated.review, "just a note");
    assert_eq!(updated.rating, 6.0);
    assert_eq!(updated.description, "About Partial.");
}

#[tokio::test]
async fn update_of_missing_title_is_not_found() {
    let catalog = catalog().await;

    let changes = MovieUpdate { rating: Some(5.0), ..Default::default() };
    let err = catalog.update("Ghost", &changes).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(title) if title == "Ghost"));
}

#[tokio::test]
async fn delete_removes_entry_and_missing_title_is_a_noop() {
    let catalog = catalog().await;
    catalog.create(&candidate("Doomed", 4.0)).await.unwrap();
    catalog.create(&candidate("Keeper", 8.0)).await.unwrap();

    catalog.delete("Doomed").await.unwrap();
    let movies = catalog.list().await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Keeper");
    assert_eq!(movies[0].ranking, 1);

    catalog.delete("Doomed").await.unwrap();
    assert_eq!(catalog.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_update_list_round_trip() {
    let catalog = catalog().await;
    catalog.create(&candidate("Round Trip", 3.0)).await.unwrap();
    catalog.create(&candidate("Other", 7.0)).await.unwrap();

    let changes = MovieUpdate {
        rating: Some(9.9),
        review: Some("a keeper".to_string()),
        description: None,
    };
    catalog.update("Round Trip", &changes).await.unwrap();

    let movies = catalog.list().await.unwrap();
    let top = &movies[0];
    assert_eq!(top.title, "Round Trip");
    assert_eq!(top.year, 2002);
    assert_eq!(top.rating, 9.9);
    assert_eq!(top.review, "a keeper");
    assert_eq!(top.ranking, 1);
}

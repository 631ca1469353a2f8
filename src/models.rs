use serde::{Deserialize, Serialize};

/// Review text a freshly added movie starts out with, prompting the user to
/// replace it via the edit form.
pub const REVIEW_PLACEHOLDER: &str = "Write something here";

/// A provider search result the user has not yet added to the catalog.
///
/// Serializes both ways: deserialized from the TMDB search response, and
/// round-tripped through the `/add` query parameter as the selection token.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Candidate {
    pub title: String,
    pub release_date: String,
    pub overview: String,
    pub vote_average: f64,
    pub poster_path: Option<String>,
}

/// Changes requested through the edit form. Absent fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct MovieUpdate {
    pub rating: Option<f64>,
    pub review: Option<String>,
    pub description: Option<String>,
}

impl MovieUpdate {
    /// Cross-field validation for an edit. Returns zero or more field-scoped
    /// errors; when both rating and review are absent the same message is
    /// attached to both fields so it renders next to each input.
    pub fn validate(&self) -> Vec<FieldError> {
        if self.rating.is_none() && self.review.is_none() {
            let message = "Fill in at least one of rating or review";
            return vec![FieldError::new("rating", message), FieldError::new("review", message)];
        }

        let mut errors = Vec::new();
        if let Some(rating) = self.rating {
            if !(0.0..=10.0).contains(&rating) {
                errors.push(FieldError::new("rating", "Rating must be from 0 to 10"));
            }
        }
        errors
    }
}

/// A validation failure attached to a single form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Raw edit form submission. HTML forms post empty strings for untouched
/// inputs, so everything arrives as a string and is normalized in `parse`.
#[derive(Debug, Default, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub description: String,
}

impl EditForm {
    /// Normalizes blank inputs to "absent" and parses the rating string.
    pub fn parse(&self) -> Result<MovieUpdate, Vec<FieldError>> {
        let rating = match non_blank(&self.rating) {
            None => None,
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    return Err(vec![FieldError::new("rating", "Rating must be a number")]);
                },
            },
        };

        Ok(MovieUpdate {
            rating,
            review: non_blank(&self.review).map(str::to_string),
            description: non_blank(&self.description).map(str::to_string),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub title: String,
}

fn non_blank(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

/// Year a provider `release_date` string falls in: the integer prefix before
/// the first hyphen (`"2002-03-18"` -> 2002).
pub fn year_from_release_date(release_date: &str) -> Option<i32> {
    release_date.split('-').next()?.trim().parse().ok()
}

/// Full poster URL from the configured base and the provider's path fragment.
pub fn image_url(poster_base: &str, poster_path: Option<&str>) -> String {
    format!("{}{}", poster_base.trim_end_matches('/'), poster_path.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_takes_prefix_before_first_hyphen() {
        assert_eq!(year_from_release_date("2002-03-18"), Some(2002));
        assert_eq!(year_from_release_date("1999"), Some(1999));
    }

    #[test]
    fn year_rejects_blank_and_non_numeric_dates() {
        assert_eq!(year_from_release_date(""), None);
        assert_eq!(year_from_release_date("unknown-01-01"), None);
    }

    #[test]
    fn image_url_joins_base_and_fragment() {
        assert_eq!(
            image_url("https://image.tmdb.org/t/p/w500", Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            image_url("https://image.tmdb.org/t/p/w500/", None),
            "https://image.tmdb.org/t/p/w500"
        );
    }

    #[test]
    fn update_with_neither_rating_nor_review_flags_both_fields() {
        let errors = MovieUpdate::default().validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "rating");
        assert_eq!(errors[1].field, "review");
        assert_eq!(errors[0].message, errors[1].message);
    }

    #[test]
    fn update_rating_out_of_range_is_rejected() {
        let update = MovieUpdate { rating: Some(11.0), ..Default::default() };
        let errors = update.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "rating");

        let update = MovieUpdate { rating: Some(-0.5), ..Default::default() };
        assert_eq!(update.validate().len(), 1);
    }

    #[test]
    fn update_with_only_review_is_valid() {
        let update = MovieUpdate { review: Some("great".to_string()), ..Default::default() };
        assert!(update.validate().is_empty());
    }

    #[test]
    fn edit_form_blanks_become_absent() {
        let form = EditForm { rating: "  ".into(), review: "".into(), description: "".into() };
        let update = form.parse().unwrap();
        assert!(update.rating.is_none());
        assert!(update.review.is_none());
        assert!(update.description.is_none());
    }

    #[test]
    fn edit_form_parses_rating() {
        let form =
            EditForm { rating: "8.5".into(), review: "great".into(), description: "".into() };
        let update = form.parse().unwrap();
        assert_eq!(update.rating, Some(8.5));
        assert_eq!(update.review.as_deref(), Some("great"));
    }

    #[test]
    fn edit_form_rejects_non_numeric_rating() {
        let form = EditForm { rating: "ten".into(), ..Default::default() };
        let errors = form.parse().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "rating");
    }
}

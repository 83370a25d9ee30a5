use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::calendar::{day_key, normalize_showtimes};
use crate::movies::types::MovieWithScreeningsOneDay;
use crate::store::{DocumentStore, StoreError};

pub const DEFAULT_SCREENINGS_COLLECTION: &str = "website-by-date-screenings";

/// Selects which by-date screenings collection a day query reads from. The
/// curated subset lives under the base name, the unfiltered variant under
/// `{base}-all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayQueryOptions {
    pub all_movies: bool,
    pub collection_base: String,
}

impl Default for DayQueryOptions {
    fn default() -> Self {
        DayQueryOptions {
            all_movies: false,
            collection_base: DEFAULT_SCREENINGS_COLLECTION.to_string(),
        }
    }
}

impl DayQueryOptions {
    pub fn collection_name(&self) -> String {
        if self.all_movies {
            format!("{}-all", self.collection_base)
        } else {
            self.collection_base.clone()
        }
    }
}

#[derive(Deserialize)]
struct DayDocument {
    #[serde(default)]
    movies: Vec<MovieWithScreeningsOneDay>,
}

/// The movies showing on one day, with normalized theater lists. Every store
/// document matching the date contributes its whole `movies` array; nothing
/// is merged by movie id at this stage, so a movie split across two documents
/// stays split. Store failures propagate untouched.
pub async fn fetch_day_movies(
    store: &dyn DocumentStore,
    date: NaiveDate,
    options: &DayQueryOptions,
) -> Result<Vec<MovieWithScreeningsOneDay>, StoreError> {
    let documents = store
        .query_eq(&options.collection_name(), "date", json!(day_key(date)))
        .await?;

    let mut movies = Vec::new();
    for document in documents {
        let day_document: DayDocument = serde_json::from_value(document)?;
        movies.extend(day_document.movies);
    }
    for movie in &mut movies {
        movie.showtimes_theater = normalize_showtimes(std::mem::take(&mut movie.showtimes_theater));
    }
    Ok(movies)
}

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use futures_util::future::try_join_all;
use serde::Deserialize;
use serde_json::json;

use crate::calendar::{day_key, next_movie_week};
use crate::movies::day::{fetch_day_movies, DayQueryOptions};
use crate::movies::types::{
    MovieDetail, MovieWithScreeningsOneDay, MovieWithScreeningsSeveralDays, ReducedMovie, Review,
    SearchMovie,
};
use crate::movies::week::pivot_week;
use crate::store::cache::ReadCache;
use crate::store::{DocumentStore, StoreError};

const EXTRA_DOCS_COLLECTION: &str = "website-extra-docs";
const MOVIE_LIST_COLLECTION: &str = "website-movie-list";
const BY_MOVIE_COLLECTION: &str = "website-by-movie-screenings";
const ALL_REVIEWS_DOC: &str = "all-reviews";

// Listings tolerate staleness; each read-through has its own window.
const DAY_MOVIES_REVALIDATE: Duration = Duration::from_secs(60);
const SEARCH_INDEX_REVALIDATE: Duration = Duration::from_secs(10);
const MOVIE_LIST_REVALIDATE: Duration = Duration::from_secs(180);
const REVIEWS_REVALIDATE: Duration = Duration::from_secs(60);
const SINGLE_MOVIE_REVALIDATE: Duration = Duration::from_secs(60);

/// Read side of the movie catalogue: every public method is a cached
/// read-through over the document store collaborator.
pub struct MovieStore {
    store: Arc<dyn DocumentStore>,
    cache: ReadCache,
    screenings_base: String,
}

#[derive(Deserialize)]
struct SearchIndexDocument {
    #[serde(default)]
    elements: Vec<SearchMovie>,
}

#[derive(Deserialize)]
struct ReducedListDocument {
    #[serde(default)]
    e: Vec<ReducedMovie>,
}

#[derive(Deserialize)]
struct ReviewsDocument {
    #[serde(default)]
    elements: Vec<Review>,
}

impl MovieStore {
    pub fn new(store: Arc<dyn DocumentStore>, screenings_base: String) -> Self {
        MovieStore {
            store,
            cache: ReadCache::new(),
            screenings_base,
        }
    }

    pub fn day_options(&self, all_movies: bool) -> DayQueryOptions {
        DayQueryOptions {
            all_movies,
            collection_base: self.screenings_base.clone(),
        }
    }

    pub async fn day_movies(
        &self,
        date: NaiveDate,
        options: &DayQueryOptions,
    ) -> Result<Vec<MovieWithScreeningsOneDay>, StoreError> {
        let key = format!("day-movies:{}:{}", options.collection_name(), day_key(date));
        self.cache
            .get_or_fetch(&key, DAY_MOVIES_REVALIDATE, || {
                fetch_day_movies(self.store.as_ref(), date, options)
            })
            .await
    }

    /// The weekly view: one day query per date of the upcoming listings
    /// week, all in flight at once, pivoted once every day has resolved. A
    /// single failed day fails the whole week; a partial week would be worse
    /// than a retried request.
    pub async fn week_movies(&self) -> Result<Vec<MovieWithScreeningsSeveralDays>, StoreError> {
        self.week_movies_for(&next_movie_week()).await
    }

    pub async fn week_movies_for(
        &self,
        week: &[NaiveDate],
    ) -> Result<Vec<MovieWithScreeningsSeveralDays>, StoreError> {
        let options = self.day_options(false);
        let fetches = week.iter().map(|&date| {
            let options = options.clone();
            async move {
                let movies = self.day_movies(date, &options).await?;
                Ok::<_, StoreError>((date, movies))
            }
        });
        let days = try_join_all(fetches).await?;
        Ok(pivot_week(days))
    }

    /// The flat search index, from the extra-docs documents flagged for
    /// search.
    pub async fn search_movies_index(&self) -> Result<Vec<SearchMovie>, StoreError> {
        self.cache
            .get_or_fetch("search-index", SEARCH_INDEX_REVALIDATE, || async move {
                let documents = self
                    .store
                    .query_eq(EXTRA_DOCS_COLLECTION, "search", json!(true))
                    .await?;
                let mut movies = Vec::new();
                for document in documents {
                    let index: SearchIndexDocument = serde_json::from_value(document)?;
                    movies.extend(index.elements);
                }
                Ok(movies)
            })
            .await
    }

    /// Same index, from the compact movie-list documents (single-letter
    /// field names on the wire, expanded on read).
    pub async fn all_movies_index(&self) -> Result<Vec<SearchMovie>, StoreError> {
        self.cache
            .get_or_fetch("movie-list", MOVIE_LIST_REVALIDATE, || async move {
                let documents = self
                    .store
                    .query_eq(MOVIE_LIST_COLLECTION, "s", json!(true))
                    .await?;
                let mut movies = Vec::new();
                for document in documents {
                    let list: ReducedListDocument = serde_json::from_value(document)?;
                    movies.extend(list.e.into_iter().map(SearchMovie::from));
                }
                Ok(movies)
            })
            .await
    }

    pub async fn reviewed_movies(&self) -> Result<Vec<Review>, StoreError> {
        self.cache
            .get_or_fetch("reviewed-movies", REVIEWS_REVALIDATE, || async move {
                let document = self
                    .store
                    .get_by_id(EXTRA_DOCS_COLLECTION, ALL_REVIEWS_DOC)
                    .await?
                    .ok_or_else(|| StoreError::NotFound(ALL_REVIEWS_DOC.to_string()))?;
                let reviews: ReviewsDocument = serde_json::from_value(document)?;
                Ok(reviews.elements)
            })
            .await
    }

    /// A single movie with its full screening history. Absence is a regular
    /// outcome (`None`), not an error.
    pub async fn movie_by_id(&self, id: &str) -> Result<Option<MovieDetail>, StoreError> {
        let key = format!("single-movie:{}", id);
        self.cache
            .get_or_fetch(&key, SINGLE_MOVIE_REVALIDATE, || async move {
                let documents = self
                    .store
                    .query_eq(BY_MOVIE_COLLECTION, "id", json!(id))
                    .await?;
                match documents.into_iter().next() {
                    Some(document) => {
                        let detail: MovieDetail = serde_json::from_value(document)?;
                        Ok(Some(detail))
                    }
                    None => Ok(None),
                }
            })
            .await
    }
}

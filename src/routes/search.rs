use actix_web::{
    web::{Data, Query},
    HttpResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::Instrument;

use crate::movies::search::search_movies;
use crate::movies::MovieStore;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    pub tags: Option<String>,
}

/// Ranked search over the flat movie index. An empty query short-circuits to
/// an empty list without touching the store index.
pub async fn get_search_results(movies: Data<MovieStore>, info: Query<SearchQuery>) -> HttpResponse {
    let query_term = info.query.trim();
    if query_term.is_empty() {
        return HttpResponse::Ok().json(Vec::<serde_json::Value>::new());
    }

    let query_span = tracing::info_span!("Movie search result");
    let index = match movies.all_movies_index().instrument(query_span).await {
        Ok(index) => index,
        Err(err) => {
            tracing::error!("Search index fetch failed: {}", err);
            return HttpResponse::InternalServerError().json(json!({
                "error": err.to_string()
            }));
        }
    };

    let tags: Vec<String> = info
        .tags
        .as_deref()
        .map(|csv| csv.split(',').map(|tag| tag.trim().to_string()).collect())
        .unwrap_or_default();

    HttpResponse::Ok().json(search_movies(&index, query_term, &tags))
}

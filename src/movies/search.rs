use crate::movies::types::SearchMovie;

pub const MAX_SEARCH_RESULTS: usize = 50;

/// Lowercases and strips the accents that show up in French titles and
/// director names, so "Méliès" matches "melies".
pub fn fold_search_text(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        match c {
            'à' | 'â' | 'ä' | 'á' | 'ã' => folded.push('a'),
            'é' | 'è' | 'ê' | 'ë' => folded.push('e'),
            'î' | 'ï' | 'í' | 'ì' => folded.push('i'),
            'ô' | 'ö' | 'ó' | 'ò' | 'õ' => folded.push('o'),
            'û' | 'ü' | 'ù' | 'ú' => folded.push('u'),
            'ç' => folded.push('c'),
            'ñ' => folded.push('n'),
            'œ' => folded.push_str("oe"),
            'æ' => folded.push_str("ae"),
            _ => folded.push(c),
        }
    }
    folded
}

/// Case- and accent-insensitive substring match.
pub fn string_match(query: &str, target: &str) -> bool {
    fold_search_text(target).contains(&fold_search_text(query))
}

// Tag selection is carried through the request but does not restrict results.
// TODO: filter on movie tags once the search index records them.
fn matches_tags(_tags: &[String]) -> bool {
    true
}

/// Ranked title/director search over the flat index: substring match on the
/// concatenated text fields, ordered by descending relevance score (ties keep
/// index order), capped at [`MAX_SEARCH_RESULTS`]. An empty query is a no-op,
/// not "match everything".
pub fn search_movies(index: &[SearchMovie], query: &str, tags: &[String]) -> Vec<SearchMovie> {
    if query.is_empty() {
        return Vec::new();
    }
    let mut matches: Vec<SearchMovie> = index
        .iter()
        .filter(|movie| {
            let haystack = format!(
                "{} {} {}",
                movie.directors,
                movie.title,
                movie.original_title.as_deref().unwrap_or("")
            );
            string_match(query, &haystack) && matches_tags(tags)
        })
        .cloned()
        .collect();
    matches.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    matches.truncate(MAX_SEARCH_RESULTS);
    matches
}

use std::collections::HashSet;

use crate::movies::types::ShowtimesTheater;

/// Cleans up a raw theater list for one movie on one day: duplicate theaters
/// (same `clean_name`) collapse to the first occurrence, theaters come back
/// ordered by `clean_name`, and each theater's screenings are sorted by time.
/// Nothing else is dropped.
pub fn normalize_showtimes(raw: Vec<ShowtimesTheater>) -> Vec<ShowtimesTheater> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut theaters: Vec<ShowtimesTheater> = Vec::with_capacity(raw.len());
    for theater in raw {
        if seen.insert(theater.clean_name.clone()) {
            theaters.push(theater);
        }
    }
    theaters.sort_by(|a, b| a.clean_name.cmp(&b.clean_name));
    for theater in &mut theaters {
        theater
            .screenings
            .sort_by(|a, b| a.time.total_cmp(&b.time));
    }
    theaters
}

/// Groups screening times into fixed-size display rows, left to right. The
/// last row may be short.
pub fn split_into_rows<T: Clone>(items: &[T], row_size: usize) -> Vec<Vec<T>> {
    if row_size == 0 {
        return vec![items.to_vec()];
    }
    items.chunks(row_size).map(|chunk| chunk.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::types::Screening;

    fn theater(name: &str, clean_name: &str, times: &[f64]) -> ShowtimesTheater {
        ShowtimesTheater {
            name: name.to_string(),
            clean_name: clean_name.to_string(),
            zipcode: "75005".to_string(),
            screenings: times
                .iter()
                .map(|&time| Screening { time, notes: None })
                .collect(),
        }
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(normalize_showtimes(Vec::new()).is_empty());
    }

    #[test]
    fn duplicate_clean_names_keep_the_first_occurrence() {
        let normalized = normalize_showtimes(vec![
            theater("LE CHAMPO", "champo", &[20.0]),
            theater("Le Champo", "champo", &[18.0]),
        ]);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].name, "LE CHAMPO");
        assert_eq!(normalized[0].screenings[0].time, 20.0);
    }

    #[test]
    fn theaters_sort_by_clean_name_not_display_name() {
        let normalized = normalize_showtimes(vec![
            theater("Le Zola", "zola", &[21.0]),
            theater("Cinéma B", "b", &[19.0]),
        ]);
        let order: Vec<&str> = normalized
            .iter()
            .map(|theater| theater.clean_name.as_str())
            .collect();
        assert_eq!(order, vec!["b", "zola"]);
    }

    #[test]
    fn screenings_sort_ascending_within_a_theater() {
        let normalized = normalize_showtimes(vec![theater("A", "a", &[21.5, 14.0, 19.25])]);
        let times: Vec<f64> = normalized[0]
            .screenings
            .iter()
            .map(|screening| screening.time)
            .collect();
        assert_eq!(times, vec![14.0, 19.25, 21.5]);
    }

    #[test]
    fn notes_travel_with_their_screening() {
        let mut input = theater("A", "a", &[20.0, 10.0]);
        input.screenings[0].notes = Some("VOSTF".to_string());
        let normalized = normalize_showtimes(vec![input]);
        assert_eq!(normalized[0].screenings[1].notes.as_deref(), Some("VOSTF"));
        assert_eq!(normalized[0].screenings[0].notes, None);
    }

    #[test]
    fn rows_split_left_to_right_with_short_last_row() {
        let rows = split_into_rows(&[14.0, 16.0, 18.0, 20.0, 22.0], 3);
        assert_eq!(rows, vec![vec![14.0, 16.0, 18.0], vec![20.0, 22.0]]);
        assert_eq!(split_into_rows::<f64>(&[], 3), Vec::<Vec<f64>>::new());
    }
}

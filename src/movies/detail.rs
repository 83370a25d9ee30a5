use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::calendar::{parse_day_key, start_of_today};
use crate::movies::types::{MovieDetail, TheaterScreenings};

/// The dates of `detail.screenings` on or after today (Paris), theaters
/// ordered by canonical name within each date. Today stays in even if its
/// hours have passed.
pub fn upcoming_screenings(detail: &MovieDetail) -> BTreeMap<String, Vec<TheaterScreenings>> {
    upcoming_screenings_from(detail, start_of_today())
}

pub fn upcoming_screenings_from(
    detail: &MovieDetail,
    today: NaiveDate,
) -> BTreeMap<String, Vec<TheaterScreenings>> {
    detail
        .screenings
        .iter()
        .filter(|(date, _)| matches!(parse_day_key(date), Some(parsed) if parsed >= today))
        .map(|(date, theaters)| {
            let mut theaters = theaters.clone();
            theaters.sort_by(|a, b| a.clean_name.cmp(&b.clean_name));
            (date.clone(), theaters)
        })
        .collect()
}

use tracing::debug;

use crate::error::{CleanseError, Result};
use crate::record::CustomerRecord;
use crate::repair::similarity::ratio;

/// Canonical country names, in reference order. Ties in similarity go to
/// the earlier entry.
pub const COUNTRIES: [&str; 32] = [
    "United States",
    "Germany",
    "Ukraine",
    "United Kingdom",
    "Spain",
    "Poland",
    "Italy",
    "France",
    "Netherlands",
    "Belarus",
    "Sweden",
    "Belgium",
    "Romania",
    "North Macedonia",
    "Slovakia",
    "Lithuania",
    "Bosnia and Herzegovina",
    "Austria",
    "Greece",
    "Ireland",
    "Bulgaria",
    "Serbia",
    "Moldova",
    "Estonia",
    "Finland",
    "Latvia",
    "Croatia",
    "Hungary",
    "Denmark",
    "Norway",
    "Portugal",
    "Czech Republic",
];

/// Candidates scoring below this are not considered matches at all.
const MATCH_CUTOFF: f64 = 0.6;

/// Replace every row's country with its best approximate match from the
/// canonical vocabulary. Rows are corrected independently; a value with no
/// candidate at or above the cutoff aborts the run.
pub fn correct_country_spelling(rows: &mut [CustomerRecord]) -> Result<()> {
    for row in rows.iter_mut() {
        let corrected = closest_country(&row.country)?;
        if corrected != row.country {
            debug!(from = %row.country, to = %corrected, "corrected country");
            row.country = corrected.to_string();
        }
    }
    Ok(())
}

fn closest_country(value: &str) -> Result<&'static str> {
    let mut best: Option<(&'static str, f64)> = None;
    for candidate in COUNTRIES {
        let score = ratio(value, candidate);
        if score >= MATCH_CUTOFF && best.map_or(true, |(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    best.map(|(name, _)| name).ok_or_else(|| CleanseError::NoMatch {
        value: value.to_string(),
    })
}

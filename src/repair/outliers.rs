use tracing::{debug, info};

use crate::record::CustomerRecord;

/// Detect age outliers with Tukey's fences and repair them in place.
///
/// Quartiles are computed over the present ages only. Any age strictly
/// outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]` is cleared together with the
/// row's birthday (an implausible age makes the paired birthdate equally
/// implausible). Every absent age, whether originally missing or cleared
/// here, is then filled with one arithmetic mean taken over the ages still
/// present after clearing. Birthdays of cleared rows stay absent.
pub fn resolve_age_outliers(rows: &mut [CustomerRecord]) {
    let mut present: Vec<f64> = rows.iter().filter_map(|r| r.age).collect();
    if present.is_empty() {
        debug!("no present ages; nothing to resolve");
        return;
    }
    present.sort_by(f64::total_cmp);

    let q1 = quantile(&present, 0.25);
    let q3 = quantile(&present, 0.75);
    let iqr = q3 - q1;
    let lower = q1 - 1.5 * iqr;
    let upper = q3 + 1.5 * iqr;
    debug!(q1, q3, lower, upper, "age outlier bounds");

    let mut cleared = 0usize;
    for row in rows.iter_mut() {
        if let Some(age) = row.age {
            if age < lower || age > upper {
                row.age = None;
                row.birthday = None;
                cleared += 1;
            }
        }
    }

    let remaining: Vec<f64> = rows.iter().filter_map(|r| r.age).collect();
    if remaining.is_empty() {
        info!(cleared, "all ages cleared; nothing left to impute from");
        return;
    }
    // one global mean fills every gap; it is never recomputed per row
    let mean = remaining.iter().sum::<f64>() / remaining.len() as f64;

    let mut imputed = 0usize;
    for row in rows.iter_mut() {
        if row.age.is_none() {
            row.age = Some(mean);
            imputed += 1;
        }
    }
    info!(cleared, imputed, mean, "resolved age outliers");
}

/// Quantile of a sorted slice with linear interpolation between the two
/// nearest ranks (position `(n - 1) * q`).
fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let pos = (sorted.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(id: &str, age: Option<f64>) -> CustomerRecord {
        CustomerRecord {
            city: "Berlin".into(),
            country: "Germany".into(),
            customer_id: id.into(),
            first_name: "Ada".into(),
            last_name: "Meyer".into(),
            birthday: NaiveDate::from_ymd_opt(1990, 4, 12),
            age,
            email: "a@b.de".into(),
            newsletter: "True".into(),
        }
    }

    #[test]
    fn quantile_interpolates_linearly() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&v, 0.25), 1.75);
        assert_eq!(quantile(&v, 0.5), 2.5);
        assert_eq!(quantile(&v, 0.75), 3.25);
        assert_eq!(quantile(&[7.0], 0.25), 7.0);
    }

    #[test]
    fn outlier_is_cleared_and_imputed_with_the_mean_of_the_rest() {
        let mut rows = vec![
            row("C-1", Some(20.0)),
            row("C-2", Some(22.0)),
            row("C-3", Some(24.0)),
            row("C-4", Some(26.0)),
            row("C-5", Some(28.0)),
            row("C-6", Some(999.0)),
        ];
        resolve_age_outliers(&mut rows);

        // mean of the five surviving ages
        assert_eq!(rows[5].age, Some(24.0));
        assert_eq!(rows[5].birthday, None);
        // non-outlier rows keep age and birthday
        assert_eq!(rows[0].age, Some(20.0));
        assert!(rows[0].birthday.is_some());
    }

    #[test]
    fn originally_absent_ages_get_the_same_mean_without_touching_birthday() {
        let mut rows = vec![
            row("C-1", Some(20.0)),
            row("C-2", Some(22.0)),
            row("C-3", Some(24.0)),
            row("C-4", Some(26.0)),
            row("C-5", Some(28.0)),
            row("C-6", None),
            row("C-7", Some(999.0)),
        ];
        resolve_age_outliers(&mut rows);

        assert_eq!(rows[5].age, Some(24.0));
        assert!(rows[5].birthday.is_some());
        assert_eq!(rows[6].age, Some(24.0));
        assert_eq!(rows[6].birthday, None);
    }

    #[test]
    fn no_age_lands_strictly_outside_the_original_bounds() {
        let ages: [f64; 9] = [18.0, 21.0, 25.0, 30.0, 33.0, 35.0, 40.0, 150.0, -60.0];
        let mut sorted: Vec<f64> = ages.iter().copied().filter(|a| a.is_finite()).collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let q1 = quantile(&sorted, 0.25);
        let q3 = quantile(&sorted, 0.75);
        let (lower, upper) = (q1 - 1.5 * (q3 - q1), q3 + 1.5 * (q3 - q1));

        let mut rows: Vec<CustomerRecord> = ages
            .iter()
            .enumerate()
            .map(|(i, &a)| row(&format!("C-{i}"), Some(a)))
            .collect();
        resolve_age_outliers(&mut rows);

        let remaining: Vec<f64> = ages
            .iter()
            .copied()
            .filter(|&a| a >= lower && a <= upper)
            .collect();
        let mean = remaining.iter().sum::<f64>() / remaining.len() as f64;
        for r in &rows {
            let age = r.age.unwrap();
            assert!((age >= lower && age <= upper) || age == mean);
        }
    }

    #[test]
    fn table_without_any_present_age_is_left_unchanged() {
        let mut rows = vec![row("C-1", None), row("C-2", None)];
        resolve_age_outliers(&mut rows);
        assert_eq!(rows[0].age, None);
        assert!(rows[0].birthday.is_some());
    }

    #[test]
    fn all_equal_ages_produce_no_outliers() {
        let mut rows = vec![row("C-1", Some(30.0)), row("C-2", Some(30.0))];
        resolve_age_outliers(&mut rows);
        assert_eq!(rows[0].age, Some(30.0));
        assert!(rows[1].birthday.is_some());
    }
}

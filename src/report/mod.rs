use std::fmt;

use crate::record::CustomerRecord;

/// Frequency table over the corrected country column: one row per distinct
/// value, ordered by descending count, ties in first-encountered order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryLookup {
    pub rows: Vec<(String, u64)>,
}

/// Count country occurrences in one pass over the table. Pure; the input
/// is not modified.
pub fn country_lookup(rows: &[CustomerRecord]) -> CountryLookup {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for row in rows {
        match counts.iter_mut().find(|(name, _)| *name == row.country) {
            Some((_, n)) => *n += 1,
            None => counts.push((row.country.clone(), 1)),
        }
    }
    counts.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
    CountryLookup { rows: counts }
}

impl fmt::Display for CountryLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|(name, _)| name.len())
            .chain(std::iter::once("Country".len()))
            .max()
            .unwrap_or(0);
        writeln!(f, "{:<width$}  Occurrences", "Country")?;
        for (name, count) in &self.rows {
            writeln!(f, "{name:<width$}  {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str) -> CustomerRecord {
        CustomerRecord {
            city: "Berlin".into(),
            country: country.into(),
            customer_id: "C-1".into(),
            first_name: "Ada".into(),
            last_name: "Meyer".into(),
            birthday: None,
            age: None,
            email: "a@b.de".into(),
            newsletter: "True".into(),
        }
    }

    #[test]
    fn counts_descend_with_first_seen_tiebreak() {
        let rows = vec![row("Germany"), row("Germany"), row("Spain")];
        let lookup = country_lookup(&rows);
        assert_eq!(
            lookup.rows,
            vec![("Germany".to_string(), 2), ("Spain".to_string(), 1)]
        );

        // Spain and Norway tie at 1; Spain was seen first
        let rows = vec![row("Spain"), row("Norway"), row("Germany"), row("Germany")];
        let lookup = country_lookup(&rows);
        assert_eq!(
            lookup.rows,
            vec![
                ("Germany".to_string(), 2),
                ("Spain".to_string(), 1),
                ("Norway".to_string(), 1),
            ]
        );
    }

    #[test]
    fn rendering_aligns_columns_and_sums_to_table_size() {
        let rows = vec![row("Germany"), row("Spain"), row("Germany")];
        let lookup = country_lookup(&rows);
        let rendered = lookup.to_string();
        assert!(rendered.starts_with("Country  Occurrences"));
        assert!(rendered.contains("Germany  2"));
        assert!(rendered.contains("Spain    1"));
        assert_eq!(lookup.rows.iter().map(|(_, n)| n).sum::<u64>(), 3);
    }
}

use std::{collections::HashSet, path::Path};

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::error::{CleanseError, Result};
use crate::record::{CustomerRecord, EXPECTED_HEADERS};

/// Validate, parse, and merge the given CSV sources into one table with
/// exact-duplicate rows removed (first occurrence wins, order stable).
///
/// Every path is checked eagerly before any row enters the table: the file
/// must exist, carry a `.csv` extension (case-insensitive), and its header
/// row must equal the mandatory schema exactly, in order.
pub fn merge_sources<P: AsRef<Path>>(sources: &[P]) -> Result<Vec<CustomerRecord>> {
    if sources.is_empty() {
        return Err(CleanseError::NoInputs);
    }

    let mut combined: Vec<CustomerRecord> = Vec::new();
    for source in sources {
        let path = source.as_ref();
        validate_source(path)?;
        let rows = read_records(path)?;
        debug!(path = %path.display(), rows = rows.len(), "parsed source");
        combined.extend(rows);
    }

    let merged = dedup_keep_first(combined);
    info!(rows = merged.len(), sources = sources.len(), "merged sources");
    Ok(merged)
}

fn validate_source(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CleanseError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(CleanseError::Extension {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Parse one validated file into rows, rejecting it outright on a header
/// mismatch. The newsletter field is coerced to uniform text here, before
/// any downstream comparison sees it.
fn read_records(path: &Path) -> Result<Vec<CustomerRecord>> {
    let mut rdr = ReaderBuilder::new()
        .from_path(path)
        .map_err(|source| CleanseError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|source| CleanseError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers != EXPECTED_HEADERS {
        return Err(CleanseError::Schema {
            path: path.to_path_buf(),
            found: headers,
        });
    }

    let mut rows = Vec::new();
    for result in rdr.deserialize::<CustomerRecord>() {
        let mut record = result.map_err(|source| CleanseError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        record.coerce_newsletter();
        rows.push(record);
    }
    Ok(rows)
}

fn dedup_keep_first(rows: Vec<CustomerRecord>) -> Vec<CustomerRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|row| seen.insert(row.dedup_key()))
        .collect()
}

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::error::{CleanseError, Result};
use crate::record::{CustomerRecord, EXPECTED_HEADERS};

/// Serialize the cleaned table to a single-worksheet xlsx file at `path`,
/// overwriting any existing file. Header row included, no index column;
/// absent cells are left blank.
pub fn write_xlsx(rows: &[CustomerRecord], path: &Path) -> Result<()> {
    write_workbook(rows, path).map_err(|source| CleanseError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = rows.len(), "stored the cleaned table");
    Ok(())
}

fn write_workbook(
    rows: &[CustomerRecord],
    path: &Path,
) -> std::result::Result<(), rust_xlsxwriter::XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in EXPECTED_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (i, record) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, &record.city)?;
        sheet.write_string(r, 1, &record.country)?;
        sheet.write_string(r, 2, &record.customer_id)?;
        sheet.write_string(r, 3, &record.first_name)?;
        sheet.write_string(r, 4, &record.last_name)?;
        if let Some(birthday) = record.birthday {
            sheet.write_string(r, 5, birthday.format("%Y-%m-%d").to_string())?;
        }
        if let Some(age) = record.age {
            sheet.write_number(r, 6, age)?;
        }
        sheet.write_string(r, 7, &record.email)?;
        sheet.write_string(r, 8, &record.newsletter)?;
    }

    workbook.save(path)
}

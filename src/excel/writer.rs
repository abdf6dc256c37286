//! Column writers - locate a header in row 1, overwrite cells below it, save

use crate::error::{SheetError, SheetResult};
use crate::excel::document::{header_column, last_row, set_cell, WorkbookDocument};
use crate::types::CellValue;
use std::path::Path;
use tracing::debug;
use umya_spreadsheet::Worksheet;

/// Row 2, the first row under the header
const FIRST_DATA_ROW: u32 = 2;

fn find_column(sheet: &Worksheet, sheet_name: &str, column_name: &str) -> SheetResult<u32> {
    header_column(sheet, column_name).ok_or_else(|| SheetError::ColumnNotFound {
        column: column_name.to_string(),
        sheet: sheet_name.to_string(),
    })
}

/// Overwrite the row-2 cell under `column_name` and save the workbook.
///
/// Nothing is written to disk when the sheet or column is missing.
pub fn write_data<P: AsRef<Path>>(
    path: P,
    sheet_name: &str,
    column_name: &str,
    new_value: impl Into<CellValue>,
) -> SheetResult<()> {
    let mut document = WorkbookDocument::open(path)?;
    let sheet = document.sheet_mut(sheet_name)?;
    let col = find_column(sheet, sheet_name, column_name)?;

    set_cell(sheet, col, FIRST_DATA_ROW, &new_value.into());
    debug!(
        "Wrote row {} of column '{}' in '{}'",
        FIRST_DATA_ROW, column_name, sheet_name
    );
    document.save()
}

/// Overwrite every cell under `column_name` from row 2 to the last used row, then save
pub fn write_data2<P: AsRef<Path>>(
    path: P,
    sheet_name: &str,
    column_name: &str,
    new_value: impl Into<CellValue>,
) -> SheetResult<()> {
    let mut document = WorkbookDocument::open(path)?;
    let sheet = document.sheet_mut(sheet_name)?;
    let col = find_column(sheet, sheet_name, column_name)?;

    let new_value = new_value.into();
    let last = last_row(sheet);
    for row in FIRST_DATA_ROW..=last {
        set_cell(sheet, col, row, &new_value);
    }
    debug!(
        "Wrote rows {}..={} of column '{}' in '{}'",
        FIRST_DATA_ROW, last, column_name, sheet_name
    );
    document.save()
}

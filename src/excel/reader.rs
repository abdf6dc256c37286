//! Sheet reader keywords - whole sheet, single row, first row, environment row

use crate::error::{SheetError, SheetResult};
use crate::excel::projection::zip_row;
use crate::types::{CellValue, Row, RowDict};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::warn;

pub(crate) type XlsxWorkbook = Xlsx<BufReader<File>>;

/// Open a workbook for reading, distinguishing a missing file from a broken one
pub(crate) fn open_xlsx(path: &Path) -> SheetResult<XlsxWorkbook> {
    if !path.exists() {
        return Err(SheetError::FileNotFound(path.to_path_buf()));
    }
    open_workbook(path).map_err(|e| SheetError::Open(format!("{}: {}", path.display(), e)))
}

/// Non-blank rows of a sheet, each positioned from column A
pub(crate) fn sheet_rows(
    workbook: &mut XlsxWorkbook,
    path: &Path,
    sheet_name: &str,
) -> SheetResult<Vec<Row>> {
    if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
        return Err(SheetError::SheetNotFound {
            sheet: sheet_name.to_string(),
            path: path.to_path_buf(),
        });
    }
    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| SheetError::Open(format!("{}: {}", sheet_name, e)))?;
    Ok(non_blank_rows(&range))
}

fn non_blank_rows(range: &Range<Data>) -> Vec<Row> {
    // The used range may start right of column A
    let col_offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    range
        .rows()
        .map(|cells| {
            let mut row: Row = vec![CellValue::Empty; col_offset];
            row.extend(cells.iter().map(CellValue::from));
            row
        })
        .filter(|row| !row.iter().all(CellValue::is_blank))
        .collect()
}

/// Fallible form of [`read_excel_sheet`]
pub fn try_read_excel_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> SheetResult<Vec<Row>> {
    let path = path.as_ref();
    let mut workbook = open_xlsx(path)?;
    sheet_rows(&mut workbook, path, sheet_name)
}

/// Read every non-blank row of a sheet, starting at row 1.
///
/// Returns `None` (after a warning) when the file or sheet cannot be read.
/// A sheet with no data yields `Some(vec![])`.
pub fn read_excel_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> Option<Vec<Row>> {
    match try_read_excel_sheet(path, sheet_name) {
        Ok(rows) => Some(rows),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Non-blank rows, or `None` when there are none
fn data_rows(path: &Path, sheet_name: &str) -> Option<Vec<Row>> {
    read_excel_sheet(path, sheet_name).filter(|rows| !rows.is_empty())
}

/// Read one row by 1-based position among the non-blank rows
pub fn read_excel_row<P: AsRef<Path>>(path: P, sheet_name: &str, row_number: usize) -> Option<Row> {
    let path = path.as_ref();
    let mut rows = data_rows(path, sheet_name)?;

    if row_number == 0 || row_number > rows.len() {
        warn!(
            "Row number {} not found in '{}' of '{}'.",
            row_number,
            sheet_name,
            path.display()
        );
        return None;
    }
    Some(rows.swap_remove(row_number - 1))
}

pub fn read_excel_first_row<P: AsRef<Path>>(path: P, sheet_name: &str) -> Option<Row> {
    data_rows(path.as_ref(), sheet_name)?.into_iter().next()
}

/// First row whose column A holds exactly `env`
pub fn read_env_row_a<P: AsRef<Path>>(path: P, sheet_name: &str, env: &str) -> Option<Row> {
    let path = path.as_ref();
    let rows = data_rows(path, sheet_name)?;

    let found = rows
        .into_iter()
        .find(|row| row.first().is_some_and(|cell| cell.is_text(env)));
    if found.is_none() {
        warn!(
            "Environment '{}' not found in '{}' of '{}'.",
            env,
            sheet_name,
            path.display()
        );
    }
    found
}

/// Row 1 as headers, row 2 as values
pub fn read_first_data_row<P: AsRef<Path>>(path: P, sheet_name: &str) -> Option<RowDict> {
    let path = path.as_ref();
    match read_excel_sheet(path, sheet_name) {
        Some(rows) if rows.len() > 1 => Some(zip_row(&rows[0], &rows[1])),
        _ => {
            warn!("No data found in '{}' of '{}'.", sheet_name, path.display());
            None
        }
    }
}

//! Dictionary projections - header row paired with data rows

use crate::error::{SheetError, SheetResult};
use crate::excel::reader::{open_xlsx, read_excel_sheet, sheet_rows};
use crate::types::{OrderedDict, Row, RowDict, SheetSelection, WorkbookData};
use calamine::Reader;
use std::path::Path;
use tracing::warn;

/// Pair each header with the value at the same position, stopping at the shorter row
pub fn zip_row(headers: &Row, row: &Row) -> RowDict {
    headers
        .iter()
        .zip(row.iter())
        .map(|(header, value)| (header.to_string(), value.clone()))
        .collect()
}

/// Fold every row after the header into one dictionary.
///
/// Rows are applied top to bottom, so a later row's value replaces an earlier
/// one under the same header. Returns `None` when there is no data row.
pub fn fold_rows(rows: &[Row]) -> Option<RowDict> {
    let (headers, data) = rows.split_first()?;
    if data.is_empty() {
        return None;
    }

    let mut folded = RowDict::new();
    for row in data {
        folded.update(zip_row(headers, row));
    }
    Some(folded)
}

/// Fold a sheet into a single header → value dictionary (last row wins)
pub fn read_data<P: AsRef<Path>>(path: P, sheet_name: &str) -> Option<RowDict> {
    let rows = read_excel_sheet(path, sheet_name)?;
    fold_rows(&rows)
}

fn fold_workbook(path: &Path) -> SheetResult<OrderedDict<RowDict>> {
    let mut workbook = open_xlsx(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let mut result = OrderedDict::new();
    for sheet_name in sheet_names {
        let rows = sheet_rows(&mut workbook, path, &sheet_name)?;
        if let Some(folded) = fold_rows(&rows) {
            result.insert(sheet_name, folded);
        }
    }
    Ok(result)
}

/// Fold one sheet, or every sheet keyed by name.
///
/// With [`SheetSelection::All`], sheets without a data row are left out.
pub fn read_data1<P: AsRef<Path>>(path: P, selection: &SheetSelection) -> Option<WorkbookData> {
    let path = path.as_ref();
    match selection {
        SheetSelection::Named(sheet_name) => read_data(path, sheet_name).map(WorkbookData::Sheet),
        SheetSelection::All => match fold_workbook(path) {
            Ok(sheets) => Some(WorkbookData::Sheets(sheets)),
            Err(e @ SheetError::FileNotFound(_)) => {
                warn!("{}", e);
                None
            }
            Err(e) => {
                warn!("An error occurred: {}", e);
                None
            }
        },
    }
}

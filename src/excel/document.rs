//! In-place workbook editing for the column writers.
//!
//! The workbook is read with umya-spreadsheet, the targeted cells are changed,
//! and the same document is written back. Everything else it parsed (other
//! sheets, defined names, sheet visibility, merged ranges, notes, sizing)
//! goes back out with it.

use crate::error::{SheetError, SheetResult};
use crate::types::CellValue;
use std::path::{Path, PathBuf};
use tracing::debug;
use umya_spreadsheet::{Spreadsheet, Worksheet};

const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Workbook loaded from disk, saved back to the same path
pub struct WorkbookDocument {
    path: PathBuf,
    book: Spreadsheet,
}

impl WorkbookDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> SheetResult<Self> {
        let path = path.as_ref().to_path_buf();
        let book = umya_spreadsheet::reader::xlsx::read(&path)
            .map_err(|e| SheetError::Open(format!("{}: {}", path.display(), e)))?;
        Ok(Self { path, book })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.book
            .get_sheet_collection()
            .iter()
            .map(|sheet| sheet.get_name())
            .collect()
    }

    pub fn sheet_mut(&mut self, name: &str) -> SheetResult<&mut Worksheet> {
        let path = &self.path;
        self.book
            .get_sheet_by_name_mut(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                sheet: name.to_string(),
                path: path.clone(),
            })
    }

    /// Write the workbook back to its original path, replacing the file
    pub fn save(&self) -> SheetResult<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, &self.path)
            .map_err(|e| SheetError::Write(format!("{}: {}", self.path.display(), e)))?;
        debug!("Saved '{}'", self.path.display());
        Ok(())
    }
}

fn is_text_cell(data_type: &str) -> bool {
    matches!(data_type, "s" | "str" | "inlineStr")
}

/// 1-based column of the first row-1 cell whose text equals `column_name`
pub fn header_column(sheet: &Worksheet, column_name: &str) -> Option<u32> {
    (1..=sheet.get_highest_column()).find(|&col| {
        sheet.get_cell((col, 1)).is_some_and(|cell| {
            let value = cell.get_value();
            debug!("Checking cell {} in column {}", value, col);
            is_text_cell(cell.get_data_type()) && value == column_name
        })
    })
}

/// 1-based index of the last row holding any cell
pub fn last_row(sheet: &Worksheet) -> u32 {
    sheet.get_highest_row()
}

/// Replace a cell's content with a plain value; any formula is dropped
pub fn set_cell(sheet: &mut Worksheet, col: u32, row: u32, value: &CellValue) {
    let cell = sheet.get_cell_mut((col, row));
    match value {
        CellValue::Empty => {
            cell.set_blank();
        }
        CellValue::Text(s) => {
            cell.set_value_string(s.as_str());
        }
        CellValue::Number(n) => {
            cell.set_value_number(*n);
        }
        CellValue::Bool(b) => {
            cell.set_value_bool(*b);
        }
        CellValue::DateTime(dt) => {
            cell.set_value_number(CellValue::excel_serial(dt));
            cell.get_style_mut()
                .get_number_format_mut()
                .set_format_code(DATETIME_FORMAT);
        }
    }
}

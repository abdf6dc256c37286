//! Spreadsheet keywords over .xlsx workbooks
//!
//! - Readers: whole sheet, single row, first row, environment row, first data row
//! - Projections: header-keyed dictionaries folded over data rows
//! - Writers: single cell or whole column under a header, saved in place
//!
//! Every keyword opens the workbook fresh; nothing is cached between calls.

mod document;
mod projection;
mod reader;
mod writer;

pub use document::WorkbookDocument;
pub use projection::{fold_rows, read_data, read_data1, zip_row};
pub use reader::{
    read_env_row_a, read_excel_first_row, read_excel_row, read_excel_sheet, read_first_data_row,
    try_read_excel_sheet,
};
pub use writer::{write_data, write_data2};

//! Excel Keywords - spreadsheet helpers for test automation
//!
//! Each keyword opens an .xlsx workbook, finds a sheet, and either reads
//! rows / header dictionaries out of it or writes a value down a column
//! and saves the workbook in place.
//!
//! # Features
//!
//! - Whole sheet, single row, first row and environment-row reads
//! - Header → value dictionaries, folded over every data row (last row wins)
//! - Every sheet at once with [`SheetSelection::All`]
//! - Row-2 or whole-column writes that keep the other sheets and formulas
//!
//! Readers never fail: a missing file, sheet, row or environment is logged
//! with `tracing` and reported as `None`. Writers return [`SheetResult`].
//!
//! # Example
//!
//! ```no_run
//! use excel_keywords::excel::{read_data, read_env_row_a, write_data};
//!
//! if let Some(row) = read_env_row_a("envs.xlsx", "Targets", "prod") {
//!     println!("prod row: {:?}", row);
//! }
//!
//! let config = read_data("envs.xlsx", "Config");
//! println!("{:?}", config);
//!
//! write_data("envs.xlsx", "Runs", "Status", "DONE")?;
//! # Ok::<(), excel_keywords::error::SheetError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{SheetError, SheetResult};
pub use types::{CellValue, OrderedDict, Row, RowDict, SheetSelection, WorkbookData};

use crate::error::{SheetError, SheetResult};
use crate::excel;
use crate::types::{CellValue, SheetSelection};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// How a written value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ValueKind {
    #[default]
    Text,
    Number,
    Bool,
    Empty,
}

/// Turn a command-line value into a cell value
pub fn parse_value(kind: ValueKind, raw: &str) -> SheetResult<CellValue> {
    match kind {
        ValueKind::Text => Ok(CellValue::Text(raw.to_string())),
        ValueKind::Number => raw
            .trim()
            .parse::<f64>()
            .map(CellValue::Number)
            .map_err(|_| SheetError::InvalidValue(format!("'{}' is not a number", raw))),
        ValueKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(CellValue::Bool(true)),
            "false" | "0" | "no" => Ok(CellValue::Bool(false)),
            _ => Err(SheetError::InvalidValue(format!(
                "'{}' is not a boolean",
                raw
            ))),
        },
        ValueKind::Empty => Ok(CellValue::Empty),
    }
}

/// Print a keyword result as pretty JSON (`null` when absent).
///
/// Returns whether a result was present.
fn emit<T: Serialize, W: Write>(out: &mut W, result: &Option<T>) -> SheetResult<bool> {
    let json = serde_json::to_string_pretty(result)?;
    writeln!(out, "{}", json)?;
    Ok(result.is_some())
}

fn print_result<T: Serialize>(result: Option<T>) -> SheetResult<bool> {
    emit(&mut io::stdout().lock(), &result)
}

/// Execute the sheet command
pub fn sheet(workbook: PathBuf, sheet: String) -> SheetResult<bool> {
    print_result(excel::read_excel_sheet(&workbook, &sheet))
}

/// Execute the row command
pub fn row(workbook: PathBuf, sheet: String, number: usize) -> SheetResult<bool> {
    print_result(excel::read_excel_row(&workbook, &sheet, number))
}

/// Execute the first-row command
pub fn first_row(workbook: PathBuf, sheet: String) -> SheetResult<bool> {
    print_result(excel::read_excel_first_row(&workbook, &sheet))
}

/// Execute the env-row command
pub fn env_row(workbook: PathBuf, sheet: String, env: String) -> SheetResult<bool> {
    print_result(excel::read_env_row_a(&workbook, &sheet, &env))
}

/// Execute the first-data-row command
pub fn first_data_row(workbook: PathBuf, sheet: String) -> SheetResult<bool> {
    print_result(excel::read_first_data_row(&workbook, &sheet))
}

/// Execute the data command
pub fn data(workbook: PathBuf, sheet: String) -> SheetResult<bool> {
    print_result(excel::read_data(&workbook, &sheet))
}

/// Execute the data1 command; no sheet means every sheet
pub fn data1(workbook: PathBuf, sheet: Option<String>) -> SheetResult<bool> {
    let selection = sheet.map_or(SheetSelection::All, SheetSelection::Named);
    print_result(excel::read_data1(&workbook, &selection))
}

/// Execute the write command (row 2 only)
pub fn write(
    workbook: PathBuf,
    sheet: String,
    column: String,
    value: String,
    kind: ValueKind,
) -> SheetResult<()> {
    let new_value = parse_value(kind, &value)?;
    excel::write_data(&workbook, &sheet, &column, new_value)?;

    println!("{}", "✅ Cell updated".bold().green());
    println!("   Workbook: {}", workbook.display());
    println!(
        "   {}!{} row 2 = {}",
        sheet.bright_blue(),
        column.cyan(),
        value.bold()
    );
    Ok(())
}

/// Execute the write-all command (row 2 through the last used row)
pub fn write_all(
    workbook: PathBuf,
    sheet: String,
    column: String,
    value: String,
    kind: ValueKind,
) -> SheetResult<()> {
    let new_value = parse_value(kind, &value)?;
    excel::write_data2(&workbook, &sheet, &column, new_value)?;

    println!("{}", "✅ Column updated".bold().green());
    println!("   Workbook: {}", workbook.display());
    println!(
        "   {}!{} rows 2.. = {}",
        sheet.bright_blue(),
        column.cyan(),
        value.bold()
    );
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

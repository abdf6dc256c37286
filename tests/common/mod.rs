//! Shared fixtures: small workbooks written with rust_xlsxwriter

#![allow(dead_code)]

use rust_xlsxwriter::{Formula, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A fixture cell
#[derive(Clone, Copy)]
pub enum Cell<'a> {
    S(&'a str),
    N(f64),
    B(bool),
    F(&'a str, &'a str),
    Blank,
}

pub use Cell::{Blank, B, F, N, S};

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<Cell>]) {
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match *cell {
                S(s) => {
                    worksheet.write_string(r, c, s).unwrap();
                }
                N(n) => {
                    worksheet.write_number(r, c, n).unwrap();
                }
                B(b) => {
                    worksheet.write_boolean(r, c, b).unwrap();
                }
                F(formula, result) => {
                    worksheet
                        .write_formula(r, c, Formula::new(formula).set_result(result))
                        .unwrap();
                }
                Blank => {}
            }
        }
    }
}

/// Write a workbook with the given sheets (name, rows) into `dir`
pub fn workbook(dir: &TempDir, file_name: &str, sheets: &[(&str, Vec<Vec<Cell>>)]) -> PathBuf {
    let path = dir.path().join(file_name);
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        write_rows(worksheet, rows);
    }
    workbook.save(&path).unwrap();
    path
}

/// The sheet used across the reader tests:
/// ```text
/// a    | b
/// 1    | 2
///      |        (blank)
/// 3    |
/// ```
pub fn basic_sheet() -> Vec<Vec<Cell<'static>>> {
    vec![
        vec![S("a"), S("b")],
        vec![N(1.0), N(2.0)],
        vec![Blank, Blank],
        vec![N(3.0), Blank],
    ]
}

/// Environment table keyed by column A
pub fn env_sheet() -> Vec<Vec<Cell<'static>>> {
    vec![
        vec![S("env"), S("url"), S("user")],
        vec![S("dev"), S("http://dev"), S("alice")],
        vec![S("prod"), S("http://prod"), S("bob")],
        vec![S("prod"), S("http://prod-2"), S("carol")],
    ]
}

/// Status table for the writer tests
pub fn status_sheet() -> Vec<Vec<Cell<'static>>> {
    vec![
        vec![S("Id"), S("Status"), S("Total")],
        vec![N(1.0), S("TODO"), F("1+1", "2")],
        vec![N(2.0), S("TODO"), F("2+2", "4")],
        vec![N(3.0), S("TODO"), F("3+3", "6")],
    ]
}

pub fn missing(dir: &TempDir) -> PathBuf {
    dir.path().join("does-not-exist.xlsx")
}

pub fn exists(path: &Path) -> bool {
    path.exists()
}

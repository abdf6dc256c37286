//! CLI command handlers

pub mod commands;

pub use commands::{
    data, data1, env_row, first_data_row, first_row, row, sheet, write, write_all, ValueKind,
};

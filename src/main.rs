use clap::{Parser, Subcommand};
use excel_keywords::cli::{self, ValueKind};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "excel-keywords")]
#[command(about = "Read rows and header dictionaries from .xlsx sheets, write columns back.")]
#[command(long_about = "Excel Keywords - spreadsheet helpers for test automation

COMMANDS:
  sheet           - All non-blank rows of a sheet
  row             - One row by 1-based position (blank rows skipped)
  first-row       - First non-blank row
  env-row         - First row whose column A equals an environment name
  first-data-row  - Row 2 keyed by the row-1 headers
  data            - Every data row folded into one dictionary (last row wins)
  data1           - Same as data, for one sheet or every sheet
  write           - Overwrite row 2 under a header, save in place
  write-all       - Overwrite every data row under a header, save in place

Readers print JSON. An absent result prints null and exits with status 1.

EXAMPLES:
  excel-keywords -w envs.xlsx env-row -s Targets prod
  excel-keywords -w envs.xlsx data1
  excel-keywords -w runs.xlsx write -s Runs Status DONE

LOGGING:
  Diagnostics go to stderr. Set RUST_LOG (e.g. excel_keywords=debug)
  or pass --verbose.")]
#[command(version)]
struct Cli {
    /// Path to the Excel workbook (.xlsx)
    #[arg(short, long, env = "EXCEL_KEYWORDS_WORKBOOK")]
    workbook: PathBuf,

    /// Show debug diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read every non-blank row of a sheet
    Sheet {
        /// Sheet name
        #[arg(short, long)]
        sheet: String,
    },

    /// Read one row by 1-based position among non-blank rows
    Row {
        /// Sheet name
        #[arg(short, long)]
        sheet: String,

        /// Row number (1 = first non-blank row)
        number: usize,
    },

    /// Read the first non-blank row
    FirstRow {
        /// Sheet name
        #[arg(short, long)]
        sheet: String,
    },

    /// Read the first row whose column A equals ENV
    EnvRow {
        /// Sheet name
        #[arg(short, long)]
        sheet: String,

        /// Environment name, matched exactly
        env: String,
    },

    /// Read row 2 as a dictionary keyed by row 1
    FirstDataRow {
        /// Sheet name
        #[arg(short, long)]
        sheet: String,
    },

    /// Fold every data row into one header-keyed dictionary
    Data {
        /// Sheet name
        #[arg(short, long)]
        sheet: String,
    },

    #[command(long_about = "Fold data rows into header-keyed dictionaries.

Without --sheet, every sheet is folded and the result is keyed by sheet
name. Sheets without a data row are left out.")]
    /// Fold one sheet, or every sheet keyed by name
    Data1 {
        /// Sheet name (omit to read every sheet)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Overwrite the row-2 cell under COLUMN and save
    Write {
        /// Sheet name
        #[arg(short, long)]
        sheet: String,

        /// Header text in row 1
        column: String,

        /// New value
        value: String,

        /// How VALUE is stored
        #[arg(short, long, value_enum, default_value_t = ValueKind::Text)]
        kind: ValueKind,
    },

    /// Overwrite every data row under COLUMN and save
    WriteAll {
        /// Sheet name
        #[arg(short, long)]
        sheet: String,

        /// Header text in row 1
        column: String,

        /// New value
        value: String,

        /// How VALUE is stored
        #[arg(short, long, value_enum, default_value_t = ValueKind::Text)]
        kind: ValueKind,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "excel_keywords=debug"
    } else {
        "excel_keywords=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let workbook = cli.workbook;
    let found = match cli.command {
        Commands::Sheet { sheet } => cli::sheet(workbook, sheet)?,
        Commands::Row { sheet, number } => cli::row(workbook, sheet, number)?,
        Commands::FirstRow { sheet } => cli::first_row(workbook, sheet)?,
        Commands::EnvRow { sheet, env } => cli::env_row(workbook, sheet, env)?,
        Commands::FirstDataRow { sheet } => cli::first_data_row(workbook, sheet)?,
        Commands::Data { sheet } => cli::data(workbook, sheet)?,
        Commands::Data1 { sheet } => cli::data1(workbook, sheet)?,

        Commands::Write {
            sheet,
            column,
            value,
            kind,
        } => {
            cli::write(workbook, sheet, column, value, kind)?;
            true
        }

        Commands::WriteAll {
            sheet,
            column,
            value,
            kind,
        } => {
            cli::write_all(workbook, sheet, column, value, kind)?;
            true
        }
    };

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

use std::path::PathBuf;

use thiserror::Error;

/// Fatal failure while reading or normalizing the dataset.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("dataset file {path} could not be opened")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported dataset extension: .{0}")]
    UnsupportedFormat(String),

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("reading spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("reading parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("reading arrow batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("sheet {0} not found in workbook")]
    SheetNotFound(String),

    #[error("no header row left after skipping {skip_rows} rows")]
    MissingHeader { skip_rows: usize },

    #[error("required column '{0}' is missing")]
    MissingColumn(String),

    #[error("row {row}: column '{column}' has an unexpected type ({found})")]
    ColumnType {
        row: usize,
        column: String,
        found: String,
    },

    #[error("row {row}: country name is empty")]
    EmptyCountry { row: usize },

    #[error("row {row}: count for {year} is not a non-negative integer: {value}")]
    InvalidCount { row: usize, year: i32, value: String },

    #[error("yearly counts of '{country}' add up to more than {max}", max = u64::MAX)]
    CountOverflow { country: String },

    #[error("total immigration over all countries exceeds {}", u64::MAX)]
    TotalOverflow,

    #[error("country '{0}' appears more than once")]
    DuplicateCountry(String),
}

/// Recoverable failure of a query against a loaded table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("country '{0}' not found")]
    NotFound(String),
}

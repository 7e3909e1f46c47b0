use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Workbook resource shipped with the dashboard.
pub const DEFAULT_PATH: &str = "Canada.xlsx";
/// The counts live on the second sheet; the first is a notes page.
pub const DEFAULT_SHEET: usize = 1;
/// Title and notes block above the header row.
pub const DEFAULT_SKIP_ROWS: usize = 20;
/// Source and copyright lines below the last country.
pub const DEFAULT_SKIP_FOOTER: usize = 2;

// ---------------------------------------------------------------------------
// Sheet selection
// ---------------------------------------------------------------------------

/// Which worksheet of a workbook to read. Ignored for CSV and Parquet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Index(i) => write!(f, "#{i}"),
            SheetSelector::Name(n) => write!(f, "'{n}'"),
        }
    }
}

// ---------------------------------------------------------------------------
// DatasetSource – fixed layout of the input resource
// ---------------------------------------------------------------------------

/// Location and layout of the raw dataset.
///
/// ```json
/// { "path": "Canada.xlsx", "sheet": 1, "skip_rows": 20, "skip_footer": 2 }
/// ```
///
/// Missing fields fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatasetSource {
    pub path: PathBuf,
    pub sheet: SheetSelector,
    /// Rows before the header row.
    pub skip_rows: usize,
    /// Trailing rows after the last data row.
    pub skip_footer: usize,
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource {
            path: PathBuf::from(DEFAULT_PATH),
            sheet: SheetSelector::Index(DEFAULT_SHEET),
            skip_rows: DEFAULT_SKIP_ROWS,
            skip_footer: DEFAULT_SKIP_FOOTER,
        }
    }
}

impl DatasetSource {
    /// Default layout, different file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        DatasetSource {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Read a layout description from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading layout file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing layout file {}", path.display()))
    }

    /// Interpret a command-line argument: a `.json` layout file or a dataset
    /// path with the default layout.
    pub fn from_arg(arg: &str) -> Result<Self> {
        let path = Path::new(arg);
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_file(path)
        } else {
            Ok(Self::with_path(path))
        }
    }
}

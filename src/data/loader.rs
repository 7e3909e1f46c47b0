use std::fmt;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use calamine::{open_workbook_auto, Data, Range, Reader};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::error::DataLoadError;
use super::model::{years, Record, Table, YearCounts, YEAR_COUNT};
use super::source::{DatasetSource, SheetSelector};

/// Source column holding the country name.
pub const COUNTRY_COLUMN: &str = "OdName";
/// Source column holding the continent name.
pub const CONTINENT_COLUMN: &str = "AreaName";
/// Source column holding the region name.
pub const REGION_COLUMN: &str = "RegName";
/// Source column holding the development status.
pub const STATUS_COLUMN: &str = "DevName";

/// Codes and markers that duplicate the named columns.
pub const DROPPED_COLUMNS: [&str; 5] = ["AREA", "REG", "DEV", "Type", "Coverage"];

type Result<T> = std::result::Result<T, DataLoadError>;

// ---------------------------------------------------------------------------
// RawCell / RawSheet – the file contents before normalization
// ---------------------------------------------------------------------------

/// A single untyped cell as read from the source file.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Empty,
}

static EMPTY: RawCell = RawCell::Empty;

/// 2^64 as a float; whole floats below it convert to `u64` without saturating.
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCell::Text(s) => write!(f, "{s}"),
            RawCell::Int(i) => write!(f, "{i}"),
            // Spreadsheets store year headers as floats: 1980.0 → "1980".
            RawCell::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            RawCell::Float(v) => write!(f, "{v}"),
            RawCell::Bool(b) => write!(f, "{b}"),
            RawCell::Empty => Ok(()),
        }
    }
}

impl RawCell {
    /// Guess the type of a text field (CSV has no cell types).
    fn from_text(s: &str) -> Self {
        if s.is_empty() {
            return RawCell::Empty;
        }
        if let Ok(i) = s.parse::<i64>() {
            return RawCell::Int(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return RawCell::Float(f);
        }
        RawCell::Text(s.to_string())
    }

    /// Interpret the cell as a non-negative whole count.
    fn as_count(&self) -> Option<u64> {
        match self {
            RawCell::Int(i) => u64::try_from(*i).ok(),
            RawCell::Float(f) if *f >= 0.0 && *f < U64_BOUND && f.fract() == 0.0 => {
                Some(*f as u64)
            }
            RawCell::Text(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        }
    }
}

impl From<&Data> for RawCell {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Int(i) => RawCell::Int(*i),
            Data::Float(f) => RawCell::Float(*f),
            Data::String(s) => RawCell::Text(s.clone()),
            Data::Bool(b) => RawCell::Bool(*b),
            Data::Empty => RawCell::Empty,
            other => RawCell::Text(other.to_string()),
        }
    }
}

/// Header names plus data rows, after the preamble and footer are removed.
#[derive(Debug, Clone, Default)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

impl RawSheet {
    /// Split a full grid into header and data rows: skip `skip_rows`, take the
    /// next row as header, drop the last `skip_footer` rows.
    pub fn from_grid(grid: Vec<Vec<RawCell>>, skip_rows: usize, skip_footer: usize) -> Result<Self> {
        let mut grid = grid.into_iter().skip(skip_rows);
        let header = grid
            .next()
            .ok_or(DataLoadError::MissingHeader { skip_rows })?;
        let mut rows: Vec<Vec<RawCell>> = grid.collect();
        rows.truncate(rows.len().saturating_sub(skip_footer));

        Ok(RawSheet {
            headers: header.iter().map(|c| c.to_string().trim().to_string()).collect(),
            rows,
        })
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.column(name)
            .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read and normalize the dataset described by `source`.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.ods` – workbook, sheet chosen by `source.sheet`
/// * `.csv`  – same row layout as the workbook sheet
/// * `.parquet` / `.pq` – one column per field, no preamble or footer
pub fn load_file(source: &DatasetSource) -> Result<Table> {
    let path = source.path.as_path();
    std::fs::metadata(path).map_err(|e| DataLoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let raw = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook(path, &source.sheet)
            .and_then(|grid| RawSheet::from_grid(grid, source.skip_rows, source.skip_footer))?,
        "csv" => read_csv(path)
            .and_then(|grid| RawSheet::from_grid(grid, source.skip_rows, source.skip_footer))?,
        "parquet" | "pq" => {
            if source.skip_rows > 0 || source.skip_footer > 0 {
                log::debug!("Parquet source: ignoring skip_rows/skip_footer");
            }
            read_parquet(path)?
        }
        other => return Err(DataLoadError::UnsupportedFormat(other.to_string())),
    };

    let table = normalize(raw)?;
    log::info!(
        "Loaded {} countries from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Turn raw rows into the normalized, sorted, indexed [`Table`].
///
/// Keeps the four named attribute columns and the year columns, computes each
/// row's total, sorts descending by total and indexes by country.
pub fn normalize(raw: RawSheet) -> Result<Table> {
    let country_idx = raw.require(COUNTRY_COLUMN)?;
    let continent_idx = raw.require(CONTINENT_COLUMN)?;
    let region_idx = raw.require(REGION_COLUMN)?;
    let status_idx = raw.require(STATUS_COLUMN)?;
    let year_idx: Vec<(i32, usize)> = years()
        .map(|y| raw.require(&y.to_string()).map(|idx| (y, idx)))
        .collect::<Result<_>>()?;

    let kept: Vec<usize> = [country_idx, continent_idx, region_idx, status_idx]
        .into_iter()
        .chain(year_idx.iter().map(|&(_, idx)| idx))
        .collect();
    let (dropped, unknown): (Vec<&str>, Vec<&str>) = raw
        .headers
        .iter()
        .enumerate()
        .filter(|(i, h)| !kept.contains(i) && !h.is_empty())
        .map(|(_, h)| h.as_str())
        .partition(|h| DROPPED_COLUMNS.contains(h));
    log::debug!("Dropping columns {dropped:?}");
    if !unknown.is_empty() {
        log::debug!("Ignoring unknown columns {unknown:?}");
    }

    let mut records = Vec::with_capacity(raw.rows.len());
    for (i, row) in raw.rows.iter().enumerate() {
        let row_no = i + 1;
        let cell = |idx: usize| row.get(idx).unwrap_or(&EMPTY);

        let country = cell(country_idx).to_string();
        if country.trim().is_empty() {
            return Err(DataLoadError::EmptyCountry { row: row_no });
        }

        let mut counts = [0u64; YEAR_COUNT];
        for (slot, &(year, idx)) in counts.iter_mut().zip(&year_idx) {
            let value = cell(idx);
            *slot = value.as_count().ok_or_else(|| DataLoadError::InvalidCount {
                row: row_no,
                year,
                value: format!("{value:?}"),
            })?;
        }

        records.push(Record::new(
            country,
            cell(continent_idx).to_string(),
            cell(region_idx).to_string(),
            cell(status_idx).to_string(),
            YearCounts::new(counts),
        )?);
    }

    Table::from_records(records)
}

// ---------------------------------------------------------------------------
// Workbook reader
// ---------------------------------------------------------------------------

fn read_workbook(path: &Path, sheet: &SheetSelector) -> Result<Vec<Vec<RawCell>>> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match sheet {
        SheetSelector::Index(i) => workbook
            .worksheet_range_at(*i)
            .ok_or_else(|| DataLoadError::SheetNotFound(sheet.to_string()))??,
        SheetSelector::Name(name) => {
            if !workbook.sheet_names().iter().any(|n| n == name) {
                return Err(DataLoadError::SheetNotFound(sheet.to_string()));
            }
            workbook.worksheet_range(name)?
        }
    };

    Ok(range_to_grid(&range))
}

/// Convert a worksheet range to a grid addressed from the sheet's first row.
///
/// A range starts at its first non-empty cell; leading blank rows are
/// re-inserted so that `skip_rows` counts from the top of the sheet.
fn range_to_grid(range: &Range<Data>) -> Vec<Vec<RawCell>> {
    let leading = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let mut grid: Vec<Vec<RawCell>> = vec![Vec::new(); leading];
    grid.extend(range.rows().map(|row| row.iter().map(RawCell::from).collect()));
    grid
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Preamble and footer lines have fewer fields than the table, hence `flexible`.
fn read_csv(path: &Path) -> Result<Vec<Vec<RawCell>>> {
    let file = File::open(path).map_err(|e| DataLoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut grid = Vec::new();
    for result in reader.records() {
        let record = result?;
        grid.push(record.iter().map(RawCell::from_text).collect());
    }
    Ok(grid)
}

// ---------------------------------------------------------------------------
// Parquet reader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per source field.
///
/// Attribute columns are Utf8/LargeUtf8, year columns (named `"1980"` …
/// `"2013"`) are any integer or float type.
fn read_parquet(path: &Path) -> Result<RawSheet> {
    let file = File::open(path).map_err(|e| DataLoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut sheet = RawSheet::default();
    for batch_result in reader {
        let batch = batch_result?;
        if sheet.headers.is_empty() {
            sheet.headers = batch
                .schema()
                .fields()
                .iter()
                .map(|f| f.name().clone())
                .collect();
        }

        for row in 0..batch.num_rows() {
            let cells = batch
                .columns()
                .iter()
                .zip(&sheet.headers)
                .map(|(col, name)| arrow_cell(col, row, name, sheet.rows.len() + 1))
                .collect::<Result<Vec<_>>>()?;
            sheet.rows.push(cells);
        }
    }
    Ok(sheet)
}

/// Extract a single cell from an Arrow column at a given row.
fn arrow_cell(col: &Arc<dyn Array>, row: usize, name: &str, row_no: usize) -> Result<RawCell> {
    if col.is_null(row) {
        return Ok(RawCell::Empty);
    }
    let cell = match col.data_type() {
        DataType::Utf8 => RawCell::Text(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => RawCell::Text(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => RawCell::Int(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => RawCell::Int(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => RawCell::Float(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => RawCell::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => RawCell::Bool(col.as_boolean().value(row)),
        other => {
            return Err(DataLoadError::ColumnType {
                row: row_no,
                column: name.to_string(),
                found: format!("{other:?}"),
            })
        }
    };
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use arrow::array::{ArrayRef, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use super::*;
    use crate::data::fixtures::{
        canada_grid, counts_summing_to, write_canada_csv, write_canada_xlsx, FixtureRow,
        CANADA_SHEET,
    };

    fn csv_source(path: PathBuf) -> DatasetSource {
        DatasetSource::with_path(path)
    }

    #[test]
    fn csv_with_preamble_and_footer() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_canada_csv(
            dir.path(),
            &[
                FixtureRow::new("Haiti", "Latin America and the Caribbean", 100),
                FixtureRow::new("India", "Asia", 300),
                FixtureRow::new("Iceland", "Europe", 0),
            ],
        );

        let table = load_file(&csv_source(path)).unwrap();

        assert_eq!(table.len(), 3);
        let order: Vec<&str> = table.countries().collect();
        assert_eq!(order, vec!["India", "Haiti", "Iceland"]);

        let india = table.get("India").unwrap();
        assert_eq!(india.continent, "Asia");
        assert_eq!(india.region, "Region of India");
        assert_eq!(india.status, "Developing regions");
        assert_eq!(india.total(), 300);
        assert_eq!(india.year_counts, counts_summing_to(300));
    }

    #[test]
    fn workbook_with_default_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_canada_xlsx(
            dir.path(),
            &[
                FixtureRow::new("Haiti", "Latin America and the Caribbean", 100),
                FixtureRow::new("India", "Asia", 691_904),
                FixtureRow::new("Iceland", "Europe", 0),
            ],
        );

        let table = load_file(&DatasetSource::with_path(path)).unwrap();

        let order: Vec<&str> = table.countries().collect();
        assert_eq!(order, vec!["India", "Haiti", "Iceland"]);

        let india = table.get("India").unwrap();
        assert_eq!(india.continent, "Asia");
        assert_eq!(india.region, "Region of India");
        assert_eq!(india.status, "Developing regions");
        assert_eq!(india.total(), 691_904);
        assert_eq!(india.year_counts, counts_summing_to(691_904));
    }

    #[test]
    fn workbook_sheet_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_canada_xlsx(dir.path(), &[FixtureRow::new("Chad", "Africa", 34)]);
        let source = DatasetSource {
            sheet: SheetSelector::Name(CANADA_SHEET.to_string()),
            ..DatasetSource::with_path(path)
        };

        let table = load_file(&source).unwrap();
        assert_eq!(table.get("Chad").map(Record::total), Some(34));
    }

    #[test]
    fn workbook_missing_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_canada_xlsx(dir.path(), &[FixtureRow::new("Chad", "Africa", 34)]);

        for sheet in [SheetSelector::Index(5), SheetSelector::Name("Missing".into())] {
            let source = DatasetSource {
                sheet,
                ..DatasetSource::with_path(path.clone())
            };
            let err = load_file(&source).unwrap_err();
            assert!(matches!(err, DataLoadError::SheetNotFound(_)), "{err}");
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_file(&csv_source(PathBuf::from("/nonexistent/Canada.csv"))).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }), "{err}");
    }

    #[test]
    fn unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = load_file(&csv_source(path)).unwrap_err();
        assert!(matches!(err, DataLoadError::UnsupportedFormat(ref e) if e == "txt"));
    }

    #[test]
    fn header_offset_counts_from_top_of_sheet() {
        let grid = canada_grid(&[FixtureRow::new("Chad", "Africa", 34)]);
        let sheet = RawSheet::from_grid(grid, 20, 2).unwrap();
        assert_eq!(sheet.headers[2], COUNTRY_COLUMN);
        assert_eq!(sheet.rows.len(), 1);
    }

    #[test]
    fn too_many_skipped_rows() {
        let err = RawSheet::from_grid(vec![vec![RawCell::Empty]; 3], 3, 0).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingHeader { skip_rows: 3 }));
    }

    #[test]
    fn float_headers_become_years() {
        let grid = vec![vec![RawCell::Float(1980.0), RawCell::Text("OdName".into())]];
        let sheet = RawSheet::from_grid(grid, 0, 0).unwrap();
        assert_eq!(sheet.headers, vec!["1980", "OdName"]);
    }

    #[test]
    fn missing_year_column() {
        let mut grid = canada_grid(&[FixtureRow::new("Chad", "Africa", 34)]);
        grid[20].pop(); // drop the 2013 header
        let raw = RawSheet::from_grid(grid, 20, 2).unwrap();

        let err = normalize(raw).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(ref c) if c == "2013"));
    }

    #[test]
    fn dropped_columns_are_optional() {
        let grid = canada_grid(&[FixtureRow::new("Chad", "Africa", 34)]);
        let mut raw = RawSheet::from_grid(grid, 20, 2).unwrap();
        for name in DROPPED_COLUMNS {
            let idx = raw.column(name).unwrap();
            raw.headers[idx] = String::new();
        }
        assert_eq!(normalize(raw).unwrap().len(), 1);
    }

    #[test]
    fn negative_or_fractional_counts_rejected() {
        let grid = canada_grid(&[FixtureRow::new("Chad", "Africa", 34)]);
        let mut raw = RawSheet::from_grid(grid, 20, 2).unwrap();
        let idx = raw.column("1985").unwrap();

        raw.rows[0][idx] = RawCell::Int(-1);
        let err = normalize(raw.clone()).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidCount { row: 1, year: 1985, .. }));

        raw.rows[0][idx] = RawCell::Float(2.5);
        assert!(normalize(raw.clone()).is_err());

        raw.rows[0][idx] = RawCell::Empty;
        assert!(normalize(raw.clone()).is_err());

        raw.rows[0][idx] = RawCell::Float(2.0);
        assert_eq!(normalize(raw).unwrap().get("Chad").unwrap().total(), 35);
    }

    #[test]
    fn counts_beyond_u64_rejected() {
        let grid = canada_grid(&[FixtureRow::new("Chad", "Africa", 34)]);
        let mut raw = RawSheet::from_grid(grid, 20, 2).unwrap();
        let idx = raw.column("1990").unwrap();

        raw.rows[0][idx] = RawCell::Float(1e30);
        let err = normalize(raw.clone()).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidCount { year: 1990, .. }), "{err}");

        raw.rows[0][idx] = RawCell::Float(f64::INFINITY);
        assert!(normalize(raw.clone()).is_err());

        raw.rows[0][idx] = RawCell::Float(U64_BOUND);
        assert!(normalize(raw).is_err());
    }

    #[test]
    fn row_total_overflow_is_an_error() {
        let grid = canada_grid(&[FixtureRow::new("Chad", "Africa", 34)]);
        let mut raw = RawSheet::from_grid(grid, 20, 2).unwrap();
        for year in years() {
            let idx = raw.column(&year.to_string()).unwrap();
            raw.rows[0][idx] = RawCell::Int(i64::MAX);
        }

        let err = normalize(raw).unwrap_err();
        assert!(matches!(err, DataLoadError::CountOverflow { ref country } if country == "Chad"));
    }

    #[test]
    fn grand_total_overflow_is_an_error() {
        let grid = canada_grid(&[
            FixtureRow::new("Chad", "Africa", 34),
            FixtureRow::new("Peru", "Latin America and the Caribbean", 34),
        ]);
        let mut raw = RawSheet::from_grid(grid, 20, 2).unwrap();
        let year_cols: Vec<usize> = years()
            .map(|y| raw.column(&y.to_string()).unwrap())
            .collect();
        // 34 * (i64::MAX / 20) fits in a u64 for one row, not for two.
        for row in raw.rows.iter_mut() {
            for &idx in &year_cols {
                row[idx] = RawCell::Int(i64::MAX / 20);
            }
        }

        assert!(matches!(normalize(raw), Err(DataLoadError::TotalOverflow)));
    }

    #[test]
    fn empty_country_rejected() {
        let grid = canada_grid(&[FixtureRow::new("  ", "Africa", 1)]);
        let raw = RawSheet::from_grid(grid, 20, 2).unwrap();
        assert!(matches!(normalize(raw), Err(DataLoadError::EmptyCountry { row: 1 })));
    }

    #[test]
    fn duplicate_country_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_canada_csv(
            dir.path(),
            &[
                FixtureRow::new("Chad", "Africa", 1),
                FixtureRow::new("Chad", "Africa", 2),
            ],
        );
        let err = load_file(&csv_source(path)).unwrap_err();
        assert!(matches!(err, DataLoadError::DuplicateCountry(ref c) if c == "Chad"));
    }

    #[test]
    fn workbook_range_keeps_leading_blank_rows() {
        let mut range: Range<Data> = Range::new((3, 0), (4, 1));
        range.set_value((3, 0), Data::String("OdName".into()));
        range.set_value((3, 1), Data::Float(1980.0));
        range.set_value((4, 0), Data::String("Chad".into()));
        range.set_value((4, 1), Data::Int(7));

        let grid = range_to_grid(&range);
        assert_eq!(grid.len(), 5);

        let sheet = RawSheet::from_grid(grid, 3, 0).unwrap();
        assert_eq!(sheet.headers, vec!["OdName", "1980"]);
        assert_eq!(sheet.rows, vec![vec![RawCell::Text("Chad".into()), RawCell::Int(7)]]);
    }

    #[test]
    fn parquet_columns() {
        let mut fields = vec![
            Field::new("OdName", DataType::Utf8, false),
            Field::new("AreaName", DataType::Utf8, false),
            Field::new("RegName", DataType::Utf8, false),
            Field::new("DevName", DataType::Utf8, false),
        ];
        let mut columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from(vec!["Chad", "Peru"])),
            Arc::new(StringArray::from(vec!["Africa", "Latin America and the Caribbean"])),
            Arc::new(StringArray::from(vec!["Middle Africa", "South America"])),
            Arc::new(StringArray::from(vec!["Developing regions", "Developing regions"])),
        ];
        for (i, year) in years().enumerate() {
            fields.push(Field::new(year.to_string(), DataType::Int64, false));
            columns.push(Arc::new(Int64Array::from(vec![1, i as i64])));
        }
        let schema = Arc::new(Schema::new(fields));
        let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canada.parquet");
        let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let table = load_file(&DatasetSource::with_path(path)).unwrap();
        let order: Vec<&str> = table.countries().collect();
        assert_eq!(order, vec!["Peru", "Chad"]);
        assert_eq!(table.get("Peru").unwrap().total(), (0..34).sum::<u64>());
        assert_eq!(table.get("Chad").unwrap().total(), 34);
        assert_eq!(table.get("Chad").unwrap().region, "Middle Africa");
    }
}

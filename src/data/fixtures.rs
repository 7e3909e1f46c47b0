//! Builders for datasets in the workbook layout, shared by the unit tests.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

use super::loader::RawCell;
use super::model::{years, Record, Table, YearCounts, YEAR_COUNT};

pub(crate) struct FixtureRow {
    pub country: String,
    pub continent: String,
    pub total: u64,
}

impl FixtureRow {
    pub fn new(country: &str, continent: &str, total: u64) -> Self {
        FixtureRow {
            country: country.to_string(),
            continent: continent.to_string(),
            total,
        }
    }
}

/// Counts spread evenly so that they add up to exactly `total`.
pub(crate) fn counts_summing_to(total: u64) -> YearCounts {
    let mut counts = [total / YEAR_COUNT as u64; YEAR_COUNT];
    counts[YEAR_COUNT - 1] += total % YEAR_COUNT as u64;
    YearCounts::new(counts)
}

pub(crate) fn record(country: &str, total: u64) -> Record {
    Record::new(
        country,
        "Asia",
        "Southern Asia",
        "Developing regions",
        counts_summing_to(total),
    )
    .unwrap()
}

/// `{A: 300, B: 100}`.
pub(crate) fn sample_table() -> Table {
    Table::from_records(vec![record("B", 100), record("A", 300)]).unwrap()
}

/// Full sheet grid: 20 title rows, the header, one row per fixture, 2 footer rows.
pub(crate) fn canada_grid(rows: &[FixtureRow]) -> Vec<Vec<RawCell>> {
    let text = |s: &str| RawCell::Text(s.to_string());

    let mut grid: Vec<Vec<RawCell>> = (0..20)
        .map(|i| vec![text(&format!("Title line {i}"))])
        .collect();

    let mut header: Vec<RawCell> = [
        "Type", "Coverage", "OdName", "AREA", "AreaName", "REG", "RegName", "DEV", "DevName",
    ]
    .into_iter()
    .map(text)
    .collect();
    header.extend(years().map(|y| RawCell::Int(y as i64)));
    grid.push(header);

    for row in rows {
        let mut cells = vec![
            text("Immigrants"),
            text("Foreigners"),
            text(&row.country),
            RawCell::Int(935),
            text(&row.continent),
            RawCell::Int(5501),
            text(&format!("Region of {}", row.country)),
            RawCell::Int(902),
            text("Developing regions"),
        ];
        cells.extend(
            counts_summing_to(row.total)
                .iter()
                .map(|(_, c)| RawCell::Int(c as i64)),
        );
        grid.push(cells);
    }

    grid.push(vec![text("Source: United Nations")]);
    grid.push(vec![text("Total")]);
    grid
}

/// Write [`canada_grid`] to `dir/Canada.csv`.
pub(crate) fn write_canada_csv(dir: &Path, rows: &[FixtureRow]) -> PathBuf {
    let path = dir.join("Canada.csv");
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&path)
        .unwrap();
    for row in canada_grid(rows) {
        writer
            .write_record(row.iter().map(|c| c.to_string()))
            .unwrap();
    }
    writer.flush().unwrap();
    path
}

/// Name of the data sheet written by [`write_canada_xlsx`].
pub(crate) const CANADA_SHEET: &str = "Canada by Citizenship";

/// Write `dir/Canada.xlsx`: a notes sheet first, then [`canada_grid`] on
/// [`CANADA_SHEET`], the layout of the published workbook.
pub(crate) fn write_canada_xlsx(dir: &Path, rows: &[FixtureRow]) -> PathBuf {
    let path = dir.join("Canada.xlsx");
    let mut workbook = Workbook::new();
    workbook
        .add_worksheet()
        .set_name("Notes")
        .unwrap()
        .write_string(0, 0, "Data is on the next sheet")
        .unwrap();

    let sheet = workbook.add_worksheet().set_name(CANADA_SHEET).unwrap();
    for (r, row) in canada_grid(rows).iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match cell {
                RawCell::Text(s) => {
                    sheet.write_string(r, c, s).unwrap();
                }
                RawCell::Int(i) => {
                    sheet.write_number(r, c, *i as f64).unwrap();
                }
                RawCell::Float(f) => {
                    sheet.write_number(r, c, *f).unwrap();
                }
                RawCell::Bool(b) => {
                    sheet.write_boolean(r, c, *b).unwrap();
                }
                RawCell::Empty => {}
            }
        }
    }
    workbook.save(&path).unwrap();
    path
}

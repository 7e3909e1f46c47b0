//! Writes a synthetic dataset in the workbook layout:
//! `sample_data.csv` (with title block and footer) and `sample_data.parquet`.
//!
//! Usage: `generate_sample [OUTPUT_DIR]`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use parquet::arrow::ArrowWriter;

const FIRST_YEAR: i32 = 1980;
const LAST_YEAR: i32 = 2013;
const TITLE_ROWS: usize = 20;

struct Country {
    name: &'static str,
    area_code: i64,
    continent: &'static str,
    reg_code: i64,
    region: &'static str,
    developed: bool,
    /// Year of peak immigration.
    peak_year: f64,
    /// Yearly count at the peak.
    peak: f64,
    /// Spread of the peak in years.
    spread: f64,
}

const COUNTRIES: &[Country] = &[
    Country { name: "India", area_code: 935, continent: "Asia", reg_code: 5501, region: "Southern Asia", developed: false, peak_year: 2005.0, peak: 36_000.0, spread: 9.0 },
    Country { name: "China", area_code: 935, continent: "Asia", reg_code: 906, region: "Eastern Asia", developed: false, peak_year: 2004.0, peak: 40_000.0, spread: 7.0 },
    Country { name: "United Kingdom of Great Britain and Northern Ireland", area_code: 908, continent: "Europe", reg_code: 924, region: "Northern Europe", developed: true, peak_year: 1981.0, peak: 22_000.0, spread: 10.0 },
    Country { name: "Philippines", area_code: 935, continent: "Asia", reg_code: 920, region: "South-Eastern Asia", developed: false, peak_year: 2012.0, peak: 34_000.0, spread: 8.0 },
    Country { name: "Pakistan", area_code: 935, continent: "Asia", reg_code: 5501, region: "Southern Asia", developed: false, peak_year: 2001.0, peak: 15_000.0, spread: 6.0 },
    Country { name: "United States of America", area_code: 905, continent: "Northern America", reg_code: 905, region: "Northern America", developed: true, peak_year: 1982.0, peak: 9_000.0, spread: 20.0 },
    Country { name: "Haiti", area_code: 904, continent: "Latin America and the Caribbean", reg_code: 915, region: "Caribbean", developed: false, peak_year: 2011.0, peak: 6_500.0, spread: 12.0 },
    Country { name: "Iceland", area_code: 908, continent: "Europe", reg_code: 924, region: "Northern Europe", developed: true, peak_year: 1995.0, peak: 12.0, spread: 15.0 },
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Gaussian bump around the peak year plus 10% noise, clamped at zero.
fn yearly_counts(country: &Country, rng: &mut SimpleRng) -> Vec<i64> {
    (FIRST_YEAR..=LAST_YEAR)
        .map(|year| {
            let d = year as f64 - country.peak_year;
            let base = country.peak * (-(d * d) / (2.0 * country.spread.powi(2))).exp();
            rng.gauss(base, base * 0.1).round().max(0.0) as i64
        })
        .collect()
}

fn status(country: &Country) -> (i64, &'static str) {
    if country.developed {
        (901, "Developed regions")
    } else {
        (902, "Developing regions")
    }
}

fn write_csv(path: &Path, counts: &[Vec<i64>]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(["Immigration to Canada by Place of birth"])?;
    for i in 1..TITLE_ROWS {
        writer.write_record([format!("Notes line {i}")])?;
    }

    let mut header: Vec<String> = [
        "Type", "Coverage", "OdName", "AREA", "AreaName", "REG", "RegName", "DEV", "DevName",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    header.extend((FIRST_YEAR..=LAST_YEAR).map(|y| y.to_string()));
    writer.write_record(&header)?;

    for (country, row_counts) in COUNTRIES.iter().zip(counts) {
        let (dev_code, dev_name) = status(country);
        let mut row = vec![
            "Immigrants".to_string(),
            "Foreigners".to_string(),
            country.name.to_string(),
            country.area_code.to_string(),
            country.continent.to_string(),
            country.reg_code.to_string(),
            country.region.to_string(),
            dev_code.to_string(),
            dev_name.to_string(),
        ];
        row.extend(row_counts.iter().map(|c| c.to_string()));
        writer.write_record(&row)?;
    }

    writer.write_record(["Source: synthetic sample"])?;
    writer.write_record(["Generated by generate_sample"])?;
    writer.flush()?;
    Ok(())
}

fn build_batch(counts: &[Vec<i64>]) -> Result<RecordBatch> {
    let text_column = |f: fn(&Country) -> &'static str| -> ArrayRef {
        Arc::new(StringArray::from(COUNTRIES.iter().map(f).collect::<Vec<_>>()))
    };

    let mut fields = vec![
        Field::new("OdName", DataType::Utf8, false),
        Field::new("AreaName", DataType::Utf8, false),
        Field::new("RegName", DataType::Utf8, false),
        Field::new("DevName", DataType::Utf8, false),
    ];
    let mut columns: Vec<ArrayRef> = vec![
        text_column(|c| c.name),
        text_column(|c| c.continent),
        text_column(|c| c.region),
        text_column(|c| status(c).1),
    ];
    for (i, year) in (FIRST_YEAR..=LAST_YEAR).enumerate() {
        fields.push(Field::new(year.to_string(), DataType::Int64, false));
        columns.push(Arc::new(Int64Array::from(
            counts.iter().map(|row| row[i]).collect::<Vec<_>>(),
        )));
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).context("building record batch")
}

fn write_parquet(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut rng = SimpleRng::new(42);

    let counts: Vec<Vec<i64>> = COUNTRIES
        .iter()
        .map(|c| yearly_counts(c, &mut rng))
        .collect();

    let csv_path = out_dir.join("sample_data.csv");
    write_csv(&csv_path, &counts)?;

    let batch = build_batch(&counts)?;
    let parquet_path = out_dir.join("sample_data.parquet");
    write_parquet(&parquet_path, &batch)?;

    println!("{}", pretty_format_batches(&[batch.project(&[0, 1, 4, 5, 6])?])?);
    println!(
        "Wrote {} countries ({} years each) to {} and {}",
        COUNTRIES.len(),
        LAST_YEAR - FIRST_YEAR + 1,
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}

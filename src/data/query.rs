use std::collections::HashSet;

use super::error::QueryError;
use super::model::{Record, Table};

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Headline figures over the whole table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total: u64,
    /// Mean of the per-country totals; `NaN` for an empty table.
    pub mean: f64,
}

impl Summary {
    /// Mean rounded to the nearest whole immigrant, `None` when undefined.
    pub fn rounded_mean(&self) -> Option<i64> {
        if self.mean.is_nan() {
            None
        } else {
            Some(self.mean.round() as i64)
        }
    }
}

pub fn summary(table: &Table) -> Summary {
    let count = table.len();
    // Cannot overflow: `Table::from_records` rejects grand totals past u64::MAX.
    let total: u64 = table.records().iter().map(Record::total).sum();
    let mean = if count == 0 {
        f64::NAN
    } else {
        total as f64 / count as f64
    };
    Summary { count, total, mean }
}

// ---------------------------------------------------------------------------
// Single-country trend
// ---------------------------------------------------------------------------

/// One country's counts over the full year domain, ascending by year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub country: String,
    points: Vec<(i32, u64)>,
}

impl Trend {
    pub fn points(&self) -> &[(i32, u64)] {
        &self.points
    }

    pub fn total(&self) -> u64 {
        self.points.iter().map(|&(_, c)| c).sum()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub fn single_country_trend(table: &Table, country: &str) -> Result<Trend, QueryError> {
    let record = table
        .get(country)
        .ok_or_else(|| QueryError::NotFound(country.to_string()))?;
    Ok(Trend {
        country: record.country.clone(),
        points: record.year_counts.iter().collect(),
    })
}

// ---------------------------------------------------------------------------
// Multi-country slice
// ---------------------------------------------------------------------------

/// The requested countries' rows over the full year domain.
///
/// Rows follow the order in which the countries were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice<'a> {
    records: Vec<&'a Record>,
}

impl<'a> Slice<'a> {
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn countries(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.records.iter().map(|r| r.country.as_str())
    }

    /// Transposed view for charts: one `(country, [(year, count)])` series per row.
    pub fn series(&self) -> impl Iterator<Item = (&'a str, Vec<(i32, u64)>)> + '_ {
        self.records
            .iter()
            .map(|r| (r.country.as_str(), r.year_counts.iter().collect()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Rows for `countries` in request order. Unknown names are skipped and a
/// repeated name is kept once, at its first position.
pub fn multi_country_slice<'a, I, S>(table: &'a Table, countries: I) -> Slice<'a>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for name in countries {
        let name = name.as_ref();
        match table.get(name) {
            Some(rec) => {
                if seen.insert(name.to_string()) {
                    records.push(rec);
                }
            }
            None => log::debug!("Slice: skipping unknown country '{name}'"),
        }
    }
    Slice { records }
}

use std::collections::HashMap;

use super::error::DataLoadError;

// ---------------------------------------------------------------------------
// Year domain
// ---------------------------------------------------------------------------

/// First year with recorded counts.
pub const FIRST_YEAR: i32 = 1980;
/// Last year with recorded counts (inclusive).
pub const LAST_YEAR: i32 = 2013;
/// Number of years in the domain.
pub const YEAR_COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

/// Iterate the fixed year domain in ascending order.
pub fn years() -> impl Iterator<Item = i32> + Clone {
    FIRST_YEAR..=LAST_YEAR
}

// ---------------------------------------------------------------------------
// YearCounts – one count per year of the domain
// ---------------------------------------------------------------------------

/// Immigration counts for every year of the domain, ascending by year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCounts([u64; YEAR_COUNT]);

impl YearCounts {
    pub fn new(counts: [u64; YEAR_COUNT]) -> Self {
        YearCounts(counts)
    }

    /// `(year, count)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        years().zip(self.0.iter().copied())
    }

    /// Sum over all years, `None` if it does not fit in a `u64`.
    pub fn checked_sum(&self) -> Option<u64> {
        self.0.iter().try_fold(0u64, |acc, &c| acc.checked_add(c))
    }
}

// ---------------------------------------------------------------------------
// Record – one country
// ---------------------------------------------------------------------------

/// One country's attributes, yearly counts and precomputed total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub country: String,
    pub continent: String,
    pub region: String,
    /// Development status ("Developed regions" / "Developing regions").
    pub status: String,
    pub year_counts: YearCounts,
    total: u64,
}

impl Record {
    /// Build a record; `total` is derived from `year_counts` here and never
    /// changes afterwards.
    pub fn new(
        country: impl Into<String>,
        continent: impl Into<String>,
        region: impl Into<String>,
        status: impl Into<String>,
        year_counts: YearCounts,
    ) -> Result<Self, DataLoadError> {
        let country = country.into();
        let Some(total) = year_counts.checked_sum() else {
            return Err(DataLoadError::CountOverflow { country });
        };
        Ok(Record {
            country,
            continent: continent.into(),
            region: region.into(),
            status: status.into(),
            year_counts,
            total,
        })
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

// ---------------------------------------------------------------------------
// Table – the complete normalized dataset
// ---------------------------------------------------------------------------

/// All records sorted descending by total, with a unique country index.
///
/// Rows are kept in one ordered `Vec`; the index maps a country name to its
/// position in that `Vec`. Neither is mutated after construction.
#[derive(Debug, Clone)]
pub struct Table {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl Table {
    /// Sort `records` descending by total (stable) and index them by country.
    ///
    /// Fails if two records share a country, or if the grand total does not
    /// fit in a `u64`; totals summed over a built table cannot overflow.
    pub fn from_records(mut records: Vec<Record>) -> Result<Self, DataLoadError> {
        records
            .iter()
            .try_fold(0u64, |acc, r| acc.checked_add(r.total))
            .ok_or(DataLoadError::TotalOverflow)?;

        records.sort_by(|a, b| b.total.cmp(&a.total));

        let mut index = HashMap::with_capacity(records.len());
        for (pos, rec) in records.iter().enumerate() {
            if index.insert(rec.country.clone(), pos).is_some() {
                return Err(DataLoadError::DuplicateCountry(rec.country.clone()));
            }
        }
        Ok(Table { records, index })
    }

    /// O(1) lookup by country name.
    pub fn get(&self, country: &str) -> Option<&Record> {
        self.index.get(country).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, country: &str) -> bool {
        self.index.contains_key(country)
    }

    /// Records in canonical order (descending total).
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Country names in canonical order, for selection widgets.
    pub fn countries(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.country.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

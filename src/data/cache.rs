use once_cell::sync::OnceCell;

use super::error::DataLoadError;
use super::loader::load_file;
use super::model::Table;
use super::source::DatasetSource;

// ---------------------------------------------------------------------------
// TableCache – compute once, hand out shared references afterwards
// ---------------------------------------------------------------------------

/// Single-assignment holder for the loaded [`Table`].
///
/// The first successful load is stored; every later call returns that same
/// instance without touching the source again. A failed load stores nothing.
#[derive(Debug, Default)]
pub struct TableCache {
    cell: OnceCell<Table>,
}

impl TableCache {
    pub const fn new() -> Self {
        TableCache {
            cell: OnceCell::new(),
        }
    }

    /// Load from `source` on first use; afterwards `source` is ignored.
    pub fn get_or_load(&self, source: &DatasetSource) -> Result<&Table, DataLoadError> {
        self.get_or_try_init(|| load_file(source))
    }

    pub fn get_or_try_init<F>(&self, init: F) -> Result<&Table, DataLoadError>
    where
        F: FnOnce() -> Result<Table, DataLoadError>,
    {
        if let Some(table) = self.get() {
            log::trace!("Dataset served from cache");
            return Ok(table);
        }
        self.cell.get_or_try_init(init)
    }

    pub fn get(&self) -> Option<&Table> {
        self.cell.get()
    }
}

// ---------------------------------------------------------------------------
// Process-wide dataset
// ---------------------------------------------------------------------------

static DATASET: TableCache = TableCache::new();

/// The dataset from the default workbook layout, loaded at most once.
pub fn load() -> Result<&'static Table, DataLoadError> {
    load_with(&DatasetSource::default())
}

/// Like [`load`] with an explicit layout. Only the first successful call's
/// source is read; later calls return the cached table.
pub fn load_with(source: &DatasetSource) -> Result<&'static Table, DataLoadError> {
    DATASET.get_or_load(source)
}

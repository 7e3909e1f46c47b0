/// Data layer: core types, loading, caching and queries.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawSheet → normalize → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  one Table per process, shared as &'static
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  summary / single-country trend / multi-country slice
///   └──────────┘
/// ```

pub mod cache;
pub mod error;
pub mod loader;
pub mod model;
pub mod query;
pub mod source;

#[cfg(test)]
pub(crate) mod fixtures;

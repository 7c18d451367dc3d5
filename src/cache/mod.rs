//! Caching modules for performance optimization.

pub mod row_cache;

pub use row_cache::RowCache;

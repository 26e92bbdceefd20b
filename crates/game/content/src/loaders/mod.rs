//! Content loaders for reading schema catalogs from configuration text.
//!
//! Loaders parse in-memory text; reading files is left to the host.

pub mod schemas;

pub use schemas::SchemaCatalogLoader;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

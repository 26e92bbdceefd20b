//! Game catalog and stat schema content.
//!
//! This crate knows which games exist and what stats each one tracks:
//! - Supported titles with their slugs and display names
//! - Built-in stat schemas for every title
//! - Schema catalogs loaded from TOML text
//!
//! Everything here feeds [`stat_core::SchemaRegistry`]; record arithmetic
//! itself lives in `stat-core`.

pub mod catalog;
pub mod games;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{BuiltinSchema, CatalogError, StatCatalog, builtin_registry, builtin_schema};
pub use games::Game;

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, SchemaCatalogLoader};

//! Schema catalog loader.

use anyhow::Context;
use serde::Deserialize;
use stat_core::{SchemaDescriptor, SchemaRegistry};
use tracing::debug;

use crate::loaders::LoadResult;

/// Schema catalog structure for TOML files.
///
/// ```toml
/// [[schema]]
/// game = "the-sacred-stones"
/// stat_names = ["HP", "Pow", "Skl", "Spd", "Lck", "Def", "Res", "Con", "Mov"]
/// zero_growth = ["Con", "Mov"]
/// ```
#[derive(Debug, Clone, Deserialize)]
struct SchemaCatalog {
    #[serde(default, rename = "schema")]
    schemas: Vec<SchemaEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct SchemaEntry {
    game: String,
    #[serde(flatten)]
    descriptor: SchemaDescriptor,
}

/// Loader for stat schema catalogs in TOML.
pub struct SchemaCatalogLoader;

impl SchemaCatalogLoader {
    /// Parses a catalog into a fresh registry.
    pub fn from_toml_str(content: &str) -> LoadResult<SchemaRegistry> {
        let mut registry = SchemaRegistry::new();
        Self::load_into(&mut registry, content)?;
        Ok(registry)
    }

    /// Parses a catalog and defines every schema in `registry`.
    ///
    /// Returns the number of schemas defined. On error, schemas listed
    /// before the offending entry stay defined.
    pub fn load_into(registry: &mut SchemaRegistry, content: &str) -> LoadResult<usize> {
        let catalog: SchemaCatalog = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse schema catalog TOML: {}", e))?;

        let count = catalog.schemas.len();
        for entry in catalog.schemas {
            registry
                .define_descriptor(entry.game.clone(), entry.descriptor)
                .with_context(|| format!("Invalid stat schema for game '{}'", entry.game))?;
        }

        debug!(schemas = count, "loaded schema catalog");
        Ok(count)
    }
}

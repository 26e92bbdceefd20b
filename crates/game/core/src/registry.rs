//! Schema registry: one immutable schema per game id.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{ErrorSeverity, StatsError};
use crate::schema::{SchemaDescriptor, SchemaError, StatSchema};

/// No schema is registered for the requested game id.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no stat schema registered for game '{game_id}'")]
pub struct NotFoundError {
    pub game_id: String,
}

impl StatsError for NotFoundError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "REGISTRY_NOT_FOUND"
    }
}

/// Catalog of stat schemas keyed by game id.
///
/// Definition needs `&mut self`, so a registry shared behind `&` or `Arc`
/// is frozen and can be read from any number of threads without locking.
/// Schemas are handed out as `Arc<StatSchema>` and never replaced.
#[derive(Clone, Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Arc<StatSchema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and registers the schema for `game_id`.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::DuplicateStat`] if `stat_names` repeats a name
    /// - [`SchemaError::UnknownZeroGrowth`] if a zero-growth name is not a stat
    /// - [`SchemaError::AlreadyDefined`] if `game_id` is already registered
    pub fn define<S, Z>(
        &mut self,
        game_id: impl Into<String>,
        stat_names: impl IntoIterator<Item = S>,
        zero_growth_names: impl IntoIterator<Item = Z>,
    ) -> Result<Arc<StatSchema>, SchemaError>
    where
        S: Into<String>,
        Z: Into<String>,
    {
        let game_id = game_id.into();
        if self.schemas.contains_key(&game_id) {
            return Err(SchemaError::AlreadyDefined { schema: game_id });
        }

        let schema = Arc::new(StatSchema::new(
            game_id.clone(),
            stat_names,
            zero_growth_names,
        )?);
        debug!(
            game = %game_id,
            stats = schema.len(),
            zero_growth = schema.zero_growth().len(),
            "defined stat schema"
        );

        self.schemas.insert(game_id, Arc::clone(&schema));
        Ok(schema)
    }

    /// Same as [`define`](Self::define), taking a catalog descriptor.
    pub fn define_descriptor(
        &mut self,
        game_id: impl Into<String>,
        descriptor: SchemaDescriptor,
    ) -> Result<Arc<StatSchema>, SchemaError> {
        self.define(game_id, descriptor.stat_names, descriptor.zero_growth)
    }

    /// Returns the schema registered for `game_id`.
    pub fn lookup(&self, game_id: &str) -> Result<Arc<StatSchema>, NotFoundError> {
        self.schemas
            .get(game_id)
            .cloned()
            .ok_or_else(|| NotFoundError {
                game_id: game_id.to_owned(),
            })
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.schemas.contains_key(game_id)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Registered game ids, sorted.
    pub fn game_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

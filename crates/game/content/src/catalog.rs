//! Built-in stat schemas for every supported game.
//!
//! Four stat families cover the six titles; the GBA titles share one.

use std::sync::Arc;

use stat_core::{NotFoundError, RecordError, SchemaError, SchemaRegistry, StatRecord, StatSchema};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::games::Game;

/// Static stat list and zero-growth subset for one stat family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinSchema {
    pub stat_names: &'static [&'static str],
    pub zero_growth: &'static [&'static str],
}

pub const GENEALOGY: BuiltinSchema = BuiltinSchema {
    stat_names: &["HP", "Str", "Mag", "Skl", "Spd", "Lck", "Def", "Res"],
    zero_growth: &[],
};

pub const THRACIA: BuiltinSchema = BuiltinSchema {
    stat_names: &[
        "HP", "Str", "Mag", "Skl", "Spd", "Lck", "Def", "Con", "Mov", "Lead", "MS", "PC",
    ],
    zero_growth: &["Lead", "MS", "PC"],
};

pub const GBA: BuiltinSchema = BuiltinSchema {
    stat_names: &["HP", "Pow", "Skl", "Spd", "Lck", "Def", "Res", "Con", "Mov"],
    zero_growth: &["Con", "Mov"],
};

pub const RADIANT: BuiltinSchema = BuiltinSchema {
    stat_names: &[
        "HP", "Str", "Mag", "Skl", "Spd", "Lck", "Def", "Res", "Mov", "Con", "Wt",
    ],
    zero_growth: &["Mov", "Con", "Wt"],
};

/// Returns the stat family `game` uses.
pub fn builtin_schema(game: Game) -> &'static BuiltinSchema {
    match game {
        Game::GenealogyOfTheHolyWar => &GENEALOGY,
        Game::Thracia776 => &THRACIA,
        Game::SwordOfSeals | Game::BlazingSword | Game::TheSacredStones => &GBA,
        Game::PathOfRadiance => &RADIANT,
    }
}

/// Registers the built-in schema of every game under its URL slug.
pub fn builtin_registry() -> Result<SchemaRegistry, SchemaError> {
    let mut registry = SchemaRegistry::new();
    for game in Game::iter() {
        let schema = builtin_schema(game);
        registry.define(
            game.url_name(),
            schema.stat_names.iter().copied(),
            schema.zero_growth.iter().copied(),
        )?;
    }
    debug!(schemas = registry.len(), "registered built-in stat schemas");
    Ok(registry)
}

/// Errors from building records through the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Game-keyed view over a [`SchemaRegistry`].
#[derive(Clone, Debug)]
pub struct StatCatalog {
    registry: SchemaRegistry,
}

impl StatCatalog {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Catalog backed by [`builtin_registry`].
    pub fn builtin() -> Result<Self, SchemaError> {
        builtin_registry().map(Self::new)
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn schema(&self, game: Game) -> Result<Arc<StatSchema>, NotFoundError> {
        self.registry.lookup(game.url_name())
    }

    /// Record for `game` with every stat at zero.
    pub fn zeroed(&self, game: Game) -> Result<StatRecord, NotFoundError> {
        self.schema(game).map(|schema| StatRecord::filled(schema, 0))
    }

    /// Record for `game` built from name/value pairs.
    pub fn record<K>(
        &self,
        game: Game,
        mapping: impl IntoIterator<Item = (K, i32)>,
    ) -> Result<StatRecord, CatalogError>
    where
        K: AsRef<str>,
    {
        let schema = self.schema(game)?;
        Ok(StatRecord::from_mapping(schema, mapping)?)
    }
}

//! Stat schemas: the ordered stat list one game defines.
//!
//! A schema is built once per game, validated, and then shared read-only by
//! every record of that game. Polymorphism over "which game" is a value
//! parameter: a new game adds a schema, not a new type.

use std::collections::HashMap;

use crate::error::{ErrorSeverity, StatsError};

/// Plain description of a schema, as supplied by a catalog collaborator.
///
/// Descriptors are unvalidated; [`StatSchema::from_descriptor`] turns them
/// into a schema or reports what is wrong with them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaDescriptor {
    /// Stat names in display order.
    pub stat_names: Vec<String>,

    /// Stats that never grow on level-up.
    #[cfg_attr(feature = "serde", serde(default))]
    pub zero_growth: Vec<String>,
}

impl SchemaDescriptor {
    pub fn new<S, Z>(
        stat_names: impl IntoIterator<Item = S>,
        zero_growth: impl IntoIterator<Item = Z>,
    ) -> Self
    where
        S: Into<String>,
        Z: Into<String>,
    {
        Self {
            stat_names: stat_names.into_iter().map(Into::into).collect(),
            zero_growth: zero_growth.into_iter().map(Into::into).collect(),
        }
    }
}

/// Errors raised while defining a schema.
///
/// These are catalog bugs, surfaced at registry build time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The stat list names the same stat twice.
    #[error("schema '{schema}' lists stat '{stat}' more than once")]
    DuplicateStat { schema: String, stat: String },

    /// A zero-growth stat is not part of the stat list.
    #[error("schema '{schema}' marks '{stat}' as zero-growth but does not define it")]
    UnknownZeroGrowth { schema: String, stat: String },

    /// A schema is already registered under this game id.
    #[error("a schema for game '{schema}' is already defined")]
    AlreadyDefined { schema: String },
}

impl StatsError for SchemaError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateStat { .. } => "SCHEMA_DUPLICATE_STAT",
            Self::UnknownZeroGrowth { .. } => "SCHEMA_UNKNOWN_ZERO_GROWTH",
            Self::AlreadyDefined { .. } => "SCHEMA_ALREADY_DEFINED",
        }
    }
}

/// Validated, immutable stat schema for one game.
///
/// # Invariants
///
/// - `stat_names` contains no duplicates
/// - `zero_growth` is a subset of `stat_names`, kept in schema order
/// - `slots` maps every stat name to its position in `stat_names`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatSchema {
    id: String,
    stat_names: Vec<String>,
    zero_growth: Vec<String>,
    slots: HashMap<String, usize>,
}

impl StatSchema {
    /// Validates and builds a schema.
    ///
    /// Zero-growth names may be given in any order and may repeat; they are
    /// stored once each, in schema order.
    pub fn new<S, Z>(
        id: impl Into<String>,
        stat_names: impl IntoIterator<Item = S>,
        zero_growth: impl IntoIterator<Item = Z>,
    ) -> Result<Self, SchemaError>
    where
        S: Into<String>,
        Z: Into<String>,
    {
        let id = id.into();
        let stat_names: Vec<String> = stat_names.into_iter().map(Into::into).collect();

        let mut slots = HashMap::with_capacity(stat_names.len());
        for (slot, name) in stat_names.iter().enumerate() {
            if slots.insert(name.clone(), slot).is_some() {
                return Err(SchemaError::DuplicateStat {
                    schema: id,
                    stat: name.clone(),
                });
            }
        }

        let mut growth_slots = Vec::new();
        for name in zero_growth.into_iter().map(Into::into) {
            match slots.get(&name) {
                Some(&slot) => growth_slots.push(slot),
                None => {
                    return Err(SchemaError::UnknownZeroGrowth {
                        schema: id,
                        stat: name,
                    });
                }
            }
        }
        growth_slots.sort_unstable();
        growth_slots.dedup();
        let zero_growth = growth_slots
            .into_iter()
            .map(|slot| stat_names[slot].clone())
            .collect();

        Ok(Self {
            id,
            stat_names,
            zero_growth,
            slots,
        })
    }

    /// Builds a schema from a catalog descriptor.
    pub fn from_descriptor(
        id: impl Into<String>,
        descriptor: SchemaDescriptor,
    ) -> Result<Self, SchemaError> {
        Self::new(id, descriptor.stat_names, descriptor.zero_growth)
    }

    /// Schema identity (the game id it was defined for).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Stat names in schema order.
    pub fn stat_names(&self) -> &[String] {
        &self.stat_names
    }

    /// Zero-growth stats in schema order.
    pub fn zero_growth(&self) -> &[String] {
        &self.zero_growth
    }

    pub fn len(&self) -> usize {
        self.stat_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stat_names.is_empty()
    }

    /// Position of `name` within the stat list.
    #[inline]
    pub fn slot(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn is_zero_growth(&self, name: &str) -> bool {
        self.zero_growth.iter().any(|stat| stat == name)
    }

    /// Stats that can grow on level-up, in schema order.
    pub fn growable_stats(&self) -> impl Iterator<Item = &str> {
        self.stat_names
            .iter()
            .map(String::as_str)
            .filter(|name| !self.is_zero_growth(name))
    }

    /// Returns the descriptor this schema was built from (zero-growth normalized).
    pub fn descriptor(&self) -> SchemaDescriptor {
        SchemaDescriptor {
            stat_names: self.stat_names.clone(),
            zero_growth: self.zero_growth.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GBA: [&str; 9] = ["HP", "Pow", "Skl", "Spd", "Lck", "Def", "Res", "Con", "Mov"];

    #[test]
    fn slots_follow_declaration_order() {
        let schema = StatSchema::new("gba", GBA, ["Mov", "Con"]).unwrap();

        assert_eq!(schema.len(), 9);
        assert_eq!(schema.slot("HP"), Some(0));
        assert_eq!(schema.slot("Mov"), Some(8));
        assert_eq!(schema.slot("Str"), None);
        // Zero-growth is reordered to match the stat list.
        assert_eq!(schema.zero_growth(), ["Con", "Mov"]);
    }

    #[test]
    fn growable_and_zero_growth_partition_the_stat_list() {
        let schema = StatSchema::new("gba", GBA, ["Con", "Mov"]).unwrap();

        let growable: Vec<&str> = schema.growable_stats().collect();
        assert_eq!(growable, ["HP", "Pow", "Skl", "Spd", "Lck", "Def", "Res"]);

        for name in schema.stat_names() {
            let in_growable = growable.contains(&name.as_str());
            assert_ne!(in_growable, schema.is_zero_growth(name), "{name}");
        }
        assert_eq!(growable.len() + schema.zero_growth().len(), schema.len());
    }

    #[test]
    fn duplicate_stat_is_rejected() {
        let err = StatSchema::new("broken", ["HP", "Str", "HP"], [] as [&str; 0]).unwrap_err();

        assert_eq!(
            err,
            SchemaError::DuplicateStat {
                schema: "broken".into(),
                stat: "HP".into(),
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "SCHEMA_DUPLICATE_STAT");
    }

    #[test]
    fn zero_growth_outside_stat_list_is_rejected() {
        let err = StatSchema::new("broken", ["HP", "Str"], ["Mov"]).unwrap_err();

        assert_eq!(
            err,
            SchemaError::UnknownZeroGrowth {
                schema: "broken".into(),
                stat: "Mov".into(),
            }
        );
    }

    #[test]
    fn repeated_zero_growth_entries_collapse() {
        let schema = StatSchema::new("c", ["HP", "Con"], ["Con", "Con"]).unwrap();
        assert_eq!(schema.zero_growth(), ["Con"]);
    }

    #[test]
    fn descriptor_round_trips_through_schema() {
        let descriptor = SchemaDescriptor::new(["HP", "Str", "Mov"], ["Mov"]);
        let schema = StatSchema::from_descriptor("d", descriptor.clone()).unwrap();
        assert_eq!(schema.descriptor(), descriptor);
    }
}

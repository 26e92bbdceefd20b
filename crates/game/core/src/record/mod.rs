//! Stat records: one integer per stat of a bound schema.
//!
//! # Alignment
//!
//! Binary operations walk the receiver's stat list in schema order and
//! resolve each stat in the operand *by name*. The operand may use a
//! different schema as long as it defines every stat of the receiver; a
//! missing stat is an error, never an implicit zero.
//!
//! ```text
//! receiver: [HP, Str, Skl]
//! operand:  [HP, Mag, Skl, Str, Mov]
//! aligned:  [HP, Str, Skl]  (operand slots 0, 3, 2)
//! ```
//!
//! Resolution finishes before anything is written, so a failed operation
//! leaves the receiver exactly as it was.

mod error;
mod ops;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::schema::StatSchema;

pub use error::RecordError;
pub use ops::Elementwise;

/// A fully populated, schema-bound set of stat values.
///
/// Values are stored by schema slot. The schema is shared, never copied,
/// and fixed for the lifetime of the record. Cloning copies the values.
#[derive(Clone, Debug)]
pub struct StatRecord {
    schema: Arc<StatSchema>,
    values: Vec<i32>,
}

impl StatRecord {
    /// Builds a record from name/value pairs.
    ///
    /// Every stat of `schema` must be present. Keys the schema does not
    /// define are ignored and reported with a warning. When a key repeats,
    /// the last value wins.
    ///
    /// # Errors
    ///
    /// [`RecordError::MissingStats`] listing every absent stat in schema order.
    pub fn from_mapping<K>(
        schema: Arc<StatSchema>,
        mapping: impl IntoIterator<Item = (K, i32)>,
    ) -> Result<Self, RecordError>
    where
        K: AsRef<str>,
    {
        let mut slots: Vec<Option<i32>> = vec![None; schema.len()];
        let mut unused = Vec::new();

        for (name, value) in mapping {
            let name = name.as_ref();
            match schema.slot(name) {
                Some(slot) => slots[slot] = Some(value),
                None => unused.push(name.to_owned()),
            }
        }

        let missing: Vec<String> = schema
            .stat_names()
            .iter()
            .zip(&slots)
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(RecordError::MissingStats {
                schema: schema.id().to_owned(),
                missing,
            });
        }

        if !unused.is_empty() {
            unused.sort_unstable();
            unused.dedup();
            warn!(
                schema = schema.id(),
                ?unused,
                "ignoring mapping keys the schema does not define"
            );
        }

        Ok(Self {
            values: slots.into_iter().flatten().collect(),
            schema,
        })
    }

    /// Builds a record with every stat set to `value`.
    pub fn filled(schema: Arc<StatSchema>, value: i32) -> Self {
        Self {
            values: vec![value; schema.len()],
            schema,
        }
    }

    pub fn schema(&self) -> &Arc<StatSchema> {
        &self.schema
    }

    /// Returns the value of `name`.
    pub fn get(&self, name: &str) -> Result<i32, RecordError> {
        self.slot(name).map(|slot| self.values[slot])
    }

    /// Overwrites the value of `name`.
    pub fn set(&mut self, name: &str, value: i32) -> Result<(), RecordError> {
        let slot = self.slot(name)?;
        self.values[slot] = value;
        Ok(())
    }

    fn slot(&self, name: &str) -> Result<usize, RecordError> {
        self.schema.slot(name).ok_or_else(|| RecordError::UnknownStat {
            schema: self.schema.id().to_owned(),
            stat: name.to_owned(),
        })
    }

    // ===== arithmetic =====

    /// Multiplies every value by `factor`.
    pub fn scale(&mut self, factor: i32) {
        self.values.iter_mut().for_each(|value| *value *= factor);
    }

    pub fn add(&mut self, other: &StatRecord) -> Result<(), RecordError> {
        self.combine(other, Elementwise::Add)
    }

    pub fn subtract(&mut self, other: &StatRecord) -> Result<(), RecordError> {
        self.combine(other, Elementwise::Subtract)
    }

    /// Caps every value at the operand's value.
    pub fn min_with(&mut self, other: &StatRecord) -> Result<(), RecordError> {
        self.combine(other, Elementwise::Min)
    }

    /// Raises every value to at least the operand's value.
    pub fn max_with(&mut self, other: &StatRecord) -> Result<(), RecordError> {
        self.combine(other, Elementwise::Max)
    }

    /// Applies `op` to every stat of `self` and the same-named stat of `other`.
    ///
    /// # Errors
    ///
    /// [`RecordError::SchemaMismatch`] naming the first receiver stat (in
    /// schema order) that `other` does not define. `self` is unchanged.
    pub fn combine(&mut self, other: &StatRecord, op: Elementwise) -> Result<(), RecordError> {
        let operands = self.align(other)?;
        for (value, &rhs) in self.values.iter_mut().zip(operands.iter()) {
            *value = op.apply(*value, rhs);
        }
        Ok(())
    }

    /// Operand values reordered into the receiver's schema slots.
    fn align<'a>(&self, other: &'a StatRecord) -> Result<Cow<'a, [i32]>, RecordError> {
        if Arc::ptr_eq(&self.schema, &other.schema) {
            return Ok(Cow::Borrowed(&other.values));
        }

        self.schema
            .stat_names()
            .iter()
            .map(|name| {
                other
                    .schema
                    .slot(name)
                    .map(|slot| other.values[slot])
                    .ok_or_else(|| RecordError::SchemaMismatch {
                        stat: name.clone(),
                        receiver: self.schema.id().to_owned(),
                        operand: other.schema.id().to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Cow::Owned)
    }

    // ===== export =====

    /// `(name, value)` pairs in schema order.
    pub fn as_ordered_pairs(&self) -> Vec<(&str, i32)> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.schema
            .stat_names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Stats of the bound schema that can grow on level-up.
    pub fn growable_stats(&self) -> Vec<&str> {
        self.schema.growable_stats().collect()
    }

    /// Values of the growable stats, in schema order.
    pub fn growable_values(&self) -> impl Iterator<Item = i32> {
        self.iter()
            .filter(|(name, _)| !self.schema.is_zero_growth(name))
            .map(|(_, value)| value)
    }

    /// Compares each stat with the same-named stat of `other`.
    ///
    /// Follows the same alignment rule as the arithmetic operations.
    pub fn compare(&self, other: &StatRecord) -> Result<Vec<(&str, Ordering)>, RecordError> {
        let operands = self.align(other)?;
        Ok(self
            .iter()
            .zip(operands.iter())
            .map(|((name, value), rhs)| (name, value.cmp(rhs)))
            .collect())
    }
}

impl PartialEq for StatRecord {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.schema, &other.schema) || self.schema == other.schema)
            && self.values == other.values
    }
}

impl Eq for StatRecord {}

impl fmt::Display for StatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

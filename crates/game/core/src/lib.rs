//! Schema-bound stat records for tactical RPG characters.
//!
//! `stat-core` defines the two pieces every higher layer builds on:
//! - [`registry::SchemaRegistry`]: immutable stat schemas, one per game
//! - [`record::StatRecord`]: a fully populated set of stat values bound to one
//!   schema, with name-aligned arithmetic against records of other schemas
//!
//! Game catalogs, display formatting, and growth simulation live outside this
//! crate and consume the types re-exported here.
pub mod error;
pub mod record;
pub mod registry;
pub mod schema;

pub use error::{ErrorSeverity, StatsError};
pub use record::{Elementwise, RecordError, StatRecord};
pub use registry::{NotFoundError, SchemaRegistry};
pub use schema::{SchemaDescriptor, SchemaError, StatSchema};

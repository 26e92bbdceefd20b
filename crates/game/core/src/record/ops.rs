//! Per-element reducers for binary record arithmetic.

/// Reducer applied to each aligned pair of stat values.
///
/// Arithmetic uses native `i32` operators: overflow is not masked, so it
/// panics in debug builds and wraps in release builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Elementwise {
    /// `lhs + rhs`
    Add,
    /// `lhs - rhs`
    Subtract,
    /// `min(lhs, rhs)`
    Min,
    /// `max(lhs, rhs)`
    Max,
}

impl Elementwise {
    #[inline]
    pub fn apply(self, lhs: i32, rhs: i32) -> i32 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Min => lhs.min(rhs),
            Self::Max => lhs.max(rhs),
        }
    }
}

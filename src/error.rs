//! Everything that can go wrong: malformed construction arguments, a lookup
//! falling off an axis, or two histograms refusing to combine.

use crate::axis::AxisKind;
use crate::value::ValueKind;

/// Malformed construction or call arguments. These fail fast: no partially
/// initialised axis, storage or histogram ever escapes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("need at least two bin edges, got {0}")]
    TooFewEdges(usize),
    #[error("bin edges are not strictly increasing")]
    EdgesNotIncreasing,
    #[error("edge sequence mixes value kinds")]
    MixedEdgeKinds,
    #[error("pattern bins must be enumerated explicitly, not given as a range")]
    RangeWithPatterns,
    #[error("lower bound is {lower} but upper bound is {upper}")]
    BoundKindMismatch { lower: ValueKind, upper: ValueKind },
    #[error("a range axis needs at least one bin")]
    EmptyRange,
    #[error("invalid bin pattern: {0}")]
    BadPattern(String),
    #[error("invalid bin counts {0:?}")]
    InvalidBinCounts([usize; 3]),
    #[error("histograms have 1 to 3 dimensions, got {0}")]
    DimensionCount(usize),
    #[error("expected {expected} coordinates, got {got}")]
    WrongArity { expected: usize, got: usize },
    #[error("coordinate for axis {axis} is {got}, but the axis bins {expected} values")]
    CoordinateKind { axis: usize, expected: AxisKind, got: ValueKind },
    #[error("no axis {0}")]
    AxisOutOfRange(usize),
    #[error("cannot project a one-dimensional histogram any further")]
    ProjectionToNothing,
    #[error("series extraction needs one dimension, this histogram has {0}")]
    SeriesNeedsOneDimension(usize),
}

/// Outcome of a single-axis lookup that found no bin. `Underflow` and
/// `Overflow` never escape `Histogram::fill`; they end up in its overflow
/// counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("value lies below the first bin edge")]
    Underflow,
    #[error("value lies beyond the last bin")]
    Overflow,
    #[error("{got} cannot be looked up on a {expected} axis")]
    KindMismatch { expected: AxisKind, got: ValueKind },
}

/// Why two histograms cannot be combined element-wise. Raised by
/// `check_compatibility` and the arithmetic operators; always surfaced to
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Incompatibility {
    #[error("dimension counts differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("bin counts differ on axis {axis}: {left} vs {right}")]
    BinCountMismatch { axis: usize, left: usize, right: usize },
    #[error("axis {axis} kinds differ: {left} vs {right}")]
    KindMismatch { axis: usize, left: AxisKind, right: AxisKind },
    #[error("bin edges differ on axis {axis} at edge {edge}")]
    EdgeMismatch { axis: usize, edge: usize },
    #[error("bin patterns differ on axis {axis} at bin {bin}")]
    PatternMismatch { axis: usize, bin: usize },
}

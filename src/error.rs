//! Error type shared by the coefficient engine and the operators.
use thiserror::Error;

use crate::Axis;

/// Configuration and usage errors.
///
/// Numerical hazards (repeated abscissas, evaluation on a coordinate
/// singularity) are not represented here; they surface as non-finite
/// values in the output instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Fewer grid points than derivative orders requested from the engine.
    #[error("{points} grid points cannot resolve derivatives up to order {max_order}")]
    TooFewPoints { points: usize, max_order: usize },

    /// Caller-provided coefficient buffer has the wrong size.
    #[error("coefficient buffer holds {actual} entries, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// An axis grid has fewer than two points.
    #[error("{axis} grid has {points} points, need at least 2")]
    GridTooSmall { axis: Axis, points: usize },

    /// An axis grid is too small for the operator's maximum order.
    #[error("{axis} grid has {points} points, too few for derivatives of order {max_order}")]
    GridTooCoarse {
        axis: Axis,
        points: usize,
        max_order: usize,
    },

    /// Requested derivative order was not built into the table.
    #[error("derivative order {order} exceeds the maximum of {max_order}")]
    OrderTooHigh { order: usize, max_order: usize },

    /// Number of sampled values does not match the axis grid.
    #[error("{axis} grid has {expected} points but {actual} values were given")]
    SampleCount {
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    /// Number of sampled values does not match a bare coefficient row.
    #[error("length mismatch: {expected} coefficients, {actual} values")]
    LengthMismatch { expected: usize, actual: usize },

    /// A derivative order failed the `usize` to float cast, or the table size overflowed `usize`.
    #[error("unrepresentable number")]
    Unrepresentable,
}

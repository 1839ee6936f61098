use thiserror::Error;

/// Errors raised while shaping or reducing simulation arrays.
///
/// Every variant signals a programming or configuration mistake; none of them
/// are transient, so callers should surface them rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("unknown axis '{name}'")]
    UnknownAxis { name: String },

    #[error("unknown sweep dimension '{name}'")]
    UnknownDimension { name: String },

    #[error("index {index} out of range for axis '{axis}' (size {size})")]
    IndexOutOfRange {
        axis: String,
        index: usize,
        size: usize,
    },

    #[error("sweep dimension '{name}' requested more than once")]
    DuplicateDimension { name: String },

    #[error("axis '{axis}' has {actual} entries but {expected} were expected")]
    AxisSizeMismatch {
        axis: String,
        expected: usize,
        actual: usize,
    },

    #[error("cannot take the mean over empty axis '{name}'")]
    EmptyAxis { name: String },

    #[error("data has {actual} values but axes describe {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("axis sizes {shape:?} describe more elements than can be addressed")]
    ShapeOverflow { shape: Vec<usize> },

    #[error("axis '{name}' appears more than once")]
    DuplicateAxis { name: String },

    #[error("expected an array of rank {expected}, got rank {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error("a sweep needs 1 or 2 free dimensions, got {count}")]
    FreeDimensionCount { count: usize },

    #[error("invalid distribution parameters (shape={shape}, mean={mean}): {reason}")]
    InvalidDistribution {
        shape: f64,
        mean: f64,
        reason: &'static str,
    },
}

impl DataError {
    pub(crate) fn unknown_axis(name: impl Into<String>) -> Self {
        DataError::UnknownAxis { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;

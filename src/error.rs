use crate::constants::Float;
use std::fmt;
use thiserror::Error;

pub type LbResult<T> = Result<T, LbError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LbError {
    #[error("lattice must have width and height > 0 (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("omega ({0}) must be in 0.0..=2.0")]
    InvalidOmega(Float),

    #[error("{name} ({value}) is not a usable lattice parameter")]
    InvalidParameter { name: &'static str, value: Float },

    #[error("{axis} ({value}) must be in 0..{extent}")]
    Index {
        axis: Axis,
        value: isize,
        extent: usize,
    },

    #[error("direction {direction} of site {node} is outside the distribution buffer")]
    Site { node: usize, direction: usize },

    #[error("failed to build the worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl LbError {
    pub fn is_index_error(&self) -> bool {
        matches!(self, LbError::Index { .. })
    }
}

/// Validates `value` against `0..extent`, returning it as an index.
pub(crate) fn check_index(axis: Axis, value: isize, extent: usize) -> LbResult<usize> {
    if value < 0 || value as usize >= extent {
        return Err(LbError::Index {
            axis,
            value,
            extent,
        });
    }
    Ok(value as usize)
}

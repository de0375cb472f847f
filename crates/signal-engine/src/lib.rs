//! Signal Derivation Engine
//!
//! Turns a recorded trajectory into the per-sample signals used for
//! collision warning: range, bearing, projected target width and their
//! fixed-stride rates.

mod geometry;
mod rate;
mod signals;

pub use geometry::{
    bearing, derive_geometry, distance, lateral_offset, projected_width, GeometrySignals,
    TargetDimensions,
};
pub use rate::{rate_of_change, DEFAULT_STRIDE};
pub use signals::{DerivedSignals, SignalExtractor};

use thiserror::Error;

/// Signal derivation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("Stride must be at least 1")]
    InvalidStride,

    #[error("Sequence of length {len} is too short for stride {stride}")]
    SequenceTooShort { len: usize, stride: usize },
}

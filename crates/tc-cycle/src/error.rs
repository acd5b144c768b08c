//! Error types for cycle construction and evaluation.

use tc_core::TcError;
use tc_eos::EosError;
use thiserror::Error;

/// Errors raised while building or evaluating a cycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    #[error("Capacity exceeded: more {what} than the {capacity} the cycle holds")]
    CapacityExceeded { what: &'static str, capacity: usize },

    #[error("State {ordinal} has not been added yet")]
    MissingState { ordinal: usize },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Eos(#[from] EosError),

    #[error(transparent)]
    Core(#[from] TcError),
}

pub type CycleResult<T> = Result<T, CycleError>;

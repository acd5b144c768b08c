//! Equation-of-state errors.

use crate::model::ModelKind;
use crate::process::ProcessKind;
use crate::property::Property;
use crate::state::Label;
use tc_core::TcError;
use thiserror::Error;

/// Result type for equation-of-state operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors that can occur while completing states or resolving processes.
///
/// Physical-plausibility issues (an unsupported property combination, two
/// boundaries disagreeing on an invariant) are not errors: they surface as
/// [`crate::Completion::Unsupported`] and [`crate::Reconciliation`] values
/// plus a log line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// Assignment of a name that is not one of the 7 state properties.
    #[error("Invalid property '{name}': expected one of P, T, v, u, h, s, x")]
    InvalidProperty { name: String },

    /// Value that contradicts the model (e.g. quality != 1 on an ideal gas).
    #[error("Inconsistent value for {property}: {reason}")]
    InconsistentProperty {
        property: Property,
        reason: &'static str,
    },

    /// State created for one model kind handed to another.
    #[error("State belongs to a {state} model but was completed with a {model} model")]
    ModelMismatch { state: ModelKind, model: ModelKind },

    /// A bracketed scalar solve did not converge.
    #[error("Root finding did not converge for {what}: {reason}")]
    RootFinding { what: &'static str, reason: String },

    /// A process curve needs a boundary value that neither state defines.
    #[error("Cannot resolve {process} process: {property} is unknown on both boundaries")]
    Unresolved {
        process: ProcessKind,
        property: Property,
    },

    /// A completed state still lacks a property the caller needs.
    #[error("State {label} has no value for {property}")]
    MissingProperty { label: Label, property: Property },

    /// Non-physical values (negative pressure, v below co-volume, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid model parameter or argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Operation not offered by this model.
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    #[error(transparent)]
    Core(#[from] TcError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EosError::InvalidProperty { name: "rho".into() };
        assert!(err.to_string().contains("rho"));

        let err = EosError::Unresolved {
            process: ProcessKind::Isochoric,
            property: Property::SpecificVolume,
        };
        let msg = err.to_string();
        assert!(msg.contains("isochoric"));
        assert!(msg.contains('v'));
    }

    #[test]
    fn core_error_converts() {
        let err: EosError = TcError::NonFinite {
            what: "pressure",
            value: f64::NAN,
        }
        .into();
        assert!(matches!(err, EosError::Core(_)));
    }
}

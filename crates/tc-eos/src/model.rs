//! Equation-of-state trait.

use crate::curve::{default_curve, ProcessCurve};
use crate::energy::EdgeEnergy;
use crate::error::{EosError, EosResult};
use crate::input::Completion;
use crate::process::ProcessKind;
use crate::resolve::{resolve_constant_property, Resolution};
use crate::solve::BracketConfig;
use crate::state::State;
use std::fmt;
use tc_core::Real;

/// Which equation of state a [`State`] was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    IdealGas,
    VanDerWaals,
}

impl ModelKind {
    /// Models without a liquid phase require quality 1.
    pub fn single_phase(self) -> bool {
        matches!(self, ModelKind::IdealGas)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModelKind::IdealGas => "ideal gas",
            ModelKind::VanDerWaals => "Van der Waals",
        })
    }
}

/// An equation of state: completes states and resolves processes.
///
/// Implementations hold fixed substance parameters only and must be
/// `Send + Sync` so a single instance can be shared behind an `Arc`.
///
/// Only [`complete_state`](Self::complete_state) and the parameter
/// accessors are required. The resolvers have shared defaults that
/// reconcile the process invariant and build the curve through
/// [`process_curve`](Self::process_curve), whose own default samples by
/// completing scratch states. Models with closed forms override the curve.
pub trait EquationOfState: Send + Sync + fmt::Debug {
    /// Model name (for logging).
    fn name(&self) -> &str;

    fn kind(&self) -> ModelKind;

    /// Specific gas constant [J/(kg·K)].
    fn gas_constant(&self) -> Real;

    /// Temperature interval [K] searched by bracketed solves.
    fn temperature_bracket(&self) -> [Real; 2];

    fn solver_config(&self) -> BracketConfig {
        BracketConfig::default()
    }

    /// Derive every property of `state` from the first supported pair of
    /// known properties.
    ///
    /// An unsupported combination is not an error: it returns
    /// [`Completion::Unsupported`], logs a warning and leaves the state as is.
    fn complete_state(&self, state: &mut State) -> EosResult<Completion>;

    /// Curve for `process` between two reconciled, completed boundaries.
    fn process_curve(
        &self,
        process: ProcessKind,
        inlet: &State,
        outlet: &State,
    ) -> EosResult<ProcessCurve<'_>> {
        default_curve(self, process, inlet, outlet)
    }

    /// Constant volume; swept P → T.
    fn resolve_isochoric(&self, inlet: &mut State, outlet: &mut State) -> EosResult<Resolution<'_>> {
        resolve_constant_property(self, ProcessKind::Isochoric, inlet, outlet)
    }

    /// Constant temperature; swept v → P.
    fn resolve_isothermal(&self, inlet: &mut State, outlet: &mut State) -> EosResult<Resolution<'_>> {
        resolve_constant_property(self, ProcessKind::Isothermal, inlet, outlet)
    }

    /// Constant pressure; swept v → T.
    fn resolve_isobaric(&self, inlet: &mut State, outlet: &mut State) -> EosResult<Resolution<'_>> {
        resolve_constant_property(self, ProcessKind::Isobaric, inlet, outlet)
    }

    /// Constant enthalpy; swept v → P.
    fn resolve_isenthalpic(
        &self,
        inlet: &mut State,
        outlet: &mut State,
    ) -> EosResult<Resolution<'_>> {
        resolve_constant_property(self, ProcessKind::Isenthalpic, inlet, outlet)
    }

    /// Constant entropy; swept v → P.
    fn resolve_isentropic(&self, inlet: &mut State, outlet: &mut State) -> EosResult<Resolution<'_>> {
        resolve_constant_property(self, ProcessKind::Isentropic, inlet, outlet)
    }

    /// Heat `heat` [J/kg] exchanged at constant temperature (positive into
    /// the fluid); swept v → P.
    fn resolve_heat_transfer(
        &self,
        inlet: &mut State,
        outlet: &mut State,
        _heat: Real,
    ) -> EosResult<Resolution<'_>> {
        resolve_constant_property(self, ProcessKind::HeatTransfer, inlet, outlet)
    }

    /// Closed-form work and heat of the edge between two complete states.
    fn analytic_edge_energy(&self, _inlet: &State, _outlet: &State) -> EosResult<EdgeEnergy> {
        Err(EosError::NotSupported {
            what: "analytic edge energy for this equation of state",
        })
    }
}

//! Process selection for one cycle edge.

use std::fmt;
use tc_core::Real;
use tc_eos::{EosResult, EquationOfState, ProcessKind, Resolution, State};

/// Process followed along an edge, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Process {
    Isochoric,
    Isothermal,
    Isobaric,
    Isenthalpic,
    Isentropic,
    /// Heat [J/kg] exchanged at constant temperature, positive into the fluid.
    HeatTransfer { heat: Real },
}

impl Process {
    pub fn kind(&self) -> ProcessKind {
        match self {
            Process::Isochoric => ProcessKind::Isochoric,
            Process::Isothermal => ProcessKind::Isothermal,
            Process::Isobaric => ProcessKind::Isobaric,
            Process::Isenthalpic => ProcessKind::Isenthalpic,
            Process::Isentropic => ProcessKind::Isentropic,
            Process::HeatTransfer { .. } => ProcessKind::HeatTransfer,
        }
    }

    /// Dispatch to the model's resolver for this process.
    pub fn resolve<'a>(
        &self,
        model: &'a dyn EquationOfState,
        inlet: &mut State,
        outlet: &mut State,
    ) -> EosResult<Resolution<'a>> {
        match *self {
            Process::Isochoric => model.resolve_isochoric(inlet, outlet),
            Process::Isothermal => model.resolve_isothermal(inlet, outlet),
            Process::Isobaric => model.resolve_isobaric(inlet, outlet),
            Process::Isenthalpic => model.resolve_isenthalpic(inlet, outlet),
            Process::Isentropic => model.resolve_isentropic(inlet, outlet),
            Process::HeatTransfer { heat } => model.resolve_heat_transfer(inlet, outlet, heat),
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Process::HeatTransfer { heat } => write!(f, "heat transfer (q = {heat:.2} J/kg)"),
            other => f.write_str(other.kind().name()),
        }
    }
}

//! Ideal gas with constant or temperature-dependent specific heats.

use crate::curve::{default_curve, shared_value, ProcessCurve};
use crate::energy::{EdgeClass, EdgeEnergy};
use crate::error::{EosError, EosResult};
use crate::heat_capacity::HeatCapacity;
use crate::input::{unsupported, Completion, InputPair, Inputs, StateValues};
use crate::model::{EquationOfState, ModelKind};
use crate::process::ProcessKind;
use crate::property::Property;
use crate::resolve::{
    check_kind, ensure_complete, prepare_boundaries, reconcile, Reconciliation, Resolution,
};
use crate::solve::{bisect, BracketConfig};
use crate::state::State;
use tc_core::units::constants::{P_REF_PA, T_REF_K};
use tc_core::units::{j_per_kg_k, SpecHeat};
use tc_core::{nearly_equal, Real, Tolerances};
use tracing::{debug, warn};

/// Ideal gas `P·v = R·T`.
///
/// Energies are measured from the reference state (T0, P0):
/// `u = ∫cv dT`, `h = ∫cp dT`, `s = ∫cp/T dT − R·ln(P/P0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct IdealGas {
    name: String,
    r: Real,
    cp: HeatCapacity,
    cv: HeatCapacity,
    t0: Real,
    p0: Real,
    t_bracket: Option<[Real; 2]>,
    solver: BracketConfig,
}

impl IdealGas {
    /// Gas with specific gas constant `gas_constant` [J/(kg·K)].
    pub fn new(
        gas_constant: Real,
        cp: impl Into<HeatCapacity>,
        cv: impl Into<HeatCapacity>,
    ) -> EosResult<Self> {
        if !gas_constant.is_finite() || gas_constant <= 0.0 {
            return Err(EosError::InvalidArg {
                what: "gas constant must be positive and finite",
            });
        }
        let (cp, cv) = (cp.into(), cv.into());
        cp.validate(T_REF_K)?;
        cv.validate(T_REF_K)?;
        Ok(Self {
            name: "ideal gas".to_string(),
            r: gas_constant,
            cp,
            cv,
            t0: T_REF_K,
            p0: P_REF_PA,
            t_bracket: None,
            solver: BracketConfig::default(),
        })
    }

    /// Dry air with constant heats (R = 287, cp = 1005, cv = 718).
    pub fn air() -> Self {
        Self {
            name: "air".to_string(),
            r: 287.0,
            cp: HeatCapacity::Constant(1005.0),
            cv: HeatCapacity::Constant(718.0),
            t0: T_REF_K,
            p0: P_REF_PA,
            t_bracket: None,
            solver: BracketConfig::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Reference state the energies are measured from.
    pub fn with_reference(mut self, t0: Real, p0: Real) -> EosResult<Self> {
        if !(t0.is_finite() && t0 > 0.0 && p0.is_finite() && p0 > 0.0) {
            return Err(EosError::InvalidArg {
                what: "reference temperature and pressure must be positive and finite",
            });
        }
        self.cp.validate(t0)?;
        self.cv.validate(t0)?;
        self.t0 = t0;
        self.p0 = p0;
        Ok(self)
    }

    /// Temperature interval for the variable-heat inversions.
    pub fn with_temperature_bracket(mut self, bracket: [Real; 2]) -> EosResult<Self> {
        validate_bracket(bracket)?;
        self.t_bracket = Some(bracket);
        Ok(self)
    }

    pub fn with_solver_config(mut self, config: BracketConfig) -> EosResult<Self> {
        config.validate()?;
        self.solver = config;
        Ok(self)
    }

    pub fn cp(&self) -> &HeatCapacity {
        &self.cp
    }

    pub fn cv(&self) -> &HeatCapacity {
        &self.cv
    }

    /// Reference (T0 [K], P0 [Pa]).
    pub fn reference(&self) -> (Real, Real) {
        (self.t0, self.p0)
    }

    /// Reference specific volume R·T0/P0.
    pub fn v0(&self) -> Real {
        self.r * self.t0 / self.p0
    }

    pub fn has_constant_heats(&self) -> bool {
        self.cp.is_constant() && self.cv.is_constant()
    }

    /// (cp, cv) at temperature `t`.
    pub fn heat_capacities_at(&self, t: Real) -> (SpecHeat, SpecHeat) {
        (j_per_kg_k(self.cp.at(t)), j_per_kg_k(self.cv.at(t)))
    }

    pub fn internal_energy(&self, t: Real) -> Real {
        self.cv.integral(self.t0, t)
    }

    pub fn enthalpy(&self, t: Real) -> Real {
        self.cp.integral(self.t0, t)
    }

    pub fn entropy(&self, t: Real, p: Real) -> Real {
        self.cp.entropy_integral(self.t0, t) - self.r * (p / self.p0).ln()
    }

    fn solve_temperature<F>(&self, residual: F, what: &'static str) -> EosResult<Real>
    where
        F: FnMut(Real) -> EosResult<Real>,
    {
        bisect(residual, self.temperature_bracket(), &self.solver, what)
    }

    fn temperature_from_enthalpy(&self, h: Real) -> EosResult<Real> {
        match self.cp {
            HeatCapacity::Constant(cp) => Ok(self.t0 + h / cp),
            HeatCapacity::Polynomial(_) => {
                self.solve_temperature(|t| Ok(self.enthalpy(t) - h), "temperature from enthalpy")
            }
        }
    }

    fn temperature_from_sv(&self, s: Real, v: Real) -> EosResult<Real> {
        if v <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "specific volume must be positive",
            });
        }
        match self.cv {
            HeatCapacity::Constant(cv) => {
                Ok(self.t0 * ((s - self.r * (v / self.v0()).ln()) / cv).exp())
            }
            HeatCapacity::Polynomial(_) => self.solve_temperature(
                |t| Ok(self.entropy(t, self.r * t / v) - s),
                "temperature from entropy and volume",
            ),
        }
    }

    fn temperature_from_sp(&self, s: Real, p: Real) -> EosResult<Real> {
        if p <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "pressure must be positive",
            });
        }
        match self.cp {
            HeatCapacity::Constant(cp) => {
                Ok(self.t0 * ((s + self.r * (p / self.p0).ln()) / cp).exp())
            }
            HeatCapacity::Polynomial(_) => self.solve_temperature(
                |t| Ok(self.entropy(t, p) - s),
                "temperature from entropy and pressure",
            ),
        }
    }

    fn pressure_from_st(&self, s: Real, t: Real) -> EosResult<Real> {
        if t <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "temperature must be positive",
            });
        }
        Ok(self.p0 * ((self.cp.entropy_integral(self.t0, t) - s) / self.r).exp())
    }

    fn values_at(&self, p: Real, t: Real) -> EosResult<StateValues> {
        if p <= 0.0 || t <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "pressure and temperature must be positive",
            });
        }
        StateValues {
            p,
            t,
            v: self.r * t / p,
            u: self.internal_energy(t),
            h: self.enthalpy(t),
            s: self.entropy(t, p),
        }
        .check()
    }
}

pub(crate) fn validate_bracket(bracket: [Real; 2]) -> EosResult<()> {
    let [lo, hi] = bracket;
    if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && hi > lo) {
        return Err(EosError::InvalidArg {
            what: "temperature bracket must satisfy 0 < low < high",
        });
    }
    Ok(())
}

/// First boundary that has both v and P, for the isentropic power law.
fn isentropic_anchor(inlet: &State, outlet: &State) -> EosResult<(Real, Real)> {
    for st in [inlet, outlet] {
        if let (Some(v), Some(p)) = (st.specific_volume(), st.pressure()) {
            return Ok((v, p));
        }
    }
    let property = if inlet.specific_volume().is_none() && outlet.specific_volume().is_none() {
        Property::SpecificVolume
    } else {
        Property::Pressure
    };
    Err(EosError::Unresolved {
        process: ProcessKind::Isentropic,
        property,
    })
}

impl EquationOfState for IdealGas {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ModelKind {
        ModelKind::IdealGas
    }

    fn gas_constant(&self) -> Real {
        self.r
    }

    fn temperature_bracket(&self) -> [Real; 2] {
        self.t_bracket.unwrap_or([0.1 * self.t0, 10.0 * self.t0])
    }

    fn solver_config(&self) -> BracketConfig {
        self.solver
    }

    fn complete_state(&self, state: &mut State) -> EosResult<Completion> {
        check_kind(self, state)?;
        let Some(inputs) = InputPair::detect(state) else {
            return Ok(unsupported(self, state));
        };

        let r = self.r;
        let (p, t) = match inputs {
            Inputs::PT { p, t } => (p, t),
            Inputs::PV { p, v } => (p, p * v / r),
            Inputs::TV { t, v } => (r * t / v, t),
            Inputs::PH { p, h } => (p, self.temperature_from_enthalpy(h)?),
            Inputs::SV { s, v } => {
                let t = self.temperature_from_sv(s, v)?;
                (r * t / v, t)
            }
            Inputs::SP { s, p } => (p, self.temperature_from_sp(s, p)?),
            Inputs::ST { s, t } => (self.pressure_from_st(s, t)?, t),
        };

        let pair = inputs.pair();
        self.values_at(p, t)?.write(state, pair);
        debug!(model = %self.name, state = %state.label(), pair = pair.label(), "state completed");
        Ok(Completion::Solved(pair))
    }

    fn process_curve(
        &self,
        process: ProcessKind,
        inlet: &State,
        outlet: &State,
    ) -> EosResult<ProcessCurve<'_>> {
        let r = self.r;
        let (swept, dependent) = (process.swept(), process.dependent());
        let curve = match process {
            ProcessKind::Isochoric => {
                let v = shared_value(process, Property::SpecificVolume, inlet, outlet)?;
                ProcessCurve::new(swept, dependent, move |p| Ok(v * p / r))
            }
            ProcessKind::Isobaric => {
                let p = shared_value(process, Property::Pressure, inlet, outlet)?;
                ProcessCurve::new(swept, dependent, move |v| Ok(p * v / r))
            }
            // isenthalpic and constant-temperature heat exchange both follow an isotherm
            ProcessKind::Isothermal | ProcessKind::Isenthalpic | ProcessKind::HeatTransfer => {
                let t = shared_value(process, Property::Temperature, inlet, outlet)?;
                ProcessCurve::new(swept, dependent, move |v| Ok(r * t / v))
            }
            ProcessKind::Isentropic => match (&self.cp, &self.cv) {
                (HeatCapacity::Constant(cp), HeatCapacity::Constant(cv)) => {
                    let gamma = cp / cv;
                    let (v_b, p_b) = isentropic_anchor(inlet, outlet)?;
                    ProcessCurve::new(swept, dependent, move |v| Ok(p_b * (v_b / v).powf(gamma)))
                }
                _ => return default_curve(self, process, inlet, outlet),
            },
        };
        Ok(curve)
    }

    fn resolve_isenthalpic(
        &self,
        inlet: &mut State,
        outlet: &mut State,
    ) -> EosResult<Resolution<'_>> {
        let process = ProcessKind::Isenthalpic;
        prepare_boundaries(self, inlet, outlet)?;
        let h = reconcile(process, Property::Enthalpy, inlet, outlet);
        // h depends on T alone, so the edge is also isothermal
        let t = reconcile(process, Property::Temperature, inlet, outlet);
        ensure_complete(self, inlet)?;
        ensure_complete(self, outlet)?;
        Ok(Resolution {
            process,
            curve: self.process_curve(process, inlet, outlet)?,
            reconciled: vec![(Property::Enthalpy, h), (Property::Temperature, t)],
        })
    }

    fn resolve_heat_transfer(
        &self,
        inlet: &mut State,
        outlet: &mut State,
        heat: Real,
    ) -> EosResult<Resolution<'_>> {
        let process = ProcessKind::HeatTransfer;
        prepare_boundaries(self, inlet, outlet)?;
        let t_outcome = reconcile(process, Property::Temperature, inlet, outlet);
        let t = outlet.temperature().or(inlet.temperature());
        // a boundary fixed by its own values is checked against q/T, not overwritten
        for st in [&mut *inlet, &mut *outlet] {
            if st.entropy().is_none() && st.is_determined() {
                ensure_complete(self, st)?;
            }
        }

        let s_outcome = match (inlet.entropy(), outlet.entropy(), t) {
            (Some(s_in), Some(s_out), t) => {
                let expected = t.map(|t| heat / t);
                let tol = Tolerances {
                    abs: 1e-6,
                    rel: 1e-6,
                };
                match expected {
                    Some(ds) if nearly_equal(s_out - s_in, ds, tol) => {
                        debug!(
                            inlet = %inlet.label(), outlet = %outlet.label(), ds,
                            "entropy change matches q/T"
                        );
                        Reconciliation::Consistent
                    }
                    _ => {
                        warn!(
                            inlet = %inlet.label(), outlet = %outlet.label(),
                            ds = s_out - s_in, q_over_t = ?expected,
                            "entropy change does not match the heat exchanged"
                        );
                        Reconciliation::Mismatch {
                            inlet: s_in,
                            outlet: s_out,
                        }
                    }
                }
            }
            (Some(s_in), None, Some(t)) => {
                outlet.assign(Property::Entropy, s_in + heat / t);
                Reconciliation::CopiedForward
            }
            (None, Some(s_out), Some(t)) => {
                inlet.assign(Property::Entropy, s_out - heat / t);
                Reconciliation::CopiedBackward
            }
            _ => {
                warn!(
                    inlet = %inlet.label(), outlet = %outlet.label(),
                    "neither boundary can be completed: entropy or temperature unknown"
                );
                Reconciliation::Missing
            }
        };

        ensure_complete(self, inlet)?;
        ensure_complete(self, outlet)?;
        Ok(Resolution {
            process,
            curve: self.process_curve(process, inlet, outlet)?,
            reconciled: vec![(Property::Temperature, t_outcome), (Property::Entropy, s_outcome)],
        })
    }

    fn analytic_edge_energy(&self, inlet: &State, outlet: &State) -> EosResult<EdgeEnergy> {
        let tol = Tolerances::classification();
        let (p_in, p_out) = (inlet.require(Property::Pressure)?, outlet.require(Property::Pressure)?);
        let (t_in, t_out) = (
            inlet.require(Property::Temperature)?,
            outlet.require(Property::Temperature)?,
        );
        let (v_in, v_out) = (
            inlet.require(Property::SpecificVolume)?,
            outlet.require(Property::SpecificVolume)?,
        );
        let du = outlet.require(Property::InternalEnergy)? - inlet.require(Property::InternalEnergy)?;
        let (h_in, h_out) = (inlet.require(Property::Enthalpy)?, outlet.require(Property::Enthalpy)?);
        let (s_in, s_out) = (inlet.require(Property::Entropy)?, outlet.require(Property::Entropy)?);

        let energy = if nearly_equal(p_in, p_out, tol) {
            EdgeEnergy {
                work: p_in * (v_out - v_in),
                heat: h_out - h_in,
                class: EdgeClass::Isobaric,
            }
        } else if nearly_equal(t_in, t_out, tol) {
            let work = self.r * t_in * (v_out / v_in).ln();
            EdgeEnergy {
                work,
                heat: work,
                class: EdgeClass::Isothermal,
            }
        } else if nearly_equal(s_in, s_out, tol) {
            EdgeEnergy {
                work: -du,
                heat: 0.0,
                class: EdgeClass::Isentropic,
            }
        } else if nearly_equal(h_in, h_out, tol) {
            EdgeEnergy {
                work: 0.0,
                heat: du,
                class: EdgeClass::Isenthalpic,
            }
        } else {
            warn!(
                inlet = %inlet.label(), outlet = %outlet.label(),
                "edge matches no closed-form process, assuming W = 0 and Q = du"
            );
            EdgeEnergy {
                work: 0.0,
                heat: du,
                class: EdgeClass::Unclassified,
            }
        };
        Ok(energy)
    }
}

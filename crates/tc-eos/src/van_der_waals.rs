//! Van der Waals gas with constant specific heats.

use crate::error::{EosError, EosResult};
use crate::ideal_gas::validate_bracket;
use crate::input::{unsupported, Completion, InputPair, Inputs, StateValues};
use crate::model::{EquationOfState, ModelKind};
use crate::resolve::check_kind;
use crate::solve::{bisect, cubic_real_roots, BracketConfig};
use crate::state::State;
use tc_core::units::constants::{P_REF_PA, R_UNIVERSAL, T_REF_K};
use tc_core::units::{j_per_kg_k, SpecHeat};
use tc_core::Real;
use tracing::debug;

/// Liquid, vapor and mixture specific volumes [m³/kg] at one (T, P).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSplit {
    pub liquid: Real,
    pub vapor: Real,
    pub mixture: Real,
}

impl PhaseSplit {
    /// Three distinct real roots were found.
    pub fn is_two_phase(&self) -> bool {
        self.vapor > self.liquid
    }
}

/// `(P + a/v²)(v − b) = R·T`.
///
/// Constants are given per mole (a [Pa·m⁶/mol²], b [m³/mol]) and turned
/// into per-kilogram values with the molar mass. Energies:
/// `u = cv(T − T0) − a/v`, `h = u + P·v`,
/// `s = cv·ln(T/T0) + R·ln((v − b)/(v0 − b))` with `v0 = R·T0/P0`.
///
/// Quality only enters through the volume at a given (T, P): the pairs
/// (P, T), (P, h) and (s, P) use the mixture volume of [`phase_split`].
/// The pairs that fix v, and (s, T) which inverts `s(T, v)` in closed
/// form, take v as the state's volume and evaluate the single-phase
/// relations there. They keep x as given.
///
/// [`phase_split`]: VanDerWaals::phase_split
#[derive(Debug, Clone, PartialEq)]
pub struct VanDerWaals {
    name: String,
    a_molar: Real,
    b_molar: Real,
    molar_mass: Real,
    r_universal: Real,
    cp: Real,
    cv: Real,
    t0: Real,
    p0: Real,
    t_bracket: Option<[Real; 2]>,
    solver: BracketConfig,
}

impl VanDerWaals {
    /// `molar_mass` in kg/mol, `cp`/`cv` in J/(kg·K).
    pub fn new(a_molar: Real, b_molar: Real, molar_mass: Real, cp: Real, cv: Real) -> EosResult<Self> {
        for (value, what) in [
            (a_molar, "attraction constant a must be positive and finite"),
            (b_molar, "co-volume b must be positive and finite"),
            (molar_mass, "molar mass must be positive and finite"),
            (cp, "cp must be positive and finite"),
            (cv, "cv must be positive and finite"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EosError::InvalidArg { what });
            }
        }
        Ok(Self {
            name: "Van der Waals".to_string(),
            a_molar,
            b_molar,
            molar_mass,
            r_universal: R_UNIVERSAL,
            cp,
            cv,
            t0: T_REF_K,
            p0: P_REF_PA,
            t_bracket: None,
            solver: BracketConfig::default(),
        })
    }

    /// Water with textbook Van der Waals constants.
    pub fn water() -> Self {
        let molar_mass = 0.018_015;
        let r = R_UNIVERSAL / molar_mass;
        Self {
            name: "water".to_string(),
            a_molar: 0.5536,
            b_molar: 3.049e-5,
            molar_mass,
            r_universal: R_UNIVERSAL,
            cp: 1996.0,
            cv: 1996.0 - r,
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

    pub fn with_reference(mut self, t0: Real, p0: Real) -> EosResult<Self> {
        if !(t0.is_finite() && t0 > 0.0 && p0.is_finite() && p0 > 0.0) {
            return Err(EosError::InvalidArg {
                what: "reference temperature and pressure must be positive and finite",
            });
        }
        self.t0 = t0;
        self.p0 = p0;
        if self.v0() <= self.b() {
            return Err(EosError::NonPhysical {
                what: "reference volume must exceed the co-volume",
            });
        }
        Ok(self)
    }

    /// Override the universal gas constant [J/(mol·K)].
    pub fn with_universal_gas_constant(mut self, r_universal: Real) -> EosResult<Self> {
        if !r_universal.is_finite() || r_universal <= 0.0 {
            return Err(EosError::InvalidArg {
                what: "universal gas constant must be positive and finite",
            });
        }
        self.r_universal = r_universal;
        Ok(self)
    }

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

    /// Specific attraction constant a/M² [Pa·m⁶/kg²].
    pub fn a(&self) -> Real {
        self.a_molar / (self.molar_mass * self.molar_mass)
    }

    /// Specific co-volume b/M [m³/kg].
    pub fn b(&self) -> Real {
        self.b_molar / self.molar_mass
    }

    pub fn molar_mass(&self) -> Real {
        self.molar_mass
    }

    pub fn reference(&self) -> (Real, Real) {
        (self.t0, self.p0)
    }

    pub fn v0(&self) -> Real {
        self.gas_constant() * self.t0 / self.p0
    }

    pub fn heat_capacities(&self) -> (SpecHeat, SpecHeat) {
        (j_per_kg_k(self.cp), j_per_kg_k(self.cv))
    }

    pub fn pressure_at(&self, t: Real, v: Real) -> Real {
        self.gas_constant() * t / (v - self.b()) - self.a() / (v * v)
    }

    pub fn temperature_at(&self, p: Real, v: Real) -> Real {
        (p + self.a() / (v * v)) * (v - self.b()) / self.gas_constant()
    }

    pub fn internal_energy(&self, t: Real, v: Real) -> Real {
        self.cv * (t - self.t0) - self.a() / v
    }

    pub fn enthalpy(&self, t: Real, v: Real, p: Real) -> Real {
        self.internal_energy(t, v) + p * v
    }

    pub fn entropy(&self, t: Real, v: Real) -> Real {
        let b = self.b();
        self.cv * (t / self.t0).ln() + self.gas_constant() * ((v - b) / (self.v0() - b)).ln()
    }

    /// Specific volumes at (T, P) with vapor fraction `x`.
    ///
    /// Solves `P·v³ − (P·b + R·T)·v² + a·v − a·b = 0` in molar form. The
    /// smallest root is the liquid, the largest the vapor; with a single
    /// real root both coincide.
    pub fn phase_split(&self, t: Real, p: Real, x: Real) -> EosResult<PhaseSplit> {
        if !(t > 0.0 && p > 0.0) {
            return Err(EosError::NonPhysical {
                what: "pressure and temperature must be positive",
            });
        }
        let (a, b) = (self.a_molar, self.b_molar);
        let roots = cubic_real_roots(p, -(p * b + self.r_universal * t), a, -a * b)?;
        let (Some(&first), Some(&last)) = (roots.first(), roots.last()) else {
            return Err(EosError::RootFinding {
                what: "Van der Waals volume",
                reason: "cubic has no real root".to_string(),
            });
        };
        let liquid = first / self.molar_mass;
        let vapor = last / self.molar_mass;
        Ok(PhaseSplit {
            liquid,
            vapor,
            mixture: liquid + x * (vapor - liquid),
        })
    }

    fn volume(&self, p: Real, t: Real, x: Real) -> EosResult<Real> {
        Ok(self.phase_split(t, p, x)?.mixture)
    }

    fn check_volume(&self, v: Real) -> EosResult<Real> {
        if v <= self.b() {
            return Err(EosError::NonPhysical {
                what: "specific volume must exceed the co-volume",
            });
        }
        Ok(v)
    }

    fn solve_temperature<F>(&self, residual: F, what: &'static str) -> EosResult<Real>
    where
        F: FnMut(Real) -> EosResult<Real>,
    {
        bisect(residual, self.temperature_bracket(), &self.solver, what)
    }
}

impl EquationOfState for VanDerWaals {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ModelKind {
        ModelKind::VanDerWaals
    }

    fn gas_constant(&self) -> Real {
        self.r_universal / self.molar_mass
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
        let x = state.quality();
        let r = self.gas_constant();
        let b = self.b();

        let (p, t, v) = match inputs {
            Inputs::PT { p, t } => (p, t, self.volume(p, t, x)?),
            Inputs::PV { p, v } => {
                let v = self.check_volume(v)?;
                (p, self.temperature_at(p, v), v)
            }
            Inputs::TV { t, v } => {
                let v = self.check_volume(v)?;
                (self.pressure_at(t, v), t, v)
            }
            Inputs::PH { p, h } => {
                let t = self.solve_temperature(
                    |t| {
                        let v = self.volume(p, t, x)?;
                        Ok(self.enthalpy(t, v, p) - h)
                    },
                    "temperature from pressure and enthalpy",
                )?;
                (p, t, self.volume(p, t, x)?)
            }
            Inputs::SV { s, v } => {
                let v = self.check_volume(v)?;
                let t = self.t0 * ((s - r * ((v - b) / (self.v0() - b)).ln()) / self.cv).exp();
                (self.pressure_at(t, v), t, v)
            }
            Inputs::SP { s, p } => {
                let t = self.solve_temperature(
                    |t| Ok(self.entropy(t, self.volume(p, t, x)?) - s),
                    "temperature from entropy and pressure",
                )?;
                (p, t, self.volume(p, t, x)?)
            }
            Inputs::ST { s, t } => {
                if t <= 0.0 {
                    return Err(EosError::NonPhysical {
                        what: "temperature must be positive",
                    });
                }
                let v = b + (self.v0() - b) * ((s - self.cv * (t / self.t0).ln()) / r).exp();
                (self.pressure_at(t, v), t, v)
            }
        };

        let pair = inputs.pair();
        StateValues {
            p,
            t,
            v,
            u: self.internal_energy(t, v),
            h: self.enthalpy(t, v, p),
            s: self.entropy(t, v),
        }
        .check()?
        .write(state, pair);
        debug!(model = %self.name, state = %state.label(), pair = pair.label(), x, "state completed");
        Ok(Completion::Solved(pair))
    }
}

//! Property pairs that determine a state.

use crate::error::{EosError, EosResult};
use crate::model::EquationOfState;
use crate::property::Property;
use crate::state::State;
use tc_core::{ensure_finite, Real};
use tracing::warn;

/// The pairs of known properties a model can complete a state from,
/// in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPair {
    PT,
    PV,
    TV,
    PH,
    SV,
    SP,
    ST,
}

impl InputPair {
    pub const ORDER: [InputPair; 7] = [
        InputPair::PT,
        InputPair::PV,
        InputPair::TV,
        InputPair::PH,
        InputPair::SV,
        InputPair::SP,
        InputPair::ST,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::PT => "P-T",
            Self::PV => "P-v",
            Self::TV => "T-v",
            Self::PH => "P-h",
            Self::SV => "s-v",
            Self::SP => "s-P",
            Self::ST => "s-T",
        }
    }

    pub fn properties(self) -> [Property; 2] {
        use Property::*;
        match self {
            Self::PT => [Pressure, Temperature],
            Self::PV => [Pressure, SpecificVolume],
            Self::TV => [Temperature, SpecificVolume],
            Self::PH => [Pressure, Enthalpy],
            Self::SV => [Entropy, SpecificVolume],
            Self::SP => [Entropy, Pressure],
            Self::ST => [Entropy, Temperature],
        }
    }

    /// First pair, in table order, whose two properties are both known.
    pub fn detect(state: &State) -> Option<Inputs> {
        Self::ORDER.into_iter().find_map(|pair| {
            let [a, b] = pair.properties();
            let (a, b) = (state.get(a)?, state.get(b)?);
            Some(Inputs::from_pair(pair, a, b))
        })
    }
}

/// Known values of a detected [`InputPair`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inputs {
    PT { p: Real, t: Real },
    PV { p: Real, v: Real },
    TV { t: Real, v: Real },
    PH { p: Real, h: Real },
    SV { s: Real, v: Real },
    SP { s: Real, p: Real },
    ST { s: Real, t: Real },
}

impl Inputs {
    fn from_pair(pair: InputPair, a: Real, b: Real) -> Self {
        match pair {
            InputPair::PT => Inputs::PT { p: a, t: b },
            InputPair::PV => Inputs::PV { p: a, v: b },
            InputPair::TV => Inputs::TV { t: a, v: b },
            InputPair::PH => Inputs::PH { p: a, h: b },
            InputPair::SV => Inputs::SV { s: a, v: b },
            InputPair::SP => Inputs::SP { s: a, p: b },
            InputPair::ST => Inputs::ST { s: a, t: b },
        }
    }

    pub fn pair(&self) -> InputPair {
        match self {
            Inputs::PT { .. } => InputPair::PT,
            Inputs::PV { .. } => InputPair::PV,
            Inputs::TV { .. } => InputPair::TV,
            Inputs::PH { .. } => InputPair::PH,
            Inputs::SV { .. } => InputPair::SV,
            Inputs::SP { .. } => InputPair::SP,
            Inputs::ST { .. } => InputPair::ST,
        }
    }
}

/// Full property set produced by a model for one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct StateValues {
    pub p: Real,
    pub t: Real,
    pub v: Real,
    pub u: Real,
    pub h: Real,
    pub s: Real,
}

impl StateValues {
    /// T and v must be positive and everything finite. Pressure may be
    /// negative for a stretched Van der Waals liquid.
    pub fn check(self) -> EosResult<Self> {
        for (value, what) in [
            (self.p, "pressure"),
            (self.t, "temperature"),
            (self.v, "specific volume"),
            (self.u, "internal energy"),
            (self.h, "enthalpy"),
            (self.s, "entropy"),
        ] {
            ensure_finite(value, what)?;
        }
        if self.t <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "temperature must be positive",
            });
        }
        if self.v <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "specific volume must be positive",
            });
        }
        Ok(self)
    }

    /// Write every property except the two the state was completed from.
    pub fn write(self, state: &mut State, pair: InputPair) {
        let inputs = pair.properties();
        for (prop, value) in [
            (Property::Pressure, self.p),
            (Property::Temperature, self.t),
            (Property::SpecificVolume, self.v),
            (Property::InternalEnergy, self.u),
            (Property::Enthalpy, self.h),
            (Property::Entropy, self.s),
        ] {
            if !inputs.contains(&prop) {
                state.assign(prop, value);
            }
        }
    }
}

/// Outcome of a completion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// All properties were derived from this pair.
    Solved(InputPair),
    /// No supported pair was known; the state is left partially unset.
    Unsupported,
}

impl Completion {
    pub fn is_solved(&self) -> bool {
        matches!(self, Completion::Solved(_))
    }
}

/// Log and return the non-fatal outcome for an unsupported combination.
pub(crate) fn unsupported<M: EquationOfState + ?Sized>(model: &M, state: &State) -> Completion {
    let known: Vec<&str> = state.known().into_iter().map(Property::symbol).collect();
    warn!(
        model = model.name(),
        state = %state.label(),
        known = ?known,
        "unsupported or insufficient property combination, state left incomplete"
    );
    Completion::Unsupported
}

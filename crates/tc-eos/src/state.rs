//! Thermodynamic state record.

use crate::error::{EosError, EosResult};
use crate::input::Completion;
use crate::model::{EquationOfState, ModelKind};
use crate::property::Property;
use std::fmt;
use tc_core::units::{Pressure, SpecEnergy, SpecEntropy, SpecVolume, Temperature, k, pa};
use tc_core::{ensure_finite, Real};

/// Position of a state within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Principal state with its 1-based ordinal.
    Principal(usize),
    /// Sample state inside a process edge.
    Interior,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Principal(n) => write!(f, "{n}"),
            Label::Interior => f.write_str("interior"),
        }
    }
}

/// Up to seven properties of a working fluid at one point of a cycle.
///
/// Unknown properties are `None`. Quality always has a value and defaults
/// to 1 (saturated or superheated vapor). A state remembers the kind of the
/// model it was created for and refuses to be completed by any other kind.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    label: Label,
    kind: ModelKind,
    p: Option<Real>,
    t: Option<Real>,
    v: Option<SpecVolume>,
    u: Option<SpecEnergy>,
    h: Option<SpecEnergy>,
    s: Option<SpecEntropy>,
    x: Real,
}

impl State {
    /// Empty state bound to `model`'s kind.
    pub fn new<M: EquationOfState + ?Sized>(label: Label, model: &M) -> Self {
        Self::for_kind(label, model.kind())
    }

    pub fn for_kind(label: Label, kind: ModelKind) -> Self {
        Self {
            label,
            kind,
            p: None,
            t: None,
            v: None,
            u: None,
            h: None,
            s: None,
            x: 1.0,
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn model_kind(&self) -> ModelKind {
        self.kind
    }

    /// Current value of a property. Quality is always `Some`.
    pub fn get(&self, prop: Property) -> Option<Real> {
        match prop {
            Property::Pressure => self.p,
            Property::Temperature => self.t,
            Property::SpecificVolume => self.v,
            Property::InternalEnergy => self.u,
            Property::Enthalpy => self.h,
            Property::Entropy => self.s,
            Property::Quality => Some(self.x),
        }
    }

    /// Assign a single property.
    ///
    /// Values must be finite. Quality must lie in [0, 1] and, for models
    /// without a liquid phase, equal exactly 1.
    pub fn set(&mut self, prop: Property, value: Real) -> EosResult<()> {
        ensure_finite(value, "state property")?;
        if prop == Property::Quality {
            if !(0.0..=1.0).contains(&value) {
                return Err(EosError::InconsistentProperty {
                    property: Property::Quality,
                    reason: "quality must lie between 0 and 1",
                });
            }
            if self.kind.single_phase() && value != 1.0 {
                return Err(EosError::InconsistentProperty {
                    property: Property::Quality,
                    reason: "an ideal gas state must have quality 1",
                });
            }
        }
        self.assign(prop, value);
        Ok(())
    }

    /// Assign several properties in order; stops at the first failure.
    pub fn update(&mut self, props: &[(Property, Real)]) -> EosResult<()> {
        for &(prop, value) in props {
            self.set(prop, value)?;
        }
        Ok(())
    }

    /// Assign properties by symbol (`"P"`, `"T"`, `"v"`, `"u"`, `"h"`, `"s"`, `"x"`).
    pub fn update_named(&mut self, props: &[(&str, Real)]) -> EosResult<()> {
        for &(name, value) in props {
            let prop: Property = name.parse()?;
            self.set(prop, value)?;
        }
        Ok(())
    }

    /// Unchecked write used by the models while completing a state.
    pub(crate) fn assign(&mut self, prop: Property, value: Real) {
        match prop {
            Property::Pressure => self.p = Some(value),
            Property::Temperature => self.t = Some(value),
            Property::SpecificVolume => self.v = Some(value),
            Property::InternalEnergy => self.u = Some(value),
            Property::Enthalpy => self.h = Some(value),
            Property::Entropy => self.s = Some(value),
            Property::Quality => self.x = value,
        }
    }

    /// Complete the state in place using `model`.
    ///
    /// Fails with [`EosError::ModelMismatch`] if the state was created for
    /// a different kind of model.
    pub fn complete<M: EquationOfState + ?Sized>(&mut self, model: &M) -> EosResult<Completion> {
        model.complete_state(self)
    }

    pub fn pressure(&self) -> Option<Real> {
        self.p
    }

    pub fn temperature(&self) -> Option<Real> {
        self.t
    }

    pub fn specific_volume(&self) -> Option<SpecVolume> {
        self.v
    }

    pub fn internal_energy(&self) -> Option<SpecEnergy> {
        self.u
    }

    pub fn enthalpy(&self) -> Option<SpecEnergy> {
        self.h
    }

    pub fn entropy(&self) -> Option<SpecEntropy> {
        self.s
    }

    pub fn quality(&self) -> Real {
        self.x
    }

    /// Pressure as a `uom` quantity.
    pub fn pressure_q(&self) -> Option<Pressure> {
        self.p.map(pa)
    }

    /// Temperature as a `uom` quantity.
    pub fn temperature_q(&self) -> Option<Temperature> {
        self.t.map(k)
    }

    /// Thermodynamic properties (quality excluded) that currently have a value.
    pub fn known(&self) -> Vec<Property> {
        Property::THERMO
            .into_iter()
            .filter(|&p| self.get(p).is_some())
            .collect()
    }

    pub fn known_count(&self) -> usize {
        Property::THERMO
            .into_iter()
            .filter(|&p| self.get(p).is_some())
            .count()
    }

    /// At least two thermodynamic properties are known.
    pub fn is_determined(&self) -> bool {
        self.known_count() >= 2
    }

    pub fn is_complete(&self) -> bool {
        self.known_count() == Property::THERMO.len()
    }

    /// Value of `prop` or [`EosError::MissingProperty`].
    pub fn require(&self, prop: Property) -> EosResult<Real> {
        self.get(prop).ok_or(EosError::MissingProperty {
            label: self.label,
            property: prop,
        })
    }
}

impl fmt::Display for State {
    /// One summary line: 2-decimal values with units, `N/A` when unset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State {}:", self.label)?;
        for (i, prop) in Property::THERMO.into_iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            match self.get(prop) {
                Some(value) => write!(f, "{sep}{prop}={value:.2} {}", prop.unit())?,
                None => write!(f, "{sep}{prop}=N/A")?,
            }
        }
        if !self.kind.single_phase() {
            write!(f, ", x={:.2}", self.x)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::units::to_pa;

    fn gas_state() -> State {
        State::for_kind(Label::Principal(1), ModelKind::IdealGas)
    }

    #[test]
    fn new_state_is_empty() {
        let st = gas_state();
        assert_eq!(st.known_count(), 0);
        assert!(!st.is_determined());
        assert_eq!(st.quality(), 1.0);
        assert_eq!(st.get(Property::Quality), Some(1.0));
    }

    #[test]
    fn update_named_assigns_values() {
        let mut st = gas_state();
        st.update_named(&[("P", 100_000.0), ("T", 300.0)]).unwrap();
        assert_eq!(st.pressure(), Some(100_000.0));
        assert_eq!(st.temperature(), Some(300.0));
        assert!(st.is_determined());
        assert!(!st.is_complete());
    }

    #[test]
    fn update_named_rejects_unknown_property() {
        let mut st = gas_state();
        let err = st.update_named(&[("rho", 1.2)]).unwrap_err();
        assert!(matches!(err, EosError::InvalidProperty { .. }));
    }

    #[test]
    fn ideal_gas_quality_must_be_one() {
        let mut st = gas_state();
        assert!(st.set(Property::Quality, 1.0).is_ok());
        let err = st.set(Property::Quality, 0.5).unwrap_err();
        assert!(matches!(
            err,
            EosError::InconsistentProperty {
                property: Property::Quality,
                ..
            }
        ));
    }

    #[test]
    fn two_phase_quality_accepted_in_range() {
        let mut st = State::for_kind(Label::Interior, ModelKind::VanDerWaals);
        st.set(Property::Quality, 0.3).unwrap();
        assert_eq!(st.quality(), 0.3);
        assert!(st.set(Property::Quality, 1.5).is_err());
    }

    #[test]
    fn non_finite_values_rejected() {
        let mut st = gas_state();
        assert!(matches!(
            st.set(Property::Pressure, f64::NAN),
            Err(EosError::Core(_))
        ));
    }

    #[test]
    fn typed_accessors() {
        let mut st = gas_state();
        st.set(Property::Pressure, 200_000.0).unwrap();
        let p = st.pressure_q().unwrap();
        assert_eq!(to_pa(p), 200_000.0);
        assert!(st.temperature_q().is_none());
    }

    #[test]
    fn require_reports_missing_property() {
        let st = gas_state();
        let err = st.require(Property::Enthalpy).unwrap_err();
        assert_eq!(
            err,
            EosError::MissingProperty {
                label: Label::Principal(1),
                property: Property::Enthalpy
            }
        );
    }

    #[test]
    fn summary_line_marks_unset_values() {
        let mut st = gas_state();
        st.update(&[(Property::Pressure, 100_000.0), (Property::Temperature, 300.0)])
            .unwrap();
        let line = st.to_string();
        assert!(line.starts_with("State 1:"));
        assert!(line.contains("P=100000.00 Pa"));
        assert!(line.contains("T=300.00 K"));
        assert!(line.contains("v=N/A"));
        assert!(line.contains("s=N/A"));
    }
}

//! Process curves: swept variable → dependent variable along one edge.

use crate::error::{EosError, EosResult};
use crate::model::EquationOfState;
use crate::process::ProcessKind;
use crate::property::Property;
use crate::solve::bisect;
use crate::state::{Label, State};
use std::fmt;
use tc_core::Real;

type CurveFn<'a> = Box<dyn Fn(Real) -> EosResult<Real> + 'a>;

/// Relationship between two free variables along a resolved process.
pub struct ProcessCurve<'a> {
    swept: Property,
    dependent: Property,
    f: CurveFn<'a>,
}

impl<'a> ProcessCurve<'a> {
    pub fn new(
        swept: Property,
        dependent: Property,
        f: impl Fn(Real) -> EosResult<Real> + 'a,
    ) -> Self {
        Self {
            swept,
            dependent,
            f: Box::new(f),
        }
    }

    pub fn swept(&self) -> Property {
        self.swept
    }

    pub fn dependent(&self) -> Property {
        self.dependent
    }

    pub fn eval(&self, x: Real) -> EosResult<Real> {
        let y = (self.f)(x)?;
        if y.is_finite() {
            Ok(y)
        } else {
            Err(EosError::NonPhysical {
                what: "process curve produced a non-finite value",
            })
        }
    }

    pub fn eval_many(&self, xs: &[Real]) -> EosResult<Vec<Real>> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

impl fmt::Debug for ProcessCurve<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessCurve")
            .field("swept", &self.swept)
            .field("dependent", &self.dependent)
            .finish_non_exhaustive()
    }
}

/// Value of `prop` on the inlet, else the outlet.
pub fn shared_value(
    process: ProcessKind,
    prop: Property,
    inlet: &State,
    outlet: &State,
) -> EosResult<Real> {
    inlet
        .get(prop)
        .or_else(|| outlet.get(prop))
        .ok_or(EosError::Unresolved {
            process,
            property: prop,
        })
}

/// Complete a throwaway state at `quality` from two known values and read `want`.
pub fn evaluate_at<M: EquationOfState + ?Sized>(
    model: &M,
    quality: Real,
    known: [(Property, Real); 2],
    want: Property,
) -> EosResult<Real> {
    let mut st = State::for_kind(Label::Interior, model.kind());
    st.assign(Property::Quality, quality);
    for (prop, value) in known {
        st.assign(prop, value);
    }
    model.complete_state(&mut st)?;
    st.require(want)
}

/// Curve built from state completion alone, for models without closed forms.
///
/// Every sample completes a scratch state from the swept value and the
/// invariant, at the inlet's quality. On an isenthalp, where (h, v) is not
/// a completion pair, the temperature is bracket-solved first.
pub fn default_curve<'a, M: EquationOfState + ?Sized>(
    model: &'a M,
    process: ProcessKind,
    inlet: &State,
    outlet: &State,
) -> EosResult<ProcessCurve<'a>> {
    let invariant = process.invariant();
    let held = shared_value(process, invariant, inlet, outlet)?;
    let (swept, dependent) = (process.swept(), process.dependent());
    let x = inlet.quality();

    let curve = match process {
        ProcessKind::Isenthalpic => ProcessCurve::new(swept, dependent, move |v| {
            let config = model.solver_config();
            let enthalpy = |t: Real| {
                evaluate_at(model, x, [(Property::Temperature, t), (swept, v)], Property::Enthalpy)
            };
            let t = bisect(
                |t| Ok(enthalpy(t)? - held),
                model.temperature_bracket(),
                &config,
                "temperature on isenthalp",
            )?;
            evaluate_at(model, x, [(Property::Temperature, t), (swept, v)], dependent)
        }),
        _ => ProcessCurve::new(swept, dependent, move |value| {
            evaluate_at(model, x, [(swept, value), (invariant, held)], dependent)
        }),
    };
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelKind;
    use crate::van_der_waals::VanDerWaals;

    #[test]
    fn curve_evaluates_closure() {
        let curve = ProcessCurve::new(Property::SpecificVolume, Property::Pressure, |v| Ok(2.0 / v));
        assert_eq!(curve.eval(4.0).unwrap(), 0.5);
        assert_eq!(curve.eval_many(&[1.0, 2.0]).unwrap(), vec![2.0, 1.0]);
        assert_eq!(curve.swept(), Property::SpecificVolume);
        assert_eq!(curve.dependent(), Property::Pressure);
    }

    #[test]
    fn non_finite_output_is_rejected() {
        let curve = ProcessCurve::new(Property::SpecificVolume, Property::Pressure, |v| Ok(1.0 / v));
        assert!(matches!(curve.eval(0.0), Err(EosError::NonPhysical { .. })));
    }

    #[test]
    fn shared_value_prefers_inlet() {
        let mut a = State::for_kind(Label::Principal(1), ModelKind::IdealGas);
        let mut b = State::for_kind(Label::Principal(2), ModelKind::IdealGas);
        b.set(Property::Temperature, 400.0).unwrap();
        let t = shared_value(ProcessKind::Isothermal, Property::Temperature, &a, &b).unwrap();
        assert_eq!(t, 400.0);
        a.set(Property::Temperature, 300.0).unwrap();
        let t = shared_value(ProcessKind::Isothermal, Property::Temperature, &a, &b).unwrap();
        assert_eq!(t, 300.0);
    }

    #[test]
    fn scratch_states_use_the_given_quality() {
        let water = VanDerWaals::water();
        let known = [(Property::Pressure, 2e6), (Property::Temperature, 500.0)];
        let v = evaluate_at(&water, 0.5, known, Property::SpecificVolume).unwrap();
        let split = water.phase_split(500.0, 2e6, 0.5).unwrap();
        assert_eq!(v, split.mixture);
        let v = evaluate_at(&water, 1.0, known, Property::SpecificVolume).unwrap();
        assert_eq!(v, water.phase_split(500.0, 2e6, 1.0).unwrap().mixture);
        assert!(v > split.mixture);
    }

    #[test]
    fn shared_value_unresolved() {
        let a = State::for_kind(Label::Principal(1), ModelKind::IdealGas);
        let b = State::for_kind(Label::Principal(2), ModelKind::IdealGas);
        let err = shared_value(ProcessKind::Isobaric, Property::Pressure, &a, &b).unwrap_err();
        assert_eq!(
            err,
            EosError::Unresolved {
                process: ProcessKind::Isobaric,
                property: Property::Pressure
            }
        );
    }
}

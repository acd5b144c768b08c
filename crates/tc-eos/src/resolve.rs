//! Boundary preparation and invariant reconciliation shared by all models.

use crate::curve::ProcessCurve;
use crate::error::{EosError, EosResult};
use crate::model::EquationOfState;
use crate::process::ProcessKind;
use crate::property::Property;
use crate::state::State;
use tc_core::{nearly_equal, Real, Tolerances};
use tracing::{debug, warn};

/// Outcome of reconciling one property across the two boundary states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reconciliation {
    /// Both known and equal.
    Consistent,
    /// Both known and different; values are kept as given.
    Mismatch { inlet: Real, outlet: Real },
    /// Inlet value copied to the outlet.
    CopiedForward,
    /// Outlet value copied to the inlet.
    CopiedBackward,
    /// Unknown on both sides.
    Missing,
}

impl Reconciliation {
    /// True for the outcomes that are logged as warnings.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Reconciliation::Mismatch { .. } | Reconciliation::Missing)
    }
}

/// A resolved process: its curve plus what reconciliation did.
#[derive(Debug)]
pub struct Resolution<'a> {
    pub process: ProcessKind,
    pub curve: ProcessCurve<'a>,
    pub reconciled: Vec<(Property, Reconciliation)>,
}

impl Resolution<'_> {
    pub fn outcome(&self, prop: Property) -> Option<Reconciliation> {
        self.reconciled
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, r)| *r)
    }

    pub fn has_advisory(&self) -> bool {
        self.reconciled.iter().any(|(_, r)| r.is_advisory())
    }
}

pub(crate) fn check_kind<M: EquationOfState + ?Sized>(model: &M, state: &State) -> EosResult<()> {
    if state.model_kind() != model.kind() {
        return Err(EosError::ModelMismatch {
            state: state.model_kind(),
            model: model.kind(),
        });
    }
    Ok(())
}

/// Complete `state` unless every property is already known.
pub fn ensure_complete<M: EquationOfState + ?Sized>(model: &M, state: &mut State) -> EosResult<()> {
    if !state.is_complete() {
        model.complete_state(state)?;
    }
    Ok(())
}

/// Make sure one boundary is fully known before reconciling.
///
/// The inlet is used when it has at least two properties, otherwise the
/// outlet. Neither being determined is not an error here; the missing
/// invariant is reported by [`reconcile`].
pub fn prepare_boundaries<M: EquationOfState + ?Sized>(
    model: &M,
    inlet: &mut State,
    outlet: &mut State,
) -> EosResult<()> {
    check_kind(model, inlet)?;
    check_kind(model, outlet)?;
    if inlet.is_determined() {
        ensure_complete(model, inlet)
    } else if outlet.is_determined() {
        ensure_complete(model, outlet)
    } else {
        Ok(())
    }
}

/// Three-way reconciliation of `prop` between the two boundaries.
pub fn reconcile(
    process: ProcessKind,
    prop: Property,
    inlet: &mut State,
    outlet: &mut State,
) -> Reconciliation {
    let (a, b) = (inlet.label(), outlet.label());
    match (inlet.get(prop), outlet.get(prop)) {
        (Some(x), Some(y)) if nearly_equal(x, y, Tolerances::default()) => {
            debug!(%process, property = %prop, inlet = %a, outlet = %b, "boundary values agree");
            Reconciliation::Consistent
        }
        (Some(x), Some(y)) => {
            warn!(
                %process, property = %prop, inlet = %a, outlet = %b,
                inlet_value = x, outlet_value = y,
                "boundary values differ, check the state definitions"
            );
            Reconciliation::Mismatch {
                inlet: x,
                outlet: y,
            }
        }
        (Some(x), None) => {
            outlet.assign(prop, x);
            Reconciliation::CopiedForward
        }
        (None, Some(y)) => {
            inlet.assign(prop, y);
            Reconciliation::CopiedBackward
        }
        (None, None) => {
            warn!(
                %process, property = %prop, inlet = %a, outlet = %b,
                "property unknown on both boundaries, at least one is required"
            );
            Reconciliation::Missing
        }
    }
}

/// Resolution shared by every constant-property process.
///
/// Prepares the boundaries, reconciles the process invariant, completes
/// both states and asks the model for the curve.
pub fn resolve_constant_property<'a, M: EquationOfState + ?Sized>(
    model: &'a M,
    process: ProcessKind,
    inlet: &mut State,
    outlet: &mut State,
) -> EosResult<Resolution<'a>> {
    prepare_boundaries(model, inlet, outlet)?;
    let invariant = process.invariant();
    let outcome = reconcile(process, invariant, inlet, outlet);
    ensure_complete(model, inlet)?;
    ensure_complete(model, outlet)?;
    let curve = model.process_curve(process, inlet, outlet)?;
    Ok(Resolution {
        process,
        curve,
        reconciled: vec![(invariant, outcome)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelKind;
    use crate::state::Label;

    fn pair() -> (State, State) {
        (
            State::for_kind(Label::Principal(1), ModelKind::IdealGas),
            State::for_kind(Label::Principal(2), ModelKind::IdealGas),
        )
    }

    #[test]
    fn copies_forward_and_backward() {
        let (mut a, mut b) = pair();
        a.set(Property::SpecificVolume, 0.5).unwrap();
        let r = reconcile(ProcessKind::Isochoric, Property::SpecificVolume, &mut a, &mut b);
        assert_eq!(r, Reconciliation::CopiedForward);
        assert_eq!(b.specific_volume(), Some(0.5));

        let (mut a, mut b) = pair();
        b.set(Property::Pressure, 2e5).unwrap();
        let r = reconcile(ProcessKind::Isobaric, Property::Pressure, &mut a, &mut b);
        assert_eq!(r, Reconciliation::CopiedBackward);
        assert_eq!(a.pressure(), Some(2e5));
    }

    #[test]
    fn consistent_and_mismatch() {
        let (mut a, mut b) = pair();
        a.set(Property::Temperature, 300.0).unwrap();
        b.set(Property::Temperature, 300.0).unwrap();
        let r = reconcile(ProcessKind::Isothermal, Property::Temperature, &mut a, &mut b);
        assert_eq!(r, Reconciliation::Consistent);
        assert!(!r.is_advisory());

        b.set(Property::Temperature, 310.0).unwrap();
        let r = reconcile(ProcessKind::Isothermal, Property::Temperature, &mut a, &mut b);
        assert_eq!(
            r,
            Reconciliation::Mismatch {
                inlet: 300.0,
                outlet: 310.0
            }
        );
        // values kept as given
        assert_eq!(b.temperature(), Some(310.0));
    }

    #[test]
    fn missing_leaves_both_unset() {
        let (mut a, mut b) = pair();
        let r = reconcile(ProcessKind::Isentropic, Property::Entropy, &mut a, &mut b);
        assert_eq!(r, Reconciliation::Missing);
        assert!(r.is_advisory());
        assert!(a.entropy().is_none() && b.entropy().is_none());
    }
}

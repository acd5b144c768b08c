//! Cycle efficiency from per-edge work and heat.

use crate::cycle::Cycle;
use crate::error::{CycleError, CycleResult};
use tc_core::Real;
use tc_eos::{EdgeClass, EdgeEnergy, Property, State};
use tracing::info;

/// Thermal efficiency of a closed cycle with its per-edge breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Efficiency {
    /// Net work over heat input, or 0 when no heat enters the fluid.
    pub value: Real,
    /// Σ work [J/kg].
    pub net_work: Real,
    /// Σ positive heats [J/kg].
    pub heat_input: Real,
    /// One entry per edge, in edge order.
    pub edges: Vec<EdgeEnergy>,
}

impl Efficiency {
    pub fn from_edges(edges: Vec<EdgeEnergy>) -> Self {
        let net_work: Real = edges.iter().map(|e| e.work).sum();
        let heat_input: Real = edges.iter().map(|e| e.heat).filter(|&q| q > 0.0).sum();
        let value = if heat_input > 0.0 {
            net_work / heat_input
        } else {
            0.0
        };
        Self {
            value,
            net_work,
            heat_input,
            edges,
        }
    }

    /// Edges whose analytic class fell back to W = 0, Q = Δu.
    pub fn unclassified(&self) -> Vec<usize> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.class == EdgeClass::Unclassified)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Carnot bound 1 − T_min/T_max.
pub fn carnot(temperatures: &[Real]) -> CycleResult<Real> {
    if temperatures.is_empty() {
        return Err(CycleError::InvalidArg {
            what: "no temperatures for Carnot efficiency",
        });
    }
    if temperatures.iter().any(|&t| !(t > 0.0) || !t.is_finite()) {
        return Err(CycleError::InvalidArg {
            what: "Carnot efficiency needs positive finite temperatures",
        });
    }
    let t_min = temperatures.iter().copied().fold(Real::INFINITY, Real::min);
    let t_max = temperatures.iter().copied().fold(0.0, Real::max);
    Ok(1.0 - t_min / t_max)
}

/// Trapezoidal ∫P dv along a path, with Q = Δu + W.
fn integrate_path(path: &[&State]) -> CycleResult<EdgeEnergy> {
    let mut work = 0.0;
    for w in path.windows(2) {
        let (a, b) = (w[0], w[1]);
        let (p_a, p_b) = (a.require(Property::Pressure)?, b.require(Property::Pressure)?);
        let (v_a, v_b) = (
            a.require(Property::SpecificVolume)?,
            b.require(Property::SpecificVolume)?,
        );
        work += 0.5 * (p_a + p_b) * (v_b - v_a);
    }
    let (first, last) = match path {
        [first, .., last] => (*first, *last),
        _ => {
            return Err(CycleError::InvalidArg {
                what: "edge path needs two boundary states",
            });
        }
    };
    let du = last.require(Property::InternalEnergy)? - first.require(Property::InternalEnergy)?;
    Ok(EdgeEnergy {
        work,
        heat: du + work,
        class: EdgeClass::Numeric,
    })
}

impl Cycle {
    fn require_closed(&self) -> CycleResult<()> {
        if self.is_closed() {
            Ok(())
        } else {
            Err(CycleError::InvalidArg {
                what: "every edge must be solved before computing efficiency",
            })
        }
    }

    /// Efficiency from the sampled states of every edge.
    pub fn numeric_efficiency(&self) -> CycleResult<Efficiency> {
        self.require_closed()?;
        let edges = (0..self.capacity())
            .map(|i| integrate_path(&self.edge_path(i)?))
            .collect::<CycleResult<Vec<_>>>()?;
        let eff = Efficiency::from_edges(edges);
        info!(
            efficiency = eff.value,
            net_work = eff.net_work,
            heat_input = eff.heat_input,
            "numeric efficiency"
        );
        Ok(eff)
    }

    /// Efficiency from the model's closed-form edge energies.
    pub fn analytic_efficiency(&self) -> CycleResult<Efficiency> {
        self.require_closed()?;
        let edges = (0..self.capacity())
            .map(|i| {
                let (inlet, outlet) = self.boundaries(i)?;
                Ok(self.model().analytic_edge_energy(inlet, outlet)?)
            })
            .collect::<CycleResult<Vec<_>>>()?;
        let eff = Efficiency::from_edges(edges);
        info!(
            efficiency = eff.value,
            net_work = eff.net_work,
            heat_input = eff.heat_input,
            unclassified = ?eff.unclassified(),
            "analytic efficiency"
        );
        Ok(eff)
    }

    /// Carnot bound over the principal-state temperatures.
    pub fn carnot_efficiency(&self) -> CycleResult<Real> {
        let temps = self
            .states()
            .iter()
            .map(|s| Ok(s.require(Property::Temperature)?))
            .collect::<CycleResult<Vec<_>>>()?;
        let eta = carnot(&temps)?;
        info!(efficiency = eta, "Carnot efficiency");
        Ok(eta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tc_eos::IdealGas;

    fn energy(work: Real, heat: Real) -> EdgeEnergy {
        EdgeEnergy {
            work,
            heat,
            class: EdgeClass::Numeric,
        }
    }

    #[test]
    fn no_heat_input_gives_zero() {
        let eff = Efficiency::from_edges(vec![energy(10.0, -5.0), energy(-10.0, 0.0)]);
        assert_eq!(eff.value, 0.0);
        assert_eq!(eff.heat_input, 0.0);
    }

    #[test]
    fn only_positive_heats_count_as_input() {
        let eff = Efficiency::from_edges(vec![
            energy(0.0, 1000.0),
            energy(600.0, 0.0),
            energy(0.0, -600.0),
            energy(-200.0, 0.0),
        ]);
        assert_eq!(eff.heat_input, 1000.0);
        assert_eq!(eff.net_work, 400.0);
        assert!((eff.value - 0.4).abs() < 1e-12);
    }

    #[test]
    fn carnot_bound() {
        assert!((carnot(&[300.0, 600.0, 450.0]).unwrap() - 0.5).abs() < 1e-12);
        assert!(carnot(&[]).is_err());
        assert!(carnot(&[300.0, -1.0]).is_err());
    }

    #[test]
    fn open_cycle_rejected() {
        let mut cycle = Cycle::new(Arc::new(IdealGas::air()), 2, 3).unwrap();
        cycle.add_state_named(&[("P", 1e5), ("T", 300.0)]).unwrap();
        cycle.add_state_named(&[("T", 600.0)]).unwrap();
        cycle.isobaric().unwrap();
        assert!(cycle.numeric_efficiency().is_err());
        assert!(cycle.analytic_efficiency().is_err());
        // Carnot only needs principal temperatures
        assert!((cycle.carnot_efficiency().unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn unclassified_edges_are_listed() {
        let mut edges = vec![energy(1.0, 1.0); 3];
        edges[1].class = EdgeClass::Unclassified;
        assert_eq!(Efficiency::from_edges(edges).unclassified(), vec![1]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn edges_strategy() -> impl Strategy<Value = Vec<(Real, Real)>> {
        prop::collection::vec((-1e5..1e5f64, -1e5..1e5f64), 2..8)
    }

    proptest! {
        #[test]
        fn efficiency_ignores_edge_order(pairs in edges_strategy()) {
            let edges: Vec<EdgeEnergy> = pairs
                .iter()
                .map(|&(work, heat)| EdgeEnergy { work, heat, class: EdgeClass::Numeric })
                .collect();
            let mut reversed = edges.clone();
            reversed.reverse();
            let a = Efficiency::from_edges(edges);
            let b = Efficiency::from_edges(reversed);
            prop_assert!((a.value - b.value).abs() <= 1e-9 * (1.0 + a.value.abs()));
        }

        #[test]
        fn closed_cycle_efficiency_at_most_one(heats in prop::collection::vec(-1e5..1e5f64, 2..8)) {
            // closed cycle: Σ Δu = 0, so Σ W = Σ Q
            let edges: Vec<EdgeEnergy> = heats
                .iter()
                .map(|&q| EdgeEnergy { work: q, heat: q, class: EdgeClass::Numeric })
                .collect();
            let eff = Efficiency::from_edges(edges);
            prop_assert!(eff.value <= 1.0 + 1e-9);
        }

        #[test]
        fn carnot_ignores_state_order(mut temps in prop::collection::vec(10.0..5000.0f64, 2..10)) {
            let a = carnot(&temps).unwrap();
            temps.reverse();
            temps.rotate_left(1);
            let b = carnot(&temps).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}

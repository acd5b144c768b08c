//! Flat per-state records for export.

use serde::{Deserialize, Serialize};
use tc_cycle::Cycle;
use tc_eos::{Property, State};

/// Which states a report includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportScope {
    #[default]
    Principal,
    /// Principal states each followed by the interior states of the edge
    /// leaving it.
    All,
}

/// One exported state. Unset properties are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    /// `"n"` for principal state n, `"n.j"` for the j-th interior state of
    /// the edge leaving state n.
    pub label: String,
    pub p_pa: Option<f64>,
    pub t_k: Option<f64>,
    pub v_m3_per_kg: Option<f64>,
    pub u_j_per_kg: Option<f64>,
    pub h_j_per_kg: Option<f64>,
    pub s_j_per_kg_k: Option<f64>,
}

impl StateRecord {
    pub const HEADER: [&'static str; 7] = [
        "label",
        "P [Pa]",
        "T [K]",
        "v [m3/kg]",
        "u [J/kg]",
        "h [J/kg]",
        "s [J/(kg K)]",
    ];

    pub fn from_state(label: impl Into<String>, state: &State) -> Self {
        Self {
            label: label.into(),
            p_pa: state.get(Property::Pressure),
            t_k: state.get(Property::Temperature),
            v_m3_per_kg: state.get(Property::SpecificVolume),
            u_j_per_kg: state.get(Property::InternalEnergy),
            h_j_per_kg: state.get(Property::Enthalpy),
            s_j_per_kg_k: state.get(Property::Entropy),
        }
    }

    pub fn values(&self) -> [Option<f64>; 6] {
        [
            self.p_pa,
            self.t_k,
            self.v_m3_per_kg,
            self.u_j_per_kg,
            self.h_j_per_kg,
            self.s_j_per_kg_k,
        ]
    }
}

pub fn records(cycle: &Cycle, scope: ExportScope) -> Vec<StateRecord> {
    let mut out = Vec::new();
    for (i, state) in cycle.states().iter().enumerate() {
        let n = i + 1;
        out.push(StateRecord::from_state(n.to_string(), state));
        if scope == ExportScope::All {
            for (j, interior) in cycle.interior(i).iter().enumerate() {
                out.push(StateRecord::from_state(format!("{n}.{}", j + 1), interior));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tc_eos::IdealGas;

    fn cycle() -> Cycle {
        let mut cycle = Cycle::new(Arc::new(IdealGas::air()), 2, 3).unwrap();
        cycle.add_state_named(&[("P", 1e5), ("T", 300.0)]).unwrap();
        cycle.add_state_named(&[("T", 600.0)]).unwrap();
        cycle.isobaric().unwrap();
        cycle
    }

    #[test]
    fn principal_scope_has_one_record_per_state() {
        let recs = records(&cycle(), ExportScope::Principal);
        let labels: Vec<_> = recs.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["1", "2"]);
        assert_eq!(recs[1].t_k, Some(600.0));
        assert_eq!(recs[1].p_pa, Some(1e5));
    }

    #[test]
    fn all_scope_interleaves_interior_states() {
        let recs = records(&cycle(), ExportScope::All);
        let labels: Vec<_> = recs.iter().map(|r| r.label.as_str()).collect();
        // edge 2 -> 1 is not solved yet, so state 2 has no interior states
        assert_eq!(labels, ["1", "1.1", "1.2", "1.3", "2"]);
        assert!(recs.iter().all(|r| r.values().iter().all(Option::is_some)));
    }

    #[test]
    fn unset_properties_are_none() {
        let mut cycle = Cycle::new(Arc::new(IdealGas::air()), 2, 3).unwrap();
        cycle.add_state_named(&[("T", 300.0)]).unwrap();
        let rec = &records(&cycle, ExportScope::Principal)[0];
        assert_eq!(rec.t_k, Some(300.0));
        assert_eq!(rec.p_pa, None);
        assert_eq!(rec.s_j_per_kg_k, None);
    }
}

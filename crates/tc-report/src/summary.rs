//! Console summaries.

use tc_cycle::{Cycle, Efficiency};

/// Model line, one line per principal state and one per solved edge.
pub fn cycle_summary(cycle: &Cycle) -> String {
    let mut lines = vec![format!(
        "Cycle ({}): {} states, {} interior samples per edge",
        cycle.model().name(),
        cycle.capacity(),
        cycle.samples()
    )];
    lines.extend(cycle.states().iter().map(ToString::to_string));
    let n = cycle.capacity();
    for edge in cycle.edges() {
        lines.push(format!(
            "Edge {} -> {}: {}",
            edge.index + 1,
            (edge.index + 1) % n + 1,
            edge.process
        ));
    }
    lines.join("\n")
}

pub fn efficiency_line(method: &str, eff: &Efficiency) -> String {
    let mut line = format!(
        "{method} efficiency: {:.4} (net work {:.2} J/kg, heat input {:.2} J/kg)",
        eff.value, eff.net_work, eff.heat_input
    );
    let unclassified = eff.unclassified();
    if !unclassified.is_empty() {
        let edges: Vec<String> = unclassified.iter().map(|i| (i + 1).to_string()).collect();
        line.push_str(&format!(", unclassified edges: {}", edges.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tc_eos::{EdgeClass, EdgeEnergy, IdealGas};

    #[test]
    fn summary_lists_states_and_edges() {
        let mut cycle = Cycle::new(Arc::new(IdealGas::air()), 2, 2).unwrap();
        cycle.add_state_named(&[("P", 1e5), ("T", 300.0)]).unwrap();
        cycle.add_state_named(&[("T", 600.0)]).unwrap();
        cycle.isobaric().unwrap();

        let text = cycle_summary(&cycle);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("2 states"));
        assert!(lines[1].starts_with("State 1: P=100000.00 Pa, T=300.00 K"));
        assert!(lines[2].starts_with("State 2:"));
        assert_eq!(lines[3], "Edge 1 -> 2: isobaric");
    }

    #[test]
    fn unset_values_show_as_na() {
        let mut cycle = Cycle::new(Arc::new(IdealGas::air()), 2, 2).unwrap();
        cycle.add_state_named(&[("T", 300.0)]).unwrap();
        assert!(cycle_summary(&cycle).contains("P=N/A"));
    }

    #[test]
    fn efficiency_line_flags_unclassified() {
        let eff = Efficiency::from_edges(vec![
            EdgeEnergy { work: 0.0, heat: 100.0, class: EdgeClass::Unclassified },
            EdgeEnergy { work: 40.0, heat: -60.0, class: EdgeClass::Isothermal },
        ]);
        let line = efficiency_line("analytic", &eff);
        assert!(line.starts_with("analytic efficiency: 0.4000"));
        assert!(line.ends_with("unclassified edges: 1"));
    }
}

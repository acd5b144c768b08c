//! P-v and T-s series for plotting a cycle.

use crate::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tc_cycle::{Cycle, CycleError};
use tc_eos::Property;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagramKind {
    /// Pressure over specific volume.
    PV,
    /// Temperature over specific entropy.
    TS,
}

impl DiagramKind {
    /// (x, y) properties.
    pub fn axes(self) -> (Property, Property) {
        match self {
            DiagramKind::PV => (Property::SpecificVolume, Property::Pressure),
            DiagramKind::TS => (Property::Entropy, Property::Temperature),
        }
    }
}

impl FromStr for DiagramKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pv" | "p-v" => Ok(DiagramKind::PV),
            "ts" | "t-s" => Ok(DiagramKind::TS),
            _ => Err(ReportError::Unknown {
                what: "diagram kind",
                value: s.to_string(),
            }),
        }
    }
}

/// Points of one edge: inlet, interior samples, outlet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// 1-based edge number.
    pub edge: usize,
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub kind: DiagramKind,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Diagram {
    /// One series per solved edge.
    pub fn of_cycle(cycle: &Cycle, kind: DiagramKind) -> ReportResult<Self> {
        let (x_prop, y_prop) = kind.axes();
        let n = cycle.capacity();
        let mut series = Vec::with_capacity(cycle.edges().len());
        for edge in cycle.edges() {
            let points = cycle
                .edge_path(edge.index)?
                .into_iter()
                .map(|s| Ok([s.require(x_prop)?, s.require(y_prop)?]))
                .collect::<Result<Vec<_>, CycleError>>()?;
            series.push(Series {
                edge: edge.index + 1,
                name: format!(
                    "{} -> {}: {}",
                    edge.index + 1,
                    (edge.index + 1) % n + 1,
                    edge.process.kind()
                ),
                points,
            });
        }
        debug!(?kind, series = series.len(), "diagram built");
        Ok(Self {
            kind,
            x_label: axis_label(x_prop),
            y_label: axis_label(y_prop),
            series,
        })
    }

    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn axis_label(prop: Property) -> String {
    format!("{} [{}]", prop.symbol(), prop.unit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tc_eos::IdealGas;

    fn closed_cycle() -> Cycle {
        let mut cycle = Cycle::new(Arc::new(IdealGas::air()), 3, 4).unwrap();
        cycle.add_state_named(&[("P", 1e5), ("T", 300.0)]).unwrap();
        cycle.add_state_named(&[("T", 600.0)]).unwrap();
        cycle.add_state_named(&[("P", 5e4)]).unwrap();
        cycle.isobaric().unwrap();
        cycle.isochoric().unwrap();
        cycle.isothermal().unwrap();
        cycle
    }

    #[test]
    fn series_run_boundary_to_boundary() {
        let cycle = closed_cycle();
        let d = Diagram::of_cycle(&cycle, DiagramKind::PV).unwrap();
        assert_eq!(d.series.len(), 3);
        assert!(d.series.iter().all(|s| s.points.len() == 6));

        let first = &d.series[0];
        let v1 = cycle.state(1).unwrap().specific_volume().unwrap();
        let v2 = cycle.state(2).unwrap().specific_volume().unwrap();
        assert_eq!(first.points[0], [v1, 1e5]);
        assert_eq!(first.points[5][0], v2);
        assert_eq!(first.name, "1 -> 2: isobaric");
        assert_eq!(d.series[2].name, "3 -> 1: isothermal");
    }

    #[test]
    fn ts_axes() {
        let d = Diagram::of_cycle(&closed_cycle(), DiagramKind::TS).unwrap();
        assert_eq!(d.x_label, format!("s [{}]", Property::Entropy.unit()));
        // isobaric heating raises T along the first edge
        let ts: Vec<f64> = d.series[0].points.iter().map(|p| p[1]).collect();
        assert!(ts.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn kind_parsing() {
        assert_eq!("pv".parse::<DiagramKind>().unwrap(), DiagramKind::PV);
        assert_eq!("T-s".parse::<DiagramKind>().unwrap(), DiagramKind::TS);
        assert!("hs".parse::<DiagramKind>().is_err());
    }
}

//! Cycle engine: principal states, process edges and interior samples.

use crate::error::{CycleError, CycleResult};
use crate::process::Process;
use std::sync::Arc;
use tc_core::{linspace, Real};
use tc_eos::{EquationOfState, Label, ProcessCurve, Property, Reconciliation, State};
use tracing::{debug, info};

/// A solved edge between principal states `index` and `index + 1 (mod N)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Zero-based edge number.
    pub index: usize,
    pub process: Process,
    /// Interior states in sweep order, boundaries excluded.
    pub interior: Vec<State>,
    pub reconciled: Vec<(Property, Reconciliation)>,
}

/// Thermodynamic cycle of `N` principal states joined by `N` processes.
///
/// States are added in traversal order, then one process call per edge in
/// the same order. Edge `i` joins state `i` to state `(i + 1) mod N`.
#[derive(Debug)]
pub struct Cycle {
    model: Arc<dyn EquationOfState>,
    capacity: usize,
    samples: usize,
    states: Vec<State>,
    edges: Vec<Edge>,
}

impl Cycle {
    /// Interior samples per edge when none is given.
    pub const DEFAULT_SAMPLES: usize = 35;

    pub fn new(model: Arc<dyn EquationOfState>, n_states: usize, samples: usize) -> CycleResult<Self> {
        if n_states < 2 {
            return Err(CycleError::InvalidArg {
                what: "a cycle needs at least 2 states",
            });
        }
        Ok(Self {
            model,
            capacity: n_states,
            samples,
            states: Vec::with_capacity(n_states),
            edges: Vec::with_capacity(n_states),
        })
    }

    pub fn model(&self) -> &dyn EquationOfState {
        self.model.as_ref()
    }

    /// Number of principal states (and edges) the cycle holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Principal state by 1-based ordinal.
    pub fn state(&self, ordinal: usize) -> Option<&State> {
        ordinal.checked_sub(1).and_then(|i| self.states.get(i))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Interior states of edge `index`; empty until the edge is solved.
    pub fn interior(&self, index: usize) -> &[State] {
        self.edges
            .get(index)
            .map(|e| e.interior.as_slice())
            .unwrap_or(&[])
    }

    /// Every edge has been solved.
    pub fn is_closed(&self) -> bool {
        self.edges.len() == self.capacity
    }

    /// Add the next principal state with its known properties.
    ///
    /// Returns the 1-based ordinal of the new state.
    pub fn add_state(&mut self, props: &[(Property, Real)]) -> CycleResult<usize> {
        if self.states.len() >= self.capacity {
            return Err(CycleError::CapacityExceeded {
                what: "states",
                capacity: self.capacity,
            });
        }
        let ordinal = self.states.len() + 1;
        let mut state = State::new(Label::Principal(ordinal), self.model.as_ref());
        state.update(props)?;
        self.states.push(state);
        Ok(ordinal)
    }

    /// [`add_state`](Self::add_state) with property symbols.
    pub fn add_state_named(&mut self, props: &[(&str, Real)]) -> CycleResult<usize> {
        let props = props
            .iter()
            .map(|&(name, value)| Ok((name.parse::<Property>()?, value)))
            .collect::<CycleResult<Vec<_>>>()?;
        self.add_state(&props)
    }

    pub fn isochoric(&mut self) -> CycleResult<&Edge> {
        self.process(Process::Isochoric)
    }

    pub fn isothermal(&mut self) -> CycleResult<&Edge> {
        self.process(Process::Isothermal)
    }

    pub fn isobaric(&mut self) -> CycleResult<&Edge> {
        self.process(Process::Isobaric)
    }

    pub fn isenthalpic(&mut self) -> CycleResult<&Edge> {
        self.process(Process::Isenthalpic)
    }

    pub fn isentropic(&mut self) -> CycleResult<&Edge> {
        self.process(Process::Isentropic)
    }

    /// Heat `heat` [J/kg] at constant temperature, positive into the fluid.
    pub fn heat_transfer(&mut self, heat: Real) -> CycleResult<&Edge> {
        self.process(Process::HeatTransfer { heat })
    }

    /// Solve the next edge with `process` and fill its interior states.
    pub fn process(&mut self, process: Process) -> CycleResult<&Edge> {
        let n = self.capacity;
        let index = self.edges.len();
        if index >= n {
            return Err(CycleError::CapacityExceeded {
                what: "process calls",
                capacity: n,
            });
        }
        let next = (index + 1) % n;
        for i in [index, next] {
            if i >= self.states.len() {
                return Err(CycleError::MissingState { ordinal: i + 1 });
            }
        }

        let model = Arc::clone(&self.model);
        let (inlet, outlet) = pair_mut(&mut self.states, index, next);
        let resolution = process.resolve(model.as_ref(), inlet, outlet)?;

        let curve = &resolution.curve;
        let start = inlet.require(curve.swept())?;
        let end = outlet.require(curve.swept())?;
        let quality = [inlet.quality(), outlet.quality()];
        let interior = sample_interior(model.as_ref(), curve, [start, end], quality, self.samples)?;
        debug!(edge = index + 1, swept = %curve.swept(), start, end, "edge sampled");

        info!(
            edge = index + 1,
            from = index + 1,
            to = next + 1,
            process = %process,
            samples = interior.len(),
            advisory = resolution.has_advisory(),
            "process solved"
        );
        self.edges.push(Edge {
            index,
            process,
            interior,
            reconciled: resolution.reconciled,
        });
        Ok(&self.edges[index])
    }

    /// Principal states `index` and `index + 1 (mod N)` of an edge.
    pub fn boundaries(&self, index: usize) -> CycleResult<(&State, &State)> {
        let next = (index + 1) % self.capacity;
        let inlet = self
            .states
            .get(index)
            .ok_or(CycleError::MissingState { ordinal: index + 1 })?;
        let outlet = self
            .states
            .get(next)
            .ok_or(CycleError::MissingState { ordinal: next + 1 })?;
        Ok((inlet, outlet))
    }

    /// States along edge `index`: inlet, interior samples, outlet.
    pub fn edge_path(&self, index: usize) -> CycleResult<Vec<&State>> {
        let (inlet, outlet) = self.boundaries(index)?;
        let mut path = Vec::with_capacity(self.samples + 2);
        path.push(inlet);
        path.extend(self.interior(index));
        path.push(outlet);
        Ok(path)
    }
}

/// Disjoint mutable borrows of two different states.
fn pair_mut(states: &mut [State], a: usize, b: usize) -> (&mut State, &mut State) {
    if a < b {
        let (lo, hi) = states.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = states.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

/// `samples` evenly spaced interior points of the swept variable, each
/// completed from (swept, dependent).
///
/// Quality runs linearly from the inlet's to the outlet's value over the
/// same grid.
fn sample_interior(
    model: &dyn EquationOfState,
    curve: &ProcessCurve<'_>,
    [start, end]: [Real; 2],
    [x_in, x_out]: [Real; 2],
    samples: usize,
) -> CycleResult<Vec<State>> {
    let points = linspace(start, end, samples + 2);
    let qualities = linspace(x_in, x_out, samples + 2);
    let sweep = &points[1..points.len() - 1];
    let ys = curve.eval_many(sweep)?;
    sweep
        .iter()
        .zip(&qualities[1..])
        .zip(ys)
        .map(|((&x, &quality), y)| {
            let mut state = State::new(Label::Interior, model);
            state.update(&[
                (Property::Quality, quality),
                (curve.swept(), x),
                (curve.dependent(), y),
            ])?;
            state.complete(model)?;
            Ok(state)
        })
        .collect()
}

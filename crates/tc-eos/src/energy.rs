//! Per-edge work and heat.

use tc_core::Real;

/// How an edge's energy was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeClass {
    Isobaric,
    Isothermal,
    Isentropic,
    Isenthalpic,
    /// No boundary property matched; W = 0, Q = Δu.
    Unclassified,
    /// Trapezoidal integration over the sampled states.
    Numeric,
}

/// Specific work done by the fluid and heat received by it [J/kg].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeEnergy {
    pub work: Real,
    pub heat: Real,
    pub class: EdgeClass,
}

//! Specific heat capacities, constant or polynomial in temperature.

use crate::error::{EosError, EosResult};
use tc_core::Real;

/// Specific heat [J/(kg·K)] as a function of temperature.
///
/// `Polynomial(a)` means `c(T) = a[0] + a[1]·T + a[2]·T² + ...`.
#[derive(Debug, Clone, PartialEq)]
pub enum HeatCapacity {
    Constant(Real),
    Polynomial(Vec<Real>),
}

impl HeatCapacity {
    pub fn is_constant(&self) -> bool {
        matches!(self, HeatCapacity::Constant(_))
    }

    /// Value at temperature `t` [K].
    pub fn at(&self, t: Real) -> Real {
        match self {
            HeatCapacity::Constant(c) => *c,
            // Horner
            HeatCapacity::Polynomial(coeffs) => coeffs.iter().rev().fold(0.0, |acc, &a| acc * t + a),
        }
    }

    /// ∫ c dT from `t0` to `t`.
    pub fn integral(&self, t0: Real, t: Real) -> Real {
        match self {
            HeatCapacity::Constant(c) => c * (t - t0),
            HeatCapacity::Polynomial(coeffs) => coeffs
                .iter()
                .enumerate()
                .map(|(i, a)| {
                    let n = (i + 1) as i32;
                    a * (t.powi(n) - t0.powi(n)) / n as Real
                })
                .sum(),
        }
    }

    /// ∫ c/T dT from `t0` to `t`.
    pub fn entropy_integral(&self, t0: Real, t: Real) -> Real {
        match self {
            HeatCapacity::Constant(c) => c * (t / t0).ln(),
            HeatCapacity::Polynomial(coeffs) => coeffs
                .iter()
                .enumerate()
                .map(|(i, a)| {
                    if i == 0 {
                        a * (t / t0).ln()
                    } else {
                        let n = i as i32;
                        a * (t.powi(n) - t0.powi(n)) / n as Real
                    }
                })
                .sum(),
        }
    }

    /// Coefficients must be finite and the heat capacity positive at `t_ref`.
    pub fn validate(&self, t_ref: Real) -> EosResult<()> {
        let coeffs: &[Real] = match self {
            HeatCapacity::Constant(c) => std::slice::from_ref(c),
            HeatCapacity::Polynomial(coeffs) => coeffs,
        };
        if coeffs.is_empty() {
            return Err(EosError::InvalidArg {
                what: "heat capacity polynomial has no coefficients",
            });
        }
        if coeffs.iter().any(|c| !c.is_finite()) {
            return Err(EosError::InvalidArg {
                what: "heat capacity coefficients must be finite",
            });
        }
        if self.at(t_ref) <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "heat capacity must be positive at the reference temperature",
            });
        }
        Ok(())
    }
}

impl From<Real> for HeatCapacity {
    fn from(value: Real) -> Self {
        HeatCapacity::Constant(value)
    }
}

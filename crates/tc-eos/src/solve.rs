//! Scalar root finding: bracketed bisection and real cubic roots.

use crate::error::{EosError, EosResult};
use tc_core::Real;

/// Bisection settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketConfig {
    pub max_iters: usize,
    pub x_abs_tol: Real,
    pub x_rel_tol: Real,
    /// Stop early once |f(x)| falls to this value.
    pub residual_tol: Real,
    /// Accept an x-converged point only if |f| is within
    /// `residual_tol + residual_rel_tol · max(|f(lo)|, |f(hi)|)`.
    pub residual_rel_tol: Real,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
            residual_tol: 0.0,
            residual_rel_tol: 1e-6,
        }
    }
}

impl BracketConfig {
    /// Tolerances must be finite and non-negative, with at least one iteration.
    pub fn validate(&self) -> EosResult<()> {
        if self.max_iters == 0 {
            return Err(EosError::InvalidArg {
                what: "max_iters must be at least 1",
            });
        }
        for tol in [
            self.x_abs_tol,
            self.x_rel_tol,
            self.residual_tol,
            self.residual_rel_tol,
        ] {
            if !tol.is_finite() || tol < 0.0 {
                return Err(EosError::InvalidArg {
                    what: "solver tolerances must be finite and non-negative",
                });
            }
        }
        Ok(())
    }
}

fn residual_at<F>(f: &mut F, x: Real, what: &'static str) -> EosResult<Real>
where
    F: FnMut(Real) -> EosResult<Real>,
{
    let r = f(x)?;
    if r.is_finite() {
        Ok(r)
    } else {
        Err(EosError::RootFinding {
            what,
            reason: format!("non-finite residual {r} at x = {x}"),
        })
    }
}

/// Find `x` in `[lo, hi]` with `f(x) = 0` by bisection.
///
/// The residual must change sign over the bracket. A sign change across a
/// jump is not a root: once the bracket is x-converged the residual is
/// checked against the scale of the end residuals. `what` names the
/// unknown in error messages.
pub fn bisect<F>(mut f: F, bracket: [Real; 2], config: &BracketConfig, what: &'static str) -> EosResult<Real>
where
    F: FnMut(Real) -> EosResult<Real>,
{
    config.validate()?;
    let [mut lo, mut hi] = bracket;
    if !lo.is_finite() || !hi.is_finite() {
        return Err(EosError::RootFinding {
            what,
            reason: format!("non-finite bracket [{lo}, {hi}]"),
        });
    }
    if lo == hi {
        return Err(EosError::RootFinding {
            what,
            reason: format!("bracket has zero width at {lo}"),
        });
    }
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }

    let mut f_lo = residual_at(&mut f, lo, what)?;
    let f_hi = residual_at(&mut f, hi, what)?;
    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(EosError::RootFinding {
            what,
            reason: format!("no sign change: f({lo})={f_lo}, f({hi})={f_hi}"),
        });
    }

    let accept = config.residual_tol + config.residual_rel_tol * f_lo.abs().max(f_hi.abs());
    for _ in 0..config.max_iters {
        let mid = 0.5 * (lo + hi);
        let f_mid = residual_at(&mut f, mid, what)?;
        if f_mid.abs() <= config.residual_tol {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
        if hi - lo <= config.x_abs_tol + config.x_rel_tol * (0.5 * (lo + hi)).abs() {
            let x = 0.5 * (lo + hi);
            let r = residual_at(&mut f, x, what)?;
            if r.abs() > accept {
                return Err(EosError::RootFinding {
                    what,
                    reason: format!("discontinuity, not a root: f({x}) = {r} after the bracket closed"),
                });
            }
            return Ok(x);
        }
    }

    Err(EosError::RootFinding {
        what,
        reason: format!(
            "no convergence after {} iterations, bracket [{lo}, {hi}]",
            config.max_iters
        ),
    })
}

/// Real roots of `a·x³ + b·x² + c·x + d`, sorted ascending.
///
/// Uses the depressed-cubic form: Cardano for one real root, the
/// trigonometric form for three.
pub fn cubic_real_roots(a: Real, b: Real, c: Real, d: Real) -> EosResult<Vec<Real>> {
    if a == 0.0 || !a.is_finite() {
        return Err(EosError::InvalidArg {
            what: "cubic leading coefficient must be finite and non-zero",
        });
    }
    let (b, c, d) = (b / a, c / a, d / a);
    let shift = -b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;
    let disc = (q / 2.0).powi(2) + (p / 3.0).powi(3);

    let mut roots = if disc > 0.0 {
        let sq = disc.sqrt();
        vec![(-q / 2.0 + sq).cbrt() + (-q / 2.0 - sq).cbrt() + shift]
    } else if p == 0.0 {
        // triple root
        vec![shift]
    } else {
        let m = 2.0 * (-p / 3.0).sqrt();
        let arg = (3.0 * q / (p * m)).clamp(-1.0, 1.0);
        let theta = arg.acos() / 3.0;
        (0..3)
            .map(|k| m * (theta - 2.0 * std::f64::consts::PI * k as Real / 3.0).cos() + shift)
            .collect()
    };

    if roots.iter().any(|r| !r.is_finite()) {
        return Err(EosError::RootFinding {
            what: "cubic roots",
            reason: "non-finite root".to_string(),
        });
    }
    roots.sort_by(|x, y| x.total_cmp(y));
    Ok(roots)
}

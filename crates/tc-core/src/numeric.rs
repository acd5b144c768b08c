use crate::{TcError, TcResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute + relative tolerance pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Loose tolerance used to decide whether two boundary properties
    /// "match" when classifying a process edge (abs 1e-8, rel 1e-5).
    pub const fn classification() -> Self {
        Self {
            abs: 1e-8,
            rel: 1e-5,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> TcResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TcError::NonFinite { what, value: v })
    }
}

/// `n` evenly spaced points from `start` to `end`, both included.
///
/// The last point is pinned to `end` exactly so callers can rely on the
/// bounds round-tripping.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (end - start) / (n - 1) as Real;
            let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
            points[n - 1] = end;
            points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn classification_tolerance_is_loose() {
        let tol = Tolerances::classification();
        assert!(nearly_equal(100_000.0, 100_000.5, tol));
        assert!(!nearly_equal(100_000.0, 100_002.0, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn linspace_pins_endpoints() {
        let pts = linspace(0.1, 0.7, 4);
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[0], 0.1);
        assert_eq!(pts[3], 0.7);
        assert!(nearly_equal(pts[1], 0.3, Tolerances::default()));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn linspace_descending() {
        let pts = linspace(8.0, 2.0, 4);
        assert_eq!(pts, vec![8.0, 6.0, 4.0, 2.0]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linspace_is_monotone(start in -1e6_f64..1e6, end in -1e6_f64..1e6, n in 2_usize..64) {
            let pts = linspace(start, end, n);
            prop_assert_eq!(pts.len(), n);
            prop_assert_eq!(pts[0], start);
            prop_assert_eq!(pts[n - 1], end);
            for w in pts.windows(2) {
                if end >= start {
                    prop_assert!(w[1] >= w[0]);
                } else {
                    prop_assert!(w[1] <= w[0]);
                }
            }
        }
    }
}

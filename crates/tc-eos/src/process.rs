//! Process kinds and the variables their curves relate.

use crate::property::Property;
use std::fmt;

/// The thermodynamic processes a cycle edge can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessKind {
    Isochoric,
    Isothermal,
    Isobaric,
    Isenthalpic,
    Isentropic,
    /// Heat added (positive) or rejected (negative) at constant temperature.
    HeatTransfer,
}

impl ProcessKind {
    pub const ALL: [ProcessKind; 6] = [
        ProcessKind::Isochoric,
        ProcessKind::Isothermal,
        ProcessKind::Isobaric,
        ProcessKind::Isenthalpic,
        ProcessKind::Isentropic,
        ProcessKind::HeatTransfer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Isochoric => "isochoric",
            Self::Isothermal => "isothermal",
            Self::Isobaric => "isobaric",
            Self::Isenthalpic => "isenthalpic",
            Self::Isentropic => "isentropic",
            Self::HeatTransfer => "heat transfer",
        }
    }

    /// Property held equal across the two boundary states.
    pub fn invariant(self) -> Property {
        match self {
            Self::Isochoric => Property::SpecificVolume,
            Self::Isothermal | Self::HeatTransfer => Property::Temperature,
            Self::Isobaric => Property::Pressure,
            Self::Isenthalpic => Property::Enthalpy,
            Self::Isentropic => Property::Entropy,
        }
    }

    /// Free variable sampled along the edge.
    pub fn swept(self) -> Property {
        match self {
            Self::Isochoric => Property::Pressure,
            _ => Property::SpecificVolume,
        }
    }

    /// Variable the curve returns for each swept value.
    pub fn dependent(self) -> Property {
        match self {
            Self::Isochoric | Self::Isobaric => Property::Temperature,
            _ => Property::Pressure,
        }
    }
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swept_and_dependent_differ_from_invariant() {
        for kind in ProcessKind::ALL {
            assert_ne!(kind.swept(), kind.dependent());
            assert_ne!(kind.swept(), kind.invariant());
            assert_ne!(kind.dependent(), kind.invariant());
        }
    }

    #[test]
    fn isochoric_sweeps_pressure() {
        assert_eq!(ProcessKind::Isochoric.swept(), Property::Pressure);
        assert_eq!(ProcessKind::Isochoric.dependent(), Property::Temperature);
        assert_eq!(ProcessKind::Isobaric.dependent(), Property::Temperature);
        assert_eq!(ProcessKind::Isentropic.dependent(), Property::Pressure);
    }
}

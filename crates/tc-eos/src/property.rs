//! The seven state properties.

use crate::error::EosError;
use std::fmt;
use std::str::FromStr;

/// A thermodynamic property slot of a [`crate::State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    /// Pressure [Pa]
    Pressure,
    /// Temperature [K]
    Temperature,
    /// Specific volume [m³/kg]
    SpecificVolume,
    /// Specific internal energy [J/kg]
    InternalEnergy,
    /// Specific enthalpy [J/kg]
    Enthalpy,
    /// Specific entropy [J/(kg·K)]
    Entropy,
    /// Vapor mass fraction, 0-1
    Quality,
}

impl Property {
    pub const ALL: [Property; 7] = [
        Property::Pressure,
        Property::Temperature,
        Property::SpecificVolume,
        Property::InternalEnergy,
        Property::Enthalpy,
        Property::Entropy,
        Property::Quality,
    ];

    /// The six properties that start out unknown (quality always has a value).
    pub const THERMO: [Property; 6] = [
        Property::Pressure,
        Property::Temperature,
        Property::SpecificVolume,
        Property::InternalEnergy,
        Property::Enthalpy,
        Property::Entropy,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pressure => "P",
            Self::Temperature => "T",
            Self::SpecificVolume => "v",
            Self::InternalEnergy => "u",
            Self::Enthalpy => "h",
            Self::Entropy => "s",
            Self::Quality => "x",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Pressure => "Pa",
            Self::Temperature => "K",
            Self::SpecificVolume => "m³/kg",
            Self::InternalEnergy | Self::Enthalpy => "J/kg",
            Self::Entropy => "J/kg·K",
            Self::Quality => "",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Property {
    type Err = EosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .into_iter()
            .find(|p| p.symbol() == s)
            .ok_or_else(|| EosError::InvalidProperty { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_symbols() {
        for prop in Property::ALL {
            assert_eq!(prop.symbol().parse::<Property>().unwrap(), prop);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        // "V" is not specific volume, "p" is not pressure
        assert!("V".parse::<Property>().is_err());
        assert!("p".parse::<Property>().is_err());
    }

    #[test]
    fn reject_unknown_name() {
        let err = "rho".parse::<Property>().unwrap_err();
        assert_eq!(
            err,
            EosError::InvalidProperty {
                name: "rho".to_string()
            }
        );
    }
}

// tc-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, SpecificHeatCapacity as UomSpecificHeatCapacity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type SpecHeat = UomSpecificHeatCapacity;

/// Specific volume [m³/kg].
///
/// Kept as plain f64 alongside the other specific quantities below.
pub type SpecVolume = f64;

/// Specific internal energy or enthalpy [J/kg].
pub type SpecEnergy = f64;

/// Specific entropy [J/(kg·K)].
pub type SpecEntropy = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn j_per_kg_k(v: f64) -> SpecHeat {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecHeat::new::<joule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn to_pa(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

#[inline]
pub fn to_k(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

pub mod constants {
    /// Universal gas constant [J/(mol·K)].
    pub const R_UNIVERSAL: f64 = 8.314_462_618;

    /// Default reference temperature [K].
    pub const T_REF_K: f64 = 298.15;

    /// Default reference pressure [Pa].
    pub const P_REF_PA: f64 = 101_325.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_round_trip() {
        assert_eq!(to_pa(pa(101_325.0)), 101_325.0);
        assert!((to_k(k(300.0)) - 300.0).abs() < 1e-12);
        let _cp = j_per_kg_k(1005.0);
    }

    #[test]
    fn kilopascal_conversion() {
        use uom::si::pressure::kilopascal;
        let p = Pressure::new::<kilopascal>(100.0);
        assert!((to_pa(p) - 100_000.0).abs() < 1e-9);
    }
}

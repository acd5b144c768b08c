//! Cycle definition file schema.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tc_core::units::constants::{P_REF_PA, T_REF_K};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleDef {
    pub name: String,
    /// Interior samples per edge.
    #[serde(default = "default_samples")]
    pub samples: usize,
    pub model: ModelDef,
    /// Known properties of each principal state, keyed by symbol
    /// (`P`, `T`, `v`, `u`, `h`, `s`, `x`).
    pub states: Vec<BTreeMap<String, f64>>,
    /// One process per edge, in state order.
    pub processes: Vec<ProcessDef>,
}

fn default_samples() -> usize {
    tc_cycle::Cycle::DEFAULT_SAMPLES
}

fn default_t0() -> f64 {
    T_REF_K
}

fn default_p0() -> f64 {
    P_REF_PA
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ModelDef {
    IdealGas {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Specific gas constant [J/(kg·K)].
        gas_constant: f64,
        cp: HeatCapacityDef,
        cv: HeatCapacityDef,
        #[serde(default = "default_t0")]
        t0: f64,
        #[serde(default = "default_p0")]
        p0: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bracket: Option<[f64; 2]>,
    },
    VanDerWaals {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Attraction constant [Pa·m⁶/mol²].
        a: f64,
        /// Co-volume [m³/mol].
        b: f64,
        /// [kg/mol]
        molar_mass: f64,
        /// Constant specific heats [J/(kg·K)].
        cp: f64,
        cv: f64,
        #[serde(default = "default_t0")]
        t0: f64,
        #[serde(default = "default_p0")]
        p0: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bracket: Option<[f64; 2]>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum HeatCapacityDef {
    Constant { value: f64 },
    /// Coefficients in ascending powers of T.
    Polynomial { coeffs: Vec<f64> },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ProcessDef {
    Isochoric,
    Isothermal,
    Isobaric,
    Isenthalpic,
    Isentropic,
    /// Heat [J/kg] at constant temperature, positive into the fluid.
    HeatTransfer { heat: f64 },
}

impl HeatCapacityDef {
    pub fn to_heat_capacity(&self) -> tc_eos::HeatCapacity {
        match self {
            HeatCapacityDef::Constant { value } => tc_eos::HeatCapacity::Constant(*value),
            HeatCapacityDef::Polynomial { coeffs } => tc_eos::HeatCapacity::Polynomial(coeffs.clone()),
        }
    }
}

impl ProcessDef {
    pub fn to_process(self) -> tc_cycle::Process {
        use tc_cycle::Process;
        match self {
            ProcessDef::Isochoric => Process::Isochoric,
            ProcessDef::Isothermal => Process::Isothermal,
            ProcessDef::Isobaric => Process::Isobaric,
            ProcessDef::Isenthalpic => Process::Isenthalpic,
            ProcessDef::Isentropic => Process::Isentropic,
            ProcessDef::HeatTransfer { heat } => Process::HeatTransfer { heat },
        }
    }
}

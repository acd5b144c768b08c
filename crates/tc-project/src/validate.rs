//! Cycle definition validation.

use crate::schema::{CycleDef, HeatCapacityDef, ModelDef, ProcessDef};
use tc_eos::Property;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("A cycle needs at least 2 states, found {count}")]
    TooFewStates { count: usize },

    #[error("Expected one process per state: {states} states, {processes} processes")]
    ProcessCount { states: usize, processes: usize },

    #[error("Unknown property '{name}' in state {state}")]
    UnknownProperty { state: usize, name: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

fn invalid(field: impl Into<String>, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive and finite"))
    }
}

fn validate_heat_capacity(field: &str, def: &HeatCapacityDef) -> Result<(), ValidationError> {
    match def {
        HeatCapacityDef::Constant { value } => positive(field, *value),
        HeatCapacityDef::Polynomial { coeffs } => {
            if coeffs.is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    value: "[]".to_string(),
                    reason: "polynomial needs at least one coefficient".to_string(),
                });
            }
            match coeffs.iter().find(|c| !c.is_finite()) {
                Some(&c) => Err(invalid(field, c, "coefficients must be finite")),
                None => Ok(()),
            }
        }
    }
}

fn validate_bracket(bracket: Option<[f64; 2]>) -> Result<(), ValidationError> {
    if let Some([lo, hi]) = bracket {
        positive("model.bracket[0]", lo)?;
        positive("model.bracket[1]", hi)?;
        if lo >= hi {
            return Err(invalid("model.bracket[1]", hi, "must exceed the lower bound"));
        }
    }
    Ok(())
}

fn validate_model(model: &ModelDef) -> Result<(), ValidationError> {
    match model {
        ModelDef::IdealGas {
            gas_constant,
            cp,
            cv,
            t0,
            p0,
            bracket,
            ..
        } => {
            positive("model.gas_constant", *gas_constant)?;
            validate_heat_capacity("model.cp", cp)?;
            validate_heat_capacity("model.cv", cv)?;
            positive("model.t0", *t0)?;
            positive("model.p0", *p0)?;
            validate_bracket(*bracket)
        }
        ModelDef::VanDerWaals {
            a,
            b,
            molar_mass,
            cp,
            cv,
            t0,
            p0,
            bracket,
            ..
        } => {
            positive("model.a", *a)?;
            positive("model.b", *b)?;
            positive("model.molar_mass", *molar_mass)?;
            positive("model.cp", *cp)?;
            positive("model.cv", *cv)?;
            positive("model.t0", *t0)?;
            positive("model.p0", *p0)?;
            validate_bracket(*bracket)
        }
    }
}

pub fn validate_cycle(def: &CycleDef) -> Result<(), ValidationError> {
    let states = def.states.len();
    if states < 2 {
        return Err(ValidationError::TooFewStates { count: states });
    }
    if def.processes.len() != states {
        return Err(ValidationError::ProcessCount {
            states,
            processes: def.processes.len(),
        });
    }
    validate_model(&def.model)?;

    for (i, props) in def.states.iter().enumerate() {
        let ordinal = i + 1;
        for (name, &value) in props {
            let prop = name.parse::<Property>().map_err(|_| ValidationError::UnknownProperty {
                state: ordinal,
                name: name.clone(),
            })?;
            if !value.is_finite() {
                return Err(invalid(format!("states[{ordinal}].{name}"), value, "must be finite"));
            }
            if prop == Property::Quality && !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("states[{ordinal}].{name}"), value, "must lie in [0, 1]"));
            }
        }
    }

    for (i, process) in def.processes.iter().enumerate() {
        if let ProcessDef::HeatTransfer { heat } = process {
            if !heat.is_finite() {
                return Err(invalid(format!("processes[{}].heat", i + 1), *heat, "must be finite"));
            }
        }
    }
    Ok(())
}

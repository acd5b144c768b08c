//! Build and solve a cycle from its definition.

use crate::schema::{CycleDef, ModelDef};
use crate::validate::validate_cycle;
use crate::ProjectResult;
use std::sync::Arc;
use tc_cycle::Cycle;
use tc_eos::{EquationOfState, IdealGas, VanDerWaals};
use tracing::info;

pub fn build_model(def: &ModelDef) -> ProjectResult<Arc<dyn EquationOfState>> {
    let model: Arc<dyn EquationOfState> = match def {
        ModelDef::IdealGas {
            name,
            gas_constant,
            cp,
            cv,
            t0,
            p0,
            bracket,
        } => {
            let mut gas = IdealGas::new(*gas_constant, cp.to_heat_capacity(), cv.to_heat_capacity())?
                .with_reference(*t0, *p0)?;
            if let Some(name) = name {
                gas = gas.with_name(name.clone());
            }
            if let Some(bracket) = bracket {
                gas = gas.with_temperature_bracket(*bracket)?;
            }
            Arc::new(gas)
        }
        ModelDef::VanDerWaals {
            name,
            a,
            b,
            molar_mass,
            cp,
            cv,
            t0,
            p0,
            bracket,
        } => {
            let mut fluid = VanDerWaals::new(*a, *b, *molar_mass, *cp, *cv)?.with_reference(*t0, *p0)?;
            if let Some(name) = name {
                fluid = fluid.with_name(name.clone());
            }
            if let Some(bracket) = bracket {
                fluid = fluid.with_temperature_bracket(*bracket)?;
            }
            Arc::new(fluid)
        }
    };
    Ok(model)
}

/// Validate, add every state, then solve the edges in order.
pub fn run_cycle(def: &CycleDef) -> ProjectResult<Cycle> {
    validate_cycle(def)?;
    let model = build_model(&def.model)?;
    let mut cycle = Cycle::new(model, def.states.len(), def.samples)?;

    for props in &def.states {
        let named: Vec<(&str, f64)> = props.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        cycle.add_state_named(&named)?;
    }
    for process in &def.processes {
        cycle.process(process.to_process())?;
    }
    info!(
        name = %def.name,
        model = cycle.model().name(),
        states = cycle.capacity(),
        samples = cycle.samples(),
        "cycle solved"
    );
    Ok(cycle)
}

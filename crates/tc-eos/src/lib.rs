//! tc-eos: state completion and process resolution for thermocycle.
//!
//! Provides:
//! - `State`, a partially known thermodynamic state (P, T, v, u, h, s, x)
//! - `EquationOfState` trait that completes states and resolves processes
//! - `IdealGas` (constant or polynomial heats) and `VanDerWaals` models
//! - Bracketed bisection and real cubic roots used by the models
//!
//! # Example
//!
//! ```
//! use tc_eos::{EquationOfState, IdealGas, Label, Property, State};
//!
//! let air = IdealGas::air();
//! let mut st = State::new(Label::Principal(1), &air);
//! st.update_named(&[("P", 100_000.0), ("T", 300.0)]).unwrap();
//! st.complete(&air).unwrap();
//! assert!(st.is_complete());
//! println!("{st}");
//! ```

pub mod curve;
pub mod energy;
pub mod error;
pub mod heat_capacity;
pub mod ideal_gas;
pub mod input;
pub mod model;
pub mod process;
pub mod property;
pub mod resolve;
pub mod solve;
pub mod state;
pub mod van_der_waals;

pub use curve::ProcessCurve;
pub use energy::{EdgeClass, EdgeEnergy};
pub use error::{EosError, EosResult};
pub use heat_capacity::HeatCapacity;
pub use ideal_gas::IdealGas;
pub use input::{Completion, InputPair, Inputs};
pub use model::{EquationOfState, ModelKind};
pub use process::ProcessKind;
pub use property::Property;
pub use resolve::{Reconciliation, Resolution};
pub use solve::{bisect, cubic_real_roots, BracketConfig};
pub use state::{Label, State};
pub use van_der_waals::{PhaseSplit, VanDerWaals};

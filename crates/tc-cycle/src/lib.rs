//! tc-cycle: closed thermodynamic cycles over a shared equation of state.
//!
//! A [`Cycle`] holds `N` principal states joined by `N` processes. Each
//! process call reconciles the two boundary states, completes them and
//! samples interior states along the process curve. Efficiency is then
//! computed numerically from the samples, analytically where the model
//! supports it, or as the Carnot bound.

pub mod cycle;
pub mod efficiency;
pub mod error;
pub mod process;

pub use cycle::{Cycle, Edge};
pub use efficiency::{carnot, Efficiency};
pub use error::{CycleError, CycleResult};
pub use process::Process;

//! Core domain types for Cofactor.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod consistency;
mod field;
mod form;
mod function;
mod invocation;
pub mod ui;

pub use consistency::{ConsistencyPolicy, is_consistent};
pub use field::{DigitField, FieldFormatError, IndexField, MAX_RESIDUE_LEN, check_digits};
pub use form::{Form, FormSettings, HoldReason, Readiness};
pub use function::{BooleanFunction, FunctionError};
pub use invocation::{
    Generation, InvocationState, OUTPUT_PLACEHOLDER, ReconstructionRequest, ResultView,
};

//! Simulation engine for converting part of a cash salary into an in-kind
//! housing benefit and comparing the resulting payroll profiles.
//!
//! The engine is a pure function over immutable static bracket tables: one
//! [`EmployeeInput`] in, one [`SimulationResult`] out. All monetary values
//! are yen-denominated [`rust_decimal::Decimal`]s; every division the
//! underlying tax tables floor is floored to whole yen.

pub mod calculations;
pub mod input;
pub mod models;
pub mod tables;

mod error;

pub use calculations::simulate;
pub use error::ValidationError;
pub use models::{EmployeeInput, MaritalStatus, PayrollProfile, Scheme, SimulationResult};

mod employee;
mod profile;
mod simulation;

pub use employee::{EmployeeInput, MaritalStatus};
pub use profile::{PayrollProfile, Scheme};
pub use simulation::SimulationResult;

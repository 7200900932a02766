//! Payroll calculation modules.
//!
//! Leaf-first: whole-yen helpers, the resident-tax derivation, single
//! profile construction, and the before/after comparison entry point.

pub mod common;
pub mod profile;
pub mod resident_tax;
pub mod simulate;

pub use profile::build_profile;
pub use resident_tax::{ResidentTaxDeductions, monthly_resident_tax, salary_income_deduction};
pub use simulate::simulate;

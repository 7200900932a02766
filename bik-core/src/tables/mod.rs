//! Static bracket tables.
//!
//! Each table is an ordered array of half-open interval rows
//! (`lower ≤ x < upper`, upper implied by the next row's lower bound) with
//! a `partition_point` lookup, replacing the reference implementation's
//! if/elif chains. The data is read-only for the lifetime of the process.

pub mod region;
pub mod social_insurance;
pub mod withholding;

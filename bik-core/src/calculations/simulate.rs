//! Before/after comparison.

use rust_decimal::Decimal;
use tracing::debug;

use crate::ValidationError;
use crate::calculations::common::floor_yen;
use crate::calculations::profile::build_profile;
use crate::models::{EmployeeInput, Scheme, SimulationResult};
use crate::tables::region;

/// Runs one complete simulation: resolves the region's benefit rate, builds
/// the before and after payroll profiles, and derives the component deltas
/// and the overall monthly effect.
///
/// Pure and stateless; identical inputs yield identical results. The only
/// failure mode is an unsupported region, surfaced before any profile is
/// computed.
pub fn simulate(input: &EmployeeInput) -> Result<SimulationResult, ValidationError> {
    let benefit_rate = region::benefit_rate(&input.region)?;
    let in_kind_benefit = Decimal::from(input.living_space) * benefit_rate;

    let before = build_profile(input, Scheme::Current, benefit_rate);
    let after = build_profile(input, Scheme::Restructured, benefit_rate);

    let delta_income_tax = before.income_tax - after.income_tax;
    let delta_social_insurance = floor_yen(
        (before.annual_social_insurance() - after.annual_social_insurance())
            / Decimal::from(12),
    );
    let delta_resident_tax = before.resident_tax - after.resident_tax;

    let effect = after.disposable_income - before.disposable_income;
    let effect_recheck = delta_income_tax + delta_social_insurance + delta_resident_tax;

    debug!(%effect, %effect_recheck, "simulation complete");

    Ok(SimulationResult {
        before,
        after,
        benefit_rate,
        in_kind_benefit,
        delta_income_tax,
        delta_social_insurance,
        delta_resident_tax,
        effect,
        effect_recheck,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::MaritalStatus;

    fn reference_input() -> EmployeeInput {
        EmployeeInput {
            age: 35,
            marital_status: MaritalStatus::WithSpouse,
            dependents: 1,
            region: "東京都".to_string(),
            living_space: 20,
            monthly_rent: dec!(100000),
            monthly_salary: dec!(300000),
            annual_bonus: dec!(600000),
        }
    }

    #[test]
    fn reference_scenario() {
        let result = simulate(&reference_input()).unwrap();

        assert_eq!(result.benefit_rate, dec!(2590));
        assert_eq!(result.in_kind_benefit, dec!(51800));
        assert_eq!(result.delta_income_tax, dec!(2810));
        assert_eq!(result.delta_social_insurance, dec!(2820));
        assert_eq!(result.delta_resident_tax, dec!(5818));
        assert_eq!(result.effect, dec!(11448));
        assert!(result.effect > Decimal::ZERO);
    }

    #[test]
    fn recheck_equals_effect() {
        let result = simulate(&reference_input()).unwrap();
        assert_eq!(result.effect_recheck, result.effect);
    }

    #[test]
    fn unsupported_region_computes_no_profile() {
        let mut input = reference_input();
        input.region = "大阪府".to_string();
        let err = simulate(&input).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedRegion { .. }));
    }

    #[test]
    fn simulation_is_idempotent() {
        let input = reference_input();
        assert_eq!(simulate(&input).unwrap(), simulate(&input).unwrap());
    }

    #[test]
    fn short_region_form_matches_long_form() {
        let mut short = reference_input();
        short.region = "東京".to_string();
        assert_eq!(
            simulate(&short).unwrap(),
            simulate(&reference_input()).unwrap()
        );
    }
}

//! Resident (inhabitant) tax derivation.
//!
//! Annual income less the statutory salary-income deduction and the
//! personal deductions gives the taxable amount; the monthly figure is the
//! flat 10% inhabitant-tax rate spread over twelve months, floored to
//! whole yen.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::{floor_yen, max};

/// Flat inhabitant-tax rate applied to the taxable amount.
const RESIDENT_TAX_RATE: Decimal = dec!(0.10);

/// Personal deduction amounts for the resident-tax base, in yen per year.
///
/// Parameterized so a historical table revision is a new value of this
/// struct rather than a copy of the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidentTaxDeductions {
    pub basic: Decimal,
    pub spousal: Decimal,
    pub per_dependent: Decimal,
}

impl Default for ResidentTaxDeductions {
    fn default() -> Self {
        Self {
            basic: dec!(330000),
            spousal: dec!(330000),
            per_dependent: dec!(330000),
        }
    }
}

/// Statutory salary-income deduction as a tiered function of annual income.
pub fn salary_income_deduction(annual_income: Decimal) -> Decimal {
    if annual_income < dec!(1625000) {
        dec!(650000)
    } else if annual_income <= dec!(1800000) {
        annual_income * dec!(0.4)
    } else if annual_income <= dec!(3600000) {
        annual_income * dec!(0.3) + dec!(180000)
    } else if annual_income <= dec!(6600000) {
        annual_income * dec!(0.2) + dec!(540000)
    } else if annual_income <= dec!(10000000) {
        annual_income * dec!(0.1) + dec!(1200000)
    } else {
        dec!(2200000)
    }
}

/// Derives the monthly resident tax from annual figures.
///
/// A taxable amount at or below zero yields zero tax rather than a refund;
/// the deduction total can exceed a low annual income.
pub fn monthly_resident_tax(
    annual_income: Decimal,
    deductions: &ResidentTaxDeductions,
    has_spouse: bool,
    dependents: u32,
    annual_social_insurance: Decimal,
) -> Decimal {
    let spousal = if has_spouse {
        deductions.spousal
    } else {
        Decimal::ZERO
    };
    let income_deduction = deductions.basic
        + spousal
        + deductions.per_dependent * Decimal::from(dependents)
        + annual_social_insurance;

    let taxable = max(
        annual_income - salary_income_deduction(annual_income) - income_deduction,
        Decimal::ZERO,
    );

    floor_yen(taxable * RESIDENT_TAX_RATE / Decimal::from(12))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn salary_income_deduction_bands() {
        assert_eq!(salary_income_deduction(dec!(1000000)), dec!(650000));
        assert_eq!(salary_income_deduction(dec!(1624999)), dec!(650000));
        assert_eq!(salary_income_deduction(dec!(1625000)), dec!(650000.0));
        assert_eq!(salary_income_deduction(dec!(1800000)), dec!(720000.0));
        assert_eq!(salary_income_deduction(dec!(1800001)), dec!(720000.3));
        assert_eq!(salary_income_deduction(dec!(3600000)), dec!(1260000.0));
        assert_eq!(salary_income_deduction(dec!(4200000)), dec!(1380000.0));
        assert_eq!(salary_income_deduction(dec!(6600000)), dec!(1860000.0));
        assert_eq!(salary_income_deduction(dec!(10000000)), dec!(2200000.0));
        assert_eq!(salary_income_deduction(dec!(10000001)), dec!(2200000));
    }

    #[test]
    fn reference_before_profile_figures() {
        // 300000/month + 600000 bonus, married, one dependent, social
        // insurance (14850 + 27450) * 12.
        let tax = monthly_resident_tax(
            dec!(4200000),
            &ResidentTaxDeductions::default(),
            true,
            1,
            dec!(507600),
        );
        assert_eq!(tax, dec!(11020));
    }

    #[test]
    fn reference_after_profile_figures() {
        let tax = monthly_resident_tax(
            dec!(3240000),
            &ResidentTaxDeductions::default(),
            true,
            1,
            dec!(473760),
        );
        assert_eq!(tax, dec!(5202));
    }

    #[test]
    fn spousal_deduction_requires_spouse() {
        let deductions = ResidentTaxDeductions::default();
        let married = monthly_resident_tax(dec!(4200000), &deductions, true, 0, dec!(0));
        let single = monthly_resident_tax(dec!(4200000), &deductions, false, 0, dec!(0));
        // 330000 more deducted -> 330000 * 10% / 12 = 2750 less per month.
        assert_eq!(single - married, dec!(2750));
    }

    #[test]
    fn each_dependent_deducts_a_fixed_amount() {
        let deductions = ResidentTaxDeductions::default();
        let none = monthly_resident_tax(dec!(4200000), &deductions, false, 0, dec!(0));
        let two = monthly_resident_tax(dec!(4200000), &deductions, false, 2, dec!(0));
        assert_eq!(none - two, dec!(5500));
    }

    #[test]
    fn negative_taxable_amount_floors_at_zero() {
        let tax = monthly_resident_tax(
            dec!(1000000),
            &ResidentTaxDeductions::default(),
            true,
            3,
            dec!(400000),
        );
        assert_eq!(tax, dec!(0));
    }

    #[test]
    fn monthly_tax_is_floored_to_whole_yen() {
        // taxable = 1322400 -> 1322400 * 0.10 / 12 = 11020 exactly;
        // shift by 10 yen to force a fraction.
        let tax = monthly_resident_tax(
            dec!(4200010),
            &ResidentTaxDeductions::default(),
            true,
            1,
            dec!(507600),
        );
        // taxable 1322408 -> 11020.066.. -> 11020
        assert_eq!(tax, dec!(11020));
    }
}

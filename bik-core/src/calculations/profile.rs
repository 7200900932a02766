//! Single payroll-profile construction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::resident_tax::{ResidentTaxDeductions, monthly_resident_tax};
use crate::models::{EmployeeInput, MaritalStatus, PayrollProfile, Scheme};
use crate::tables::{social_insurance, withholding};

/// Share of the rent the company takes over under the restructured scheme.
pub const COMPANY_RENT_SHARE: Decimal = dec!(0.8);

/// Builds one complete payroll profile for the given scheme.
///
/// Pure function of the input, the scheme, and the static bracket tables.
/// `benefit_rate` is the already-resolved yen-per-tatami valuation for the
/// input's region; under [`Scheme::Restructured`] the in-kind benefit
/// (living space × rate) enters the social-insurance assessment base but
/// not the cash salary.
pub fn build_profile(
    input: &EmployeeInput,
    scheme: Scheme,
    benefit_rate: Decimal,
) -> PayrollProfile {
    let (monthly_salary, rent_borne) = match scheme {
        Scheme::Current => (input.monthly_salary, input.monthly_rent),
        Scheme::Restructured => {
            let company_share = input.monthly_rent * COMPANY_RENT_SHARE;
            (
                input.monthly_salary - company_share,
                input.monthly_rent - company_share,
            )
        }
    };
    let annual_income = monthly_salary * Decimal::from(12) + input.annual_bonus;

    // The in-kind benefit is itself subject to social-insurance assessment.
    let standard_remuneration = match scheme {
        Scheme::Current => monthly_salary,
        Scheme::Restructured => {
            monthly_salary + Decimal::from(input.living_space) * benefit_rate
        }
    };
    let premiums = social_insurance::lookup(standard_remuneration, input.age);

    let post_social_insurance_salary =
        monthly_salary - premiums.health_insurance - premiums.pension;
    let income_tax = withholding::lookup(post_social_insurance_salary, input.dependents);

    let annual_social_insurance =
        (premiums.health_insurance + premiums.pension) * Decimal::from(12);
    let resident_tax = monthly_resident_tax(
        annual_income,
        &ResidentTaxDeductions::default(),
        input.marital_status == MaritalStatus::WithSpouse,
        input.dependents,
        annual_social_insurance,
    );

    let disposable_income = monthly_salary
        - premiums.health_insurance
        - premiums.pension
        - income_tax
        - resident_tax
        - rent_borne;

    debug!(
        ?scheme,
        %monthly_salary,
        %income_tax,
        %resident_tax,
        %disposable_income,
        "built payroll profile"
    );

    PayrollProfile {
        scheme,
        monthly_salary,
        annual_bonus: input.annual_bonus,
        annual_income,
        health_insurance: premiums.health_insurance,
        pension: premiums.pension,
        income_tax,
        resident_tax,
        rent_borne,
        disposable_income,
    }
}

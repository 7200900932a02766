use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which compensation scheme a profile describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    /// The current scheme: full cash salary, employee pays the whole rent.
    Current,
    /// The restructured scheme: the company pays 80% of the rent, salary is
    /// reduced by that share, and the housing benefit-in-kind enters the
    /// social-insurance assessment base.
    Restructured,
}

/// One complete monthly payroll profile, derived once per simulation and
/// never mutated afterwards.
///
/// Replaces the reference implementation's positional `calculation[0..33]`
/// array with named fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollProfile {
    pub scheme: Scheme,
    /// Monthly cash salary under this scheme.
    pub monthly_salary: Decimal,
    pub annual_bonus: Decimal,
    /// salary × 12 + bonus.
    pub annual_income: Decimal,
    /// Monthly health-insurance premium (with the long-term-care surcharge
    /// from age 40).
    pub health_insurance: Decimal,
    /// Monthly employees' pension premium.
    pub pension: Decimal,
    /// Monthly withholding income tax.
    pub income_tax: Decimal,
    /// Monthly resident (inhabitant) tax.
    pub resident_tax: Decimal,
    /// Rent the employee pays out of pocket under this scheme.
    pub rent_borne: Decimal,
    /// salary − health insurance − pension − income tax − resident tax −
    /// rent borne.
    pub disposable_income: Decimal,
}

impl PayrollProfile {
    /// Annual total of health-insurance and pension premiums, the
    /// social-insurance deduction used by the resident-tax derivation.
    pub fn annual_social_insurance(&self) -> Decimal {
        (self.health_insurance + self.pension) * Decimal::from(12)
    }
}

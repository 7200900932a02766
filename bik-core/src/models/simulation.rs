use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayrollProfile;

/// The before/after comparison produced by [`simulate`](crate::simulate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Profile under the current scheme.
    pub before: PayrollProfile,
    /// Profile under the restructured scheme.
    pub after: PayrollProfile,
    /// Resolved yen-per-tatami benefit valuation for the input region.
    pub benefit_rate: Decimal,
    /// Monthly in-kind housing benefit: living space × benefit rate.
    pub in_kind_benefit: Decimal,
    /// before.income_tax − after.income_tax.
    pub delta_income_tax: Decimal,
    /// Floor of the annual social-insurance saving divided by 12.
    pub delta_social_insurance: Decimal,
    /// before.resident_tax − after.resident_tax.
    pub delta_resident_tax: Decimal,
    /// after.disposable_income − before.disposable_income.
    pub effect: Decimal,
    /// Sum of the three component deltas; equals `effect` when the tables
    /// are applied consistently to both profiles.
    pub effect_recheck: Decimal,
}

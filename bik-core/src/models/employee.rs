use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether the employee has a spouse, for the spousal resident-tax deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    WithSpouse,
    Single,
}

impl MaritalStatus {
    /// Parses the canonical input tokens: あり (with spouse) / なし (none).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "あり" => Some(Self::WithSpouse),
            "なし" => Some(Self::Single),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WithSpouse => "あり",
            Self::Single => "なし",
        }
    }
}

/// One employee's demographic and compensation inputs, already tokenized and
/// validated by [`EmployeeInput::from_fields`](crate::input).
///
/// Field order in the wire format (schema v1) is fixed by position:
/// age, marital status, dependents count, region, living space, monthly
/// rent, monthly salary, annual bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    /// Age in years; at 40 and above the long-term-care insurance surcharge
    /// applies to the health-insurance premium.
    pub age: u32,
    pub marital_status: MaritalStatus,
    /// Number of dependent family members (index 7 of the withholding table
    /// means "7 or more").
    pub dependents: u32,
    /// Region name in kanji; resolved against the benefit-rate table at
    /// simulation time.
    pub region: String,
    /// Living space in tatami units.
    pub living_space: u32,
    /// Monthly rent in yen.
    pub monthly_rent: Decimal,
    /// Current monthly salary in yen, strictly positive.
    pub monthly_salary: Decimal,
    /// Annual bonus in yen.
    pub annual_bonus: Decimal,
}

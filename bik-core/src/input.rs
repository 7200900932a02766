//! Validation contract over the tokenized input fields.
//!
//! The messaging front end delivers an ordered list of exactly eight
//! string fields (schema v1):
//! age, marital status, dependents count, region, living space, monthly
//! rent, monthly salary, annual bonus. Historical variants with other
//! field orders are distinct schemas and are not accepted here. Every
//! failure is typed; nothing is coerced to zero.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::ValidationError;
use crate::models::{EmployeeInput, MaritalStatus};

/// Number of fields in the v1 input schema.
pub const FIELD_COUNT: usize = 8;

/// Returns true when every character is a CJK ideograph, the script the
/// region field must be written in.
fn is_kanji(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| ('\u{4E00}'..='\u{9FA0}').contains(&c))
}

fn parse_count(
    field: &'static str,
    value: &str,
) -> Result<u32, ValidationError> {
    value
        .parse::<u32>()
        .map_err(|_| ValidationError::NumberFormat {
            field,
            value: value.to_string(),
        })
}

fn parse_yen(
    field: &'static str,
    value: &str,
) -> Result<Decimal, ValidationError> {
    let amount = Decimal::from_str(value).map_err(|_| ValidationError::NumberFormat {
        field,
        value: value.to_string(),
    })?;
    if amount < Decimal::ZERO {
        return Err(ValidationError::NumberFormat {
            field,
            value: value.to_string(),
        });
    }
    Ok(amount)
}

impl EmployeeInput {
    /// Validates and types the eight positional fields.
    ///
    /// Checks run in the order the reference implementation surfaced them:
    /// field count, region script, living-space format, then the remaining
    /// typed parses. Whether the region is in the supported set is decided
    /// later by [`simulate`](crate::simulate), after the shape of the
    /// input is known to be good.
    pub fn from_fields(fields: &[&str]) -> Result<Self, ValidationError> {
        if fields.len() != FIELD_COUNT {
            return Err(ValidationError::FieldCount {
                expected: FIELD_COUNT,
                got: fields.len(),
            });
        }
        let fields: Vec<&str> = fields.iter().map(|f| f.trim()).collect();

        let region = fields[3];
        if !is_kanji(region) {
            return Err(ValidationError::RegionFormat(region.to_string()));
        }

        let space = fields[4];
        if space.is_empty() || !space.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::SpaceFormat(space.to_string()));
        }

        let age = parse_count("age", fields[0])?;
        let marital_status = MaritalStatus::parse(fields[1])
            .ok_or_else(|| ValidationError::MaritalFormat(fields[1].to_string()))?;
        let dependents = parse_count("dependents", fields[2])?;
        let living_space = parse_count("living space", space)?;
        let monthly_rent = parse_yen("monthly rent", fields[5])?;
        let monthly_salary = parse_yen("monthly salary", fields[6])?;
        if monthly_salary <= Decimal::ZERO {
            return Err(ValidationError::SalaryNotPositive(fields[6].to_string()));
        }
        let annual_bonus = parse_yen("annual bonus", fields[7])?;

        Ok(Self {
            age,
            marital_status,
            dependents,
            region: region.to_string(),
            living_space,
            monthly_rent,
            monthly_salary,
            annual_bonus,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const REFERENCE: [&str; 8] = [
        "35", "あり", "1", "東京都", "20", "100000", "300000", "600000",
    ];

    #[test]
    fn reference_fields_parse() {
        let input = EmployeeInput::from_fields(&REFERENCE).unwrap();
        assert_eq!(input.age, 35);
        assert_eq!(input.marital_status, MaritalStatus::WithSpouse);
        assert_eq!(input.dependents, 1);
        assert_eq!(input.region, "東京都");
        assert_eq!(input.living_space, 20);
        assert_eq!(input.monthly_rent, dec!(100000));
        assert_eq!(input.monthly_salary, dec!(300000));
        assert_eq!(input.annual_bonus, dec!(600000));
    }

    #[test]
    fn too_few_fields() {
        let err = EmployeeInput::from_fields(&REFERENCE[..7]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::FieldCount {
                expected: 8,
                got: 7
            }
        );
    }

    #[test]
    fn too_many_fields() {
        let mut fields = REFERENCE.to_vec();
        fields.push("extra");
        let err = EmployeeInput::from_fields(&fields).unwrap_err();
        assert_eq!(
            err,
            ValidationError::FieldCount {
                expected: 8,
                got: 9
            }
        );
    }

    #[test]
    fn region_must_be_kanji() {
        let mut fields = REFERENCE;
        fields[3] = "Tokyo";
        let err = EmployeeInput::from_fields(&fields).unwrap_err();
        assert_eq!(err, ValidationError::RegionFormat("Tokyo".to_string()));

        fields[3] = "東京23区";
        assert!(matches!(
            EmployeeInput::from_fields(&fields).unwrap_err(),
            ValidationError::RegionFormat(_)
        ));
    }

    #[test]
    fn living_space_must_be_a_digit_literal() {
        for bad in ["20.5", "-20", "二十", "20畳", ""] {
            let mut fields = REFERENCE;
            fields[4] = bad;
            let err = EmployeeInput::from_fields(&fields).unwrap_err();
            assert_eq!(err, ValidationError::SpaceFormat(bad.to_string()), "{bad}");
        }
    }

    #[test]
    fn numeric_fields_reject_garbage_instead_of_coercing() {
        let mut fields = REFERENCE;
        fields[0] = "thirty";
        assert!(matches!(
            EmployeeInput::from_fields(&fields).unwrap_err(),
            ValidationError::NumberFormat { field: "age", .. }
        ));

        let mut fields = REFERENCE;
        fields[5] = "-1";
        assert!(matches!(
            EmployeeInput::from_fields(&fields).unwrap_err(),
            ValidationError::NumberFormat {
                field: "monthly rent",
                ..
            }
        ));
    }

    #[test]
    fn salary_must_be_positive() {
        let mut fields = REFERENCE;
        fields[6] = "0";
        assert_eq!(
            EmployeeInput::from_fields(&fields).unwrap_err(),
            ValidationError::SalaryNotPositive("0".to_string())
        );
    }

    #[test]
    fn marital_status_tokens() {
        let mut fields = REFERENCE;
        fields[1] = "なし";
        let input = EmployeeInput::from_fields(&fields).unwrap();
        assert_eq!(input.marital_status, MaritalStatus::Single);

        fields[1] = "married";
        assert!(matches!(
            EmployeeInput::from_fields(&fields).unwrap_err(),
            ValidationError::MaritalFormat(_)
        ));
    }

    #[test]
    fn fields_are_trimmed() {
        let fields = [
            " 35 ", "あり", "1", "東京都", "20", "100000", " 300000", "600000 ",
        ];
        let input = EmployeeInput::from_fields(&fields).unwrap();
        assert_eq!(input.age, 35);
        assert_eq!(input.annual_bonus, dec!(600000));
    }

    #[test]
    fn unsupported_region_passes_format_validation() {
        // Script check accepts it; the supported-set check happens in the
        // comparison engine.
        let mut fields = REFERENCE;
        fields[3] = "大阪府";
        assert!(EmployeeInput::from_fields(&fields).is_ok());
    }
}

//! Per-region housing benefit valuation.
//!
//! The monthly in-kind value of company housing is assessed per tatami of
//! living space at a rate fixed by the prefecture of the workplace. Only
//! the Kanto prefectures of the canonical table are supported.

use rust_decimal::Decimal;

use crate::ValidationError;

/// Supported region names, long form, in canonical table order.
/// Enumerated in the [`ValidationError::UnsupportedRegion`] message.
pub const SUPPORTED_REGIONS: [&str; 7] = [
    "東京都",
    "神奈川県",
    "埼玉県",
    "千葉県",
    "茨城県",
    "群馬県",
    "栃木県",
];

/// Region name (long or short kanji form) → yen-per-tatami monthly benefit
/// valuation. The short form without the administrative suffix resolves to
/// the same rate as the long form.
const RATES: [(&str, &str, i64); 7] = [
    ("東京都", "東京", 2590),
    ("神奈川県", "神奈川", 2070),
    ("千葉県", "千葉", 1700),
    ("埼玉県", "埼玉", 1750),
    ("茨城県", "茨城", 1270),
    ("群馬県", "群馬", 1170),
    ("栃木県", "栃木", 1310),
];

/// Resolves a region name to its benefit rate.
///
/// Matching is exact and case-sensitive (the names are kanji). Fails with
/// [`ValidationError::UnsupportedRegion`] for any name outside the table;
/// the error message lists the supported set.
pub fn benefit_rate(region: &str) -> Result<Decimal, ValidationError> {
    RATES
        .iter()
        .find(|(long, short, _)| region == *long || region == *short)
        .map(|(_, _, rate)| Decimal::from(*rate))
        .ok_or_else(|| ValidationError::UnsupportedRegion {
            region: region.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn long_form_resolves() {
        assert_eq!(benefit_rate("東京都").unwrap(), dec!(2590));
        assert_eq!(benefit_rate("神奈川県").unwrap(), dec!(2070));
        assert_eq!(benefit_rate("千葉県").unwrap(), dec!(1700));
        assert_eq!(benefit_rate("埼玉県").unwrap(), dec!(1750));
        assert_eq!(benefit_rate("茨城県").unwrap(), dec!(1270));
        assert_eq!(benefit_rate("群馬県").unwrap(), dec!(1170));
        assert_eq!(benefit_rate("栃木県").unwrap(), dec!(1310));
    }

    #[test]
    fn short_form_resolves_to_same_rate() {
        for (long, short, _) in RATES {
            assert_eq!(
                benefit_rate(long).unwrap(),
                benefit_rate(short).unwrap(),
                "{long} vs {short}"
            );
        }
    }

    #[test]
    fn unsupported_region_is_rejected() {
        let err = benefit_rate("大阪府").unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedRegion {
                region: "大阪府".to_string()
            }
        );
    }

    #[test]
    fn unsupported_region_message_lists_supported_set() {
        let message = benefit_rate("大阪府").unwrap_err().to_string();
        for region in SUPPORTED_REGIONS {
            assert!(message.contains(region), "missing {region} in: {message}");
        }
    }

    #[test]
    fn matching_is_exact() {
        assert!(benefit_rate("東京都庁").is_err());
        assert!(benefit_rate("").is_err());
    }
}

//! Social-insurance premium brackets.
//!
//! Maps a monthly standard remuneration to the health-insurance premiums
//! (standard and with the long-term-care surcharge) and the employees'
//! pension premium. Rows are half-open `lower ≤ x < next.lower`; the final
//! row is open-ended, and the first row's lower bound is 0 so the table
//! covers the whole non-negative axis.

use rust_decimal::Decimal;

/// One bracket row: lower bound of the standard-remuneration interval and
/// the (health standard, health with long-term care, pension) premiums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialInsuranceRow {
    pub lower: i64,
    pub health_standard: i64,
    pub health_with_care: i64,
    pub pension: i64,
}

/// Monthly premiums selected for one standard remuneration and age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialInsurancePremiums {
    pub health_insurance: Decimal,
    pub pension: Decimal,
}

/// Age from which the long-term-care insurance surcharge applies.
pub const LONG_TERM_CARE_AGE: u32 = 40;

macro_rules! rows {
    ($(($lower:literal, $hs:literal, $hc:literal, $p:literal),)*) => {
        [$(SocialInsuranceRow {
            lower: $lower,
            health_standard: $hs,
            health_with_care: $hc,
            pension: $p,
        },)*]
    };
}

/// The canonical premium table, ordered by lower bound.
static ROWS: [SocialInsuranceRow; 50] = rows![
    (0, 2871, 3326, 8052),
    (63000, 3366, 3899, 8052),
    (73000, 3861, 4473, 8052),
    (83000, 4356, 5046, 8052),
    (93000, 4851, 5620, 8967),
    (101000, 5148, 5964, 9516),
    (107000, 5445, 6308, 10065),
    (114000, 5841, 6767, 10797),
    (122000, 6237, 7226, 11529),
    (130000, 6633, 7684, 12261),
    (138000, 7029, 8143, 12993),
    (146000, 7425, 8602, 13725),
    (155000, 7920, 9176, 14640),
    (165000, 8415, 9749, 15555),
    (175000, 8910, 10323, 16470),
    (185000, 9405, 10896, 17385),
    (195000, 9900, 11470, 18300),
    (210000, 10890, 12617, 20130),
    (230000, 11880, 13764, 21960),
    (250000, 12870, 14911, 23790),
    (270000, 13860, 16058, 25620),
    (290000, 14850, 17205, 27450),
    (310000, 15840, 18352, 29280),
    (330000, 16830, 19499, 31110),
    (350000, 17820, 20646, 32940),
    (370000, 18810, 21793, 34770),
    (395000, 20295, 23513, 37515),
    (425000, 21780, 25324, 40260),
    (455000, 23265, 26954, 43005),
    (485000, 24750, 28675, 45750),
    (515000, 26235, 30395, 48495),
    (545000, 27720, 32116, 51240),
    (575000, 29205, 33836, 53985),
    (605000, 30690, 35557, 56730),
    (635000, 32175, 37277, 56730),
    (665000, 33660, 38998, 56730),
    (695000, 35145, 40718, 56730),
    (730000, 37125, 43012, 56730),
    (770000, 39105, 45306, 56730),
    (810000, 41085, 47600, 56730),
    (855000, 43560, 50468, 56730),
    (905000, 46035, 53335, 56730),
    (955000, 48510, 56203, 56730),
    (1005000, 50985, 59070, 56730),
    (1055000, 53955, 62511, 56730),
    (1115000, 56925, 65952, 56730),
    (1175000, 59895, 69393, 56730),
    (1235000, 62865, 72834, 56730),
    (1295000, 65835, 76275, 56730),
    (1355000, 68805, 79716, 56730),
];

/// Returns the bracket row covering `standard_remuneration`.
fn row_for(standard_remuneration: Decimal) -> &'static SocialInsuranceRow {
    let idx = ROWS
        .partition_point(|row| Decimal::from(row.lower) <= standard_remuneration)
        .saturating_sub(1);
    &ROWS[idx]
}

/// Looks up the monthly premiums for a standard remuneration.
///
/// Health insurance uses the long-term-care column from age 40; the pension
/// premium is bracket-selected independent of age.
pub fn lookup(
    standard_remuneration: Decimal,
    age: u32,
) -> SocialInsurancePremiums {
    let row = row_for(standard_remuneration);
    let health = if age < LONG_TERM_CARE_AGE {
        row.health_standard
    } else {
        row.health_with_care
    };
    SocialInsurancePremiums {
        health_insurance: Decimal::from(health),
        pension: Decimal::from(row.pension),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rows_are_ordered_and_non_overlapping() {
        for pair in ROWS.windows(2) {
            assert!(pair[0].lower < pair[1].lower);
        }
        assert_eq!(ROWS[0].lower, 0);
    }

    #[test]
    fn boundary_is_half_open() {
        // 289999 sits in [270000, 290000); 290000 starts the next row.
        let below = lookup(dec!(289999), 35);
        let at = lookup(dec!(290000), 35);
        assert_eq!(below.health_insurance, dec!(13860));
        assert_eq!(below.pension, dec!(25620));
        assert_eq!(at.health_insurance, dec!(14850));
        assert_eq!(at.pension, dec!(27450));
    }

    #[test]
    fn first_row_covers_low_salaries() {
        let premiums = lookup(dec!(0), 30);
        assert_eq!(premiums.health_insurance, dec!(2871));
        assert_eq!(premiums.pension, dec!(8052));

        let premiums = lookup(dec!(62999), 30);
        assert_eq!(premiums.health_insurance, dec!(2871));
    }

    #[test]
    fn final_row_is_open_ended() {
        let top = lookup(dec!(1355000), 30);
        assert_eq!(top.health_insurance, dec!(68805));
        assert_eq!(top.pension, dec!(56730));
        assert_eq!(lookup(dec!(10000000), 30), top);
    }

    #[test]
    fn long_term_care_applies_from_age_40() {
        let standard = lookup(dec!(300000), 39);
        let with_care = lookup(dec!(300000), 40);
        assert_eq!(standard.health_insurance, dec!(14850));
        assert_eq!(with_care.health_insurance, dec!(17205));
        // Pension is age-independent.
        assert_eq!(standard.pension, with_care.pension);
    }

    #[test]
    fn premiums_never_decrease_with_remuneration() {
        let mut prev = lookup(dec!(0), 45);
        for step in 1..300 {
            let current = lookup(Decimal::from(step * 5000), 45);
            assert!(current.health_insurance >= prev.health_insurance);
            assert!(current.pension >= prev.pension);
            prev = current;
        }
    }
}

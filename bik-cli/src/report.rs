//! Text rendering of a simulation result.
//!
//! Produces the fixed labeled sections the messaging channel sends back to
//! the employee: effect summary, basic info, before profile, after profile,
//! and the developer-check parameters. Monetary values are floored to whole
//! yen before formatting; fractional yen never reach the output.

use bik_core::calculations::profile::COMPANY_RENT_SHARE;
use bik_core::calculations::{ResidentTaxDeductions, salary_income_deduction};
use bik_core::{EmployeeInput, MaritalStatus, PayrollProfile, SimulationResult};
use rust_decimal::Decimal;

/// Formats a yen amount: floored, no fraction, no separators.
fn yen(amount: Decimal) -> String {
    amount.floor().normalize().to_string()
}

fn effect_summary(result: &SimulationResult) -> String {
    format!(
        "【シミュレーション結果】\n\n\
         制度を導入すると最大で毎月{effect}円多く手元に残るようになります。\n\n\
         内訳\n\
         ・1ヶ月後 所得税分Start\n→　{income_tax}円 UP!\n\
         ・4ヶ月後 社会保険分Start\n→　{social}円 UP!\n\
         ・翌年度以降 住民税分Start\n→最大　{resident}円 UP!\n\n\
         ※1:住民税分は導入時期によって変動します。\n\
         ※2:簡易シミュレーションのため、実際の数値とは多少の誤差が発生します。",
        effect = yen(result.effect),
        income_tax = yen(result.delta_income_tax),
        social = yen(result.delta_social_insurance),
        resident = yen(result.delta_resident_tax),
    )
}

fn basic_info(
    input: &EmployeeInput,
    result: &SimulationResult,
) -> String {
    format!(
        "【基本情報】\n\n\
         年齢：{age}歳\n\
         配偶者：{marital}\n\
         扶養家族：{dependents}人\n\
         勤務地の都道府県：{region}\n\n\
         家賃：{rent}円\n\
         自宅の居住空間の広さ：{space}畳\n\
         {region}の住宅利益：1畳あたり{rate}円\n\
         現物支給額換算：{in_kind}円",
        age = input.age,
        marital = input.marital_status.as_str(),
        dependents = input.dependents,
        region = input.region,
        rent = yen(input.monthly_rent),
        space = input.living_space,
        rate = yen(result.benefit_rate),
        in_kind = yen(result.in_kind_benefit),
    )
}

fn profile_lines(profile: &PayrollProfile) -> String {
    format!(
        "月額給与：{salary}円\n\
         年間賞与：{bonus}円\n\
         年収：{annual}円\n\n\
         健康保険料：{health}円\n\
         厚生年金保険料：{pension}円\n\
         所得税：{income_tax}円\n\
         住民税：{resident_tax}円\n\
         社保、税金、家賃控除後の可処分所得：{disposable}円",
        salary = yen(profile.monthly_salary),
        bonus = yen(profile.annual_bonus),
        annual = yen(profile.annual_income),
        health = yen(profile.health_insurance),
        pension = yen(profile.pension),
        income_tax = yen(profile.income_tax),
        resident_tax = yen(profile.resident_tax),
        disposable = yen(profile.disposable_income),
    )
}

fn before_section(result: &SimulationResult) -> String {
    format!("【導入前】\n\n{}", profile_lines(&result.before))
}

fn after_section(
    input: &EmployeeInput,
    result: &SimulationResult,
) -> String {
    let company_share = input.monthly_rent * COMPANY_RENT_SHARE;
    format!(
        "【導入後】\n\n\
         会社負担家賃（家賃×0.8）：{company}円\n\
         本人負担家賃（家賃×0.2）：{own}円\n\n\
         {profile}\n\n\
         導入効果：{effect}円",
        company = yen(company_share),
        own = yen(result.after.rent_borne),
        profile = profile_lines(&result.after),
        effect = yen(result.effect),
    )
}

fn developer_parameters(
    input: &EmployeeInput,
    result: &SimulationResult,
) -> String {
    let deductions = ResidentTaxDeductions::default();
    let spousal = if input.marital_status == MaritalStatus::WithSpouse {
        deductions.spousal
    } else {
        Decimal::ZERO
    };
    let income_deduction = deductions.basic
        + spousal
        + deductions.per_dependent * Decimal::from(input.dependents)
        + result.before.annual_social_insurance();
    format!(
        "【開発確認用パラメータ】\n\n\
         年収：{annual}円\n\
         給与所得控除：{salary_deduction}円\n\
         所得控除：{income_deduction}円\n\
         住民税年額：{resident_tax_yearly}円\n\
         住民税月額：{resident_tax}円\n\n\
         所得税差分：{delta_income_tax}円\n\
         社会保険料差分：{delta_social}円\n\
         住民税差分：{delta_resident}円\n\
         可処分所得増加分の検算：{recheck}円",
        annual = yen(result.before.annual_income),
        salary_deduction = yen(salary_income_deduction(result.before.annual_income)),
        income_deduction = yen(income_deduction),
        resident_tax_yearly = yen(result.before.resident_tax * Decimal::from(12)),
        resident_tax = yen(result.before.resident_tax),
        delta_income_tax = yen(result.delta_income_tax),
        delta_social = yen(result.delta_social_insurance),
        delta_resident = yen(result.delta_resident_tax),
        recheck = yen(result.effect_recheck),
    )
}

/// Renders the full report: all five sections separated by blank lines.
pub fn render(
    input: &EmployeeInput,
    result: &SimulationResult,
) -> String {
    [
        effect_summary(result),
        basic_info(input, result),
        before_section(result),
        after_section(input, result),
        developer_parameters(input, result),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use bik_core::simulate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

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
    fn yen_floors_and_drops_the_fraction() {
        assert_eq!(yen(dec!(141440)), "141440");
        assert_eq!(yen(dec!(141440.9)), "141440");
        assert_eq!(yen(dec!(650000.0)), "650000");
    }

    #[test]
    fn report_contains_all_sections_and_reference_figures() {
        let input = reference_input();
        let result = simulate(&input).unwrap();
        let report = render(&input, &result);

        for section in [
            "【シミュレーション結果】",
            "【基本情報】",
            "【導入前】",
            "【導入後】",
            "【開発確認用パラメータ】",
        ] {
            assert!(report.contains(section), "missing {section}");
        }
        assert!(report.contains("毎月11448円多く"));
        assert!(report.contains("現物支給額換算：51800円"));
        // Twelve months of the 11020-yen monthly figure.
        assert!(report.contains("住民税年額：132240円"));
        assert!(report.contains("住民税月額：11020円"));
        assert!(report.contains("会社負担家賃（家賃×0.8）：80000円"));
        assert!(report.contains("可処分所得増加分の検算：11448円"));
    }

    #[test]
    fn fractional_rent_never_emits_fractional_yen() {
        let mut input = reference_input();
        input.monthly_rent = dec!(100001);
        let result = simulate(&input).unwrap();
        // Restructured salary is 100001 * 0.8 = 80000.8 below the input.
        assert_eq!(result.after.monthly_salary, dec!(219999.2));
        let report = render(&input, &result);
        assert!(report.contains("月額給与：219999円"));
        assert!(!report.contains("219999.2"), "fractional yen leaked");
        assert!(report.contains("会社負担家賃（家賃×0.8）：80000円"));
    }
}

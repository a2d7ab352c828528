//! Statutory wage base aggregation.
//!
//! Payment fields flagged for EPF or ESI feed their values into a wage base
//! map keyed by field id. These helpers reduce such a map to the wage base
//! each statutory rule is computed on.

use rust_decimal::Decimal;

use crate::models::{EpfRule, EsiRule, WageContributions};

use super::{EPF_RESTRICT_VALUE, ESI_MAX_LIMIT, to_fixed_3};

// Saturates so an oversized wage base stays above every cap and ceiling.
fn sum(values: &WageContributions) -> Decimal {
    values
        .values()
        .fold(Decimal::ZERO, |total, value| total.saturating_add(*value))
}

/// Returns the PF wage base for a set of contributions.
///
/// When the rule restricts contributions, a sum at or above the cap
/// (`employee_restrict_value`, defaulting to [`EPF_RESTRICT_VALUE`]) is
/// replaced by the cap. Otherwise the sum is returned rounded to three
/// places.
///
/// # Examples
///
/// ```
/// use payroll_components::calculation::get_value_for_epf;
/// use payroll_components::models::{EpfRule, WageContributions};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let epf = EpfRule {
///     id: Uuid::nil(),
///     epf_number: None,
///     employee_contribution: None,
///     restrict_employee_contribution: true,
///     employee_restrict_value: None,
/// };
/// let values = WageContributions::from([
///     (Uuid::from_u128(1), Decimal::from(20_000)),
///     (Uuid::from_u128(2), Decimal::from(2_000)),
/// ]);
///
/// assert_eq!(get_value_for_epf(Some(&epf), &values), Decimal::from(15_000));
/// ```
pub fn get_value_for_epf(epf: Option<&EpfRule>, values: &WageContributions) -> Decimal {
    let total = sum(values);

    if let Some(epf) = epf.filter(|epf| epf.restrict_employee_contribution) {
        let cap = epf.employee_restrict_value.unwrap_or(EPF_RESTRICT_VALUE);
        if total >= cap {
            return cap;
        }
    }

    to_fixed_3(total)
}

/// Returns the ESI wage base for a set of contributions.
///
/// An employee whose wages exceed the ceiling (`max_limit`, defaulting to
/// [`ESI_MAX_LIMIT`]) is not covered by ESI at all, so the wage base is zero
/// rather than clamped.
pub fn get_value_for_esi(esi: Option<&EsiRule>, values: &WageContributions) -> Decimal {
    let total = sum(values);
    let max_limit = esi.and_then(|esi| esi.max_limit).unwrap_or(ESI_MAX_LIMIT);

    if total > max_limit {
        return Decimal::ZERO;
    }

    to_fixed_3(total)
}

/// Returns the gross wage used as the professional tax base.
pub fn get_gross_value(values: &WageContributions) -> Decimal {
    sum(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn contributions(values: &[&str]) -> WageContributions {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (Uuid::from_u128(i as u128 + 1), dec(v)))
            .collect()
    }

    fn create_epf(restrict: bool, cap: Option<&str>) -> EpfRule {
        EpfRule {
            id: Uuid::from_u128(10),
            epf_number: None,
            employee_contribution: None,
            restrict_employee_contribution: restrict,
            employee_restrict_value: cap.map(dec),
        }
    }

    fn create_esi(max_limit: Option<&str>) -> EsiRule {
        EsiRule {
            id: Uuid::from_u128(20),
            esi_number: None,
            employee_contribution: None,
            max_limit: max_limit.map(dec),
        }
    }

    #[test]
    fn test_oversized_wage_base_stays_above_cap_and_ceiling() {
        let values = contributions(&[
            "79228162514264337593543950335",
            "79228162514264337593543950335",
        ]);
        let epf = create_epf(true, None);
        let esi = create_esi(None);

        assert_eq!(get_value_for_epf(Some(&epf), &values), EPF_RESTRICT_VALUE);
        assert_eq!(get_value_for_esi(Some(&esi), &values), Decimal::ZERO);
        assert_eq!(get_gross_value(&values), Decimal::MAX);
    }

    #[test]
    fn test_epf_unrestricted_returns_sum() {
        let epf = create_epf(false, None);
        let values = contributions(&["20000", "5000.1234"]);
        assert_eq!(
            get_value_for_epf(Some(&epf), &values).to_string(),
            "25000.123"
        );
    }

    #[test]
    fn test_epf_restricted_caps_at_default() {
        let epf = create_epf(true, None);
        let values = contributions(&["20000", "5000"]);
        assert_eq!(get_value_for_epf(Some(&epf), &values), dec("15000"));
    }

    #[test]
    fn test_epf_restricted_at_exact_cap_returns_cap() {
        let epf = create_epf(true, Some("18000"));
        let values = contributions(&["18000"]);
        assert_eq!(get_value_for_epf(Some(&epf), &values), dec("18000"));
    }

    #[test]
    fn test_epf_restricted_below_cap_returns_sum() {
        let epf = create_epf(true, Some("18000"));
        let values = contributions(&["10000", "2500"]);
        assert_eq!(
            get_value_for_epf(Some(&epf), &values).to_string(),
            "12500.000"
        );
    }

    #[test]
    fn test_epf_without_rule_returns_sum() {
        let values = contributions(&["20000", "5000"]);
        assert_eq!(get_value_for_epf(None, &values), dec("25000"));
    }

    #[test]
    fn test_empty_contributions_are_zero() {
        let values = WageContributions::new();
        assert_eq!(get_value_for_epf(None, &values).to_string(), "0.000");
        assert_eq!(get_value_for_esi(None, &values).to_string(), "0.000");
        assert_eq!(get_gross_value(&values), Decimal::ZERO);
    }

    #[test]
    fn test_esi_at_ceiling_is_covered() {
        let esi = create_esi(None);
        let values = contributions(&["15000", "6000"]);
        assert_eq!(get_value_for_esi(Some(&esi), &values), dec("21000"));
    }

    #[test]
    fn test_esi_above_ceiling_is_zero() {
        let esi = create_esi(None);
        let values = contributions(&["15000", "6000.01"]);
        assert_eq!(get_value_for_esi(Some(&esi), &values), Decimal::ZERO);
    }

    #[test]
    fn test_esi_configured_ceiling() {
        let esi = create_esi(Some("25000"));
        let values = contributions(&["15000", "8000"]);
        assert_eq!(get_value_for_esi(Some(&esi), &values), dec("23000"));
    }

    #[test]
    fn test_gross_value_is_plain_sum() {
        let values = contributions(&["15000", "6000", "4000.5"]);
        assert_eq!(get_gross_value(&values), dec("25000.5"));
    }
}

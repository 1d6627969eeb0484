use super::domain::CommercialAssumptions;
use super::sanitize::safe_divide;

/// Flat annual escalator applied to savings in the five-year projection.
pub const SAVINGS_ESCALATOR: f64 = 1.02;
pub const PROJECTION_YEARS: i32 = 5;
/// Shortest payback reported when the program pays back at all.
pub const MIN_PAYBACK_MONTHS: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommercialOutcome {
    pub pricing_facilities: f64,
    pub implementation_cost: f64,
    pub annual_subscription: f64,
    pub year_one_gross_savings: f64,
    pub year_one_net_gain: f64,
    pub year_one_roi_percent: f64,
    pub payback_months: f64,
    pub five_year_value: f64,
}

/// Billed facilities: the contracted override when present, otherwise the
/// operational count.
pub fn pricing_facilities(commercial: &CommercialAssumptions, total_facilities: f64) -> f64 {
    commercial
        .contracted_facilities
        .unwrap_or(total_facilities)
        .max(0.0)
        .floor()
}

/// Undiscounted five-year value with a 2%/yr savings escalator.
pub fn five_year_value(
    total_annual_savings: f64,
    annual_subscription: f64,
    implementation_cost: f64,
) -> f64 {
    (0..PROJECTION_YEARS)
        .map(|year| total_annual_savings * SAVINGS_ESCALATOR.powi(year) - annual_subscription)
        .sum::<f64>()
        - implementation_cost
}

pub fn payback_months(
    implementation_cost: f64,
    year_one_gross_savings: f64,
    annual_subscription: f64,
) -> f64 {
    let net_annual_benefit = (year_one_gross_savings - annual_subscription).max(0.0);
    let raw = safe_divide(implementation_cost, safe_divide(net_annual_benefit, 12.0));
    if raw > 0.0 {
        raw.max(MIN_PAYBACK_MONTHS)
    } else {
        0.0
    }
}

pub fn evaluate_commercial(
    commercial: &CommercialAssumptions,
    total_facilities: f64,
    total_annual_savings: f64,
    year_one_ramp_share: f64,
) -> CommercialOutcome {
    let pricing_facilities = pricing_facilities(commercial, total_facilities);

    let implementation_cost = commercial.implementation_base_cost.max(0.0)
        + pricing_facilities * commercial.implementation_cost_per_facility.max(0.0);
    let annual_subscription =
        pricing_facilities * commercial.annual_subscription_per_facility.max(0.0);

    let year_one_gross_savings = total_annual_savings * year_one_ramp_share;
    let year_one_net_gain = year_one_gross_savings - implementation_cost - annual_subscription;
    let year_one_roi_percent =
        safe_divide(year_one_net_gain, implementation_cost + annual_subscription) * 100.0;

    CommercialOutcome {
        pricing_facilities,
        implementation_cost,
        annual_subscription,
        year_one_gross_savings,
        year_one_net_gain,
        year_one_roi_percent,
        payback_months: payback_months(
            implementation_cost,
            year_one_gross_savings,
            annual_subscription,
        ),
        five_year_value: five_year_value(
            total_annual_savings,
            annual_subscription,
            implementation_cost,
        ),
    }
}

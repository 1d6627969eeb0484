use super::domain::{EnterpriseAddOns, FacilityTierInputs, LaborTierAssumptions, RoiInputs};
use super::sanitize::{non_negative, safe_divide, whole_count, EPSILON};
use serde::{Deserialize, Serialize};

/// Network strength used for every quick-mode estimate.
pub const QUICK_MODE_LOG_FACTOR: f64 = 0.15;
const QUICK_MODE_OPERATING_DAYS: f64 = 365.0;
const HOURS_PER_FTE_YEAR: f64 = 2080.0;
const MIN_FTE_ANNUAL_COST: f64 = 60_000.0;
const FALLBACK_SHIFTS_PER_DAY: f64 = 4.0;

/// Six-field input surface for the simplified calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickModeInputs {
    pub facilities: f64,
    #[serde(alias = "trucks_per_day_per_facility")]
    pub shipments_per_day_per_facility: f64,
    #[serde(alias = "avg_dwell_time_minutes")]
    pub avg_dwell_minutes: f64,
    pub detention_cost_per_hour: f64,
    pub labor_cost_per_hour: f64,
    pub gate_staff_per_facility: f64,
}

impl Default for QuickModeInputs {
    fn default() -> Self {
        Self {
            facilities: 50.0,
            shipments_per_day_per_facility: 150.0,
            avg_dwell_minutes: 55.0,
            detention_cost_per_hour: 75.0,
            labor_cost_per_hour: 28.0,
            gate_staff_per_facility: 4.0,
        }
    }
}

/// Maps quick-mode fields onto the canonical baseline: every facility lands
/// in the XL tier, the other tiers are emptied, and all enterprise add-ons
/// are switched off.
pub fn from_quick_mode(quick: &QuickModeInputs) -> RoiInputs {
    let base = RoiInputs::default();

    let shifts_per_day = match base.labor.tiers.xl.shifts_per_day.round() {
        shifts if shifts > 0.0 => shifts,
        _ => FALLBACK_SHIFTS_PER_DAY,
    }
    .max(1.0);
    let guard_fte_per_shift =
        safe_divide(non_negative(quick.gate_staff_per_facility), shifts_per_day);

    let mut inputs = base;

    inputs.tiers.xl = FacilityTierInputs {
        count: whole_count(quick.facilities),
        shipments_per_day: non_negative(quick.shipments_per_day_per_facility),
        operating_days_per_year: QUICK_MODE_OPERATING_DAYS,
        dc_fte_annual_cost: (quick.labor_cost_per_hour * HOURS_PER_FTE_YEAR)
            .max(MIN_FTE_ANNUAL_COST),
    };
    for tier in [&mut inputs.tiers.l, &mut inputs.tiers.m, &mut inputs.tiers.s] {
        tier.count = 0.0;
    }

    inputs.labor.tiers.xl = LaborTierAssumptions {
        shifts_per_day,
        guard_fte_per_shift,
        ..base.labor.tiers.xl
    };
    for labor in [
        &mut inputs.labor.tiers.l,
        &mut inputs.labor.tiers.m,
        &mut inputs.labor.tiers.s,
    ] {
        labor.shifts_per_day = 0.0;
        labor.guard_fte_per_shift = 0.0;
        labor.dock_office_fte_per_shift = 0.0;
    }

    inputs.detention.cost_per_hour_detention = non_negative(quick.detention_cost_per_hour);

    let dwell_minutes = if quick.avg_dwell_minutes.is_finite() && quick.avg_dwell_minutes != 0.0 {
        quick.avg_dwell_minutes
    } else {
        base.throughput.avg_gate_in_to_out_minutes
    };
    inputs.throughput.avg_gate_in_to_out_minutes = dwell_minutes.max(EPSILON);

    inputs.network.log_factor = QUICK_MODE_LOG_FACTOR;
    inputs.enterprise_add_ons = EnterpriseAddOns::default();

    inputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_anchored_on_canonical_assumptions() {
        let inputs = from_quick_mode(&QuickModeInputs::default());

        assert_eq!(inputs.tiers.xl.count, 50.0);
        assert_eq!(inputs.tiers.xl.shipments_per_day, 150.0);
        assert_eq!(inputs.tiers.xl.operating_days_per_year, 365.0);
        assert_eq!(inputs.tiers.xl.dc_fte_annual_cost, 60_000.0);
        assert_eq!(inputs.tiers.l.count, 0.0);
        assert_eq!(inputs.tiers.s.count, 0.0);

        assert_eq!(inputs.throughput.reduce_check_in_minutes, 5.0);
        assert_eq!(inputs.throughput.reduce_check_out_minutes, 5.0);
        assert_eq!(inputs.throughput.avg_gate_in_to_out_minutes, 55.0);
        assert_eq!(inputs.throughput.incremental_margin_per_truck, 500.0);
        assert_eq!(inputs.commercial.annual_subscription_per_facility, 8_000.0);
        assert_eq!(inputs.commercial.implementation_cost_per_facility, 2_500.0);
        assert_eq!(inputs.detention.cost_per_hour_detention, 75.0);
        assert_eq!(inputs.network.log_factor, QUICK_MODE_LOG_FACTOR);
    }

    #[test]
    fn gate_staff_is_spread_across_shifts() {
        let inputs = from_quick_mode(&QuickModeInputs {
            gate_staff_per_facility: 6.0,
            ..QuickModeInputs::default()
        });
        assert_eq!(inputs.labor.tiers.xl.shifts_per_day, 4.0);
        assert_eq!(inputs.labor.tiers.xl.guard_fte_per_shift, 1.5);
        assert_eq!(inputs.labor.tiers.m.shifts_per_day, 0.0);
        assert_eq!(inputs.labor.tiers.m.dock_office_fte_per_shift, 0.0);
    }

    #[test]
    fn high_labor_rate_raises_fte_cost() {
        let inputs = from_quick_mode(&QuickModeInputs {
            labor_cost_per_hour: 40.0,
            ..QuickModeInputs::default()
        });
        assert_eq!(inputs.tiers.xl.dc_fte_annual_cost, 83_200.0);
    }

    #[test]
    fn missing_dwell_falls_back_to_default_gate_time() {
        let inputs = from_quick_mode(&QuickModeInputs {
            avg_dwell_minutes: 0.0,
            facilities: -4.0,
            ..QuickModeInputs::default()
        });
        assert_eq!(inputs.throughput.avg_gate_in_to_out_minutes, 50.0);
        assert_eq!(inputs.tiers.xl.count, 0.0);
    }

    #[test]
    fn enterprise_add_ons_are_switched_off() {
        let inputs = from_quick_mode(&QuickModeInputs::default());
        assert_eq!(inputs.enterprise_add_ons, EnterpriseAddOns::default());
    }

    #[test]
    fn accepts_legacy_field_names() {
        let quick: QuickModeInputs =
            serde_json::from_str(r#"{ "facilities": 10, "trucks_per_day_per_facility": 90 }"#)
                .expect("legacy payload parses");
        assert_eq!(quick.facilities, 10.0);
        assert_eq!(quick.shipments_per_day_per_facility, 90.0);
        assert_eq!(quick.gate_staff_per_facility, 4.0);
    }
}

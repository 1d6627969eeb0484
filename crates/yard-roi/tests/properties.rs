//! Property tests for sanitization totality and scale monotonicity.

use proptest::prelude::*;
use serde_json::Value;

use yard_roi::roi::{
    calculate, calculate_scenario, from_quick_mode, ProfitMethod, QuickModeInputs, RoiInputs,
    ScenarioInputs,
};

fn hostile_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(0.0),
        Just(f64::MAX),
        -1.0e6..1.0e6f64,
        0.0..1.0f64,
        1.0e150..1.0e308f64,
    ]
}

fn assert_all_numbers_finite(value: &Value, path: &str) {
    match value {
        Value::Null => panic!("non-finite number serialized as null at {path}"),
        Value::Object(map) => {
            for (key, child) in map {
                assert_all_numbers_finite(child, &format!("{path}.{key}"));
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                assert_all_numbers_finite(child, &format!("{path}[{index}]"));
            }
        }
        _ => {}
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// Any numeric garbage yields a fully finite valuation.
    #[test]
    fn property_outputs_are_always_finite(
        count in hostile_f64(),
        shipments_per_day in hostile_f64(),
        operating_days in hostile_f64(),
        outbound_share in hostile_f64(),
        detention_hours in hostile_f64(),
        gate_minutes in hostile_f64(),
        log_factor in hostile_f64(),
        ramp in hostile_f64(),
        subscription in hostile_f64(),
        missed_deliveries in hostile_f64(),
    ) {
        let mut inputs = RoiInputs::default();
        inputs.tiers.xl.count = count;
        inputs.tiers.l.shipments_per_day = shipments_per_day;
        inputs.tiers.m.operating_days_per_year = operating_days;
        inputs.paper.outbound_share = outbound_share;
        inputs.detention.avg_detention_hours = detention_hours;
        inputs.throughput.avg_gate_in_to_out_minutes = gate_minutes;
        inputs.network.log_factor = log_factor;
        inputs.year_one_ramp_share = ramp;
        inputs.commercial.annual_subscription_per_facility = subscription;
        inputs.enterprise_add_ons.per_shipment.missed_deliveries = missed_deliveries;

        let outputs = calculate(&inputs);
        let json = serde_json::to_value(&outputs).expect("outputs serialize");
        assert_all_numbers_finite(&json, "outputs");

        for savings in [
            outputs.annual_labor_savings,
            outputs.paperless_savings,
            outputs.annual_detention_savings,
            outputs.throughput_value,
            outputs.base_savings,
            outputs.network_bonus_savings,
            outputs.total_annual_savings,
        ] {
            prop_assert!(savings >= 0.0);
        }
        prop_assert!(outputs.payback_months == 0.0 || outputs.payback_months >= 0.1);
        prop_assert!(outputs.network_multiplier >= 1.0);
        prop_assert!((0.0..=1.0).contains(&outputs.assumptions_used.year_one_ramp_share));
    }

    /// Scenario capacity and finance figures stay finite for any rates or profit basis.
    #[test]
    fn property_scenario_figures_are_always_finite(
        shipments_per_day in hostile_f64(),
        margin in hostile_f64(),
        outsourced in hostile_f64(),
        internal in hostile_f64(),
        discount_rate in hostile_f64(),
        growth_rate in hostile_f64(),
        avoided in any::<bool>(),
    ) {
        let mut inputs = ScenarioInputs::default();
        inputs.roi.tiers.xl.shipments_per_day = shipments_per_day;
        inputs.profit.method = if avoided {
            ProfitMethod::AvoidedOutsourcing
        } else {
            ProfitMethod::ContributionMargin
        };
        inputs.profit.contribution_margin_per_truckload = margin;
        inputs.profit.outsourced_cost_per_truckload = outsourced;
        inputs.profit.internal_variable_cost_per_truckload = internal;
        inputs.discount_rate = discount_rate;
        inputs.growth_rate = growth_rate;

        let scenario = calculate_scenario(&inputs);
        let json = serde_json::to_value(&scenario).expect("scenario serializes");
        assert_all_numbers_finite(&json, "scenario");

        prop_assert!(scenario.hard_savings_annual >= 0.0);
        prop_assert!(scenario.capacity.annual_profit_impact >= 0.0);
        prop_assert!(!scenario.warnings.iter().any(|warning| warning.ends_with("is not finite")));
    }

    /// Growing the network never lowers total annual savings.
    #[test]
    fn property_savings_monotonic_in_facilities(
        facilities in 0u32..5_000,
        extra in 1u32..5_000,
    ) {
        let at = |n: u32| {
            calculate(&from_quick_mode(&QuickModeInputs {
                facilities: f64::from(n),
                ..QuickModeInputs::default()
            }))
        };
        let smaller = at(facilities);
        let larger = at(facilities + extra);

        prop_assert!(larger.total_annual_savings >= smaller.total_annual_savings);
        prop_assert!(larger.network_multiplier >= smaller.network_multiplier);
        prop_assert!(larger.network_bonus_savings >= smaller.network_bonus_savings);
    }
}

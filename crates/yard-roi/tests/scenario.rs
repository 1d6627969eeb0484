use yard_roi::roi::{
    calculate, calculate_scenario, inputs_for_preset, EconomicsMode, ProfitAssumptions,
    ProfitMethod, ScenarioId, ScenarioInputs,
};

fn enterprise_expected(margin: f64) -> ScenarioInputs {
    ScenarioInputs {
        roi: inputs_for_preset(ScenarioId::Enterprise50, EconomicsMode::Expected),
        profit: ProfitAssumptions {
            method: ProfitMethod::ContributionMargin,
            contribution_margin_per_truckload: margin,
            ..ProfitAssumptions::default()
        },
        ..ScenarioInputs::default()
    }
}

#[test]
fn preset_scenario_reports_finite_capacity_and_finance() {
    let scenario = calculate_scenario(&enterprise_expected(500.0));

    assert_eq!(scenario.roi.total_facilities, 50.0);
    assert!(scenario.capacity.incremental_outbound_truckloads_per_year > 0.0);
    assert!(scenario.capacity.annual_profit_impact > 0.0);
    assert!(scenario.finance.five_year_npv.is_finite());
    assert!(scenario.hard_savings_annual >= 0.0);
    assert!(
        (scenario.capacity.annual_profit_impact
            - scenario.capacity.incremental_outbound_truckloads_per_year * 500.0)
            .abs()
            < 1e-6
    );
}

#[test]
fn scenario_matches_direct_valuation_on_the_same_margin() {
    let inputs = enterprise_expected(500.0);
    let direct = calculate(&inputs.roi);
    let wrapped = calculate_scenario(&inputs).roi;

    assert_eq!(wrapped, direct);
}

#[test]
fn profit_basis_flows_into_roi_throughput() {
    let cheap = calculate_scenario(&enterprise_expected(100.0));
    let rich = calculate_scenario(&enterprise_expected(900.0));

    assert!(rich.roi.throughput_value > cheap.roi.throughput_value);
    assert!(rich.capacity.annual_profit_impact > cheap.capacity.annual_profit_impact);
    assert_eq!(
        rich.capacity.incremental_outbound_truckloads_per_year,
        cheap.capacity.incremental_outbound_truckloads_per_year
    );
    assert_eq!(rich.hard_savings_annual, cheap.hard_savings_annual);
}

#[test]
fn single_site_pilot_delay_cost_is_a_quarter_of_year_one() {
    let mut inputs = enterprise_expected(500.0);
    inputs.roi = inputs_for_preset(ScenarioId::Pilot1, EconomicsMode::Conservative);
    let scenario = calculate_scenario(&inputs);

    assert_eq!(scenario.roi.network_bonus_savings, 0.0);
    assert_eq!(
        scenario.finance.cost_of_delay_90_days,
        scenario.roi.year_one_gross_savings / 4.0
    );
    assert_eq!(
        scenario.finance.savings_per_facility,
        scenario.roi.year_one_gross_savings
    );
}

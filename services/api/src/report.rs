use crate::infra::load_json_from_path;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use yard_roi::config::AppConfig;
use yard_roi::error::AppError;
use yard_roi::roi::{
    Assessment, EconomicsMode, IndustryPreset, PresetError, PresetSelection, QuickModeInputs,
    RoiEngine, RoiInputs, ScenarioId, ScenarioInputs, ScenarioOutputs,
};

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// JSON file holding a full or partial scenario
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the raw JSON result instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuickArgs {
    #[arg(long, default_value_t = 50.0)]
    pub(crate) facilities: f64,
    #[arg(long, default_value_t = 150.0)]
    pub(crate) shipments_per_day: f64,
    #[arg(long, default_value_t = 55.0)]
    pub(crate) avg_dwell_minutes: f64,
    #[arg(long, default_value_t = 75.0)]
    pub(crate) detention_cost_per_hour: f64,
    #[arg(long, default_value_t = 28.0)]
    pub(crate) labor_cost_per_hour: f64,
    #[arg(long, default_value_t = 4.0)]
    pub(crate) gate_staff: f64,
    /// retail, 3pl, manufacturing, food_bev or automotive; sets shipments/day
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Print the raw JSON result instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl QuickArgs {
    pub(crate) fn to_inputs(&self) -> Result<QuickModeInputs, PresetError> {
        let quick = QuickModeInputs {
            facilities: self.facilities,
            shipments_per_day_per_facility: self.shipments_per_day,
            avg_dwell_minutes: self.avg_dwell_minutes,
            detention_cost_per_hour: self.detention_cost_per_hour,
            labor_cost_per_hour: self.labor_cost_per_hour,
            gate_staff_per_facility: self.gate_staff,
        };
        match &self.industry {
            Some(raw) => Ok(raw.parse::<IndustryPreset>()?.apply(quick)),
            None => Ok(quick),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct PresetArgs {
    /// pilot_1, regional_10, enterprise_50 or enterprise_260
    #[arg(long, default_value = "enterprise_50")]
    pub(crate) scenario: String,
    /// conservative, expected or upside
    #[arg(long, default_value = "expected")]
    pub(crate) mode: String,
    /// Narrative adoption share; does not affect the valuation
    #[arg(long)]
    pub(crate) adoption_percent: Option<f64>,
    /// Print the raw JSON result instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScenarioArgs {
    /// JSON file holding ROI inputs, profit basis and finance rates
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the raw JSON result instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let inputs: RoiInputs = load_json_from_path(&args.input)?;
    let assessment = engine()?.assess(&inputs);

    if args.json {
        return print_json(&assessment);
    }
    println!("Scenario: {}", args.input.display());
    render_assessment(&assessment);
    Ok(())
}

pub(crate) fn run_quick(args: QuickArgs) -> Result<(), AppError> {
    let quick = args.to_inputs()?;
    let assessment = engine()?.assess_quick(&quick);

    if args.json {
        return print_json(&assessment);
    }
    println!(
        "Quick estimate: {:.0} facilities at {:.0} shipments/day",
        quick.facilities, quick.shipments_per_day_per_facility
    );
    render_assessment(&assessment);
    Ok(())
}

pub(crate) fn run_preset(args: PresetArgs) -> Result<(), AppError> {
    let selection = PresetSelection {
        scenario: args.scenario.parse::<ScenarioId>()?,
        mode: args.mode.parse::<EconomicsMode>()?,
        adoption_percent: args.adoption_percent,
    };
    let assessment = engine()?.assess_preset(&selection);

    if args.json {
        return print_json(&assessment);
    }
    println!(
        "Preset: {} / {} ({})",
        selection.scenario.label(),
        selection.mode.label(),
        selection.mode.description()
    );
    if let Some(adoption) = selection.adoption_percent {
        println!("Adoption narrative: {adoption:.0}% of the network (informational only)");
    }
    render_assessment(&assessment);
    Ok(())
}

pub(crate) fn run_scenario(args: ScenarioArgs) -> Result<(), AppError> {
    let inputs: ScenarioInputs = load_json_from_path(&args.input)?;
    let scenario = engine()?.assess_scenario(&inputs);

    if args.json {
        return print_json(&scenario);
    }
    println!("Scenario: {}", args.input.display());
    render_scenario(&scenario);
    Ok(())
}

fn engine() -> Result<RoiEngine, AppError> {
    let config = AppConfig::load()?;
    Ok(RoiEngine::new(config.advisory))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{json}");
    Ok(())
}

pub(crate) fn render_assessment(assessment: &Assessment) {
    let outputs = &assessment.outputs;

    println!(
        "Network: {:.0} facilities, {:.0} shipments/year",
        outputs.total_facilities, outputs.total_shipments_per_year
    );

    println!("\nAnnual savings");
    println!("  Labor:              {}", money(outputs.annual_labor_savings));
    println!("  Paperless:          {}", money(outputs.paperless_savings));
    println!("  Detention:          {}", money(outputs.annual_detention_savings));
    println!("  Throughput:         {}", money(outputs.throughput_value));
    println!("    incl. shipper of choice {}", money(outputs.shipper_of_choice_value));
    println!("  Base savings:       {}", money(outputs.base_savings));
    println!(
        "  Network bonus:      {} ({:.2}x)",
        money(outputs.network_bonus_savings),
        outputs.network_multiplier
    );
    println!("  Total:              {}", money(outputs.total_annual_savings));

    let breakdown = &outputs.network_effect_breakdown;
    if outputs.network_bonus_savings > 0.0 {
        println!(
            "\nNetwork effect (maturity {:.0}%)",
            breakdown.maturity_factor * 100.0
        );
        println!(
            "  Predictive intelligence: {}",
            money(breakdown.predictive_intelligence.planning_savings)
        );
        println!(
            "  Carrier benchmarking:    {}",
            money(breakdown.carrier_benchmarking.negotiation_leverage)
        );
        println!(
            "  Coordination:            {}",
            money(breakdown.coordination_efficiency.buffer_savings)
        );
        println!(
            "  Shared learning:         {}",
            money(breakdown.shared_learning.error_reduction)
        );
    }

    println!("\nCommercial");
    println!("  Implementation:     {}", money(outputs.implementation_cost));
    println!("  Subscription/yr:    {}", money(outputs.annual_subscription));
    println!("  Year-1 net gain:    {}", money(outputs.year_one_net_gain));
    println!("  Year-1 ROI:         {:.1}%", outputs.year_one_roi_percent);
    if outputs.payback_months > 0.0 {
        println!("  Payback:            {:.1} months", outputs.payback_months);
    } else {
        println!("  Payback:            not reached");
    }
    println!("  Five-year value:    {}", money(outputs.five_year_value));

    let advisory = &assessment.advisory;
    if advisory.is_clean() {
        println!("\nAdvisories: none");
        return;
    }
    println!("\nAdvisories");
    for error in &advisory.errors {
        println!("  [error] {error}");
    }
    for warning in &advisory.warnings {
        println!("  [warn]  {warning}");
    }
}

pub(crate) fn render_scenario(scenario: &ScenarioOutputs) {
    let roi = &scenario.roi;
    let capacity = &scenario.capacity;
    let finance = &scenario.finance;

    println!(
        "Network: {:.0} facilities, {:.0} shipments/year",
        roi.total_facilities, roi.total_shipments_per_year
    );
    println!("  Hard savings/yr:    {}", money(scenario.hard_savings_annual));
    println!("  Total savings/yr:   {}", money(roi.total_annual_savings));

    println!("\nCapacity unlocked");
    println!(
        "  Gate cycle:         {:.1} min, {:.1} min saved",
        capacity.baseline_cycle_time_minutes, capacity.minutes_saved_total
    );
    println!(
        "  Realized gain:      {:.2}% (theoretical {:.2}%)",
        capacity.realized_gain_pct * 100.0,
        capacity.theoretical_throughput_gain_pct * 100.0
    );
    println!(
        "  Extra truckloads:   {:.0}/yr ({:.0} in year 1)",
        capacity.incremental_outbound_truckloads_per_year, capacity.year_one_incremental_truckloads
    );
    println!("  Profit impact/yr:   {}", money(capacity.annual_profit_impact));

    println!("\nFinance");
    println!("  Year-1 cashflow:    {}", money(finance.year_one_cashflow));
    println!("  Five-year NPV:      {}", money(finance.five_year_npv));
    println!("  Cost of 90-day delay {}", money(finance.cost_of_delay_90_days));
    println!("  Savings per site:   {}", money(finance.savings_per_facility));

    if scenario.warnings.is_empty() {
        println!("\nWarnings: none");
        return;
    }
    println!("\nWarnings");
    for warning in &scenario.warnings {
        println!("  [warn]  {warning}");
    }
}

/// Whole-dollar amount with thousands separators.
pub(crate) fn money(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0.0), "$0");
        assert_eq!(money(999.4), "$999");
        assert_eq!(money(75_267_537.5), "$75,267,538");
        assert_eq!(money(-12_345.0), "-$12,345");
    }

    #[test]
    fn quick_args_map_every_field() {
        let args = QuickArgs {
            facilities: 8.0,
            shipments_per_day: 90.0,
            avg_dwell_minutes: 40.0,
            detention_cost_per_hour: 60.0,
            labor_cost_per_hour: 30.0,
            gate_staff: 2.0,
            industry: None,
            json: false,
        };
        let quick = args.to_inputs().expect("no industry given");
        assert_eq!(quick.facilities, 8.0);
        assert_eq!(quick.shipments_per_day_per_facility, 90.0);
        assert_eq!(quick.avg_dwell_minutes, 40.0);
        assert_eq!(quick.gate_staff_per_facility, 2.0);
    }

    #[test]
    fn unknown_industry_is_rejected() {
        let args = QuickArgs {
            facilities: 8.0,
            shipments_per_day: 90.0,
            avg_dwell_minutes: 40.0,
            detention_cost_per_hour: 60.0,
            labor_cost_per_hour: 30.0,
            gate_staff: 2.0,
            industry: Some("mining".to_string()),
            json: false,
        };
        assert_eq!(
            args.to_inputs(),
            Err(PresetError::UnknownIndustry("mining".to_string()))
        );
    }

    #[test]
    fn scenario_file_loads_and_renders() {
        let path = std::env::temp_dir()
            .join(format!("yard-roi-plan-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "discount_rate": 0.08, "growth_rate": 0.0 }"#)
            .expect("temp file written");
        let inputs: Result<ScenarioInputs, _> = load_json_from_path(&path);
        std::fs::remove_file(&path).ok();

        let inputs = inputs.expect("scenario loads");
        assert_eq!(inputs.discount_rate, 0.08);
        let scenario = RoiEngine::default().assess_scenario(&inputs);
        assert!(scenario.finance.five_year_npv > 0.0);
        render_scenario(&scenario);
    }

    #[test]
    fn missing_scenario_file_is_an_input_error() {
        let err = run_scenario(ScenarioArgs {
            input: std::env::temp_dir().join("yard-roi-absent-plan.json"),
            json: true,
        })
        .expect_err("file is absent");
        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let err = run_preset(PresetArgs {
            scenario: "metro_5".to_string(),
            mode: "expected".to_string(),
            adoption_percent: None,
            json: true,
        })
        .expect_err("unknown scenario");
        assert!(matches!(err, AppError::Preset(_)));
    }
}

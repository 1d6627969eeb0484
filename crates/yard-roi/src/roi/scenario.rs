//! Scenario valuation: a full ROI run priced on a chosen per-truckload profit
//! basis, plus the capacity it unlocks and a discounted finance view.

use super::advisory::{review, AdvisoryThresholds};
use super::calculate;
use super::components::{baseline_gate_minutes, minutes_saved, theoretical_gain};
use super::domain::{RoiInputs, ThroughputAssumptions};
use super::outputs::RoiOutputs;
use super::sanitize::{finite_or_zero, non_negative, safe_divide};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DISCOUNT_RATE: f64 = 0.10;
pub const DEFAULT_GROWTH_RATE: f64 = 0.02;
/// Growth is bounded to ±100% a year.
pub const MAX_GROWTH_RATE: f64 = 1.0;
const NPV_YEARS: i32 = 5;
const QUARTERS_PER_YEAR: f64 = 4.0;

/// How an incremental outbound truckload turns into profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitMethod {
    /// Contribution margin earned on each extra load.
    ContributionMargin,
    /// Outsourced cost avoided, net of the internal variable cost.
    AvoidedOutsourcing,
}

impl Default for ProfitMethod {
    fn default() -> Self {
        Self::ContributionMargin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitAssumptions {
    pub method: ProfitMethod,
    pub contribution_margin_per_truckload: f64,
    pub outsourced_cost_per_truckload: f64,
    pub internal_variable_cost_per_truckload: f64,
}

impl Default for ProfitAssumptions {
    fn default() -> Self {
        Self {
            method: ProfitMethod::default(),
            contribution_margin_per_truckload: ThroughputAssumptions::default()
                .incremental_margin_per_truck,
            outsourced_cost_per_truckload: 0.0,
            internal_variable_cost_per_truckload: 0.0,
        }
    }
}

impl ProfitAssumptions {
    /// Profit credited to each incremental truckload; never negative.
    pub fn per_truckload_profit(&self) -> f64 {
        match self.method {
            ProfitMethod::ContributionMargin => non_negative(self.contribution_margin_per_truckload),
            ProfitMethod::AvoidedOutsourcing => non_negative(
                self.outsourced_cost_per_truckload - self.internal_variable_cost_per_truckload,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    pub roi: RoiInputs,
    pub profit: ProfitAssumptions,
    pub discount_rate: f64,
    pub growth_rate: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            roi: RoiInputs::default(),
            profit: ProfitAssumptions::default(),
            discount_rate: DEFAULT_DISCOUNT_RATE,
            growth_rate: DEFAULT_GROWTH_RATE,
        }
    }
}

impl ScenarioInputs {
    /// ROI inputs with the throughput margin replaced by the profit basis, so
    /// the ROI throughput value and the capacity figures agree.
    pub fn priced_roi_inputs(&self) -> RoiInputs {
        let mut roi = self.roi;
        roi.throughput.incremental_margin_per_truck = self.profit.per_truckload_profit();
        roi
    }
}

/// Outbound truckloads the shorter gate cycle makes room for.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CapacityUnlocked {
    pub baseline_cycle_time_minutes: f64,
    pub minutes_saved_total: f64,
    pub theoretical_throughput_gain_pct: f64,
    pub realized_gain_pct: f64,
    pub current_outbound_truckloads_per_year: f64,
    pub incremental_outbound_truckloads_per_year: f64,
    pub annual_profit_impact: f64,
    pub year_one_incremental_truckloads: f64,
    pub year_one_profit_impact: f64,
}

impl CapacityUnlocked {
    /// Reads the sanitized assumptions echoed on `roi`.
    pub fn evaluate(roi: &RoiOutputs, per_truckload_profit: f64) -> Self {
        let throughput = &roi.assumptions_used.throughput;
        let theoretical = theoretical_gain(throughput);
        let realized = theoretical * throughput.realized_share;

        let current = roi.total_shipments_per_year * throughput.outbound_share;
        let incremental = current * realized;
        let year_one_incremental = incremental * roi.assumptions_used.year_one_ramp_share;

        Self {
            baseline_cycle_time_minutes: baseline_gate_minutes(throughput),
            minutes_saved_total: minutes_saved(throughput),
            theoretical_throughput_gain_pct: theoretical,
            realized_gain_pct: realized,
            current_outbound_truckloads_per_year: current,
            incremental_outbound_truckloads_per_year: incremental,
            annual_profit_impact: incremental * per_truckload_profit,
            year_one_incremental_truckloads: year_one_incremental,
            year_one_profit_impact: year_one_incremental * per_truckload_profit,
        }
    }

    fn finite(self) -> Self {
        Self {
            baseline_cycle_time_minutes: finite_or_zero(self.baseline_cycle_time_minutes),
            minutes_saved_total: finite_or_zero(self.minutes_saved_total),
            theoretical_throughput_gain_pct: finite_or_zero(self.theoretical_throughput_gain_pct),
            realized_gain_pct: finite_or_zero(self.realized_gain_pct),
            current_outbound_truckloads_per_year: finite_or_zero(
                self.current_outbound_truckloads_per_year,
            ),
            incremental_outbound_truckloads_per_year: finite_or_zero(
                self.incremental_outbound_truckloads_per_year,
            ),
            annual_profit_impact: finite_or_zero(self.annual_profit_impact),
            year_one_incremental_truckloads: finite_or_zero(self.year_one_incremental_truckloads),
            year_one_profit_impact: finite_or_zero(self.year_one_profit_impact),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinanceOutputs {
    pub year_one_cashflow: f64,
    pub five_year_npv: f64,
    pub cost_of_delay_90_days: f64,
    pub savings_per_facility: f64,
}

impl FinanceOutputs {
    pub fn evaluate(roi: &RoiOutputs, discount_rate: f64, growth_rate: f64) -> Self {
        Self {
            year_one_cashflow: roi.year_one_gross_savings - roi.annual_subscription,
            five_year_npv: five_year_npv(roi, discount_rate, growth_rate),
            cost_of_delay_90_days: roi.year_one_gross_savings / QUARTERS_PER_YEAR,
            savings_per_facility: safe_divide(roi.year_one_gross_savings, roi.total_facilities),
        }
    }

    fn finite(self) -> Self {
        Self {
            year_one_cashflow: finite_or_zero(self.year_one_cashflow),
            five_year_npv: finite_or_zero(self.five_year_npv),
            cost_of_delay_90_days: finite_or_zero(self.cost_of_delay_90_days),
            savings_per_facility: finite_or_zero(self.savings_per_facility),
        }
    }
}

/// Net present value over five years. Year 1 uses the ramped gross savings;
/// years 2 to 5 grow full run-rate savings by `growth_rate` each year. The
/// implementation cost is paid up front and the subscription every year.
pub fn five_year_npv(roi: &RoiOutputs, discount_rate: f64, growth_rate: f64) -> f64 {
    let year_one_cashflow = roi.year_one_gross_savings - roi.annual_subscription;
    let later_years = (2..=NPV_YEARS)
        .map(|year| {
            let cashflow = roi.total_annual_savings * (1.0 + growth_rate).powi(year - 1)
                - roi.annual_subscription;
            safe_divide(cashflow, (1.0 + discount_rate).powi(year))
        })
        .sum::<f64>();

    -roi.implementation_cost + safe_divide(year_one_cashflow, 1.0 + discount_rate) + later_years
}

fn discount_rate(raw: f64) -> f64 {
    non_negative(raw)
}

fn growth_rate(raw: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    raw.clamp(-MAX_GROWTH_RATE, MAX_GROWTH_RATE)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutputs {
    pub roi: RoiOutputs,
    /// Labor, paperless and detention savings; excludes throughput and network.
    pub hard_savings_annual: f64,
    pub capacity: CapacityUnlocked,
    pub finance: FinanceOutputs,
    /// Advisory warnings and errors, then any figure that had to be zeroed.
    pub warnings: Vec<String>,
}

pub fn calculate_scenario(inputs: &ScenarioInputs) -> ScenarioOutputs {
    calculate_scenario_with_thresholds(inputs, &AdvisoryThresholds::default())
}

pub fn calculate_scenario_with_thresholds(
    inputs: &ScenarioInputs,
    thresholds: &AdvisoryThresholds,
) -> ScenarioOutputs {
    let per_truckload_profit = inputs.profit.per_truckload_profit();
    let roi = calculate(&inputs.priced_roi_inputs());

    let hard_savings_annual =
        roi.annual_labor_savings + roi.paperless_savings + roi.annual_detention_savings;
    let capacity = CapacityUnlocked::evaluate(&roi, per_truckload_profit);
    let finance = FinanceOutputs::evaluate(
        &roi,
        discount_rate(inputs.discount_rate),
        growth_rate(inputs.growth_rate),
    );

    let advisory = review(&roi, thresholds);
    let mut warnings: Vec<String> = advisory
        .warnings
        .into_iter()
        .chain(advisory.errors)
        .collect();
    for (label, value) in [
        (
            "capacity.incremental_outbound_truckloads_per_year",
            capacity.incremental_outbound_truckloads_per_year,
        ),
        ("capacity.annual_profit_impact", capacity.annual_profit_impact),
        ("finance.five_year_npv", finance.five_year_npv),
        ("finance.cost_of_delay_90_days", finance.cost_of_delay_90_days),
    ] {
        if !value.is_finite() {
            warnings.push(format!("{label} is not finite"));
        }
    }

    ScenarioOutputs {
        roi,
        hard_savings_annual: finite_or_zero(hard_savings_annual),
        capacity: capacity.finite(),
        finance: finance.finite(),
        warnings,
    }
}

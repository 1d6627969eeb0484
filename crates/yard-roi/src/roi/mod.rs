//! Yard-automation ROI valuation.
//!
//! A valuation runs in fixed stages: sanitize the raw inputs, aggregate
//! facility and shipment volume, price each savings component, apply the
//! network effect, then derive the commercial outcome. Every stage is a pure
//! function of its inputs, so [`calculate`] is safe to call concurrently.

pub mod advisory;
pub mod aggregate;
pub mod commercial;
pub mod components;
pub mod domain;
pub mod industry;
pub mod network;
pub mod outputs;
pub mod presets;
pub mod quick;
pub mod sanitize;
pub mod scenario;

pub use advisory::{review, AdvisoryReport, AdvisoryThresholds};
pub use domain::{
    CommercialAssumptions, DetentionAssumptions, EnterpriseAddOnRates, EnterpriseAddOns,
    FacilityTier, FacilityTierInputs, LaborAssumptions, LaborTierAssumptions, NetworkAssumptions,
    PaperAssumptions, RoiInputs, ShipperOfChoiceAssumptions, ThroughputAssumptions, TierMap,
};
pub use industry::{industry_profiles, IndustryPreset, IndustryProfile};
pub use outputs::{
    CarrierBenchmarking, CoordinationEfficiency, EnterpriseAddOnOutputs, NetworkEffectBreakdown,
    PredictiveIntelligence, RoiOutputs, SharedLearning,
};
pub use presets::{
    catalog, inputs_for_preset, quick_inputs_for_preset, EconomicsMode, PresetCatalog,
    PresetError, PresetSelection, ScenarioId,
};
pub use quick::{from_quick_mode, QuickModeInputs, QUICK_MODE_LOG_FACTOR};
pub use sanitize::sanitize;
pub use scenario::{
    calculate_scenario, calculate_scenario_with_thresholds, CapacityUnlocked, FinanceOutputs,
    ProfitAssumptions, ProfitMethod, ScenarioInputs, ScenarioOutputs,
};

use aggregate::aggregate;
use commercial::evaluate_commercial;
use components::evaluate_components;
use network::{network_effect, reconcile};
use sanitize::finite_or_zero;

/// Values one scenario. Never fails: malformed numbers are sanitized first
/// and every reported figure, nested breakdowns included, is finite.
pub fn calculate(inputs: &RoiInputs) -> RoiOutputs {
    let inputs = sanitize(inputs);
    let volume = aggregate(&inputs);
    let components = evaluate_components(&inputs, &volume);
    let base_savings = components.base_savings();

    let network = network_effect(
        volume.total_facilities,
        volume.total_shipments_per_year,
        base_savings,
        inputs.network.log_factor,
    );
    let network_bonus_savings = finite_or_zero(network.bonus_savings);
    let network_effect_breakdown = reconcile(
        network.breakdown.finite(),
        network_bonus_savings,
        network.multiplier,
    );
    let total_annual_savings = base_savings + network_bonus_savings;

    let commercial = evaluate_commercial(
        &inputs.commercial,
        volume.total_facilities,
        total_annual_savings,
        inputs.year_one_ramp_share,
    );

    RoiOutputs {
        total_facilities: finite_or_zero(volume.total_facilities),
        total_shipments_per_year: finite_or_zero(volume.total_shipments_per_year),
        outbound_shipments_per_year: finite_or_zero(volume.outbound_shipments_per_year),

        annual_labor_savings: finite_or_zero(components.annual_labor_savings),
        paperless_savings: finite_or_zero(components.paperless_savings),
        annual_detention_savings: finite_or_zero(components.annual_detention_savings),
        throughput_value: finite_or_zero(components.throughput_value),
        shipper_of_choice_value: finite_or_zero(components.shipper_of_choice_value),

        base_savings: finite_or_zero(base_savings),
        network_multiplier: network.multiplier,
        network_bonus_savings,
        network_effect_breakdown,
        total_annual_savings: finite_or_zero(total_annual_savings),

        implementation_cost: finite_or_zero(commercial.implementation_cost),
        annual_subscription: finite_or_zero(commercial.annual_subscription),

        year_one_gross_savings: finite_or_zero(commercial.year_one_gross_savings),
        year_one_net_gain: finite_or_zero(commercial.year_one_net_gain),
        year_one_roi_percent: finite_or_zero(commercial.year_one_roi_percent),
        payback_months: finite_or_zero(commercial.payback_months),
        five_year_value: finite_or_zero(commercial.five_year_value),

        enterprise_add_ons: components.enterprise_add_ons.finite(),
        assumptions_used: inputs,
    }
}

/// Stateless facade bundling a valuation with its advisory review.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoiEngine {
    thresholds: AdvisoryThresholds,
}

/// A valuation together with the notes raised against it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Assessment {
    pub outputs: RoiOutputs,
    pub advisory: AdvisoryReport,
}

impl RoiEngine {
    pub fn new(thresholds: AdvisoryThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &AdvisoryThresholds {
        &self.thresholds
    }

    pub fn assess(&self, inputs: &RoiInputs) -> Assessment {
        let outputs = calculate(inputs);
        let advisory = review(&outputs, &self.thresholds);
        Assessment { outputs, advisory }
    }

    pub fn assess_quick(&self, quick: &QuickModeInputs) -> Assessment {
        self.assess(&from_quick_mode(quick))
    }

    pub fn assess_preset(&self, selection: &PresetSelection) -> Assessment {
        self.assess(&selection.inputs())
    }

    /// Scenario valuation; advisory notes land in `warnings`.
    pub fn assess_scenario(&self, inputs: &ScenarioInputs) -> ScenarioOutputs {
        calculate_scenario_with_thresholds(inputs, &self.thresholds)
    }
}

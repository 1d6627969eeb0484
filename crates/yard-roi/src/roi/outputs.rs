use super::domain::RoiInputs;
use super::sanitize::finite_or_zero;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictiveIntelligence {
    /// ETA accuracy gain, in percent.
    pub eta_accuracy_improvement: f64,
    pub planning_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CarrierBenchmarking {
    pub data_points_shared: f64,
    pub negotiation_leverage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoordinationEfficiency {
    /// Variability reduction, in percent.
    pub variability_reduction: f64,
    pub buffer_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SharedLearning {
    /// Days shaved off onboarding a new site.
    pub onboarding_acceleration: f64,
    /// Onboarding plus error-reduction savings.
    pub error_reduction: f64,
}

/// Explanatory split of the network bonus. After reconciliation the four
/// stream savings add up to `total_network_bonus`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkEffectBreakdown {
    pub predictive_intelligence: PredictiveIntelligence,
    pub carrier_benchmarking: CarrierBenchmarking,
    pub coordination_efficiency: CoordinationEfficiency,
    pub shared_learning: SharedLearning,
    pub maturity_factor: f64,
    pub total_network_bonus: f64,
    pub effective_multiplier: f64,
}

impl NetworkEffectBreakdown {
    pub fn dormant() -> Self {
        Self {
            predictive_intelligence: PredictiveIntelligence::default(),
            carrier_benchmarking: CarrierBenchmarking::default(),
            coordination_efficiency: CoordinationEfficiency::default(),
            shared_learning: SharedLearning::default(),
            maturity_factor: 0.0,
            total_network_bonus: 0.0,
            effective_multiplier: 1.0,
        }
    }

    pub fn stream_savings_total(&self) -> f64 {
        self.predictive_intelligence.planning_savings
            + self.carrier_benchmarking.negotiation_leverage
            + self.coordination_efficiency.buffer_savings
            + self.shared_learning.error_reduction
    }

    /// Replaces every non-finite figure with `0`; the effective multiplier
    /// falls back to `1` instead.
    pub fn finite(self) -> Self {
        Self {
            predictive_intelligence: PredictiveIntelligence {
                eta_accuracy_improvement: finite_or_zero(
                    self.predictive_intelligence.eta_accuracy_improvement,
                ),
                planning_savings: finite_or_zero(self.predictive_intelligence.planning_savings),
            },
            carrier_benchmarking: CarrierBenchmarking {
                data_points_shared: finite_or_zero(self.carrier_benchmarking.data_points_shared),
                negotiation_leverage: finite_or_zero(
                    self.carrier_benchmarking.negotiation_leverage,
                ),
            },
            coordination_efficiency: CoordinationEfficiency {
                variability_reduction: finite_or_zero(
                    self.coordination_efficiency.variability_reduction,
                ),
                buffer_savings: finite_or_zero(self.coordination_efficiency.buffer_savings),
            },
            shared_learning: SharedLearning {
                onboarding_acceleration: finite_or_zero(
                    self.shared_learning.onboarding_acceleration,
                ),
                error_reduction: finite_or_zero(self.shared_learning.error_reduction),
            },
            maturity_factor: finite_or_zero(self.maturity_factor),
            total_network_bonus: finite_or_zero(self.total_network_bonus),
            effective_multiplier: if self.effective_multiplier.is_finite() {
                self.effective_multiplier.max(1.0)
            } else {
                1.0
            },
        }
    }
}

/// Per-shipment rates and annual values for each enterprise add-on group.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnterpriseAddOnOutputs {
    pub labor_per_shipment: f64,
    pub detention_per_shipment: f64,
    pub throughput_per_shipment: f64,
    pub annual_labor_savings: f64,
    pub annual_detention_savings: f64,
    pub throughput_value: f64,
    pub total_annual_value: f64,
}

impl EnterpriseAddOnOutputs {
    pub fn finite(self) -> Self {
        Self {
            labor_per_shipment: finite_or_zero(self.labor_per_shipment),
            detention_per_shipment: finite_or_zero(self.detention_per_shipment),
            throughput_per_shipment: finite_or_zero(self.throughput_per_shipment),
            annual_labor_savings: finite_or_zero(self.annual_labor_savings),
            annual_detention_savings: finite_or_zero(self.annual_detention_savings),
            throughput_value: finite_or_zero(self.throughput_value),
            total_annual_value: finite_or_zero(self.total_annual_value),
        }
    }
}

/// Complete valuation. `assumptions_used` echoes the sanitized inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiOutputs {
    pub total_facilities: f64,
    pub total_shipments_per_year: f64,
    pub outbound_shipments_per_year: f64,

    pub annual_labor_savings: f64,
    pub paperless_savings: f64,
    pub annual_detention_savings: f64,
    pub throughput_value: f64,
    pub shipper_of_choice_value: f64,

    pub base_savings: f64,
    pub network_multiplier: f64,
    pub network_bonus_savings: f64,
    pub network_effect_breakdown: NetworkEffectBreakdown,
    pub total_annual_savings: f64,

    pub implementation_cost: f64,
    pub annual_subscription: f64,

    pub year_one_gross_savings: f64,
    pub year_one_net_gain: f64,
    pub year_one_roi_percent: f64,
    pub payback_months: f64,
    pub five_year_value: f64,

    pub enterprise_add_ons: EnterpriseAddOnOutputs,
    pub assumptions_used: RoiInputs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_pass_clears_nested_breakdown() {
        let mut breakdown = NetworkEffectBreakdown::dormant();
        breakdown.coordination_efficiency.buffer_savings = f64::NAN;
        breakdown.predictive_intelligence.planning_savings = f64::INFINITY;
        breakdown.maturity_factor = 0.5;
        breakdown.effective_multiplier = f64::INFINITY;

        let clean = breakdown.finite();
        assert_eq!(clean.coordination_efficiency.buffer_savings, 0.0);
        assert_eq!(clean.predictive_intelligence.planning_savings, 0.0);
        assert_eq!(clean.maturity_factor, 0.5);
        assert_eq!(clean.effective_multiplier, 1.0);
    }

    #[test]
    fn finite_pass_clears_add_on_values() {
        let add_ons = EnterpriseAddOnOutputs {
            throughput_per_shipment: 2.5,
            throughput_value: f64::INFINITY,
            total_annual_value: f64::NAN,
            ..EnterpriseAddOnOutputs::default()
        }
        .finite();
        assert_eq!(add_ons.throughput_per_shipment, 2.5);
        assert_eq!(add_ons.throughput_value, 0.0);
        assert_eq!(add_ons.total_annual_value, 0.0);
    }
}

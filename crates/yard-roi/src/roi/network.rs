//! Network effect: a canonical scalar multiplier plus an explanatory
//! four-stream breakdown that is reconciled against it.

use super::outputs::{
    CarrierBenchmarking, CoordinationEfficiency, NetworkEffectBreakdown, PredictiveIntelligence,
    SharedLearning,
};

/// Facilities at which the maturity curve reaches ~63%.
const MATURITY_SCALE: f64 = 20.0;
const PLANNING_VALUE_PER_SHIPMENT: f64 = 1.5;
const THIRD_PARTY_SHARE: f64 = 0.6;
const AVG_TRANSPORT_COST: f64 = 150.0;
const DATA_POINTS_PER_CONNECTION: f64 = 30.0;
const BUFFER_COST_SHARE: f64 = 0.05;
const ONBOARDING_VALUE_PER_DAY: f64 = 400.0;
const ANNUAL_SITE_GROWTH: f64 = 0.08;
const ERROR_COST_PER_SHIPMENT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkEffect {
    pub multiplier: f64,
    pub bonus_savings: f64,
    pub breakdown: NetworkEffectBreakdown,
}

fn network_active(total_facilities: f64, log_factor: f64) -> bool {
    log_factor > 0.0 && total_facilities > 1.0
}

/// `1 + ln(n + 1) × log_factor`, or exactly `1` for a disabled factor, a
/// single-site network, or a product that does not fit in an `f64`.
pub fn network_multiplier(total_facilities: f64, log_factor: f64) -> f64 {
    if !network_active(total_facilities, log_factor) {
        return 1.0;
    }
    let multiplier = 1.0 + (total_facilities + 1.0).ln() * log_factor;
    if multiplier.is_finite() {
        multiplier
    } else {
        1.0
    }
}

/// Share of full network effect realized at `n` facilities.
pub fn maturity_factor(total_facilities: f64) -> f64 {
    1.0 - (-total_facilities.max(0.0) / MATURITY_SCALE).exp()
}

/// Metcalfe connection count `n(n − 1) / 2`.
pub fn connections(total_facilities: f64) -> f64 {
    let n = total_facilities.max(0.0);
    n * (n - 1.0).max(0.0) / 2.0
}

/// Unreconciled stream estimates. Stream savings here are illustrative and
/// do not generally sum to the canonical bonus.
pub fn stream_estimates(
    total_facilities: f64,
    shipments_per_year: f64,
    base_savings: f64,
    log_factor: f64,
) -> NetworkEffectBreakdown {
    let n = total_facilities.max(1.0);
    if !network_active(n, log_factor) {
        return NetworkEffectBreakdown::dormant();
    }

    let maturity = maturity_factor(n);

    let eta_accuracy = (((n - 4.0).max(1.0) + 1.0).ln() * 0.06).min(0.25) * maturity;
    let planning_savings =
        PLANNING_VALUE_PER_SHIPMENT * eta_accuracy * shipments_per_year * maturity;

    let carrier_threshold = (n - 8.0).max(0.0) / n;
    let leverage_share = (0.003 + ((n - 5.0).max(1.0) + 1.0).ln() * 0.004).min(0.02);
    let third_party_spend = shipments_per_year * THIRD_PARTY_SHARE * AVG_TRANSPORT_COST;
    let negotiation_leverage = third_party_spend * leverage_share * carrier_threshold * maturity;
    let data_points_shared = connections(n) * DATA_POINTS_PER_CONNECTION * maturity;

    let variability_reduction = (((n - 5.0).max(1.0) + 1.0).log2() * 0.04).min(0.2) * maturity;
    let buffer_savings = base_savings * BUFFER_COST_SHARE * variability_reduction;

    let onboarding_days = (((n - 3.0).max(1.0) + 1.0).ln() * 12.0).min(45.0) * maturity;
    let annual_new_sites = (n * ANNUAL_SITE_GROWTH).ceil().max(0.0);
    let onboarding_savings = onboarding_days * ONBOARDING_VALUE_PER_DAY * annual_new_sites;
    let error_share = (((n - 5.0).max(1.0) + 1.0).ln() * 0.025).min(0.12) * maturity;
    let error_savings = shipments_per_year * ERROR_COST_PER_SHIPMENT * error_share;

    let breakdown = NetworkEffectBreakdown {
        predictive_intelligence: PredictiveIntelligence {
            eta_accuracy_improvement: eta_accuracy * 100.0,
            planning_savings,
        },
        carrier_benchmarking: CarrierBenchmarking {
            data_points_shared,
            negotiation_leverage,
        },
        coordination_efficiency: CoordinationEfficiency {
            variability_reduction: variability_reduction * 100.0,
            buffer_savings,
        },
        shared_learning: SharedLearning {
            onboarding_acceleration: onboarding_days,
            error_reduction: onboarding_savings + error_savings,
        },
        maturity_factor: maturity,
        total_network_bonus: 0.0,
        effective_multiplier: 1.0,
    };

    NetworkEffectBreakdown {
        total_network_bonus: breakdown.stream_savings_total(),
        effective_multiplier: if base_savings > 0.0 {
            (base_savings + breakdown.stream_savings_total()) / base_savings
        } else {
            1.0
        },
        ..breakdown
    }
}

/// Rescales the stream savings so they sum to `bonus_savings` and stamps the
/// canonical totals onto the breakdown. If every stream is zero while the
/// bonus is positive, the bonus is attributed to coordination efficiency.
pub fn reconcile(
    mut breakdown: NetworkEffectBreakdown,
    bonus_savings: f64,
    multiplier: f64,
) -> NetworkEffectBreakdown {
    let parts_total = breakdown.stream_savings_total();

    if parts_total > 0.0 && parts_total.is_finite() {
        let scale = bonus_savings / parts_total;
        breakdown.predictive_intelligence.planning_savings *= scale;
        breakdown.carrier_benchmarking.negotiation_leverage *= scale;
        breakdown.coordination_efficiency.buffer_savings *= scale;
        breakdown.shared_learning.error_reduction *= scale;
    } else {
        breakdown.predictive_intelligence.planning_savings = 0.0;
        breakdown.carrier_benchmarking.negotiation_leverage = 0.0;
        breakdown.coordination_efficiency.buffer_savings = bonus_savings;
        breakdown.shared_learning.error_reduction = 0.0;
    }

    breakdown.total_network_bonus = bonus_savings;
    breakdown.effective_multiplier = multiplier;
    breakdown
}

pub fn network_effect(
    total_facilities: f64,
    shipments_per_year: f64,
    base_savings: f64,
    log_factor: f64,
) -> NetworkEffect {
    let multiplier = network_multiplier(total_facilities, log_factor);
    let bonus_savings = if network_active(total_facilities, log_factor) {
        base_savings * (multiplier - 1.0)
    } else {
        0.0
    };

    let estimates = stream_estimates(total_facilities, shipments_per_year, base_savings, log_factor);

    NetworkEffect {
        multiplier,
        bonus_savings,
        breakdown: reconcile(estimates, bonus_savings, multiplier),
    }
}

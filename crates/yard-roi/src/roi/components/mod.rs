//! The five independent savings formulas plus enterprise add-on folding.
//!
//! Each calculator reads only its own slice of the sanitized inputs and the
//! aggregated shipment volume.

mod add_ons;
mod detention;
mod labor;
mod paperless;
mod shipper;
mod throughput;

pub use add_ons::enterprise_add_ons;
pub use detention::{detention_claims, detention_savings, DetentionClaims};
pub use labor::{saved_fte_per_facility, savings_per_facility, tier_labor_savings};
pub use paperless::{pages_per_shipment, paperless_savings};
pub use shipper::{shipper_of_choice_value, transport_budget};
pub use throughput::{
    baseline_gate_minutes, minutes_saved, realized_gain, theoretical_gain, yard_throughput_value,
};

use super::aggregate::ShipmentVolume;
use super::domain::RoiInputs;
use super::outputs::EnterpriseAddOnOutputs;

/// Annual component values with add-ons already folded in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentTotals {
    pub annual_labor_savings: f64,
    pub paperless_savings: f64,
    pub annual_detention_savings: f64,
    /// Yard throughput plus shipper-of-choice plus throughput-like add-ons.
    pub throughput_value: f64,
    pub shipper_of_choice_value: f64,
    pub enterprise_add_ons: EnterpriseAddOnOutputs,
}

impl ComponentTotals {
    /// Sum of the four reported components. Shipper-of-choice value is
    /// already inside `throughput_value`.
    pub fn base_savings(&self) -> f64 {
        self.annual_labor_savings
            + self.paperless_savings
            + self.annual_detention_savings
            + self.throughput_value
    }
}

pub fn evaluate_components(inputs: &RoiInputs, volume: &ShipmentVolume) -> ComponentTotals {
    let shipments = volume.total_shipments_per_year;
    let add_ons = enterprise_add_ons(&inputs.enterprise_add_ons.per_shipment, shipments);

    let annual_labor_savings = tier_labor_savings(inputs, volume) + add_ons.annual_labor_savings;
    let paperless_savings = paperless_savings(&inputs.paper, shipments);
    let annual_detention_savings =
        detention_savings(&inputs.detention, &inputs.shipper, shipments)
            + add_ons.annual_detention_savings;
    let shipper_of_choice_value = shipper_of_choice_value(&inputs.shipper, shipments);
    let throughput_value = yard_throughput_value(&inputs.throughput, shipments)
        + shipper_of_choice_value
        + add_ons.throughput_value;

    ComponentTotals {
        annual_labor_savings,
        paperless_savings,
        annual_detention_savings,
        throughput_value,
        shipper_of_choice_value,
        enterprise_add_ons: add_ons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roi::aggregate::aggregate;

    #[test]
    fn canonical_components_match_reference_totals() {
        let inputs = RoiInputs::default();
        let totals = evaluate_components(&inputs, &aggregate(&inputs));

        let hard_savings = totals.annual_labor_savings
            + totals.annual_detention_savings
            + totals.paperless_savings;
        assert!((hard_savings - 28_118_750.0).abs() < 1e-3, "got {hard_savings}");
        assert!((totals.base_savings() - 75_267_537.5).abs() < 1e-3);
        assert_eq!(totals.enterprise_add_ons.total_annual_value, 0.0);
    }

    #[test]
    fn add_ons_land_in_their_components() {
        let mut inputs = RoiInputs::default();
        let baseline = evaluate_components(&inputs, &aggregate(&inputs));

        inputs.enterprise_add_ons.per_shipment.yard_spotter_productivity = 1.0;
        inputs.enterprise_add_ons.per_shipment.detention_claims_reduction = 1.0;
        inputs.enterprise_add_ons.per_shipment.lost_bols_lost_sales = 1.0;
        let volume = aggregate(&inputs);
        let boosted = evaluate_components(&inputs, &volume);

        let shipments = volume.total_shipments_per_year;
        assert!((boosted.annual_labor_savings - baseline.annual_labor_savings - shipments).abs() < 1e-3);
        assert!(
            (boosted.annual_detention_savings - baseline.annual_detention_savings - shipments).abs()
                < 1e-3
        );
        assert!((boosted.throughput_value - baseline.throughput_value - shipments).abs() < 1e-3);
        assert_eq!(boosted.paperless_savings, baseline.paperless_savings);
    }
}

use super::domain::{RoiInputs, TierMap};
use super::sanitize::finite_or_zero;

/// Facility and shipment totals reduced from the four tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipmentVolume {
    /// Floored facility count per tier.
    pub facility_counts: TierMap<f64>,
    /// Annual shipments for a single facility of each tier.
    pub annual_shipments_per_facility: TierMap<f64>,
    pub total_facilities: f64,
    pub total_shipments_per_year: f64,
    pub outbound_shipments_per_year: f64,
}

/// Expects sanitized inputs; the `max(0, _)` guards repeat the sanitizer so
/// the aggregate stays safe when called directly. Totals that overflow
/// collapse to `0` rather than leaking an infinity downstream.
pub fn aggregate(inputs: &RoiInputs) -> ShipmentVolume {
    let facility_counts = inputs
        .tiers
        .map(|_, tier| finite_or_zero(tier.count.max(0.0).floor()));
    let annual_shipments_per_facility = inputs.tiers.map(|_, tier| {
        finite_or_zero(tier.shipments_per_day.max(0.0) * tier.operating_days_per_year.max(0.0))
    });

    let total_facilities =
        finite_or_zero(facility_counts.iter().map(|(_, count)| *count).sum::<f64>());
    let total_shipments_per_year = finite_or_zero(
        annual_shipments_per_facility
            .iter()
            .map(|(tier, shipments)| shipments * facility_counts.get(tier))
            .sum::<f64>(),
    );
    let outbound_shipments_per_year =
        finite_or_zero(total_shipments_per_year * inputs.paper.outbound_share);

    ShipmentVolume {
        facility_counts,
        annual_shipments_per_facility,
        total_facilities,
        total_shipments_per_year,
        outbound_shipments_per_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roi::domain::FacilityTierInputs;

    #[test]
    fn canonical_portfolio_totals() {
        let volume = aggregate(&RoiInputs::default());
        assert_eq!(volume.total_facilities, 345.0);
        assert_eq!(volume.total_shipments_per_year, 5_247_500.0);
        assert_eq!(volume.annual_shipments_per_facility.xl, 73_000.0);
        assert!((volume.outbound_shipments_per_year - 3_148_500.0).abs() < 1e-6);
    }

    #[test]
    fn zero_volume_tiers_still_count_facilities() {
        let mut inputs = RoiInputs::default();
        inputs.tiers = TierMap {
            xl: FacilityTierInputs {
                count: 3.0,
                ..FacilityTierInputs::default()
            },
            ..TierMap::default()
        };

        let volume = aggregate(&inputs);
        assert_eq!(volume.total_facilities, 3.0);
        assert_eq!(volume.total_shipments_per_year, 0.0);
        assert_eq!(volume.outbound_shipments_per_year, 0.0);
    }

    #[test]
    fn unsanitized_overflow_collapses_to_zero() {
        let mut inputs = RoiInputs::default();
        inputs.tiers.xl.count = 1.0e308;
        inputs.tiers.l.count = 1.0e308;
        inputs.tiers.m.count = 1.0e308;
        inputs.tiers.s.count = 1.0e308;
        inputs.tiers.xl.shipments_per_day = 1.0e200;
        inputs.tiers.xl.operating_days_per_year = 1.0e200;

        let volume = aggregate(&inputs);
        assert_eq!(volume.total_facilities, 0.0);
        assert_eq!(volume.annual_shipments_per_facility.xl, 0.0);
        assert!(volume.total_shipments_per_year.is_finite());
        assert!(volume.outbound_shipments_per_year.is_finite());
    }
}

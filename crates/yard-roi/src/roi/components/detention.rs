use super::super::domain::{DetentionAssumptions, ShipperOfChoiceAssumptions};
use super::super::sanitize::{safe_divide, EPSILON};
use super::shipper::transport_budget;

/// Intermediate detention figures, kept for audit and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetentionClaims {
    pub detention_dollars: f64,
    pub avg_claim_dollars: f64,
    pub total_claims: f64,
    pub claims_15_to_30_min_over: f64,
    pub claims_30_plus_min_over: f64,
    pub third_party_shipments: f64,
    pub savings_per_shipment: f64,
}

/// Claim counts are derived from a dollar budget carved out of the
/// shipper-of-choice transport budget rather than a fixed per-shipment
/// detention rate.
pub fn detention_claims(
    detention: &DetentionAssumptions,
    shipper: &ShipperOfChoiceAssumptions,
    total_shipments_per_year: f64,
) -> DetentionClaims {
    let budget = transport_budget(shipper, total_shipments_per_year);
    let detention_dollars = budget * detention.detention_budget_share_of_transport;

    let cost_per_hour = detention.cost_per_hour_detention.max(0.0);
    let avg_claim_dollars = (detention.avg_detention_hours.max(0.0) * cost_per_hour).max(EPSILON);

    let total_claims = safe_divide(detention_dollars, avg_claim_dollars);
    let claims_15_to_30_min_over = total_claims * detention.claims_share_15_to_30_min_over;
    let claims_30_plus_min_over = total_claims * detention.claims_share_30_plus_min_over;

    // Normalized by the third-party shipment count implied by the transport
    // budget, not by total shipments. Kept as-is pending domain review.
    let third_party_shipments = safe_divide(budget, shipper.cost_per_shipment.max(EPSILON));
    let per_shipment_15_to_30 =
        safe_divide(claims_15_to_30_min_over * cost_per_hour, third_party_shipments);
    let per_shipment_30_plus =
        safe_divide(claims_30_plus_min_over * cost_per_hour, third_party_shipments);

    DetentionClaims {
        detention_dollars,
        avg_claim_dollars,
        total_claims,
        claims_15_to_30_min_over,
        claims_30_plus_min_over,
        third_party_shipments,
        savings_per_shipment: (per_shipment_15_to_30 + per_shipment_30_plus) / 2.0,
    }
}

/// Annual detention savings before enterprise add-ons.
pub fn detention_savings(
    detention: &DetentionAssumptions,
    shipper: &ShipperOfChoiceAssumptions,
    total_shipments_per_year: f64,
) -> f64 {
    detention_claims(detention, shipper, total_shipments_per_year).savings_per_shipment
        * total_shipments_per_year
}

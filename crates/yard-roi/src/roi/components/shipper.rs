use super::super::domain::ShipperOfChoiceAssumptions;

/// Freight spend the customer pays on carriers it does not own.
pub fn transport_budget(shipper: &ShipperOfChoiceAssumptions, total_shipments_per_year: f64) -> f64 {
    total_shipments_per_year
        * shipper.cost_per_shipment.max(0.0)
        * shipper.paid_by_customer_share
        * shipper.non_owned_fleet_share
}

/// Discount a reliable shipper can negotiate. The customer-paid and
/// non-owned shares are applied exactly as in the transport budget so
/// shipments that are not outsourced are never counted.
pub fn shipper_of_choice_value(
    shipper: &ShipperOfChoiceAssumptions,
    total_shipments_per_year: f64,
) -> f64 {
    let realized_per_shipment = shipper.cost_per_shipment.max(0.0)
        * shipper.shipper_of_choice_discount_share
        * shipper.realized_share;

    realized_per_shipment
        * total_shipments_per_year
        * shipper.paid_by_customer_share
        * shipper.non_owned_fleet_share
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_budget_and_value() {
        let shipper = ShipperOfChoiceAssumptions::default();
        let budget = transport_budget(&shipper, 5_247_500.0);
        let value = shipper_of_choice_value(&shipper, 5_247_500.0);
        assert!((budget - 708_412_500.0).abs() < 1e-3, "got {budget}");
        assert!((value - 7_792_537.5).abs() < 1e-3, "got {value}");
    }

    #[test]
    fn owned_fleet_yields_no_value() {
        let shipper = ShipperOfChoiceAssumptions {
            non_owned_fleet_share: 0.0,
            ..ShipperOfChoiceAssumptions::default()
        };
        assert_eq!(transport_budget(&shipper, 10_000.0), 0.0);
        assert_eq!(shipper_of_choice_value(&shipper, 10_000.0), 0.0);
    }
}

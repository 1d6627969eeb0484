use super::domain::{
    CommercialAssumptions, DetentionAssumptions, EnterpriseAddOnRates, EnterpriseAddOns,
    FacilityTierInputs, LaborAssumptions, LaborTierAssumptions, NetworkAssumptions,
    PaperAssumptions, RoiInputs, ShipperOfChoiceAssumptions, ThroughputAssumptions,
};

/// Floor used wherever a divisor must stay strictly positive.
pub const EPSILON: f64 = 0.0001;

/// Ceiling for any single magnitude. Products of several capped inputs stay
/// far below `f64::MAX`, so no stage can overflow.
pub const MAX_MAGNITUDE: f64 = 1.0e12;

/// Clamps a share into `[0, 1]`; non-finite values become `0`.
pub fn clamp_percent(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Bounds a magnitude to `[0, MAX_MAGNITUDE]`; non-finite values become `0`.
pub fn non_negative(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, MAX_MAGNITUDE)
}

/// Whole, non-negative count.
pub fn whole_count(value: f64) -> f64 {
    non_negative(value).floor()
}

/// Division that yields `0` for a zero or non-finite operand.
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if !numerator.is_finite() || !denominator.is_finite() || denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// Replaces a non-finite result with `0`.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Returns a record of identical shape with every share clamped and every
/// magnitude bounded to `[0, MAX_MAGNITUDE]`. Nothing is rejected.
pub fn sanitize(raw: &RoiInputs) -> RoiInputs {
    RoiInputs {
        tiers: raw.tiers.map(|_, tier| sanitize_tier(tier)),
        labor: LaborAssumptions {
            tiers: raw.labor.tiers.map(|_, labor| sanitize_labor(labor)),
        },
        paper: sanitize_paper(&raw.paper),
        shipper: sanitize_shipper(&raw.shipper),
        detention: sanitize_detention(&raw.detention),
        throughput: sanitize_throughput(&raw.throughput),
        network: NetworkAssumptions {
            log_factor: non_negative(raw.network.log_factor),
        },
        commercial: sanitize_commercial(&raw.commercial),
        enterprise_add_ons: EnterpriseAddOns {
            per_shipment: sanitize_add_ons(&raw.enterprise_add_ons.per_shipment),
        },
        year_one_ramp_share: clamp_percent(raw.year_one_ramp_share),
    }
}

fn sanitize_tier(tier: &FacilityTierInputs) -> FacilityTierInputs {
    FacilityTierInputs {
        count: whole_count(tier.count),
        shipments_per_day: non_negative(tier.shipments_per_day),
        operating_days_per_year: non_negative(tier.operating_days_per_year),
        dc_fte_annual_cost: non_negative(tier.dc_fte_annual_cost),
    }
}

fn sanitize_labor(labor: &LaborTierAssumptions) -> LaborTierAssumptions {
    LaborTierAssumptions {
        dock_office_fte_per_shift: non_negative(labor.dock_office_fte_per_shift),
        shifts_per_day: non_negative(labor.shifts_per_day),
        dock_office_time_share_on_driver_process: clamp_percent(
            labor.dock_office_time_share_on_driver_process,
        ),
        dock_office_time_savings_share: clamp_percent(labor.dock_office_time_savings_share),
        guard_fte_per_shift: non_negative(labor.guard_fte_per_shift),
        guard_automation_share: clamp_percent(labor.guard_automation_share),
    }
}

fn sanitize_paper(paper: &PaperAssumptions) -> PaperAssumptions {
    PaperAssumptions {
        pages_per_bol: non_negative(paper.pages_per_bol),
        bols_per_shipment: non_negative(paper.bols_per_shipment),
        other_pages_per_shipment: non_negative(paper.other_pages_per_shipment),
        outbound_share: clamp_percent(paper.outbound_share),
        printing_cost_per_page: non_negative(paper.printing_cost_per_page),
        storage_cost_per_page: non_negative(paper.storage_cost_per_page),
        phase1_saved_share: clamp_percent(paper.phase1_saved_share),
    }
}

fn sanitize_shipper(shipper: &ShipperOfChoiceAssumptions) -> ShipperOfChoiceAssumptions {
    ShipperOfChoiceAssumptions {
        cost_per_shipment: non_negative(shipper.cost_per_shipment),
        paid_by_customer_share: clamp_percent(shipper.paid_by_customer_share),
        non_owned_fleet_share: clamp_percent(shipper.non_owned_fleet_share),
        shipper_of_choice_discount_share: clamp_percent(shipper.shipper_of_choice_discount_share),
        realized_share: clamp_percent(shipper.realized_share),
    }
}

fn sanitize_detention(detention: &DetentionAssumptions) -> DetentionAssumptions {
    DetentionAssumptions {
        detention_budget_share_of_transport: clamp_percent(
            detention.detention_budget_share_of_transport,
        ),
        at_facilities_share: clamp_percent(detention.at_facilities_share),
        avg_detention_hours: non_negative(detention.avg_detention_hours),
        cost_per_hour_detention: non_negative(detention.cost_per_hour_detention),
        claims_share_15_to_30_min_over: clamp_percent(detention.claims_share_15_to_30_min_over),
        claims_share_30_plus_min_over: clamp_percent(detention.claims_share_30_plus_min_over),
    }
}

fn sanitize_throughput(throughput: &ThroughputAssumptions) -> ThroughputAssumptions {
    ThroughputAssumptions {
        avg_gate_in_to_out_minutes: non_negative(throughput.avg_gate_in_to_out_minutes),
        reduce_check_in_minutes: non_negative(throughput.reduce_check_in_minutes),
        reduce_check_out_minutes: non_negative(throughput.reduce_check_out_minutes),
        realized_share: clamp_percent(throughput.realized_share),
        outbound_share: clamp_percent(throughput.outbound_share),
        incremental_margin_per_truck: non_negative(throughput.incremental_margin_per_truck),
    }
}

fn sanitize_commercial(commercial: &CommercialAssumptions) -> CommercialAssumptions {
    CommercialAssumptions {
        implementation_base_cost: non_negative(commercial.implementation_base_cost),
        implementation_cost_per_facility: non_negative(commercial.implementation_cost_per_facility),
        annual_subscription_per_facility: non_negative(commercial.annual_subscription_per_facility),
        contracted_facilities: commercial.contracted_facilities.map(whole_count),
    }
}

fn sanitize_add_ons(rates: &EnterpriseAddOnRates) -> EnterpriseAddOnRates {
    EnterpriseAddOnRates {
        lost_bols_lost_sales: non_negative(rates.lost_bols_lost_sales),
        manual_wms_failover_savings: non_negative(rates.manual_wms_failover_savings),
        dock_clerk_productivity: non_negative(rates.dock_clerk_productivity),
        missed_deliveries: non_negative(rates.missed_deliveries),
        yard_spotter_productivity: non_negative(rates.yard_spotter_productivity),
        osd_search_time: non_negative(rates.osd_search_time),
        detention_claims_reduction: non_negative(rates.detention_claims_reduction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_clamp_handles_out_of_range_and_non_finite() {
        assert_eq!(clamp_percent(1.7), 1.0);
        assert_eq!(clamp_percent(-0.3), 0.0);
        assert_eq!(clamp_percent(0.42), 0.42);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
        assert_eq!(clamp_percent(f64::INFINITY), 0.0);
    }

    #[test]
    fn safe_divide_never_produces_non_finite_values() {
        assert_eq!(safe_divide(10.0, 0.0), 0.0);
        assert_eq!(safe_divide(10.0, f64::INFINITY), 0.0);
        assert_eq!(safe_divide(f64::NAN, 2.0), 0.0);
        assert_eq!(safe_divide(9.0, 3.0), 3.0);
    }

    #[test]
    fn sanitize_preserves_shape_and_floors_counts() {
        let mut raw = RoiInputs::default();
        raw.tiers.xl.count = 4.9;
        raw.tiers.l.count = -3.0;
        raw.tiers.m.shipments_per_day = f64::NAN;
        raw.labor.tiers.s.guard_automation_share = 3.0;
        raw.paper.outbound_share = -1.0;
        raw.network.log_factor = f64::NEG_INFINITY;
        raw.commercial.contracted_facilities = Some(12.6);
        raw.enterprise_add_ons.per_shipment.osd_search_time = -0.5;
        raw.year_one_ramp_share = 2.0;

        let clean = sanitize(&raw);

        assert_eq!(clean.tiers.xl.count, 4.0);
        assert_eq!(clean.tiers.l.count, 0.0);
        assert_eq!(clean.tiers.m.shipments_per_day, 0.0);
        assert_eq!(clean.labor.tiers.s.guard_automation_share, 1.0);
        assert_eq!(clean.paper.outbound_share, 0.0);
        assert_eq!(clean.network.log_factor, 0.0);
        assert_eq!(clean.commercial.contracted_facilities, Some(12.0));
        assert_eq!(clean.enterprise_add_ons.per_shipment.osd_search_time, 0.0);
        assert_eq!(clean.year_one_ramp_share, 1.0);
    }

    #[test]
    fn magnitudes_are_capped_below_overflow() {
        assert_eq!(non_negative(1.0e308), MAX_MAGNITUDE);
        assert_eq!(whole_count(f64::MAX), MAX_MAGNITUDE);
        assert_eq!(non_negative(MAX_MAGNITUDE - 1.0), MAX_MAGNITUDE - 1.0);

        let mut raw = RoiInputs::default();
        raw.tiers.xl.shipments_per_day = 1.0e200;
        raw.enterprise_add_ons.per_shipment.missed_deliveries = 1.0e250;
        let clean = sanitize(&raw);
        assert_eq!(clean.tiers.xl.shipments_per_day, MAX_MAGNITUDE);
        assert_eq!(
            clean.enterprise_add_ons.per_shipment.missed_deliveries,
            MAX_MAGNITUDE
        );
    }

    #[test]
    fn sanitize_is_idempotent_on_canonical_inputs() {
        let canonical = RoiInputs::default();
        assert_eq!(sanitize(&canonical), canonical);
        assert_eq!(sanitize(&sanitize(&canonical)), canonical);
    }
}

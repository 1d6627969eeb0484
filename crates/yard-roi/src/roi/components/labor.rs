use super::super::aggregate::ShipmentVolume;
use super::super::domain::{FacilityTierInputs, LaborTierAssumptions, RoiInputs};

/// Whole FTEs freed at one facility. Partial FTEs are not realizable as a
/// headcount reduction, so each role is floored before pricing.
pub fn saved_fte_per_facility(labor: &LaborTierAssumptions) -> f64 {
    let shifts_per_day = labor.shifts_per_day.max(0.0);

    let dock_office_fte_per_workhour = labor.dock_office_fte_per_shift.max(0.0) * shifts_per_day;
    let saved_office_fte = (dock_office_fte_per_workhour
        * labor.dock_office_time_share_on_driver_process
        * labor.dock_office_time_savings_share)
        .floor();

    let guard_fte_per_workhour = labor.guard_fte_per_shift.max(0.0) * shifts_per_day;
    let saved_guard_fte = (guard_fte_per_workhour * labor.guard_automation_share).floor();

    (saved_office_fte + saved_guard_fte).max(0.0)
}

pub fn savings_per_facility(tier: &FacilityTierInputs, labor: &LaborTierAssumptions) -> f64 {
    saved_fte_per_facility(labor) * tier.dc_fte_annual_cost.max(0.0)
}

/// Staffing savings across every tier, weighted by facility count, before
/// enterprise add-ons.
pub fn tier_labor_savings(inputs: &RoiInputs, volume: &ShipmentVolume) -> f64 {
    inputs
        .tiers
        .iter()
        .map(|(tier, facility)| {
            savings_per_facility(facility, inputs.labor.tiers.get(tier))
                * volume.facility_counts.get(tier)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roi::aggregate::aggregate;

    #[test]
    fn fractional_fte_savings_are_floored() {
        let labor = LaborTierAssumptions {
            dock_office_fte_per_shift: 1.5,
            shifts_per_day: 2.0,
            dock_office_time_share_on_driver_process: 0.33,
            dock_office_time_savings_share: 0.9,
            guard_fte_per_shift: 1.0,
            guard_automation_share: 0.5,
        };
        // office: 3 * 0.33 * 0.9 = 0.891 -> 0, guard: 2 * 0.5 = 1 -> 1
        assert_eq!(saved_fte_per_facility(&labor), 1.0);
    }

    #[test]
    fn canonical_tiers_free_fifteen_million_in_staffing() {
        let inputs = RoiInputs::default();
        let volume = aggregate(&inputs);
        assert_eq!(tier_labor_savings(&inputs, &volume), 15_000_000.0);
    }

    #[test]
    fn zero_shifts_save_nothing() {
        let labor = LaborTierAssumptions {
            dock_office_fte_per_shift: 4.0,
            shifts_per_day: 0.0,
            dock_office_time_share_on_driver_process: 1.0,
            dock_office_time_savings_share: 1.0,
            guard_fte_per_shift: 4.0,
            guard_automation_share: 1.0,
        };
        assert_eq!(saved_fte_per_facility(&labor), 0.0);
    }
}

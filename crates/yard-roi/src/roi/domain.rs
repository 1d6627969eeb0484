use serde::{Deserialize, Serialize};
use std::fmt;

/// Named facility bucket sharing volume and staffing assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityTier {
    #[serde(rename = "XL")]
    Xl,
    L,
    M,
    S,
}

impl FacilityTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Xl, Self::L, Self::M, Self::S]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Xl => "XL",
            Self::L => "L",
            Self::M => "M",
            Self::S => "S",
        }
    }
}

impl fmt::Display for FacilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fully populated per-tier record. Missing tiers deserialize to `T::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TierMap<T> {
    #[serde(rename = "XL")]
    pub xl: T,
    #[serde(rename = "L")]
    pub l: T,
    #[serde(rename = "M")]
    pub m: T,
    #[serde(rename = "S")]
    pub s: T,
}

impl<T> TierMap<T> {
    pub fn get(&self, tier: FacilityTier) -> &T {
        match tier {
            FacilityTier::Xl => &self.xl,
            FacilityTier::L => &self.l,
            FacilityTier::M => &self.m,
            FacilityTier::S => &self.s,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FacilityTier, &T)> + '_ {
        FacilityTier::ordered()
            .into_iter()
            .map(move |tier| (tier, self.get(tier)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(FacilityTier, &T) -> U) -> TierMap<U> {
        TierMap {
            xl: f(FacilityTier::Xl, &self.xl),
            l: f(FacilityTier::L, &self.l),
            m: f(FacilityTier::M, &self.m),
            s: f(FacilityTier::S, &self.s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityTierInputs {
    pub count: f64,
    pub shipments_per_day: f64,
    pub operating_days_per_year: f64,
    pub dc_fte_annual_cost: f64,
}

/// Office and gate staffing for one facility of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborTierAssumptions {
    pub dock_office_fte_per_shift: f64,
    pub shifts_per_day: f64,
    pub dock_office_time_share_on_driver_process: f64,
    pub dock_office_time_savings_share: f64,
    pub guard_fte_per_shift: f64,
    pub guard_automation_share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborAssumptions {
    pub tiers: TierMap<LaborTierAssumptions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperAssumptions {
    pub pages_per_bol: f64,
    pub bols_per_shipment: f64,
    pub other_pages_per_shipment: f64,
    pub outbound_share: f64,
    pub printing_cost_per_page: f64,
    pub storage_cost_per_page: f64,
    pub phase1_saved_share: f64,
}

impl Default for PaperAssumptions {
    fn default() -> Self {
        Self {
            pages_per_bol: 3.0,
            bols_per_shipment: 3.0,
            other_pages_per_shipment: 0.0,
            outbound_share: 0.6,
            printing_cost_per_page: 0.08,
            storage_cost_per_page: 0.02,
            phase1_saved_share: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipperOfChoiceAssumptions {
    pub cost_per_shipment: f64,
    pub paid_by_customer_share: f64,
    pub non_owned_fleet_share: f64,
    pub shipper_of_choice_discount_share: f64,
    pub realized_share: f64,
}

impl Default for ShipperOfChoiceAssumptions {
    fn default() -> Self {
        Self {
            cost_per_shipment: 750.0,
            paid_by_customer_share: 0.2,
            non_owned_fleet_share: 0.9,
            shipper_of_choice_discount_share: 0.11,
            realized_share: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetentionAssumptions {
    pub detention_budget_share_of_transport: f64,
    pub at_facilities_share: f64,
    pub avg_detention_hours: f64,
    pub cost_per_hour_detention: f64,
    pub claims_share_15_to_30_min_over: f64,
    pub claims_share_30_plus_min_over: f64,
}

impl Default for DetentionAssumptions {
    fn default() -> Self {
        Self {
            detention_budget_share_of_transport: 0.01,
            at_facilities_share: 0.4,
            avg_detention_hours: 1.5,
            cost_per_hour_detention: 50.0,
            claims_share_15_to_30_min_over: 0.4,
            claims_share_30_plus_min_over: 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThroughputAssumptions {
    pub avg_gate_in_to_out_minutes: f64,
    pub reduce_check_in_minutes: f64,
    pub reduce_check_out_minutes: f64,
    pub realized_share: f64,
    pub outbound_share: f64,
    pub incremental_margin_per_truck: f64,
}

impl Default for ThroughputAssumptions {
    fn default() -> Self {
        Self {
            avg_gate_in_to_out_minutes: 50.0,
            reduce_check_in_minutes: 5.0,
            reduce_check_out_minutes: 5.0,
            realized_share: 0.1,
            outbound_share: 0.6,
            incremental_margin_per_truck: 500.0,
        }
    }
}

/// `log_factor = 0` disables the network bonus entirely.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkAssumptions {
    pub log_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercialAssumptions {
    pub implementation_base_cost: f64,
    pub implementation_cost_per_facility: f64,
    pub annual_subscription_per_facility: f64,
    /// Billed facility count when it differs from the operational count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contracted_facilities: Option<f64>,
}

impl Default for CommercialAssumptions {
    fn default() -> Self {
        Self {
            implementation_base_cost: 0.0,
            implementation_cost_per_facility: 2500.0,
            annual_subscription_per_facility: 8000.0,
            contracted_facilities: None,
        }
    }
}

/// Per-shipment dollar rates layered onto the base components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnterpriseAddOnRates {
    pub lost_bols_lost_sales: f64,
    pub manual_wms_failover_savings: f64,
    pub dock_clerk_productivity: f64,
    pub missed_deliveries: f64,
    pub yard_spotter_productivity: f64,
    pub osd_search_time: f64,
    pub detention_claims_reduction: f64,
}

impl EnterpriseAddOnRates {
    pub fn labor_per_shipment(&self) -> f64 {
        self.dock_clerk_productivity + self.yard_spotter_productivity + self.osd_search_time
    }

    pub fn detention_per_shipment(&self) -> f64 {
        self.detention_claims_reduction
    }

    pub fn throughput_per_shipment(&self) -> f64 {
        self.lost_bols_lost_sales + self.manual_wms_failover_savings + self.missed_deliveries
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnterpriseAddOns {
    pub per_shipment: EnterpriseAddOnRates,
}

/// Complete engine input. Omitted sections fall back to the canonical
/// network baseline returned by [`RoiInputs::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiInputs {
    pub tiers: TierMap<FacilityTierInputs>,
    pub labor: LaborAssumptions,
    pub paper: PaperAssumptions,
    pub shipper: ShipperOfChoiceAssumptions,
    pub detention: DetentionAssumptions,
    pub throughput: ThroughputAssumptions,
    pub network: NetworkAssumptions,
    pub commercial: CommercialAssumptions,
    pub enterprise_add_ons: EnterpriseAddOns,
    pub year_one_ramp_share: f64,
}

impl Default for RoiInputs {
    /// 345 facilities across four tiers with the network bonus switched off.
    fn default() -> Self {
        Self {
            tiers: TierMap {
                xl: tier(20.0, 200.0, 365.0),
                l: tier(25.0, 100.0, 365.0),
                m: tier(100.0, 65.0, 250.0),
                s: tier(200.0, 25.0, 250.0),
            },
            labor: LaborAssumptions {
                tiers: TierMap {
                    xl: staffing(2.0, 4.0, 0.25, 2.0),
                    l: staffing(1.5, 3.0, 0.25, 1.0),
                    m: staffing(1.5, 2.0, 0.33, 1.0),
                    s: staffing(1.0, 1.0, 0.5, 0.0),
                },
            },
            paper: PaperAssumptions::default(),
            shipper: ShipperOfChoiceAssumptions::default(),
            detention: DetentionAssumptions::default(),
            throughput: ThroughputAssumptions::default(),
            network: NetworkAssumptions::default(),
            commercial: CommercialAssumptions::default(),
            enterprise_add_ons: EnterpriseAddOns::default(),
            year_one_ramp_share: 1.0,
        }
    }
}

impl RoiInputs {
    /// 25-facility reference portfolio whose value comes almost entirely from
    /// paperless operations and enterprise add-on rates.
    pub fn enterprise_addon_reference() -> Self {
        Self {
            tiers: TierMap {
                xl: tier(6.0, 180.0, 365.0),
                l: tier(8.0, 90.0, 365.0),
                m: tier(6.0, 40.0, 250.0),
                s: tier(5.0, 15.0, 250.0),
            },
            labor: LaborAssumptions::default(),
            paper: PaperAssumptions {
                pages_per_bol: 1.5,
                bols_per_shipment: 3.0,
                other_pages_per_shipment: 1.0,
                outbound_share: 1.0,
                printing_cost_per_page: 0.08,
                storage_cost_per_page: 0.0,
                phase1_saved_share: 0.504_545_454_545_454_5,
            },
            shipper: ShipperOfChoiceAssumptions {
                cost_per_shipment: 0.0,
                paid_by_customer_share: 0.0,
                non_owned_fleet_share: 0.0,
                shipper_of_choice_discount_share: 0.0,
                realized_share: 0.0,
            },
            detention: DetentionAssumptions {
                detention_budget_share_of_transport: 0.0,
                at_facilities_share: 0.0,
                avg_detention_hours: 0.0,
                cost_per_hour_detention: 0.0,
                claims_share_15_to_30_min_over: 0.0,
                claims_share_30_plus_min_over: 0.0,
            },
            throughput: ThroughputAssumptions {
                avg_gate_in_to_out_minutes: 0.0,
                reduce_check_in_minutes: 0.0,
                reduce_check_out_minutes: 0.0,
                realized_share: 0.0,
                outbound_share: 0.0,
                incremental_margin_per_truck: 0.0,
            },
            network: NetworkAssumptions::default(),
            commercial: CommercialAssumptions::default(),
            enterprise_add_ons: EnterpriseAddOns {
                per_shipment: EnterpriseAddOnRates {
                    lost_bols_lost_sales: 0.1125,
                    manual_wms_failover_savings: 0.0,
                    dock_clerk_productivity: 0.815_494_393_476_044_8,
                    missed_deliveries: 0.24375,
                    yard_spotter_productivity: 0.0,
                    osd_search_time: 0.0,
                    detention_claims_reduction: 0.455_357_142_857_142_85,
                },
            },
            year_one_ramp_share: 1.0,
        }
    }
}

const DEFAULT_FTE_ANNUAL_COST: f64 = 60_000.0;

fn tier(count: f64, shipments_per_day: f64, operating_days_per_year: f64) -> FacilityTierInputs {
    FacilityTierInputs {
        count,
        shipments_per_day,
        operating_days_per_year,
        dc_fte_annual_cost: DEFAULT_FTE_ANNUAL_COST,
    }
}

fn staffing(
    dock_office_fte_per_shift: f64,
    shifts_per_day: f64,
    dock_office_time_share_on_driver_process: f64,
    guard_fte_per_shift: f64,
) -> LaborTierAssumptions {
    LaborTierAssumptions {
        dock_office_fte_per_shift,
        shifts_per_day,
        dock_office_time_share_on_driver_process,
        dock_office_time_savings_share: 0.9,
        guard_fte_per_shift,
        guard_automation_share: 0.5,
    }
}

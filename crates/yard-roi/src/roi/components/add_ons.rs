use super::super::domain::EnterpriseAddOnRates;
use super::super::outputs::EnterpriseAddOnOutputs;

/// Folds the three add-on groups into annual values at the given volume.
pub fn enterprise_add_ons(
    rates: &EnterpriseAddOnRates,
    total_shipments_per_year: f64,
) -> EnterpriseAddOnOutputs {
    let labor_per_shipment = rates.labor_per_shipment();
    let detention_per_shipment = rates.detention_per_shipment();
    let throughput_per_shipment = rates.throughput_per_shipment();

    let annual_labor_savings = labor_per_shipment * total_shipments_per_year;
    let annual_detention_savings = detention_per_shipment * total_shipments_per_year;
    let throughput_value = throughput_per_shipment * total_shipments_per_year;

    EnterpriseAddOnOutputs {
        labor_per_shipment,
        detention_per_shipment,
        throughput_per_shipment,
        annual_labor_savings,
        annual_detention_savings,
        throughput_value,
        total_annual_value: annual_labor_savings + annual_detention_savings + throughput_value,
    }
}

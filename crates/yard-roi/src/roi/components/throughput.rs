use super::super::domain::ThroughputAssumptions;
use super::super::sanitize::{safe_divide, EPSILON};

/// Gate-to-gate time before automation, floored at [`EPSILON`].
pub fn baseline_gate_minutes(throughput: &ThroughputAssumptions) -> f64 {
    throughput.avg_gate_in_to_out_minutes.max(0.0).max(EPSILON)
}

pub fn minutes_saved(throughput: &ThroughputAssumptions) -> f64 {
    throughput.reduce_check_in_minutes.max(0.0) + throughput.reduce_check_out_minutes.max(0.0)
}

/// Fractional capacity gain if every saved minute turned into gate capacity.
pub fn theoretical_gain(throughput: &ThroughputAssumptions) -> f64 {
    let baseline = baseline_gate_minutes(throughput);
    let improved_gate_minutes = (baseline - minutes_saved(throughput)).max(EPSILON);
    (safe_divide(baseline, improved_gate_minutes) - 1.0).max(0.0)
}

/// Realized fractional capacity gain from shorter gate-to-gate time.
pub fn realized_gain(throughput: &ThroughputAssumptions) -> f64 {
    theoretical_gain(throughput) * throughput.realized_share
}

/// Margin on incremental outbound loads the freed capacity can absorb.
pub fn yard_throughput_value(throughput: &ThroughputAssumptions, total_shipments_per_year: f64) -> f64 {
    let incremental_outbound_shipments =
        total_shipments_per_year * throughput.outbound_share * realized_gain(throughput);
    incremental_outbound_shipments * throughput.incremental_margin_per_truck.max(0.0)
}

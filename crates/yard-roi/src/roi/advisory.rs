use super::outputs::RoiOutputs;
use serde::{Deserialize, Serialize};

/// Limits beyond which an estimate is annotated as assumption-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryThresholds {
    pub roi_uncommon_percent: f64,
    pub roi_extreme_percent: f64,
    pub roi_assumption_sensitive_percent: f64,
    pub min_payback_months: f64,
    pub max_payback_months: f64,
    pub multiplier_mature: f64,
    pub multiplier_sensitive: f64,
    pub throughput_share_percent: f64,
    pub min_base_savings: f64,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            roi_uncommon_percent: 500.0,
            roi_extreme_percent: 1000.0,
            roi_assumption_sensitive_percent: 5000.0,
            min_payback_months: 1.0,
            max_payback_months: 120.0,
            multiplier_mature: 6.0,
            multiplier_sensitive: 10.0,
            throughput_share_percent: 50.0,
            min_base_savings: 50_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl AdvisoryReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }
}

/// Annotates a finished valuation. The outputs are read, never modified.
pub fn review(outputs: &RoiOutputs, thresholds: &AdvisoryThresholds) -> AdvisoryReport {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    let roi = outputs.year_one_roi_percent;
    if !roi.is_finite() {
        errors.push("Year-1 ROI is not a finite number. Check input assumptions.".to_string());
    } else {
        if roi > thresholds.roi_assumption_sensitive_percent {
            warnings.push(format!(
                "Year-1 ROI above {:.0}% is highly assumption-sensitive. Treat as an upper bound.",
                thresholds.roi_assumption_sensitive_percent
            ));
        } else if roi > thresholds.roi_extreme_percent {
            warnings.push(format!(
                "Year-1 ROI above {:.0}% is extremely rare for enterprise software. Consider a conservative scenario.",
                thresholds.roi_extreme_percent
            ));
        } else if roi > thresholds.roi_uncommon_percent {
            warnings.push(format!(
                "Year-1 ROI above {:.0}% is uncommon. Verify assumptions with historical data.",
                thresholds.roi_uncommon_percent
            ));
        }
        if roi < 0.0 {
            warnings.push(
                "Negative ROI in Year 1. Network may be too small for cost recovery.".to_string(),
            );
        }
    }

    let payback = outputs.payback_months;
    if !payback.is_finite() {
        errors.push(
            "Payback period is not a finite number. Check cost/savings assumptions.".to_string(),
        );
    } else {
        if payback > 0.0 && payback < thresholds.min_payback_months {
            warnings.push(
                "Payback under 1 month is unrealistic for an enterprise rollout. Check Year-1 ramp assumptions."
                    .to_string(),
            );
        }
        if payback > thresholds.max_payback_months {
            warnings.push(format!(
                "Payback exceeds {:.0} months. Network may not justify investment at current scale.",
                thresholds.max_payback_months
            ));
        }
    }

    let multiplier = outputs.network_multiplier;
    if multiplier > thresholds.multiplier_sensitive {
        warnings.push(format!(
            "Network multiplier above {:.0}x is highly assumption-sensitive. Conservative scenario recommended.",
            thresholds.multiplier_sensitive
        ));
    } else if multiplier > thresholds.multiplier_mature {
        warnings.push(format!(
            "Network multiplier above {:.0}x assumes mature network effects. Verify the log factor.",
            thresholds.multiplier_mature
        ));
    }

    let savings_without_throughput = outputs.base_savings - outputs.throughput_value;
    if savings_without_throughput > 0.0 {
        let throughput_share = outputs.throughput_value / savings_without_throughput * 100.0;
        if throughput_share > thresholds.throughput_share_percent {
            warnings.push(format!(
                "Throughput gains ({throughput_share:.0}% of other base savings) may require infrastructure changes."
            ));
        }
    }

    if outputs.base_savings < thresholds.min_base_savings {
        warnings.push(
            "Base savings are very low. Verify facility count and operational assumptions."
                .to_string(),
        );
    }

    AdvisoryReport {
        valid: errors.is_empty(),
        warnings,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roi::{calculate, RoiInputs};

    fn outputs() -> RoiOutputs {
        calculate(&RoiInputs::default())
    }

    #[test]
    fn extreme_roi_is_flagged_as_assumption_sensitive() {
        let mut out = outputs();
        out.year_one_roi_percent = 7_500.0;
        let report = review(&out, &AdvisoryThresholds::default());
        assert!(report.valid);
        assert!(report
            .warnings
            .iter()
            .any(|warning| warning.contains("highly assumption-sensitive")));
    }

    #[test]
    fn non_finite_values_are_errors() {
        let mut out = outputs();
        out.year_one_roi_percent = f64::NAN;
        out.payback_months = f64::INFINITY;
        let report = review(&out, &AdvisoryThresholds::default());
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn review_does_not_alter_outputs() {
        let out = outputs();
        let before = out.clone();
        let _ = review(&out, &AdvisoryThresholds::default());
        assert_eq!(out, before);
    }

    #[test]
    fn small_programs_get_low_savings_and_negative_roi_notes() {
        let mut out = outputs();
        out.base_savings = 10_000.0;
        out.throughput_value = 0.0;
        out.year_one_roi_percent = -40.0;
        out.payback_months = 0.0;
        let report = review(&out, &AdvisoryThresholds::default());
        assert!(report.warnings.iter().any(|w| w.contains("Negative ROI")));
        assert!(report.warnings.iter().any(|w| w.contains("Base savings")));
        assert!(!report.warnings.iter().any(|w| w.contains("Payback")));
    }

    #[test]
    fn throughput_heavy_portfolio_is_noted() {
        // Canonical throughput (47.1M) is well above half of the other 28.1M.
        let report = review(&outputs(), &AdvisoryThresholds::default());
        assert!(report
            .warnings
            .iter()
            .any(|warning| warning.starts_with("Throughput gains")));
    }
}

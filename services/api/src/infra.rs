use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use yard_roi::error::InputError;
use yard_roi::roi::RoiEngine;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: RoiEngine,
}

/// Decodes a JSON document; omitted sections fall back to their defaults.
pub(crate) fn parse_json<T: DeserializeOwned>(raw: &[u8]) -> Result<T, InputError> {
    Ok(serde_json::from_slice(raw)?)
}

pub(crate) fn load_json_from_path<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let raw = std::fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yard_roi::roi::RoiInputs;

    #[test]
    fn partial_document_keeps_canonical_sections() {
        let inputs: RoiInputs =
            parse_json(br#"{ "year_one_ramp_share": 0.5 }"#).expect("partial inputs parse");
        assert_eq!(inputs.year_one_ramp_share, 0.5);
        assert_eq!(inputs.tiers, RoiInputs::default().tiers);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("yard-roi-missing-scenario.json");
        let err = load_json_from_path::<RoiInputs>(&path).expect_err("file is absent");
        assert!(err.to_string().contains("yard-roi-missing-scenario.json"));
    }

    #[test]
    fn reads_scenario_file() {
        let path = std::env::temp_dir()
            .join(format!("yard-roi-scenario-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "network": { "log_factor": 0.1 } }"#)
            .expect("temp file written");
        let inputs: RoiInputs = load_json_from_path(&path).expect("scenario loads");
        std::fs::remove_file(&path).ok();
        assert_eq!(inputs.network.log_factor, 0.1);
    }
}

use crate::infra::{parse_json, AppState};
use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};
use yard_roi::error::AppError;
use yard_roi::roi::{
    catalog, AdvisoryReport, Assessment, EconomicsMode, PresetCatalog, PresetSelection,
    QuickModeInputs, RoiInputs, RoiOutputs, ScenarioId, ScenarioInputs, ScenarioOutputs,
};

#[derive(Debug, Serialize)]
pub(crate) struct QuickResponse {
    pub(crate) inputs: QuickModeInputs,
    pub(crate) outputs: RoiOutputs,
    pub(crate) advisory: AdvisoryReport,
}

/// Preset body with scenario and mode kept as text so unknown names surface
/// as preset errors rather than generic decode failures.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PresetRequest {
    #[serde(default)]
    pub(crate) scenario: Option<String>,
    #[serde(default)]
    pub(crate) mode: Option<String>,
    #[serde(default)]
    pub(crate) adoption_percent: Option<f64>,
}

impl PresetRequest {
    fn selection(&self) -> Result<PresetSelection, AppError> {
        let scenario = match &self.scenario {
            Some(raw) => raw.parse::<ScenarioId>()?,
            None => ScenarioId::default(),
        };
        let mode = match &self.mode {
            Some(raw) => raw.parse::<EconomicsMode>()?,
            None => EconomicsMode::default(),
        };
        Ok(PresetSelection {
            scenario,
            mode,
            adoption_percent: self.adoption_percent,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PresetResponse {
    pub(crate) selection: PresetSelection,
    pub(crate) inputs: QuickModeInputs,
    pub(crate) outputs: RoiOutputs,
    pub(crate) advisory: AdvisoryReport,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/roi/calculate", post(calculate_endpoint))
        .route("/api/v1/roi/quick", post(quick_endpoint))
        .route("/api/v1/roi/presets", get(presets_endpoint))
        .route("/api/v1/roi/preset", post(preset_endpoint))
        .route("/api/v1/roi/scenario", post(scenario_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn log_assessment(kind: &'static str, assessment: &Assessment) {
    let advisories = assessment.advisory.warnings.len() + assessment.advisory.errors.len();
    log_valuation(kind, &assessment.outputs, advisories);
}

fn log_valuation(kind: &'static str, outputs: &RoiOutputs, advisories: usize) {
    info!(
        kind,
        facilities = outputs.total_facilities,
        total_annual_savings = outputs.total_annual_savings,
        advisories,
        "roi calculated"
    );
    debug!(
        kind,
        multiplier = outputs.network_multiplier,
        payback_months = outputs.payback_months,
        year_one_roi_percent = outputs.year_one_roi_percent,
        "roi commercial outcome"
    );
}

pub(crate) async fn calculate_endpoint(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<Assessment>, AppError> {
    let inputs: RoiInputs = parse_json(&body)?;
    let assessment = state.engine.assess(&inputs);
    log_assessment("full", &assessment);
    Ok(Json(assessment))
}

pub(crate) async fn quick_endpoint(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<QuickResponse>, AppError> {
    let inputs: QuickModeInputs = parse_json(&body)?;
    let assessment = state.engine.assess_quick(&inputs);
    log_assessment("quick", &assessment);

    Ok(Json(QuickResponse {
        inputs,
        outputs: assessment.outputs,
        advisory: assessment.advisory,
    }))
}

pub(crate) async fn presets_endpoint() -> Json<PresetCatalog> {
    Json(catalog())
}

pub(crate) async fn preset_endpoint(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<PresetResponse>, AppError> {
    let request: PresetRequest = if body.is_empty() {
        PresetRequest::default()
    } else {
        parse_json(&body)?
    };
    let selection = request.selection()?;
    let assessment = state.engine.assess_preset(&selection);
    log_assessment("preset", &assessment);

    Ok(Json(PresetResponse {
        selection,
        inputs: selection.quick_inputs(),
        outputs: assessment.outputs,
        advisory: assessment.advisory,
    }))
}

pub(crate) async fn scenario_endpoint(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<ScenarioOutputs>, AppError> {
    let inputs: ScenarioInputs = parse_json(&body)?;
    let scenario = state.engine.assess_scenario(&inputs);
    log_valuation("scenario", &scenario.roi, scenario.warnings.len());
    debug!(
        kind = "scenario",
        five_year_npv = scenario.finance.five_year_npv,
        annual_profit_impact = scenario.capacity.annual_profit_impact,
        "scenario finance"
    );
    Ok(Json(scenario))
}

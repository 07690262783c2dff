use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use stress_check::assessment::AssessmentService;
use stress_check::config::ScoringConfig;
use stress_check::error::AppError;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn assessment_service(config: &ScoringConfig) -> Result<AssessmentService, AppError> {
    let service = AssessmentService::from_config(config)?;
    match &config.remote_url {
        Some(url) => info!(
            remote = %url,
            timeout_ms = config.remote_timeout.as_millis() as u64,
            local_fallback = config.local_fallback,
            "remote scorer configured"
        ),
        None => info!("no remote scorer configured; using local rules"),
    }
    Ok(service)
}

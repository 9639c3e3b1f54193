//! HTTP router and request handlers.
//!
//! Each handler validates its body, issues one completion per prompt, and
//! returns either a success payload or a single error payload. Partial
//! results are never reported.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use futures::future::try_join_all;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::helpers;
use crate::ai::CompletionService;
use crate::core::models::{
    AnalysesResponse, AnalysisResponse, AnalyzeRequest, ComparativeRequest, DilemmaResponse,
    MessageResponse,
};
use crate::errors::DilemmaError;
use crate::prompt::{
    ANALYSIS_SYSTEM, COMPARATIVE_SYSTEM, DILEMMA_REQUEST, DILEMMA_SYSTEM, FRAMEWORKS,
    analysis_prompt,
};

pub const MISSING_DILEMMA: &str = "Missing dilemma";
pub const MISSING_DILEMMA_OR_FRAMEWORK: &str = "Missing dilemma or framework";

/// Shared handler state: the one completion client built at startup.
#[derive(Clone)]
pub struct AppState {
    pub completions: Arc<dyn CompletionService>,
}

impl AppState {
    pub fn new(completions: Arc<dyn CompletionService>) -> Self {
        Self { completions }
    }
}

/// Builds the full application router with CORS open to every origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/test", get(test_connection))
        .route("/api/dilemma", post(generate_dilemma))
        .route("/api/analyze/comparative", post(analyze_comparative))
        .route("/api/analyze", post(analyze))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn test_connection() -> Response {
    helpers::ok(&MessageResponse {
        message: "Backend is running!",
    })
}

#[tracing::instrument(level = "info", skip(state))]
pub async fn generate_dilemma(State(state): State<AppState>) -> Response {
    match state
        .completions
        .complete(DILEMMA_SYSTEM, DILEMMA_REQUEST)
        .await
    {
        Ok(text) => {
            let dilemma = text.trim().to_string();
            info!(chars = dilemma.chars().count(), "Generated dilemma");
            helpers::ok(&DilemmaResponse { dilemma })
        }
        Err(e) => helpers::completion_failure(&e),
    }
}

#[tracing::instrument(level = "info", skip(state, body))]
pub async fn analyze_comparative(State(state): State<AppState>, body: Bytes) -> Response {
    let request: ComparativeRequest = helpers::parse_body(&body);
    let Some(dilemma) = helpers::required(request.dilemma) else {
        return helpers::err_response(StatusCode::BAD_REQUEST, MISSING_DILEMMA);
    };

    let completions = &state.completions;
    let dilemma = dilemma.as_str();
    let calls = FRAMEWORKS.into_iter().map(|framework| async move {
        let prompt = analysis_prompt(framework, dilemma);
        let text = completions.complete(COMPARATIVE_SYSTEM, &prompt).await?;
        Ok::<_, DilemmaError>((framework.to_string(), text.trim().to_string()))
    });

    match try_join_all(calls).await {
        Ok(pairs) => {
            let analyses: BTreeMap<String, String> = pairs.into_iter().collect();
            info!(frameworks = analyses.len(), "Comparative analysis complete");
            helpers::ok(&AnalysesResponse { analyses })
        }
        Err(e) => helpers::completion_failure(&e),
    }
}

#[tracing::instrument(level = "info", skip(state, body))]
pub async fn analyze(State(state): State<AppState>, body: Bytes) -> Response {
    let request: AnalyzeRequest = helpers::parse_body(&body);
    let (Some(dilemma), Some(framework)) = (
        helpers::required(request.dilemma),
        helpers::required(request.framework),
    ) else {
        return helpers::err_response(StatusCode::BAD_REQUEST, MISSING_DILEMMA_OR_FRAMEWORK);
    };

    let prompt = analysis_prompt(&framework, &dilemma);
    match state.completions.complete(ANALYSIS_SYSTEM, &prompt).await {
        Ok(text) => {
            info!(framework = %framework, "Analysis complete");
            helpers::ok(&AnalysisResponse {
                analysis: text.trim().to_string(),
            })
        }
        Err(e) => helpers::completion_failure(&e),
    }
}

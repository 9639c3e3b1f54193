use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
pub struct ComparativeRequest {
    #[serde(default)]
    pub dilemma: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub dilemma: Option<String>,
    #[serde(default)]
    pub framework: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DilemmaResponse {
    pub dilemma: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysesResponse {
    pub analyses: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

//! Backend analysis response envelope.

use serde::Deserialize;

/// JSON body returned by the analysis endpoint.
///
/// Only `analysis` is read; other fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub analysis: Option<String>,
}

impl AnalysisResponse {
    /// Parse a response body.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The analysis text, empty when the field is missing or `null`.
    pub fn text(&self) -> &str {
        self.analysis.as_deref().unwrap_or_default()
    }
}

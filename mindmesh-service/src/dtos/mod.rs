use serde::Deserialize;
use serde_json::Value;

/// Body for `POST /organize`.
///
/// An absent `text` field deserializes to the empty string; the endpoint
/// performs no input validation.
#[derive(Debug, Deserialize)]
pub struct OrganizeRequest {
    #[serde(default)]
    pub text: String,
}

/// Body for `POST /mindmap`.
///
/// `structured` is any JSON value, passed through without schema checks.
#[derive(Debug, Deserialize)]
pub struct MindmapRequest {
    #[serde(default)]
    pub structured: Value,
}

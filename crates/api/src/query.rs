//! Shared query parameter types for API handlers.
//!
//! Identifiers arrive as raw strings and are parsed into `gapply_core::ids`
//! types by the handler, so a malformed id yields `INVALID_IDENTIFIER`
//! rather than a generic query rejection.

use serde::Deserialize;

/// `?assessmentId=`
#[derive(Debug, Deserialize)]
pub struct AssessmentQuery {
    #[serde(rename = "assessmentId")]
    pub assessment_id: Option<String>,
}

/// `?assessmentId=&criteriaId=`
#[derive(Debug, Deserialize)]
pub struct ResponsesQuery {
    #[serde(rename = "assessmentId")]
    pub assessment_id: Option<String>,
    #[serde(rename = "criteriaId", alias = "criterionId")]
    pub criteria_id: Option<String>,
}

/// `?pack=`
#[derive(Debug, Deserialize)]
pub struct PackQuery {
    pub pack: Option<String>,
}

/// `?assessmentId=&limit=`
#[derive(Debug, Deserialize)]
pub struct ChatMessagesQuery {
    #[serde(rename = "assessmentId")]
    pub assessment_id: Option<String>,
    pub limit: Option<i64>,
}

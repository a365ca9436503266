//! Shared success envelope for API handlers.
//!
//! Every successful JSON response is `{ "ok": true, ...data }`. Use
//! [`OkResponse`] instead of ad-hoc `json!` so the payload fields stay typed.

use serde::Serialize;

use crate::middleware::request_id::RequestId;

/// Standard `{ "ok": true, ...data }` response envelope.
///
/// `data` must serialize as a map; its fields are flattened next to `ok`.
///
/// ```ignore
/// Ok(Json(OkResponse::new(ResponsesPayload { responses })))
/// ```
#[derive(Debug, Serialize)]
pub struct OkResponse<T: Serialize> {
    pub ok: bool,
    /// Correlation id of the request, echoed when the handler asks for it.
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> OkResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            ok: true,
            request_id: None,
            data,
        }
    }

    /// Attach the request correlation id.
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = request_id.0;
        self
    }
}

//! Path builders and payload helpers for the refund REST surface.
//!
//! The crate never performs I/O; the embedding app issues the requests
//! and hands response bodies back through these helpers.

use crate::error::Error;
use crate::types::RawRefund;

/// Buyer-facing refund list.
pub const MY_REFUNDS_PATH: &str = "/return-refund/get_my_refunds/";

pub fn my_refunds_path() -> &'static str {
    MY_REFUNDS_PATH
}

/// Admin detail view with nested dispute and return-shipment rows.
pub fn admin_refund_details_path(refund_id: &str) -> String {
    format!("/return-refund/{refund_id}/get_admin_refund_details/")
}

/// State-mutating dispute endpoints. Every POST returns an updated
/// snapshot which the caller must re-project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisputeEndpoint {
    Accept,
    Reject,
    Partial,
    StartReview,
}

impl DisputeEndpoint {
    pub fn segment(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
            Self::Partial => "partial",
            Self::StartReview => "start_review",
        }
    }
}

pub fn dispute_action_path(dispute_id: &str, endpoint: DisputeEndpoint) -> String {
    format!("/disputes/{dispute_id}/{}/", endpoint.segment())
}

/// Unwrap the backend's list envelope: some deployments return a bare
/// array, others `{"data": [...]}` or `{"results": [...]}`.
fn unwrap_rows(value: &serde_json::Value) -> &serde_json::Value {
    if let Some(obj) = value.as_object()
        && let Some(inner) = obj.get("data").or_else(|| obj.get("results"))
    {
        return inner;
    }
    value
}

pub fn parse_refund_list(body: &str) -> Result<Vec<RawRefund>, Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    serde_json::from_value(unwrap_rows(&value).clone()).map_err(|e| Error::Parse {
        reason: format!("refund list payload: {e}"),
    })
}

pub fn parse_refund(body: &str) -> Result<RawRefund, Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    serde_json::from_value(unwrap_rows(&value).clone()).map_err(|e| Error::Parse {
        reason: format!("refund payload: {e}"),
    })
}

/// Extract a user-facing message from a rejected action's body:
/// `error` field, then `message` field, then the caller's fallback.
pub fn extract_error_message(body: &serde_json::Value, fallback: &str) -> String {
    body.get("error")
        .and_then(|v| v.as_str())
        .or_else(|| body.get("message").and_then(|v| v.as_str()))
        .map_or_else(|| fallback.to_string(), str::to_string)
}

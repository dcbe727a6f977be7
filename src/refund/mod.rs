pub mod actions;
pub mod badge;
pub mod dispute;
pub mod tab;
pub mod view;

use crate::types::RawRefund;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum RefundStatus {
    Pending,
    Negotiation,
    Approved,
    ToShip,
    ToVerify,
    ToProcess,
    Waiting,
    Dispute,
    Completed,
    Rejected,
    Cancelled,
    Failed,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum RefundType {
    Return,
    Keep,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ReturnStatus {
    Approved,
    Shipped,
    Received,
    Inspected,
    Rejected,
}

/// Dispute sub-status. The backend emits two spellings for a couple of
/// these, so the historical aliases parse too.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum DisputeStatus {
    Filed,
    Pending,
    #[strum(to_string = "under_review", serialize = "started")]
    UnderReview,
    Approved,
    #[strum(to_string = "rejected", serialize = "declined")]
    Rejected,
    Partial,
}

/// A refund snapshot normalized at the deserialization boundary.
///
/// Status strings the backend sends are parsed into the closed enums
/// above exactly once, here. An unrecognized string leaves the typed
/// field `None` while the raw text is retained for badge fallback —
/// normalization never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Refund {
    pub refund_id: String,
    pub status: Option<RefundStatus>,
    /// Top-level status exactly as received.
    pub raw_status: String,
    pub payment_status: Option<PaymentStatus>,
    pub refund_type: Option<RefundType>,
    pub return_request: Option<ReturnRequest>,
    pub dispute: Option<Dispute>,
    pub buyer_notified_at: Option<String>,
    pub requested_at: Option<String>,
    pub processed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnRequest {
    pub status: Option<ReturnStatus>,
    /// Shipment status exactly as received.
    pub raw_status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dispute {
    pub dispute_id: Option<String>,
    pub status: Option<DisputeStatus>,
    /// Dispute status exactly as received.
    pub raw_status: String,
    pub resolved_at: Option<String>,
}

fn parse_status<T: std::str::FromStr>(raw: &str, field: &'static str) -> Option<T> {
    let parsed = raw.parse::<T>().ok();
    if parsed.is_none() {
        tracing::debug!(field, value = raw, "unrecognized status string");
    }
    parsed
}

impl Refund {
    pub fn from_raw(raw: RawRefund) -> Self {
        let status = parse_status::<RefundStatus>(&raw.status, "status");
        let payment_status = raw
            .refund_payment_status
            .as_deref()
            .and_then(|s| parse_status::<PaymentStatus>(s, "refund_payment_status"));
        let refund_type = raw
            .refund_type
            .as_deref()
            .and_then(|s| parse_status::<RefundType>(s, "refund_type"));
        let return_request = raw.return_request.map(|rr| ReturnRequest {
            status: parse_status::<ReturnStatus>(&rr.status, "return_request.status"),
            raw_status: rr.status,
        });
        let dispute = raw.dispute_request.map(|d| Dispute {
            dispute_id: d.dispute_id,
            status: parse_status::<DisputeStatus>(&d.status, "dispute.status"),
            raw_status: d.status,
            resolved_at: d.resolved_at,
        });

        Self {
            refund_id: raw.refund_id,
            status,
            raw_status: raw.status,
            payment_status,
            refund_type,
            return_request,
            dispute,
            buyer_notified_at: raw.buyer_notified_at,
            requested_at: raw.requested_at,
            processed_at: raw.processed_at,
        }
    }

    pub fn return_status(&self) -> Option<ReturnStatus> {
        self.return_request.as_ref().and_then(|rr| rr.status)
    }

    pub fn dispute_status(&self) -> Option<DisputeStatus> {
        self.dispute.as_ref().and_then(|d| d.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawDispute, RawRefund, RawReturnRequest};

    fn raw(status: &str) -> RawRefund {
        RawRefund {
            refund_id: "r1".to_string(),
            status: status.to_string(),
            refund_payment_status: None,
            refund_type: None,
            return_request: None,
            dispute_request: None,
            buyer_notified_at: None,
            requested_at: None,
            processed_at: None,
        }
    }

    #[test]
    fn refund_status_roundtrip() {
        let cases = [
            ("pending", RefundStatus::Pending),
            ("negotiation", RefundStatus::Negotiation),
            ("approved", RefundStatus::Approved),
            ("to_ship", RefundStatus::ToShip),
            ("to_verify", RefundStatus::ToVerify),
            ("to_process", RefundStatus::ToProcess),
            ("waiting", RefundStatus::Waiting),
            ("dispute", RefundStatus::Dispute),
            ("completed", RefundStatus::Completed),
            ("rejected", RefundStatus::Rejected),
            ("cancelled", RefundStatus::Cancelled),
            ("failed", RefundStatus::Failed),
        ];
        for (s, expected) in cases {
            assert_eq!(s.parse::<RefundStatus>().ok(), Some(expected), "parse {s}");
            assert_eq!(expected.to_string(), s, "display {s}");
        }
        assert_eq!("weird_state".parse::<RefundStatus>().ok(), None);
    }

    #[test]
    fn dispute_status_accepts_backend_aliases() {
        assert_eq!(
            "under_review".parse::<DisputeStatus>().ok(),
            Some(DisputeStatus::UnderReview)
        );
        assert_eq!(
            "started".parse::<DisputeStatus>().ok(),
            Some(DisputeStatus::UnderReview)
        );
        assert_eq!(
            "rejected".parse::<DisputeStatus>().ok(),
            Some(DisputeStatus::Rejected)
        );
        assert_eq!(
            "declined".parse::<DisputeStatus>().ok(),
            Some(DisputeStatus::Rejected)
        );
        assert_eq!(DisputeStatus::UnderReview.to_string(), "under_review");
        assert_eq!(DisputeStatus::Rejected.to_string(), "rejected");
    }

    #[test]
    fn from_raw_parses_known_fields() {
        let mut r = raw("approved");
        r.refund_payment_status = Some("pending".to_string());
        r.refund_type = Some("return".to_string());
        r.return_request = Some(RawReturnRequest {
            status: "shipped".to_string(),
        });
        r.dispute_request = Some(RawDispute {
            dispute_id: Some("d9".to_string()),
            status: "declined".to_string(),
            resolved_at: Some("2024-03-01T00:00:00Z".to_string()),
        });

        let refund = Refund::from_raw(r);
        assert_eq!(refund.status, Some(RefundStatus::Approved));
        assert_eq!(refund.payment_status, Some(PaymentStatus::Pending));
        assert_eq!(refund.refund_type, Some(RefundType::Return));
        assert_eq!(refund.return_status(), Some(ReturnStatus::Shipped));
        assert_eq!(refund.dispute_status(), Some(DisputeStatus::Rejected));
    }

    #[test]
    fn from_raw_tolerates_unknown_status_strings() {
        let mut r = raw("weird_state");
        r.refund_payment_status = Some("???".to_string());
        r.return_request = Some(RawReturnRequest {
            status: "lost_in_transit".to_string(),
        });

        let refund = Refund::from_raw(r);
        assert_eq!(refund.status, None);
        assert_eq!(refund.raw_status, "weird_state");
        assert_eq!(refund.payment_status, None);
        let rr = refund.return_request.as_ref();
        assert!(rr.is_some_and(|rr| rr.status.is_none()));
        assert!(rr.is_some_and(|rr| rr.raw_status == "lost_in_transit"));
    }

    #[test]
    fn from_raw_treats_missing_nested_rows_as_absent() {
        let refund = Refund::from_raw(raw("pending"));
        assert_eq!(refund.return_status(), None);
        assert_eq!(refund.dispute_status(), None);
        assert!(refund.buyer_notified_at.is_none());
    }
}

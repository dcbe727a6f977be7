use crate::refund::{PaymentStatus, Refund, RefundStatus, RefundType, ReturnStatus};

/// Top-level dashboard tab. The string form is what the dashboard
/// persists in the `?tab=` query parameter.
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
#[strum(serialize_all = "kebab-case")]
pub enum Tab {
    PendingRequest,
    ToProcess,
    Disputes,
    Completed,
}

impl Tab {
    /// Display order on the dashboard.
    pub const ALL: [Tab; 4] = [
        Tab::PendingRequest,
        Tab::ToProcess,
        Tab::Disputes,
        Tab::Completed,
    ];
}

/// Pure tab-membership predicate. Rules are evaluated independently per
/// tab; the rule set keeps the four buckets a partition of all field
/// combinations, so at most one tab claims any record.
pub fn classify(tab: Tab, refund: &Refund) -> bool {
    match tab {
        Tab::PendingRequest => {
            refund.status == Some(RefundStatus::Pending)
                && refund.payment_status == Some(PaymentStatus::Pending)
        }
        Tab::ToProcess => {
            in_negotiation(refund) || awaiting_return_leg(refund) || processing_payout(refund)
        }
        Tab::Disputes => refund.status == Some(RefundStatus::Dispute),
        Tab::Completed => {
            // An open dispute owns its record outright, even when the
            // payout row already reads completed.
            refund.status != Some(RefundStatus::Dispute)
                && (refund.payment_status == Some(PaymentStatus::Completed)
                    || matches!(
                        refund.status,
                        Some(
                            RefundStatus::Rejected
                                | RefundStatus::Cancelled
                                | RefundStatus::Failed
                        )
                    )
                    || (refund.status == Some(RefundStatus::Approved)
                        && refund.return_status() == Some(ReturnStatus::Rejected)))
        }
    }
}

fn in_negotiation(refund: &Refund) -> bool {
    refund.status == Some(RefundStatus::Negotiation)
        && refund.payment_status == Some(PaymentStatus::Pending)
}

/// Approved return-type refund whose shipment leg is still moving:
/// not yet shipped, in transit, awaiting inspection, or awaiting the
/// post-inspection decision. A rejected leg belongs to `completed`.
fn awaiting_return_leg(refund: &Refund) -> bool {
    if refund.refund_type != Some(RefundType::Return)
        || refund.status != Some(RefundStatus::Approved)
        || refund.payment_status != Some(PaymentStatus::Pending)
    {
        return false;
    }
    match &refund.return_request {
        None => true,
        Some(rr) => matches!(
            rr.status,
            Some(
                ReturnStatus::Approved
                    | ReturnStatus::Shipped
                    | ReturnStatus::Received
                    | ReturnStatus::Inspected
            )
        ),
    }
}

/// Approved refund with the payout in flight.
fn processing_payout(refund: &Refund) -> bool {
    if refund.status != Some(RefundStatus::Approved)
        || refund.payment_status != Some(PaymentStatus::Processing)
    {
        return false;
    }
    match refund.refund_type {
        // A rejected return leg lands in `completed` even while the
        // payout row still says processing.
        Some(RefundType::Keep) => refund.return_status() != Some(ReturnStatus::Rejected),
        Some(RefundType::Return) => refund.return_status() == Some(ReturnStatus::Approved),
        None => false,
    }
}

/// First tab (in display order) that claims the record, or `None` when
/// the record is surfaced in no tab at all.
pub fn bucket_for(refund: &Refund) -> Option<Tab> {
    let tab = Tab::ALL.into_iter().find(|tab| classify(*tab, refund));
    if tab.is_none() {
        tracing::debug!(
            refund_id = %refund.refund_id,
            status = %refund.raw_status,
            "refund matches no tab"
        );
    }
    tab
}

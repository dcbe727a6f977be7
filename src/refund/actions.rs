use crate::api::DisputeEndpoint;
use crate::refund::badge::Icon;
use crate::refund::dispute::resolve_dispute_actions;
use crate::refund::{Refund, RefundStatus, RefundType, ReturnStatus};
use crate::types::{ViewContext, ViewerRole};

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
pub enum ActionKind {
    View,
    Track,
    Ship,
    Approve,
    Decline,
    Partial,
    Process,
    StartReview,
}

/// What invoking an action does. A declarative description only — the
/// rendering layer decides routes and issues requests, and every POST
/// is followed by a full snapshot refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionTarget {
    /// Navigate to the refund detail view.
    RefundDetails { refund_id: String },
    /// Navigate to the return-shipment tracking view.
    ReturnTracking { refund_id: String },
    /// Navigate to the ship-item form.
    ShipForm { refund_id: String },
    /// POST to a dispute endpoint.
    DisputePost { endpoint: DisputeEndpoint },
    /// Trigger the payout flow for a decided dispute. The processing
    /// endpoint lives outside the dispute contract, so only the refund
    /// is named here.
    ProcessRefund { refund_id: String },
}

/// One user-facing action, resolved from a refund snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub label: &'static str,
    pub icon: Option<Icon>,
    pub enabled: bool,
    pub target: ActionTarget,
}

impl Action {
    fn navigate(kind: ActionKind, label: &'static str, icon: Icon, target: ActionTarget) -> Self {
        Self {
            kind,
            label,
            icon: Some(icon),
            enabled: true,
            target,
        }
    }
}

/// Resolve the action set for a refund snapshot.
///
/// Admins looking at a disputed refund get the privileged dispute
/// resolver; everyone else gets the buyer/seller rules below.
/// Priority-ordered and short-circuiting: a moving return leg wins over
/// everything, an approved-and-notified return without a leg yet asks
/// the buyer to ship, anything else gets a single detail action whose
/// label and icon follow the status.
pub fn resolve_actions(refund: &Refund, ctx: &ViewContext) -> Vec<Action> {
    if ctx.role == ViewerRole::Admin && refund.dispute.is_some() {
        return resolve_dispute_actions(refund);
    }
    if matches!(
        refund.return_status(),
        Some(ReturnStatus::Shipped | ReturnStatus::Received | ReturnStatus::Inspected)
    ) {
        return vec![Action::navigate(
            ActionKind::Track,
            "Track Status",
            Icon::Truck,
            ActionTarget::ReturnTracking {
                refund_id: refund.refund_id.clone(),
            },
        )];
    }

    if refund.refund_type == Some(RefundType::Return)
        && refund.status == Some(RefundStatus::Approved)
        && refund.buyer_notified_at.is_some()
        && refund.return_request.is_none()
    {
        return vec![Action::navigate(
            ActionKind::Ship,
            "Ship Item",
            Icon::Package,
            ActionTarget::ShipForm {
                refund_id: refund.refund_id.clone(),
            },
        )];
    }

    let (label, icon) = match refund.status {
        Some(RefundStatus::Approved) => ("View Details", Icon::Check),
        Some(RefundStatus::Dispute) => ("View Dispute", Icon::AlertTriangle),
        Some(RefundStatus::Rejected | RefundStatus::Cancelled | RefundStatus::Failed) => {
            ("View Details", Icon::FileText)
        }
        _ => ("View Details", Icon::Eye),
    };
    vec![Action::navigate(
        ActionKind::View,
        label,
        icon,
        ActionTarget::RefundDetails {
            refund_id: refund.refund_id.clone(),
        },
    )]
}

use crate::api::{DisputeEndpoint, dispute_action_path};
use crate::error::Error;
use crate::refund::actions::{Action, ActionKind, ActionTarget};
use crate::refund::badge::Icon;
use crate::refund::{Dispute, DisputeStatus, Refund};

/// UI state of the admin dispute-review surface, derived from the
/// dispute's status. Filed, pending, under-review, and anything
/// unrecognized all mean the decision is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisputeReviewState {
    Review,
    Approved,
    Partial,
    Declined,
}

pub fn review_state(dispute: &Dispute) -> DisputeReviewState {
    match dispute.status {
        Some(DisputeStatus::Approved) => DisputeReviewState::Approved,
        Some(DisputeStatus::Partial) => DisputeReviewState::Partial,
        Some(DisputeStatus::Rejected) => DisputeReviewState::Declined,
        _ => DisputeReviewState::Review,
    }
}

fn decision(
    kind: ActionKind,
    label: &'static str,
    enabled: bool,
    endpoint: DisputeEndpoint,
) -> Action {
    Action {
        kind,
        label,
        icon: None,
        enabled,
        target: ActionTarget::DisputePost { endpoint },
    }
}

/// Resolve the privileged admin action set for a disputed refund.
///
/// Decision buttons carry an `enabled` flag instead of being omitted:
/// each disables only once its own outcome is recorded, a declined
/// dispute disables every decision, and re-viewing details is always
/// available. A refund with no dispute attached yields only the view
/// action.
pub fn resolve_dispute_actions(refund: &Refund) -> Vec<Action> {
    let view = Action {
        kind: ActionKind::View,
        label: "View Details",
        icon: Some(Icon::Eye),
        enabled: true,
        target: ActionTarget::RefundDetails {
            refund_id: refund.refund_id.clone(),
        },
    };

    let Some(dispute) = &refund.dispute else {
        return vec![view];
    };
    let state = review_state(dispute);

    let mut actions = Vec::with_capacity(6);
    if matches!(
        dispute.status,
        Some(DisputeStatus::Filed | DisputeStatus::Pending)
    ) {
        actions.push(decision(
            ActionKind::StartReview,
            "Start Review",
            true,
            DisputeEndpoint::StartReview,
        ));
    }
    actions.push(decision(
        ActionKind::Approve,
        "Approve",
        matches!(state, DisputeReviewState::Review | DisputeReviewState::Partial),
        DisputeEndpoint::Accept,
    ));
    actions.push(decision(
        ActionKind::Decline,
        "Decline",
        matches!(
            state,
            DisputeReviewState::Review | DisputeReviewState::Approved | DisputeReviewState::Partial
        ),
        DisputeEndpoint::Reject,
    ));
    actions.push(decision(
        ActionKind::Partial,
        "Partial Refund",
        matches!(state, DisputeReviewState::Review | DisputeReviewState::Approved),
        DisputeEndpoint::Partial,
    ));
    actions.push(Action {
        kind: ActionKind::Process,
        label: "Process Refund",
        icon: None,
        enabled: matches!(
            state,
            DisputeReviewState::Approved | DisputeReviewState::Partial
        ),
        target: ActionTarget::ProcessRefund {
            refund_id: refund.refund_id.clone(),
        },
    });
    actions.push(view);
    actions
}

/// Build the POST path for a dispute action, validating locally that
/// the snapshot actually carries a dispute id before any network call.
pub fn dispute_post_path(refund: &Refund, endpoint: DisputeEndpoint) -> Result<String, Error> {
    let dispute = refund.dispute.as_ref().ok_or_else(|| Error::Validation {
        reason: "no dispute attached to this refund".to_string(),
    })?;
    let dispute_id = dispute
        .dispute_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::Validation {
            reason: "missing dispute id".to_string(),
        })?;
    Ok(dispute_action_path(dispute_id, endpoint))
}

/// Validate a user-typed partial-refund amount. Rejects empty,
/// non-numeric, non-finite, and non-positive input before any network
/// call is made.
pub fn validate_partial_amount(input: &str) -> Result<f64, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            reason: "Enter a refund amount".to_string(),
        });
    }
    let amount: f64 = trimmed.parse().map_err(|_| Error::Validation {
        reason: format!("Invalid refund amount: {trimmed}"),
    })?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::Validation {
            reason: "Refund amount must be greater than zero".to_string(),
        });
    }
    Ok(amount)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::refund::RefundStatus;

    fn disputed_refund(status: &str) -> Refund {
        Refund {
            refund_id: "r1".to_string(),
            status: Some(RefundStatus::Dispute),
            raw_status: "dispute".to_string(),
            payment_status: None,
            refund_type: None,
            return_request: None,
            dispute: Some(Dispute {
                dispute_id: Some("d1".to_string()),
                status: status.parse::<DisputeStatus>().ok(),
                raw_status: status.to_string(),
                resolved_at: None,
            }),
            buyer_notified_at: None,
            requested_at: None,
            processed_at: None,
        }
    }

    fn enabled_of(actions: &[Action], kind: ActionKind) -> bool {
        actions
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.enabled)
            .unwrap()
    }

    #[test]
    fn review_state_derivation() {
        for status in ["filed", "pending", "under_review", "started", "???"] {
            let r = disputed_refund(status);
            assert_eq!(
                review_state(r.dispute.as_ref().unwrap()),
                DisputeReviewState::Review,
                "status {status}"
            );
        }
        let approved = disputed_refund("approved");
        assert_eq!(
            review_state(approved.dispute.as_ref().unwrap()),
            DisputeReviewState::Approved
        );
        let partial = disputed_refund("partial");
        assert_eq!(
            review_state(partial.dispute.as_ref().unwrap()),
            DisputeReviewState::Partial
        );
        for status in ["rejected", "declined"] {
            let r = disputed_refund(status);
            assert_eq!(
                review_state(r.dispute.as_ref().unwrap()),
                DisputeReviewState::Declined,
                "status {status}"
            );
        }
    }

    #[test]
    fn review_state_enables_decisions_but_not_process() {
        let actions = resolve_dispute_actions(&disputed_refund("under_review"));
        assert!(enabled_of(&actions, ActionKind::Approve));
        assert!(enabled_of(&actions, ActionKind::Decline));
        assert!(enabled_of(&actions, ActionKind::Partial));
        assert!(!enabled_of(&actions, ActionKind::Process));
        assert!(enabled_of(&actions, ActionKind::View));
        assert!(!actions.iter().any(|a| a.kind == ActionKind::StartReview));
    }

    #[test]
    fn approved_state_disables_only_approve_and_enables_process() {
        let actions = resolve_dispute_actions(&disputed_refund("approved"));
        assert!(!enabled_of(&actions, ActionKind::Approve));
        assert!(enabled_of(&actions, ActionKind::Decline));
        assert!(enabled_of(&actions, ActionKind::Partial));
        assert!(enabled_of(&actions, ActionKind::Process));
    }

    #[test]
    fn partial_state_disables_only_partial_and_enables_process() {
        let actions = resolve_dispute_actions(&disputed_refund("partial"));
        assert!(enabled_of(&actions, ActionKind::Approve));
        assert!(enabled_of(&actions, ActionKind::Decline));
        assert!(!enabled_of(&actions, ActionKind::Partial));
        assert!(enabled_of(&actions, ActionKind::Process));
    }

    #[test]
    fn declined_state_disables_everything_but_view() {
        for status in ["rejected", "declined"] {
            let actions = resolve_dispute_actions(&disputed_refund(status));
            assert!(!enabled_of(&actions, ActionKind::Approve), "{status}");
            assert!(!enabled_of(&actions, ActionKind::Decline), "{status}");
            assert!(!enabled_of(&actions, ActionKind::Partial), "{status}");
            assert!(!enabled_of(&actions, ActionKind::Process), "{status}");
            assert!(enabled_of(&actions, ActionKind::View), "{status}");
        }
    }

    #[test]
    fn start_review_offered_only_before_review_begins() {
        for status in ["filed", "pending"] {
            let actions = resolve_dispute_actions(&disputed_refund(status));
            assert!(
                actions
                    .iter()
                    .any(|a| a.kind == ActionKind::StartReview && a.enabled),
                "{status}"
            );
        }
        for status in ["under_review", "approved", "partial", "rejected"] {
            let actions = resolve_dispute_actions(&disputed_refund(status));
            assert!(
                !actions.iter().any(|a| a.kind == ActionKind::StartReview),
                "{status}"
            );
        }
    }

    #[test]
    fn refund_without_dispute_yields_view_only() {
        let mut r = disputed_refund("filed");
        r.dispute = None;
        let actions = resolve_dispute_actions(&r);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].kind, ActionKind::View);
    }

    #[test]
    fn dispute_post_path_validates_id_presence() {
        let r = disputed_refund("under_review");
        assert_eq!(
            dispute_post_path(&r, DisputeEndpoint::Accept).unwrap(),
            "/disputes/d1/accept/"
        );

        let mut missing_id = disputed_refund("under_review");
        if let Some(d) = missing_id.dispute.as_mut() {
            d.dispute_id = None;
        }
        let err = dispute_post_path(&missing_id, DisputeEndpoint::Accept).unwrap_err();
        assert!(err.to_string().contains("missing dispute id"));

        let mut no_dispute = disputed_refund("under_review");
        no_dispute.dispute = None;
        assert!(dispute_post_path(&no_dispute, DisputeEndpoint::Accept).is_err());
    }

    #[test]
    fn partial_amount_accepts_positive_numbers() {
        assert_eq!(validate_partial_amount("25").unwrap(), 25.0);
        assert_eq!(validate_partial_amount("12.50").unwrap(), 12.5);
        assert_eq!(validate_partial_amount("  3.99  ").unwrap(), 3.99);
    }

    #[test]
    fn partial_amount_rejects_bad_input_locally() {
        for input in ["0", "-5", "abc", "", "  ", "NaN", "inf"] {
            let err = validate_partial_amount(input).unwrap_err();
            assert!(
                matches!(err, Error::Validation { .. }),
                "input {input:?} should be a validation error"
            );
        }
    }
}

use crate::refund::Refund;
use crate::refund::actions::{Action, ActionKind, resolve_actions};
use crate::refund::badge::{Badge, badge};
use crate::refund::tab::{Tab, bucket_for, classify};
use crate::types::ViewContext;

/// Everything the dashboard needs to render one refund row: its tab
/// bucket, badge, and action set.
#[derive(Debug, Clone, PartialEq)]
pub struct RefundView {
    pub bucket: Option<Tab>,
    pub badge: Badge,
    pub actions: Vec<Action>,
}

impl RefundView {
    /// One full reclassify pass over a snapshot. The caller re-runs
    /// this after every refetch; nothing is patched incrementally, so
    /// the view can never diverge from the backend's record.
    pub fn project(refund: &Refund, ctx: &ViewContext) -> Self {
        Self {
            bucket: bucket_for(refund),
            badge: badge(refund),
            actions: resolve_actions(refund, ctx),
        }
    }
}

/// Records a tab displays, in input order.
pub fn filter_tab<'a>(tab: Tab, refunds: &'a [Refund]) -> Vec<&'a Refund> {
    refunds.iter().filter(|r| classify(tab, r)).collect()
}

/// Per-action in-flight flag. Disabling the triggering control while a
/// request is outstanding is the only duplicate-submission guard the
/// dashboard has — no idempotency keys, no request dedup.
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    in_flight: Vec<ActionKind>,
}

impl SubmissionGuard {
    /// Claim the flag for an action kind. Returns `false` when a
    /// request of that kind is already outstanding.
    pub fn try_begin(&mut self, kind: ActionKind) -> bool {
        if self.in_flight.contains(&kind) {
            return false;
        }
        self.in_flight.push(kind);
        true
    }

    pub fn finish(&mut self, kind: ActionKind) {
        self.in_flight.retain(|k| *k != kind);
    }

    pub fn is_submitting(&self, kind: ActionKind) -> bool {
        self.in_flight.contains(&kind)
    }
}

#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod api;
pub mod error;
pub mod refund;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use api::{
    DisputeEndpoint, admin_refund_details_path, dispute_action_path, extract_error_message,
    my_refunds_path, parse_refund, parse_refund_list,
};
pub use error::Error;
pub use refund::actions::{Action, ActionKind, ActionTarget, resolve_actions};
pub use refund::badge::{Badge, Icon, Tone, badge, badge_for_status, effective_status};
pub use refund::dispute::{
    DisputeReviewState, dispute_post_path, resolve_dispute_actions, review_state,
    validate_partial_amount,
};
pub use refund::tab::{Tab, bucket_for, classify};
pub use refund::view::{RefundView, SubmissionGuard, filter_tab};
pub use refund::{
    Dispute, DisputeStatus, PaymentStatus, Refund, RefundStatus, RefundType, ReturnRequest,
    ReturnStatus,
};
pub use types::{RawDispute, RawRefund, RawReturnRequest, ViewContext, ViewerRole};

use wasm_bindgen::prelude::*;

use crate::refund::actions::{Action, ActionTarget, resolve_actions};
use crate::refund::badge::{Badge, badge};
use crate::refund::dispute::validate_partial_amount;
use crate::refund::tab::{Tab, bucket_for, classify};
use crate::refund::view::RefundView;
use crate::refund::Refund;
use crate::types::{RawRefund, ViewContext, ViewerRole};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn parse_record(json: &str) -> Result<Refund, JsValue> {
    let raw: RawRefund = serde_json::from_str(json)
        .map_err(|e| error_result(&format!("Invalid refund record: {e}")))?;
    Ok(Refund::from_raw(raw))
}

fn parse_role(role: &str) -> ViewerRole {
    match role {
        "admin" => ViewerRole::Admin,
        "seller" => ViewerRole::Seller,
        _ => ViewerRole::Buyer,
    }
}

fn badge_json(badge: &Badge) -> serde_json::Value {
    serde_json::json!({
        "label": badge.label,
        "tone": badge.tone.as_ref(),
        "icon": badge.icon.as_ref(),
    })
}

fn target_json(target: &ActionTarget) -> serde_json::Value {
    match target {
        ActionTarget::RefundDetails { refund_id } => {
            serde_json::json!({"type": "refund_details", "refundId": refund_id})
        }
        ActionTarget::ReturnTracking { refund_id } => {
            serde_json::json!({"type": "return_tracking", "refundId": refund_id})
        }
        ActionTarget::ShipForm { refund_id } => {
            serde_json::json!({"type": "ship_form", "refundId": refund_id})
        }
        ActionTarget::DisputePost { endpoint } => {
            serde_json::json!({"type": "dispute_post", "endpoint": endpoint.segment()})
        }
        ActionTarget::ProcessRefund { refund_id } => {
            serde_json::json!({"type": "process_refund", "refundId": refund_id})
        }
    }
}

fn action_json(action: &Action) -> serde_json::Value {
    serde_json::json!({
        "kind": action.kind.as_ref(),
        "label": action.label,
        "icon": action.icon.map(|i| i.as_ref().to_string()),
        "enabled": action.enabled,
        "target": target_json(&action.target),
    })
}

/// Tab ids in display order.
#[wasm_bindgen]
pub fn get_all_tabs() -> JsValue {
    let tabs: Vec<serde_json::Value> = Tab::ALL
        .iter()
        .map(|t| serde_json::Value::String(t.as_ref().to_string()))
        .collect();
    to_js(&serde_json::Value::Array(tabs))
}

/// Whether a refund record belongs to a tab.
#[wasm_bindgen]
pub fn classify_tab(tab: &str, record_json: &str) -> JsValue {
    let Ok(tab) = tab.parse::<Tab>() else {
        return error_result("Unknown tab");
    };
    let record = match parse_record(record_json) {
        Ok(r) => r,
        Err(err) => return err,
    };
    to_js(&serde_json::json!({
        "tab": tab.as_ref(),
        "matches": classify(tab, &record),
    }))
}

/// Bucket and badge for one refund record.
#[wasm_bindgen]
pub fn classify_refund(record_json: &str) -> JsValue {
    let record = match parse_record(record_json) {
        Ok(r) => r,
        Err(err) => return err,
    };
    to_js(&serde_json::json!({
        "refundId": record.refund_id,
        "bucket": bucket_for(&record).map(|t| t.as_ref().to_string()),
        "badge": badge_json(&badge(&record)),
    }))
}

/// Resolved action set for one refund record, for the given role.
#[wasm_bindgen]
pub fn refund_actions(record_json: &str, role: &str) -> JsValue {
    let record = match parse_record(record_json) {
        Ok(r) => r,
        Err(err) => return err,
    };
    let ctx = ViewContext {
        role: parse_role(role),
    };
    let actions = resolve_actions(&record, &ctx);
    let list: Vec<serde_json::Value> = actions.iter().map(action_json).collect();
    to_js(&serde_json::Value::Array(list))
}

/// Full view projection: bucket, badge, and actions in one call.
#[wasm_bindgen]
pub fn project_refund(record_json: &str, role: &str) -> JsValue {
    let record = match parse_record(record_json) {
        Ok(r) => r,
        Err(err) => return err,
    };
    let ctx = ViewContext {
        role: parse_role(role),
    };
    let view = RefundView::project(&record, &ctx);
    let list: Vec<serde_json::Value> = view.actions.iter().map(action_json).collect();
    to_js(&serde_json::json!({
        "refundId": record.refund_id,
        "bucket": view.bucket.map(|t| t.as_ref().to_string()),
        "badge": badge_json(&view.badge),
        "actions": list,
    }))
}

/// Validate a partial-refund amount before any network call.
#[wasm_bindgen]
pub fn wasm_validate_partial_amount(input: &str) -> JsValue {
    match validate_partial_amount(input) {
        Ok(amount) => to_js(&serde_json::json!({"amount": amount})),
        Err(e) => error_result(&e.to_string()),
    }
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}

/// A refund row as returned by the marketplace backend.
///
/// The backend owns every mutation; this crate only reads snapshots.
/// All secondary fields are optional — older rows and partially-populated
/// admin payloads omit them freely.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawRefund {
    /// Opaque refund identifier, unique per record.
    pub refund_id: String,
    /// Top-level lifecycle status string (e.g. `"approved"`).
    pub status: String,
    /// Payment-side status, an independent axis from `status`.
    #[serde(default)]
    pub refund_payment_status: Option<String>,
    /// `"return"` (buyer ships the item back) or `"keep"`.
    #[serde(default)]
    pub refund_type: Option<String>,
    /// Present once the buyer or seller opened a return shipment.
    #[serde(default)]
    pub return_request: Option<RawReturnRequest>,
    /// Present once a dispute was filed. Some endpoints nest it under
    /// `dispute` instead of `dispute_request`.
    #[serde(default, alias = "dispute")]
    pub dispute_request: Option<RawDispute>,
    /// Set when the seller has notified the buyer of an approval that
    /// requires buyer action. Presence is what matters, not the value.
    #[serde(default)]
    pub buyer_notified_at: Option<String>,
    #[serde(default)]
    pub requested_at: Option<String>,
    #[serde(default)]
    pub processed_at: Option<String>,
}

/// Nested return-shipment row.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawReturnRequest {
    /// Shipment-side status string (e.g. `"shipped"`).
    pub status: String,
}

/// Nested dispute row.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawDispute {
    /// Dispute identifier, needed to address the dispute endpoints.
    /// Some list payloads omit it; acting on such a row is a local
    /// validation error, not a crash.
    #[serde(default, alias = "id")]
    pub dispute_id: Option<String>,
    /// Dispute status string (e.g. `"under_review"`).
    pub status: String,
    #[serde(default)]
    pub resolved_at: Option<String>,
}

/// Who is looking at the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerRole {
    Buyer,
    Seller,
    Admin,
}

/// Caller-supplied context for view projection.
///
/// The original dashboard read the session user from ambient provider
/// state. Passing it in explicitly keeps the classifier and resolvers
/// pure and testable in isolation.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    /// Role of the viewer; admins with a dispute attached get the
    /// privileged dispute resolver.
    pub role: ViewerRole,
}

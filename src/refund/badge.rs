use crate::refund::Refund;

/// Color family of a status badge. The dashboard maps the string form
/// onto its own css classes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Yellow,
    Blue,
    Green,
    Orange,
    Purple,
    Indigo,
    Red,
    Gray,
}

/// Icon slug of a status badge or action button.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    Clock,
    Message,
    Check,
    Truck,
    Package,
    Eye,
    AlertTriangle,
    CheckSquare,
    Ban,
    XCircle,
    FileText,
}

/// Display descriptor for a refund's status badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
    pub icon: Icon,
}

/// Static descriptor table keyed by the effective status string.
const BADGES: &[(&str, &str, Tone, Icon)] = &[
    ("pending", "Pending", Tone::Yellow, Icon::Clock),
    ("negotiation", "Negotiation", Tone::Blue, Icon::Message),
    ("approved", "Approved", Tone::Green, Icon::Check),
    ("to_ship", "To Ship", Tone::Orange, Icon::Truck),
    ("shipped", "Shipped", Tone::Blue, Icon::Truck),
    ("received", "Received", Tone::Purple, Icon::Package),
    ("inspected", "Inspected", Tone::Indigo, Icon::Eye),
    ("dispute", "Dispute", Tone::Red, Icon::AlertTriangle),
    ("completed", "Completed", Tone::Green, Icon::CheckSquare),
    ("cancelled", "Cancelled", Tone::Gray, Icon::Ban),
    ("rejected", "Rejected", Tone::Red, Icon::XCircle),
    ("failed", "Failed", Tone::Red, Icon::XCircle),
];

/// The status string a badge is derived from: a present return-shipment
/// leg overrides the top-level status for display purposes.
pub fn effective_status(refund: &Refund) -> &str {
    match &refund.return_request {
        Some(rr) if !rr.raw_status.is_empty() => &rr.raw_status,
        _ => &refund.raw_status,
    }
}

/// Badge for a refund snapshot. Never fails.
pub fn badge(refund: &Refund) -> Badge {
    badge_for_status(effective_status(refund))
}

/// Badge for a raw status string. Unknown statuses get a generic gray
/// clock descriptor echoing the string itself as the label.
pub fn badge_for_status(status: &str) -> Badge {
    BADGES
        .iter()
        .find(|(key, _, _, _)| *key == status)
        .map_or_else(
            || Badge {
                label: status.to_string(),
                tone: Tone::Gray,
                icon: Icon::Clock,
            },
            |(_, label, tone, icon)| Badge {
                label: (*label).to_string(),
                tone: *tone,
                icon: *icon,
            },
        )
}

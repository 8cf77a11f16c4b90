//! The one network this demo operates on, with its display label.
//!
//! The label map is two-way and currently has a single known entry; unknown
//! chain ids fall back to a generic `Chain <id>` label.

/// Base Sepolia testnet. Every permission the builder emits targets it.
pub const BASE_SEPOLIA_CHAIN_ID: &str = "84532";

pub const BASE_SEPOLIA_LABEL: &str = "Base Sepolia (testnet)";

pub fn label_for_chain(chain_id: &str) -> String {
    match chain_id {
        BASE_SEPOLIA_CHAIN_ID => BASE_SEPOLIA_LABEL.to_string(),
        other => format!("Chain {other}"),
    }
}

pub fn chain_for_label(label: &str) -> Option<&'static str> {
    (label == BASE_SEPOLIA_LABEL).then_some(BASE_SEPOLIA_CHAIN_ID)
}

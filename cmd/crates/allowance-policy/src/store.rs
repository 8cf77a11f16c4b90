//! Text encoding of the persisted policy record.
//!
//! The record carries the policy, the child's email, and a creation
//! timestamp. There is no version field; a format change silently breaks
//! older blobs, which then read as absent and fall back to the default demo
//! policy. Where the blob lives (a file, a browser storage slot) is the
//! caller's concern.

use serde::{Deserialize, Serialize};

use crate::types::ParaPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPolicyData {
    pub policy: ParaPolicy,
    pub child_email: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

pub fn encode(data: &StoredPolicyData) -> Result<String, serde_json::Error> {
    serde_json::to_string(data)
}

/// Decode a stored blob. Anything that fails to parse as the expected
/// structure reads as absent rather than an error; the caller falls back to
/// its default policy. Parsed-but-incomplete documents are not validated
/// here; downstream lookups are defensive and degrade to defaults.
pub fn decode(raw: &str) -> Option<StoredPolicyData> {
    serde_json::from_str(raw).ok()
}

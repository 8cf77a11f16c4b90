//! The single named slot the policy record round-trips through: one writer
//! (the parent's confirm step), any number of readers, last write wins,
//! never deleted by the application.

use std::path::PathBuf;

use allowance_policy::store::{self, StoredPolicyData};

use super::data;

/// Fixed slot name. The record is stored as `<name>.json` in the data dir.
pub const POLICY_STORAGE_KEY: &str = "allowance_wallet_policy";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Data(#[from] data::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub fn path() -> Result<PathBuf, Error> {
    Ok(data::data_local_dir()?
        .join(POLICY_STORAGE_KEY)
        .with_extension("json"))
}

/// Persist the record, best-effort. Storage failures are logged and
/// swallowed; the caller's flow continues either way.
pub fn save(record: &StoredPolicyData) {
    match try_save(record) {
        Ok(path) => tracing::debug!("stored policy written to {path:?}"),
        Err(e) => tracing::warn!("could not store policy, continuing without: {e}"),
    }
}

fn try_save(record: &StoredPolicyData) -> Result<PathBuf, Error> {
    data::ensure_data_local_dir()?;
    let path = path()?;
    std::fs::write(&path, store::encode(record)?)?;
    Ok(path)
}

/// Read the slot. A missing file or an unparseable blob reads as `None`;
/// the caller falls back to the default demo policy.
pub fn load() -> Option<StoredPolicyData> {
    let path = path().ok()?;
    let raw = std::fs::read_to_string(path).ok()?;
    store::decode(&raw)
}

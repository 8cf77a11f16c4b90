//! Simulated Para embedded-wallet platform.
//!
//! In the real system Para's backend holds the keys, signs through MPC, and
//! evaluates the stored policy before every signature. This module stands in
//! for that surface: wallet records live in the local data dir, transaction
//! submission replays the policy evaluation Para would perform server-side,
//! and denials surface as the same typed review errors the SDK raises.

pub mod review;

pub use review::{classify_submit_error, TxDisposition};

use chrono::Utc;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use allowance_policy::chain::BASE_SEPOLIA_CHAIN_ID;
use allowance_policy::types::{
    ConditionComparator, ConditionReference, ConditionResource, ParaPolicy, PermissionEffect,
    PermissionType,
};
use allowance_policy::{builder, render};

use crate::config::{data, slot};

/// Env var holding the Para API key. The simulation only checks that it is
/// non-empty.
pub const API_KEY_ENV: &str = "PARA_API_KEY";

const WALLET_FILE: &str = "wallet";
const REVIEW_URL_BASE: &str = "https://app.getpara.com/review";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{API_KEY_ENV} is not set; add it to the environment or a .env file")]
    MissingApiKey,
    #[error("wallet already exists")]
    WalletExists,
    #[error("no wallet found; run `allowance wallet create` first")]
    WalletNotFound,
    #[error("Para denied this transaction: {reason}")]
    TransactionReviewDenied { reason: String },
    #[error("Para transaction review required: {reason}")]
    TransactionReviewRequired { reason: String, review_url: String },
    #[error(transparent)]
    Data(#[from] data::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum WalletType {
    Evm,
}

impl WalletType {
    fn as_str(self) -> &'static str {
        match self {
            WalletType::Evm => "EVM",
        }
    }
}

impl std::fmt::Display for WalletType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletType::Evm => write!(f, "evm"),
        }
    }
}

/// The wallet record Para would hold for the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub address: String,
    pub wallet_type: String,
    pub created_at: i64,
}

pub struct Client {
    #[allow(dead_code)]
    api_key: String,
}

impl Client {
    pub fn new(api_key: &str) -> Result<Self, Error> {
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(Self {
            api_key: api_key.to_string(),
        })
    }

    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Self::new(&api_key)
    }

    /// Create the embedded wallet for the current account. Fails with
    /// [`Error::WalletExists`] if one was already created; callers treat
    /// that as success, since the goal is to have a wallet.
    pub async fn create_wallet(&self, wallet_type: WalletType) -> Result<Wallet, Error> {
        let path = wallet_path()?;
        if path.exists() {
            return Err(Error::WalletExists);
        }

        let wallet = Wallet {
            address: random_address(),
            wallet_type: wallet_type.as_str().to_string(),
            created_at: Utc::now().timestamp_millis(),
        };
        data::ensure_data_local_dir()?;
        std::fs::write(&path, serde_json::to_string_pretty(&wallet)?)?;
        tracing::debug!("wallet record written to {path:?}");
        Ok(wallet)
    }

    /// The wallet-data accessor: `None` when no wallet has been created.
    pub async fn wallet(&self) -> Result<Option<Wallet>, Error> {
        let path = wallet_path()?;
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Submit a transfer on Base Sepolia. The active policy is evaluated the
    /// way Para's rules engine would before signing; an in-policy transfer
    /// returns the (simulated) transaction hash.
    pub async fn send_transaction(&self, to: &str, value_usd: u32) -> Result<String, Error> {
        let wallet = self.wallet().await?.ok_or(Error::WalletNotFound)?;
        tracing::debug!("submitting from {} to {to} (${value_usd})", wallet.address);

        let policy = slot::load().map_or_else(
            || builder::default_demo_policy("child@test.getpara.com"),
            |record| record.policy,
        );
        evaluate(&policy, to, value_usd)?;

        Ok(random_hash())
    }
}

/// Replay of Para's server-side policy evaluation for a Base Sepolia
/// transfer. VALUE EQUALS is applied as a ceiling, matching the platform's
/// reading of the comparator.
fn evaluate(policy: &ParaPolicy, to: &str, value_usd: u32) -> Result<(), Error> {
    let transfer = policy
        .scopes
        .iter()
        .flat_map(|scope| &scope.permissions)
        .find(|permission| {
            permission.effect == PermissionEffect::Allow
                && permission.permission_type == PermissionType::Transfer
        });

    let Some(transfer) = transfer else {
        return Err(Error::TransactionReviewDenied {
            reason: "the policy grants no transfer permission".to_string(),
        });
    };

    if transfer.chain_id != BASE_SEPOLIA_CHAIN_ID {
        return Err(Error::TransactionReviewDenied {
            reason: format!(
                "transfers are only permitted on chain {}, not {}",
                transfer.chain_id, BASE_SEPOLIA_CHAIN_ID
            ),
        });
    }

    let value_cap = transfer.conditions.iter().find_map(|c| {
        match (&c.resource, &c.comparator, &c.reference) {
            (
                ConditionResource::Value,
                ConditionComparator::Equals,
                ConditionReference::Amount(max),
            ) => Some(*max),
            _ => None,
        }
    });
    if let Some(max) = value_cap {
        if value_usd > max {
            return Err(Error::TransactionReviewDenied {
                reason: format!(
                    "value ${value_usd} USD exceeds the ${max} USD per-transaction cap"
                ),
            });
        }
    }

    let allowlist = transfer.conditions.iter().find_map(|c| {
        match (&c.resource, &c.comparator, &c.reference) {
            (
                ConditionResource::ToAddress,
                ConditionComparator::IncludedIn,
                ConditionReference::List(addresses),
            ) => Some(addresses),
            _ => None,
        }
    });
    if let Some(addresses) = allowlist {
        let approved = addresses.iter().any(|a| a.eq_ignore_ascii_case(to));
        if !addresses.is_empty() && !approved {
            // Off-allowlist recipients go to parent review rather than a
            // hard deny.
            return Err(Error::TransactionReviewRequired {
                reason: format!("recipient {to} is not on the approved address list"),
                review_url: format!("{REVIEW_URL_BASE}/{}", random_review_id()),
            });
        }
    }

    tracing::debug!(
        "transfer within policy: {}",
        render::to_readable_rules(policy).join("; ")
    );
    Ok(())
}

fn wallet_path() -> Result<PathBuf, Error> {
    Ok(data::data_local_dir()?
        .join(WALLET_FILE)
        .with_extension("json"))
}

fn random_address() -> String {
    let mut bytes = [0u8; 20];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}

fn random_hash() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}

fn random_review_id() -> String {
    let mut bytes = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Block explorer link for a submitted transaction.
pub fn explorer_url_for_transaction(hash: &str) -> String {
    format!("https://sepolia.basescan.org/tx/{hash}")
}

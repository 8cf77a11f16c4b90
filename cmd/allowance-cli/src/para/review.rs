//! Classification of transaction-submission failures.
//!
//! Para's typed review errors are the clean path. Errors that arrive without
//! structure fall back to substring matching, which is best-effort and lossy:
//! a generic message that happens to contain one of the tokens (say, an IO
//! error mentioning "permission") will be classified as blocked.

use super::Error;

/// Tokens that mark an untyped error message as policy-related.
const BLOCKED_TOKENS: &[&str] = &[
    "denied",
    "blocked",
    "policy",
    "permission",
    "403",
    "forbidden",
    "review",
];

/// Outcome of classifying a failed submission. Only the blocked variant
/// carries a review link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxDisposition {
    Blocked {
        reason: String,
        review_url: Option<String>,
    },
    Failed {
        reason: String,
    },
}

pub fn classify_submit_error(err: &Error) -> TxDisposition {
    match err {
        Error::TransactionReviewDenied { reason } => TxDisposition::Blocked {
            reason: reason.clone(),
            review_url: None,
        },
        Error::TransactionReviewRequired { reason, review_url } => TxDisposition::Blocked {
            reason: reason.clone(),
            review_url: Some(review_url.clone()),
        },
        other => {
            let message = other.to_string();
            let lower = message.to_lowercase();
            let blocked = BLOCKED_TOKENS.iter().any(|token| lower.contains(token));

            let reason = trim_payload(&message);
            if blocked {
                TxDisposition::Blocked {
                    reason,
                    review_url: None,
                }
            } else {
                TxDisposition::Failed { reason }
            }
        }
    }
}

/// Strip a trailing JSON payload from an error message, cutting at the first
/// `{` when it is not the leading character.
fn trim_payload(message: &str) -> String {
    let trimmed = match message.find('{') {
        Some(i) if i > 0 => message[..i].trim(),
        _ => message.trim(),
    };
    if trimmed.is_empty() {
        "Transaction was rejected".to_string()
    } else {
        trimmed.to_string()
    }
}

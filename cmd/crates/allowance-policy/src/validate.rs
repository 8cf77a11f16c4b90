//! Form-layer validation, run before a policy is ever built. The builder
//! itself accepts whatever it is given.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::AllowanceConfig;

pub const MIN_VALUE_USD: u32 = 1;
pub const MAX_VALUE_USD: u32 = 1000;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid recipient address {0}: must be a valid 0x Ethereum address")]
    InvalidAddress(String),
    #[error("recipient address {0} is already on the allowlist")]
    DuplicateAddress(String),
    #[error("child email is required")]
    MissingChildEmail,
    #[error("invalid child email: {0}")]
    InvalidChildEmail(String),
    #[error("maximum transaction value must be at least ${MIN_VALUE_USD}")]
    ValueTooLow,
    #[error("maximum transaction value must be at most ${MAX_VALUE_USD}")]
    ValueTooHigh,
}

fn address_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^0x[0-9a-fA-F]{40}$").unwrap())
}

pub fn is_valid_address(address: &str) -> bool {
    address_pattern().is_match(address)
}

pub fn validate(config: &AllowanceConfig) -> Result<(), Error> {
    if config.max_transaction_value_usd < MIN_VALUE_USD {
        return Err(Error::ValueTooLow);
    }
    if config.max_transaction_value_usd > MAX_VALUE_USD {
        return Err(Error::ValueTooHigh);
    }

    for (i, address) in config.allowlisted_addresses.iter().enumerate() {
        if !is_valid_address(address) {
            return Err(Error::InvalidAddress(address.clone()));
        }
        if config.allowlisted_addresses[..i].contains(address) {
            return Err(Error::DuplicateAddress(address.clone()));
        }
    }

    if config.child_email.is_empty() {
        return Err(Error::MissingChildEmail);
    }
    if !config.child_email.contains('@') {
        return Err(Error::InvalidChildEmail(config.child_email.clone()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    fn config() -> AllowanceConfig {
        AllowanceConfig {
            max_transaction_value_usd: 15,
            allowlisted_addresses: vec![],
            child_email: "kid@test.getpara.com".to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_config() {
        let mut config = config();
        config.allowlisted_addresses.push(GOOD_ADDRESS.to_string());
        assert_eq!(validate(&config), Ok(()));
    }

    #[test]
    fn address_must_be_forty_hex_digits() {
        assert!(is_valid_address(GOOD_ADDRESS));
        assert!(!is_valid_address("0x123"));
        assert!(!is_valid_address("52908400098527886E0F7030069857D2E4169EE7"));
        assert!(!is_valid_address("0xZZ908400098527886E0F7030069857D2E4169EE7"));
    }

    #[test]
    fn rejects_duplicate_addresses() {
        let mut config = config();
        config.allowlisted_addresses = vec![GOOD_ADDRESS.to_string(), GOOD_ADDRESS.to_string()];
        assert_eq!(
            validate(&config),
            Err(Error::DuplicateAddress(GOOD_ADDRESS.to_string()))
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut config = config();
        config.max_transaction_value_usd = 0;
        assert_eq!(validate(&config), Err(Error::ValueTooLow));
        config.max_transaction_value_usd = 1001;
        assert_eq!(validate(&config), Err(Error::ValueTooHigh));
    }

    #[test]
    fn rejects_bad_emails() {
        let mut config = config();
        config.child_email = String::new();
        assert_eq!(validate(&config), Err(Error::MissingChildEmail));
        config.child_email = "not-an-email".to_string();
        assert_eq!(
            validate(&config),
            Err(Error::InvalidChildEmail("not-an-email".to_string()))
        );
    }
}

use crate::chain::BASE_SEPOLIA_CHAIN_ID;
use crate::types::{
    AllowanceConfig, ConditionComparator, ConditionReference, ConditionResource, ConditionType,
    ParaPolicy, PermissionEffect, PermissionType, PolicyCondition, PolicyPermission, PolicyScope,
};

/// Partner id stamped on every policy this demo produces.
pub const DEFAULT_PARTNER_ID: &str = "allowance-wallet-beta";

/// Cap used by the default demo policy when no stored policy exists.
pub const DEFAULT_MAX_USD: u32 = 15;

/// Build a Para-compliant policy from an allowance config.
///
/// Rules encoded:
///  - ALLOW TRANSFER on Base with a VALUE cap of `max_transaction_value_usd`
///  - optional TO_ADDRESS INCLUDED_IN allowlist, order preserved
///  - DENY DEPLOY_CONTRACT on Base
///
/// Deterministic and total; performs no validation. Range and address checks
/// are the form layer's job (`crate::validate`), done before this is called.
pub fn build_allowance_policy(config: &AllowanceConfig, partner_id: &str) -> ParaPolicy {
    // Para's backend treats VALUE EQUALS as the per-transaction ceiling.
    // EQUALS is what the schema expects here even though the rule reads as
    // "up to"; see the comparator note in DESIGN.md before changing it.
    let mut transfer_conditions = vec![PolicyCondition {
        condition_type: ConditionType::Static,
        resource: ConditionResource::Value,
        comparator: ConditionComparator::Equals,
        reference: ConditionReference::Amount(config.max_transaction_value_usd),
    }];

    if !config.allowlisted_addresses.is_empty() {
        transfer_conditions.push(PolicyCondition {
            condition_type: ConditionType::Static,
            resource: ConditionResource::ToAddress,
            comparator: ConditionComparator::IncludedIn,
            reference: ConditionReference::List(config.allowlisted_addresses.clone()),
        });
    }

    ParaPolicy {
        partner_id: partner_id.to_string(),
        valid_from: None,
        valid_to: None,
        scopes: vec![PolicyScope {
            name: "Allowance Transfer".to_string(),
            description: format!(
                "Send up to ${} USD per transaction on Base network",
                config.max_transaction_value_usd
            ),
            required: true,
            permissions: vec![
                PolicyPermission {
                    effect: PermissionEffect::Allow,
                    chain_id: BASE_SEPOLIA_CHAIN_ID.to_string(),
                    permission_type: PermissionType::Transfer,
                    smart_contract_function: None,
                    smart_contract_address: None,
                    conditions: transfer_conditions,
                },
                PolicyPermission {
                    effect: PermissionEffect::Deny,
                    chain_id: BASE_SEPOLIA_CHAIN_ID.to_string(),
                    permission_type: PermissionType::DeployContract,
                    smart_contract_function: None,
                    smart_contract_address: None,
                    conditions: vec![],
                },
            ],
        }],
    }
}

/// The policy the child view falls back to when nothing has been stored:
/// $15 cap, no allowlist.
pub fn default_demo_policy(child_email: &str) -> ParaPolicy {
    build_allowance_policy(
        &AllowanceConfig {
            max_transaction_value_usd: DEFAULT_MAX_USD,
            allowlisted_addresses: vec![],
            child_email: child_email.to_string(),
        },
        DEFAULT_PARTNER_ID,
    )
}

use itertools::Itertools;

use crate::chain::label_for_chain;
use crate::types::{
    ConditionComparator, ConditionReference, ConditionResource, ParaPolicy, PermissionEffect,
    PermissionType,
};

/// Render a policy as ordered, human-readable rule lines for display and
/// audit.
///
/// Iterates scopes then permissions in document order. Only ALLOW/TRANSFER
/// and DENY/DEPLOY_CONTRACT permissions produce output; anything else is
/// skipped. The final list is deduplicated by exact string equality,
/// preserving first occurrence.
pub fn to_readable_rules(policy: &ParaPolicy) -> Vec<String> {
    let mut rules = Vec::new();

    for scope in &policy.scopes {
        for permission in &scope.permissions {
            if permission.effect == PermissionEffect::Deny
                && permission.permission_type == PermissionType::DeployContract
            {
                rules.push("Contract deployments are blocked".to_string());
                continue;
            }

            if permission.effect == PermissionEffect::Allow
                && permission.permission_type == PermissionType::Transfer
            {
                // First match wins; the builder never emits duplicates.
                let value_condition = permission.conditions.iter().find(|c| {
                    c.resource == ConditionResource::Value
                        && c.comparator == ConditionComparator::Equals
                });
                let address_condition = permission.conditions.iter().find(|c| {
                    c.resource == ConditionResource::ToAddress
                        && c.comparator == ConditionComparator::IncludedIn
                });

                let mut rule = format!("Transfers on {}", label_for_chain(&permission.chain_id));
                if let Some(condition) = value_condition {
                    rule.push_str(&format!(
                        " up to ${} USD per transaction",
                        condition.reference
                    ));
                }
                rules.push(rule);

                match address_condition.map(|c| &c.reference) {
                    Some(ConditionReference::List(addresses)) if !addresses.is_empty() => {
                        let noun = if addresses.len() == 1 {
                            "address"
                        } else {
                            "addresses"
                        };
                        rules.push(format!(
                            "Recipient must be one of: {} approved {noun}",
                            addresses.len()
                        ));
                        for address in addresses {
                            rules.push(format!("  \u{2022} {address}"));
                        }
                    }
                    _ => rules.push("Any recipient address is allowed".to_string()),
                }
            }
        }
    }

    rules.into_iter().unique().collect()
}

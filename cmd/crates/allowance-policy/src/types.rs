use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a permission grants or forbids its transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionEffect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionType {
    Transfer,
    SignMessage,
    SmartContract,
    DeployContract,
}

/// Para evaluates `STATIC` conditions against fixed reference values; no
/// other condition type exists in the current schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionResource {
    #[serde(rename = "VALUE")]
    Value,
    #[serde(rename = "TO_ADDRESS")]
    ToAddress,
    /// Positional reference into a smart-contract call's arguments. Part of
    /// the schema but never produced by the allowance builder.
    #[serde(rename = "ARGUMENTS[1]")]
    Argument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionComparator {
    Equals,
    GreaterThan,
    IncludedIn,
}

/// The reference a condition compares against. Its shape depends on the
/// condition's resource: a USD amount for `VALUE`, an ordered address list
/// for `TO_ADDRESS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionReference {
    Amount(u32),
    Text(String),
    List(Vec<String>),
}

impl fmt::Display for ConditionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionReference::Amount(n) => write!(f, "{n}"),
            ConditionReference::Text(s) => write!(f, "{s}"),
            ConditionReference::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

/// A static predicate narrowing when a permission applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyCondition {
    #[serde(rename = "type")]
    pub condition_type: ConditionType,
    pub resource: ConditionResource,
    pub comparator: ConditionComparator,
    pub reference: ConditionReference,
}

/// An effect applied to a transaction type on a specific network, gated by
/// zero or more conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyPermission {
    pub effect: PermissionEffect,
    pub chain_id: String,
    #[serde(rename = "type")]
    pub permission_type: PermissionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_contract_function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_contract_address: Option<String>,
    pub conditions: Vec<PolicyCondition>,
}

/// A named grouping of permissions within a policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyScope {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub permissions: Vec<PolicyPermission>,
}

/// The root policy document submitted to Para for enforcement. Immutable
/// once built; a changed configuration produces a whole new document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParaPolicy {
    pub partner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<i64>,
    pub scopes: Vec<PolicyScope>,
}

/// Form-level configuration an allowance policy is built from. The child
/// email is carried alongside the policy, not encoded into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowanceConfig {
    pub max_transaction_value_usd: u32,
    pub allowlisted_addresses: Vec<String>,
    pub child_email: String,
}

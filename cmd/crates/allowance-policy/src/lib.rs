#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

//! Builds, renders, and round-trips Para permission policies for the
//! allowance-wallet demo.
//!
//! The policy document produced here is the contract surface toward Para's
//! rules engine: field names, the fixed chain id, and every enumeration must
//! serialize exactly as Para's schema expects. Enforcement itself happens on
//! Para's side; nothing in this crate evaluates a policy against a
//! transaction.

pub mod builder;
pub mod chain;
pub mod render;
pub mod store;
pub mod types;
pub mod validate;

pub use builder::{build_allowance_policy, default_demo_policy};
pub use render::to_readable_rules;
pub use store::StoredPolicyData;
pub use types::{
    AllowanceConfig, ConditionComparator, ConditionReference, ConditionResource, ConditionType,
    ParaPolicy, PermissionEffect, PermissionType, PolicyCondition, PolicyPermission, PolicyScope,
};

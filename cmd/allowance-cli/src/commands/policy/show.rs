use allowance_policy::builder::{default_demo_policy, DEFAULT_MAX_USD};
use allowance_policy::chain::{BASE_SEPOLIA_CHAIN_ID, BASE_SEPOLIA_LABEL};
use allowance_policy::types::{
    ConditionComparator, ConditionReference, ConditionResource, PermissionEffect, PermissionType,
};

use crate::commands::global;
use crate::config::slot;
use crate::print::Print;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The child's view: loads the stored policy (or the default demo policy)
/// and prints the rules it is subject to. Display values are extracted
/// straight from the document with defensive lookups, so a sparse or
/// hand-edited record degrades to defaults instead of failing.
#[derive(Debug, clap::Parser, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Print the raw policy document JSON (informational; enforcement is
    /// server-side)
    #[arg(long)]
    pub json: bool,
}

impl Cmd {
    pub fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);

        let stored = slot::load();
        match &stored {
            Some(record) => print.infoln(format!(
                "Policy set by parent on {} for {}",
                format_created_at(record.created_at),
                record.child_email
            )),
            None => print.infoln(
                "Showing default demo policy — have a parent configure rules first.",
            ),
        }

        let policy = stored.map_or_else(
            || default_demo_policy("child@test.getpara.com"),
            |record| record.policy,
        );

        let transfer = policy
            .scopes
            .iter()
            .flat_map(|scope| &scope.permissions)
            .find(|permission| {
                permission.effect == PermissionEffect::Allow
                    && permission.permission_type == PermissionType::Transfer
            });

        let max_usd = transfer
            .and_then(|permission| {
                permission.conditions.iter().find(|c| {
                    c.resource == ConditionResource::Value
                        && c.comparator == ConditionComparator::Equals
                })
            })
            .and_then(|c| match &c.reference {
                ConditionReference::Amount(n) => Some(*n),
                _ => None,
            })
            .unwrap_or(DEFAULT_MAX_USD);

        let allowed_addresses: &[String] = transfer
            .and_then(|permission| {
                permission.conditions.iter().find(|c| {
                    c.resource == ConditionResource::ToAddress
                        && c.comparator == ConditionComparator::IncludedIn
                })
            })
            .and_then(|c| match &c.reference {
                ConditionReference::List(addresses) => Some(addresses.as_slice()),
                _ => None,
            })
            .unwrap_or(&[]);

        println!("Network: {BASE_SEPOLIA_LABEL} (chainId: {BASE_SEPOLIA_CHAIN_ID})");
        println!("Max per transaction: ${max_usd} USD");
        if allowed_addresses.is_empty() {
            println!("Recipients: any address");
        } else {
            println!("Recipients: {} approved", allowed_addresses.len());
            for address in allowed_addresses {
                println!("  {address}");
            }
        }
        println!("Contract deployments: blocked");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&policy)?);
        }

        Ok(())
    }
}

fn format_created_at(created_at_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(created_at_ms).map_or_else(
        || created_at_ms.to_string(),
        |datetime| datetime.format("%b %d, %Y").to_string(),
    )
}

use chrono::Utc;

use allowance_policy::builder::{DEFAULT_MAX_USD, DEFAULT_PARTNER_ID};
use allowance_policy::store::StoredPolicyData;
use allowance_policy::types::AllowanceConfig;
use allowance_policy::{build_allowance_policy, to_readable_rules, validate};

use crate::commands::global;
use crate::config::slot;
use crate::print::Print;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validate(#[from] validate::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, clap::Parser, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Maximum value per transaction in USD, between 1 and 1000
    #[arg(long, default_value_t = DEFAULT_MAX_USD)]
    pub max_value_usd: u32,

    /// Approved recipient address; repeat to allow several. No allowlist
    /// means any recipient is allowed
    #[arg(long = "allowlist", value_name = "ADDRESS")]
    pub allowlisted_addresses: Vec<String>,

    /// Email the child signs in with (use @test.getpara.com for testing)
    #[arg(long, env = "ALLOWANCE_CHILD_EMAIL")]
    pub child_email: String,

    /// Partner id recorded on the policy document
    #[arg(long, default_value = DEFAULT_PARTNER_ID)]
    pub partner_id: String,

    /// Print the policy document JSON exactly as submitted to Para
    #[arg(long)]
    pub json: bool,

    /// Store the policy so `policy show` and `tx send` pick it up
    #[arg(long)]
    pub save: bool,
}

impl Cmd {
    pub fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);

        let config = AllowanceConfig {
            max_transaction_value_usd: self.max_value_usd,
            allowlisted_addresses: self.allowlisted_addresses.clone(),
            child_email: self.child_email.clone(),
        };
        validate::validate(&config)?;

        let policy = build_allowance_policy(&config, &self.partner_id);

        print.shieldln(format!("Allowance rules for {}", config.child_email));
        for rule in to_readable_rules(&policy) {
            println!("{rule}");
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&policy)?);
        }

        if self.save {
            let record = StoredPolicyData {
                policy,
                child_email: config.child_email.clone(),
                created_at: Utc::now().timestamp_millis(),
            };
            // Best-effort: a failed write is logged and the flow continues.
            slot::save(&record);
            print.saveln(format!("Policy stored for {}", config.child_email));
        }

        Ok(())
    }
}

use allowance_policy::validate;

use crate::commands::global;
use crate::para::{self, classify_submit_error, TxDisposition};
use crate::print::Print;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid recipient address: {0}")]
    InvalidRecipient(String),
    #[error("amount must be greater than 0")]
    ZeroValue,
    #[error("transaction blocked by Para policy")]
    Blocked,
    #[error("transaction failed")]
    Failed,
    #[error(transparent)]
    Para(#[from] para::Error),
}

#[derive(Debug, clap::Parser, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Recipient address
    #[arg(long)]
    pub to: String,

    /// Value to send in USD
    #[arg(long)]
    pub value_usd: u32,
}

impl Cmd {
    pub async fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);

        let to = self.to.trim();
        if !validate::is_valid_address(to) {
            return Err(Error::InvalidRecipient(to.to_string()));
        }
        if self.value_usd == 0 {
            return Err(Error::ZeroValue);
        }

        let client = para::Client::from_env()?;
        print.infoln(format!("Submitting ${} USD to {to} via Para…", self.value_usd));

        match client.send_transaction(to, self.value_usd).await {
            Ok(hash) => {
                print.checkln("Transaction submitted within the allowed policy");
                print.linkln(para::explorer_url_for_transaction(&hash));
                println!("{hash}");
                Ok(())
            }
            Err(e) => match classify_submit_error(&e) {
                TxDisposition::Blocked { reason, review_url } => {
                    print.shieldln(format!("Blocked by Para: {reason}"));
                    if let Some(url) = review_url {
                        print.linkln(url);
                    }
                    Err(Error::Blocked)
                }
                TxDisposition::Failed { reason } => {
                    print.errorln(format!("Transaction failed: {reason}"));
                    Err(Error::Failed)
                }
            },
        }
    }
}

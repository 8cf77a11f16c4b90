use crate::commands::global;
use crate::para;
use crate::print::Print;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Para(#[from] para::Error),
}

#[derive(Debug, clap::Parser, Clone)]
#[group(skip)]
pub struct Cmd;

impl Cmd {
    pub async fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);
        let client = para::Client::from_env()?;

        match client.wallet().await? {
            Some(wallet) => println!("{}", wallet.address),
            None => print.warnln("No wallet found; run `allowance wallet create` first"),
        }

        Ok(())
    }
}

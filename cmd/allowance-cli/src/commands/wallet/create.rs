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
pub struct Cmd {
    /// Kind of wallet to create
    #[arg(long, value_enum, default_value_t = para::WalletType::Evm)]
    pub wallet_type: para::WalletType,
}

impl Cmd {
    pub async fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        let print = Print::new(global_args.quiet);
        let client = para::Client::from_env()?;

        match client.create_wallet(self.wallet_type).await {
            Ok(wallet) => {
                print.checkln(format!(
                    "Created {} wallet {}",
                    wallet.wallet_type, wallet.address
                ));
                println!("{}", wallet.address);
            }
            // The goal is to have a wallet; an existing one is success.
            Err(para::Error::WalletExists) => {
                print.infoln("Wallet already exists; nothing to create");
                if let Some(wallet) = client.wallet().await? {
                    println!("{}", wallet.address);
                }
            }
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }
}

use clap::Parser;

pub mod completion;
pub mod global;
pub mod policy;
pub mod tx;
pub mod version;
pub mod wallet;

pub const ABOUT: &str =
    "Build, review, and store Para allowance-wallet policies, and exercise them \
     against a simulated Para signer";

pub const HEADING_GLOBAL: &str = "Options (Global)";

#[derive(Parser, Debug)]
#[command(
    name = "allowance",
    about = ABOUT,
    version = version::long(),
    disable_help_subcommand = true,
)]
pub struct Root {
    #[clap(flatten)]
    pub global_args: global::Args,

    #[command(subcommand)]
    pub cmd: Cmd,
}

impl Root {
    pub fn new() -> Result<Self, Error> {
        Self::try_parse().map_err(Error::Clap)
    }

    pub async fn run(&self) -> Result<(), Error> {
        match &self.cmd {
            Cmd::Policy(cmd) => cmd.run(&self.global_args)?,
            Cmd::Wallet(cmd) => cmd.run(&self.global_args).await?,
            Cmd::Tx(cmd) => cmd.run(&self.global_args).await?,
            Cmd::Version(cmd) => cmd.run(),
            Cmd::Completion(cmd) => cmd.run(),
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Build, inspect, and store allowance policies
    #[command(subcommand)]
    Policy(policy::Cmd),
    /// Manage the simulated Para embedded wallet
    #[command(subcommand)]
    Wallet(wallet::Cmd),
    /// Submit transactions through the simulated Para signer
    #[command(subcommand)]
    Tx(tx::Cmd),
    /// Print version information
    Version(version::Cmd),
    /// Print shell completion code for the specified shell
    #[command(long_about = completion::LONG_ABOUT)]
    Completion(completion::Cmd),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Clap(#[from] clap::Error),
    #[error(transparent)]
    Policy(#[from] policy::Error),
    #[error(transparent)]
    Wallet(#[from] wallet::Error),
    #[error(transparent)]
    Tx(#[from] tx::Error),
}

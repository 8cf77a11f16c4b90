use clap::Parser;

use super::global;

pub mod create;
pub mod show;

#[derive(Debug, Parser)]
pub enum Cmd {
    /// Create the child's embedded wallet via Para
    Create(create::Cmd),
    /// Show the wallet's address, if one exists
    Show(show::Cmd),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Create(#[from] create::Error),

    #[error(transparent)]
    Show(#[from] show::Error),
}

impl Cmd {
    pub async fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        match self {
            Cmd::Create(cmd) => cmd.run(global_args).await?,
            Cmd::Show(cmd) => cmd.run(global_args).await?,
        };
        Ok(())
    }
}

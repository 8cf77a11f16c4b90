use clap::Parser;

use super::global;

pub mod send;

#[derive(Debug, Parser)]
pub enum Cmd {
    /// Send a transfer through Para; the stored policy decides its fate
    Send(send::Cmd),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Send(#[from] send::Error),
}

impl Cmd {
    pub async fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        match self {
            Cmd::Send(cmd) => cmd.run(global_args).await?,
        };
        Ok(())
    }
}

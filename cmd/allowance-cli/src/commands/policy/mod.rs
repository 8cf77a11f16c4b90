use clap::Parser;

use super::global;

pub mod build;
pub mod show;

#[derive(Debug, Parser)]
pub enum Cmd {
    /// Build a policy from allowance rules and optionally store it
    Build(build::Cmd),
    /// Show the active policy from the child's perspective
    Show(show::Cmd),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] build::Error),

    #[error(transparent)]
    Show(#[from] show::Error),
}

impl Cmd {
    pub fn run(&self, global_args: &global::Args) -> Result<(), Error> {
        match self {
            Cmd::Build(cmd) => cmd.run(global_args)?,
            Cmd::Show(cmd) => cmd.run(global_args)?,
        };
        Ok(())
    }
}

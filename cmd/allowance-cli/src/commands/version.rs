use clap::Parser;
use std::fmt::Debug;

#[derive(Parser, Debug, Clone)]
#[group(skip)]
pub struct Cmd;

impl Cmd {
    #[allow(clippy::unused_self)]
    pub fn run(&self) {
        println!("allowance {}", long());
    }
}

pub fn long() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

//! Shell completion generation

use crate::cli::{Cli, CompletionsArgs};
use clap::CommandFactory;
use std::io;

pub fn run(args: CompletionsArgs) {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "dataset-detect", &mut io::stdout());
}

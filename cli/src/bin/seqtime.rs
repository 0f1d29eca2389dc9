use anyhow::Result;
use clap::{Parser, Subcommand};
use seqtime_cli::{
  commands::{profile::ProfileCmd, term::TermCmd},
  SEQTIME_VERSION_MESSAGE,
};

#[derive(Parser)]
#[command(name = "seqtime", author, about, long_about = None, args_conflicts_with_subcommands = true, version = SEQTIME_VERSION_MESSAGE)]
pub struct SeqtimeCli {
  #[clap(subcommand)]
  pub command: Option<SeqtimeCliCommands>,

  #[clap(flatten)]
  pub profile: ProfileCmd,
}

#[derive(Subcommand)]
pub enum SeqtimeCliCommands {
  Profile(ProfileCmd),
  Term(TermCmd),
}

fn main() -> Result<()> {
  let args = SeqtimeCli::parse();
  let command = args
    .command
    .unwrap_or(SeqtimeCliCommands::Profile(args.profile));
  match command {
    SeqtimeCliCommands::Profile(cmd) => cmd.run(),
    SeqtimeCliCommands::Term(cmd) => cmd.run(),
  }
}

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "term", about = "Print a single term of the sequence")]
pub struct TermCmd {
  /// Index of the term, starting at 1.
  #[arg(value_parser = clap::value_parser!(u64).range(1..))]
  n: u64,
}

impl TermCmd {
  pub fn run(&self) -> Result<()> {
    let value = seqtime_core::term(self.n)?;
    println!("{value}");
    Ok(())
  }
}

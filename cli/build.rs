use anyhow::Result;
use vergen_git2::{BuildBuilder, Emitter};

fn main() -> Result<()> {
  let build = BuildBuilder::default().build_timestamp(true).build()?;

  Emitter::default().add_instructions(&build)?.emit()?;
  Ok(())
}

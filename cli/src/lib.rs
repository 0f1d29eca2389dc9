pub mod commands;
mod util;

pub const SEQTIME_VERSION_MESSAGE: &str = concat!(
  env!("CARGO_PKG_VERSION"),
  " (",
  env!("VERGEN_BUILD_TIMESTAMP"),
  ")"
);

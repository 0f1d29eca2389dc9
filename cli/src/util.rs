use std::fmt::Display;
use std::time::Duration;

use anstyle::Style;

/// Prints a cargo-style status line, e.g. `    Finished profiling in 1.20s`.
pub(crate) fn write_status(style: &Style, status: &str, msg: impl Display) {
  eprintln!("{style}{status:>12}{style:#} {msg}");
}

pub(crate) fn elapsed(duration: Duration) -> String {
  let secs = duration.as_secs();
  if secs >= 60 {
    format!("{}m {:02}s", secs / 60, secs % 60)
  } else {
    format!("{}.{:02}s", secs, duration.subsec_nanos() / 10_000_000)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn elapsed_format() {
    assert_eq!(elapsed(Duration::from_millis(1234)), "1.23s");
    assert_eq!(elapsed(Duration::from_millis(5)), "0.00s");
    assert_eq!(elapsed(Duration::from_secs(125)), "2m 05s");
  }
}

use std::path::{Path, PathBuf};

pub const DEFAULT_UPPER_BOUND: u64 = 10_000;
pub const DEFAULT_OUTPUT: &str = "runtimeData.js";
pub const DEFAULT_VARIABLE: &str = "runtimeData";

/// Settings for a profiling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOpts {
  upper_bound: u64,
  output: PathBuf,
  variable: String,
}

impl ProfileOpts {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_options(mut self, opts: impl IntoIterator<Item = impl FnOnce(&mut Self)>) -> Self {
    for opt in opts {
      opt(&mut self);
    }
    self
  }

  /// Largest n to evaluate. Evaluation covers `1..=upper_bound`.
  pub fn upper_bound(&self) -> u64 {
    self.upper_bound
  }

  pub fn output(&self) -> &Path {
    &self.output
  }

  /// Name of the JS constant the export is assigned to.
  pub fn variable(&self) -> &str {
    &self.variable
  }
}

impl Default for ProfileOpts {
  fn default() -> Self {
    Self {
      upper_bound: DEFAULT_UPPER_BOUND,
      output: PathBuf::from(DEFAULT_OUTPUT),
      variable: DEFAULT_VARIABLE.to_string(),
    }
  }
}

// Functional option for the evaluation range
pub fn with_upper_bound(value: u64) -> impl FnOnce(&mut ProfileOpts) {
  move |opts: &mut ProfileOpts| {
    opts.upper_bound = value;
  }
}

pub fn with_output<P: Into<PathBuf>>(path: P) -> impl FnOnce(&mut ProfileOpts) {
  let path = path.into();
  move |opts: &mut ProfileOpts| {
    opts.output = path;
  }
}

pub fn with_variable<S: Into<String>>(name: S) -> impl FnOnce(&mut ProfileOpts) {
  let name = name.into();
  move |opts: &mut ProfileOpts| {
    opts.variable = name;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_fixed_configuration() {
    let opts = ProfileOpts::default();
    assert_eq!(opts.upper_bound(), 10_000);
    assert_eq!(opts.output(), Path::new("runtimeData.js"));
    assert_eq!(opts.variable(), "runtimeData");
  }

  #[test]
  fn options_override_defaults() {
    let opts = ProfileOpts::new()
      .with_options([with_upper_bound(5)])
      .with_options([with_output("out/data.js")])
      .with_options([with_variable("chartData")]);
    assert_eq!(opts.upper_bound(), 5);
    assert_eq!(opts.output(), Path::new("out/data.js"));
    assert_eq!(opts.variable(), "chartData");
  }
}

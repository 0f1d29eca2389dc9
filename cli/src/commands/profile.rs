use std::path::PathBuf;
use std::time::Instant;

use anstyle::{AnsiColor, Effects};
use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use seqtime_core::utils::{
  setup_logger, with_output, with_upper_bound, with_variable, ProfileOpts, DEFAULT_OUTPUT,
  DEFAULT_UPPER_BOUND, DEFAULT_VARIABLE,
};
use seqtime_core::{IterativeEvaluator, MeasurementDriver, RuntimeExport};

use crate::util::{elapsed, write_status};

#[derive(Parser)]
#[command(
  name = "profile",
  about = "(default) Time every term up to the bound and export the results"
)]
pub struct ProfileCmd {
  /// Largest index to evaluate.
  #[arg(long, default_value_t = DEFAULT_UPPER_BOUND)]
  upper_bound: u64,

  /// File the results are written to. Overwritten if it exists.
  #[arg(long, default_value = DEFAULT_OUTPUT)]
  output: PathBuf,

  /// Name of the JS constant holding the results.
  #[arg(long, default_value = DEFAULT_VARIABLE)]
  variable: String,

  #[arg(long, action)]
  no_progress: bool,
}

impl ProfileCmd {
  fn opts(&self) -> ProfileOpts {
    ProfileOpts::new()
      .with_options([with_upper_bound(self.upper_bound)])
      .with_options([with_output(&self.output)])
      .with_options([with_variable(&self.variable)])
  }

  pub fn run(&self) -> Result<()> {
    setup_logger();

    let opts = self.opts();
    tracing::info!(
      upper_bound = opts.upper_bound(),
      output = %opts.output().display(),
      variable = opts.variable(),
      "starting profile run"
    );
    let export = RuntimeExport::new(opts.variable())?;

    let pb = if self.no_progress {
      ProgressBar::hidden()
    } else {
      ProgressBar::new(opts.upper_bound())
    };
    pb.set_style(
      ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}, {eta})")?
        .progress_chars("#>-"),
    );

    let start_time = Instant::now();
    let driver = MeasurementDriver::new(IterativeEvaluator::new(), opts);
    let records = driver.run_with(|_| pb.inc(1))?;
    pb.finish_and_clear();

    let green = AnsiColor::Green.on_default().effects(Effects::BOLD);
    write_status(
      &green,
      "Finished",
      format!(
        "timing {} terms in {}",
        records.len(),
        elapsed(start_time.elapsed())
      ),
    );

    let output = driver.opts().output();
    export
      .write(output, &records)
      .with_context(|| format!("failed to write {}", output.display()))?;
    write_status(&green, "Wrote", output.display());

    Ok(())
  }
}

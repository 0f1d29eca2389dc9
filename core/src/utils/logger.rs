use std::sync::Once;

use tracing_subscriber::{filter::LevelFilter, fmt::format::FmtSpan, EnvFilter};

static INIT: Once = Once::new();

/// Installs a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call has an effect.
pub fn setup_logger() {
  INIT.call_once(|| {
    let env_filter = EnvFilter::builder()
      .with_default_directive(LevelFilter::INFO.into())
      .from_env_lossy();

    let _ = tracing_subscriber::fmt()
      .with_env_filter(env_filter)
      .with_span_events(FmtSpan::CLOSE)
      .with_target(false)
      .with_writer(std::io::stderr)
      .try_init();
  });
}

#[cfg(test)]
pub(crate) fn setup_test_logger() {
  let _ = tracing_subscriber::fmt()
    .with_test_writer()
    .with_env_filter(EnvFilter::from_default_env())
    .try_init();
}

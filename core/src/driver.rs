use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::sequence::{Evaluator, SequenceError};
use crate::utils::{ProfileOpts, DEFAULT_UPPER_BOUND};

/// Time taken to compute a single term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
  pub n: u64,
  pub runtime_ms: f64,
}

impl MeasurementRecord {
  pub fn new(n: u64, runtime: Duration) -> Self {
    Self {
      n,
      runtime_ms: runtime.as_secs_f64() * 1000.0,
    }
  }
}

/// Evaluates every index in `1..=upper_bound` once and times each call.
pub struct MeasurementDriver<E> {
  evaluator: E,
  opts: ProfileOpts,
}

impl<E: Evaluator> MeasurementDriver<E> {
  pub fn new(evaluator: E, opts: ProfileOpts) -> Self {
    Self { evaluator, opts }
  }

  pub fn opts(&self) -> &ProfileOpts {
    &self.opts
  }

  pub fn run(&self) -> Result<Vec<MeasurementRecord>, SequenceError> {
    self.run_with(|_| {})
  }

  /// Like [`run`](Self::run), calling `observer` after each record is appended.
  #[tracing::instrument(skip_all, fields(upper_bound = self.opts.upper_bound()))]
  pub fn run_with<F>(&self, mut observer: F) -> Result<Vec<MeasurementRecord>, SequenceError>
  where
    F: FnMut(&MeasurementRecord),
  {
    let upper_bound = self.opts.upper_bound();
    let capacity = upper_bound.min(DEFAULT_UPPER_BOUND) as usize;
    let mut records = Vec::with_capacity(capacity);
    let started = Instant::now();

    for n in 1..=upper_bound {
      let start = Instant::now();
      let value = self.evaluator.evaluate(n)?;
      let elapsed = start.elapsed();
      black_box(value);

      let record = MeasurementRecord::new(n, elapsed);
      tracing::debug!(n, runtime_ms = record.runtime_ms, "evaluated term");
      records.push(record);
      observer(&record);
    }

    tracing::info!(
      records = records.len(),
      elapsed = ?started.elapsed(),
      "measurement finished"
    );
    Ok(records)
  }
}

#[cfg(test)]
mod tests {
  use mockall::predicate::eq;
  use mockall::Sequence;

  use super::*;
  use crate::sequence::{IterativeEvaluator, MockEvaluator, Term};
  use crate::utils::{setup_test_logger, with_upper_bound};

  fn opts(upper_bound: u64) -> ProfileOpts {
    ProfileOpts::default().with_options([with_upper_bound(upper_bound)])
  }

  #[test]
  fn records_every_index_in_order() {
    setup_test_logger();
    let driver = MeasurementDriver::new(IterativeEvaluator::new(), opts(5));
    let records = driver.run().unwrap();

    let indices: Vec<u64> = records.iter().map(|r| r.n).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    assert!(records.iter().all(|r| r.runtime_ms >= 0.0));
  }

  #[test]
  fn empty_range_yields_no_records() {
    let driver = MeasurementDriver::new(IterativeEvaluator::new(), opts(0));
    assert!(driver.run().unwrap().is_empty());
  }

  #[test]
  fn evaluates_each_index_exactly_once() {
    let mut evaluator = MockEvaluator::new();
    let mut seq = Sequence::new();
    for n in 1..=3 {
      evaluator
        .expect_evaluate()
        .with(eq(n))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|n| Ok(Term::from(n)));
    }

    let records = MeasurementDriver::new(evaluator, opts(3)).run().unwrap();
    assert_eq!(records.len(), 3);
  }

  #[test]
  fn evaluation_error_stops_the_run() {
    let mut evaluator = MockEvaluator::new();
    evaluator
      .expect_evaluate()
      .with(eq(1))
      .returning(|n| Ok(Term::from(n)));
    evaluator
      .expect_evaluate()
      .with(eq(2))
      .returning(|n| Err(SequenceError::InvalidIndex(n)));

    let result = MeasurementDriver::new(evaluator, opts(10)).run();
    assert_eq!(result, Err(SequenceError::InvalidIndex(2)));
  }

  #[test]
  fn huge_bound_does_not_preallocate() {
    let mut evaluator = MockEvaluator::new();
    evaluator
      .expect_evaluate()
      .with(eq(1))
      .returning(|n| Ok(Term::from(n)));
    evaluator
      .expect_evaluate()
      .with(eq(2))
      .returning(|n| Err(SequenceError::InvalidIndex(n)));

    let result = MeasurementDriver::new(evaluator, opts(u64::MAX)).run();
    assert_eq!(result, Err(SequenceError::InvalidIndex(2)));
  }

  #[test]
  fn observer_sees_each_record() {
    let driver = MeasurementDriver::new(IterativeEvaluator::new(), opts(4));
    let mut seen = Vec::new();
    let records = driver.run_with(|r| seen.push(*r)).unwrap();
    assert_eq!(seen, records);
  }

  #[test]
  fn record_converts_duration_to_millis() {
    let record = MeasurementRecord::new(7, Duration::from_micros(1500));
    assert_eq!(record.n, 7);
    assert!((record.runtime_ms - 1.5).abs() < 1e-9);
  }
}

//! Iterative evaluator for the parity-dependent recurrence
//!
//! ```text
//! T(1) = 1
//! T(2) = 2
//! T(n) = a + b      if n is even
//! T(n) = 2*a + b    if n is odd
//! ```
//!
//! where `a` and `b` are the two values carried by the loop. The loop starts
//! from `a = 1, b = 2`, so the first computed terms are 4, 5, 14, 19, 52.
//!
//! Terms grow exponentially, so they are represented as [`BigUint`].

use std::mem;

use num_bigint::BigUint;
use thiserror::Error;

/// A single value of the sequence.
pub type Term = BigUint;

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
  #[error("sequence index must be at least 1, got {0}")]
  InvalidIndex(u64),
}

/// Computes terms of the sequence.
#[cfg_attr(test, mockall::automock)]
pub trait Evaluator {
  fn evaluate(&self, n: u64) -> Result<Term, SequenceError>;
}

/// The loop-based evaluator. Keeps only the two most recent terms.
#[derive(Debug, Default, Clone, Copy)]
pub struct IterativeEvaluator;

impl IterativeEvaluator {
  pub fn new() -> Self {
    Self
  }
}

impl Evaluator for IterativeEvaluator {
  fn evaluate(&self, n: u64) -> Result<Term, SequenceError> {
    term(n)
  }
}

/// Returns the n-th term of the sequence, 1-indexed.
///
/// Runs in O(n) additions and retains two terms at a time.
pub fn term(n: u64) -> Result<Term, SequenceError> {
  match n {
    0 => Err(SequenceError::InvalidIndex(n)),
    1 => Ok(Term::from(1u32)),
    2 => Ok(Term::from(2u32)),
    _ => {
      let mut state = State::new();
      for i in 3..=n {
        state.advance(i);
      }
      Ok(state.prev1)
    }
  }
}

/// Loop-carried state, seeded with `prev1 = 1, prev2 = 2` before i = 3.
#[derive(Debug, Clone)]
struct State {
  prev1: Term,
  prev2: Term,
}

impl State {
  fn new() -> Self {
    Self {
      prev1: Term::from(1u32),
      prev2: Term::from(2u32),
    }
  }

  /// Computes T(i) and shifts the window forward by one.
  fn advance(&mut self, i: u64) {
    let current = if i % 2 == 0 {
      &self.prev1 + &self.prev2
    } else {
      (&self.prev1 << 1u32) + &self.prev2
    };
    self.prev2 = mem::replace(&mut self.prev1, current);
  }
}

/// Iterator over `(n, T(n))` starting at n = 1.
///
/// ```
/// use seqtime_core::sequence::Terms;
///
/// let first: Vec<u64> = Terms::new()
///   .take(5)
///   .map(|(_, t)| u64::try_from(&t).unwrap())
///   .collect();
/// assert_eq!(first, vec![1, 2, 4, 5, 14]);
/// ```
#[derive(Debug, Clone)]
pub struct Terms {
  next: u64,
  state: State,
}

impl Terms {
  pub fn new() -> Self {
    Self {
      next: 1,
      state: State::new(),
    }
  }
}

impl Default for Terms {
  fn default() -> Self {
    Self::new()
  }
}

impl Iterator for Terms {
  type Item = (u64, Term);

  fn next(&mut self) -> Option<Self::Item> {
    let n = self.next;
    let value = match n {
      1 => Term::from(1u32),
      2 => Term::from(2u32),
      _ => {
        self.state.advance(n);
        self.state.prev1.clone()
      }
    };
    self.next = n.checked_add(1)?;
    Some((n, value))
  }
}

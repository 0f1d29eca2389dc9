//! # seqtime core
//!
//! Evaluates the parity-dependent recurrence, times each evaluation and
//! exports the measurements as a JS data file.

pub mod driver;
pub mod io;
pub mod sequence;
pub mod utils;

pub use driver::{MeasurementDriver, MeasurementRecord};
pub use io::{ExportError, RuntimeExport};
pub use sequence::{term, Evaluator, IterativeEvaluator, SequenceError, Term, Terms};

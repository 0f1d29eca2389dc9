//! Export of measurement records as a source-embeddable JS assignment:
//!
//! ```text
//! const runtimeData = [
//!   {
//!     "n": 1,
//!     "runtimeMs": 0.0012
//!   },
//!   ...
//! ];
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::driver::MeasurementRecord;
use crate::utils::DEFAULT_VARIABLE;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ExportError {
  #[error("i/o failure: {0}")]
  Io(#[from] std::io::Error),
  #[error("malformed record data: {0}")]
  Json(#[from] serde_json::Error),
  #[error("`{0}` is not a valid JavaScript identifier")]
  InvalidVariableName(String),
  #[error("missing `const {variable} = ...;` declaration")]
  MissingDeclaration { variable: String },
}

/// Writes and reads `const <variable> = [...];` data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeExport {
  variable: String,
}

impl RuntimeExport {
  pub fn new<S: Into<String>>(variable: S) -> Result<Self, ExportError> {
    let variable = variable.into();
    if !is_identifier(&variable) {
      return Err(ExportError::InvalidVariableName(variable));
    }
    Ok(Self { variable })
  }

  pub fn variable(&self) -> &str {
    &self.variable
  }

  fn prefix(&self) -> String {
    format!("const {} = ", self.variable)
  }

  pub fn render(&self, records: &[MeasurementRecord]) -> Result<String, ExportError> {
    let json = serde_json::to_string_pretty(records)?;
    Ok(format!("{}{};", self.prefix(), json))
  }

  /// Writes the rendered records to `path`, replacing any existing file.
  #[tracing::instrument(skip(self, records), fields(records = records.len()))]
  pub fn write(&self, path: &Path, records: &[MeasurementRecord]) -> Result<(), ExportError> {
    let rendered = self.render(records)?;
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    tracing::info!(path = %path.display(), bytes = rendered.len(), "wrote runtime data");
    Ok(())
  }

  pub fn parse(&self, source: &str) -> Result<Vec<MeasurementRecord>, ExportError> {
    let missing = || ExportError::MissingDeclaration {
      variable: self.variable.clone(),
    };
    let body = source
      .trim()
      .strip_prefix(self.prefix().as_str())
      .ok_or_else(missing)?
      .strip_suffix(';')
      .ok_or_else(missing)?;
    Ok(serde_json::from_str(body)?)
  }

  pub fn read(&self, path: &Path) -> Result<Vec<MeasurementRecord>, ExportError> {
    let source = fs::read_to_string(path)?;
    self.parse(&source)
  }
}

impl Default for RuntimeExport {
  fn default() -> Self {
    Self {
      variable: DEFAULT_VARIABLE.to_string(),
    }
  }
}

fn is_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  match chars.next() {
    Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
    _ => return false,
  }
  chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

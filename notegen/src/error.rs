use std::io;

use thiserror::Error;

/// Top-level error type for site generation.
///
/// The variants mirror how failures are handled: `Setup`, `Copy` and `Index`
/// failures abort the run, while per-document failures are recovered by the
/// document pipeline and never surface as this type.
#[derive(Debug, Error)]
pub enum SiteError {
  #[error("Setup error: {0}")]
  Setup(String),

  #[error("Copy error: {0}")]
  Copy(String),

  #[error("Template error: {0}")]
  Template(String),

  #[error("Index page error: {0}")]
  Index(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),
}

impl From<tera::Error> for SiteError {
  fn from(e: tera::Error) -> Self {
    Self::Template(e.to_string())
  }
}

impl From<fs_extra::error::Error> for SiteError {
  fn from(e: fs_extra::error::Error) -> Self {
    Self::Copy(e.to_string())
  }
}

//! Error types for rungview operations.
//!
//! This module provides the main error type [`RungviewError`] which wraps
//! the error conditions that can occur while configuring and exporting a
//! ladder view.

use std::io;

use thiserror::Error;

/// The main error type for rungview operations.
#[derive(Debug, Error)]
pub enum RungviewError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for RungviewError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

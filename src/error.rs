//! Error types for the oclscope library

use std::io;
use thiserror::Error;

use crate::catalog::AttributeScope;

/// Main error type for report generation
///
/// Every capability-query failure is fatal: a failing query signals an
/// unreliable external implementation, and continuing would risk decoding
/// garbage. Nothing here is retried or downgraded.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The size phase of an attribute query failed
    #[error("Cannot get the size of the '{name}' {scope} parameter (status {status})")]
    QuerySize {
        /// Scope of the failing attribute
        scope: AttributeScope,
        /// Display name of the failing attribute
        name: &'static str,
        /// Raw status returned by the capability interface
        status: i32,
    },

    /// The value phase of an attribute query failed
    #[error("Cannot get the '{name}' {scope} parameter (status {status})")]
    QueryValue {
        /// Scope of the failing attribute
        scope: AttributeScope,
        /// Display name of the failing attribute
        name: &'static str,
        /// Raw status returned by the capability interface
        status: i32,
    },

    /// Platform count enumeration failed
    #[error("Cannot get the number of OpenCL platforms available (status {0})")]
    PlatformCount(i32),

    /// Platform list enumeration failed
    #[error("Cannot get the list of OpenCL platforms (status {0})")]
    PlatformList(i32),

    /// Device count enumeration failed
    #[error("Cannot get the number of OpenCL devices available on this platform (status {0})")]
    DeviceCount(i32),

    /// Device list enumeration failed
    #[error("Cannot get the list of OpenCL devices (status {0})")]
    DeviceList(i32),

    /// Writing the report to the output stream failed
    #[error("Cannot write the report: {0}")]
    Io(#[from] io::Error),
}

impl ReportError {
    /// Display name of the attribute involved, if the error concerns one
    pub fn attribute(&self) -> Option<&'static str> {
        match self {
            ReportError::QuerySize { name, .. } | ReportError::QueryValue { name, .. } => {
                Some(name)
            }
            _ => None,
        }
    }
}

/// Result type for oclscope operations
pub type ReportResult<T> = std::result::Result<T, ReportError>;

//! # OCLSCOPE - OpenCL Capability Reports
//!
//! A lightweight Rust library for enumerating OpenCL platforms and devices
//! and rendering a human-readable, hierarchically indented report of each
//! entity's properties.
//!
//! ## Features
//!
//! - **Fixed attribute catalog** covering identity, compiler, limits,
//!   memory, work-group, image, vector-width and floating-point properties
//! - **Schema-free decoding**: every attribute arrives as an untyped byte
//!   buffer; a closed decoder family interprets it by cataloged kind
//! - **Aligned hierarchical output** with bold section headers
//! - **Pluggable backends**: the real OpenCL interface behind the `opencl`
//!   feature, plus an in-memory mock for tests
//! - **Deterministic walk** – single-threaded, one live buffer at a time
//!
//! ## Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "opencl")]
//! fn main() -> oclscope::ReportResult<()> {
//!     let backend = oclscope::backend::opencl::OpenClBackend::new();
//!     oclscope::print_report(&backend)
//! }
//! # #[cfg(not(feature = "opencl"))]
//! # fn main() {}
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
pub mod backend;
pub mod catalog;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod printer;

// Re-export main API for easy access
pub use api::{print_report, write_report};
pub use backend::{CapabilityQuery, Status};
pub use catalog::{
    device_attribute, platform_attribute, AttributeDescriptor, AttributeScope, DecoderKind,
    DEVICE_ATTRIBUTES, PLATFORM_ATTRIBUTES,
};
pub use decode::{decode, DecodedLine};
pub use error::{ReportError, ReportResult};
pub use fetch::{fetch_device, fetch_platform, ByteBuffer};
pub use printer::{Indent, Printer, ReportConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
///
/// # Example
///
/// ```
/// println!("Using oclscope v{}", oclscope::version());
/// ```
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(!version().is_empty());
    }
}

/// Prelude module for convenient imports
///
/// # Example
///
/// ```
/// use oclscope::prelude::*;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.column_width, 40);
/// ```
pub mod prelude {
    pub use crate::api::{print_report, write_report};
    pub use crate::backend::{CapabilityQuery, Status};
    pub use crate::catalog::{AttributeDescriptor, AttributeScope, DecoderKind};
    pub use crate::error::{ReportError, ReportResult};
    pub use crate::fetch::ByteBuffer;
    pub use crate::printer::ReportConfig;
    pub use crate::version;
}

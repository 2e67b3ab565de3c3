//! Capability-query backends
//!
//! This module defines the seam between the report engine and the external
//! capability-query interface. The interface is a black box with two-phase
//! "get size, then get value" semantics keyed by an opaque identifier; the
//! trait below captures exactly that, plus the count-then-fill enumeration
//! protocol for platforms and devices.

pub mod mock;
#[cfg(feature = "opencl")]
pub mod opencl;

/// Raw status code returned by the capability interface. Zero is success.
pub type Status = i32;

/// Two-phase capability-query interface
///
/// Implementations answer size and value queries for platform- and
/// device-scoped attributes. A nonzero status from any operation is reported
/// as `Err` with the raw code; the report engine treats every failure as
/// fatal, so implementations should not retry internally.
pub trait CapabilityQuery {
    /// Opaque platform handle
    type Platform: Copy;
    /// Opaque device handle
    type Device: Copy;

    /// Number of platforms exposed by the interface
    fn platform_count(&self) -> Result<u32, Status>;

    /// Fill the platform list previously sized by [`platform_count`](Self::platform_count)
    fn platforms(&self, count: u32) -> Result<Vec<Self::Platform>, Status>;

    /// Number of devices under the given platform
    fn device_count(&self, platform: Self::Platform) -> Result<u32, Status>;

    /// Fill the device list previously sized by [`device_count`](Self::device_count)
    fn devices(&self, platform: Self::Platform, count: u32) -> Result<Vec<Self::Device>, Status>;

    /// Size phase: bytes required for a platform attribute value
    fn platform_value_size(&self, platform: Self::Platform, id: u32) -> Result<usize, Status>;

    /// Value phase: write a platform attribute into `dest` (sized by the size phase)
    fn platform_value(
        &self,
        platform: Self::Platform,
        id: u32,
        dest: &mut [u8],
    ) -> Result<(), Status>;

    /// Size phase: bytes required for a device attribute value
    fn device_value_size(&self, device: Self::Device, id: u32) -> Result<usize, Status>;

    /// Value phase: write a device attribute into `dest` (sized by the size phase)
    fn device_value(&self, device: Self::Device, id: u32, dest: &mut [u8]) -> Result<(), Status>;
}

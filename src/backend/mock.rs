//! In-memory fake backend
//!
//! Serves attribute bytes from per-entity maps, with query-call accounting
//! and per-identifier failure injection. This is the backend the test suite
//! runs the full report pipeline against; it is also usable by downstream
//! code that wants to exercise the engine without an OpenCL installation.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::backend::{CapabilityQuery, Status};
use crate::catalog::{self, DecoderKind, DEVICE_ATTRIBUTES, PLATFORM_ATTRIBUTES};

/// Status code returned for injected failures and unknown identifiers
pub const MOCK_FAILURE: Status = -30;

/// Query phase being counted or failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The "get required size" phase
    Size,
    /// The "get value" phase
    Value,
}

/// Attribute store for one mock entity
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    values: HashMap<u32, Vec<u8>>,
}

impl AttributeStore {
    fn get(&self, id: u32) -> Result<&Vec<u8>, Status> {
        self.values.get(&id).ok_or(MOCK_FAILURE)
    }

    fn set_str(&mut self, id: u32, text: &str) {
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(0); // the interface reports text with its terminating NUL
        self.values.insert(id, bytes);
    }

    fn set_u32(&mut self, id: u32, value: u32) {
        self.values.insert(id, value.to_ne_bytes().to_vec());
    }

    fn set_u64(&mut self, id: u32, value: u64) {
        self.values.insert(id, value.to_ne_bytes().to_vec());
    }

    fn set_usize(&mut self, id: u32, value: usize) {
        self.values.insert(id, value.to_ne_bytes().to_vec());
    }

    fn set_sizes(&mut self, id: u32, values: &[usize]) {
        let bytes = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        self.values.insert(id, bytes);
    }
}

/// One mock device with its attribute values
#[derive(Debug, Clone, Default)]
pub struct MockDevice {
    attrs: AttributeStore,
}

impl MockDevice {
    /// Empty device; every query against it fails until values are added
    pub fn new() -> Self {
        Self::default()
    }

    /// Device with a plausible default for every cataloged attribute
    pub fn sample() -> Self {
        let mut device = Self::new();
        for attr in DEVICE_ATTRIBUTES {
            match attr.kind {
                DecoderKind::Text => device.attrs.set_str(attr.id, "mock"),
                DecoderKind::Bool => device.attrs.set_u32(attr.id, 1),
                DecoderKind::Uint => device.attrs.set_u32(attr.id, 1),
                DecoderKind::Size => device.attrs.set_usize(attr.id, 1024),
                DecoderKind::MemSize => device.attrs.set_u64(attr.id, 1 << 30),
                DecoderKind::DeviceType => {
                    device.attrs.set_u64(attr.id, catalog::CL_DEVICE_TYPE_GPU)
                }
                DecoderKind::FpConfig => device
                    .attrs
                    .set_u64(attr.id, catalog::CL_FP_INF_NAN | catalog::CL_FP_ROUND_TO_NEAREST),
                DecoderKind::QueueProperties => {
                    device.attrs.set_u64(attr.id, catalog::CL_QUEUE_PROFILING_ENABLE)
                }
                DecoderKind::ExecCapabilities => {
                    device.attrs.set_u64(attr.id, catalog::CL_EXEC_KERNEL)
                }
                DecoderKind::LocalMemType => device.attrs.set_u32(attr.id, catalog::CL_LOCAL),
                DecoderKind::CacheType => {
                    device.attrs.set_u32(attr.id, catalog::CL_READ_WRITE_CACHE)
                }
                DecoderKind::Dimensions => device.attrs.set_sizes(attr.id, &[1024, 1024, 64]),
                DecoderKind::ExtensionList => {
                    device.attrs.set_str(attr.id, "cl_khr_fp64 cl_khr_icd")
                }
            }
        }
        device.with_str(catalog::CL_DEVICE_NAME, "MockDevice")
    }

    /// Set a NUL-terminated text attribute
    pub fn with_str(mut self, id: u32, text: &str) -> Self {
        self.attrs.set_str(id, text);
        self
    }

    /// Set a 32-bit attribute
    pub fn with_u32(mut self, id: u32, value: u32) -> Self {
        self.attrs.set_u32(id, value);
        self
    }

    /// Set a 64-bit attribute
    pub fn with_u64(mut self, id: u32, value: u64) -> Self {
        self.attrs.set_u64(id, value);
        self
    }

    /// Set a machine-word attribute
    pub fn with_usize(mut self, id: u32, value: usize) -> Self {
        self.attrs.set_usize(id, value);
        self
    }

    /// Set a machine-word array attribute
    pub fn with_sizes(mut self, id: u32, values: &[usize]) -> Self {
        self.attrs.set_sizes(id, values);
        self
    }
}

/// One mock platform with its attribute values and devices
#[derive(Debug, Clone, Default)]
pub struct MockPlatform {
    attrs: AttributeStore,
    devices: Vec<MockDevice>,
}

impl MockPlatform {
    /// Empty platform with no attributes and no devices
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform with all five cataloged attributes filled in
    pub fn sample(name: &str) -> Self {
        let mut platform = Self::new();
        for attr in PLATFORM_ATTRIBUTES {
            match attr.kind {
                DecoderKind::ExtensionList => platform.attrs.set_str(attr.id, "cl_khr_icd"),
                _ => platform.attrs.set_str(attr.id, "mock"),
            }
        }
        platform.with_str(catalog::CL_PLATFORM_NAME, name)
    }

    /// Set a NUL-terminated text attribute
    pub fn with_str(mut self, id: u32, text: &str) -> Self {
        self.attrs.set_str(id, text);
        self
    }

    /// Attach a device to this platform
    pub fn with_device(mut self, device: MockDevice) -> Self {
        self.devices.push(device);
        self
    }
}

/// Capability-query backend serving canned values
#[derive(Debug, Default)]
pub struct MockBackend {
    platforms: Vec<MockPlatform>,
    fail: Option<(u32, Phase)>,
    log: RefCell<HashMap<(u32, Phase), usize>>,
}

impl MockBackend {
    /// Backend over the given platforms
    pub fn new(platforms: Vec<MockPlatform>) -> Self {
        Self { platforms, fail: None, log: RefCell::new(HashMap::new()) }
    }

    /// Make every query for `id` fail in the given phase
    pub fn fail_on(mut self, id: u32, phase: Phase) -> Self {
        self.fail = Some((id, phase));
        self
    }

    /// How many times the given phase was queried for `id`, over all entities
    pub fn queries(&self, id: u32, phase: Phase) -> usize {
        self.log.borrow().get(&(id, phase)).copied().unwrap_or(0)
    }

    fn record(&self, id: u32, phase: Phase) -> Result<(), Status> {
        *self.log.borrow_mut().entry((id, phase)).or_insert(0) += 1;
        if self.fail == Some((id, phase)) {
            return Err(MOCK_FAILURE);
        }
        Ok(())
    }

    fn platform_store(&self, index: usize) -> Result<&MockPlatform, Status> {
        self.platforms.get(index).ok_or(MOCK_FAILURE)
    }

    fn device_store(&self, id: (usize, usize)) -> Result<&MockDevice, Status> {
        self.platform_store(id.0)?.devices.get(id.1).ok_or(MOCK_FAILURE)
    }
}

impl CapabilityQuery for MockBackend {
    type Platform = usize;
    type Device = (usize, usize);

    fn platform_count(&self) -> Result<u32, Status> {
        Ok(self.platforms.len() as u32)
    }

    fn platforms(&self, count: u32) -> Result<Vec<usize>, Status> {
        Ok((0..count as usize).collect())
    }

    fn device_count(&self, platform: usize) -> Result<u32, Status> {
        Ok(self.platform_store(platform)?.devices.len() as u32)
    }

    fn devices(&self, platform: usize, count: u32) -> Result<Vec<(usize, usize)>, Status> {
        Ok((0..count as usize).map(|j| (platform, j)).collect())
    }

    fn platform_value_size(&self, platform: usize, id: u32) -> Result<usize, Status> {
        self.record(id, Phase::Size)?;
        Ok(self.platform_store(platform)?.attrs.get(id)?.len())
    }

    fn platform_value(&self, platform: usize, id: u32, dest: &mut [u8]) -> Result<(), Status> {
        self.record(id, Phase::Value)?;
        let value = self.platform_store(platform)?.attrs.get(id)?;
        if dest.len() != value.len() {
            return Err(MOCK_FAILURE);
        }
        dest.copy_from_slice(value);
        Ok(())
    }

    fn device_value_size(&self, device: (usize, usize), id: u32) -> Result<usize, Status> {
        self.record(id, Phase::Size)?;
        Ok(self.device_store(device)?.attrs.get(id)?.len())
    }

    fn device_value(&self, device: (usize, usize), id: u32, dest: &mut [u8]) -> Result<(), Status> {
        self.record(id, Phase::Value)?;
        let value = self.device_store(device)?.attrs.get(id)?;
        if dest.len() != value.len() {
            return Err(MOCK_FAILURE);
        }
        dest.copy_from_slice(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CL_DEVICE_NAME, CL_PLATFORM_NAME};

    #[test]
    fn test_sample_covers_full_catalog() {
        let device = MockDevice::sample();
        for attr in DEVICE_ATTRIBUTES {
            assert!(device.attrs.get(attr.id).is_ok(), "missing '{}'", attr.label);
        }
        let platform = MockPlatform::sample("P");
        for attr in PLATFORM_ATTRIBUTES {
            assert!(platform.attrs.get(attr.id).is_ok(), "missing '{}'", attr.label);
        }
    }

    #[test]
    fn test_value_phase_checks_declared_length() {
        let backend = MockBackend::new(vec![MockPlatform::sample("P")]);
        let size = backend.platform_value_size(0, CL_PLATFORM_NAME).unwrap();
        assert_eq!(size, "P".len() + 1);
        let mut wrong = vec![0u8; size + 4];
        assert!(backend.platform_value(0, CL_PLATFORM_NAME, &mut wrong).is_err());
    }

    #[test]
    fn test_query_accounting_and_failure_injection() {
        let backend = MockBackend::new(vec![
            MockPlatform::sample("P").with_device(MockDevice::sample())
        ])
        .fail_on(CL_DEVICE_NAME, Phase::Value);

        let size = backend.device_value_size((0, 0), CL_DEVICE_NAME).unwrap();
        let mut dest = vec![0u8; size];
        assert_eq!(backend.device_value((0, 0), CL_DEVICE_NAME, &mut dest), Err(MOCK_FAILURE));
        assert_eq!(backend.queries(CL_DEVICE_NAME, Phase::Size), 1);
        assert_eq!(backend.queries(CL_DEVICE_NAME, Phase::Value), 1);
    }
}

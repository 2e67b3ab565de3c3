//! Two-phase attribute fetching
//!
//! An attribute is fetched by first asking the capability interface how many
//! bytes the value needs, allocating exactly that many, and querying again
//! into the allocation. The result is a [`ByteBuffer`]: an owned, untyped
//! value that the decoder family interprets according to the catalog.

use log::debug;

use crate::backend::CapabilityQuery;
use crate::catalog::AttributeDescriptor;
use crate::error::{ReportError, ReportResult};

/// One fetched attribute value, still undecoded
///
/// The buffer's length is exactly what the interface reported in the size
/// phase. It is owned by the fetch call site and dropped as soon as decoding
/// is done, on error paths included. The typed readers never panic: a buffer
/// shorter than the requested width is zero-extended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    /// Wrap fetched bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Declared length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the interface reported a zero-length value
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn word<const N: usize>(&self) -> [u8; N] {
        let mut raw = [0u8; N];
        let n = self.bytes.len().min(N);
        raw[..n].copy_from_slice(&self.bytes[..n]);
        raw
    }

    /// First 4 bytes as a native-endian integer
    pub fn as_u32(&self) -> u32 {
        u32::from_ne_bytes(self.word())
    }

    /// First 8 bytes as a native-endian integer
    pub fn as_u64(&self) -> u64 {
        u64::from_ne_bytes(self.word())
    }

    /// First machine word as a native-endian integer
    pub fn as_usize(&self) -> usize {
        usize::from_ne_bytes(self.word())
    }

    /// Whole buffer as an array of machine words; a trailing partial word is ignored
    pub fn usize_values(&self) -> Vec<usize> {
        self.bytes
            .chunks_exact(std::mem::size_of::<usize>())
            .map(|chunk| {
                let mut raw = [0u8; std::mem::size_of::<usize>()];
                raw.copy_from_slice(chunk);
                usize::from_ne_bytes(raw)
            })
            .collect()
    }

    /// Text content up to the terminating NUL
    pub fn c_string(&self) -> String {
        let end = self.bytes.iter().position(|&b| b == 0).unwrap_or(self.bytes.len());
        String::from_utf8_lossy(&self.bytes[..end]).into_owned()
    }
}

/// Fetch one platform attribute through the size-then-value protocol
pub fn fetch_platform<B: CapabilityQuery>(
    backend: &B,
    platform: B::Platform,
    attr: &AttributeDescriptor,
) -> ReportResult<ByteBuffer> {
    let size = backend.platform_value_size(platform, attr.id).map_err(|status| {
        ReportError::QuerySize { scope: attr.scope, name: attr.label, status }
    })?;
    let mut bytes = vec![0u8; size];
    backend.platform_value(platform, attr.id, &mut bytes).map_err(|status| {
        ReportError::QueryValue { scope: attr.scope, name: attr.label, status }
    })?;
    debug!("fetched {} bytes for platform attribute '{}'", size, attr.label);
    Ok(ByteBuffer::new(bytes))
}

/// Fetch one device attribute through the size-then-value protocol
pub fn fetch_device<B: CapabilityQuery>(
    backend: &B,
    device: B::Device,
    attr: &AttributeDescriptor,
) -> ReportResult<ByteBuffer> {
    let size = backend.device_value_size(device, attr.id).map_err(|status| {
        ReportError::QuerySize { scope: attr.scope, name: attr.label, status }
    })?;
    let mut bytes = vec![0u8; size];
    backend.device_value(device, attr.id, &mut bytes).map_err(|status| {
        ReportError::QueryValue { scope: attr.scope, name: attr.label, status }
    })?;
    debug!("fetched {} bytes for device attribute '{}'", size, attr.label);
    Ok(ByteBuffer::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{MockBackend, MockDevice, MockPlatform, Phase, MOCK_FAILURE};
    use crate::catalog::{device_attribute, platform_attribute};

    fn backend() -> MockBackend {
        MockBackend::new(vec![MockPlatform::sample("TestPlatform")
            .with_device(MockDevice::sample())])
    }

    #[test]
    fn test_fetch_matches_declared_length() {
        let backend = backend();
        let attr = platform_attribute("Name").unwrap();
        let buffer = fetch_platform(&backend, 0, attr).unwrap();
        assert_eq!(buffer.len(), "TestPlatform".len() + 1);
        assert_eq!(buffer.c_string(), "TestPlatform");
    }

    #[test]
    fn test_fetch_queries_each_phase_once() {
        let backend = backend();
        let attr = device_attribute("Max compute units").unwrap();
        let _ = fetch_device(&backend, (0, 0), attr).unwrap();
        assert_eq!(backend.queries(attr.id, Phase::Size), 1);
        assert_eq!(backend.queries(attr.id, Phase::Value), 1);
    }

    #[test]
    fn test_size_failure_names_attribute() {
        let attr = device_attribute("Vendor ID").unwrap();
        let backend = backend().fail_on(attr.id, Phase::Size);
        let err = fetch_device(&backend, (0, 0), attr).unwrap_err();
        match err {
            ReportError::QuerySize { name, status, .. } => {
                assert_eq!(name, "Vendor ID");
                assert_eq!(status, MOCK_FAILURE);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_value_failure_names_attribute() {
        let attr = device_attribute("Vendor ID").unwrap();
        let backend = backend().fail_on(attr.id, Phase::Value);
        let err = fetch_device(&backend, (0, 0), attr).unwrap_err();
        assert_eq!(err.attribute(), Some("Vendor ID"));
        assert!(matches!(err, ReportError::QueryValue { .. }));
    }

    #[test]
    fn test_typed_readers_zero_extend_short_buffers() {
        let buffer = ByteBuffer::new(vec![7]);
        assert_eq!(buffer.as_u32(), 7);
        assert_eq!(buffer.as_u64(), 7);
        assert_eq!(buffer.as_usize(), 7);
        assert!(ByteBuffer::new(vec![1, 2, 3]).usize_values().is_empty());
    }
}

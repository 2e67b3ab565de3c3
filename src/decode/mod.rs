//! The decoder family
//!
//! A closed set of pure decoders, one per [`DecoderKind`], mapping a fetched
//! [`ByteBuffer`] to one or more report lines. Dispatch is a match on the
//! kind recorded in the attribute catalog; only the first line of a
//! multi-line attribute carries the key.

pub mod flags;
pub mod scalar;

use crate::catalog::{AttributeDescriptor, DecoderKind};
use crate::fetch::ByteBuffer;

/// One decoded report line
///
/// Continuation lines of a list-valued attribute have no key and are printed
/// with blank padding in the key column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine {
    /// Attribute display name; present only on the first line
    pub key: Option<&'static str>,
    /// Rendered value text
    pub text: String,
}

/// Decode a fetched buffer according to its cataloged kind
///
/// Never fails: the catalog's decoder kind is a static contract with the
/// capability interface, and the buffer is assumed well-formed under it.
pub fn decode(attr: &AttributeDescriptor, buffer: &ByteBuffer) -> Vec<DecodedLine> {
    let values = match attr.kind {
        DecoderKind::Text => vec![scalar::text(buffer)],
        DecoderKind::Bool => vec![scalar::boolean(buffer.as_u32()).to_string()],
        DecoderKind::Uint => vec![buffer.as_u32().to_string()],
        DecoderKind::Size => vec![buffer.as_usize().to_string()],
        DecoderKind::MemSize => vec![scalar::mem_size(buffer.as_u64())],
        DecoderKind::DeviceType => vec![flags::device_type(buffer.as_u64())],
        DecoderKind::FpConfig => flags::fp_config(buffer.as_u64()),
        DecoderKind::QueueProperties => flags::queue_properties(buffer.as_u64()),
        DecoderKind::ExecCapabilities => flags::exec_capabilities(buffer.as_u64()),
        DecoderKind::LocalMemType => vec![flags::local_mem_type(buffer.as_u32()).to_string()],
        DecoderKind::CacheType => vec![flags::cache_type(buffer.as_u32()).to_string()],
        DecoderKind::Dimensions => vec![scalar::dimensions(&buffer.usize_values())],
        DecoderKind::ExtensionList => scalar::tokens(buffer),
    };

    values
        .into_iter()
        .enumerate()
        .map(|(index, text)| DecodedLine { key: (index == 0).then_some(attr.label), text })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::device_attribute;

    fn buffer_u64(value: u64) -> ByteBuffer {
        ByteBuffer::new(value.to_ne_bytes().to_vec())
    }

    #[test]
    fn test_scalar_attribute_decodes_to_one_keyed_line() {
        let attr = device_attribute("Max compute units").unwrap();
        let lines = decode(attr, &ByteBuffer::new(8u32.to_ne_bytes().to_vec()));
        assert_eq!(lines, vec![DecodedLine { key: Some("Max compute units"), text: "8".into() }]);
    }

    #[test]
    fn test_zero_integer_renders_as_single_digit() {
        let attr = device_attribute("Vendor ID").unwrap();
        let lines = decode(attr, &ByteBuffer::new(0u32.to_ne_bytes().to_vec()));
        assert_eq!(lines[0].text, "0");
    }

    #[test]
    fn test_list_attribute_keys_first_line_only() {
        let attr = device_attribute("Extensions").unwrap();
        let lines = decode(attr, &ByteBuffer::new(b"cl_khr_fp64 cl_khr_icd\0".to_vec()));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], DecodedLine { key: Some("Extensions"), text: "cl_khr_fp64".into() });
        assert_eq!(lines[1], DecodedLine { key: None, text: "cl_khr_icd".into() });
    }

    #[test]
    fn test_flag_attribute_continuation_lines() {
        let attr = device_attribute("Single precision fp capability").unwrap();
        let word = crate::catalog::CL_FP_DENORM | crate::catalog::CL_FP_INF_NAN;
        let lines = decode(attr, &buffer_u64(word));
        assert_eq!(lines[0].key, Some("Single precision fp capability"));
        assert_eq!(lines[0].text, "Denorms");
        assert_eq!(lines[1].key, None);
        assert_eq!(lines[1].text, "Inf and NaNs");
    }

    #[test]
    fn test_device_type_stays_single_line() {
        let attr = device_attribute("Type").unwrap();
        let word = crate::catalog::CL_DEVICE_TYPE_CPU | crate::catalog::CL_DEVICE_TYPE_GPU;
        let lines = decode(attr, &buffer_u64(word));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "CPU | GPU");
    }

    #[test]
    fn test_dimensions_roundtrip_through_buffer() {
        let attr = device_attribute("Max work item sizes").unwrap();
        let bytes: Vec<u8> = [3usize, 4, 5].iter().flat_map(|v| v.to_ne_bytes()).collect();
        let lines = decode(attr, &ByteBuffer::new(bytes));
        assert_eq!(lines[0].text, "(3, 4, 5)");
    }
}

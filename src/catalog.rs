//! Attribute catalog for the capability report
//!
//! The catalog is the static contract with the capability-query interface:
//! for each queryable attribute it records the parameter identifier, the
//! display name used in the report, and the decoder kind describing how the
//! fetched byte buffer must be interpreted. Table order defines report order.

use std::fmt;

// Parameter identifiers from the OpenCL 1.1 headers.
pub(crate) const CL_PLATFORM_PROFILE: u32 = 0x0900;
pub(crate) const CL_PLATFORM_VERSION: u32 = 0x0901;
pub(crate) const CL_PLATFORM_NAME: u32 = 0x0902;
pub(crate) const CL_PLATFORM_VENDOR: u32 = 0x0903;
pub(crate) const CL_PLATFORM_EXTENSIONS: u32 = 0x0904;

pub(crate) const CL_DEVICE_TYPE: u32 = 0x1000;
pub(crate) const CL_DEVICE_VENDOR_ID: u32 = 0x1001;
pub(crate) const CL_DEVICE_MAX_COMPUTE_UNITS: u32 = 0x1002;
pub(crate) const CL_DEVICE_MAX_WORK_ITEM_DIMENSIONS: u32 = 0x1003;
pub(crate) const CL_DEVICE_MAX_WORK_GROUP_SIZE: u32 = 0x1004;
pub(crate) const CL_DEVICE_MAX_WORK_ITEM_SIZES: u32 = 0x1005;
pub(crate) const CL_DEVICE_PREFERRED_VECTOR_WIDTH_CHAR: u32 = 0x1006;
pub(crate) const CL_DEVICE_PREFERRED_VECTOR_WIDTH_SHORT: u32 = 0x1007;
pub(crate) const CL_DEVICE_PREFERRED_VECTOR_WIDTH_INT: u32 = 0x1008;
pub(crate) const CL_DEVICE_PREFERRED_VECTOR_WIDTH_LONG: u32 = 0x1009;
pub(crate) const CL_DEVICE_PREFERRED_VECTOR_WIDTH_FLOAT: u32 = 0x100A;
pub(crate) const CL_DEVICE_PREFERRED_VECTOR_WIDTH_DOUBLE: u32 = 0x100B;
pub(crate) const CL_DEVICE_MAX_CLOCK_FREQUENCY: u32 = 0x100C;
pub(crate) const CL_DEVICE_ADDRESS_BITS: u32 = 0x100D;
pub(crate) const CL_DEVICE_MAX_READ_IMAGE_ARGS: u32 = 0x100E;
pub(crate) const CL_DEVICE_MAX_WRITE_IMAGE_ARGS: u32 = 0x100F;
pub(crate) const CL_DEVICE_MAX_MEM_ALLOC_SIZE: u32 = 0x1010;
pub(crate) const CL_DEVICE_IMAGE2D_MAX_WIDTH: u32 = 0x1011;
pub(crate) const CL_DEVICE_IMAGE2D_MAX_HEIGHT: u32 = 0x1012;
pub(crate) const CL_DEVICE_IMAGE3D_MAX_WIDTH: u32 = 0x1013;
pub(crate) const CL_DEVICE_IMAGE3D_MAX_HEIGHT: u32 = 0x1014;
pub(crate) const CL_DEVICE_IMAGE3D_MAX_DEPTH: u32 = 0x1015;
pub(crate) const CL_DEVICE_IMAGE_SUPPORT: u32 = 0x1016;
pub(crate) const CL_DEVICE_MAX_PARAMETER_SIZE: u32 = 0x1017;
pub(crate) const CL_DEVICE_MAX_SAMPLERS: u32 = 0x1018;
pub(crate) const CL_DEVICE_MEM_BASE_ADDR_ALIGN: u32 = 0x1019;
pub(crate) const CL_DEVICE_MIN_DATA_TYPE_ALIGN_SIZE: u32 = 0x101A;
pub(crate) const CL_DEVICE_SINGLE_FP_CONFIG: u32 = 0x101B;
pub(crate) const CL_DEVICE_GLOBAL_MEM_CACHE_TYPE: u32 = 0x101C;
pub(crate) const CL_DEVICE_GLOBAL_MEM_CACHELINE_SIZE: u32 = 0x101D;
pub(crate) const CL_DEVICE_GLOBAL_MEM_CACHE_SIZE: u32 = 0x101E;
pub(crate) const CL_DEVICE_GLOBAL_MEM_SIZE: u32 = 0x101F;
pub(crate) const CL_DEVICE_MAX_CONSTANT_BUFFER_SIZE: u32 = 0x1020;
pub(crate) const CL_DEVICE_MAX_CONSTANT_ARGS: u32 = 0x1021;
pub(crate) const CL_DEVICE_LOCAL_MEM_TYPE: u32 = 0x1022;
pub(crate) const CL_DEVICE_LOCAL_MEM_SIZE: u32 = 0x1023;
pub(crate) const CL_DEVICE_ERROR_CORRECTION_SUPPORT: u32 = 0x1024;
pub(crate) const CL_DEVICE_PROFILING_TIMER_RESOLUTION: u32 = 0x1025;
pub(crate) const CL_DEVICE_ENDIAN_LITTLE: u32 = 0x1026;
pub(crate) const CL_DEVICE_AVAILABLE: u32 = 0x1027;
pub(crate) const CL_DEVICE_COMPILER_AVAILABLE: u32 = 0x1028;
pub(crate) const CL_DEVICE_EXECUTION_CAPABILITIES: u32 = 0x1029;
pub(crate) const CL_DEVICE_QUEUE_PROPERTIES: u32 = 0x102A;
pub(crate) const CL_DEVICE_NAME: u32 = 0x102B;
pub(crate) const CL_DEVICE_VENDOR: u32 = 0x102C;
pub(crate) const CL_DRIVER_VERSION: u32 = 0x102D;
pub(crate) const CL_DEVICE_PROFILE: u32 = 0x102E;
pub(crate) const CL_DEVICE_VERSION: u32 = 0x102F;
pub(crate) const CL_DEVICE_EXTENSIONS: u32 = 0x1030;
pub(crate) const CL_DEVICE_DOUBLE_FP_CONFIG: u32 = 0x1032;
pub(crate) const CL_DEVICE_HALF_FP_CONFIG: u32 = 0x1033;
pub(crate) const CL_DEVICE_PREFERRED_VECTOR_WIDTH_HALF: u32 = 0x1034;
pub(crate) const CL_DEVICE_HOST_UNIFIED_MEMORY: u32 = 0x1035;
pub(crate) const CL_DEVICE_NATIVE_VECTOR_WIDTH_CHAR: u32 = 0x1036;
pub(crate) const CL_DEVICE_NATIVE_VECTOR_WIDTH_SHORT: u32 = 0x1037;
pub(crate) const CL_DEVICE_NATIVE_VECTOR_WIDTH_INT: u32 = 0x1038;
pub(crate) const CL_DEVICE_NATIVE_VECTOR_WIDTH_LONG: u32 = 0x1039;
pub(crate) const CL_DEVICE_NATIVE_VECTOR_WIDTH_FLOAT: u32 = 0x103A;
pub(crate) const CL_DEVICE_NATIVE_VECTOR_WIDTH_DOUBLE: u32 = 0x103B;
pub(crate) const CL_DEVICE_NATIVE_VECTOR_WIDTH_HALF: u32 = 0x103C;
pub(crate) const CL_DEVICE_OPENCL_C_VERSION: u32 = 0x103D;

// Device type flags (cl_device_type bitfield).
pub(crate) const CL_DEVICE_TYPE_DEFAULT: u64 = 1 << 0;
pub(crate) const CL_DEVICE_TYPE_CPU: u64 = 1 << 1;
pub(crate) const CL_DEVICE_TYPE_GPU: u64 = 1 << 2;
pub(crate) const CL_DEVICE_TYPE_ACCELERATOR: u64 = 1 << 3;
#[cfg(feature = "opencl")]
pub(crate) const CL_DEVICE_TYPE_ALL: u64 = 0xFFFF_FFFF;

// Floating-point capability flags (cl_device_fp_config bitfield).
pub(crate) const CL_FP_DENORM: u64 = 1 << 0;
pub(crate) const CL_FP_INF_NAN: u64 = 1 << 1;
pub(crate) const CL_FP_ROUND_TO_NEAREST: u64 = 1 << 2;
pub(crate) const CL_FP_ROUND_TO_ZERO: u64 = 1 << 3;
pub(crate) const CL_FP_ROUND_TO_INF: u64 = 1 << 4;
pub(crate) const CL_FP_FMA: u64 = 1 << 5;
pub(crate) const CL_FP_SOFT_FLOAT: u64 = 1 << 6;

// Command-queue property flags (cl_command_queue_properties bitfield).
pub(crate) const CL_QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE: u64 = 1 << 0;
pub(crate) const CL_QUEUE_PROFILING_ENABLE: u64 = 1 << 1;

// Execution capability flags (cl_device_exec_capabilities bitfield).
pub(crate) const CL_EXEC_KERNEL: u64 = 1 << 0;
pub(crate) const CL_EXEC_NATIVE_KERNEL: u64 = 1 << 1;

// Closed enum values.
pub(crate) const CL_LOCAL: u32 = 0x1;
pub(crate) const CL_NONE: u32 = 0x0;
pub(crate) const CL_READ_ONLY_CACHE: u32 = 0x1;
pub(crate) const CL_READ_WRITE_CACHE: u32 = 0x2;

/// Whether an attribute is queried per platform or per device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeScope {
    /// Queried once per platform
    Platform,
    /// Queried once per device
    Device,
}

impl fmt::Display for AttributeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeScope::Platform => write!(f, "platform"),
            AttributeScope::Device => write!(f, "device"),
        }
    }
}

/// How a fetched byte buffer must be interpreted
///
/// The capability interface carries no schema; the kind recorded here is the
/// only description of the buffer's true shape. The contract is static and
/// not runtime-validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderKind {
    /// NUL-terminated text value, emitted as-is
    Text,
    /// 32-bit integer rendered as Yes/No
    Bool,
    /// 32-bit integer, exact decimal digits
    Uint,
    /// Machine-word integer, exact decimal digits
    Size,
    /// 64-bit byte count decomposed into TB/GB/MB/kB/B components
    MemSize,
    /// 64-bit flag word joined into one " | "-separated line
    DeviceType,
    /// 64-bit flag word, one line per floating-point capability
    FpConfig,
    /// 64-bit flag word, one line per command-queue property
    QueueProperties,
    /// 64-bit flag word, one line per execution capability
    ExecCapabilities,
    /// Binary local-memory classification (Local/Global)
    LocalMemType,
    /// Global-memory cache classification with an Unknown default
    CacheType,
    /// Array of machine-word values rendered as a parenthesized tuple
    Dimensions,
    /// Space-delimited token list, one continuation line per extra token
    ExtensionList,
}

/// One entry of the fixed attribute catalog
#[derive(Debug, Clone, Copy)]
pub struct AttributeDescriptor {
    /// Scope the attribute is queried under
    pub scope: AttributeScope,
    /// Parameter identifier passed to the capability interface
    pub id: u32,
    /// Display name used as the report key and in diagnostics
    pub label: &'static str,
    /// Decoder kind matching the interface's encoding for this identifier
    pub kind: DecoderKind,
}

const fn platform(id: u32, label: &'static str, kind: DecoderKind) -> AttributeDescriptor {
    AttributeDescriptor { scope: AttributeScope::Platform, id, label, kind }
}

const fn device(id: u32, label: &'static str, kind: DecoderKind) -> AttributeDescriptor {
    AttributeDescriptor { scope: AttributeScope::Device, id, label, kind }
}

/// Platform attributes in report order
pub const PLATFORM_ATTRIBUTES: &[AttributeDescriptor] = &[
    platform(CL_PLATFORM_NAME, "Name", DecoderKind::Text),
    platform(CL_PLATFORM_VENDOR, "Vendor", DecoderKind::Text),
    platform(CL_PLATFORM_VERSION, "Version", DecoderKind::Text),
    platform(CL_PLATFORM_PROFILE, "Profile", DecoderKind::Text),
    platform(CL_PLATFORM_EXTENSIONS, "Extensions", DecoderKind::ExtensionList),
];

/// Device attributes in report order, grouped by domain
pub const DEVICE_ATTRIBUTES: &[AttributeDescriptor] = &[
    // Identity
    device(CL_DEVICE_NAME, "Name", DecoderKind::Text),
    device(CL_DEVICE_TYPE, "Type", DecoderKind::DeviceType),
    device(CL_DEVICE_VENDOR, "Vendor", DecoderKind::Text),
    device(CL_DEVICE_VENDOR_ID, "Vendor ID", DecoderKind::Uint),
    device(CL_DEVICE_PROFILE, "Profile", DecoderKind::Text),
    device(CL_DEVICE_AVAILABLE, "Available", DecoderKind::Bool),
    device(CL_DEVICE_VERSION, "Version", DecoderKind::Text),
    device(CL_DRIVER_VERSION, "Driver version", DecoderKind::Text),
    // Compiler
    device(CL_DEVICE_COMPILER_AVAILABLE, "Compiler available", DecoderKind::Bool),
    device(CL_DEVICE_OPENCL_C_VERSION, "OpenCL C version", DecoderKind::Text),
    // Misc
    device(CL_DEVICE_ADDRESS_BITS, "Address space size", DecoderKind::Uint),
    device(CL_DEVICE_ENDIAN_LITTLE, "Little endian", DecoderKind::Bool),
    device(CL_DEVICE_ERROR_CORRECTION_SUPPORT, "Error correction support", DecoderKind::Bool),
    device(CL_DEVICE_HOST_UNIFIED_MEMORY, "Unified memory", DecoderKind::Bool),
    device(CL_DEVICE_MEM_BASE_ADDR_ALIGN, "Address alignment (bits)", DecoderKind::Uint),
    device(CL_DEVICE_MIN_DATA_TYPE_ALIGN_SIZE, "Smallest alignment (bytes)", DecoderKind::Uint),
    device(CL_DEVICE_PROFILING_TIMER_RESOLUTION, "Resolution of timer (ns)", DecoderKind::Size),
    device(CL_DEVICE_MAX_CLOCK_FREQUENCY, "Max clock frequency (MHz)", DecoderKind::Uint),
    device(CL_DEVICE_MAX_COMPUTE_UNITS, "Max compute units", DecoderKind::Uint),
    device(CL_DEVICE_MAX_CONSTANT_ARGS, "Max constant args", DecoderKind::Uint),
    device(CL_DEVICE_MAX_CONSTANT_BUFFER_SIZE, "Max constant buffer size", DecoderKind::MemSize),
    device(CL_DEVICE_MAX_MEM_ALLOC_SIZE, "Max mem alloc size", DecoderKind::MemSize),
    device(CL_DEVICE_MAX_PARAMETER_SIZE, "Max parameter size", DecoderKind::Size),
    device(CL_DEVICE_QUEUE_PROPERTIES, "Command-queue supported props", DecoderKind::QueueProperties),
    device(CL_DEVICE_EXECUTION_CAPABILITIES, "Execution capabilities", DecoderKind::ExecCapabilities),
    // Memory
    device(CL_DEVICE_GLOBAL_MEM_SIZE, "Global memory size", DecoderKind::MemSize),
    device(CL_DEVICE_GLOBAL_MEM_CACHE_SIZE, "Global memory cache size", DecoderKind::MemSize),
    device(CL_DEVICE_GLOBAL_MEM_CACHELINE_SIZE, "Global memory line cache size", DecoderKind::Uint),
    device(CL_DEVICE_LOCAL_MEM_SIZE, "Local memory size", DecoderKind::MemSize),
    device(CL_DEVICE_LOCAL_MEM_TYPE, "Local memory type", DecoderKind::LocalMemType),
    device(CL_DEVICE_GLOBAL_MEM_CACHE_TYPE, "Global memory cache type", DecoderKind::CacheType),
    // Work group
    device(CL_DEVICE_MAX_WORK_GROUP_SIZE, "Max work group size", DecoderKind::Size),
    device(CL_DEVICE_MAX_WORK_ITEM_DIMENSIONS, "Max work item dimensions", DecoderKind::Uint),
    device(CL_DEVICE_MAX_WORK_ITEM_SIZES, "Max work item sizes", DecoderKind::Dimensions),
    // Images
    device(CL_DEVICE_IMAGE_SUPPORT, "Image support", DecoderKind::Bool),
    device(CL_DEVICE_IMAGE2D_MAX_HEIGHT, "Max 2D image height", DecoderKind::Size),
    device(CL_DEVICE_IMAGE2D_MAX_WIDTH, "Max 2D image width", DecoderKind::Size),
    device(CL_DEVICE_IMAGE3D_MAX_DEPTH, "Max 3D image depth", DecoderKind::Size),
    device(CL_DEVICE_IMAGE3D_MAX_HEIGHT, "Max 3D image height", DecoderKind::Size),
    device(CL_DEVICE_IMAGE3D_MAX_WIDTH, "Max 3D image width", DecoderKind::Size),
    device(CL_DEVICE_MAX_READ_IMAGE_ARGS, "Max read image args", DecoderKind::Uint),
    device(CL_DEVICE_MAX_WRITE_IMAGE_ARGS, "Max write image args", DecoderKind::Uint),
    device(CL_DEVICE_MAX_SAMPLERS, "Max samplers", DecoderKind::Uint),
    // Vectors
    device(CL_DEVICE_NATIVE_VECTOR_WIDTH_CHAR, "Native vector width char", DecoderKind::Uint),
    device(CL_DEVICE_NATIVE_VECTOR_WIDTH_SHORT, "Native vector width short", DecoderKind::Uint),
    device(CL_DEVICE_NATIVE_VECTOR_WIDTH_INT, "Native vector width int", DecoderKind::Uint),
    device(CL_DEVICE_NATIVE_VECTOR_WIDTH_LONG, "Native vector width long", DecoderKind::Uint),
    device(CL_DEVICE_NATIVE_VECTOR_WIDTH_HALF, "Native vector width half", DecoderKind::Uint),
    device(CL_DEVICE_NATIVE_VECTOR_WIDTH_FLOAT, "Native vector width float", DecoderKind::Uint),
    device(CL_DEVICE_NATIVE_VECTOR_WIDTH_DOUBLE, "Native vector width double", DecoderKind::Uint),
    device(CL_DEVICE_PREFERRED_VECTOR_WIDTH_CHAR, "Preferred vector width char", DecoderKind::Uint),
    device(CL_DEVICE_PREFERRED_VECTOR_WIDTH_SHORT, "Preferred vector width short", DecoderKind::Uint),
    device(CL_DEVICE_PREFERRED_VECTOR_WIDTH_INT, "Preferred vector width int", DecoderKind::Uint),
    device(CL_DEVICE_PREFERRED_VECTOR_WIDTH_LONG, "Preferred vector width long", DecoderKind::Uint),
    device(CL_DEVICE_PREFERRED_VECTOR_WIDTH_HALF, "Preferred vector width half", DecoderKind::Uint),
    device(CL_DEVICE_PREFERRED_VECTOR_WIDTH_FLOAT, "Preferred vector width float", DecoderKind::Uint),
    device(CL_DEVICE_PREFERRED_VECTOR_WIDTH_DOUBLE, "Preferred vector width double", DecoderKind::Uint),
    // Floating-points
    device(CL_DEVICE_HALF_FP_CONFIG, "Half precision fp capability", DecoderKind::FpConfig),
    device(CL_DEVICE_SINGLE_FP_CONFIG, "Single precision fp capability", DecoderKind::FpConfig),
    device(CL_DEVICE_DOUBLE_FP_CONFIG, "Double precision fp capability", DecoderKind::FpConfig),
    // Extensions
    device(CL_DEVICE_EXTENSIONS, "Extensions", DecoderKind::ExtensionList),
];

/// Look up a platform attribute by its display name
pub fn platform_attribute(label: &str) -> Option<&'static AttributeDescriptor> {
    PLATFORM_ATTRIBUTES.iter().find(|attr| attr.label == label)
}

/// Look up a device attribute by its display name
pub fn device_attribute(label: &str) -> Option<&'static AttributeDescriptor> {
    DEVICE_ATTRIBUTES.iter().find(|attr| attr.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_identifiers_are_unique() {
        let mut seen = HashSet::new();
        for attr in PLATFORM_ATTRIBUTES.iter().chain(DEVICE_ATTRIBUTES) {
            assert!(seen.insert((attr.scope as u8, attr.id)), "duplicate id 0x{:04x}", attr.id);
        }
    }

    #[test]
    fn test_scope_matches_table() {
        assert!(PLATFORM_ATTRIBUTES.iter().all(|a| a.scope == AttributeScope::Platform));
        assert!(DEVICE_ATTRIBUTES.iter().all(|a| a.scope == AttributeScope::Device));
    }

    #[test]
    fn test_report_order_starts_with_identity() {
        assert_eq!(PLATFORM_ATTRIBUTES[0].label, "Name");
        assert_eq!(DEVICE_ATTRIBUTES[0].label, "Name");
        assert_eq!(DEVICE_ATTRIBUTES[1].label, "Type");
        assert_eq!(DEVICE_ATTRIBUTES.last().map(|a| a.label), Some("Extensions"));
    }

    #[test]
    fn test_lookup_by_label() {
        let attr = device_attribute("Global memory size").unwrap();
        assert_eq!(attr.id, CL_DEVICE_GLOBAL_MEM_SIZE);
        assert_eq!(attr.kind, DecoderKind::MemSize);
        assert!(device_attribute("No such attribute").is_none());
        assert_eq!(platform_attribute("Vendor").map(|a| a.id), Some(CL_PLATFORM_VENDOR));
    }
}

//! Bit-flag and closed-enum decoders
//!
//! Each flag attribute has a fixed, declaration-ordered label table. The
//! device-type word joins its matches into one " | "-separated line; the
//! other flag words emit one line per match. An all-zero word always yields
//! the kind's sentinel, never empty output.

use crate::catalog::{
    CL_DEVICE_TYPE_ACCELERATOR, CL_DEVICE_TYPE_CPU, CL_DEVICE_TYPE_DEFAULT, CL_DEVICE_TYPE_GPU,
    CL_EXEC_KERNEL, CL_EXEC_NATIVE_KERNEL, CL_FP_DENORM, CL_FP_FMA, CL_FP_INF_NAN,
    CL_FP_ROUND_TO_INF, CL_FP_ROUND_TO_NEAREST, CL_FP_ROUND_TO_ZERO, CL_FP_SOFT_FLOAT, CL_LOCAL,
    CL_NONE, CL_QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE, CL_QUEUE_PROFILING_ENABLE,
    CL_READ_ONLY_CACHE, CL_READ_WRITE_CACHE,
};

const DEVICE_TYPE_FLAGS: &[(u64, &str)] = &[
    (CL_DEVICE_TYPE_CPU, "CPU"),
    (CL_DEVICE_TYPE_GPU, "GPU"),
    (CL_DEVICE_TYPE_ACCELERATOR, "Accelerator"),
    (CL_DEVICE_TYPE_DEFAULT, "Default"),
];

const FP_CONFIG_FLAGS: &[(u64, &str)] = &[
    (CL_FP_DENORM, "Denorms"),
    (CL_FP_INF_NAN, "Inf and NaNs"),
    (CL_FP_ROUND_TO_NEAREST, "Round to nearest even rounding mode"),
    (CL_FP_ROUND_TO_ZERO, "Round to zero rounding mode"),
    (CL_FP_ROUND_TO_INF, "Round to +ve and -ve infinity rounding modes"),
    (CL_FP_FMA, "IEEE754-2008 fused multiply-add"),
    (CL_FP_SOFT_FLOAT, "Basic floating-point operations implemented in software"),
];

const QUEUE_PROPERTY_FLAGS: &[(u64, &str)] = &[
    (CL_QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE, "Out of order execution"),
    (CL_QUEUE_PROFILING_ENABLE, "Profiling"),
];

const EXEC_CAPABILITY_FLAGS: &[(u64, &str)] = &[
    (CL_EXEC_KERNEL, "OpenCL kernels"),
    (CL_EXEC_NATIVE_KERNEL, "Native kernels"),
];

fn matched(word: u64, table: &[(u64, &str)]) -> Vec<String> {
    table
        .iter()
        .filter(|(flag, _)| word & flag != 0)
        .map(|(_, label)| label.to_string())
        .collect()
}

fn matched_or_sentinel(word: u64, table: &[(u64, &str)]) -> Vec<String> {
    let labels = matched(word, table);
    if labels.is_empty() {
        vec!["Not supported".to_string()]
    } else {
        labels
    }
}

/// Device-type flags joined into a single " | "-separated line
pub fn device_type(word: u64) -> String {
    let labels = matched(word, DEVICE_TYPE_FLAGS);
    if labels.is_empty() {
        "Unknown".to_string()
    } else {
        labels.join(" | ")
    }
}

/// Floating-point capability flags, one label per matched bit
pub fn fp_config(word: u64) -> Vec<String> {
    matched_or_sentinel(word, FP_CONFIG_FLAGS)
}

/// Command-queue property flags, one label per matched bit
pub fn queue_properties(word: u64) -> Vec<String> {
    matched_or_sentinel(word, QUEUE_PROPERTY_FLAGS)
}

/// Execution capability flags, one label per matched bit
pub fn exec_capabilities(word: u64) -> Vec<String> {
    matched_or_sentinel(word, EXEC_CAPABILITY_FLAGS)
}

/// Binary local-memory classification; no default case exists
pub fn local_mem_type(value: u32) -> &'static str {
    if value == CL_LOCAL {
        "Local"
    } else {
        "Global"
    }
}

/// Global-memory cache classification with an explicit Unknown default
pub fn cache_type(value: u32) -> &'static str {
    match value {
        CL_NONE => "None",
        CL_READ_ONLY_CACHE => "Read only",
        CL_READ_WRITE_CACHE => "Read write",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_device_type_joins_in_declaration_order() {
        assert_eq!(device_type(CL_DEVICE_TYPE_GPU), "GPU");
        assert_eq!(device_type(CL_DEVICE_TYPE_CPU | CL_DEVICE_TYPE_DEFAULT), "CPU | Default");
        assert_eq!(
            device_type(CL_DEVICE_TYPE_DEFAULT | CL_DEVICE_TYPE_GPU | CL_DEVICE_TYPE_CPU),
            "CPU | GPU | Default"
        );
    }

    #[test]
    fn test_device_type_sentinel() {
        assert_eq!(device_type(0), "Unknown");
        assert_eq!(device_type(1 << 60), "Unknown");
    }

    #[test]
    fn test_fp_config_one_line_per_flag() {
        let lines = fp_config(CL_FP_INF_NAN | CL_FP_FMA);
        assert_eq!(lines, vec!["Inf and NaNs", "IEEE754-2008 fused multiply-add"]);
    }

    #[rstest]
    #[case(fp_config(0))]
    #[case(queue_properties(0))]
    #[case(exec_capabilities(0))]
    fn test_flag_sentinels_never_empty(#[case] lines: Vec<String>) {
        assert_eq!(lines, vec!["Not supported"]);
    }

    #[test]
    fn test_queue_and_exec_labels() {
        assert_eq!(
            queue_properties(CL_QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE | CL_QUEUE_PROFILING_ENABLE),
            vec!["Out of order execution", "Profiling"]
        );
        assert_eq!(exec_capabilities(CL_EXEC_NATIVE_KERNEL), vec!["Native kernels"]);
    }

    #[test]
    fn test_local_mem_is_strict_binary() {
        assert_eq!(local_mem_type(CL_LOCAL), "Local");
        assert_eq!(local_mem_type(2), "Global");
        assert_eq!(local_mem_type(99), "Global");
    }

    #[test]
    fn test_cache_type_has_unknown_default() {
        assert_eq!(cache_type(0), "None");
        assert_eq!(cache_type(1), "Read only");
        assert_eq!(cache_type(2), "Read write");
        assert_eq!(cache_type(3), "Unknown");
    }
}

//! Scalar and sequence decoders
//!
//! Pure formatting of single-valued buffers: text, Yes/No labels, exact
//! decimal integers, scaled byte sizes, dimension tuples and delimited
//! token lists.

use crate::fetch::ByteBuffer;

/// Text value emitted as-is
pub fn text(buffer: &ByteBuffer) -> String {
    buffer.c_string()
}

/// Nonzero renders "Yes", zero renders "No"
pub fn boolean(value: u32) -> &'static str {
    if value != 0 {
        "Yes"
    } else {
        "No"
    }
}

/// Byte count decomposed into TB/GB/MB/kB/B components
///
/// Successive 10-bit groups, top component unmasked; only nonzero components
/// appear, in descending magnitude order. An all-zero count is "0 B".
pub fn mem_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let groups = [(40u32, "TB"), (30, "GB"), (20, "MB"), (10, "kB"), (0, "B")];
    let mut parts = Vec::new();
    for (shift, unit) in groups {
        let component = if shift == 40 { bytes >> shift } else { (bytes >> shift) & 1023 };
        if component != 0 {
            parts.push(format!("{} {}", component, unit));
        }
    }
    parts.join(" ")
}

/// Machine-word array rendered as "(v0, v1, ...)"
pub fn dimensions(values: &[usize]) -> String {
    let inner: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("({})", inner.join(", "))
}

/// Split a delimited list buffer into its tokens, in order
///
/// Consecutive delimiters produce no empty tokens. An empty list yields a
/// single empty token so the attribute still gets a keyed report line.
pub fn tokens(buffer: &ByteBuffer) -> Vec<String> {
    let text = buffer.c_string();
    let items: Vec<String> =
        text.split(' ').filter(|item| !item.is_empty()).map(str::to_string).collect();
    if items.is_empty() {
        vec![String::new()]
    } else {
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0 B")]
    #[case(1023, "1023 B")]
    #[case(1024, "1 kB")]
    #[case((1 << 40) + 5, "1 TB 5 B")]
    #[case(1 << 30, "1 GB")]
    #[case((3 << 20) + (512 << 10), "3 MB 512 kB")]
    #[case(u64::MAX >> 4, "1048575 TB 1023 GB 1023 MB 1023 kB 1023 B")]
    fn test_mem_size(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(mem_size(bytes), expected);
    }

    #[rstest]
    #[case(&[], "()")]
    #[case(&[3], "(3)")]
    #[case(&[3, 4, 5], "(3, 4, 5)")]
    #[case(&[1024, 1024, 64], "(1024, 1024, 64)")]
    fn test_dimensions(#[case] values: &[usize], #[case] expected: &str) {
        assert_eq!(dimensions(values), expected);
    }

    #[test]
    fn test_boolean_labels() {
        assert_eq!(boolean(0), "No");
        assert_eq!(boolean(1), "Yes");
        assert_eq!(boolean(0xFFFF_FFFF), "Yes");
    }

    #[test]
    fn test_text_stops_at_terminator() {
        let buffer = ByteBuffer::new(b"FULL_PROFILE\0garbage".to_vec());
        assert_eq!(text(&buffer), "FULL_PROFILE");
    }

    #[test]
    fn test_tokens_preserve_order_and_skip_empties() {
        let buffer = ByteBuffer::new(b"cl_khr_fp64  cl_khr_icd\0".to_vec());
        assert_eq!(tokens(&buffer), vec!["cl_khr_fp64", "cl_khr_icd"]);
    }

    #[test]
    fn test_empty_token_list_keeps_one_line() {
        let buffer = ByteBuffer::new(b"\0".to_vec());
        assert_eq!(tokens(&buffer), vec![String::new()]);
    }
}

//! Hierarchical report printer
//!
//! Renders indented, column-aligned key/value rows and bold section headers.
//! Formatting constants live in an immutable [`ReportConfig`] passed to the
//! printer, not in global state.

use std::io::{self, Write};

/// Formatting constants for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Spaces per indent level
    pub indent_unit: usize,
    /// Column (from line start) where the value text begins
    pub column_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { indent_unit: 2, column_width: 40 }
    }
}

/// Non-negative section nesting depth
///
/// Incremented descending into a nested section and decremented symmetrically
/// on the way out; a full report walk ends back at zero. Underflow is a
/// programming error in the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indent(usize);

impl Indent {
    /// Current depth
    pub fn level(self) -> usize {
        self.0
    }

    fn descend(&mut self) {
        self.0 += 1;
    }

    fn ascend(&mut self) {
        debug_assert!(self.0 > 0, "indent underflow");
        self.0 = self.0.saturating_sub(1);
    }
}

/// Writer for aligned key/value rows and section headers
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
    config: ReportConfig,
    depth: Indent,
}

impl<W: Write> Printer<W> {
    /// Printer over `out` with the given formatting constants
    pub fn new(out: W, config: ReportConfig) -> Self {
        Self { out, config, depth: Indent::default() }
    }

    /// Current nesting depth
    pub fn depth(&self) -> Indent {
        self.depth
    }

    /// Enter a nested section
    pub fn descend(&mut self) {
        self.depth.descend();
    }

    /// Leave a nested section
    pub fn ascend(&mut self) {
        self.depth.ascend();
    }

    /// One key/value row; `None` keys produce a blank-padded continuation row
    pub fn line(&mut self, key: Option<&str>, value: &str) -> io::Result<()> {
        let lead = self.depth.level() * self.config.indent_unit;
        let mut column = lead;
        write!(self.out, "{:lead$}", "")?;
        if let Some(key) = key {
            write!(self.out, "{}:", key)?;
            column += key.len() + 1;
        }
        let pad = self.config.column_width.saturating_sub(column);
        writeln!(self.out, "{:pad$} {}", "", value)
    }

    /// Bold section title followed by a blank line
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        let lead = self.depth.level() * self.config.indent_unit;
        writeln!(self.out, "{:lead$}\x1b[1m{}:\x1b[0m\n", "", title)
    }

    /// Blank separator line
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(config: ReportConfig, body: F) -> String
    where
        F: FnOnce(&mut Printer<&mut Vec<u8>>),
    {
        let mut out = Vec::new();
        let mut printer = Printer::new(&mut out, config);
        body(&mut printer);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_value_column_is_fixed() {
        let text = render(ReportConfig::default(), |p| {
            p.line(Some("Name"), "Apple").unwrap();
            p.descend();
            p.line(Some("Max compute units"), "8").unwrap();
        });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("{:40} Apple", "Name:"));
        assert_eq!(lines[1], format!("  {:38} 8", "Max compute units:"));
        assert_eq!(lines[0].find("Apple"), Some(41));
        assert_eq!(lines[1].find('8'), Some(41));
    }

    #[test]
    fn test_continuation_row_has_blank_key_column() {
        let text = render(ReportConfig::default(), |p| {
            p.line(Some("Extensions"), "cl_khr_fp64").unwrap();
            p.line(None, "cl_khr_icd").unwrap();
        });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], format!("{:40} cl_khr_icd", ""));
        assert_eq!(lines[0].find("cl_khr_fp64"), lines[1].find("cl_khr_icd"));
    }

    #[test]
    fn test_header_is_bold_with_trailing_blank() {
        let text = render(ReportConfig::default(), |p| {
            p.descend();
            p.header("Platform #0").unwrap();
        });
        assert_eq!(text, "  \x1b[1mPlatform #0:\x1b[0m\n\n");
    }

    #[test]
    fn test_indent_scales_with_unit() {
        let config = ReportConfig { indent_unit: 4, column_width: 20 };
        let text = render(config, |p| {
            p.descend();
            p.descend();
            p.line(Some("Key"), "value").unwrap();
        });
        assert_eq!(text, format!("        {:12} value\n", "Key:"));
    }

    #[test]
    fn test_depth_returns_to_zero() {
        let mut printer = Printer::new(Vec::new(), ReportConfig::default());
        printer.descend();
        printer.descend();
        printer.ascend();
        printer.ascend();
        assert_eq!(printer.depth().level(), 0);
    }

    #[test]
    fn test_long_key_still_gets_value_separator() {
        let config = ReportConfig { indent_unit: 2, column_width: 8 };
        let text = render(config, |p| {
            p.line(Some("A very long key"), "v").unwrap();
        });
        assert_eq!(text, "A very long key: v\n");
    }
}

//! High-level report generation
//!
//! The orchestrator walks platforms, then each platform's devices, and for
//! each entity runs the fixed attribute table through fetch, decode and
//! print. The walk is a static double loop; output order is fully
//! determined by (platform index, device index, table order).

use std::io::{self, Write};

use log::debug;

use crate::backend::CapabilityQuery;
use crate::catalog::{DEVICE_ATTRIBUTES, PLATFORM_ATTRIBUTES};
use crate::decode::decode;
use crate::error::{ReportError, ReportResult};
use crate::fetch::{fetch_device, fetch_platform};
use crate::printer::{Printer, ReportConfig};

fn plural(count: u32) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

/// Write the full capability report to `out`
///
/// A failing query aborts the walk immediately; everything already written
/// to `out` stays there. The section depth is restored to zero on the way
/// out of each entity, so a completed walk ends where it started.
pub fn write_report<B, W>(backend: &B, out: W, config: ReportConfig) -> ReportResult<()>
where
    B: CapabilityQuery,
    W: Write,
{
    let mut printer = Printer::new(out, config);

    let platform_count = backend.platform_count().map_err(ReportError::PlatformCount)?;
    debug!("capability interface reports {} platform(s)", platform_count);
    printer.header(&format!(
        "{} OpenCL platform{} found",
        platform_count,
        plural(platform_count)
    ))?;
    printer.descend();

    let platforms = backend.platforms(platform_count).map_err(ReportError::PlatformList)?;
    for (index, &platform) in platforms.iter().enumerate() {
        printer.header(&format!("Platform #{}", index))?;
        printer.descend();

        for attr in PLATFORM_ATTRIBUTES {
            let buffer = fetch_platform(backend, platform, attr)?;
            for line in decode(attr, &buffer) {
                printer.line(line.key, &line.text)?;
            }
        }
        printer.blank()?;

        let device_count = backend.device_count(platform).map_err(ReportError::DeviceCount)?;
        debug!("platform #{} reports {} device(s)", index, device_count);
        printer.header(&format!(
            "{} OpenCL device{} found",
            device_count,
            plural(device_count)
        ))?;
        printer.descend();

        let devices = backend.devices(platform, device_count).map_err(ReportError::DeviceList)?;
        for (device_index, &device) in devices.iter().enumerate() {
            printer.header(&format!("Device #{}", device_index))?;
            printer.descend();

            for attr in DEVICE_ATTRIBUTES {
                let buffer = fetch_device(backend, device, attr)?;
                for line in decode(attr, &buffer) {
                    printer.line(line.key, &line.text)?;
                }
            }
            printer.blank()?;

            printer.ascend();
        }

        printer.ascend();
        printer.ascend();
    }

    printer.ascend();
    debug_assert_eq!(printer.depth().level(), 0);
    Ok(())
}

/// Write the report to standard output with the default formatting
pub fn print_report<B: CapabilityQuery>(backend: &B) -> ReportResult<()> {
    let stdout = io::stdout();
    write_report(backend, stdout.lock(), ReportConfig::default())
}

//! Command-line interface for oclscope

use clap::Parser;

/// The tool recognizes no flags of its own; clap contributes --help and
/// --version. The report always goes to stdout in the default layout.
#[derive(Parser)]
#[command(name = "oclscope")]
#[command(version = oclscope::VERSION)]
#[command(about = "OpenCL platform and device capability report", long_about = None)]
struct Cli {}

fn main() {
    env_logger::init();
    let _cli = Cli::parse();

    #[cfg(feature = "opencl")]
    {
        let backend = oclscope::backend::opencl::OpenClBackend::new();
        if let Err(e) = oclscope::print_report(&backend) {
            eprintln!("Fatal: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "opencl"))]
    {
        eprintln!("Fatal: built without OpenCL support (rebuild with --features opencl)");
        std::process::exit(1);
    }
}

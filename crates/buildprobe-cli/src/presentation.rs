//! Terminal rendering of probe results and build plans.

use std::path::Path;

use buildprobe_core::{
    BuildPlan, CudaStatus, PackagesStatus, RustStatus, StatusRecord, VendorDetection,
};

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn flag(value: bool) -> String {
    if value {
        format!("{GREEN}✓ yes{RESET}")
    } else {
        format!("{RED}✗ no{RESET}")
    }
}

fn header(title: &str, path: &Path) {
    println!("\n{BOLD}{title}{RESET} ({})", path.display());
    println!("{}", "-".repeat(40));
}

pub fn print_cuda_status(status: &CudaStatus, path: &Path) {
    header("CUDA", path);
    println!("  {:<22} {}", "build vendor", status.build_gpu_vendor);
    println!("  {:<22} {}", "toolkit installed", flag(status.already_installed));
    if let Some(version) = &status.toolkit_version {
        println!("  {:<22} {version}", "toolkit version");
    }
    println!("  {:<22} {}", "capable", flag(status.capable));
    println!("  {:<22} {}", "runtime available", flag(status.runtime_available));
    if let Some(name) = &status.gpu_name {
        println!("  {:<22} {name}", "gpu");
    }
}

pub fn print_rust_status(status: &RustStatus, path: &Path) {
    header("Rust", path);
    println!("  {:<22} {}", "installed", flag(status.already_installed));
    if let Some(version) = &status.rustc_version {
        println!("  {:<22} {version}", "rustc");
    }
    if let Some(version) = &status.cargo_version {
        println!("  {:<22} {version}", "cargo");
    }
    for component in &status.components {
        println!("  {:<22} {component}", "component");
    }
}

pub fn print_packages_status(status: &PackagesStatus, path: &Path) {
    header("Packages", path);
    println!("  {:<22} {}", "gpu vendor", status.gpu_vendor);
    if status.need_install() {
        println!(
            "  {YELLOW}! {} missing:{RESET} {}",
            status.missing.len(),
            status.missing.join(" ")
        );
    } else {
        println!("  {GREEN}✓ all required packages installed{RESET}");
    }
}

pub fn print_vendor(detection: &VendorDetection) {
    match &detection.gpu_name {
        Some(name) => println!("{} ({name})", detection.vendor),
        None => println!("{}", detection.vendor),
    }
}

pub fn print_build_summary(plan: &BuildPlan, dry_run: bool) {
    if dry_run {
        println!("\n{YELLOW}Dry run, nothing was built.{RESET} Tags that would be created:");
    } else {
        println!("\n{GREEN}✓ Built image for GPU vendor '{}'{RESET}", plan.vendor_arg);
        println!("Tags:");
    }
    for tag in &plan.tags {
        println!("  {tag}");
    }
    println!("\nRun it with:\n  {}", plan.run_command());
}

pub fn print_record(record: &StatusRecord) {
    let width = record.keys().iter().map(|k| k.len()).max().unwrap_or(0);
    for (key, value) in record.iter() {
        println!("{BOLD}{key:<width$}{RESET}  {value}");
    }
}

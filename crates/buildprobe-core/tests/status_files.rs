//! Integration tests for status file persistence.
//!
//! Exercises the public write/read API the probers and downstream shell
//! consumers rely on.

use std::fs;

use buildprobe_core::status::{cuda_keys, packages_keys};
use buildprobe_core::{
    CudaStatus, PackagesStatus, RustStatus, StatusFormat, StatusReport, read_record, write_status,
};
use tempfile::TempDir;

#[test]
fn test_second_run_drops_stale_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("packages_status");

    let first = PackagesStatus {
        missing: vec!["clang".to_string(), "cmake".to_string()],
        gpu_vendor: "nvidia".to_string(),
    };
    write_status(&path, &first, StatusFormat::Env).unwrap();
    assert!(read_record(&path).unwrap().contains(packages_keys::MISSING_PACKAGES));

    let second = PackagesStatus {
        missing: Vec::new(),
        gpu_vendor: "none".to_string(),
    };
    write_status(&path, &second, StatusFormat::Env).unwrap();

    let record = read_record(&path).unwrap();
    assert!(!record.contains(packages_keys::MISSING_PACKAGES));
    assert_eq!(record.get(packages_keys::NEED_INSTALL), Some("0"));
    assert_eq!(record.get(packages_keys::GPU_VENDOR), Some("none"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "PACKAGES_NEED_INSTALL=0\nGPU_VENDOR=none\n"
    );
}

#[test]
fn test_overwrite_replaces_unrelated_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cuda_status");
    fs::write(&path, "LEFTOVER=1\nCUDA_CAPABLE=1\n").unwrap();

    write_status(&path, &CudaStatus::disabled("cpu"), StatusFormat::Env).unwrap();

    let record = read_record(&path).unwrap();
    assert!(!record.contains("LEFTOVER"));
    assert_eq!(record.get(cuda_keys::CAPABLE), Some("0"));
    assert_eq!(record.get(cuda_keys::BUILD_GPU_VENDOR), Some("cpu"));
}

#[test]
fn test_rust_status_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rust_status");
    let status = RustStatus {
        already_installed: true,
        ..RustStatus::default()
    };

    write_status(&path, &status, StatusFormat::Env).unwrap();

    let parsed = RustStatus::from_record(&read_record(&path).unwrap()).unwrap();
    assert!(parsed.already_installed);
}

//! Rust toolchain presence.

use tracing::{debug, info};

use crate::ports::{Probe, observe};
use crate::status::RustStatus;

/// Declare the toolchain installed iff both `rustc` and `cargo` are found.
///
/// Components are only listed for an installed toolchain; a missing or
/// failing component tool leaves the list empty.
pub fn evaluate_rust(
    rustc: &dyn Probe,
    cargo: &dyn Probe,
    components: &dyn Probe,
    component_limit: usize,
) -> RustStatus {
    let rustc = observe(rustc);
    let cargo = observe(cargo);
    let already_installed = rustc.is_present() && cargo.is_present();

    let mut status = RustStatus {
        already_installed,
        rustc_version: rustc.detail().map(str::to_string),
        cargo_version: cargo.detail().map(str::to_string),
        components: Vec::new(),
    };

    if !already_installed {
        info!(
            rustc = rustc.is_present(),
            cargo = cargo.is_present(),
            "Rust toolchain not installed"
        );
        return status;
    }

    info!(
        rustc = status.rustc_version.as_deref().unwrap_or("unknown"),
        cargo = status.cargo_version.as_deref().unwrap_or("unknown"),
        "Rust toolchain installed"
    );

    match observe(components).detail() {
        Some(list) => {
            status.components = list
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .take(component_limit)
                .map(str::to_string)
                .collect();
            for component in &status.components {
                info!(component = %component, "Installed component");
            }
        }
        None => debug!("Component listing unavailable"),
    }

    status
}

//! Capability probe port.
//!
//! A probe is a single detection step: it looks for one tool, optionally
//! runs a query, and reports what it found. Probes never decide whether a
//! capability is *enabled*; that is the job of the policy functions.

#[cfg(test)]
use mockall::automock;

use super::command::ProbeError;

/// Outcome of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// The tool is not on the search path.
    Missing,
    /// The tool exists but the query did not confirm the capability.
    Unavailable { reason: String },
    /// The tool exists and the query succeeded.
    Available { detail: Option<String> },
}

impl Capability {
    /// Available with a human-readable detail (version, device name, ...).
    pub fn available(detail: impl Into<String>) -> Self {
        Self::Available {
            detail: Some(detail.into()),
        }
    }

    /// Unavailable with a reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// The query succeeded.
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// The tool was found, whether or not the query succeeded.
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Detail string reported by a successful query.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Available { detail } => detail.as_deref(),
            _ => None,
        }
    }
}

/// A single detection step backed by an external tool.
#[cfg_attr(test, automock)]
pub trait Probe: Send + Sync {
    /// Run the detection once.
    fn detect(&self) -> Result<Capability, ProbeError>;
}

/// Run a probe, folding invocation errors into [`Capability::Missing`].
///
/// Capability absence is never fatal; an error is logged and treated as
/// "not there".
pub fn observe(probe: &dyn Probe) -> Capability {
    match probe.detect() {
        Ok(capability) => capability,
        Err(e) => {
            tracing::warn!(error = %e, "Probe could not run, treating capability as absent");
            Capability::Missing
        }
    }
}

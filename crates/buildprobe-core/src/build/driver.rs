//! Build driver: validate the vendor, plan the build, run it.

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use super::plan::BuildPlan;
use crate::config::DEFAULT_IMAGE;
use crate::ports::{BuildError, ContainerBuilder};
use crate::vendor::{BuildVendor, VendorError};

/// Errors that stop the build driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The vendor is not supported; nothing was built.
    #[error(transparent)]
    Vendor(#[from] VendorError),

    /// The container build itself failed.
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Drives one container build through a [`ContainerBuilder`].
pub struct BuildDriver<'a> {
    builder: &'a dyn ContainerBuilder,
    image: String,
    dockerfile: PathBuf,
    context: PathBuf,
}

impl<'a> BuildDriver<'a> {
    /// Create a driver building the default image from `./Dockerfile`.
    pub fn new(builder: &'a dyn ContainerBuilder) -> Self {
        Self {
            builder,
            image: DEFAULT_IMAGE.to_string(),
            dockerfile: PathBuf::from("Dockerfile"),
            context: PathBuf::from("."),
        }
    }

    /// Set the image repository name.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the Dockerfile path.
    #[must_use]
    pub fn with_dockerfile(mut self, dockerfile: impl Into<PathBuf>) -> Self {
        self.dockerfile = dockerfile.into();
        self
    }

    /// Set the build context directory.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<PathBuf>) -> Self {
        self.context = context.into();
        self
    }

    /// Validate `vendor` and produce the build plan without building.
    pub fn plan(&self, vendor: &str) -> Result<BuildPlan, VendorError> {
        let vendor = BuildVendor::parse(vendor)?;
        Ok(BuildPlan::for_vendor(vendor, &self.image)
            .with_dockerfile(self.dockerfile.clone())
            .with_context(self.context.clone()))
    }

    /// Validate `vendor`, then build. An unsupported vendor never reaches
    /// the builder.
    pub fn run(&self, vendor: &str) -> Result<BuildPlan, DriverError> {
        let plan = self.plan(vendor)?;
        info!(vendor = %plan.vendor, tags = ?plan.tags, "Starting container build");
        self.builder.build(&plan)?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockContainerBuilder;

    #[test]
    fn test_unsupported_vendor_never_builds() {
        for vendor in ["amd", "intel", "NVIDIA", "", "gpu"] {
            let mut builder = MockContainerBuilder::new();
            builder.expect_build().times(0);

            let driver = BuildDriver::new(&builder);
            let err = driver.run(vendor).unwrap_err();
            assert!(matches!(err, DriverError::Vendor(_)), "vendor {vendor:?}");
        }
    }

    #[test]
    fn test_supported_vendor_builds_once() {
        let mut builder = MockContainerBuilder::new();
        builder
            .expect_build()
            .withf(|plan| plan.vendor == BuildVendor::Nvidia && plan.image == "kg")
            .times(1)
            .returning(|_| Ok(()));

        let plan = BuildDriver::new(&builder).with_image("kg").run("nvidia").unwrap();
        assert_eq!(plan.tags, vec!["kg:nvidia", "kg:gpu", "kg:cuda"]);
    }

    #[test]
    fn test_build_failure_is_reported() {
        let mut builder = MockContainerBuilder::new();
        builder
            .expect_build()
            .times(1)
            .returning(|_| Err(BuildError::Failed { code: Some(1) }));

        let err = BuildDriver::new(&builder).run("cpu").unwrap_err();
        assert_eq!(err, DriverError::Build(BuildError::Failed { code: Some(1) }));
    }

    #[test]
    fn test_plan_carries_paths() {
        let builder = MockContainerBuilder::new();
        let plan = BuildDriver::new(&builder)
            .with_dockerfile("ci/Dockerfile")
            .with_context("/repo")
            .plan("none")
            .unwrap();
        assert_eq!(plan.dockerfile, PathBuf::from("ci/Dockerfile"));
        assert_eq!(plan.context, PathBuf::from("/repo"));
    }
}

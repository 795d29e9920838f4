//! Vendor-specific container build plans.

use std::path::PathBuf;

use crate::vendor::BuildVendor;

/// Base image for GPU builds (CUDA development toolchain).
const CUDA_BASE_IMAGE: &str = "nvidia/cuda:12.2.0-devel-ubuntu22.04";

/// Base image for CPU-only builds.
const CPU_BASE_IMAGE: &str = "ubuntu:22.04";

/// Port the HTTP server listens on inside the image.
const SERVER_PORT: u16 = 8080;

/// Everything needed to invoke one container build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// Validated vendor the image is built for.
    pub vendor: BuildVendor,
    /// Vendor string as given by the user, passed through as a build arg.
    pub vendor_arg: String,
    /// Image repository name, without tag.
    pub image: String,
    /// Dockerfile path.
    pub dockerfile: PathBuf,
    /// Build context directory.
    pub context: PathBuf,
    /// `--build-arg` pairs, in order.
    pub build_args: Vec<(String, String)>,
    /// Fully-qualified image tags, in order.
    pub tags: Vec<String>,
}

impl BuildPlan {
    /// Plan a build of `image` for `vendor`.
    ///
    /// NVIDIA builds get the `nvidia`/`gpu`/`cuda` tags, everything else
    /// gets `cpu`/`none`/`latest`.
    pub fn for_vendor(vendor: BuildVendor, image: &str) -> Self {
        let vendor_arg = vendor.to_string();
        let (base_image, suffixes): (&str, [&str; 3]) = if vendor.is_gpu() {
            (CUDA_BASE_IMAGE, ["nvidia", "gpu", "cuda"])
        } else {
            (CPU_BASE_IMAGE, ["cpu", "none", "latest"])
        };

        let build_args = vec![
            ("GPU_VENDOR".to_string(), vendor_arg.clone()),
            ("BASE_IMAGE".to_string(), base_image.to_string()),
            (
                "CUDA_ENABLED".to_string(),
                if vendor.is_gpu() { "1" } else { "0" }.to_string(),
            ),
        ];

        let tags = suffixes
            .iter()
            .map(|suffix| format!("{image}:{suffix}"))
            .collect();

        Self {
            vendor,
            vendor_arg,
            image: image.to_string(),
            dockerfile: PathBuf::from("Dockerfile"),
            context: PathBuf::from("."),
            build_args,
            tags,
        }
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

    /// Arguments for `docker`, starting with `build`.
    pub fn docker_args(&self) -> Vec<String> {
        let mut args = vec![
            "build".to_string(),
            "-f".to_string(),
            self.dockerfile.to_string_lossy().into_owned(),
        ];
        for (key, value) in &self.build_args {
            args.push("--build-arg".to_string());
            args.push(format!("{key}={value}"));
        }
        for tag in &self.tags {
            args.push("-t".to_string());
            args.push(tag.clone());
        }
        args.push(self.context.to_string_lossy().into_owned());
        args
    }

    /// The primary tag (first in [`Self::tags`]).
    pub fn primary_tag(&self) -> &str {
        self.tags.first().map_or(self.image.as_str(), String::as_str)
    }

    /// A sample `docker run` command for the built image.
    pub fn run_command(&self) -> String {
        let gpus = if self.vendor.is_gpu() { " --gpus all" } else { "" };
        format!(
            "docker run --rm{gpus} -p {SERVER_PORT}:{SERVER_PORT} {}",
            self.primary_tag()
        )
    }
}

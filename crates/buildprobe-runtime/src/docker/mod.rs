//! `ContainerBuilder` implementations.

mod cli;

pub use cli::{DockerCli, DryRunBuilder, command_line};

//! CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use buildprobe_cli::error::exit_code_for;
use buildprobe_cli::{Cli, Commands, bootstrap, handlers, init_logging, load_dotenv};

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap();

    match command {
        Commands::DetectVendor => handlers::vendor::execute(&ctx),
        Commands::DetectCuda { probe } => handlers::detect::execute_cuda(&ctx, &probe),
        Commands::DetectRust { probe } => handlers::detect::execute_rust(&ctx, &probe),
        Commands::DetectPackages { probe } => handlers::detect::execute_packages(&ctx, &probe),
        Commands::DetectAll { probe } => handlers::detect::execute_all(&ctx, &probe),
        Commands::BuildDocker { build } => handlers::build::execute(&ctx, &build),
        Commands::Status { path } => handlers::status::execute(&path),
    }
}

fn main() -> ExitCode {
    // .env must be loaded before clap reads GPU_VENDOR
    let dotenv = load_dotenv();
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(u8::try_from(exit_code_for(&err)).unwrap_or(1))
        }
    }
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command-line front end of the generator.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use exposed_model_gen::{GenError, Generator, GeneratorConfig, NamingPolicy, render};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate repository and controller sources for #[exposed_model] structs"
)]
struct Args {
    /// Crate root file to scan
    #[arg(long, default_value = "src/lib.rs")]
    crate_root: PathBuf,

    /// Generated sources root
    #[arg(long, default_value = "generated")]
    out: PathBuf,

    /// How repository and controller names are derived
    #[arg(long, value_enum, default_value_t = NamingPolicy::SimpleName)]
    naming: NamingPolicy,

    /// Crate path generated code imports runtime types from
    #[arg(long, default_value = render::DEFAULT_RUNTIME_CRATE)]
    runtime_crate: String,

    /// Print units to stdout instead of writing them
    #[arg(long)]
    dry_run: bool
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = GeneratorConfig::new(args.crate_root, args.out)
        .with_naming(args.naming)
        .with_runtime_crate(args.runtime_crate)
        .with_dry_run(args.dry_run);

    match Generator::new(config).run() {
        Ok(report) => {
            for diagnostic in &report.diagnostics {
                eprintln!("{diagnostic}");
            }
            if args.dry_run {
                for unit in &report.units {
                    println!("// ---- {}", unit.relative_path().display());
                    println!("{}", unit.source);
                }
            } else {
                for path in &report.written {
                    println!("{}", path.display());
                }
            }
            ExitCode::SUCCESS
        }
        Err(GenError::Aborted { diagnostics }) => {
            for diagnostic in &diagnostics {
                eprintln!("{diagnostic}");
            }
            error!(count = diagnostics.len(), "generation aborted");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(error = %err, "generation failed");
            ExitCode::FAILURE
        }
    }
}

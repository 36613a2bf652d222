//! Revcheck CLI binary entry point.
//! Resolves configuration, runs the validator, writes and prints the report.

use clap::Parser;
use revcheck::cli::Cli;
use revcheck::validate::Validator;
use revcheck::{config, output, utils};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    let eff = config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.review.as_deref(),
        cli.files.as_deref(),
        cli.report.as_deref(),
        cli.output.as_deref(),
    );
    debug!("Effective config: {:?}", eff);

    let report = Validator::from_effective(&eff).validate();

    // The report file is written before anything is printed
    if let Err(e) = output::write_report(&report, &eff.report) {
        eprintln!("{} {:#}", utils::error_prefix(), e);
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            "Pass --report or set `report` in revcheck.toml to a writable location."
        );
        std::process::exit(2);
    }
    output::print_report(&report, &eff.output);
    if !report.valid {
        std::process::exit(1);
    }
}

use clap::Parser;
use image_manifest::cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level())
        .init();

    match image_manifest::generate_manifest(&cli.options()) {
        Ok(report) => {
            if !report.skipped.is_empty() {
                log::warn!(
                    "{} entry name(s) were skipped as not valid UTF-8",
                    report.skipped.len()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

mod bank;
mod cli;
mod config;
mod error;
mod report;
mod scoring;
mod session;
mod telemetry;
mod types;
mod wizard;

use crate::bank::QuestionBank;
use crate::error::ReadinessError;
use crate::session::storage::{load_responses_file, SessionStorage};
use crate::types::config::ReadinessConfig;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const PRECONDITION: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(
    requested: Option<cli::ReportFormat>,
    config: &ReadinessConfig,
) -> report::OutputFormat {
    match requested {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => config.report_format().unwrap_or(report::OutputFormat::Md),
    }
}

fn run() -> Result<i32, ReadinessError> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet)?;

    let root = cli.dir.as_path();
    if !root.is_dir() {
        return Err(ReadinessError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("directory does not exist: {}", root.display()),
        )));
    }
    let config = config::load_config(root)?;
    let storage = SessionStorage::new(root, &config);

    let load_bank = || QuestionBank::resolve(root, &config);
    let output = match cli.command {
        cli::Commands::Questions(cmd) => {
            report::render_bank(&load_bank()?, output_format(cmd.format, &config))?
        }
        cli::Commands::Start(cmd) => wizard::execute_start(&cmd, &storage, &load_bank()?)?,
        cli::Commands::Show => wizard::execute_show(&storage, &load_bank()?)?,
        cli::Commands::Answer(cmd) => wizard::execute_answer(&cmd, &storage, &load_bank()?)?,
        cli::Commands::Next => wizard::execute_next(&storage, &load_bank()?)?,
        cli::Commands::Back => wizard::execute_back(&storage, &load_bank()?)?,
        cli::Commands::Status => wizard::execute_status(&storage, &load_bank()?)?,
        cli::Commands::Results(cmd) => {
            let responses = match &cmd.responses {
                Some(path) => load_responses_file(path)?,
                None => storage.load_finalized()?,
            };
            let results = scoring::compute_results(&load_bank()?, &responses);
            report::render(&results, output_format(cmd.format, &config))?
        }
        cli::Commands::Reset => {
            if storage.reset()? {
                "assessment reset; run `readiness start` to retake it".to_string()
            } else {
                "reset: nothing to remove".to_string()
            }
        }
    };
    println!("{output}");
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_precondition() {
                exit_code::PRECONDITION
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}

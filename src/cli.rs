use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "readiness",
    version,
    about = "Change management career-readiness assessment CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Working directory holding readiness.toml and the saved session
    #[arg(long, global = true, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the question bank
    Questions(QuestionsCommand),
    /// Begin a new assessment
    Start(StartCommand),
    /// Show the current step
    Show,
    /// Answer the current question
    Answer(AnswerCommand),
    /// Continue to the next step; completes the assessment after the last question
    Next,
    /// Go back one step
    Back,
    /// Show assessment progress
    Status,
    /// Score the completed assessment
    Results(ResultsCommand),
    /// Discard the saved session and results so the assessment can be retaken
    Reset,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct StartCommand {
    /// Replace an assessment that is still in progress
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct AnswerCommand {
    /// Scale value 1-5, option number, or exact option text
    pub value: String,
    /// Answer this question instead of the current one
    #[arg(long)]
    pub question: Option<String>,
}

#[derive(Args)]
pub struct ResultsCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Score this response file instead of the saved assessment
    #[arg(long)]
    pub responses: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

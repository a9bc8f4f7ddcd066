use crate::commands::{
    run_batch, run_inspect, run_options, run_prompt, run_recommend, run_template, run_validate,
    BatchArgs, InspectArgs, PromptArgs, RecommendArgs, ValidateArgs,
};
use archwise::config::AppConfig;
use archwise::error::AppError;
use archwise::telemetry;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "archwise",
    about = "Recommend monolith, modular monolith, or microservices from a project questionnaire",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a questionnaire and print the architecture recommendation
    Recommend(RecommendArgs),
    /// Check a questionnaire against the wizard's per-step requirements
    Validate(ValidateArgs),
    /// Score several questionnaires and write a CSV summary
    Batch(BatchArgs),
    /// Parse an exported markdown report back into JSON
    Inspect(InspectArgs),
    /// Print the chat completion request sent to a remote recommendation service
    Prompt(PromptArgs),
    /// Print an empty questionnaire to fill in
    Template,
    /// List the options offered for each multi-select question
    Options,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(
        environment = ?config.environment,
        model = %config.remote.model,
        "configuration loaded"
    );

    match cli.command {
        Command::Recommend(args) => run_recommend(args, &config),
        Command::Validate(args) => run_validate(args),
        Command::Batch(args) => run_batch(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Prompt(args) => run_prompt(args, &config),
        Command::Template => run_template(),
        Command::Options => run_options(),
    }
}

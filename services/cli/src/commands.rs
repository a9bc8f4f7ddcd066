use crate::infra::{load_questionnaire, write_output};
use crate::render::{render_json, render_text, OutputFormat};
use archwise::config::AppConfig;
use archwise::engine::RecommendationEngine;
use archwise::error::AppError;
use archwise::questionnaire::{
    validate, validate_step, AvailabilityTarget, CicdMaturity, DeploymentFrequency,
    DeploymentPattern, ExperienceLevel, ExpectedScale, InfrastructureCategory, LatencyTarget,
    QuestionnaireRecord, WizardStep, COMMUNICATION_PATTERN_OPTIONS,
};
use archwise::remote::{
    recommend_with_fallback, ChatCompletionRequest, RecommendationSource,
    RecordedResponseSource,
};
use archwise::report::{parse_markdown, render_markdown, write_summary_csv, SummaryRow};
use chrono::Utc;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Questionnaire JSON as exported by the form wizard
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Output layout
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub(crate) format: OutputFormat,
    /// Write to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Saved remote chat completion body to try before the local engine
    #[arg(long)]
    pub(crate) remote_response: Option<PathBuf>,
    /// Score the questionnaire even if wizard steps are incomplete
    #[arg(long)]
    pub(crate) allow_incomplete: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Questionnaire JSON to check
    #[arg(long)]
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Questionnaire JSON files to score
    #[arg(required = true)]
    pub(crate) inputs: Vec<PathBuf>,
    /// CSV destination (defaults to stdout)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct InspectArgs {
    /// Markdown report produced by `recommend --format markdown`
    #[arg(long)]
    pub(crate) report: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct PromptArgs {
    /// Questionnaire JSON to embed in the prompt
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Override the configured remote model
    #[arg(long)]
    pub(crate) model: Option<String>,
}

pub(crate) fn run_recommend(args: RecommendArgs, config: &AppConfig) -> Result<(), AppError> {
    let RecommendArgs {
        input,
        format,
        output,
        remote_response,
        allow_incomplete,
    } = args;

    let record = load_questionnaire(&input)?;
    if !allow_incomplete {
        validate(&record)?;
    }

    let recorded = remote_response
        .or_else(|| config.remote.recorded_response.clone())
        .map(RecordedResponseSource::new);
    let source = recorded
        .as_ref()
        .map(|source| source as &dyn RecommendationSource);

    let sourced = recommend_with_fallback(source, &record);

    let rendered = match format {
        OutputFormat::Markdown => render_markdown(&sourced.recommendation),
        OutputFormat::Json => render_json(&sourced, Utc::now())?,
        OutputFormat::Text => render_text(&sourced),
    };
    write_output(output.as_deref(), &rendered)?;

    info!(
        input = %input.display(),
        origin = sourced.origin.label(),
        architecture = sourced.recommendation.architecture.as_str(),
        score = sourced.recommendation.score,
        "recommendation generated"
    );
    Ok(())
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let record = load_questionnaire(&args.input)?;

    for step in WizardStep::ordered() {
        match validate_step(&record, step) {
            Ok(()) => println!("[ok]      {}", step.label()),
            Err(err) => println!("[missing] {} ({})", step.label(), err.missing.join(", ")),
        }
    }

    validate(&record)?;
    println!("questionnaire is complete");
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let engine = RecommendationEngine::new();
    let mut rows = Vec::with_capacity(args.inputs.len());

    for path in &args.inputs {
        let record = load_questionnaire(path)?;
        let assessment = engine.generate(&record);
        rows.push(SummaryRow::new(
            path.display().to_string(),
            record.project_details.name.clone(),
            &assessment,
        ));
    }

    match args.output.as_deref() {
        Some(path) => write_summary_csv(std::fs::File::create(path)?, &rows)?,
        None => write_summary_csv(std::io::stdout().lock(), &rows)?,
    }

    info!(questionnaires = rows.len(), "batch summary written");
    Ok(())
}

pub(crate) fn run_inspect(args: InspectArgs) -> Result<(), AppError> {
    let contents = std::fs::read_to_string(&args.report)?;
    let recommendation = parse_markdown(&contents)?.into_recommendation();
    let mut json = serde_json::to_string_pretty(&recommendation)?;
    json.push('\n');
    write_output(None, &json)
}

pub(crate) fn run_prompt(args: PromptArgs, config: &AppConfig) -> Result<(), AppError> {
    let record = load_questionnaire(&args.input)?;
    let model = args.model.unwrap_or_else(|| config.remote.model.clone());

    let request = ChatCompletionRequest::for_questionnaire(model, &record)?;

    let mut json = serde_json::to_string_pretty(&request)?;
    json.push('\n');
    write_output(None, &json)
}

pub(crate) fn run_template() -> Result<(), AppError> {
    let mut json = serde_json::to_string_pretty(&QuestionnaireRecord::default())?;
    json.push('\n');
    write_output(None, &json)
}

pub(crate) fn run_options() -> Result<(), AppError> {
    let mut out = String::new();

    out.push_str("Infrastructure\n");
    for category in InfrastructureCategory::ordered() {
        out.push_str(&format!(
            "  {}: {}\n",
            category.label(),
            category.suggested_options().join(", ")
        ));
    }

    out.push_str("\nSystem complexity\n");
    out.push_str(&format!(
        "  Communication Patterns: {}\n",
        COMMUNICATION_PATTERN_OPTIONS.join(", ")
    ));
    out.push_str(&choice_line(
        "Deployment Pattern",
        DeploymentPattern::ordered(),
        DeploymentPattern::label,
    ));
    out.push_str(&choice_line(
        "Expected Latency",
        LatencyTarget::ordered(),
        LatencyTarget::label,
    ));
    out.push_str(&choice_line(
        "Availability Target",
        AvailabilityTarget::ordered(),
        AvailabilityTarget::label,
    ));

    out.push_str("\nProject and team\n");
    out.push_str(&choice_line(
        "Expected Scale",
        ExpectedScale::ordered(),
        ExpectedScale::label,
    ));
    out.push_str(&choice_line(
        "Experience Level",
        ExperienceLevel::ordered(),
        ExperienceLevel::label,
    ));
    out.push_str(&choice_line(
        "Deployment Frequency",
        DeploymentFrequency::ordered(),
        DeploymentFrequency::label,
    ));
    out.push_str(&choice_line(
        "CI/CD Maturity",
        CicdMaturity::ordered(),
        CicdMaturity::label,
    ));

    write_output(None, &out)
}

/// Formats enumerated answers as `value (Label)` so users see what to put
/// in the questionnaire JSON.
fn choice_line<T, const N: usize>(
    title: &str,
    variants: [T; N],
    label: fn(T) -> &'static str,
) -> String
where
    T: Serialize + Copy,
{
    let choices: Vec<String> = variants
        .into_iter()
        .map(|variant| {
            let value = serde_json::to_value(variant)
                .ok()
                .and_then(|value| value.as_str().map(str::to_string))
                .unwrap_or_default();
            format!("{value} ({})", label(variant))
        })
        .collect();
    format!("  {title}: {}\n", choices.join(", "))
}

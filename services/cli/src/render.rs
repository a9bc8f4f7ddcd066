use archwise::engine::{Recommendation, ScoreBreakdown};
use archwise::remote::{RecommendationOrigin, SourcedRecommendation};
use archwise::report::{single_line, ReportSection};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Exported report layout
    #[default]
    Markdown,
    /// Machine-readable envelope with origin and timestamp
    Json,
    /// Terminal summary including the score breakdown
    Text,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationEnvelope<'a> {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) origin: RecommendationOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) breakdown: Option<&'a ScoreBreakdown>,
    pub(crate) recommendation: &'a Recommendation,
}

pub(crate) fn render_json(
    sourced: &SourcedRecommendation,
    generated_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let envelope = RecommendationEnvelope {
        generated_at,
        origin: sourced.origin,
        breakdown: sourced.breakdown.as_ref(),
        recommendation: &sourced.recommendation,
    };
    let mut json = serde_json::to_string_pretty(&envelope)?;
    json.push('\n');
    Ok(json)
}

pub(crate) fn render_text(sourced: &SourcedRecommendation) -> String {
    let recommendation = &sourced.recommendation;
    let mut out = String::new();

    writeln!(
        out,
        "Recommended architecture: {} ({}% confidence, score {}/100)",
        recommendation.architecture.label(),
        recommendation.confidence,
        recommendation.score
    )
    .expect("write headline");
    writeln!(out, "Source: {}", sourced.origin.label()).expect("write origin");

    if let Some(breakdown) = &sourced.breakdown {
        writeln!(out, "\nScore breakdown").expect("write breakdown header");
        for (category, score) in breakdown.entries() {
            writeln!(
                out,
                "  {:<15} {:>2}/{}",
                category.label(),
                score,
                category.cap()
            )
            .expect("write breakdown row");
        }
    }

    for section in ReportSection::ordered() {
        let items = section.items(recommendation);
        if items.is_empty() {
            continue;
        }
        writeln!(out, "\n{}", section.header()).expect("write section header");
        for item in items {
            writeln!(out, "  - {}", single_line(item)).expect("write section item");
        }
    }

    out
}

use crate::engine::{Architecture, Recommendation};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Write as _;

const TITLE: &str = "# Architecture Decision Report";
const RECOMMENDATION_PREFIX: &str = "## Recommendation: ";
const CONFIDENCE_PREFIX: &str = "**Confidence:** ";
const SCORE_PREFIX: &str = "**Score:** ";
const BULLET: &str = "- ";

/// List sections of the exported report, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSection {
    Reasoning,
    Benefits,
    Considerations,
    Risks,
    Recommendations,
    ToolSuggestions,
}

impl ReportSection {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Reasoning,
            Self::Benefits,
            Self::Considerations,
            Self::Risks,
            Self::Recommendations,
            Self::ToolSuggestions,
        ]
    }

    pub const fn header(self) -> &'static str {
        match self {
            Self::Reasoning => "Reasoning",
            Self::Benefits => "Benefits",
            Self::Considerations => "Considerations",
            Self::Risks => "Risks",
            Self::Recommendations => "Recommendations",
            Self::ToolSuggestions => "Tool Suggestions",
        }
    }

    pub fn items(self, recommendation: &Recommendation) -> &[String] {
        match self {
            Self::Reasoning => &recommendation.reasoning,
            Self::Benefits => &recommendation.pros,
            Self::Considerations => &recommendation.cons,
            Self::Risks => &recommendation.risks,
            Self::Recommendations => &recommendation.recommendations,
            Self::ToolSuggestions => &recommendation.tool_suggestions,
        }
    }

    fn from_header(header: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|section| section.header() == header)
    }
}

/// Renders the flat markdown report handed to users on export.
///
/// Sections always appear in [`ReportSection::ordered`] order; a section with
/// no items keeps its header with nothing beneath it. Line breaks inside an
/// item are collapsed with [`single_line`] so each item stays one bullet.
pub fn render_markdown(recommendation: &Recommendation) -> String {
    let mut out = String::new();

    writeln!(out, "{TITLE}").expect("write title");
    writeln!(out).expect("write spacer");
    writeln!(
        out,
        "{RECOMMENDATION_PREFIX}{}",
        recommendation.architecture.as_str().to_uppercase()
    )
    .expect("write architecture");
    writeln!(out).expect("write spacer");
    writeln!(out, "{CONFIDENCE_PREFIX}{}%", recommendation.confidence).expect("write confidence");
    writeln!(out, "{SCORE_PREFIX}{}/100", recommendation.score).expect("write score");

    for section in ReportSection::ordered() {
        writeln!(out).expect("write spacer");
        writeln!(out, "## {}", section.header()).expect("write section header");
        for item in section.items(recommendation) {
            writeln!(out, "{BULLET}{}", single_line(item)).expect("write bullet");
        }
    }

    out
}

/// Joins the lines of a multi-line list item with single spaces.
///
/// Items without `\n` or `\r` are returned untouched.
pub fn single_line(item: &str) -> Cow<'_, str> {
    if !item.contains(['\n', '\r']) {
        return Cow::Borrowed(item);
    }

    let joined = item
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Cow::Owned(joined)
}

/// Header values and bullet lists recovered from an exported report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReport {
    pub architecture: Architecture,
    pub confidence: u8,
    pub score: u8,
    sections: HashMap<ReportSection, Vec<String>>,
}

impl ParsedReport {
    pub fn section(&self, section: ReportSection) -> &[String] {
        self.sections
            .get(&section)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Rebuilds a recommendation from the parsed sections.
    pub fn into_recommendation(mut self) -> Recommendation {
        let mut take = |section: ReportSection| self.sections.remove(&section).unwrap_or_default();
        Recommendation {
            reasoning: take(ReportSection::Reasoning),
            pros: take(ReportSection::Benefits),
            cons: take(ReportSection::Considerations),
            risks: take(ReportSection::Risks),
            recommendations: take(ReportSection::Recommendations),
            tool_suggestions: take(ReportSection::ToolSuggestions),
            architecture: self.architecture,
            score: self.score,
            confidence: self.confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportParseError {
    #[error("report is missing the '{0}' line")]
    MissingField(&'static str),
    #[error("unknown architecture '{0}' in report header")]
    UnknownArchitecture(String),
    #[error("invalid number '{value}' for {field}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("unknown report section '{0}'")]
    UnknownSection(String),
    #[error("bullet on line {0} appears outside a section")]
    OrphanBullet(usize),
}

pub fn parse_markdown(report: &str) -> Result<ParsedReport, ReportParseError> {
    let mut architecture = None;
    let mut confidence = None;
    let mut score = None;
    let mut sections: HashMap<ReportSection, Vec<String>> = HashMap::new();
    let mut current: Option<ReportSection> = None;

    for (index, line) in report.lines().enumerate() {
        if let Some(value) = line.strip_prefix(RECOMMENDATION_PREFIX) {
            let normalized = value.trim().to_ascii_lowercase();
            let parsed = Architecture::parse(&normalized)
                .ok_or_else(|| ReportParseError::UnknownArchitecture(value.trim().to_string()))?;
            architecture = Some(parsed);
            current = None;
        } else if let Some(value) = line.strip_prefix(CONFIDENCE_PREFIX) {
            confidence = Some(parse_number("confidence", value.trim().trim_end_matches('%'))?);
        } else if let Some(value) = line.strip_prefix(SCORE_PREFIX) {
            score = Some(parse_number("score", value.trim().trim_end_matches("/100"))?);
        } else if let Some(header) = line.strip_prefix("## ") {
            let section = ReportSection::from_header(header.trim())
                .ok_or_else(|| ReportParseError::UnknownSection(header.trim().to_string()))?;
            sections.entry(section).or_default();
            current = Some(section);
        } else if let Some(item) = line.strip_prefix(BULLET) {
            let section = current.ok_or(ReportParseError::OrphanBullet(index + 1))?;
            sections.entry(section).or_default().push(item.to_string());
        }
    }

    Ok(ParsedReport {
        architecture: architecture.ok_or(ReportParseError::MissingField("Recommendation"))?,
        confidence: confidence.ok_or(ReportParseError::MissingField("Confidence"))?,
        score: score.ok_or(ReportParseError::MissingField("Score"))?,
        sections,
    })
}

fn parse_number(field: &'static str, value: &str) -> Result<u8, ReportParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ReportParseError::InvalidNumber {
            field,
            value: value.trim().to_string(),
        })
}

use crate::engine::{Architecture, Assessment};
use serde::Serialize;
use std::io::Write;

/// One line of a batch summary, flattened for spreadsheet use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub source: String,
    pub project: String,
    pub architecture: Architecture,
    pub score: u8,
    pub confidence: u8,
    pub scale: u8,
    pub complexity: u8,
    pub team: u8,
    pub devops: u8,
    pub infrastructure: u8,
    pub risks: usize,
}

impl SummaryRow {
    pub fn new(
        source: impl Into<String>,
        project: impl Into<String>,
        assessment: &Assessment,
    ) -> Self {
        let recommendation = &assessment.recommendation;
        let breakdown = &assessment.breakdown;
        Self {
            source: source.into(),
            project: project.into(),
            architecture: recommendation.architecture,
            score: recommendation.score,
            confidence: recommendation.confidence,
            scale: breakdown.scale,
            complexity: breakdown.complexity,
            team: breakdown.team,
            devops: breakdown.devops,
            infrastructure: breakdown.infrastructure,
            risks: recommendation.risks.len(),
        }
    }
}

pub fn write_summary_csv<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

//! Per-step completeness checks performed by the questionnaire collector
//! before a record is handed to the engine. The engine itself never calls
//! these; an incomplete record simply scores in the lowest categories.

use super::catalog::{InfrastructureCategory, COMMUNICATION_PATTERN_OPTIONS};
use super::domain::{DeploymentPattern, ExperienceLevel, LatencyTarget, QuestionnaireRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wizard stages in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Project,
    TechStack,
    Infrastructure,
    Complexity,
    Team,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Project,
            Self::TechStack,
            Self::Infrastructure,
            Self::Complexity,
            Self::Team,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::TechStack => "Tech Stack",
            Self::Infrastructure => "Infrastructure",
            Self::Complexity => "Complexity",
            Self::Team => "Team",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single step that is missing required answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{step} step incomplete: missing {}", .missing.join(", "))]
pub struct StepValidationError {
    pub step: WizardStep,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("questionnaire incomplete: {}", describe_steps(.0))]
    IncompleteSteps(Vec<StepValidationError>),
}

impl QuestionnaireError {
    pub fn steps(&self) -> &[StepValidationError] {
        match self {
            QuestionnaireError::IncompleteSteps(steps) => steps,
        }
    }
}

fn describe_steps(steps: &[StepValidationError]) -> String {
    steps
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validate_step(
    record: &QuestionnaireRecord,
    step: WizardStep,
) -> Result<(), StepValidationError> {
    let mut missing = Vec::new();

    match step {
        WizardStep::Project => {
            if is_blank(&record.project_details.name) {
                missing.push("project name");
            }
            if is_blank(&record.project_details.description) {
                missing.push("project description");
            }
        }
        WizardStep::TechStack => {
            if is_blank(&record.tech_stack.language) {
                missing.push("language");
            }
            if is_blank(&record.tech_stack.framework) {
                missing.push("framework");
            }
        }
        WizardStep::Infrastructure => {
            if record.infrastructure.cloud_provider.is_empty() {
                missing.push("cloud provider");
            }
        }
        WizardStep::Complexity => {
            if record.system_complexity.deployment_pattern == DeploymentPattern::Unset {
                missing.push("deployment pattern");
            }
            if record.system_complexity.expected_latency == LatencyTarget::Unset {
                missing.push("expected latency");
            }
        }
        WizardStep::Team => {
            if record.team_metrics.size == 0 {
                missing.push("team size");
            }
            if record.team_metrics.experience_level == ExperienceLevel::Unset {
                missing.push("experience level");
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(StepValidationError { step, missing })
    }
}

/// Checks every step and reports all of the failing ones.
pub fn validate(record: &QuestionnaireRecord) -> Result<(), QuestionnaireError> {
    let failures: Vec<_> = WizardStep::ordered()
        .into_iter()
        .filter_map(|step| validate_step(record, step).err())
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(QuestionnaireError::IncompleteSteps(failures))
    }
}

/// Selection outside the option catalog the wizard offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrecognizedOption {
    pub field: &'static str,
    pub value: String,
}

/// Selections that are accepted but absent from the catalogs.
pub fn unrecognized_options(record: &QuestionnaireRecord) -> Vec<UnrecognizedOption> {
    let mut unknown = Vec::new();

    for category in InfrastructureCategory::ordered() {
        for value in record.infrastructure.selections(category) {
            if !category.is_known_option(value) {
                unknown.push(UnrecognizedOption {
                    field: category.label(),
                    value: value.clone(),
                });
            }
        }
    }

    for pattern in &record.system_complexity.communication_patterns {
        if !COMMUNICATION_PATTERN_OPTIONS.contains(&pattern.as_str()) {
            unknown.push(UnrecognizedOption {
                field: "Communication Patterns",
                value: pattern.clone(),
            });
        }
    }

    unknown
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

mod catalog;
mod domain;
pub mod validation;

pub use catalog::{InfrastructureCategory, COMMUNICATION_PATTERN_OPTIONS};
pub use domain::{
    AvailabilityTarget, CicdMaturity, DeploymentFrequency, DeploymentPattern, ExperienceLevel,
    ExpectedScale, Infrastructure, LatencyTarget, ProjectDetails, QuestionnaireRecord,
    SystemComplexity, TeamMetrics, TechStack,
};
pub use validation::{
    unrecognized_options, validate, validate_step, QuestionnaireError, StepValidationError,
    UnrecognizedOption, WizardStep,
};

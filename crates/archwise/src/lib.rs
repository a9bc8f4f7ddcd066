pub mod config;
pub mod engine;
pub mod error;
pub mod questionnaire;
pub mod remote;
pub mod report;
pub mod telemetry;

pub use engine::{generate_recommendation, Architecture, Recommendation, RecommendationEngine};
pub use questionnaire::QuestionnaireRecord;

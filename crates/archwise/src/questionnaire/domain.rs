use super::catalog::InfrastructureCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Complete answer set gathered by the five wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireRecord {
    pub project_details: ProjectDetails,
    pub tech_stack: TechStack,
    pub infrastructure: Infrastructure,
    pub system_complexity: SystemComplexity,
    pub team_metrics: TeamMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub name: String,
    pub description: String,
    pub goals: Vec<String>,
    pub consumers: Vec<String>,
    pub producers: Vec<String>,
    pub expected_scale: ExpectedScale,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    pub language: String,
    pub framework: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infrastructure {
    pub cloud_provider: BTreeSet<String>,
    pub cicd: BTreeSet<String>,
    pub databases: BTreeSet<String>,
    pub messaging: BTreeSet<String>,
    pub monitoring: BTreeSet<String>,
    pub caching: BTreeSet<String>,
}

impl Infrastructure {
    pub fn selections(&self, category: InfrastructureCategory) -> &BTreeSet<String> {
        match category {
            InfrastructureCategory::CloudProvider => &self.cloud_provider,
            InfrastructureCategory::Cicd => &self.cicd,
            InfrastructureCategory::Databases => &self.databases,
            InfrastructureCategory::Messaging => &self.messaging,
            InfrastructureCategory::Monitoring => &self.monitoring,
            InfrastructureCategory::Caching => &self.caching,
        }
    }

    pub fn selections_mut(&mut self, category: InfrastructureCategory) -> &mut BTreeSet<String> {
        match category {
            InfrastructureCategory::CloudProvider => &mut self.cloud_provider,
            InfrastructureCategory::Cicd => &mut self.cicd,
            InfrastructureCategory::Databases => &mut self.databases,
            InfrastructureCategory::Messaging => &mut self.messaging,
            InfrastructureCategory::Monitoring => &mut self.monitoring,
            InfrastructureCategory::Caching => &mut self.caching,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemComplexity {
    pub communication_patterns: BTreeSet<String>,
    pub deployment_pattern: DeploymentPattern,
    pub expected_latency: LatencyTarget,
    pub availability_target: AvailabilityTarget,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMetrics {
    /// Number of developers; zero means the question was skipped.
    pub size: u32,
    pub experience_level: ExperienceLevel,
    pub deployment_frequency: DeploymentFrequency,
    pub cicd_maturity: CicdMaturity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpectedScale {
    #[default]
    #[serde(rename = "")]
    Unset,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl ExpectedScale {
    pub const fn ordered() -> [Self; 4] {
        [Self::Small, Self::Medium, Self::Large, Self::Enterprise]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "Unspecified",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Enterprise => "Enterprise",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentPattern {
    #[default]
    #[serde(rename = "")]
    Unset,
    ActiveActive,
    ActivePassive,
    BlueGreen,
    Canary,
}

impl DeploymentPattern {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::ActiveActive,
            Self::ActivePassive,
            Self::BlueGreen,
            Self::Canary,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "Unspecified",
            Self::ActiveActive => "Active-Active",
            Self::ActivePassive => "Active-Passive",
            Self::BlueGreen => "Blue-Green",
            Self::Canary => "Canary",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LatencyTarget {
    #[default]
    #[serde(rename = "")]
    Unset,
    Low,
    Medium,
    High,
}

impl LatencyTarget {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "Unspecified",
            Self::Low => "Low (< 100ms)",
            Self::Medium => "Medium (100ms - 1s)",
            Self::High => "High (> 1s acceptable)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvailabilityTarget {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "99.9")]
    ThreeNines,
    #[serde(rename = "99.95")]
    ThreeNinesFive,
    #[serde(rename = "99.99")]
    FourNines,
    #[serde(rename = "99.999")]
    FiveNines,
}

impl AvailabilityTarget {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::ThreeNines,
            Self::ThreeNinesFive,
            Self::FourNines,
            Self::FiveNines,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "Unspecified",
            Self::ThreeNines => "99.9%",
            Self::ThreeNinesFive => "99.95%",
            Self::FourNines => "99.99%",
            Self::FiveNines => "99.999%",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    #[default]
    #[serde(rename = "")]
    Unset,
    Junior,
    Mid,
    Senior,
    Mixed,
}

impl ExperienceLevel {
    pub const fn ordered() -> [Self; 4] {
        [Self::Junior, Self::Mid, Self::Senior, Self::Mixed]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "Unspecified",
            Self::Junior => "Junior",
            Self::Mid => "Mid-level",
            Self::Senior => "Senior",
            Self::Mixed => "Mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentFrequency {
    #[default]
    #[serde(rename = "")]
    Unset,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl DeploymentFrequency {
    pub const fn ordered() -> [Self; 4] {
        [Self::Daily, Self::Weekly, Self::Monthly, Self::Quarterly]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "Unspecified",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CicdMaturity {
    #[default]
    #[serde(rename = "")]
    Unset,
    None,
    Basic,
    Intermediate,
    Advanced,
}

impl CicdMaturity {
    pub const fn ordered() -> [Self; 4] {
        [Self::None, Self::Basic, Self::Intermediate, Self::Advanced]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "Unspecified",
            Self::None => "No CI/CD",
            Self::Basic => "Basic",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

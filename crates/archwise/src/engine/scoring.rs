use crate::questionnaire::{
    AvailabilityTarget, CicdMaturity, DeploymentFrequency, DeploymentPattern, ExperienceLevel,
    ExpectedScale, InfrastructureCategory, LatencyTarget, QuestionnaireRecord,
};
use serde::{Deserialize, Serialize};

/// Weighted categories contributing to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Scale,
    Complexity,
    Team,
    Devops,
    Infrastructure,
}

impl ScoreCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Scale,
            Self::Complexity,
            Self::Team,
            Self::Devops,
            Self::Infrastructure,
        ]
    }

    pub const fn cap(self) -> u8 {
        match self {
            Self::Scale => 20,
            Self::Complexity => 25,
            Self::Team => 20,
            Self::Devops => 15,
            Self::Infrastructure => 20,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Scale => "Scale",
            Self::Complexity => "Complexity",
            Self::Team => "Team",
            Self::Devops => "DevOps",
            Self::Infrastructure => "Infrastructure",
        }
    }
}

/// Per-category sub-scores; each is already capped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub scale: u8,
    pub complexity: u8,
    pub team: u8,
    pub devops: u8,
    pub infrastructure: u8,
}

impl ScoreBreakdown {
    pub fn get(&self, category: ScoreCategory) -> u8 {
        match category {
            ScoreCategory::Scale => self.scale,
            ScoreCategory::Complexity => self.complexity,
            ScoreCategory::Team => self.team,
            ScoreCategory::Devops => self.devops,
            ScoreCategory::Infrastructure => self.infrastructure,
        }
    }

    pub fn entries(&self) -> [(ScoreCategory, u8); 5] {
        ScoreCategory::ordered().map(|category| (category, self.get(category)))
    }

    /// Composite score in 0..=100.
    pub fn total(&self) -> u8 {
        let sum: u32 = self.entries().iter().map(|(_, score)| u32::from(*score)).sum();
        sum.min(100) as u8
    }
}

pub fn score_questionnaire(input: &QuestionnaireRecord) -> ScoreBreakdown {
    ScoreBreakdown {
        scale: scale_score(input),
        complexity: complexity_score(input),
        team: team_score(input),
        devops: devops_score(input),
        infrastructure: infrastructure_score(input),
    }
}

fn scale_score(input: &QuestionnaireRecord) -> u8 {
    match input.project_details.expected_scale {
        ExpectedScale::Enterprise => 20,
        ExpectedScale::Large => 15,
        ExpectedScale::Medium => 8,
        ExpectedScale::Small | ExpectedScale::Unset => 2,
    }
}

fn complexity_score(input: &QuestionnaireRecord) -> u8 {
    let complexity = &input.system_complexity;
    let mut score = 0;

    score += match complexity.communication_patterns.len() {
        n if n >= 4 => 10,
        n if n >= 2 => 6,
        1 => 3,
        _ => 0,
    };

    if complexity.expected_latency == LatencyTarget::Low {
        score += 6;
    }

    score += match complexity.availability_target {
        AvailabilityTarget::FourNines => 5,
        AvailabilityTarget::FiveNines => 7,
        AvailabilityTarget::Unset
        | AvailabilityTarget::ThreeNines
        | AvailabilityTarget::ThreeNinesFive => 0,
    };

    score += match complexity.deployment_pattern {
        DeploymentPattern::BlueGreen | DeploymentPattern::Canary => 4,
        DeploymentPattern::ActiveActive => 5,
        DeploymentPattern::Unset | DeploymentPattern::ActivePassive => 0,
    };

    score.min(ScoreCategory::Complexity.cap())
}

fn team_score(input: &QuestionnaireRecord) -> u8 {
    let team = &input.team_metrics;

    let size = match team.size {
        n if n >= 21 => 10,
        n if n >= 11 => 8,
        n if n >= 6 => 6,
        n if n >= 3 => 4,
        _ => 2,
    };

    let experience = match team.experience_level {
        ExperienceLevel::Senior => 10,
        ExperienceLevel::Mixed => 7,
        ExperienceLevel::Mid => 5,
        ExperienceLevel::Junior | ExperienceLevel::Unset => 2,
    };

    (size + experience).min(ScoreCategory::Team.cap())
}

fn devops_score(input: &QuestionnaireRecord) -> u8 {
    let team = &input.team_metrics;

    let maturity = match team.cicd_maturity {
        CicdMaturity::Advanced => 9,
        CicdMaturity::Intermediate => 6,
        CicdMaturity::Basic => 3,
        CicdMaturity::None | CicdMaturity::Unset => 0,
    };

    let frequency = match team.deployment_frequency {
        DeploymentFrequency::Daily => 6,
        DeploymentFrequency::Weekly => 4,
        DeploymentFrequency::Monthly => 2,
        DeploymentFrequency::Quarterly | DeploymentFrequency::Unset => 0,
    };

    (maturity + frequency).min(ScoreCategory::Devops.cap())
}

fn infrastructure_score(input: &QuestionnaireRecord) -> u8 {
    let selected: usize = InfrastructureCategory::ordered()
        .into_iter()
        .map(|category| input.infrastructure.selections(category).len().min(2))
        .sum();

    // at most 6 categories x 2 selections, so the cast cannot truncate
    ((selected * 2) as u8).min(ScoreCategory::Infrastructure.cap())
}

use archwise::engine::{
    score_questionnaire, Architecture, RecommendationEngine, ScoreBreakdown, ScoreCategory,
};
use archwise::questionnaire::{
    AvailabilityTarget, CicdMaturity, DeploymentFrequency, DeploymentPattern, ExperienceLevel,
    ExpectedScale, InfrastructureCategory, LatencyTarget, QuestionnaireRecord,
    COMMUNICATION_PATTERN_OPTIONS,
};
use archwise::generate_recommendation;
use proptest::prelude::*;

fn enterprise_platform() -> QuestionnaireRecord {
    let mut record = QuestionnaireRecord::default();
    record.project_details.name = "Payments Platform".to_string();
    record.project_details.expected_scale = ExpectedScale::Enterprise;

    let complexity = &mut record.system_complexity;
    for pattern in ["REST API", "GraphQL", "gRPC", "Event-Driven", "WebSockets"] {
        complexity.communication_patterns.insert(pattern.to_string());
    }
    complexity.expected_latency = LatencyTarget::Low;
    complexity.availability_target = AvailabilityTarget::FiveNines;
    complexity.deployment_pattern = DeploymentPattern::ActiveActive;

    let team = &mut record.team_metrics;
    team.size = 25;
    team.experience_level = ExperienceLevel::Senior;
    team.cicd_maturity = CicdMaturity::Advanced;
    team.deployment_frequency = DeploymentFrequency::Daily;

    for category in InfrastructureCategory::ordered() {
        let picks = category.suggested_options();
        let selections = record.infrastructure.selections_mut(category);
        selections.insert(picks[0].to_string());
        selections.insert(picks[1].to_string());
    }
    record
}

#[test]
fn empty_questionnaire_scores_as_confident_monolith() {
    let assessment = RecommendationEngine::new().generate(&QuestionnaireRecord::default());

    assert_eq!(
        assessment.breakdown,
        ScoreBreakdown {
            scale: 2,
            complexity: 0,
            team: 4,
            devops: 0,
            infrastructure: 0,
        }
    );
    let recommendation = assessment.recommendation;
    assert_eq!(recommendation.score, 6);
    assert_eq!(recommendation.architecture, Architecture::Monolith);
    // distance 29 scales to 35, which saturates the upper bound
    assert_eq!(recommendation.confidence, 95);
    assert!(recommendation.risks.is_empty());
    assert_eq!(recommendation.reasoning.len(), 3);
}

#[test]
fn fully_loaded_questionnaire_saturates_every_category() {
    let record = enterprise_platform();
    let breakdown = score_questionnaire(&record);

    for category in ScoreCategory::ordered() {
        assert_eq!(
            breakdown.get(category),
            category.cap(),
            "{} should be at its cap",
            category.label()
        );
    }

    let recommendation = generate_recommendation(&record);
    assert_eq!(recommendation.score, 100);
    assert_eq!(recommendation.architecture, Architecture::Microservices);
    assert_eq!(recommendation.confidence, 95);
    assert!(recommendation
        .tool_suggestions
        .iter()
        .any(|tool| tool.contains("Kubernetes")));
}

#[test]
fn junior_team_on_microservices_is_flagged() {
    let mut record = enterprise_platform();
    record.team_metrics.experience_level = ExperienceLevel::Junior;

    let recommendation = generate_recommendation(&record);
    assert_eq!(recommendation.architecture, Architecture::Microservices);
    assert!(recommendation
        .risks
        .iter()
        .any(|risk| risk == "Junior team may struggle with distributed systems complexity"));
}

#[test]
fn repeated_generation_is_identical() {
    let record = enterprise_platform();
    let engine = RecommendationEngine::new();
    assert_eq!(engine.generate(&record), engine.generate(&record));
}

/// Draws from every catalogued answer plus the unanswered default.
fn answer<T, const N: usize>(ordered: [T; N]) -> impl Strategy<Value = T>
where
    T: Clone + Default + std::fmt::Debug + 'static,
{
    let mut pool = vec![T::default()];
    pool.extend(ordered);
    prop::sample::select(pool)
}

fn arb_record() -> impl Strategy<Value = QuestionnaireRecord> {
    let project = (
        answer(ExpectedScale::ordered()),
        prop::sample::subsequence(COMMUNICATION_PATTERN_OPTIONS.to_vec(), 0..=6),
    );
    let complexity = (
        answer(LatencyTarget::ordered()),
        answer(AvailabilityTarget::ordered()),
        answer(DeploymentPattern::ordered()),
    );
    let team = (
        0u32..60,
        answer(ExperienceLevel::ordered()),
        answer(CicdMaturity::ordered()),
        answer(DeploymentFrequency::ordered()),
    );
    let infrastructure = prop::collection::vec(0usize..4, 6);

    (project, complexity, team, infrastructure).prop_map(
        |((scale, patterns), (latency, availability, deployment), team, infra)| {
            let (size, experience, cicd, frequency) = team;
            let mut record = QuestionnaireRecord::default();
            record.project_details.expected_scale = scale;

            let complexity = &mut record.system_complexity;
            complexity.communication_patterns = patterns.into_iter().map(str::to_string).collect();
            complexity.expected_latency = latency;
            complexity.availability_target = availability;
            complexity.deployment_pattern = deployment;

            let team = &mut record.team_metrics;
            team.size = size;
            team.experience_level = experience;
            team.cicd_maturity = cicd;
            team.deployment_frequency = frequency;

            for (category, count) in InfrastructureCategory::ordered().into_iter().zip(infra) {
                let selections = record.infrastructure.selections_mut(category);
                for option in category.suggested_options().iter().take(count) {
                    selections.insert(option.to_string());
                }
            }
            record
        },
    )
}

#[test]
fn unset_answers_mix_with_set_ones() {
    let mut record = enterprise_platform();
    record.project_details.expected_scale = ExpectedScale::Unset;
    record.system_complexity.availability_target = AvailabilityTarget::Unset;
    record.team_metrics.cicd_maturity = CicdMaturity::Unset;

    let breakdown = score_questionnaire(&record);
    assert_eq!(breakdown.scale, 2);
    assert_eq!(breakdown.complexity, 21);
    assert_eq!(breakdown.team, 20);
    assert_eq!(breakdown.devops, 6);
    assert_eq!(breakdown.infrastructure, 20);
    assert_eq!(generate_recommendation(&record).score, 69);
}

proptest! {
    #[test]
    fn score_and_confidence_stay_in_range(record in arb_record()) {
        let assessment = RecommendationEngine::new().generate(&record);
        let recommendation = &assessment.recommendation;

        prop_assert!(recommendation.score <= 100);
        prop_assert!((70..=95).contains(&recommendation.confidence));
        prop_assert_eq!(recommendation.score, assessment.breakdown.total());
        for (category, score) in assessment.breakdown.entries() {
            prop_assert!(score <= category.cap());
        }
    }

    #[test]
    fn architecture_follows_score_bands(record in arb_record()) {
        let recommendation = generate_recommendation(&record);
        let expected = match recommendation.score {
            0..=35 => Architecture::Monolith,
            36..=65 => Architecture::ModularMonolith,
            _ => Architecture::Microservices,
        };
        prop_assert_eq!(recommendation.architecture, expected);
        prop_assert_eq!(recommendation.reasoning.len(), 3);
        prop_assert!(!recommendation.pros.is_empty());
    }
}

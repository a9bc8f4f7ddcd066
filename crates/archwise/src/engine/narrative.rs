//! Explanatory text attached to a recommendation. Static tables are keyed by
//! architecture; risks and tool suggestions are ordered rule lists where each
//! rule contributes at most one line.

use super::scoring::{ScoreBreakdown, ScoreCategory};
use super::Architecture;
use crate::questionnaire::{
    CicdMaturity, DeploymentFrequency, ExperienceLevel, ExpectedScale, QuestionnaireRecord,
};

type Predicate = fn(Architecture, &QuestionnaireRecord) -> bool;

struct NarrativeRule {
    applies: Predicate,
    message: &'static str,
}

const MONOLITH_PROS: [&str; 5] = [
    "Simpler to develop, test, and deploy initially",
    "Easy to understand and maintain",
    "Better performance with fewer network calls",
    "Easier debugging and monitoring",
    "Lower operational overhead",
];

const MODULAR_MONOLITH_PROS: [&str; 4] = [
    "Better separation of concerns than traditional monolith",
    "Easier to scale development teams",
    "Good foundation for future microservices migration",
    "Reduced network complexity",
];

const MICROSERVICES_PROS: [&str; 5] = [
    "Independent development and deployment",
    "Technology diversity for different services",
    "Better fault isolation",
    "Easier to scale individual components",
    "Supports large development teams",
];

const MONOLITH_CONS: [&str; 5] = [
    "Can become difficult to maintain as it grows",
    "Entire application needs to be deployed for any change",
    "Technology lock-in",
    "Scaling limitations",
    "Potential for tight coupling",
];

const MODULAR_MONOLITH_CONS: [&str; 4] = [
    "Requires discipline to maintain module boundaries",
    "Can still face some scalability challenges",
    "Risk of creating a distributed monolith",
    "More complex than traditional monolith",
];

const MICROSERVICES_CONS: [&str; 5] = [
    "Increased operational complexity",
    "Network latency and reliability concerns",
    "Distributed system challenges",
    "Requires advanced DevOps practices",
    "Potential for service sprawl",
];

const MONOLITH_RECOMMENDATIONS: [&str; 3] = [
    "Start with a well-structured monolith using clean architecture principles",
    "Implement proper module boundaries to enable future migration",
    "Focus on automated testing and deployment pipelines",
];

const MODULAR_MONOLITH_RECOMMENDATIONS: [&str; 3] = [
    "Define clear module boundaries based on business capabilities",
    "Implement inter-module communication patterns",
    "Consider using event-driven architecture within modules",
];

const MICROSERVICES_RECOMMENDATIONS: [&str; 3] = [
    "Start with a few well-defined services, not many",
    "Implement comprehensive monitoring and logging",
    "Establish service contracts and API versioning strategies",
];

const RISK_RULES: [NarrativeRule; 5] = [
    NarrativeRule {
        applies: |architecture, input| {
            architecture == Architecture::Microservices
                && input.team_metrics.experience_level == ExperienceLevel::Junior
        },
        message: "Junior team may struggle with distributed systems complexity",
    },
    NarrativeRule {
        applies: |architecture, input| {
            architecture == Architecture::Microservices
                && input.team_metrics.cicd_maturity == CicdMaturity::None
        },
        message: "Lack of CI/CD will make microservices management very difficult",
    },
    NarrativeRule {
        applies: |architecture, input| {
            architecture == Architecture::Microservices
                && input.team_metrics.deployment_frequency == DeploymentFrequency::Quarterly
        },
        message: "Quarterly releases undercut the independent deployments microservices depend on",
    },
    NarrativeRule {
        applies: |architecture, input| {
            architecture == Architecture::Monolith
                && input.project_details.expected_scale == ExpectedScale::Enterprise
        },
        message: "May face scalability issues with enterprise-level traffic",
    },
    NarrativeRule {
        applies: |architecture, input| {
            architecture == Architecture::Monolith
                && input.system_complexity.communication_patterns.len() >= 4
        },
        message: "Many communication patterns may strain a single deployable unit",
    },
];

const MICROSERVICES_TOOLING: [&str; 4] = [
    "API Gateway: Kong, AWS API Gateway, or Nginx",
    "Service Discovery: Consul, Eureka, or Kubernetes",
    "Container Orchestration: Kubernetes or Docker Swarm",
    "Monitoring: Prometheus + Grafana, Jaeger for tracing",
];

const TOOL_RULES: [NarrativeRule; 2] = [
    NarrativeRule {
        applies: |_, input| input.infrastructure.monitoring.contains("Prometheus"),
        message: "Grafana for visualization with Prometheus",
    },
    NarrativeRule {
        applies: |_, input| input.infrastructure.cloud_provider.contains("AWS"),
        message: "AWS ECS or EKS for container orchestration",
    },
];

pub fn reasoning(
    architecture: Architecture,
    input: &QuestionnaireRecord,
    breakdown: &ScoreBreakdown,
) -> Vec<String> {
    let scale = input.project_details.expected_scale.label();
    let size = input.team_metrics.size;
    let devops = breakdown.devops;
    let devops_cap = ScoreCategory::Devops.cap();

    match architecture {
        Architecture::Monolith => vec![
            format!("Your team size of {size} developers works well with a monolithic approach"),
            format!("{scale} scale doesn't require distributed architecture complexity"),
            format!(
                "DevOps readiness of {devops}/{devops_cap} favors a single build and release pipeline"
            ),
        ],
        Architecture::ModularMonolith => vec![
            format!(
                "{scale} scale calls for better separation of concerns than a traditional monolith"
            ),
            format!("A team of {size} developers can work in parallel within separate modules"),
            format!(
                "DevOps readiness of {devops}/{devops_cap} supports a gradual migration path to microservices if needed"
            ),
        ],
        Architecture::Microservices => vec![
            format!(
                "{scale} scale with high availability and performance requirements justifies the complexity"
            ),
            format!("A team of {size} developers can work effectively with distributed services"),
            format!(
                "DevOps readiness of {devops}/{devops_cap} supports independent service deployments"
            ),
        ],
    }
}

pub fn pros(architecture: Architecture) -> &'static [&'static str] {
    match architecture {
        Architecture::Monolith => &MONOLITH_PROS,
        Architecture::ModularMonolith => &MODULAR_MONOLITH_PROS,
        Architecture::Microservices => &MICROSERVICES_PROS,
    }
}

pub fn cons(architecture: Architecture) -> &'static [&'static str] {
    match architecture {
        Architecture::Monolith => &MONOLITH_CONS,
        Architecture::ModularMonolith => &MODULAR_MONOLITH_CONS,
        Architecture::Microservices => &MICROSERVICES_CONS,
    }
}

pub fn recommendations(architecture: Architecture) -> &'static [&'static str] {
    match architecture {
        Architecture::Monolith => &MONOLITH_RECOMMENDATIONS,
        Architecture::ModularMonolith => &MODULAR_MONOLITH_RECOMMENDATIONS,
        Architecture::Microservices => &MICROSERVICES_RECOMMENDATIONS,
    }
}

pub fn risks(architecture: Architecture, input: &QuestionnaireRecord) -> Vec<String> {
    apply_rules(&RISK_RULES, architecture, input).collect()
}

pub fn tool_suggestions(architecture: Architecture, input: &QuestionnaireRecord) -> Vec<String> {
    let baseline: &[&str] = match architecture {
        Architecture::Microservices => &MICROSERVICES_TOOLING,
        Architecture::Monolith | Architecture::ModularMonolith => &[],
    };

    baseline
        .iter()
        .map(|tool| tool.to_string())
        .chain(apply_rules(&TOOL_RULES, architecture, input))
        .collect()
}

fn apply_rules<'a>(
    rules: &'a [NarrativeRule],
    architecture: Architecture,
    input: &'a QuestionnaireRecord,
) -> impl Iterator<Item = String> + 'a {
    rules
        .iter()
        .filter(move |rule| (rule.applies)(architecture, input))
        .map(|rule| rule.message.to_string())
}

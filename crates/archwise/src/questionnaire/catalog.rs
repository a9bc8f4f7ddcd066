use serde::{Deserialize, Serialize};

/// Communication patterns offered by the complexity step.
pub const COMMUNICATION_PATTERN_OPTIONS: [&str; 6] = [
    "REST APIs",
    "GraphQL",
    "gRPC",
    "Pub/Sub",
    "WebSockets",
    "Event Sourcing",
];

/// The six multi-select groups of the infrastructure step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfrastructureCategory {
    CloudProvider,
    Cicd,
    Databases,
    Messaging,
    Monitoring,
    Caching,
}

impl InfrastructureCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::CloudProvider,
            Self::Cicd,
            Self::Databases,
            Self::Messaging,
            Self::Monitoring,
            Self::Caching,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CloudProvider => "Cloud Providers",
            Self::Cicd => "CI/CD Tools",
            Self::Databases => "Databases",
            Self::Messaging => "Messaging Systems",
            Self::Monitoring => "Monitoring Tools",
            Self::Caching => "Caching Solutions",
        }
    }

    pub const fn suggested_options(self) -> &'static [&'static str] {
        match self {
            Self::CloudProvider => &[
                "AWS",
                "Azure",
                "Google Cloud",
                "Digital Ocean",
                "Heroku",
                "Vercel",
            ],
            Self::Cicd => &[
                "Jenkins",
                "GitHub Actions",
                "GitLab CI",
                "Azure DevOps",
                "CircleCI",
                "Travis CI",
            ],
            Self::Databases => &[
                "PostgreSQL",
                "MySQL",
                "MongoDB",
                "Redis",
                "DynamoDB",
                "Elasticsearch",
            ],
            Self::Messaging => &[
                "Apache Kafka",
                "RabbitMQ",
                "Redis Pub/Sub",
                "AWS SQS",
                "Azure Service Bus",
            ],
            Self::Monitoring => &[
                "Prometheus",
                "Grafana",
                "New Relic",
                "Datadog",
                "ELK Stack",
                "Splunk",
            ],
            Self::Caching => &["Redis", "Memcached", "Amazon ElastiCache", "CDN", "In-memory"],
        }
    }

    pub fn is_known_option(self, option: &str) -> bool {
        self.suggested_options().contains(&option)
    }
}

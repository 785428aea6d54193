pub const VOCABULARY: [&str; 20] = [
    "cloud",
    "docker",
    "kubernetes",
    "java",
    "maven",
    "aws",
    "spring",
    "microservice",
    "scalability",
    "observability",
    "monitoring",
    "resilience",
    "automation",
    "performance",
    "infra",
    "logs",
    "debugging",
    "reliability",
    "containerization",
    "serverless",
];

const _: () = assert!(!VOCABULARY.is_empty());

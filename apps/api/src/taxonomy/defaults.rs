//! Built-in keyword and company tables.
//!
//! These back every `Taxonomy` whose file omits the `keywords`, `companies` or
//! `pathway` sections. Entries are lower-case; list order is match order.

pub const REPUTATION_TIER1: &[&str] = &[
    "amazon", "google", "microsoft", "meta", "apple", "nvidia",
    "salesforce", "shopify", "stripe", "databricks", "snowflake",
    "openai", "anthropic", "cohere", "hugging face",
    "lululemon", "hootsuite", "slack", "mastercard",
    "deloitte", "mckinsey", "bcg", "bain", "accenture", "pwc", "ey", "kpmg",
    "rbc", "td", "bmo", "scotiabank", "cibc",
    "telus", "shaw", "bc hydro",
];

pub const REPUTATION_TIER2: &[&str] = &[
    "clio", "bench", "dapper labs", "trulioo", "later",
    "absolute software", "d-wave", "1password",
    "thinkific", "procurify", "vidyard", "freshbooks",
    "vancouver coastal health", "phsa", "bc cancer",
    "fortinet", "borealis ai",
];

/// Top employers for competition and tier purposes. Not the same list as
/// `REPUTATION_TIER1`.
pub const TOP_TIER: &[&str] = &[
    "amazon", "google", "microsoft", "meta", "apple", "netflix",
    "lululemon", "shopify", "rbc", "td", "bmo", "cibc", "scotiabank",
    "telus", "bchydro", "bc hydro", "deloitte", "pwc", "ey", "kpmg",
    "mckinsey", "bain", "bcg", "accenture",
];

pub const SMALL_OR_STARTUP: &[&str] = &[
    "bench", "clio", "hootsuite", "later", "absolute", "d-wave",
    "copperleaf", "eventbase", "finger food", "grow",
];

pub const OUTREACH_FRIENDLY: &[&str] = &[
    "amazon", "microsoft", "google", "meta", "apple",
    "shopify", "clio", "d-wave", "hootsuite",
    "rbc", "td", "deloitte", "ey", "pwc", "kpmg",
    "phsa", "vancouver coastal health", "bc cancer",
];

pub const LIVE_CODING: &[&str] = &[
    "google", "meta", "amazon", "apple", "netflix",
    "microsoft", "uber", "airbnb", "stripe", "doordash", "instacart",
    "databricks", "snowflake", "palantir", "linkedin",
];

pub const TAKE_HOME: &[&str] = &[
    // mid-size tech
    "hootsuite", "later", "clio", "bench", "copperleaf",
    "visier", "absolute", "eventbase", "finger food",
    "grow", "thinkific", "trulioo", "benevity",
    // regional non-tech
    "lululemon", "aritzia", "london drugs",
    "translink", "icbc", "bc hydro", "worksafe",
    "first west", "vancity", "coast capital",
    "phsa", "vancouver coastal health", "bc cancer",
    "city of vancouver",
    // consulting (case interviews)
    "deloitte", "ey", "kpmg", "accenture", "bdo",
    "bain", "bcg",
    // banks
    "rbc", "td", "bmo", "cibc", "scotiabank", "hsbc",
];

pub const REGION_INDICATORS: &[&str] = &[
    "vancouver", "burnaby", "surrey", "richmond", "bc",
    "british columbia", "victoria", "kelowna", "kamloops",
    "nanaimo", "new westminster", "coquitlam", "langley",
    "abbotsford", "north vancouver", "west vancouver",
];

pub const COUNTRY: &str = "canada";

/// Occupation codes on the priority (tech) list of the provincial pathway.
pub const PRIORITY_OCCUPATIONS: &[&str] = &[
    "20012", "21211", "21220", "21221", "21222", "21223", "21230",
    "21231", "21232", "21233", "21234", "21311", "22220", "22222",
];

/// Eligible through the general stream, but not on the priority list.
pub const SECONDARY_OCCUPATIONS: &[&str] = &["11201"];

pub const MEDIAN_HOURLY_WAGE: f64 = 38.46;

pub const HARD_SKILLS: &[&str] = &[
    // programming and data
    "python", "sql", "r", "java", "scala", "javascript", "typescript", "c++",
    "bash", "shell", "matlab", "sas", "stata", "go", "rust", "ruby",
    // ml / ai
    "machine learning", "deep learning", "nlp", "natural language processing",
    "computer vision", "reinforcement learning", "neural network", "llm",
    "large language model", "generative ai", "gen ai", "rag",
    "retrieval augmented generation", "fine-tuning", "prompt engineering",
    "langchain", "llamaindex", "vector database", "embeddings",
    "transformer", "bert", "gpt", "diffusion",
    // ml frameworks
    "tensorflow", "pytorch", "keras", "scikit-learn", "sklearn",
    "xgboost", "lightgbm", "catboost", "hugging face", "huggingface",
    "mlflow", "wandb", "optuna", "ray",
    // data tools
    "pandas", "numpy", "scipy", "matplotlib", "seaborn", "plotly",
    "dask", "polars", "pyspark", "spark", "hadoop", "hive", "presto",
    "airflow", "dagster", "prefect", "dbt", "fivetran",
    // databases
    "postgresql", "postgres", "mysql", "mongodb", "redis", "elasticsearch",
    "snowflake", "bigquery", "redshift", "databricks", "delta lake",
    // bi
    "tableau", "power bi", "looker", "metabase", "superset",
    "excel", "google sheets",
    // cloud
    "aws", "azure", "gcp", "google cloud", "s3", "ec2", "lambda",
    "sagemaker", "vertex ai", "cloud computing",
    // devops
    "docker", "kubernetes", "ci/cd", "git", "github", "gitlab",
    "terraform", "jenkins", "linux",
    // security
    "cybersecurity", "security", "siem", "soc", "penetration testing",
    "vulnerability", "encryption", "firewall", "ids", "ips",
    "compliance", "gdpr", "hipaa", "iso 27001", "nist",
    // statistics and methods
    "a/b testing", "ab testing", "hypothesis testing", "causal inference",
    "regression", "classification", "clustering", "time series",
    "bayesian", "statistical modeling", "statistical analysis",
    "feature engineering", "feature selection", "dimensionality reduction",
    "anomaly detection", "fraud detection", "recommendation system",
    // data engineering
    "etl", "elt", "data pipeline", "data warehouse", "data lake",
    "data modeling", "data governance", "data quality",
    // product / business
    "product analytics", "growth analytics", "funnel analysis",
    "cohort analysis", "retention", "churn", "ltv", "lifetime value",
    "kpi", "okr", "metrics", "experimentation",
    "segmentation", "personalization",
    // other
    "agile", "scrum", "jira", "confluence",
    "api", "rest", "graphql", "microservices",
];

pub const SOFT_SKILLS: &[&str] = &[
    "communication", "leadership", "teamwork", "collaboration",
    "problem solving", "problem-solving", "critical thinking",
    "project management", "stakeholder", "cross-functional",
    "presentation", "mentoring", "coaching", "strategic",
    "analytical", "detail-oriented", "self-motivated", "adaptable",
];

pub const EXPERIENCE_MARKERS: &[&str] = &[
    "years of experience", "year experience", "senior", "lead",
    "manager", "director", "principal", "staff",
    "entry level", "junior", "mid-level", "intermediate",
];

pub const EDUCATION_MARKERS: &[&str] = &[
    "bachelor", "master", "phd", "doctorate", "mba",
    "computer science", "statistics", "mathematics", "engineering",
    "data science", "machine learning", "artificial intelligence",
    "cybersecurity", "information security",
];

pub const ACTION_VERBS: &[&str] = &[
    "led", "developed", "designed", "built", "implemented", "deployed",
    "managed", "analyzed", "optimized", "created", "established",
    "improved", "automated", "delivered", "collaborated", "mentored",
    "architected", "scaled", "reduced", "increased", "drove",
    "spearheaded", "pioneered", "transformed", "streamlined",
];

/// Skill taxonomy bundled into the binary, used when no file is configured.
pub const BUILTIN_TAXONOMY_JSON: &str = include_str!("../../data/skill_taxonomy.json");

pub fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

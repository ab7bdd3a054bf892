use serde::{Deserialize, Serialize};

pub const DEFAULT_EMAIL_DOMAIN: &str = "eyeguard.ai";

pub const DEFAULT_USER_NAMES: [&str; 8] = [
    "Sarah Chen",
    "Marcus Johnson",
    "Emily Rodriguez",
    "David Kim",
    "Lisa Thompson",
    "James Wilson",
    "Anna Patel",
    "Michael Brown",
];

/// Sizing and seeding for one console session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub camera_count: usize,
    pub incident_count: usize,
    pub alert_limit: usize,
    pub user_names: Vec<String>,
    pub email_domain: String,
    pub seed: Option<u64>,
    /// Value shown for "incidents today" when no incident falls on the current date.
    pub incidents_today_fallback: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            camera_count: 28,
            incident_count: 50,
            alert_limit: 20,
            user_names: DEFAULT_USER_NAMES.iter().map(|name| name.to_string()).collect(),
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            seed: None,
            incidents_today_fallback: None,
        }
    }
}

/// Common error type for the console core.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Predicate applied by the listing controllers to their working copy.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;

    fn apply<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Importance tier of an incident.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

labeled_enum!(Severity, "severity", {
    Critical => "critical",
    Warning => "warning",
    Info => "info",
});

/// Review workflow state of an incident.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Pending,
    Reviewed,
    Dismissed,
}

labeled_enum!(IncidentStatus, "incident status", {
    Pending => "pending",
    Reviewed => "reviewed",
    Dismissed => "dismissed",
});

/// Recorded detection event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub camera_id: String,
    pub camera_name: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub description: String,
    pub thumbnail_url: String,
    pub confidence: u8,
}

/// Lightweight projection of a recent incident for the live alert feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub camera_name: String,
}

impl Alert {
    /// Builds the alert shown at `position` (zero-based) in the feed.
    pub fn from_incident(position: usize, incident: &Incident) -> Self {
        Self {
            id: format!("alert-{}", position + 1),
            message: incident.description.clone(),
            timestamp: incident.timestamp,
            severity: incident.severity,
            camera_name: incident.camera_name.clone(),
        }
    }
}

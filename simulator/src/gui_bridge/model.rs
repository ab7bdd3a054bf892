use chrono::{DateTime, Utc};
use eyeguardcore::domain::{Alert, Camera, DashboardStats, Incident, SystemHealth};
use eyeguardcore::Store;
use serde::{Deserialize, Serialize};

pub const RECENT_INCIDENT_LIMIT: usize = 5;
pub const CAMERA_PREVIEW_LIMIT: usize = 15;

/// Everything the dashboard screen renders, in the shape the front-end reads.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardModel {
    pub stats: DashboardStats,
    pub alerts: Vec<Alert>,
    pub recent_incidents: Vec<Incident>,
    pub camera_preview: Vec<Camera>,
    pub health: SystemHealth,
    pub generated_at: Option<DateTime<Utc>>,
}

impl DashboardModel {
    pub fn from_store(store: &Store) -> Self {
        Self {
            stats: store.dashboard_stats(),
            alerts: store.alerts().to_vec(),
            recent_incidents: store.recent_incidents(RECENT_INCIDENT_LIMIT).to_vec(),
            camera_preview: store.camera_preview(CAMERA_PREVIEW_LIMIT).to_vec(),
            health: store.health().clone(),
            generated_at: Some(store.generated_at()),
        }
    }
}

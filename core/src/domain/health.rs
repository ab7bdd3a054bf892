use serde::{Deserialize, Serialize};

/// Processing-host health figures shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealth {
    pub gpu_utilization: u8,
    pub fps_processing: u32,
    pub detection_accuracy: f32,
    pub cpu_usage: u8,
    pub memory_usage: u8,
    pub uptime: String,
}

impl SystemHealth {
    /// Static snapshot; nothing samples the host.
    pub fn snapshot() -> Self {
        Self {
            gpu_utilization: 73,
            fps_processing: 28,
            detection_accuracy: 94.7,
            cpu_usage: 45,
            memory_usage: 62,
            uptime: "14d 7h 32m".to_string(),
        }
    }
}

impl Default for SystemHealth {
    fn default() -> Self {
        Self::snapshot()
    }
}

/// Counts rendered in the dashboard stat cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_incidents_today: usize,
    pub active_cameras: usize,
    pub inactive_cameras: usize,
    pub error_cameras: usize,
    pub total_cameras: usize,
    pub alerts_pending: usize,
    pub critical_alerts: usize,
}

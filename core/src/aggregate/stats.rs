use crate::domain::{
    Camera, CameraStatus, DashboardStats, Incident, IncidentStatus, Severity,
};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Camera counts split by reported status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraBreakdown {
    pub active: usize,
    pub inactive: usize,
    pub error: usize,
}

impl CameraBreakdown {
    pub fn from_cameras(cameras: &[Camera]) -> Self {
        cameras
            .iter()
            .fold(Self::default(), |mut breakdown, camera| {
                match camera.status {
                    CameraStatus::Active => breakdown.active += 1,
                    CameraStatus::Inactive => breakdown.inactive += 1,
                    CameraStatus::Error => breakdown.error += 1,
                }
                breakdown
            })
    }

    pub fn total(&self) -> usize {
        self.active + self.inactive + self.error
    }
}

/// Counts incidents whose timestamp falls on the calendar date of `now`,
/// both read in the time zone of `now`.
pub fn incidents_on_day<Tz: TimeZone>(incidents: &[Incident], now: &DateTime<Tz>) -> usize {
    let zone = now.timezone();
    let today = now.date_naive();
    incidents
        .iter()
        .filter(|incident| incident.timestamp.with_timezone(&zone).date_naive() == today)
        .count()
}

/// Aggregates the dashboard stat cards.
///
/// `today_fallback` replaces a zero "incidents today" count when set; with
/// `None` a quiet day reports zero.
pub fn compute_dashboard_stats<Tz: TimeZone>(
    cameras: &[Camera],
    incidents: &[Incident],
    now: &DateTime<Tz>,
    today_fallback: Option<usize>,
) -> DashboardStats {
    let breakdown = CameraBreakdown::from_cameras(cameras);
    let today = match (incidents_on_day(incidents, now), today_fallback) {
        (0, Some(fallback)) => fallback,
        (count, _) => count,
    };
    let pending = incidents
        .iter()
        .filter(|incident| incident.status == IncidentStatus::Pending);

    DashboardStats {
        total_incidents_today: today,
        active_cameras: breakdown.active,
        inactive_cameras: breakdown.inactive,
        error_cameras: breakdown.error,
        total_cameras: cameras.len(),
        alerts_pending: pending.clone().count(),
        critical_alerts: pending
            .filter(|incident| incident.severity == Severity::Critical)
            .count(),
    }
}

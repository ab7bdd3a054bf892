use crate::aggregate::compute_dashboard_stats;
use crate::controller::{CameraRoster, IncidentLog, UserDirectory};
use crate::domain::{Alert, Camera, DashboardStats, Incident, SystemHealth, User};
use crate::generator::{
    derive_alerts_with_limit, generate_cameras, generate_incidents, generate_users,
};
use crate::prelude::SessionConfig;
use crate::telemetry::LogManager;
use chrono::{DateTime, Local, TimeZone, Utc};
use rand::Rng;

/// Collections for one console session, generated once at construction.
///
/// Screens read from the store through the controller constructors, each of
/// which works on a copy; nothing a screen does is written back here.
#[derive(Debug, Clone)]
pub struct Store {
    config: SessionConfig,
    generated_at: DateTime<Utc>,
    cameras: Vec<Camera>,
    incidents: Vec<Incident>,
    alerts: Vec<Alert>,
    users: Vec<User>,
    health: SystemHealth,
}

impl Store {
    pub fn generate<R: Rng>(config: &SessionConfig, rng: &mut R, now: DateTime<Utc>) -> Self {
        let logger = LogManager::new("store");
        let cameras = generate_cameras(config.camera_count, rng, now);
        let incidents = generate_incidents(config.incident_count, &cameras, rng, now);
        let alerts = derive_alerts_with_limit(&incidents, config.alert_limit);
        let users = generate_users(
            config.user_names.as_slice(),
            &config.email_domain,
            rng,
            now,
        );

        if cameras.is_empty() && config.incident_count > 0 {
            logger.reject("no cameras configured; incident log left empty");
        }
        logger.record(&format!(
            "session generated: {} cameras, {} incidents, {} alerts, {} users",
            cameras.len(),
            incidents.len(),
            alerts.len(),
            users.len()
        ));

        Self {
            config: config.clone(),
            generated_at: now,
            cameras,
            incidents,
            alerts,
            users,
            health: SystemHealth::snapshot(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// Incidents, newest first.
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn health(&self) -> &SystemHealth {
        &self.health
    }

    pub fn camera(&self, id: &str) -> Option<&Camera> {
        self.cameras.iter().find(|camera| camera.id == id)
    }

    pub fn incident(&self, id: &str) -> Option<&Incident> {
        self.incidents.iter().find(|incident| incident.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn recent_incidents(&self, limit: usize) -> &[Incident] {
        &self.incidents[..limit.min(self.incidents.len())]
    }

    pub fn camera_preview(&self, limit: usize) -> &[Camera] {
        &self.cameras[..limit.min(self.cameras.len())]
    }

    /// Stat cards as of the local wall clock.
    pub fn dashboard_stats(&self) -> DashboardStats {
        self.dashboard_stats_at(&Local::now())
    }

    pub fn dashboard_stats_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DashboardStats {
        compute_dashboard_stats(
            &self.cameras,
            &self.incidents,
            now,
            self.config.incidents_today_fallback,
        )
    }

    pub fn incident_log(&self) -> IncidentLog {
        IncidentLog::new(self.incidents.clone())
    }

    pub fn camera_roster(&self) -> CameraRoster {
        CameraRoster::new(self.cameras.clone())
    }

    pub fn user_directory(&self) -> UserDirectory {
        UserDirectory::new(self.users.clone())
    }
}

use crate::domain::{Alert, Camera, Incident};
use crate::generator::policy::{INCIDENT_STATUS_POLICY, SEVERITY_POLICY};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

pub const DESCRIPTIONS: [&str; 10] = [
    "Suspicious item concealment detected near shelving unit",
    "Unauthorized access to restricted area",
    "Potential shoplifting — item removed from display without scanning",
    "Loitering detected in high-value merchandise zone",
    "Tag removal attempt detected",
    "Bag stuffing behavior identified",
    "Unusual movement pattern near emergency exit",
    "Cash register tampering detected",
    "After-hours motion detected in closed section",
    "Multiple items concealed in clothing",
];

pub const ALERT_LIMIT: usize = 20;
pub const THUMBNAIL_PLACEHOLDER: &str = "/placeholder.svg";

const FIRST_INCIDENT_NUMBER: usize = 2_024_001;
const MAX_AGE_MS: f64 = 72.0 * 3_600_000.0;

pub fn incident_id(index: usize) -> String {
    format!("INC-{:07}", FIRST_INCIDENT_NUMBER + index)
}

/// Builds `count` incidents against cameras sampled uniformly from `cameras`,
/// each aged up to 72 hours, returned newest first.
///
/// Severity and review status come from independent position policies applied
/// before the sort. An empty roster yields no incidents.
pub fn generate_incidents<R: Rng>(
    count: usize,
    cameras: &[Camera],
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<Incident> {
    if cameras.is_empty() {
        return Vec::new();
    }

    let mut incidents: Vec<Incident> = (0..count)
        .map(|index| {
            let camera = &cameras[rng.gen_range(0..cameras.len())];
            let age_ms = rng.gen_range(0.0..MAX_AGE_MS) as i64;
            let confidence = rng.gen_range(75..=99);

            Incident {
                id: incident_id(index),
                camera_id: camera.id.clone(),
                camera_name: camera.name.clone(),
                location: camera.location.clone(),
                timestamp: now - Duration::milliseconds(age_ms),
                severity: SEVERITY_POLICY.assign(index),
                status: INCIDENT_STATUS_POLICY.assign(index),
                description: DESCRIPTIONS[index % DESCRIPTIONS.len()].to_string(),
                thumbnail_url: THUMBNAIL_PLACEHOLDER.to_string(),
                confidence,
            }
        })
        .collect();

    incidents.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    incidents
}

/// Projects the first `ALERT_LIMIT` incidents of a newest-first sequence.
pub fn derive_alerts(incidents: &[Incident]) -> Vec<Alert> {
    derive_alerts_with_limit(incidents, ALERT_LIMIT)
}

pub fn derive_alerts_with_limit(incidents: &[Incident], limit: usize) -> Vec<Alert> {
    incidents
        .iter()
        .take(limit)
        .enumerate()
        .map(|(position, incident)| Alert::from_incident(position, incident))
        .collect()
}

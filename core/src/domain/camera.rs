use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operational state reported for a camera feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Active,
    Inactive,
    Error,
}

labeled_enum!(CameraStatus, "camera status", {
    Active => "active",
    Inactive => "inactive",
    Error => "error",
});

/// Detection capability a camera is nominally configured to run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionModel {
    TheftDetection,
    IntrusionDetection,
    LoiteringDetection,
    ViolenceDetection,
    FireSmokeDetection,
    CrowdAnalysis,
}

labeled_enum!(DetectionModel, "detection model", {
    TheftDetection => "theft-detection",
    IntrusionDetection => "intrusion-detection",
    LoiteringDetection => "loitering-detection",
    ViolenceDetection => "violence-detection",
    FireSmokeDetection => "fire-smoke-detection",
    CrowdAnalysis => "crowd-analysis",
});

impl DetectionModel {
    pub fn label(&self) -> &'static str {
        match self {
            DetectionModel::TheftDetection => "Theft Detection (YOLOv8)",
            DetectionModel::IntrusionDetection => "Intrusion Detection",
            DetectionModel::LoiteringDetection => "Loitering Detection",
            DetectionModel::ViolenceDetection => "Violence Detection",
            DetectionModel::FireSmokeDetection => "Fire & Smoke Detection",
            DetectionModel::CrowdAnalysis => "Crowd Analysis",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            DetectionModel::TheftDetection => "/api/detect/theft",
            DetectionModel::IntrusionDetection => "/api/detect/intrusion",
            DetectionModel::LoiteringDetection => "/api/detect/loitering",
            DetectionModel::ViolenceDetection => "/api/detect/violence",
            DetectionModel::FireSmokeDetection => "/api/detect/fire",
            DetectionModel::CrowdAnalysis => "/api/detect/crowd",
        }
    }
}

/// Camera entry in the monitored roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: CameraStatus,
    pub rtsp_url: String,
    pub last_frame_timestamp: DateTime<Utc>,
    pub fps: u32,
    pub detection_model: DetectionModel,
    pub enabled: bool,
}

impl Camera {
    /// True when the roster would show a live frame rate for this camera.
    pub fn is_streaming(&self) -> bool {
        self.enabled && self.status == CameraStatus::Active && self.fps > 0
    }
}

/// Operator-supplied fields for a camera added from the roster screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraDraft {
    pub name: String,
    pub location: String,
    pub rtsp_url: String,
    pub detection_model: DetectionModel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_model_round_trips_through_text() {
        let model: DetectionModel = "fire-smoke-detection".parse().unwrap();
        assert_eq!(model, DetectionModel::FireSmokeDetection);
        assert_eq!(model.endpoint(), "/api/detect/fire");
        assert_eq!(
            serde_json::to_string(&model).unwrap(),
            "\"fire-smoke-detection\""
        );
    }

    #[test]
    fn camera_status_parse_is_case_insensitive() {
        assert_eq!(" Error ".parse::<CameraStatus>().unwrap(), CameraStatus::Error);
        assert!("offline".parse::<CameraStatus>().is_err());
    }

    #[test]
    fn camera_serializes_with_front_end_field_names() {
        let camera = Camera {
            id: "cam-001".into(),
            name: "CAM-001".into(),
            location: "Main Entrance".into(),
            status: CameraStatus::Active,
            rtsp_url: "rtsp://192.168.1.100:554/stream1".into(),
            last_frame_timestamp: Utc::now(),
            fps: 30,
            detection_model: DetectionModel::TheftDetection,
            enabled: true,
        };
        let value = serde_json::to_value(&camera).unwrap();
        assert_eq!(value["rtspUrl"], "rtsp://192.168.1.100:554/stream1");
        assert_eq!(value["detectionModel"], "theft-detection");
        assert!(value.get("lastFrameTimestamp").is_some());
        assert!(camera.is_streaming());
    }
}

use crate::domain::{Camera, CameraStatus, DetectionModel};
use crate::generator::policy::CAMERA_STATUS_POLICY;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

pub const LOCATIONS: [&str; 28] = [
    "Main Entrance",
    "Cash Counter A",
    "Cash Counter B",
    "Storage Room",
    "Aisle 1",
    "Aisle 2",
    "Aisle 3",
    "Aisle 4",
    "Aisle 5",
    "Back Door",
    "Parking Lot",
    "Electronics Section",
    "Jewelry Counter",
    "Warehouse",
    "Loading Dock",
    "Manager Office",
    "Break Room",
    "Pharmacy",
    "Self-Checkout",
    "Customer Service",
    "Deli Counter",
    "Produce Section",
    "Freezer Aisle",
    "Garden Center",
    "Fitting Room",
    "North Exit",
    "South Exit",
    "Roof Access",
];

const FPS_RANGE: std::ops::Range<u32> = 25..35;
const LAST_FRAME_WINDOW_MS: i64 = 60_000;
// Host octets 100..=254 on the camera subnet.
const HOST_OCTET_SPAN: usize = 155;

pub fn camera_id(number: usize) -> String {
    format!("cam-{:03}", number)
}

pub fn camera_name(number: usize) -> String {
    format!("CAM-{:03}", number)
}

/// Builds `count` cameras in roster order. Locations and detection models
/// cycle through their tables; status follows the camera status policy.
pub fn generate_cameras<R: Rng>(count: usize, rng: &mut R, now: DateTime<Utc>) -> Vec<Camera> {
    (0..count)
        .map(|index| {
            let status = CAMERA_STATUS_POLICY.assign(index);
            let fps = if status == CameraStatus::Active {
                rng.gen_range(FPS_RANGE)
            } else {
                0
            };
            let frame_age = Duration::milliseconds(rng.gen_range(0..LAST_FRAME_WINDOW_MS));
            let models = DetectionModel::ALL;

            Camera {
                id: camera_id(index + 1),
                name: camera_name(index + 1),
                location: LOCATIONS[index % LOCATIONS.len()].to_string(),
                status,
                rtsp_url: format!(
                    "rtsp://192.168.1.{}:554/stream{}",
                    100 + index % HOST_OCTET_SPAN,
                    index + 1
                ),
                last_frame_timestamp: now - frame_age,
                fps,
                detection_model: models[index % models.len()],
                enabled: status != CameraStatus::Error,
            }
        })
        .collect()
}

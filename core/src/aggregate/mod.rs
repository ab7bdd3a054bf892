pub mod stats;

pub use stats::{compute_dashboard_stats, incidents_on_day, CameraBreakdown};

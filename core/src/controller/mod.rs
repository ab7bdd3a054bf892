pub mod cameras;
pub mod incidents;
pub mod query;
pub mod users;

pub use cameras::{CameraFilter, CameraRoster};
pub use incidents::{IncidentFilter, IncidentLog};
pub use query::{Choice, Selection, TextQuery};
pub use users::{UserDirectory, UserFilter};

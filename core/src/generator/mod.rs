pub mod cameras;
pub mod incidents;
pub mod policy;
pub mod users;

pub use cameras::generate_cameras;
pub use incidents::{derive_alerts, derive_alerts_with_limit, generate_incidents};
pub use policy::BucketPolicy;
pub use users::generate_users;

/// Implements `as_str`, `Display`, and `FromStr` for a fieldless enum whose
/// serialized names are listed alongside each variant.
macro_rules! labeled_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::prelude::CoreError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalized = value.trim().to_ascii_lowercase();
                match normalized.as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err($crate::prelude::CoreError::UnknownVariant {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }
    };
}

pub mod camera;
pub mod health;
pub mod incident;
pub mod user;

pub use camera::{Camera, CameraDraft, CameraStatus, DetectionModel};
pub use health::{DashboardStats, SystemHealth};
pub use incident::{Alert, Incident, IncidentStatus, Severity};
pub use user::{Role, User, UserInvite, UserStatus};

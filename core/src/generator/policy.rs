use crate::domain::{CameraStatus, IncidentStatus, Role, Severity, UserStatus};

/// Assigns a value by position: consecutive buckets of fixed width, then a
/// tail value for every index past the last bucket.
///
/// The tables below carry no correlation between fields. A critical incident
/// may well be dismissed; that is the observed assignment, not a rule.
#[derive(Debug, Clone, Copy)]
pub struct BucketPolicy<T: 'static> {
    buckets: &'static [(usize, T)],
    tail: T,
}

impl<T: Copy> BucketPolicy<T> {
    pub const fn new(buckets: &'static [(usize, T)], tail: T) -> Self {
        Self { buckets, tail }
    }

    pub fn assign(&self, index: usize) -> T {
        let mut upper = 0;
        for &(width, value) in self.buckets {
            upper += width;
            if index < upper {
                return value;
            }
        }
        self.tail
    }
}

pub const CAMERA_STATUS_POLICY: BucketPolicy<CameraStatus> = BucketPolicy::new(
    &[(22, CameraStatus::Active), (4, CameraStatus::Inactive)],
    CameraStatus::Error,
);

pub const SEVERITY_POLICY: BucketPolicy<Severity> = BucketPolicy::new(
    &[(8, Severity::Critical), (17, Severity::Warning)],
    Severity::Info,
);

pub const INCIDENT_STATUS_POLICY: BucketPolicy<IncidentStatus> = BucketPolicy::new(
    &[(15, IncidentStatus::Pending), (25, IncidentStatus::Reviewed)],
    IncidentStatus::Dismissed,
);

pub const ROLE_POLICY: BucketPolicy<Role> = BucketPolicy::new(&[(1, Role::Admin)], Role::Viewer);

pub const USER_STATUS_POLICY: BucketPolicy<UserStatus> =
    BucketPolicy::new(&[(7, UserStatus::Active)], UserStatus::Inactive);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_status_boundaries() {
        assert_eq!(CAMERA_STATUS_POLICY.assign(0), CameraStatus::Active);
        assert_eq!(CAMERA_STATUS_POLICY.assign(21), CameraStatus::Active);
        assert_eq!(CAMERA_STATUS_POLICY.assign(22), CameraStatus::Inactive);
        assert_eq!(CAMERA_STATUS_POLICY.assign(25), CameraStatus::Inactive);
        assert_eq!(CAMERA_STATUS_POLICY.assign(26), CameraStatus::Error);
        assert_eq!(CAMERA_STATUS_POLICY.assign(500), CameraStatus::Error);
    }

    #[test]
    fn severity_and_status_buckets_are_independent() {
        assert_eq!(SEVERITY_POLICY.assign(7), Severity::Critical);
        assert_eq!(SEVERITY_POLICY.assign(8), Severity::Warning);
        assert_eq!(SEVERITY_POLICY.assign(24), Severity::Warning);
        assert_eq!(SEVERITY_POLICY.assign(25), Severity::Info);

        assert_eq!(INCIDENT_STATUS_POLICY.assign(14), IncidentStatus::Pending);
        assert_eq!(INCIDENT_STATUS_POLICY.assign(15), IncidentStatus::Reviewed);
        assert_eq!(INCIDENT_STATUS_POLICY.assign(39), IncidentStatus::Reviewed);
        assert_eq!(INCIDENT_STATUS_POLICY.assign(40), IncidentStatus::Dismissed);
    }

    #[test]
    fn only_first_user_is_admin() {
        assert_eq!(ROLE_POLICY.assign(0), Role::Admin);
        assert_eq!(ROLE_POLICY.assign(1), Role::Viewer);
        assert_eq!(USER_STATUS_POLICY.assign(6), UserStatus::Active);
        assert_eq!(USER_STATUS_POLICY.assign(7), UserStatus::Inactive);
    }
}

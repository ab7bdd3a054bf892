use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Viewer,
}

labeled_enum!(Role, "role", {
    Admin => "admin",
    Viewer => "viewer",
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

labeled_enum!(UserStatus, "user status", {
    Active => "active",
    Inactive => "inactive",
});

/// Console operator account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Invitation submitted from the user administration screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInvite {
    pub name: String,
    pub email: String,
    pub role: Role,
}

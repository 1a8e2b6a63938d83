use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role attribute of a user record. The store keeps it as text; anything
/// other than `admin` is treated as a regular user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Regular,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Regular => "regular",
            Role::Admin => "admin",
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            _ => Role::Regular,
        }
    }
}

impl User {
    pub fn role(&self) -> Role {
        Role::from(self.role.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_roles_fall_back_to_regular() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("regular"), Role::Regular);
        assert_eq!(Role::from("superuser"), Role::Regular);
        assert_eq!(Role::from(""), Role::Regular);
    }
}

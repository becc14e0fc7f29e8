//! User types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Role, TeamId, UserId};

/// A registered user.
///
/// Users are created at registration alongside their team; admins are
/// created without one. The credential hash is opaque to everything
/// except the account service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unique login email
    pub email: String,
    /// PBKDF2 credential hash, never exposed over the API
    pub password_hash: String,
    pub role: Role,
    pub team_id: Option<TeamId>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a team member.
    pub fn member(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        team_id: TeamId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role: Role::Member,
            team_id: Some(team_id),
            created_at: now,
        }
    }

    /// Create an administrator (no team).
    pub fn admin(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role: Role::Admin,
            team_id: None,
            created_at: now,
        }
    }
}

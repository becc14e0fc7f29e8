//! Shared identifier and caller-context types
//!
//! Identifiers follow the newtype pattern so a `TeamId` can never be
//! passed where a `StartupId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};

/// Team ID - primary identifier for a team
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User ID - primary identifier for a registered user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Startup ID - primary identifier for an investable startup
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StartupId(pub String);

impl StartupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StartupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Investment ID - primary identifier for a recorded investment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvestmentId(pub String);

impl InvestmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InvestmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Member,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "MEMBER",
            Self::Admin => "ADMIN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MEMBER" => Some(Self::Member),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Authenticated caller context
///
/// Produced by the session layer after credential validation; the game
/// services accept this instead of performing their own credential
/// lookups.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Authenticated user
    pub user_id: UserId,
    /// Team the user belongs to, if any (admins have none)
    pub team_id: Option<TeamId>,
    /// Caller role
    pub role: Role,
}

impl AuthContext {
    pub fn new(user_id: UserId, team_id: Option<TeamId>, role: Role) -> Self {
        Self {
            user_id,
            team_id,
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// The caller's team, or `Unauthorized` for team-scoped operations.
    pub fn require_team(&self) -> LedgerResult<&TeamId> {
        self.team_id
            .as_ref()
            .ok_or_else(|| LedgerError::Unauthorized("caller has no team".to_string()))
    }

    /// Admin role, or `Unauthorized` for admin-only operations.
    pub fn require_admin(&self) -> LedgerResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized("admin role required".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(TeamId::generate(), TeamId::generate());
        assert_ne!(StartupId::generate(), StartupId::generate());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("MEMBER"), Some(Role::Member));
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn test_auth_context_guards() {
        let member = AuthContext::new(
            UserId::generate(),
            Some(TeamId::generate()),
            Role::Member,
        );
        assert!(member.require_team().is_ok());
        assert!(member.require_admin().is_err());

        let admin = AuthContext::new(UserId::generate(), None, Role::Admin);
        assert!(admin.require_admin().is_ok());
        assert!(admin.require_team().is_err());
    }
}

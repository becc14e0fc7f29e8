//! Account service: registration, authentication, admin creation

use std::sync::Arc;

use chrono::Utc;

use venture_core::{LedgerError, LedgerResult, Team, User};

use crate::password::{hash_password, verify_password};
use crate::store::LedgerStore;

/// Account service
pub struct AccountService {
    store: Arc<dyn LedgerStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Register a new user together with their team.
    ///
    /// The team gets the starting balance; the user becomes its first
    /// MEMBER. Both rows are created in one store transaction, so a
    /// duplicate email or team name leaves nothing behind.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        team_name: &str,
    ) -> LedgerResult<(User, Team)> {
        if name.is_empty() || email.is_empty() || password.is_empty() || team_name.is_empty() {
            return Err(LedgerError::Validation(
                "missing required fields".to_string(),
            ));
        }

        let now = Utc::now();
        let team = Team::new(team_name, now);
        let user = User::member(name, email, hash_password(password), team.id.clone(), now);

        let (team, user) = self.store.create_account(team, user).await?;

        tracing::info!(
            user_id = %user.id,
            team_id = %team.id,
            team_name = %team.name,
            "account registered"
        );

        Ok((user, team))
    }

    /// Verify credentials and return the user for session minting.
    ///
    /// Unknown emails and wrong passwords report the same error.
    pub async fn authenticate(&self, email: &str, password: &str) -> LedgerResult<User> {
        let user = self
            .store
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| LedgerError::Unauthorized("invalid credentials".to_string()))?;

        if !verify_password(password, &user.password_hash) {
            return Err(LedgerError::Unauthorized("invalid credentials".to_string()));
        }

        Ok(user)
    }

    /// Create an administrator account (no team).
    pub async fn create_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> LedgerResult<User> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(LedgerError::Validation(
                "missing required fields".to_string(),
            ));
        }

        let user = User::admin(name, email, hash_password(password), Utc::now());
        let user = self.store.insert_user(user).await?;

        tracing::info!(user_id = %user.id, "admin account created");

        Ok(user)
    }
}

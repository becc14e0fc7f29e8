//! Startup administration and listing

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use venture_core::{
    validate_multiplier, AuthContext, LedgerError, LedgerResult, Startup, StartupId,
};

use crate::store::{LedgerStore, StartupDetail};

/// Startup service
pub struct StartupService {
    store: Arc<dyn LedgerStore>,
}

impl StartupService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Create a pending startup. Admin only; the default multiplier
    /// applies when none is given.
    pub async fn create(
        &self,
        ctx: &AuthContext,
        name: &str,
        description: &str,
        pitch: &str,
        multiplier: Option<Decimal>,
    ) -> LedgerResult<Startup> {
        ctx.require_admin()?;

        if name.is_empty() || description.is_empty() || pitch.is_empty() {
            return Err(LedgerError::Validation(
                "missing required fields".to_string(),
            ));
        }

        let startup = Startup::new(name, description, pitch, multiplier, Utc::now())?;
        let startup = self.store.insert_startup(startup).await?;

        tracing::info!(
            startup_id = %startup.id,
            multiplier = %startup.multiplier,
            "startup created"
        );

        Ok(startup)
    }

    /// Startups open for investment, newest first.
    pub async fn list_pending(&self) -> LedgerResult<Vec<Startup>> {
        self.store.list_pending_startups().await
    }

    /// Admin listing of every startup with its investments.
    pub async fn list_details(&self, ctx: &AuthContext) -> LedgerResult<Vec<StartupDetail>> {
        ctx.require_admin()?;
        self.store.list_startup_details().await
    }

    /// Adjust a pending startup's multiplier. Admin only.
    pub async fn update_multiplier(
        &self,
        ctx: &AuthContext,
        startup_id: &StartupId,
        multiplier: Decimal,
    ) -> LedgerResult<Startup> {
        ctx.require_admin()?;
        validate_multiplier(multiplier)?;

        let startup = self.store.update_multiplier(startup_id, multiplier).await?;

        tracing::info!(
            startup_id = %startup.id,
            multiplier = %startup.multiplier,
            "startup multiplier updated"
        );

        Ok(startup)
    }
}

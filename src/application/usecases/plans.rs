use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::{
    application::usecases::plan_fixtures,
    domain::{
        repositories::plans::PlanRepository,
        value_objects::plans::{ListPlansFilter, PlanCatalog, PlanModel, PlanValidationError},
    },
};

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid plan: {0}")]
    Validation(#[from] PlanValidationError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type UseCaseResult<T> = std::result::Result<T, PlanError>;

pub struct PlanUseCase<T>
where
    T: PlanRepository + Send + Sync,
{
    plan_repository: Arc<T>,
    // Held for the whole reseed so two callers never interleave.
    seed_lock: Mutex<()>,
}

impl<T> PlanUseCase<T>
where
    T: PlanRepository + Send + Sync,
{
    pub fn new(plan_repository: Arc<T>) -> Self {
        Self {
            plan_repository,
            seed_lock: Mutex::new(()),
        }
    }

    /// Lists active plans cheapest first. A storage failure is logged and
    /// reported as [`PlanCatalog::Unavailable`] rather than returned as an error.
    pub async fn list_plans(&self, filter: ListPlansFilter) -> PlanCatalog {
        info!(
            operator = ?filter.operator,
            plan_type = ?filter.plan_type,
            search = ?filter.search,
            "plans: listing active plans"
        );

        match self.plan_repository.list_active(&filter).await {
            Ok(rows) => {
                let plan_count = rows.len();
                info!(plan_count, "plans: active plans loaded");
                PlanCatalog::Available(rows.into_iter().map(PlanModel::from).collect())
            }
            Err(err) => {
                error!(db_error = ?err, "plans: failed to list plans, serving degraded catalog");
                PlanCatalog::Unavailable
            }
        }
    }

    /// Replaces the whole catalog with the sample fixture. Returns the number
    /// of plans inserted.
    pub async fn reseed_plans(&self) -> UseCaseResult<usize> {
        let _guard = self.seed_lock.lock().await;
        info!("plans: reseeding catalog");

        let now = Utc::now();
        let entities = plan_fixtures::sample_plans()
            .iter()
            .map(|plan| plan.to_entity(now))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                error!(validation_error = %err, "plans: fixture failed validation");
                PlanError::Validation(err)
            })?;

        let inserted = self
            .plan_repository
            .replace_all(entities)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "plans: failed to reseed plans");
                PlanError::Internal(err)
            })?;

        info!(inserted, "plans: catalog reseeded");
        Ok(inserted)
    }
}

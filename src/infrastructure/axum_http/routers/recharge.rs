use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    application::usecases::plans::PlanUseCase,
    domain::{
        repositories::plans::PlanRepository,
        value_objects::plans::{ListPlansFilter, PlanModel},
    },
    infrastructure::{
        axum_http::{auth::AuthUser, error_responses::AppError},
        postgres::{postgres_connection::PgPoolSquad, repositories::plans::PlanPostgres},
    },
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlansQuery {
    operator: Option<String>,
    plan_type: Option<String>,
    search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PlansResponse {
    pub success: bool,
    pub plans: Vec<PlanModel>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub degraded: bool,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub success: bool,
    pub message: &'static str,
    pub count: usize,
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let plan_repository = PlanPostgres::new(Arc::clone(&db_pool));
    let plan_usecase = PlanUseCase::new(Arc::new(plan_repository));

    router(Arc::new(plan_usecase))
}

pub fn router<T>(plan_usecase: Arc<PlanUseCase<T>>) -> Router
where
    T: PlanRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/test", get(liveness))
        .route("/plans", get(list_plans::<T>))
        .route("/seed-plans", post(seed_plans::<T>))
        .with_state(plan_usecase)
}

pub async fn liveness() -> impl IntoResponse {
    Json(MessageResponse {
        success: true,
        message: "Recharge API is working",
    })
}

/// Always answers 200; a store outage shows up as `degraded: true` with no plans.
pub async fn list_plans<T>(
    State(plan_usecase): State<Arc<PlanUseCase<T>>>,
    AuthUser { user_id }: AuthUser,
    Query(query): Query<PlansQuery>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync,
{
    info!(%user_id, "recharge: plans request received");
    let filter = ListPlansFilter::new(query.operator, query.plan_type, query.search);

    let catalog = plan_usecase.list_plans(filter).await;
    let degraded = catalog.is_degraded();

    Json(PlansResponse {
        success: true,
        plans: catalog.into_plans(),
        degraded,
    })
}

pub async fn seed_plans<T>(
    State(plan_usecase): State<Arc<PlanUseCase<T>>>,
    AuthUser { user_id }: AuthUser,
) -> Result<Json<SeedResponse>, AppError>
where
    T: PlanRepository + Send + Sync,
{
    info!(%user_id, "recharge: seed request received");
    let count = plan_usecase.reseed_plans().await?;

    Ok(Json(SeedResponse {
        success: true,
        message: "Sample plans seeded successfully",
        count,
    }))
}

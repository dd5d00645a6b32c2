use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::plans::{InsertRechargePlanEntity, RechargePlanEntity},
    value_objects::plans::ListPlansFilter,
};

#[automock]
#[async_trait]
pub trait PlanRepository {
    /// Active plans matching `filter`, cheapest first.
    async fn list_active(&self, filter: &ListPlansFilter) -> Result<Vec<RechargePlanEntity>>;
    /// Deletes every plan and inserts `plans` as one unit. Returns the inserted count.
    async fn replace_all(&self, plans: Vec<InsertRechargePlanEntity>) -> Result<usize>;
}

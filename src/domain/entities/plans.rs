use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::recharge_plans;

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = recharge_plans)]
pub struct RechargePlanEntity {
    pub id: Uuid,
    pub operator: String,
    pub plan_type: String,
    pub amount: i32,
    pub validity: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = recharge_plans)]
pub struct InsertRechargePlanEntity {
    pub operator: String,
    pub plan_type: String,
    pub amount: i32,
    pub validity: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

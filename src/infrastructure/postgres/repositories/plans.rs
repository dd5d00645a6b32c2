use anyhow::Result;
use async_trait::async_trait;
use diesel::{
    Connection, PgConnection, RunQueryDsl, delete,
    dsl::sql,
    insert_into,
    prelude::*,
    sql_types::{Bool, Text},
};
use std::sync::Arc;

use crate::domain::{
    entities::plans::{InsertRechargePlanEntity, RechargePlanEntity},
    repositories::plans::PlanRepository,
    value_objects::plans::ListPlansFilter,
};
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::recharge_plans};

pub struct PlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

fn delete_all(conn: &mut PgConnection) -> QueryResult<usize> {
    delete(recharge_plans::table).execute(conn)
}

fn insert_many(conn: &mut PgConnection, plans: &[InsertRechargePlanEntity]) -> QueryResult<usize> {
    if plans.is_empty() {
        return Ok(0);
    }

    insert_into(recharge_plans::table)
        .values(plans)
        .execute(conn)
}

fn load_active(
    conn: &mut PgConnection,
    filter: &ListPlansFilter,
) -> QueryResult<Vec<RechargePlanEntity>> {
    let mut query = recharge_plans::table
        .select(RechargePlanEntity::as_select())
        .filter(recharge_plans::is_active.eq(true))
        .into_boxed();

    if let Some(operator) = &filter.operator {
        query = query.filter(recharge_plans::operator.eq(operator));
    }

    if let Some(plan_type) = &filter.plan_type {
        query = query.filter(recharge_plans::plan_type.eq(plan_type));
    }

    // The search box matches the description or the price digits.
    if let Some(pattern) = filter.search_pattern() {
        query = query.filter(
            recharge_plans::description.ilike(pattern.clone()).or(sql::<Bool>(
                "CAST(recharge_plans.amount AS TEXT) LIKE ",
            )
            .bind::<Text, _>(pattern)),
        );
    }

    query
        .order(recharge_plans::amount.asc())
        .load::<RechargePlanEntity>(conn)
}

/// Delete-all and insert-many as one transaction; a failed insert keeps the old rows.
fn replace_rows(conn: &mut PgConnection, plans: &[InsertRechargePlanEntity]) -> QueryResult<usize> {
    conn.transaction::<usize, diesel::result::Error, _>(|tx| {
        let deleted = delete_all(tx)?;
        tracing::debug!(deleted, "plans: cleared existing plans");
        insert_many(tx, plans)
    })
}

#[async_trait]
impl PlanRepository for PlanPostgres {
    async fn list_active(&self, filter: &ListPlansFilter) -> Result<Vec<RechargePlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = load_active(&mut conn, filter)?;

        Ok(rows)
    }

    async fn replace_all(&self, plans: Vec<InsertRechargePlanEntity>) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let inserted = replace_rows(&mut conn, &plans)?;

        Ok(inserted)
    }
}

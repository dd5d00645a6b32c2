use std::time::Duration;

use anyhow::Result;
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool},
};

pub type PgPoolSquad = Pool<ConnectionManager<PgConnection>>;

/// Builds the pool lazily so the server can start while the database is
/// still coming up; reads fail after `checkout_timeout` instead of hanging.
pub fn establish_connection(database_url: &str, checkout_timeout: Duration) -> Result<PgPoolSquad> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_timeout(checkout_timeout)
        .min_idle(Some(0))
        .build_unchecked(manager);
    Ok(pool)
}

//! Query and connection metrics for the catalog store.

use metrics::{gauge, histogram};
use sqlx::SqlitePool;
use std::time::Instant;

/// Record how long a named catalog query took.
pub fn record_query_duration(query_name: &'static str, duration_secs: f64) {
    histogram!("catalog_query_duration_seconds", "query" => query_name).record(duration_secs);
}

/// Record connection pool size and idle count.
pub fn record_pool_metrics(pool: &SqlitePool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();

    gauge!("catalog_db_connections_active").set(size.saturating_sub(idle) as f64);
    gauge!("catalog_db_connections_idle").set(idle as f64);
    gauge!("catalog_db_connections_total").set(size as f64);
}

/// Times one query; call [`record`](Self::record) once it completes.
///
/// ```ignore
/// let timer = QueryTimer::new("find_playwright_by_name");
/// let result = sqlx::query_as::<_, PlaywrightEntity>(...).fetch_optional(&pool).await;
/// timer.record();
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    pub fn record(self) {
        record_query_duration(self.query_name, self.start.elapsed().as_secs_f64());
    }
}

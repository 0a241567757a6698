//! Reference-count statistics per college and degree year.

use serde::Serialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::thesis::{REFERENCE_COLLEGES, STATS_START_YEAR};

/// Aggregated reference counts for one (year, college) group.
#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct ReferenceStats {
    pub year: i32,
    pub college: String,
    pub avg_refs: f64,
    pub max_refs: i64,
    pub min_refs: i64,
    pub thesis_count: i64,
}

/// Rows with an empty reference count are excluded before the numeric cast.
/// Non-numeric text still fails the cast and surfaces as a database error.
pub async fn get_reference_stats(pool: &PgPool) -> Result<Vec<ReferenceStats>, AppError> {
    let rows = sqlx::query_as::<_, ReferenceStats>(
        r#"
        SELECT
            year,
            college,
            AVG(refs)::float8 AS avg_refs,
            MAX(refs) AS max_refs,
            MIN(refs) AS min_refs,
            COUNT(*) AS thesis_count
        FROM (
            SELECT
                "学位年度" AS year,
                "院系" AS college,
                CAST(NULLIF("参考文献总数", '') AS BIGINT) AS refs
            FROM thesis_detail
            WHERE "参考文献总数" IS NOT NULL
              AND "参考文献总数" <> ''
              AND "学位年度" >= $1
              AND "院系" = ANY($2)
        ) AS numbered
        GROUP BY year, college
        ORDER BY year ASC, avg_refs DESC
        "#,
    )
    .bind(STATS_START_YEAR)
    .bind(&REFERENCE_COLLEGES[..])
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

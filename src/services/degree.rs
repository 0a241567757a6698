//! Master/doctoral counts for the most recent degree years.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::thesis::{DegreeLevel, BREAKDOWN_YEARS};

/// Counts for one year, keyed by degree level label on the wire.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct LevelCounts {
    #[serde(rename = "硕士")]
    pub master: i64,
    #[serde(rename = "博士")]
    pub doctoral: i64,
}

/// Year (as a string key) to level counts. Always holds every breakdown year.
pub type DegreeBreakdown = BTreeMap<String, LevelCounts>;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LevelCountRow {
    pub year: i32,
    pub level: String,
    pub count: i64,
}

pub async fn get_breakdown(pool: &PgPool) -> Result<DegreeBreakdown, AppError> {
    let levels: Vec<&str> = DegreeLevel::ALL.iter().map(|l| l.label()).collect();

    let rows = sqlx::query_as::<_, LevelCountRow>(
        r#"
        SELECT "学位年度" AS year, "学生类型" AS level, COUNT(*) AS count
        FROM thesis_detail
        WHERE "学位年度" = ANY($1)
          AND "学生类型" = ANY($2)
        GROUP BY "学位年度", "学生类型"
        "#,
    )
    .bind(&BREAKDOWN_YEARS[..])
    .bind(&levels)
    .fetch_all(pool)
    .await?;

    Ok(fold_breakdown(&rows))
}

/// Fill the fixed year x level grid. Cells outside the grid are dropped.
pub fn fold_breakdown(rows: &[LevelCountRow]) -> DegreeBreakdown {
    let mut breakdown: DegreeBreakdown = BREAKDOWN_YEARS
        .iter()
        .map(|year| (year.to_string(), LevelCounts::default()))
        .collect();

    for row in rows {
        let Some(level) = DegreeLevel::from_label(&row.level) else {
            continue;
        };
        let Some(cell) = breakdown.get_mut(&row.year.to_string()) else {
            continue;
        };
        match level {
            DegreeLevel::Master => cell.master = row.count,
            DegreeLevel::Doctoral => cell.doctoral = row.count,
        }
    }

    breakdown
}

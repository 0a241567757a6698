//! Most-viewed theses ranking.

use serde::Serialize;
use sqlx::PgPool;

use crate::errors::AppError;

/// Number of theses in the ranking.
pub const RANKING_SIZE: i64 = 8;

/// Raw row from the views query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ViewsRow {
    pub title: Option<String>,
    pub views: i64,
}

/// One ranked thesis with its share of the top view count.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedThesis {
    pub rank: usize,
    pub title: Option<String>,
    pub views: i64,
    /// Percent of the highest view count, always two decimals.
    pub percent: String,
}

/// Fetch the top theses by view count.
pub async fn get_top_viewed(pool: &PgPool) -> Result<Vec<RankedThesis>, AppError> {
    let rows = sqlx::query_as::<_, ViewsRow>(
        r#"
        SELECT "中文标题" AS title, "点击量" AS views
        FROM thesis_detail
        ORDER BY "点击量" DESC, id ASC
        LIMIT $1
        "#,
    )
    .bind(RANKING_SIZE)
    .fetch_all(pool)
    .await?;

    Ok(rank(rows))
}

/// Number the rows and compute each one's percent of the maximum.
///
/// When the maximum is zero (or negative) every percent is `0.00`.
pub fn rank(rows: Vec<ViewsRow>) -> Vec<RankedThesis> {
    let max_views = rows.iter().map(|r| r.views).max().unwrap_or(0);

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| RankedThesis {
            rank: index + 1,
            percent: percent_of(row.views, max_views),
            title: row.title,
            views: row.views,
        })
        .collect()
}

fn percent_of(views: i64, max_views: i64) -> String {
    if max_views <= 0 {
        return "0.00".to_string();
    }
    let percent = views as f64 / max_views as f64 * 100.0;
    format!("{:.2}", (percent * 100.0).round() / 100.0)
}

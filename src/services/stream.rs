//! Yearly paper counts per college and the stream-graph layout built from them.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::thesis::STATS_START_YEAR;

/// Number of colleges kept in the stream graph.
pub const STREAM_TOP_COLLEGES: usize = 15;

#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct YearlyCount {
    pub year: i32,
    pub college: String,
    pub count: i64,
}

/// Stacked layers ready for drawing, centred on zero.
#[derive(Debug, Serialize)]
pub struct StreamGraph {
    pub years: Vec<i32>,
    /// Colleges in stacking order (highest total first).
    pub colleges: Vec<String>,
    pub layers: Vec<StreamLayer>,
}

#[derive(Debug, Serialize)]
pub struct StreamLayer {
    pub college: String,
    pub total: i64,
    pub points: Vec<StreamPoint>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct StreamPoint {
    pub year: i32,
    pub count: i64,
    pub y0: f64,
    pub y1: f64,
}

pub async fn get_yearly_counts(pool: &PgPool) -> Result<Vec<YearlyCount>, AppError> {
    let rows = sqlx::query_as::<_, YearlyCount>(
        r#"
        SELECT "学位年度" AS year, "院系" AS college, COUNT(*) AS count
        FROM thesis_detail
        WHERE "学位年度" >= $1
          AND "院系" IS NOT NULL AND "院系" <> ''
        GROUP BY "学位年度", "院系"
        ORDER BY year ASC, college ASC
        "#,
    )
    .bind(STATS_START_YEAR)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_stream_graph(pool: &PgPool) -> Result<StreamGraph, AppError> {
    let rows = get_yearly_counts(pool).await?;
    Ok(build_stream_graph(&rows, STREAM_TOP_COLLEGES))
}

/// Pick the `limit` colleges with the highest total. Ties go to the
/// lexically smaller college name.
pub fn top_colleges(rows: &[YearlyCount], limit: usize) -> Vec<(String, i64)> {
    let mut totals: HashMap<&str, i64> = HashMap::new();
    for row in rows {
        *totals.entry(row.college.as_str()).or_default() += row.count;
    }

    let mut ranked: Vec<(String, i64)> = totals
        .into_iter()
        .map(|(college, total)| (college.to_string(), total))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// Stack yearly counts of the top colleges with a silhouette offset: for
/// every year the stack spans `[-total/2, total/2]`.
pub fn build_stream_graph(rows: &[YearlyCount], limit: usize) -> StreamGraph {
    let ranked = top_colleges(rows, limit);

    let counts: HashMap<(i32, &str), i64> = rows
        .iter()
        .map(|r| ((r.year, r.college.as_str()), r.count))
        .collect();
    let years: Vec<i32> = rows
        .iter()
        .filter(|r| ranked.iter().any(|(college, _)| *college == r.college))
        .map(|r| r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut layers: Vec<StreamLayer> = ranked
        .iter()
        .map(|(college, total)| StreamLayer {
            college: college.clone(),
            total: *total,
            points: Vec::with_capacity(years.len()),
        })
        .collect();

    for &year in &years {
        let year_total: i64 = ranked
            .iter()
            .map(|(college, _)| counts.get(&(year, college.as_str())).copied().unwrap_or(0))
            .sum();

        let mut baseline = -(year_total as f64) / 2.0;
        for layer in &mut layers {
            let count = counts
                .get(&(year, layer.college.as_str()))
                .copied()
                .unwrap_or(0);
            let top = baseline + count as f64;
            layer.points.push(StreamPoint {
                year,
                count,
                y0: baseline,
                y1: top,
            });
            baseline = top;
        }
    }

    StreamGraph {
        years,
        colleges: ranked.into_iter().map(|(college, _)| college).collect(),
        layers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(year: i32, college: &str, count: i64) -> YearlyCount {
        YearlyCount {
            year,
            college: college.to_string(),
            count,
        }
    }

    #[test]
    fn ranks_by_total_descending() {
        let rows = vec![
            count(2004, "文学院", 3),
            count(2005, "文学院", 4),
            count(2004, "医学院", 10),
            count(2004, "商学院", 1),
        ];
        let top = top_colleges(&rows, 2);
        assert_eq!(
            top,
            vec![("医学院".to_string(), 10), ("文学院".to_string(), 7)]
        );
    }

    #[test]
    fn ties_break_lexically() {
        let rows = vec![
            count(2010, "c-college", 5),
            count(2010, "a-college", 5),
            count(2010, "b-college", 5),
        ];
        let top = top_colleges(&rows, 2);
        assert_eq!(top[0].0, "a-college");
        assert_eq!(top[1].0, "b-college");
    }

    #[test]
    fn limits_to_fifteen_colleges() {
        let rows: Vec<YearlyCount> = (0..20)
            .map(|i| count(2020, &format!("college-{i:02}"), 100 - i))
            .collect();
        let graph = build_stream_graph(&rows, STREAM_TOP_COLLEGES);
        assert_eq!(graph.colleges.len(), 15);
        assert_eq!(graph.layers.len(), 15);
        assert_eq!(graph.colleges[0], "college-00");
        assert!(!graph.colleges.contains(&"college-15".to_string()));
    }

    #[test]
    fn silhouette_is_centred_on_zero() {
        let rows = vec![
            count(2004, "A", 6),
            count(2004, "B", 2),
            count(2005, "A", 4),
        ];
        let graph = build_stream_graph(&rows, 15);
        assert_eq!(graph.years, vec![2004, 2005]);

        let a = &graph.layers[0];
        let b = &graph.layers[1];
        assert_eq!(a.college, "A");
        assert_eq!(a.points[0], StreamPoint { year: 2004, count: 6, y0: -4.0, y1: 2.0 });
        assert_eq!(b.points[0], StreamPoint { year: 2004, count: 2, y0: 2.0, y1: 4.0 });

        // B has no 2005 row: counted as zero, stacked on top of A.
        assert_eq!(a.points[1], StreamPoint { year: 2005, count: 4, y0: -2.0, y1: 2.0 });
        assert_eq!(b.points[1], StreamPoint { year: 2005, count: 0, y0: 2.0, y1: 2.0 });
    }

    #[test]
    fn years_come_only_from_kept_colleges() {
        let rows = vec![count(2004, "A", 9), count(2030, "Z", 1)];
        let graph = build_stream_graph(&rows, 1);
        assert_eq!(graph.years, vec![2004]);
    }

    #[test]
    fn empty_rows_give_empty_graph() {
        let graph = build_stream_graph(&[], 15);
        assert!(graph.years.is_empty());
        assert!(graph.layers.is_empty());
    }
}

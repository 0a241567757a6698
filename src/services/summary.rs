//! Headline counts: papers, supervisors, students, colleges.

use serde::Serialize;
use sqlx::PgPool;

use crate::errors::AppError;

/// Summary counts shown in the dashboard header.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct SummaryCounts {
    pub total_papers: i64,
    pub total_teachers: i64,
    pub total_students: i64,
    pub total_colleges: i64,
}

/// Fetch all summary counts in parallel queries.
pub async fn get_counts(pool: &PgPool) -> Result<SummaryCounts, AppError> {
    let (total_papers, total_teachers, total_students, total_colleges) = tokio::try_join!(
        fetch_paper_count(pool),
        fetch_teacher_count(pool),
        fetch_student_count(pool),
        fetch_college_count(pool),
    )?;

    Ok(SummaryCounts {
        total_papers,
        total_teachers,
        total_students,
        total_colleges,
    })
}

async fn fetch_paper_count(pool: &PgPool) -> Result<i64, AppError> {
    let row = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM thesis_detail")
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// Supervisors are counted per college: the same name in two colleges is two people.
/// Rows without a college have no counting key and are skipped.
async fn fetch_teacher_count(pool: &PgPool) -> Result<i64, AppError> {
    let row = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(DISTINCT ("第一导师姓名", "院系"))
        FROM thesis_detail
        WHERE "第一导师姓名" IS NOT NULL AND "第一导师姓名" <> ''
          AND "院系" IS NOT NULL AND "院系" <> ''
        "#,
    )
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Students are distinct (author, college) pairs, not rows.
async fn fetch_student_count(pool: &PgPool) -> Result<i64, AppError> {
    let row = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(DISTINCT ("作者", "院系"))
        FROM thesis_detail
        WHERE "作者" IS NOT NULL AND "作者" <> ''
          AND "院系" IS NOT NULL AND "院系" <> ''
        "#,
    )
    .fetch_one(pool)
    .await?;
    Ok(row)
}

async fn fetch_college_count(pool: &PgPool) -> Result<i64, AppError> {
    let row = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(DISTINCT "院系")
        FROM thesis_detail
        WHERE "院系" IS NOT NULL AND "院系" <> ''
        "#,
    )
    .fetch_one(pool)
    .await?;
    Ok(row)
}

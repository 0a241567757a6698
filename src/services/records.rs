//! "Records" panel: six single-row superlatives over the thesis table.
//!
//! Every sub-result has a placeholder value so the panel always carries all
//! six keys, even on an empty table.

use serde::Serialize;
use sqlx::PgPool;

use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct RecordsPanel {
    pub top_year: TopYear,
    pub top_phd_college: TopPhdCollege,
    pub top_teacher: TopTeacher,
    pub top_college: TopCollege,
    pub top_reference: TopReference,
    pub top_doctor_college: TopDoctorCollege,
}

/// Degree year with the most theses.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct TopYear {
    pub year: Option<String>,
    pub count: i64,
}

/// College with the highest share of doctoral theses.
#[derive(Debug, Default, Serialize, PartialEq, sqlx::FromRow)]
pub struct TopPhdCollege {
    pub college: Option<String>,
    pub phd_count: i64,
    pub total_count: i64,
    pub phd_ratio: f64,
}

/// Supervisor (within one college) with the most distinct students.
#[derive(Debug, Default, Serialize, PartialEq, sqlx::FromRow)]
pub struct TopTeacher {
    pub teacher: Option<String>,
    pub college: Option<String>,
    pub student_count: i64,
}

#[derive(Debug, Default, Serialize, PartialEq, sqlx::FromRow)]
pub struct TopCollege {
    pub college: Option<String>,
    pub paper_count: i64,
}

/// Highest reference count and every thesis that reaches it.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct TopReference {
    pub max_refs: i64,
    pub students: Vec<ReferenceHolder>,
}

#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct ReferenceHolder {
    pub id: Option<String>,
    pub name: Option<String>,
    pub refs: Option<String>,
}

#[derive(Debug, Default, Serialize, PartialEq, sqlx::FromRow)]
pub struct TopDoctorCollege {
    pub college: Option<String>,
    pub doctor_total: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct YearCountRow {
    year: Option<i32>,
    count: i64,
}

/// Fetch all six sub-results in parallel queries.
pub async fn get_panel(pool: &PgPool) -> Result<RecordsPanel, AppError> {
    let (top_year, top_phd_college, top_teacher, top_college, top_reference, top_doctor_college) = tokio::try_join!(
        fetch_top_year(pool),
        fetch_top_phd_college(pool),
        fetch_top_teacher(pool),
        fetch_top_college(pool),
        fetch_top_reference(pool),
        fetch_top_doctor_college(pool),
    )?;

    Ok(RecordsPanel {
        top_year,
        top_phd_college: top_phd_college.unwrap_or_default(),
        top_teacher: top_teacher.unwrap_or_default(),
        top_college: top_college.unwrap_or_default(),
        top_reference,
        top_doctor_college: top_doctor_college.unwrap_or_default(),
    })
}

async fn fetch_top_year(pool: &PgPool) -> Result<TopYear, AppError> {
    let row = sqlx::query_as::<_, YearCountRow>(
        r#"
        SELECT "学位年度" AS year, COUNT(*) AS count
        FROM thesis_detail
        GROUP BY "学位年度"
        ORDER BY count DESC, year DESC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    Ok(row
        .map(|r| TopYear {
            year: r.year.map(|y| y.to_string()),
            count: r.count,
        })
        .unwrap_or_default())
}

async fn fetch_top_phd_college(pool: &PgPool) -> Result<Option<TopPhdCollege>, AppError> {
    let row = sqlx::query_as::<_, TopPhdCollege>(
        r#"
        SELECT
            "院系" AS college,
            SUM(CASE WHEN "学生类型" = '博士' THEN 1 ELSE 0 END) AS phd_count,
            COUNT(*) AS total_count,
            SUM(CASE WHEN "学生类型" = '博士' THEN 1 ELSE 0 END)::float8 / COUNT(*) AS phd_ratio
        FROM thesis_detail
        WHERE "院系" IS NOT NULL AND "院系" <> ''
        GROUP BY "院系"
        ORDER BY phd_ratio DESC, total_count DESC, college ASC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

async fn fetch_top_teacher(pool: &PgPool) -> Result<Option<TopTeacher>, AppError> {
    let row = sqlx::query_as::<_, TopTeacher>(
        r#"
        SELECT
            "第一导师姓名" AS teacher,
            "院系" AS college,
            COUNT(DISTINCT "作者") AS student_count
        FROM thesis_detail
        WHERE "第一导师姓名" IS NOT NULL AND "第一导师姓名" <> ''
        GROUP BY "第一导师姓名", "院系"
        ORDER BY student_count DESC, teacher ASC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

async fn fetch_top_college(pool: &PgPool) -> Result<Option<TopCollege>, AppError> {
    let row = sqlx::query_as::<_, TopCollege>(
        r#"
        SELECT "院系" AS college, COUNT(*) AS paper_count
        FROM thesis_detail
        WHERE "院系" IS NOT NULL AND "院系" <> ''
        GROUP BY "院系"
        ORDER BY paper_count DESC, college ASC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Reference counts are text; empty values are skipped before the cast.
async fn fetch_top_reference(pool: &PgPool) -> Result<TopReference, AppError> {
    let max_refs = sqlx::query_scalar::<_, Option<i64>>(
        r#"
        SELECT MAX(CAST(NULLIF("参考文献总数", '') AS BIGINT))
        FROM thesis_detail
        "#,
    )
    .fetch_one(pool)
    .await?
    .unwrap_or(0);

    if max_refs <= 0 {
        return Ok(TopReference::default());
    }

    let students = sqlx::query_as::<_, ReferenceHolder>(
        r#"
        SELECT "学号" AS id, "作者" AS name, "参考文献总数" AS refs
        FROM thesis_detail
        WHERE CAST(NULLIF("参考文献总数", '') AS BIGINT) = $1
        ORDER BY id ASC
        "#,
    )
    .bind(max_refs)
    .fetch_all(pool)
    .await?;

    Ok(TopReference { max_refs, students })
}

async fn fetch_top_doctor_college(pool: &PgPool) -> Result<Option<TopDoctorCollege>, AppError> {
    let row = sqlx::query_as::<_, TopDoctorCollege>(
        r#"
        SELECT "院系" AS college, COUNT(*) AS doctor_total
        FROM thesis_detail
        WHERE "学生类型" = '博士'
          AND "院系" IS NOT NULL AND "院系" <> ''
        GROUP BY "院系"
        ORDER BY doctor_total DESC, college ASC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

//! Database connection pool and migration utilities.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::models::thesis::ThesisRecord;

/// Create a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Apply the bundled schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Insert one thesis row. Only used by the seed binary and tests; the API is read-only.
pub async fn insert_thesis(pool: &PgPool, record: &ThesisRecord) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO thesis_detail
            ("学号", "作者", "第一导师姓名", "院系", "学位年度", "学生类型", "中文标题", "点击量", "参考文献总数")
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#,
    )
    .bind(&record.student_id)
    .bind(&record.author)
    .bind(&record.supervisor)
    .bind(&record.college)
    .bind(record.degree_year)
    .bind(record.degree_level.map(|level| level.label()))
    .bind(&record.title)
    .bind(record.views)
    .bind(&record.reference_count)
    .fetch_one(pool)
    .await
}

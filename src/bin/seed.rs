//! Seed script for development — populates a fresh database with sample theses.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires the `DATABASE_URL` environment variable (reads .env).

use sqlx::PgPool;
use thesis_dashboard::db;
use thesis_dashboard::models::thesis::{DegreeLevel, ThesisRecord, REFERENCE_COLLEGES};

const SUPERVISORS: [&str; 4] = ["王建国", "李文华", "张海燕", "陈志强"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = db::create_pool(&db_url, 5).await?;

    // Run migrations first
    db::migrate(&pool).await?;

    println!("=== Thesis Dashboard Seed Script ===");

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM thesis_detail")
        .fetch_one(&pool)
        .await?;
    if existing > 0 {
        println!("[skip] thesis_detail already holds {existing} rows");
        return Ok(());
    }

    let inserted = seed_theses(&pool).await?;

    println!("\n=== Seed complete! ===");
    println!("Inserted {inserted} theses");

    Ok(())
}

/// Deterministic spread of theses over colleges, years and degree levels.
async fn seed_theses(pool: &PgPool) -> anyhow::Result<usize> {
    let mut inserted = 0;

    for (c, college) in REFERENCE_COLLEGES.iter().enumerate() {
        for year in 2004..=2024 {
            let per_year = 1 + (c + year as usize) % 4;
            for n in 0..per_year {
                let level = if (c + n) % 3 == 0 {
                    DegreeLevel::Doctoral
                } else {
                    DegreeLevel::Master
                };
                let serial = inserted + 1;
                let record = ThesisRecord {
                    student_id: Some(format!("{year}{serial:05}")),
                    author: Some(format!("学生{serial}")),
                    supervisor: Some(SUPERVISORS[(c + n) % SUPERVISORS.len()].to_string()),
                    college: Some((*college).to_string()),
                    degree_year: Some(year),
                    degree_level: Some(level),
                    title: Some(format!("{college}{year}年度研究论文（{}）", n + 1)),
                    views: ((serial * 37) % 1000) as i64,
                    reference_count: if serial % 10 == 0 {
                        Some(String::new())
                    } else {
                        Some((40 + (serial * 13) % 160).to_string())
                    },
                };
                db::insert_thesis(pool, &record).await?;
                inserted += 1;
            }
        }
        println!("[done] Seeded {college}");
    }

    Ok(inserted)
}

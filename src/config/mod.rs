use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub similarity_csv: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        let static_dir = PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()));
        let similarity_csv = env::var("SIMILARITY_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| static_dir.join("final_data.csv"));

        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3020".to_string())
                .parse()
                .unwrap_or(3020),
            static_dir,
            similarity_csv,
        })
    }

    /// Configuration for in-process tests: no environment lookups.
    pub fn for_tests(database_url: &str, static_dir: impl Into<PathBuf>) -> Self {
        let static_dir = static_dir.into();
        Self {
            database_url: database_url.to_string(),
            database_max_connections: 2,
            host: "127.0.0.1".to_string(),
            port: 0,
            similarity_csv: static_dir.join("final_data.csv"),
            static_dir,
        }
    }
}

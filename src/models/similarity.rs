//! Per-paper similarity scores read from `final_data.csv`.

use serde::{Deserialize, Serialize};

/// Institution a similarity sample belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Source {
    Nankai,
    #[serde(rename = "MIT")]
    Mit,
}

impl Source {
    /// MIT rows carry "MIT" somewhere in the college column.
    pub fn classify(college: &str) -> Self {
        if college.contains("MIT") {
            Self::Mit
        } else {
            Self::Nankai
        }
    }
}

/// Raw CSV row.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityRow {
    pub year: i32,
    pub similarity: f64,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub supervisor: Option<String>,
}

/// CSV row with its source resolved.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityRecord {
    pub year: i32,
    pub similarity: f64,
    pub college: String,
    pub title: String,
    pub author: Option<String>,
    pub supervisor: Option<String>,
    pub source: Source,
}

impl From<SimilarityRow> for SimilarityRecord {
    fn from(row: SimilarityRow) -> Self {
        let source = Source::classify(&row.college);
        Self {
            year: row.year,
            similarity: row.similarity,
            college: row.college,
            title: row.title,
            author: row.author.filter(|a| !a.is_empty()),
            supervisor: row.supervisor.filter(|s| !s.is_empty()),
            source,
        }
    }
}

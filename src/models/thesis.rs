//! Thesis record model and the fixed vocabulary of the `thesis_detail` table.

use serde::{Deserialize, Serialize};

/// Degree years shown in the degree-level breakdown.
pub const BREAKDOWN_YEARS: [i32; 3] = [2022, 2023, 2024];

/// First degree year included in the reference and stream statistics.
pub const STATS_START_YEAR: i32 = 2004;

/// Colleges tracked by the reference-count statistics.
pub const REFERENCE_COLLEGES: [&str; 11] = [
    "化学学院",
    "医学院",
    "历史学院",
    "商学院",
    "外国语学院",
    "数学科学学院",
    "文学院",
    "物理科学学院",
    "环境科学与工程学院",
    "生命科学学院",
    "经济学院",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DegreeLevel {
    #[serde(rename = "硕士")]
    Master,
    #[serde(rename = "博士")]
    Doctoral,
}

impl DegreeLevel {
    pub const ALL: [DegreeLevel; 2] = [DegreeLevel::Master, DegreeLevel::Doctoral];

    /// Label stored in the `学生类型` column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Master => "硕士",
            Self::Doctoral => "博士",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "硕士" => Some(Self::Master),
            "博士" => Some(Self::Doctoral),
            _ => None,
        }
    }
}

/// One thesis as stored in `thesis_detail`.
///
/// The API never writes these; the struct is used by the seed binary and
/// the integration tests to load fixture rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThesisRecord {
    pub student_id: Option<String>,
    pub author: Option<String>,
    pub supervisor: Option<String>,
    pub college: Option<String>,
    pub degree_year: Option<i32>,
    pub degree_level: Option<DegreeLevel>,
    pub title: Option<String>,
    pub views: i64,
    /// Stored as text; empty means unknown.
    pub reference_count: Option<String>,
}

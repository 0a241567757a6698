//! Aggregation queries and chart shaping.

pub mod degree;
pub mod density;
pub mod ranking;
pub mod records;
pub mod references;
pub mod similarity;
pub mod stream;
pub mod summary;

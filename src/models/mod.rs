//! Data models for the thesis table and the similarity dataset.

pub mod similarity;
pub mod thesis;

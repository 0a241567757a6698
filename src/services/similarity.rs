//! Similarity violin plot: CSV loading and per-year density curves.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::similarity::{SimilarityRecord, SimilarityRow, Source};
use crate::services::density;

/// Target number of density sample points across the y domain.
const DENSITY_TICKS: usize = 100;

/// The y domain is split into this many bandwidths.
const BANDWIDTH_DIVISOR: f64 = 25.0;

/// Upper clamp of the y domain.
const Y_CEILING: f64 = 1.05;

#[derive(Debug, Serialize)]
pub struct ViolinPlot<'a> {
    pub y_domain: [f64; 2],
    pub bandwidth: f64,
    pub max_density: f64,
    pub years: Vec<YearDensity>,
    pub points: &'a [SimilarityRecord],
}

/// Density curves for one year. A curve is absent when its group has fewer
/// than two samples.
#[derive(Debug, Serialize)]
pub struct YearDensity {
    pub year: i32,
    pub nankai: Option<Vec<[f64; 2]>>,
    pub mit: Option<Vec<[f64; 2]>>,
}

/// Read and classify every row of the similarity CSV.
pub fn load_records(path: &Path) -> Result<Vec<SimilarityRecord>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for row in reader.deserialize::<SimilarityRow>() {
        records.push(SimilarityRecord::from(row?));
    }

    tracing::info!(path = %path.display(), rows = records.len(), "Loaded similarity dataset");
    Ok(records)
}

/// Async wrapper that keeps the blocking file read off the runtime workers.
pub async fn load_records_async(path: std::path::PathBuf) -> Result<Vec<SimilarityRecord>, AppError> {
    tokio::task::spawn_blocking(move || load_records(&path))
        .await
        .map_err(|e| AppError::Internal(format!("similarity loader panicked: {e}")))?
}

/// y domain padded by 10% of the spread, clamped to `[0, 1.05]`.
pub fn y_domain(records: &[SimilarityRecord]) -> [f64; 2] {
    let mut values = records.iter().map(|r| r.similarity).filter(|v| v.is_finite());
    let Some(first) = values.next() else {
        return [0.0, 0.0];
    };
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let pad = (max - min) * 0.1;
    [(min - pad).max(0.0), (max + pad).min(Y_CEILING)]
}

pub fn build_violin(records: &[SimilarityRecord]) -> ViolinPlot<'_> {
    let domain = y_domain(records);
    let bandwidth = (domain[1] - domain[0]) / BANDWIDTH_DIVISOR;
    let ticks = density::nice_ticks(domain[0], domain[1], DENSITY_TICKS);

    let mut groups: BTreeMap<i32, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for record in records {
        let (nankai, mit) = groups.entry(record.year).or_default();
        match record.source {
            Source::Nankai => nankai.push(record.similarity),
            Source::Mit => mit.push(record.similarity),
        }
    }

    let curve = |samples: &[f64]| {
        (samples.len() > 1 && bandwidth > 0.0).then(|| density::kde(bandwidth, &ticks, samples))
    };

    let years: Vec<YearDensity> = groups
        .into_iter()
        .map(|(year, (nankai, mit))| YearDensity {
            year,
            nankai: curve(&nankai),
            mit: curve(&mit),
        })
        .collect();

    let max_density = years
        .iter()
        .flat_map(|y| y.nankai.iter().chain(y.mit.iter()))
        .flatten()
        .map(|point| point[1])
        .fold(0.0, f64::max);

    ViolinPlot {
        y_domain: domain,
        bandwidth,
        max_density,
        years,
        points: records,
    }
}

//! Per-view dataset cache.
//!
//! Holds one loaded payload for a single chart. There is no expiry: the
//! value lives until the process restarts. A failed load leaves the cache
//! empty so the next caller tries again.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::OnceCell;

#[derive(Debug)]
pub struct ViewCache<T> {
    cell: OnceCell<Arc<T>>,
}

impl<T> Default for ViewCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewCache<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cached payload, loading it with `load` on first use.
    ///
    /// Concurrent first callers wait for a single load.
    pub async fn get_or_load<F, Fut, E>(&self, load: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let value = self
            .cell
            .get_or_try_init(|| async move { load().await.map(Arc::new) })
            .await?;
        Ok(Arc::clone(value))
    }

    #[cfg(test)]
    fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

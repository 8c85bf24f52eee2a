//! The sync driver: fetch, diff, update.

use crate::config::SyncerConfig;
use crate::error::{ClientError, ClientResult};
use crate::service::{ProductRevision, ProductService};
use catsync_engine::build_actions_with;
use catsync_model::ProductData;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

/// Outcome of one sync call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// An update was applied.
    Updated {
        /// Number of actions in the applied list.
        actions: usize,
        /// The remote version after the update.
        version: u64,
    },
    /// Target and current were already equal; no update was sent.
    UpToDate,
    /// The resource does not exist remotely; nothing to sync.
    Missing,
}

/// Counters across the life of one syncer.
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    /// Syncs that applied an update.
    pub updated: u64,
    /// Syncs that found nothing to do.
    pub up_to_date: u64,
    /// Syncs whose resource was gone.
    pub missing: u64,
    /// Syncs that surfaced an error.
    pub failed: u64,
    /// Version conflicts answered with a refetch-and-recompute.
    pub conflict_recomputes: u64,
    /// Transport-level retries performed.
    pub retries: u64,
}

/// Drives one resource's synchronization against a [`ProductService`].
///
/// The driver itself holds no per-resource state; one instance can be shared
/// across threads and used for many resources. Failure of one resource's
/// sync never affects another's.
pub struct Syncer<S: ProductService> {
    service: S,
    config: SyncerConfig,
    stats: RwLock<SyncStats>,
}

impl<S: ProductService> Syncer<S> {
    /// Creates a syncer.
    pub fn new(service: S, config: SyncerConfig) -> Self {
        Self {
            service,
            config,
            stats: RwLock::new(SyncStats::default()),
        }
    }

    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> SyncStats {
        self.stats.read().clone()
    }

    /// Returns the underlying service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Synchronizes one resource to its target representation.
    ///
    /// Policy per outcome:
    /// - missing resource (404): nothing to sync, no retry
    /// - version conflict (409): refetch, recompute, and resubmit, up to the
    ///   configured cap
    /// - retryable transport errors: bounded exponential backoff
    /// - validation and fatal errors: surfaced to the caller
    pub fn sync(&self, id: &str, target: &ProductData) -> ClientResult<SyncOutcome> {
        let mut revision = match self.fetch_or_fail(id)? {
            Some(revision) => revision,
            None => return Ok(self.record_missing(id)),
        };

        let mut recomputes = 0;
        loop {
            let actions = build_actions_with(target, &revision.data, &self.config.diff);
            if actions.is_empty() {
                debug!(id, "representation already matches target");
                self.stats.write().up_to_date += 1;
                return Ok(SyncOutcome::UpToDate);
            }

            match self.update(id, revision.version, &actions) {
                Ok(updated) => {
                    info!(id, actions = actions.len(), version = updated.version, "synced");
                    self.stats.write().updated += 1;
                    return Ok(SyncOutcome::Updated {
                        actions: actions.len(),
                        version: updated.version,
                    });
                }
                Err(ClientError::VersionConflict { expected, actual })
                    if recomputes < self.config.max_conflict_recomputes =>
                {
                    warn!(id, expected, ?actual, "version conflict, recomputing");
                    recomputes += 1;
                    self.stats.write().conflict_recomputes += 1;
                    revision = match self.fetch_or_fail(id)? {
                        Some(revision) => revision,
                        None => return Ok(self.record_missing(id)),
                    };
                }
                Err(ClientError::NotFound(_)) => return Ok(self.record_missing(id)),
                Err(e) => {
                    self.stats.write().failed += 1;
                    return Err(e);
                }
            }
        }
    }

    fn record_missing(&self, id: &str) -> SyncOutcome {
        info!(id, "resource gone, nothing to sync");
        self.stats.write().missing += 1;
        SyncOutcome::Missing
    }

    fn fetch_or_fail(&self, id: &str) -> ClientResult<Option<ProductRevision>> {
        self.with_retry(|| self.service.fetch_by_id(id))
            .inspect_err(|_| self.stats.write().failed += 1)
    }

    fn update(
        &self,
        id: &str,
        version: u64,
        actions: &[catsync_actions::UpdateAction],
    ) -> ClientResult<ProductRevision> {
        self.with_retry(|| self.service.update(id, version, actions))
    }

    /// Runs an operation with bounded backoff on retryable transport errors.
    fn with_retry<T>(&self, op: impl Fn() -> ClientResult<T>) -> ClientResult<T> {
        let retry = &self.config.retry;
        let mut last_error = None;

        for attempt in 0..retry.max_attempts {
            if attempt > 0 {
                std::thread::sleep(retry.delay_for_attempt(attempt));
                self.stats.write().retries += 1;
            }
            match op() {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt + 1 < retry.max_attempts => {
                    warn!(error = %e, attempt, "transient error, will retry");
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ClientError::transport_fatal("no attempts made")))
    }
}

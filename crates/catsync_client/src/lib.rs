//! # Catsync Client
//!
//! Service-client surface and sync driver for catsync.
//!
//! This crate provides:
//! - `ProductService`, the trait the external REST client implements
//! - `Syncer`, the fetch → diff → update driver with the recommended
//!   failure policy (404 means nothing to sync, 409 means refetch and
//!   recompute, transient transport errors get bounded backoff)
//! - `ClientError` and retry/backoff configuration
//! - `MockService` for testing callers without a network
//!
//! The diff itself lives in `catsync_engine`; this crate only decides when
//! to run it and what to do with the result.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod service;
mod syncer;

pub use config::{RetryConfig, SyncerConfig};
pub use error::{ClientError, ClientResult};
pub use service::{MockService, ProductRevision, ProductService, RecordedUpdate};
pub use syncer::{SyncOutcome, SyncStats, Syncer};

//! # Catsync Actions
//!
//! Update-action types and action-group ordering for catsync.
//!
//! This crate provides:
//! - `UpdateAction`, the closed sum type of every partial-update action
//! - `ActionGroup` and `GROUP_ORDER`, the fixed group ordering contract
//! - the total mapping from action to group
//!
//! Actions are immutable, serializable, and carry only the data needed to
//! apply the change (the target value, never a before/after pair). The wire
//! shape is `{"action": "<kind>", ...payload}` with camelCase field names,
//! ready to be sent as one element of a partial-update request body.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod group;

pub use action::UpdateAction;
pub use group::{ActionGroup, GROUP_ORDER};

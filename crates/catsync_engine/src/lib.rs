//! # Catsync Engine
//!
//! Diff-action engine for catsync.
//!
//! Given a target (desired) and a current (remote) product representation,
//! the engine computes the ordered sequence of partial-update actions that
//! transforms the remote state into the desired state. It performs no I/O:
//! callers fetch the current representation, run [`build_actions`], and hand
//! the result to the service client's update call.
//!
//! ## Key Invariants
//!
//! - The action list's group order is fixed: base, references, prices,
//!   attributes, images, variants, categories
//! - Within a group, removals precede additions
//! - Equal representations produce an empty sequence
//! - Output is deterministic: identical inputs yield identical output
//! - Absent optional fields are empty values, never errors
//!
//! Every invocation is independent; inputs are taken by read-only reference
//! and no global state is touched, so concurrent diffs over different
//! resources need no coordination.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod compare;
mod differs;
mod options;
mod registry;

pub use compare::{keyed_list_diff, set_diff, KeyedDelta, SetDelta};
pub use options::{DiffOptions, ImageReorder};
pub use registry::{registry, DifferFn};

use catsync_actions::UpdateAction;
use catsync_model::ProductData;
use tracing::debug;

/// Computes the action sequence transforming `current` into `target`,
/// using default [`DiffOptions`].
pub fn build_actions(target: &ProductData, current: &ProductData) -> Vec<UpdateAction> {
    build_actions_with(target, current, &DiffOptions::default())
}

/// Computes the action sequence transforming `current` into `target`.
///
/// Runs every registered differ in group order and concatenates the
/// results. Actions are never reordered, deduplicated, or merged across
/// groups.
pub fn build_actions_with(
    target: &ProductData,
    current: &ProductData,
    options: &DiffOptions,
) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    for (group, differ) in registry() {
        let group_actions = differ(target, current, options);
        if !group_actions.is_empty() {
            debug!(group = %group, count = group_actions.len(), "group produced actions");
        }
        actions.extend(group_actions);
    }
    actions
}

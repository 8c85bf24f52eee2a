//! One differ per action group.
//!
//! Each differ is a pure function `(target, current, options) -> Vec<UpdateAction>`
//! producing actions for its group only. Differs never fail on absent
//! optional fields; absence is an empty value of the field's kind.

pub(crate) mod attributes;
pub(crate) mod base;
pub(crate) mod categories;
pub(crate) mod images;
pub(crate) mod prices;
pub(crate) mod references;
pub(crate) mod variants;

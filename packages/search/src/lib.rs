#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter engines over catalog slices.
//!
//! Two independent, order-aware passes: [`attributes`] narrows by
//! categorical flags and [`proximity`] narrows by distance from a center
//! point. Both borrow from the catalog rather than cloning records; the
//! picker composes them (attributes first, then proximity).

pub mod attributes;
pub mod proximity;

pub use attributes::filter_by_attributes;
pub use proximity::filter_by_proximity;

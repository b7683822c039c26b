//! Compile-time registry of region source files.
//!
//! Each entry is a `(name, toml_content)` pair embedded via `include_str!`.
//! Adding a region requires creating a TOML file in `sources/` and adding
//! a corresponding entry here.

use crate::source_def::RegionSource;

/// Number of registered region sources. Updated when new regions are
/// added. Enforced by a test.
#[cfg(test)]
const EXPECTED_SOURCE_COUNT: usize = 3;

/// Embedded TOML source definitions.
const SOURCE_TOMLS: &[(&str, &str)] = &[
    ("seoul", include_str!("../sources/seoul.toml")),
    ("gyeonggi", include_str!("../sources/gyeonggi.toml")),
    ("incheon", include_str!("../sources/incheon.toml")),
];

/// Returns all registered region sources.
///
/// # Panics
///
/// Panics if any embedded TOML file fails to parse. Since these are
/// compile-time constants, parse failures indicate a development error
/// and are caught during CI.
#[must_use]
pub fn all_sources() -> Vec<RegionSource> {
    SOURCE_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            RegionSource::from_toml(name, toml_str).unwrap_or_else(|e| panic!("{e}"))
        })
        .collect()
}

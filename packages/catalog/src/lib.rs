#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The static area catalog.
//!
//! Region source files are embedded as TOML at compile time (see
//! [`registry`]), parsed and validated once into an immutable [`Catalog`]
//! value. Consumers receive a constructed catalog rather than reading
//! module-level globals, so tests can run against small synthetic catalogs
//! built through [`Catalog::from_parts`].

pub mod presets;
pub mod registry;
pub mod source_def;

use std::collections::BTreeSet;

use nightmap_area_models::{AreaGroup, LocationRecord};
use thiserror::Error;

use crate::source_def::RegionSource;

/// Errors that can occur while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A region source file failed to parse.
    #[error("Failed to parse region source '{name}': {source}")]
    Parse {
        /// Registry name of the offending source.
        name: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Two records share an id.
    #[error("Duplicate record id '{id}'")]
    DuplicateRecordId {
        /// The duplicated id.
        id: String,
    },

    /// Two groups share an id.
    #[error("Duplicate group id {group_id}")]
    DuplicateGroupId {
        /// The duplicated id.
        group_id: u32,
    },

    /// A record's coordinates are outside WGS84 degree ranges.
    #[error("Record '{id}' has out-of-range coordinates ({lon}, {lat})")]
    CoordinateOutOfRange {
        /// The offending record's id.
        id: String,
        /// Longitude as given.
        lon: f64,
        /// Latitude as given.
        lat: f64,
    },

    /// A group has no member tokens.
    #[error("Group {group_id} has an empty keyword list")]
    EmptyGroup {
        /// The offending group's id.
        group_id: u32,
    },
}

/// The immutable area catalog: records, groups, and nothing else.
///
/// Built once at startup and shared read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<LocationRecord>,
    groups: Vec<AreaGroup>,
}

impl Catalog {
    /// Builds and validates a catalog from records and groups.
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate record ids, duplicate group ids,
    /// out-of-range coordinates, or empty group keyword lists.
    pub fn from_parts(
        records: Vec<LocationRecord>,
        groups: Vec<AreaGroup>,
    ) -> Result<Self, CatalogError> {
        let mut record_ids = BTreeSet::new();
        for record in &records {
            if !record_ids.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateRecordId {
                    id: record.id.clone(),
                });
            }
            if !record.coordinates.in_range() {
                return Err(CatalogError::CoordinateOutOfRange {
                    id: record.id.clone(),
                    lon: record.coordinates.lon,
                    lat: record.coordinates.lat,
                });
            }
        }

        let mut group_ids = BTreeSet::new();
        let record_names: BTreeSet<&str> = records.iter().map(|r| r.name.as_str()).collect();
        for group in &groups {
            if !group_ids.insert(group.group_id) {
                return Err(CatalogError::DuplicateGroupId {
                    group_id: group.group_id,
                });
            }
            if group.keywords.is_empty() {
                return Err(CatalogError::EmptyGroup {
                    group_id: group.group_id,
                });
            }
            for token in &group.keywords {
                if !record_names.contains(token.as_str()) {
                    // Tolerated: the token simply never resolves to a record.
                    log::warn!(
                        "Group {} ({}) references unknown area {token:?}",
                        group.group_id,
                        group.name
                    );
                }
            }
        }

        log::info!(
            "Loaded area catalog: {} records, {} groups",
            records.len(),
            groups.len()
        );

        Ok(Self { records, groups })
    }

    /// Builds a catalog from parsed region sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the combined records and groups fail validation.
    pub fn from_sources(sources: Vec<RegionSource>) -> Result<Self, CatalogError> {
        let mut records = Vec::new();
        let mut groups = Vec::new();

        for source in sources {
            let region_name = source.name.clone();
            records.extend(
                source
                    .areas
                    .into_iter()
                    .map(|area| area.into_record(&region_name)),
            );
            groups.extend(
                source
                    .groups
                    .into_iter()
                    .map(|group| group.into_group(&region_name)),
            );
        }

        Self::from_parts(records, groups)
    }

    /// Builds the catalog from the embedded region sources.
    ///
    /// # Panics
    ///
    /// Panics if the embedded data is malformed. Like the registry itself,
    /// this is compile-time constant data; failures are caught in CI.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_sources(registry::all_sources())
            .unwrap_or_else(|e| panic!("Embedded area catalog is invalid: {e}"))
    }

    /// All records in catalog order.
    #[must_use]
    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// All groups in source order.
    #[must_use]
    pub fn groups(&self) -> &[AreaGroup] {
        &self.groups
    }

    /// Looks up a record by exact display name.
    #[must_use]
    pub fn record_by_name(&self, name: &str) -> Option<&LocationRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn record_by_id(&self, id: &str) -> Option<&LocationRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightmap_area_models::Coordinates;

    fn record(id: &str, name: &str, lon: f64, lat: f64) -> LocationRecord {
        LocationRecord {
            id: id.into(),
            name: name.into(),
            city: "서울".into(),
            district: "강남구".into(),
            neighborhood: None,
            coordinates: Coordinates::new(lon, lat),
            is_popular: false,
            density_tier: None,
        }
    }

    #[test]
    fn builtin_catalog_loads_and_validates() {
        let catalog = Catalog::builtin();
        assert!(catalog.records().len() >= 20);
        assert!(catalog.groups().len() >= 9);
    }

    #[test]
    fn builtin_record_names_are_unique() {
        let catalog = Catalog::builtin();
        let mut seen = BTreeSet::new();
        for r in catalog.records() {
            assert!(seen.insert(&r.name), "Duplicate record name: {}", r.name);
        }
    }

    #[test]
    fn builtin_group_keywords_all_resolve() {
        let catalog = Catalog::builtin();
        for group in catalog.groups() {
            for token in &group.keywords {
                assert!(
                    catalog.record_by_name(token).is_some(),
                    "Group {} keyword {token:?} has no record",
                    group.name
                );
            }
        }
    }

    #[test]
    fn lookup_by_name_and_id() {
        let catalog = Catalog::builtin();

        let gangnam = catalog.record_by_name("강남역").unwrap();
        assert_eq!(gangnam.id, "gangnam-station");
        assert_eq!(gangnam.city, "서울");
        assert!(gangnam.is_popular);

        assert!(catalog.record_by_id("bupyeong-station").is_some());
        assert!(catalog.record_by_name("없는역").is_none());
    }

    #[test]
    fn duplicate_record_id_is_rejected() {
        let records = vec![
            record("dup", "가", 127.0, 37.5),
            record("dup", "나", 127.1, 37.5),
        ];
        let err = Catalog::from_parts(records, vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateRecordId { .. }));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let records = vec![record("bad", "가", 181.0, 37.5)];
        let err = Catalog::from_parts(records, vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::CoordinateOutOfRange { .. }));
    }

    #[test]
    fn empty_group_is_rejected() {
        let groups = vec![AreaGroup {
            group_id: 1,
            name: "빈권역".into(),
            region: "서울".into(),
            keywords: vec![],
            center: None,
            nightlife_zone: None,
        }];
        let err = Catalog::from_parts(vec![], groups).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyGroup { .. }));
    }

    #[test]
    fn duplicate_group_id_is_rejected() {
        let groups = vec![
            AreaGroup {
                group_id: 7,
                name: "가".into(),
                region: "서울".into(),
                keywords: vec!["가역".into()],
                center: None,
                nightlife_zone: None,
            },
            AreaGroup {
                group_id: 7,
                name: "나".into(),
                region: "서울".into(),
                keywords: vec!["나역".into()],
                center: None,
                nightlife_zone: None,
            },
        ];
        let err = Catalog::from_parts(vec![], groups).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateGroupId { .. }));
    }
}

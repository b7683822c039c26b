#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Area catalog domain types.
//!
//! This crate defines the shared vocabulary for the nightmap location-search
//! core: catalog records, area groups, the nightlife density taxonomy, and
//! the filter/selection value types exchanged between the engines. Types
//! here are plain data; the engines that interpret them live in the
//! `nightmap_search` and `nightmap_selection` crates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A WGS84 coordinate pair in decimal degrees, longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Longitude in degrees, valid range [-180, 180].
    pub lon: f64,
    /// Latitude in degrees, valid range [-90, 90].
    pub lat: f64,
}

impl Coordinates {
    /// Creates a coordinate pair from `(lon, lat)` degrees.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns whether both components are inside the WGS84 degree ranges.
    #[must_use]
    pub fn in_range(self) -> bool {
        (-180.0..=180.0).contains(&self.lon) && (-90.0..=90.0).contains(&self.lat)
    }
}

/// Coarse nightlife venue concentration for an area, from 1 (low) to 3 (high).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DensityTier {
    /// Level 1: scattered venues, quiet after midnight
    Low = 1,
    /// Level 2: an established strip with steady turnover
    Medium = 2,
    /// Level 3: a dense entertainment district
    High = 3,
}

impl DensityTier {
    /// Returns the numeric value of this tier.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Creates a tier from a numeric value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range 1-3.
    pub const fn from_value(value: u8) -> Result<Self, InvalidTierError> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            _ => Err(InvalidTierError { value }),
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

/// Error returned when attempting to create a [`DensityTier`] from an invalid
/// numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTierError {
    /// The invalid tier value that was provided.
    pub value: u8,
}

impl std::fmt::Display for InvalidTierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid density tier {}: expected 1-3", self.value)
    }
}

impl std::error::Error for InvalidTierError {}

/// One searchable location in the catalog.
///
/// The `name` doubles as the selection token used by the group hierarchy:
/// area groups list their members by display name, and the selection model
/// tracks those same strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    /// Unique slug identifier (e.g. `"gangnam-station"`).
    pub id: String,
    /// Display name and selection token (e.g. "강남역").
    pub name: String,
    /// City label (e.g. "서울").
    pub city: String,
    /// District label (e.g. "강남구").
    pub district: String,
    /// Legal-dong neighborhood, when finer than the district.
    pub neighborhood: Option<String>,
    /// WGS84 position of the area's anchor point (usually the station exit).
    pub coordinates: Coordinates,
    /// Whether the job board surfaces this area in its popular shortcut row.
    pub is_popular: bool,
    /// Nightlife venue concentration, when curated.
    pub density_tier: Option<DensityTier>,
}

/// A named cluster of related areas that can be selected as a unit.
///
/// Members are listed by display-name token. Groups are partitioned by a
/// top-level `region` key; a token normally belongs to one group, but
/// nothing here relies on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaGroup {
    /// Unique group identifier.
    pub group_id: u32,
    /// Display label (e.g. "강남권").
    pub name: String,
    /// Top-level region key partitioning groups (e.g. "서울").
    pub region: String,
    /// Member tokens; never empty in a valid catalog.
    pub keywords: Vec<String>,
    /// Representative center, when the group has a meaningful one.
    pub center: Option<Coordinates>,
    /// Whether the group is one of the curated nightlife zones.
    pub nightlife_zone: Option<bool>,
}

impl AreaGroup {
    /// Returns whether the given token is a member of this group.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.keywords.iter().any(|k| k == token)
    }
}

/// Derived selection status of a group against a selected-token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupStatus {
    /// Every member token is selected.
    Full,
    /// At least one but not all member tokens are selected.
    Partial,
    /// No member token is selected.
    None,
}

/// Why the device position could not be resolved.
///
/// Produced by the geolocation collaborator outside this core. The picker
/// treats every variant the same way: log it and fall back to
/// attribute-only filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GeolocationDenial {
    /// The user refused the position request.
    PermissionDenied,
    /// The device could not produce a fix.
    PositionUnavailable,
    /// The request did not complete in time.
    Timeout,
}

/// A named landmark used to set the proximity search center.
///
/// Presets are not catalog entries; they only carry a name and a position.
/// When a preset name exactly matches a catalog record name the picker also
/// selects that record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterPreset {
    /// Landmark display name (e.g. "강남역").
    pub name: String,
    /// Landmark position.
    pub coordinates: Coordinates,
}

/// A catalog record annotated with its distance from the query center.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedArea<'a> {
    /// The underlying catalog record.
    pub record: &'a LocationRecord,
    /// Great-circle distance from the query center, `None` while no center
    /// is set.
    pub distance_km: Option<f64>,
}

/// A proximity query: an optional center point and an inclusive radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximityQuery {
    /// Search center; `None` disables proximity filtering entirely.
    pub center: Option<Coordinates>,
    /// Inclusive search radius in kilometers.
    pub radius_km: f64,
}

impl ProximityQuery {
    /// A query with no active center (pass-through).
    #[must_use]
    pub const fn off() -> Self {
        Self {
            center: None,
            radius_km: 0.0,
        }
    }

    /// A query centered on `center` with the given inclusive radius.
    #[must_use]
    pub const fn within(center: Coordinates, radius_km: f64) -> Self {
        Self {
            center: Some(center),
            radius_km,
        }
    }
}

/// Categorical attribute filter over the catalog, independent of geography.
///
/// An empty tier set means "any tier". Criteria compose by logical AND.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeFilter {
    /// Keep only records flagged popular.
    pub popular_only: bool,
    /// Keep only records whose tier is in this set; empty accepts all.
    pub density_tiers: BTreeSet<DensityTier>,
}

impl AttributeFilter {
    /// Returns whether this filter accepts every record.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        !self.popular_only && self.density_tiers.is_empty()
    }

    /// Returns whether the record satisfies every enabled criterion.
    #[must_use]
    pub fn matches(&self, record: &LocationRecord) -> bool {
        if self.popular_only && !record.is_popular {
            return false;
        }
        if self.density_tiers.is_empty() {
            return true;
        }
        record
            .density_tier
            .is_some_and(|tier| self.density_tiers.contains(&tier))
    }
}

/// Whether a selection holds one token or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectMode {
    /// Every add replaces the previous selection.
    Single,
    /// Tokens accumulate until explicitly removed.
    Multiple,
}

//! TOML schema for embedded region source files.
//!
//! Each file under `sources/` describes one region: its searchable areas
//! and the named groups partitioning them. These types mirror the TOML
//! shape; [`crate::Catalog`] converts them into the shared model types.

use nightmap_area_models::{AreaGroup, Coordinates, DensityTier, LocationRecord};
use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// One region source file, deserialized from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSource {
    /// Unique source identifier (e.g. `"seoul"`).
    pub id: String,
    /// Region display name; becomes the `city` of its areas and the
    /// `region` of its groups.
    pub name: String,
    /// Searchable areas in this region.
    #[serde(default)]
    pub areas: Vec<AreaDef>,
    /// Named groups over this region's areas.
    #[serde(default)]
    pub groups: Vec<GroupDef>,
}

impl RegionSource {
    /// Parses one region source from TOML content.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when the content is not a valid
    /// region definition.
    pub fn from_toml(name: &str, content: &str) -> Result<Self, CatalogError> {
        toml::de::from_str(content).map_err(|source| CatalogError::Parse {
            name: name.to_owned(),
            source,
        })
    }
}

/// One searchable area as written in a region source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaDef {
    /// Unique slug identifier.
    pub id: String,
    /// Display name and selection token.
    pub name: String,
    /// District label.
    pub district: String,
    /// Optional finer-grained neighborhood label.
    pub neighborhood: Option<String>,
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Popular-shortcut flag (default false).
    #[serde(default)]
    pub popular: bool,
    /// Curated density tier, when known.
    pub density: Option<DensityTier>,
}

impl AreaDef {
    /// Converts this definition into a catalog record for the given region.
    #[must_use]
    pub fn into_record(self, region_name: &str) -> LocationRecord {
        LocationRecord {
            id: self.id,
            name: self.name,
            city: region_name.to_owned(),
            district: self.district,
            neighborhood: self.neighborhood,
            coordinates: Coordinates::new(self.lon, self.lat),
            is_popular: self.popular,
            density_tier: self.density,
        }
    }
}

/// One area group as written in a region source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDef {
    /// Unique group identifier, global across all region files.
    pub id: u32,
    /// Display label.
    pub name: String,
    /// Member tokens (area display names).
    pub keywords: Vec<String>,
    /// Representative center longitude, when meaningful.
    pub center_lon: Option<f64>,
    /// Representative center latitude, when meaningful.
    pub center_lat: Option<f64>,
    /// Curated nightlife-zone flag.
    pub nightlife_zone: Option<bool>,
}

impl GroupDef {
    /// Converts this definition into an area group for the given region.
    #[must_use]
    pub fn into_group(self, region_name: &str) -> AreaGroup {
        let center = match (self.center_lon, self.center_lat) {
            (Some(lon), Some(lat)) => Some(Coordinates::new(lon, lat)),
            _ => None,
        };
        AreaGroup {
            group_id: self.id,
            name: self.name,
            region: region_name.to_owned(),
            keywords: self.keywords,
            center,
            nightlife_zone: self.nightlife_zone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_toml_reports_parse_error() {
        let err = RegionSource::from_toml("broken", "id = ").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn area_def_conversion_carries_region_name() {
        let source = RegionSource::from_toml(
            "mini",
            r#"
            id = "mini"
            name = "서울"

            [[areas]]
            id = "gangnam-station"
            name = "강남역"
            district = "강남구"
            lon = 127.0276
            lat = 37.4980
            popular = true
            density = "HIGH"

            [[groups]]
            id = 1
            name = "강남권"
            keywords = ["강남역"]
            "#,
        )
        .unwrap();

        let record = source.areas[0].clone().into_record(&source.name);
        assert_eq!(record.city, "서울");
        assert_eq!(record.density_tier, Some(DensityTier::High));
        assert!(record.is_popular);
        assert!(record.neighborhood.is_none());

        let group = source.groups[0].clone().into_group(&source.name);
        assert_eq!(group.region, "서울");
        assert!(group.center.is_none());
        assert_eq!(group.keywords, ["강남역"]);
    }
}

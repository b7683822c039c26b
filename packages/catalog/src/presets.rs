//! Quick-center landmark presets.
//!
//! A small static table of named landmarks used to set the proximity
//! search center in one tap. Presets are not catalog entries; when a
//! preset name exactly matches a catalog record name, the picker also
//! selects that record.

use nightmap_area_models::{CenterPreset, Coordinates};

/// Embedded preset table as `(name, lon, lat)`.
const PRESET_TABLE: &[(&str, f64, f64)] = &[
    ("강남역", 127.0276, 37.4980),
    ("홍대입구역", 126.9240, 37.5569),
    ("이태원역", 126.9944, 37.5345),
    ("건대입구역", 127.0703, 37.5404),
    ("수원역", 127.0001, 37.2659),
    ("부평역", 126.7235, 37.4894),
];

/// Returns the quick-center presets in display order.
#[must_use]
pub fn quick_center_presets() -> Vec<CenterPreset> {
    PRESET_TABLE
        .iter()
        .map(|&(name, lon, lat)| CenterPreset {
            name: name.to_owned(),
            coordinates: Coordinates::new(lon, lat),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_coordinates_are_in_range() {
        for preset in quick_center_presets() {
            assert!(
                preset.coordinates.in_range(),
                "Preset {} has out-of-range coordinates",
                preset.name
            );
        }
    }

    #[test]
    fn preset_names_are_unique() {
        let presets = quick_center_presets();
        let mut seen = std::collections::BTreeSet::new();
        for preset in &presets {
            assert!(seen.insert(&preset.name), "Duplicate preset: {}", preset.name);
        }
    }

    #[test]
    fn every_preset_resolves_to_a_catalog_record() {
        let catalog = crate::Catalog::builtin();
        for preset in quick_center_presets() {
            let record = catalog.record_by_name(&preset.name);
            assert!(
                record.is_some(),
                "Preset {} has no matching catalog record",
                preset.name
            );
        }
    }
}

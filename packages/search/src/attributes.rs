//! Categorical attribute filtering.

use nightmap_area_models::{AttributeFilter, LocationRecord};

/// Filters `areas` by categorical attributes, preserving catalog order.
///
/// A record passes when it satisfies every enabled criterion: the popular
/// flag when `popular_only` is set, and tier membership when the tier set is
/// non-empty. A fully disabled filter is the identity.
#[must_use]
pub fn filter_by_attributes<'a>(
    areas: &'a [LocationRecord],
    filter: &AttributeFilter,
) -> Vec<&'a LocationRecord> {
    if filter.is_pass_through() {
        return areas.iter().collect();
    }

    let kept: Vec<&'a LocationRecord> = areas.iter().filter(|r| filter.matches(r)).collect();

    log::debug!("attribute filter kept {}/{} areas", kept.len(), areas.len());

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightmap_area_models::{Coordinates, DensityTier};

    fn area(id: &str, popular: bool, tier: Option<DensityTier>) -> LocationRecord {
        LocationRecord {
            id: id.into(),
            name: id.into(),
            city: "서울".into(),
            district: "마포구".into(),
            neighborhood: None,
            coordinates: Coordinates::new(126.9240, 37.5569),
            is_popular: popular,
            density_tier: tier,
        }
    }

    fn catalog() -> Vec<LocationRecord> {
        vec![
            area("a", true, Some(DensityTier::High)),
            area("b", false, Some(DensityTier::Medium)),
            area("c", true, Some(DensityTier::Low)),
            area("d", false, None),
        ]
    }

    #[test]
    fn disabled_filter_is_identity() {
        let catalog = catalog();
        let result = filter_by_attributes(&catalog, &AttributeFilter::default());

        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }

    #[test]
    fn popular_only_keeps_flagged_records_in_order() {
        let catalog = catalog();
        let filter = AttributeFilter {
            popular_only: true,
            ..AttributeFilter::default()
        };
        let result = filter_by_attributes(&catalog, &filter);

        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn tier_set_excludes_tierless_records() {
        let catalog = catalog();
        let mut filter = AttributeFilter::default();
        filter.density_tiers.insert(DensityTier::High);
        filter.density_tiers.insert(DensityTier::Medium);

        let result = filter_by_attributes(&catalog, &filter);
        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn criteria_compose_by_and() {
        let catalog = catalog();
        let mut filter = AttributeFilter {
            popular_only: true,
            ..AttributeFilter::default()
        };
        filter.density_tiers.insert(DensityTier::High);

        let result = filter_by_attributes(&catalog, &filter);
        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a"]);
    }
}

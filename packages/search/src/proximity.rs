//! Radius filtering and distance ranking.

use nightmap_area_models::{LocationRecord, ProximityQuery, RankedArea};
use nightmap_geodesy::haversine_km;

/// Filters `areas` by the proximity query and ranks survivors by distance.
///
/// With no center set this is a pass-through: every record comes back in
/// catalog order with `distance_km == None`. With a center, every record is
/// annotated with its great-circle distance, records beyond `radius_km` are
/// dropped (the boundary itself is kept — plain `<=`, no tolerance), and the
/// survivors are sorted ascending by distance. The sort is stable, so
/// equidistant records keep their catalog order.
///
/// A zero radius keeps only records at the exact center; an empty input
/// yields an empty result. Accepts any borrowed-record iterator so it can
/// run directly over a catalog slice or over an attribute-filtered subset.
#[must_use]
pub fn filter_by_proximity<'a, I>(areas: I, query: &ProximityQuery) -> Vec<RankedArea<'a>>
where
    I: IntoIterator<Item = &'a LocationRecord>,
{
    let Some(center) = query.center else {
        return areas
            .into_iter()
            .map(|record| RankedArea {
                record,
                distance_km: None,
            })
            .collect();
    };

    let mut total = 0_usize;
    let mut ranked = Vec::new();
    for record in areas {
        total += 1;
        let distance = haversine_km(center, record.coordinates);
        if distance <= query.radius_km {
            ranked.push(RankedArea {
                record,
                distance_km: Some(distance),
            });
        }
    }

    ranked.sort_by(|a, b| {
        let da = a.distance_km.unwrap_or_default();
        let db = b.distance_km.unwrap_or_default();
        da.total_cmp(&db)
    });

    log::debug!(
        "proximity filter kept {}/{total} areas within {} km",
        ranked.len(),
        query.radius_km
    );

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightmap_area_models::Coordinates;

    fn area(id: &str, name: &str, lon: f64, lat: f64) -> LocationRecord {
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

    /// Five Gangnam-area records; every record but 강남역 itself is more
    /// than 1 km from 강남역.
    fn gangnam_catalog() -> Vec<LocationRecord> {
        vec![
            area("gangnam-station", "강남역", 127.0276, 37.4980),
            area("nonhyeon-station", "논현역", 127.0212, 37.5110),
            area("gyodae-station", "교대역", 127.0139, 37.4934),
            area("seolleung-station", "선릉역", 127.0489, 37.5045),
            area("samseong-station", "삼성역", 127.0630, 37.5088),
        ]
    }

    const GANGNAM: Coordinates = Coordinates::new(127.0276, 37.4980);

    #[test]
    fn no_center_is_pass_through() {
        let catalog = gangnam_catalog();
        let result = filter_by_proximity(&catalog, &ProximityQuery::off());

        assert_eq!(result.len(), catalog.len());
        for (ranked, record) in result.iter().zip(&catalog) {
            assert_eq!(ranked.record.id, record.id);
            assert!(ranked.distance_km.is_none());
        }
    }

    #[test]
    fn one_km_around_gangnam_keeps_only_gangnam() {
        let catalog = gangnam_catalog();
        let result = filter_by_proximity(&catalog, &ProximityQuery::within(GANGNAM, 1.0));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].record.name, "강남역");
        assert_eq!(result[0].distance_km, Some(0.0));
    }

    #[test]
    fn results_are_sorted_ascending() {
        let catalog = gangnam_catalog();
        let result = filter_by_proximity(&catalog, &ProximityQuery::within(GANGNAM, 50.0));

        assert_eq!(result.len(), catalog.len());
        for pair in result.windows(2) {
            let a = pair[0].distance_km.unwrap();
            let b = pair[1].distance_km.unwrap();
            assert!(a <= b, "out of order: {a} before {b}");
        }
        assert_eq!(result[0].record.name, "강남역");
    }

    #[test]
    fn smaller_radius_yields_subset() {
        let catalog = gangnam_catalog();
        let near = filter_by_proximity(&catalog, &ProximityQuery::within(GANGNAM, 1.5));
        let far = filter_by_proximity(&catalog, &ProximityQuery::within(GANGNAM, 5.0));

        assert!(near.len() <= far.len());
        for ranked in &near {
            assert!(
                far.iter().any(|r| r.record.id == ranked.record.id),
                "{} in r=1.5 but not r=5.0",
                ranked.record.id
            );
        }
    }

    #[test]
    fn zero_radius_keeps_exact_center_only() {
        let catalog = gangnam_catalog();
        let result = filter_by_proximity(&catalog, &ProximityQuery::within(GANGNAM, 0.0));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].record.name, "강남역");
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let empty: Vec<LocationRecord> = Vec::new();
        let result = filter_by_proximity(&empty, &ProximityQuery::within(GANGNAM, 10.0));
        assert!(result.is_empty());
    }

    #[test]
    fn equidistant_records_keep_catalog_order() {
        // Two records at the same point, plus the center itself.
        let catalog = vec![
            area("a", "가", 127.0300, 37.5000),
            area("b", "나", 127.0300, 37.5000),
        ];
        let center = Coordinates::new(127.0276, 37.4980);
        let result = filter_by_proximity(&catalog, &ProximityQuery::within(center, 10.0));

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].record.id, "a");
        assert_eq!(result[1].record.id, "b");
    }
}

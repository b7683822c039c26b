#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Haversine great-circle distance.
//!
//! Implemented directly rather than through a geo crate: the proximity
//! engine's result ordering depends on exactly this formula, and keeping it
//! here makes the numeric behavior testable in isolation.

use nightmap_area_models::Coordinates;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
///
/// Haversine formula over WGS84 degree inputs. Symmetric, and exactly
/// `0.0` when both points are identical. Antipodal points need no special
/// casing beyond what the formula provides.
#[must_use]
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const GANGNAM: Coordinates = Coordinates::new(127.0276, 37.4980);
    const NONHYEON: Coordinates = Coordinates::new(127.0212, 37.5110);
    const HONGDAE: Coordinates = Coordinates::new(126.9240, 37.5569);

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(haversine_km(GANGNAM, GANGNAM), 0.0);
        assert_eq!(haversine_km(HONGDAE, HONGDAE), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = haversine_km(GANGNAM, HONGDAE);
        let ba = haversine_km(HONGDAE, GANGNAM);
        assert!((ab - ba).abs() < 1e-12, "asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn gangnam_to_nonhyeon_is_about_one_and_a_half_km() {
        let d = haversine_km(GANGNAM, NONHYEON);
        assert!(
            (1.5..=1.7).contains(&d),
            "강남역→논현역 should be ~1.5-1.7 km, got {d}"
        );
    }

    #[test]
    fn gangnam_to_hongdae_is_about_eleven_km() {
        let d = haversine_km(GANGNAM, HONGDAE);
        assert!((d - 11.0).abs() < 1.0, "강남역→홍대입구역 should be ~11 km, got {d}");
    }

    #[test]
    fn short_distances_stay_positive() {
        let nudged = Coordinates::new(GANGNAM.lon + 1e-6, GANGNAM.lat);
        let d = haversine_km(GANGNAM, nudged);
        assert!(d > 0.0);
        assert!(d < 0.001);
    }
}

//! Great-circle distance on a spherical Earth.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per statute mile.
pub const KM_PER_MILE: f64 = 1.60934;

/// Haversine distance in kilometers between two (lat, lng) points
/// given in degrees.
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn km_to_miles(km: f64) -> f64 {
    km / KM_PER_MILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_are_zero() {
        assert!(distance_km(40.11, -88.20, 40.11, -88.20).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            ((40.1106, -88.2073), (40.1164, -88.2434)),
            ((0.0, 0.0), (10.0, 10.0)),
            ((-33.86, 151.21), (51.50, -0.12)),
        ];
        for ((lat1, lng1), (lat2, lng2)) in pairs {
            let ab = distance_km(lat1, lng1, lat2, lng2);
            let ba = distance_km(lat2, lng2, lat1, lng1);
            assert!((ab - ba).abs() < 1e-9);
        }
    }

    #[test]
    fn urbana_to_champaign_is_about_three_km() {
        // Downtown Urbana to downtown Champaign.
        let km = distance_km(40.1106, -88.2073, 40.1164, -88.2434);
        assert!((2.0..5.0).contains(&km), "got {km}");
    }

    #[test]
    fn mile_conversion_uses_the_standard_factor() {
        assert!((km_to_miles(KM_PER_MILE) - 1.0).abs() < 1e-12);
        assert!((km_to_miles(10.0) - 6.2137).abs() < 1e-3);
    }
}

//! Haversine great-circle distance.

use super::point::Point;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
/// Mathematically defined for any real input; out-of-range coordinates are
/// not rejected here.
pub fn haversine_km(from: Point, to: Point) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();

    let a = half_lat * half_lat
        + from.latitude.to_radians().cos() * to.latitude.to_radians().cos() * half_lon * half_lon;
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Format a distance for output: kilometers with two decimals
///
/// Values exactly halfway between two hundredths (0.125, 1.125) round away
/// from zero; everything else rounds to the nearest hundredth of its exact
/// binary value, so 1.005 (stored as 1.00499...) gives "1.00".
pub fn format_km(distance_km: f64) -> String {
    let magnitude = distance_km.abs();
    let twice_hundredths = (magnitude * 200.0).round();

    // mul_add rounds once, so zero means magnitude * 200 is exactly an odd integer
    if twice_hundredths % 2.0 == 1.0 && magnitude.mul_add(200.0, -twice_hundredths) == 0.0 {
        let hundredths = (twice_hundredths + 1.0) / 2.0;
        let sign = if distance_km < 0.0 { "-" } else { "" };
        return format!("{}{:.2}", sign, hundredths / 100.0);
    }

    format!("{:.2}", distance_km)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELHI: Point = Point::new(28.6139, 77.2090);
    const MUMBAI: Point = Point::new(19.0760, 72.8777);

    #[test]
    fn test_distance_to_self_is_zero() {
        assert!(haversine_km(DELHI, DELHI).abs() < 1e-9);
        assert!(haversine_km(MUMBAI, MUMBAI).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = haversine_km(MUMBAI, DELHI);
        let back = haversine_km(DELHI, MUMBAI);
        assert!((there - back).abs() < 1e-9);

        let a = Point::new(-33.8688, 151.2093);
        let b = Point::new(51.5074, -0.1278);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_mumbai_to_delhi() {
        let km = haversine_km(MUMBAI, DELHI);
        assert!(km > 1100.0 && km < 1200.0, "got {km}");
        assert_eq!(format_km(km), "1148.09");
    }

    #[test]
    fn test_antipodes_are_half_circumference() {
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        let km = haversine_km(Point::new(0.0, 0.0), Point::new(0.0, 180.0));
        assert!((km - half).abs() < 1e-6);

        let km = haversine_km(Point::new(90.0, 0.0), Point::new(-90.0, 0.0));
        assert!((km - half).abs() < 1e-6);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // 2 * PI * 6371 / 360
        let km = haversine_km(Point::new(10.0, 20.0), Point::new(11.0, 20.0));
        assert!((km - 111.19492664455873).abs() < 1e-6);
    }

    #[test]
    fn test_longitude_wraps_across_antimeridian() {
        let km = haversine_km(Point::new(0.0, 179.5), Point::new(0.0, -179.5));
        assert!((km - 111.19492664455873).abs() < 1e-6);
    }

    #[test]
    fn test_format_km() {
        assert_eq!(format_km(0.0), "0.00");
        assert_eq!(format_km(3.14159), "3.14");
        assert_eq!(format_km(2.999), "3.00");
        assert_eq!(format_km(1148.0948730376), "1148.09");
    }

    #[test]
    fn test_format_km_exact_halves_round_up() {
        assert_eq!(format_km(0.125), "0.13");
        assert_eq!(format_km(1.125), "1.13");
        assert_eq!(format_km(0.375), "0.38");
        assert_eq!(format_km(0.625), "0.63");
        assert_eq!(format_km(2.5), "2.50");
        assert_eq!(format_km(-0.125), "-0.13");
    }

    #[test]
    fn test_format_km_inexact_halves_follow_binary_value() {
        // 1.005 and 2.675 are stored just below the half
        assert_eq!(format_km(1.005), "1.00");
        assert_eq!(format_km(2.675), "2.67");
    }
}

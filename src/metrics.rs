use space::Metric as SpaceMetric;
use tracing::warn;

use crate::types::{GeoPoint, Metric};

/// Mean Earth radius (IUGG), km.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

const WGS84_A: f64 = 6378.137;
const WGS84_F: f64 = 1.0 / 298.257_223_563;
const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);

const VINCENTY_MAX_ITER: usize = 200;
const VINCENTY_EPSILON: f64 = 1e-12;

/// Spherical distance via the haversine formula, km.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Ellipsoidal distance on WGS84 (Vincenty inverse), km.
///
/// Returns `None` when the iteration does not converge, which only happens
/// for nearly antipodal points.
pub fn vincenty_km(a: GeoPoint, b: GeoPoint) -> Option<f64> {
    let u1 = ((1.0 - WGS84_F) * a.lat.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * b.lat.to_radians().tan()).atan();
    let l = (b.lon - a.lon).to_radians();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    for _ in 0..VINCENTY_MAX_ITER {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            return Some(0.0);
        }
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // equatorial line
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };
        let c = WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha));
        let prev = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

        if (lambda - prev).abs() < VINCENTY_EPSILON {
            let u_sq = cos_sq_alpha * (WGS84_A.powi(2) - WGS84_B.powi(2)) / WGS84_B.powi(2);
            let big_a =
                1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma.powi(2))
                                * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));
            let d = WGS84_B * big_a * (sigma - delta_sigma);
            // keep unit bit patterns ordered: no -0.0 or tiny negatives
            return Some(if d > 0.0 { d } else { 0.0 });
        }
    }
    None
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GeodesicMetric;

impl SpaceMetric<GeoPoint> for GeodesicMetric {
    type Unit = u64;
    fn distance(&self, a: &GeoPoint, b: &GeoPoint) -> Self::Unit {
        Metric::Geodesic.distance_km(*a, *b).to_bits()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GreatCircleMetric;

impl SpaceMetric<GeoPoint> for GreatCircleMetric {
    type Unit = u64;
    fn distance(&self, a: &GeoPoint, b: &GeoPoint) -> Self::Unit {
        haversine_km(*a, *b).to_bits()
    }
}

impl Metric {
    /// Distance between two points in kilometres under this metric.
    pub fn distance_km(self, a: GeoPoint, b: GeoPoint) -> f64 {
        match self {
            Metric::GreatCircle => haversine_km(a, b),
            Metric::Geodesic => vincenty_km(a, b).unwrap_or_else(|| {
                warn!(?a, ?b, "geodesic did not converge, using great-circle distance");
                haversine_km(a, b)
            }),
        }
    }

    /// Ordered distance unit for ranking. Non-negative finite `f64` bit
    /// patterns sort the same way as the values they encode.
    pub fn distance_unit(self, a: &GeoPoint, b: &GeoPoint) -> u64 {
        match self {
            Metric::Geodesic => GeodesicMetric.distance(a, b),
            Metric::GreatCircle => GreatCircleMetric.distance(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn one_degree_of_latitude() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        assert_abs_diff_eq!(haversine_km(a, b), 111.195, epsilon = 0.01);
        // meridian arc on WGS84
        assert_abs_diff_eq!(vincenty_km(a, b).unwrap(), 110.574, epsilon = 0.01);
    }

    #[test]
    fn identical_points_are_zero() {
        let p = GeoPoint::new(67.8556, 20.2253);
        assert_eq!(Metric::Geodesic.distance_km(p, p), 0.0);
        assert_eq!(Metric::GreatCircle.distance_km(p, p), 0.0);
    }

    #[test]
    fn metrics_agree_within_half_a_percent() {
        let kiruna = GeoPoint::new(67.8556, 20.2253);
        let malmberget = GeoPoint::new(67.1833, 20.6667);
        let g = Metric::Geodesic.distance_km(kiruna, malmberget);
        let s = Metric::GreatCircle.distance_km(kiruna, malmberget);
        assert!((g - s).abs() / g < 0.005, "{g} vs {s}");
    }

    #[test]
    fn near_antipodal_falls_back() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.5, 179.7);
        let d = Metric::Geodesic.distance_km(a, b);
        assert!(d.is_finite() && d > 19_000.0);
    }

    #[test]
    fn units_order_like_distances() {
        let origin = GeoPoint::new(10.0, 10.0);
        let near = GeoPoint::new(10.01, 10.0);
        let far = GeoPoint::new(11.0, 10.0);
        for m in [Metric::Geodesic, Metric::GreatCircle] {
            assert!(m.distance_unit(&origin, &near) < m.distance_unit(&origin, &far));
        }
    }
}

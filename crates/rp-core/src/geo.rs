//! Geographic coordinate type.
//!
//! Landmark coordinates are presentation data; the router never looks at
//! them.  They are used for the nearby-landmark query and for snapping a
//! free coordinate to the closest landmark.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Kilometres per degree of latitude (and of longitude at the equator).
pub const KM_PER_DEGREE: f64 = 111.195;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Half-extents `(d_lat, d_lon)` in degrees of a box that contains every
    /// point within `radius_km` of `self`.
    pub fn degree_box(self, radius_km: f64) -> (f64, f64) {
        let d_lat = radius_km / KM_PER_DEGREE;
        // Clamp so the box stays finite near the poles.
        let cos_lat = self.lat.to_radians().cos().max(0.01);
        let d_lon = radius_km / (KM_PER_DEGREE * cos_lat);
        (d_lat, d_lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

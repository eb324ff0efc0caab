//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Facility datasets are small
//! (hundreds of rows) so the extra width costs nothing, and nearest-neighbour
//! tie detection works at the 1e-9 km scale where `f32` rounding would
//! dominate.

use std::ops::RangeInclusive;

use crate::{CoreError, CoreResult};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

const LAT_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LON_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Construct without range checking.  Use [`try_new`](Self::try_new) for
    /// untrusted input.
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct, failing with [`CoreError::InvalidCoordinate`] if either
    /// component is out of range or NaN.
    pub fn try_new(lat: f64, lon: f64) -> CoreResult<Self> {
        let p = Self::new(lat, lon);
        p.validate()?;
        Ok(p)
    }

    /// `true` if `lat ∈ [-90, 90]` and `lon ∈ [-180, 180]`.  NaN is never valid.
    #[inline]
    pub fn is_valid(self) -> bool {
        LAT_RANGE.contains(&self.lat) && LON_RANGE.contains(&self.lon)
    }

    pub fn validate(self) -> CoreResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CoreError::InvalidCoordinate { lat: self.lat, lon: self.lon })
        }
    }

    /// Haversine great-circle distance in kilometres, without range checks.
    ///
    /// Callers that have already validated a batch of points use this in
    /// their inner loop; everyone else should call [`distance_km`].
    pub fn haversine_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let h = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Rounding can push h a hair outside [0, 1]; asin would return NaN.
        let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();
        EARTH_RADIUS_KM * c
    }

    /// Arithmetic mean of the two coordinates.
    ///
    /// Not the great-circle midpoint: this is where a map label for the
    /// segment `self → other` sits when the segment is drawn as a straight
    /// line in lat/lon space.
    #[inline]
    pub fn midpoint(self, other: GeoPoint) -> GeoPoint {
        GeoPoint::new((self.lat + other.lat) * 0.5, (self.lon + other.lon) * 0.5)
    }

    /// Position on the unit sphere as `[x, y, z]` (Earth-centred, Earth-fixed).
    ///
    /// Euclidean (chord) distance between two such vectors is a monotonic
    /// function of great-circle distance, which lets spatial indexes that
    /// only understand Euclidean space answer nearest-neighbour queries.
    pub fn to_unit_xyz(self) -> [f64; 3] {
        let lat = self.lat.to_radians();
        let lon = self.lon.to_radians();
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Great-circle distance between two points in kilometres.
///
/// # Errors
///
/// [`CoreError::InvalidCoordinate`] if either point is out of range.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> CoreResult<f64> {
    a.validate()?;
    b.validate()?;
    Ok(a.haversine_km(b))
}

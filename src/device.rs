#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::Vector3;

use crate::utils::wrap_longitude_deg;

/// Ground device location.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DevicePosition {
    /// Latitude (degrees)
    pub lat_deg: f64,
    /// Longitude (degrees, East positive)
    pub lon_deg: f64,
}

impl DevicePosition {
    /// Builds a new [DevicePosition] from degrees.
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    /// Unit vector on the spherical Earth.
    pub(crate) fn unit_vector(&self) -> Vector3<f64> {
        let (sin_lat, cos_lat) = self.lat_deg.to_radians().sin_cos();
        let (sin_lon, cos_lon) = self.lon_deg.to_radians().sin_cos();
        Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }
}

/// Axis-aligned latitude/longitude rectangle, described by its center and
/// full extents. A region straddling the antimeridian is a valid input:
/// longitude membership is evaluated on the wrapped difference.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceRegion {
    /// Latitude of the region center (degrees)
    pub lat_mid_deg: f64,
    /// Total latitude extent (degrees): spans `lat_mid ± lat_range/2`
    pub lat_range_deg: f64,
    /// Longitude of the region center (degrees)
    pub lon_mid_deg: f64,
    /// Total longitude extent (degrees): spans `lon_mid ± lon_range/2`
    pub lon_range_deg: f64,
}

impl DeviceRegion {
    /// Builds a new [DeviceRegion] from its center point and full extents,
    /// all in degrees.
    pub fn new(lat_mid_deg: f64, lat_range_deg: f64, lon_mid_deg: f64, lon_range_deg: f64) -> Self {
        Self {
            lat_mid_deg,
            lat_range_deg,
            lon_mid_deg,
            lon_range_deg,
        }
    }

    /// Whether the given point lies inside the rectangle.
    pub fn contains(&self, lat_deg: f64, lon_deg: f64) -> bool {
        if (lat_deg - self.lat_mid_deg).abs() > self.lat_range_deg / 2.0 {
            return false;
        }
        wrap_longitude_deg(lon_deg - self.lon_mid_deg).abs() <= self.lon_range_deg / 2.0
    }
}

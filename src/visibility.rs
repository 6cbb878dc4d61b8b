//! Instantaneous visibility of a propagated ground-track point.
use crate::{
    constants::EARTH_EQUATORIAL_RADIUS_M,
    device::{DevicePosition, DeviceRegion},
    ephemeris::OrbitalParams,
    orbit::GroundTrack,
};

/// Instantaneous coverage footprint of one satellite: the spherical cap of
/// ground locations that see the satellite above the minimum elevation mask.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Footprint {
    /// Cap half-angle, as Earth central angle (rad)
    pub half_angle_rad: f64,
}

impl Footprint {
    /// Derives the coverage half-angle from orbital altitude and the
    /// elevation mask: `lambda = acos((R/a) cos eps) - eps`, spherical-cap
    /// geometry over a spherical Earth. Degenerate parameter sets
    /// (orbit at or below the surface) get an empty footprint.
    pub fn new(params: &OrbitalParams, min_elevation_deg: f64) -> Self {
        let a = params.semi_major_axis_m();
        if !(a > EARTH_EQUATORIAL_RADIUS_M) {
            return Self { half_angle_rad: 0.0 };
        }

        let eps = min_elevation_deg.to_radians();
        let half_angle_rad = ((EARTH_EQUATORIAL_RADIUS_M / a) * eps.cos()).acos() - eps;

        Self {
            half_angle_rad: half_angle_rad.max(0.0),
        }
    }

    /// Whether the footprint is empty (satellite never visible).
    pub fn is_empty(&self) -> bool {
        self.half_angle_rad <= 0.0
    }
}

/// Great-circle central angle between a ground-track point and a device
/// position (rad).
pub(crate) fn central_angle_rad(track: &GroundTrack, pos: &DevicePosition) -> f64 {
    let dot = track.unit_vector().dot(&pos.unit_vector());
    dot.clamp(-1.0, 1.0).acos()
}

/// Point-target visibility: within range once the sub-satellite point is
/// closer than the coverage half-angle.
pub(crate) fn visible_from(track: &GroundTrack, pos: &DevicePosition, footprint: &Footprint) -> bool {
    central_angle_rad(track, pos) <= footprint.half_angle_rad
}

/// Region-target visibility: the sub-satellite point lies inside the
/// rectangle. The footprint plays no role here.
pub(crate) fn over_region(track: &GroundTrack, region: &DeviceRegion) -> bool {
    region.contains(track.lat_deg, track.lon_deg)
}

#[cfg(test)]
mod test {
    use super::{central_angle_rad, visible_from, Footprint};
    use crate::prelude::{DevicePosition, GroundTrack, OrbitalParams};
    use hifitime::Epoch;
    use std::f64::consts::PI;

    fn leo() -> OrbitalParams {
        OrbitalParams {
            t0: Epoch::from_unix_seconds(1_700_000_000.0),
            n0_rad_s: 2.0 * PI / (95.0 * 60.0),
            ndot_rad_s2: 0.0,
            raan0_rad: 0.0,
            raandot_rad_s: 0.0,
            aop0_rad: 0.0,
            aopdot_rad_s: 0.0,
            inclination_deg: 53.0,
            eccentricity: 0.0,
            sat_id: 1,
        }
    }

    #[test]
    fn leo_footprint() {
        // ~500 km altitude, 10 deg mask: roughly 14-15 deg of central angle
        let footprint = Footprint::new(&leo(), 10.0);
        let deg = footprint.half_angle_rad.to_degrees();
        assert!(
            (12.0..17.0).contains(&deg),
            "implausible footprint {:.2} deg",
            deg
        );
        assert!(!footprint.is_empty());
    }

    #[test]
    fn raising_the_mask_shrinks_the_footprint() {
        let wide = Footprint::new(&leo(), 5.0);
        let narrow = Footprint::new(&leo(), 25.0);
        assert!(narrow.half_angle_rad < wide.half_angle_rad);
    }

    #[test]
    fn subsurface_orbit_never_visible() {
        let mut params = leo();
        params.n0_rad_s = 1.0; // absurd mean motion: a collapses below R
        assert!(Footprint::new(&params, 10.0).is_empty());
    }

    #[test]
    fn overhead_and_antipode() {
        let track = GroundTrack {
            epoch: Epoch::from_unix_seconds(0.0),
            lat_deg: 34.0,
            lon_deg: -118.0,
            ascending: true,
        };
        let footprint = Footprint::new(&leo(), 10.0);

        let under = DevicePosition::new(34.0, -118.0);
        assert!(central_angle_rad(&track, &under) < 1.0E-9);
        assert!(visible_from(&track, &under, &footprint));

        let antipode = DevicePosition::new(-34.0, 62.0);
        assert!((central_angle_rad(&track, &antipode) - PI).abs() < 1.0E-9);
        assert!(!visible_from(&track, &antipode, &footprint));
    }
}

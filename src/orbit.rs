//! Ground-track propagation over the secular Keplerian model.
use hifitime::Epoch;
use nalgebra::Vector3;

use crate::{
    constants::{
        CIRCULAR_ECCENTRICITY, EARTH_SIDEREAL_RATE_RAD_S, KEPLER_MAX_ITER, KEPLER_TOLERANCE_RAD,
    },
    ephemeris::OrbitalParams,
    utils::{wrap_longitude_deg, wrap_two_pi},
};

use std::f64::consts::PI;

/// Sub-satellite point at one instant, as propagated from [OrbitalParams].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GroundTrack {
    /// Instant of this snapshot
    pub epoch: Epoch,
    /// Geocentric latitude of the sub-satellite point (degrees)
    pub lat_deg: f64,
    /// Longitude of the sub-satellite point (degrees, (-180, 180])
    pub lon_deg: f64,
    /// True while the sub-satellite latitude is increasing
    pub ascending: bool,
}

impl GroundTrack {
    /// Propagates the sub-satellite point to instant `t`.
    ///
    /// Mean anomaly accumulates as the time-integral of the drifting mean
    /// motion, RAAN and argument of perigee drift linearly, and longitude is
    /// corrected for Earth's sidereal rotation accumulated since the
    /// reference epoch. Pure function: safe to call concurrently for
    /// different satellites.
    pub fn propagate(params: &OrbitalParams, t: Epoch) -> Self {
        let dt = (t - params.t0).to_seconds();

        // mean anomaly, with M0 = 0 at the reference epoch
        let m = params.n0_rad_s * dt + 0.5 * params.ndot_rad_s2 * dt.powi(2);
        let m = wrap_two_pi(m);

        let raan = params.raan0_rad + params.raandot_rad_s * dt;
        let aop = params.aop0_rad + params.aopdot_rad_s * dt;

        let nu = true_anomaly(m, params.eccentricity);

        // argument of latitude locates the satellite within its plane
        let u = aop + nu;
        let (sin_u, cos_u) = u.sin_cos();

        let inclination = params.inclination_deg.to_radians();
        let (sin_i, cos_i) = inclination.sin_cos();

        let lat = (sin_i * sin_u).clamp(-1.0, 1.0).asin();

        // inertial longitude of the sub-satellite point, then removal of the
        // rotation angle Earth accumulated since t0
        let lon = raan + (cos_i * sin_u).atan2(cos_u) - EARTH_SIDEREAL_RATE_RAD_S * dt;

        // d(lat)/dt carries the sign of cos(u) for any inclination,
        // since sin(i) >= 0 over [0, 180] and u increases with time
        Self {
            epoch: t,
            lat_deg: lat.to_degrees(),
            lon_deg: wrap_longitude_deg(lon.to_degrees()),
            ascending: cos_u > 0.0,
        }
    }

    /// Unit vector of the sub-satellite point on the spherical Earth,
    /// used for great-circle separation tests.
    pub(crate) fn unit_vector(&self) -> Vector3<f64> {
        let (sin_lat, cos_lat) = self.lat_deg.to_radians().sin_cos();
        let (sin_lon, cos_lon) = self.lon_deg.to_radians().sin_cos();
        Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }
}

/// True anomaly from mean anomaly. Near-circular orbits short-circuit to
/// `nu = M`; eccentric orbits go through Kepler's equation.
fn true_anomaly(m: f64, eccentricity: f64) -> f64 {
    if eccentricity.abs() < CIRCULAR_ECCENTRICITY {
        return m;
    }

    let ea = eccentric_anomaly(m, eccentricity);

    let half = ea / 2.0;
    let nu = 2.0
        * ((1.0 + eccentricity).sqrt() * half.sin()).atan2((1.0 - eccentricity).sqrt() * half.cos());
    wrap_two_pi(nu)
}

/// Solves Kepler's equation `M = E - e sin(E)` by Newton iteration,
/// bounded to [KEPLER_MAX_ITER] steps or [KEPLER_TOLERANCE_RAD] residual.
fn eccentric_anomaly(m: f64, eccentricity: f64) -> f64 {
    // high eccentricity converges poorly from E = M
    let mut ea = if eccentricity > 0.8 { PI } else { m };

    for _ in 0..KEPLER_MAX_ITER {
        let delta = (ea - eccentricity * ea.sin() - m) / (1.0 - eccentricity * ea.cos());
        ea -= delta;
        if delta.abs() < KEPLER_TOLERANCE_RAD {
            break;
        }
    }

    ea
}

#[cfg(test)]
mod test {
    use super::{eccentric_anomaly, GroundTrack};
    use crate::prelude::OrbitalParams;
    use hifitime::{Duration, Epoch, Unit};
    use std::f64::consts::PI;

    fn params(inclination_deg: f64, raan0_rad: f64, aop0_rad: f64) -> OrbitalParams {
        OrbitalParams {
            t0: Epoch::from_unix_seconds(1_700_000_000.0),
            n0_rad_s: 2.0 * PI / (95.0 * 60.0),
            ndot_rad_s2: 0.0,
            raan0_rad,
            raandot_rad_s: 0.0,
            aop0_rad,
            aopdot_rad_s: 0.0,
            inclination_deg,
            eccentricity: 0.0,
            sat_id: 1,
        }
    }

    #[test]
    fn epoch_propagation_is_pure_transform() {
        // dt = 0: the result is implied directly by (raan0, aop0, inclination)
        let p = params(53.0, 0.5, 0.3);
        let track = GroundTrack::propagate(&p, p.t0);

        let expected_lat = (53.0_f64.to_radians().sin() * 0.3_f64.sin()).asin();
        let expected_lon =
            0.5 + (53.0_f64.to_radians().cos() * 0.3_f64.sin()).atan2(0.3_f64.cos());

        assert!((track.lat_deg - expected_lat.to_degrees()).abs() < 1.0E-9);
        assert!((track.lon_deg - expected_lon.to_degrees()).abs() < 1.0E-9);
        assert!(track.ascending);
    }

    #[test]
    fn circular_latitude_periodicity() {
        // all secular drifts held at zero: latitude has period 2pi/n0
        let p = params(53.0, 1.0, 0.0);
        let period = Duration::from_seconds(2.0 * PI / p.n0_rad_s);

        for offset_s in [0.0, 330.0, 1_750.0, 4_000.0] {
            let t = p.t0 + Duration::from_seconds(offset_s);
            let a = GroundTrack::propagate(&p, t);
            let b = GroundTrack::propagate(&p, t + period);
            assert!(
                (a.lat_deg - b.lat_deg).abs() < 1.0E-6,
                "latitude not periodic at +{} s: {} vs {}",
                offset_s,
                a.lat_deg,
                b.lat_deg
            );
        }
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        let p = params(53.0, 0.0, 0.0);
        for k in 0..400 {
            let t = p.t0 + (k as f64 * 30.0) * Unit::Second;
            let track = GroundTrack::propagate(&p, t);
            assert!(track.lat_deg.abs() <= 53.0 + 1.0E-9);
            assert!(track.lon_deg > -180.0 && track.lon_deg <= 180.0);
        }
    }

    #[test]
    fn ascending_matches_latitude_rate() {
        let p = params(97.0, 0.0, 0.0);
        for k in 0..200 {
            let t = p.t0 + (k as f64 * 60.0) * Unit::Second;
            let track = GroundTrack::propagate(&p, t);
            let ahead = GroundTrack::propagate(&p, t + 1.0 * Unit::Second);
            if (ahead.lat_deg - track.lat_deg).abs() > 1.0E-6 {
                assert_eq!(
                    track.ascending,
                    ahead.lat_deg > track.lat_deg,
                    "direction flag diverges from latitude rate at sample {}",
                    k
                );
            }
        }
    }

    #[test]
    fn westward_drift_from_earth_rotation() {
        // an equatorial prograde orbit drifts west between successive
        // equator crossings at the same argument of latitude
        let p = params(0.0, 0.0, 0.0);
        let period = Duration::from_seconds(2.0 * PI / p.n0_rad_s);

        let a = GroundTrack::propagate(&p, p.t0);
        let b = GroundTrack::propagate(&p, p.t0 + period);
        let delta = crate::utils::wrap_longitude_deg(b.lon_deg - a.lon_deg);
        assert!(delta < 0.0, "expected westward drift, got {delta}");
        assert!((delta + 23.82).abs() < 0.1, "drift magnitude off: {delta}");
    }

    #[test]
    fn kepler_convergence() {
        for (m, e) in [(1.0, 0.1), (0.3, 0.7), (5.9, 0.85), (3.14, 0.01)] {
            let ea = eccentric_anomaly(m, e);
            let residual = (ea - e * ea.sin() - m).abs();
            assert!(
                residual < 1.0E-8,
                "kepler residual {residual:.2e} for M={m}, e={e}"
            );
        }
    }
}

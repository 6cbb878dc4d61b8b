#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use hifitime::{Duration, Epoch, Unit};

use crate::constants::{EARTH_EQUATORIAL_RADIUS_M, EARTH_GRAVITATION_MU_M3_S2};

/// Secular Keplerian description of one satellite's orbit, as distributed
/// to constrained devices. All angular rates are linear-in-time secular
/// approximations; no higher-order perturbation terms are modeled.
///
/// Fields are not validated: out-of-range eccentricity or inclination
/// produce undefined (but non-crashing) geometric results.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitalParams {
    /// Reference epoch at which the elements are exact
    pub t0: Epoch,

    /// Mean motion at reference epoch (rad/s)
    pub n0_rad_s: f64,

    /// Secular rate of mean motion (rad/s^2)
    pub ndot_rad_s2: f64,

    /// Right ascension of the ascending node at reference epoch (rad)
    pub raan0_rad: f64,

    /// RAAN drift rate (rad/s)
    pub raandot_rad_s: f64,

    /// Argument of perigee at reference epoch (rad)
    pub aop0_rad: f64,

    /// Argument of perigee drift rate (rad/s)
    pub aopdot_rad_s: f64,

    /// Inclination (degrees)
    pub inclination_deg: f64,

    /// Eccentricity (unitless, 0 = circular)
    pub eccentricity: f64,

    /// NORAD catalog number. Tie-breaking and diagnostics only,
    /// never physics.
    pub sat_id: u32,
}

impl OrbitalParams {
    /// Mean motion at instant `t` (rad/s).
    pub(crate) fn mean_motion_rad_s(&self, t: Epoch) -> f64 {
        let dt = (t - self.t0).to_seconds();
        self.n0_rad_s + self.ndot_rad_s2 * dt
    }

    /// Semi-major axis (meters), recovered from the epoch mean motion
    /// through `n0 = sqrt(MU / a^3)`.
    pub(crate) fn semi_major_axis_m(&self) -> f64 {
        (EARTH_GRAVITATION_MU_M3_S2 / self.n0_rad_s.powi(2)).cbrt()
    }

    /// Orbital altitude above the equatorial radius (meters).
    /// Negative for non-physical parameter sets.
    pub(crate) fn altitude_m(&self) -> f64 {
        self.semi_major_axis_m() - EARTH_EQUATORIAL_RADIUS_M
    }

    /// Orbital period at instant `t`.
    pub(crate) fn period(&self, t: Epoch) -> Duration {
        let n = self.mean_motion_rad_s(t);
        (2.0 * std::f64::consts::PI / n) * Unit::Second
    }
}

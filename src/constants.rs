/// Earth rotation rate relative to the stars, in WGS84 frame rad/s
pub const EARTH_SIDEREAL_RATE_RAD_S: f64 = 7.2921151467E-5;

/// Earth gravitational constant (m^3 s-2)
pub const EARTH_GRAVITATION_MU_M3_S2: f64 = 3.986004418E14;

/// Earth equatorial radius (kilometers)
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.1366;

/// Earth equatorial radius (meters)
pub const EARTH_EQUATORIAL_RADIUS_M: f64 = EARTH_EQUATORIAL_RADIUS_KM * 1.0E3;

/// Kepler equation convergence criterion (radians)
pub(crate) const KEPLER_TOLERANCE_RAD: f64 = 1.0E-8;

/// Kepler equation iteration cap
pub(crate) const KEPLER_MAX_ITER: usize = 10;

/// Eccentricity below which the orbit is treated as circular
/// and Kepler's equation is skipped entirely.
pub(crate) const CIRCULAR_ECCENTRICITY: f64 = 1.0E-6;

/// Window boundary refinement stops once the bracket is this narrow (seconds)
pub(crate) const REFINE_TOLERANCE_S: f64 = 0.05;

/// Window boundary refinement iteration cap
pub(crate) const REFINE_MAX_ITER: usize = 48;

/// Coarse scan oversampling factor: samples per coverage traversal
pub(crate) const SCAN_OVERSAMPLING: f64 = 4.0;

/// Coarse scan step floor (seconds), bounds worst-case CPU per query
pub(crate) const SCAN_STEP_FLOOR_S: f64 = 1.0;

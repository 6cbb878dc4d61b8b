#[cfg(feature = "serde")]
use serde::Deserialize;

use hifitime::{Duration, Unit};

#[cfg(feature = "serde")]
fn default_min_elevation() -> f64 {
    10.0
}

#[cfg(feature = "serde")]
fn default_search_horizon() -> Duration {
    Duration::from_days(7.0)
}

#[cfg(feature = "serde")]
fn default_min_pass_duration() -> Duration {
    1.0 * Unit::Second
}

/// Pass search settings. [Config::default] matches the embedded
/// deployment profile and is the right choice for most users.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Minimum elevation angle (in degrees) above the device horizon for a
    /// satellite to count as within communication range. Drives the coverage
    /// footprint radius. Lowering it widens passes but degrades link margin.
    #[cfg_attr(feature = "serde", serde(default = "default_min_elevation"))]
    pub min_elevation_deg: f64,

    /// Bounded forward-search lookahead. Queries that find no qualifying
    /// pass inside this window fail with [Error::NoPassFound] rather than
    /// searching forever.
    ///
    /// [Error::NoPassFound]: crate::Error::NoPassFound
    #[cfg_attr(feature = "serde", serde(default = "default_search_horizon"))]
    pub search_horizon: Duration,

    /// Shortest window reported as a pass. Grazes below this duration are
    /// skipped and the search continues.
    #[cfg_attr(feature = "serde", serde(default = "default_min_pass_duration"))]
    pub min_pass_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_elevation_deg: 10.0,
            search_horizon: Duration::from_days(7.0),
            min_pass_duration: 1.0 * Unit::Second,
        }
    }
}

impl Config {
    /// Copies self with updated minimum elevation mask (degrees).
    pub fn with_min_elevation_deg(&self, elev_deg: f64) -> Self {
        let mut s = self.clone();
        s.min_elevation_deg = elev_deg;
        s
    }

    /// Copies self with updated search horizon.
    pub fn with_search_horizon(&self, horizon: Duration) -> Self {
        let mut s = self.clone();
        s.search_horizon = horizon;
        s
    }
}

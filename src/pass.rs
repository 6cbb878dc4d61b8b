#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use hifitime::{Duration, Epoch};

/// One upcoming satellite pass, as resolved by the
/// [PassPredictor](crate::prelude::PassPredictor).
/// Value type: each query is stateless and two identical queries
/// return identical [PassInfo].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PassInfo {
    /// Longitude of the sub-satellite point at the pass instant
    /// (degrees, East positive)
    pub lon_deg: f64,
    /// Pass instant: time of closest approach for a point device,
    /// entry time for a region
    pub t: Epoch,
    /// Time span the satellite remains within range
    pub duration: Duration,
    /// True if the satellite is moving northward at the pass instant
    pub ascending: bool,
}

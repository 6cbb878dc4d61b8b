#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cfg;
mod clock;
mod constants;
mod device;
mod ephemeris;
mod error;
mod orbit;
mod pass;
mod predictor;
mod sdk;
mod utils;
mod visibility;

#[cfg(test)]
mod tests;

// pub export
pub use error::Error;

// prelude
pub mod prelude {
    pub use crate::cfg::Config;
    pub use crate::clock::{Clock, UptimeSource};
    pub use crate::constants::{
        EARTH_EQUATORIAL_RADIUS_KM, EARTH_EQUATORIAL_RADIUS_M, EARTH_GRAVITATION_MU_M3_S2,
        EARTH_SIDEREAL_RATE_RAD_S,
    };
    pub use crate::device::{DevicePosition, DeviceRegion};
    pub use crate::ephemeris::OrbitalParams;
    pub use crate::error::Error;
    pub use crate::orbit::GroundTrack;
    pub use crate::pass::PassInfo;
    pub use crate::predictor::PassPredictor;
    pub use crate::sdk::{CryptoPort, RadioPort, Sdk};
    pub use crate::utils::wrap_longitude_deg;
    // re-export
    pub use hifitime::{Duration, Epoch, Unit};
    pub use nalgebra::Vector3;
}

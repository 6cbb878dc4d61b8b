use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Wall-clock synchronization requires a non-zero Unix timestamp;
    /// zero is reserved for "not yet synchronized".
    #[error("time value must not be zero")]
    NullTime,

    /// Key material was provided but is empty. The key itself is opaque
    /// to this crate and consumed by the external crypto layer.
    #[error("key material must not be empty")]
    NullKey,

    /// Pass prediction was requested against an empty satellite registry.
    #[error("no satellites registered")]
    NoSatellites,

    /// No qualifying pass exists inside the bounded search horizon.
    /// Re-querying with a later start time is always safe.
    #[error("no pass found within search horizon")]
    NoPassFound,

    /// An external subsystem (crypto, satellite transport) failed during
    /// initialization. Fatal to startup: prediction APIs must not be used.
    #[error("dependency failure: {0}")]
    Dependency(&'static str),
}

impl Error {
    /// Returns the negative errno-style status code the embedded C boundary
    /// reports for this error, for callers shimming into a C ABI.
    pub fn code(&self) -> i32 {
        match self {
            Self::NullTime | Self::NullKey => -22,
            Self::NoSatellites | Self::NoPassFound => -2,
            Self::Dependency(_) => -5,
        }
    }
}

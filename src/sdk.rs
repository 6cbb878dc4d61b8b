//! SDK shell: startup ordering, key/time bookkeeping, prediction façade.
use hifitime::Epoch;
use log::{info, warn};

use crate::{
    cfg::Config,
    clock::{Clock, UptimeSource},
    device::{DevicePosition, DeviceRegion},
    ephemeris::OrbitalParams,
    error::Error,
    pass::PassInfo,
    predictor::PassPredictor,
};

/// External cryptography subsystem. Key material handed to [Sdk] is opaque
/// and consumed by implementations of this port, never by this crate.
pub trait CryptoPort {
    /// One-time startup. A failure here is fatal to [Sdk::init].
    fn init(&mut self) -> Result<(), Error>;
}

/// External satellite-network transport.
pub trait RadioPort {
    /// One-time startup, performed last in the [Sdk::init] sequence.
    fn init(&mut self) -> Result<(), Error>;
}

/// Embedding-facing shell tying the [Clock], the key material and the
/// [PassPredictor] together with the external ports. One [Sdk] value per
/// embedding context; there is no process-wide state, so independent
/// instances (e.g. in tests) cannot interfere.
pub struct Sdk<'a, C: CryptoPort, R: RadioPort, U: UptimeSource> {
    crypto: C,
    radio: R,
    clock: Clock<U>,
    /// Opaque key material, borrowed from the caller
    key: Option<&'a [u8]>,
    predictor: PassPredictor<'a>,
}

impl<'a, C: CryptoPort, R: RadioPort, U: UptimeSource> Sdk<'a, C, R, U> {
    /// Initializes the stack: crypto subsystem, then wall clock (skipped
    /// when `unix_epoch_ms` is 0, to be synchronized later through
    /// [Sdk::set_time]), then key material (skipped when `None`, to be set
    /// later through [Sdk::set_key]), then the satellite transport —
    /// in that order, short-circuiting on the first failure.
    ///
    /// An initialization failure is fatal: the prediction APIs must not be
    /// used on the error path.
    pub fn init(
        mut crypto: C,
        radio: R,
        uptime: U,
        cfg: Config,
        unix_epoch_ms: u64,
        key: Option<&'a [u8]>,
    ) -> Result<Self, Error> {
        if let Err(e) = crypto.init() {
            warn!("failed to initialize cryptography");
            return Err(e);
        }

        let mut sdk = Self {
            crypto,
            radio,
            clock: Clock::new(uptime),
            key: None,
            predictor: PassPredictor::new(cfg),
        };

        if unix_epoch_ms != 0 {
            if let Err(e) = sdk.clock.set_time(unix_epoch_ms) {
                warn!("failed to set Unix epoch time");
                return Err(e);
            }
        }

        if let Some(key) = key {
            if let Err(e) = sdk.set_key(key) {
                warn!("failed to set key");
                return Err(e);
            }
        }

        if let Err(e) = sdk.radio.init() {
            warn!("satellite network initialization failed");
            return Err(e);
        }

        info!("sdk initialized");

        Ok(sdk)
    }

    /// Synchronizes the wall clock, see [Clock::set_time].
    pub fn set_time(&mut self, unix_epoch_ms: u64) -> Result<(), Error> {
        self.clock.set_time(unix_epoch_ms)
    }

    /// Synchronizes the wall clock.
    #[deprecated(note = "use set_time() instead")]
    pub fn set_epoch(&mut self, unix_epoch_ms: u64) -> Result<(), Error> {
        self.set_time(unix_epoch_ms)
    }

    /// Replaces the advertisement key material. Empty key material is
    /// rejected with [Error::NullKey].
    pub fn set_key(&mut self, key: &'a [u8]) -> Result<(), Error> {
        if key.is_empty() {
            return Err(Error::NullKey);
        }
        self.key = Some(key);
        Ok(())
    }

    /// Replaces the satellite registry, see [PassPredictor::set_satellites].
    pub fn set_satellites(&mut self, satellites: &'a [OrbitalParams]) {
        self.predictor.set_satellites(satellites)
    }

    /// Earliest upcoming pass over a point device, searching forward
    /// from `t`.
    pub fn next_pass(&self, t: Epoch, pos: &DevicePosition) -> Result<PassInfo, Error> {
        self.predictor.next_pass(t, pos)
    }

    /// Earliest upcoming pass over a rectangular region, searching forward
    /// from `t`.
    pub fn next_pass_region(&self, t: Epoch, region: &DeviceRegion) -> Result<PassInfo, Error> {
        self.predictor.next_pass_region(t, region)
    }

    /// Current key material, read by the radio/crypto layers.
    pub fn key(&self) -> Option<&[u8]> {
        self.key
    }

    /// Current wall-clock estimate (Unix milliseconds), read by the
    /// radio/crypto layers.
    pub fn time_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Wall-clock value of the most recent synchronization (Unix
    /// milliseconds), used to bound how much "now" can be trusted.
    pub fn last_synced_ms(&self) -> u64 {
        self.clock.last_synced_ms()
    }

    /// Read access to the wall clock.
    pub fn clock(&self) -> &Clock<U> {
        &self.clock
    }

    /// Read access to the crypto port.
    pub fn crypto(&self) -> &C {
        &self.crypto
    }

    /// Read access to the radio port.
    pub fn radio(&self) -> &R {
        &self.radio
    }
}

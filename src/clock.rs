use hifitime::Epoch;
use log::debug;

use crate::error::Error;

/// Monotonic uptime counter, provided by the embedding platform.
/// The counter does not need to start at zero: re-anchoring on each
/// synchronization absorbs arbitrary counter origins.
pub trait UptimeSource {
    /// Milliseconds elapsed on the platform's monotonic counter.
    fn uptime_ms(&self) -> u64;
}

/// Uptime-anchored estimate of wall-clock Unix time.
///
/// The device periodically receives a trusted Unix timestamp (network sync,
/// GNSS fix, operator input). [Clock::set_time] anchors the monotonic uptime
/// counter to that instant; [Clock::now_ms] extrapolates from the anchor.
/// Each synchronization re-anchors rather than accumulates, so drift since
/// the previous sync is corrected in full.
#[derive(Debug, Clone)]
pub struct Clock<U: UptimeSource> {
    uptime: U,
    /// Wall-clock value received at the last synchronization
    synced_epoch_ms: u64,
    /// Wall-clock minus uptime at synchronization instant
    epoch_base_ms: u64,
}

impl<U: UptimeSource> Clock<U> {
    /// Builds a new, unsynchronized [Clock] over the given [UptimeSource].
    /// [Clock::now_ms] is meaningless until the first successful
    /// [Clock::set_time].
    pub fn new(uptime: U) -> Self {
        Self {
            uptime,
            synced_epoch_ms: 0,
            epoch_base_ms: 0,
        }
    }

    /// Anchors the clock to the given Unix timestamp (milliseconds).
    /// Zero is rejected with [Error::NullTime] and leaves any previous
    /// anchor untouched.
    pub fn set_time(&mut self, unix_epoch_ms: u64) -> Result<(), Error> {
        if unix_epoch_ms == 0 {
            return Err(Error::NullTime);
        }

        self.synced_epoch_ms = unix_epoch_ms;
        self.epoch_base_ms = unix_epoch_ms.wrapping_sub(self.uptime.uptime_ms());

        debug!("clock synchronized to {} ms", unix_epoch_ms);

        Ok(())
    }

    /// Current wall-clock estimate, milliseconds since the Unix epoch.
    pub fn now_ms(&self) -> u64 {
        self.epoch_base_ms.wrapping_add(self.uptime.uptime_ms())
    }

    /// Current wall-clock estimate as an [Epoch].
    pub fn now(&self) -> Epoch {
        Epoch::from_unix_milliseconds(self.now_ms() as f64)
    }

    /// Wall-clock value received at the most recent synchronization
    /// (milliseconds), 0 if never synchronized. Staleness policy is up to
    /// the caller.
    pub fn last_synced_ms(&self) -> u64 {
        self.synced_epoch_ms
    }

    /// Whether [Clock::set_time] has ever succeeded.
    pub fn synchronized(&self) -> bool {
        self.synced_epoch_ms != 0
    }
}

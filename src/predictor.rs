//! Pass search engine
use hifitime::{Duration, Epoch, Unit};
use itertools::Itertools;
use log::{debug, warn};

use std::f64::consts::PI;

use crate::{
    cfg::Config,
    constants::{
        EARTH_SIDEREAL_RATE_RAD_S, REFINE_MAX_ITER, REFINE_TOLERANCE_S, SCAN_OVERSAMPLING,
        SCAN_STEP_FLOOR_S,
    },
    device::{DevicePosition, DeviceRegion},
    ephemeris::OrbitalParams,
    error::Error,
    orbit::GroundTrack,
    pass::PassInfo,
    visibility::{central_angle_rad, over_region, visible_from, Footprint},
};

/// How a visibility window is reduced to the reported pass instant.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Anchor {
    /// Instant of minimum angular separation (point devices)
    ClosestApproach,
    /// Window entry instant (regions)
    Entry,
}

/// One search target. Implementations carry everything the forward scan
/// needs: the instantaneous visibility test, the angular extent used to
/// derive the scan step, and the window anchor.
trait Target {
    fn visible(&self, track: &GroundTrack) -> bool;
    /// Along-track angular extent of the coverage zone (rad)
    fn angular_scale_rad(&self) -> f64;
    fn anchor(&self) -> Anchor;
    /// Angular separation driving closest-approach refinement.
    /// Only meaningful for [Anchor::ClosestApproach] targets.
    fn separation_rad(&self, _track: &GroundTrack) -> f64 {
        0.0
    }
}

struct PointTarget<'a> {
    pos: &'a DevicePosition,
    footprint: Footprint,
}

impl Target for PointTarget<'_> {
    fn visible(&self, track: &GroundTrack) -> bool {
        visible_from(track, self.pos, &self.footprint)
    }

    fn angular_scale_rad(&self) -> f64 {
        2.0 * self.footprint.half_angle_rad
    }

    fn anchor(&self) -> Anchor {
        Anchor::ClosestApproach
    }

    fn separation_rad(&self, track: &GroundTrack) -> f64 {
        central_angle_rad(track, self.pos)
    }
}

struct RegionTarget<'a> {
    region: &'a DeviceRegion,
}

impl Target for RegionTarget<'_> {
    fn visible(&self, track: &GroundTrack) -> bool {
        over_region(track, self.region)
    }

    fn angular_scale_rad(&self) -> f64 {
        self.region
            .lat_range_deg
            .min(self.region.lon_range_deg)
            .to_radians()
            .clamp(0.0, PI)
    }

    fn anchor(&self) -> Anchor {
        Anchor::Entry
    }
}

/// Multi-satellite pass search engine. Owns the search [Config] and borrows
/// the satellite registry from the caller: the registered slice must outlive
/// the predictor, which the borrow checker enforces. Queries are pure given
/// a registry snapshot and never mutate internal state.
#[derive(Debug, Clone)]
pub struct PassPredictor<'a> {
    /// Search settings
    cfg: Config,
    /// Borrowed satellite registry
    satellites: &'a [OrbitalParams],
}

impl<'a> PassPredictor<'a> {
    /// Builds a new engine with an empty registry.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            satellites: &[],
        }
    }

    /// Replaces the satellite registry. The engine stores the borrow, not a
    /// copy. Pass an empty slice to clear. Replacement is a single
    /// assignment: there is no partially-updated state.
    pub fn set_satellites(&mut self, satellites: &'a [OrbitalParams]) {
        debug!("registry replaced: {} satellite(s)", satellites.len());
        self.satellites = satellites;
    }

    /// Currently registered satellites.
    pub fn satellites(&self) -> &[OrbitalParams] {
        self.satellites
    }

    /// Earliest upcoming pass over a point device, searching forward from
    /// `t` across the whole registry. Exact time ties resolve to the lower
    /// catalog number.
    pub fn next_pass(&self, t: Epoch, pos: &DevicePosition) -> Result<PassInfo, Error> {
        self.earliest(t, |params| {
            let footprint = Footprint::new(params, self.cfg.min_elevation_deg);
            if footprint.is_empty() {
                debug!("({}) empty footprint, skipped", params.sat_id);
                return None;
            }
            Some(PointTarget { pos, footprint })
        })
    }

    /// Earliest upcoming pass over a rectangular region, searching forward
    /// from `t` across the whole registry.
    pub fn next_pass_region(&self, t: Epoch, region: &DeviceRegion) -> Result<PassInfo, Error> {
        self.earliest(t, |_| Some(RegionTarget { region }))
    }

    fn earliest<T: Target>(
        &self,
        start: Epoch,
        make_target: impl Fn(&OrbitalParams) -> Option<T>,
    ) -> Result<PassInfo, Error> {
        if self.satellites.is_empty() {
            return Err(Error::NoSatellites);
        }

        let mut best: Option<(PassInfo, u32)> = None;

        for params in self.satellites.iter() {
            if params.mean_motion_rad_s(start) <= 0.0 {
                warn!("({}) non-physical mean motion, skipped", params.sat_id);
                continue;
            }

            let target = match make_target(params) {
                Some(target) => target,
                None => continue,
            };

            if let Some(pass) = self.search_satellite(params, &target, start) {
                debug!(
                    "({}) candidate pass {:?} lasting {}",
                    params.sat_id, pass.t, pass.duration
                );

                let better = match best {
                    Some((ref b, b_id)) => {
                        pass.t < b.t || (pass.t == b.t && params.sat_id < b_id)
                    },
                    None => true,
                };
                if better {
                    best = Some((pass, params.sat_id));
                }
            }
        }

        best.map(|(pass, _)| pass).ok_or(Error::NoPassFound)
    }

    /// Forward scan for one satellite: coarse stepping with a derived step,
    /// bisection refinement of window boundaries, then anchoring. Bounded
    /// by the configured horizon; grazes shorter than the qualification
    /// floor are skipped and the scan continues.
    fn search_satellite<T: Target>(
        &self,
        params: &OrbitalParams,
        target: &T,
        start: Epoch,
    ) -> Option<PassInfo> {
        let deadline = start + self.cfg.search_horizon;
        let period = params.period(start);
        let step = self.scan_step(params, target, start);

        let mut cursor = start;

        while cursor < deadline {
            let entry = if target.visible(&GroundTrack::propagate(params, cursor)) {
                // already inside coverage: entry clamps to the scan cursor
                // (the query instant itself on the first iteration)
                cursor
            } else {
                let (outside, inside) =
                    self.entry_bracket(params, target, cursor, deadline, step)?;
                self.refine_boundary(params, target, outside, inside)
            };

            let exit = self.find_exit(params, target, entry, period, step);
            let duration = exit - entry;

            if duration >= self.cfg.min_pass_duration {
                let t_pass = match target.anchor() {
                    Anchor::Entry => entry,
                    Anchor::ClosestApproach => {
                        self.closest_approach(params, target, entry, exit)
                    },
                };

                let track = GroundTrack::propagate(params, t_pass);
                return Some(PassInfo {
                    lon_deg: track.lon_deg,
                    t: t_pass,
                    duration,
                    ascending: track.ascending,
                });
            }

            debug!(
                "({}) {:?} - tangential graze ({}), continuing",
                params.sat_id, entry, duration
            );
            cursor = exit + step;
        }

        None
    }

    /// Derived scan step: coverage traversal time over the worst-case
    /// ground-track angular rate, oversampled, floored to bound CPU and
    /// capped to a fraction of the orbital period.
    fn scan_step<T: Target>(&self, params: &OrbitalParams, target: &T, t: Epoch) -> Duration {
        let rate = params.mean_motion_rad_s(t) + EARTH_SIDEREAL_RATE_RAD_S;
        let traversal_s = target.angular_scale_rad() / rate;
        let ceiling_s = (params.period(t).to_seconds() / 8.0).max(SCAN_STEP_FLOOR_S);
        (traversal_s / SCAN_OVERSAMPLING).clamp(SCAN_STEP_FLOOR_S, ceiling_s) * Unit::Second
    }

    /// First (outside, inside) sample pair past `from`, or None if coverage
    /// is never entered before the deadline.
    fn entry_bracket<T: Target>(
        &self,
        params: &OrbitalParams,
        target: &T,
        from: Epoch,
        deadline: Epoch,
        step: Duration,
    ) -> Option<(Epoch, Epoch)> {
        (0u64..)
            .map(|k| {
                let t = from + step * (k as f64);
                (t, target.visible(&GroundTrack::propagate(params, t)))
            })
            .take_while(|(t, _)| *t <= deadline)
            .tuple_windows()
            .find_map(|((t0, v0), (t1, v1))| (!v0 && v1).then_some((t0, t1)))
    }

    /// Steps forward from a known-inside instant until coverage is left,
    /// then refines the boundary. Capped at one orbital period past entry so
    /// an always-covered target (e.g. a whole-Earth region) terminates.
    fn find_exit<T: Target>(
        &self,
        params: &OrbitalParams,
        target: &T,
        inside: Epoch,
        period: Duration,
        step: Duration,
    ) -> Epoch {
        let cap = inside + period;
        let mut last_inside = inside;

        loop {
            let next = last_inside + step;
            if next >= cap {
                return cap;
            }
            if !target.visible(&GroundTrack::propagate(params, next)) {
                return self.refine_boundary(params, target, next, last_inside);
            }
            last_inside = next;
        }
    }

    /// Bisects a visibility boundary bracketed by one outside and one inside
    /// sample, in either time order. Returns the inside-side bound.
    fn refine_boundary<T: Target>(
        &self,
        params: &OrbitalParams,
        target: &T,
        mut outside: Epoch,
        mut inside: Epoch,
    ) -> Epoch {
        for _ in 0..REFINE_MAX_ITER {
            if (inside - outside).abs() <= REFINE_TOLERANCE_S * Unit::Second {
                break;
            }
            let mid = outside + (inside - outside) * 0.5;
            if target.visible(&GroundTrack::propagate(params, mid)) {
                inside = mid;
            } else {
                outside = mid;
            }
        }
        inside
    }

    /// Golden-section refinement of the minimum angular separation inside a
    /// visibility window.
    fn closest_approach<T: Target>(
        &self,
        params: &OrbitalParams,
        target: &T,
        mut lo: Epoch,
        mut hi: Epoch,
    ) -> Epoch {
        const INV_PHI: f64 = 0.618_033_988_749_894_8;

        for _ in 0..REFINE_MAX_ITER {
            if (hi - lo).to_seconds() <= REFINE_TOLERANCE_S {
                break;
            }
            let span = hi - lo;
            let a = lo + span * (1.0 - INV_PHI);
            let b = lo + span * INV_PHI;

            let sep_a = target.separation_rad(&GroundTrack::propagate(params, a));
            let sep_b = target.separation_rad(&GroundTrack::propagate(params, b));
            if sep_a <= sep_b {
                hi = b;
            } else {
                lo = a;
            }
        }

        lo + (hi - lo) * 0.5
    }
}

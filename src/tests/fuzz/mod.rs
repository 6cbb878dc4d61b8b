//! Randomized robustness sweeps. Seeded: failures reproduce.
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::prelude::{
    Config, DevicePosition, Duration, Epoch, GroundTrack, OrbitalParams, PassPredictor, Unit,
};
use crate::tests::init_logger;

use std::f64::consts::PI;

fn random_leo(rng: &mut SmallRng, sat_id: u32) -> OrbitalParams {
    let period_s = rng.random_range(88.0 * 60.0..130.0 * 60.0);
    OrbitalParams {
        t0: Epoch::from_unix_seconds(1_700_000_000.0),
        n0_rad_s: 2.0 * PI / period_s,
        ndot_rad_s2: rng.random_range(-1.0E-13..1.0E-13),
        raan0_rad: rng.random_range(-PI..PI),
        raandot_rad_s: rng.random_range(-1.0E-6..1.0E-6),
        aop0_rad: rng.random_range(-PI..PI),
        aopdot_rad_s: rng.random_range(-1.0E-6..1.0E-6),
        inclination_deg: rng.random_range(0.0..180.0),
        eccentricity: rng.random_range(0.0..0.02),
        sat_id,
    }
}

#[test]
fn propagation_stays_on_the_sphere() {
    init_logger();
    let mut rng = SmallRng::seed_from_u64(0xDEFA);

    for sat_id in 0..200 {
        let params = random_leo(&mut rng, sat_id);
        let offset_s = rng.random_range(-100_000.0..100_000.0);
        let track = GroundTrack::propagate(&params, params.t0 + offset_s * Unit::Second);

        assert!(
            track.lat_deg.is_finite() && track.lon_deg.is_finite(),
            "non-finite ground track for {params:?}"
        );
        assert!((-90.0..=90.0).contains(&track.lat_deg));
        assert!(track.lon_deg > -180.0 && track.lon_deg <= 180.0);
    }
}

#[test]
fn found_passes_are_always_in_the_future() {
    init_logger();
    let mut rng = SmallRng::seed_from_u64(0x5EED);

    let cfg = Config::default().with_search_horizon(Duration::from_days(1.0));

    for round in 0..25 {
        let satellites = [
            random_leo(&mut rng, round * 2),
            random_leo(&mut rng, round * 2 + 1),
        ];
        let mut predictor = PassPredictor::new(cfg.clone());
        predictor.set_satellites(&satellites);

        let device = DevicePosition::new(
            rng.random_range(-80.0..80.0),
            rng.random_range(-180.0..180.0),
        );
        let t = Epoch::from_unix_seconds(1_700_000_000.0)
            + rng.random_range(0.0..50_000.0) * Unit::Second;

        if let Ok(pass) = predictor.next_pass(t, &device) {
            assert!(pass.t >= t, "past pass for {satellites:?} at {device:?}");
            assert!(pass.duration >= 1.0 * Unit::Second);
            assert!(pass.lon_deg > -180.0 && pass.lon_deg <= 180.0);
        }
    }
}

//! Unit tests for sp-core primitives.

#[cfg(test)]
mod ids {
    use std::collections::HashMap;

    use crate::{CustomerId, ShelfId};

    #[test]
    fn display() {
        assert_eq!(ShelfId::new("s-1").to_string(), "ShelfId(s-1)");
        assert_eq!(CustomerId::from("7").to_string(), "CustomerId(7)");
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = CustomerId::generate();
        let b = CustomerId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn map_lookup_by_str() {
        let mut m: HashMap<ShelfId, u32> = HashMap::new();
        m.insert(ShelfId::new("dairy-1"), 3);
        assert_eq!(m.get("dairy-1"), Some(&3));
    }
}

#[cfg(test)]
mod geo {
    use crate::FloorPoint;

    #[test]
    fn planar_distance_ignores_y() {
        let a = FloorPoint::new(0.0, 5.0, 0.0);
        let b = FloorPoint::on_floor(3.0, 4.0);
        assert!((a.planar_distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn direction_of_coincident_points_is_zero() {
        let p = FloorPoint::on_floor(1.0, 1.0);
        assert_eq!(p.planar_direction(p), (0.0, 0.0));
    }

    #[test]
    fn step_toward_never_overshoots() {
        let a = FloorPoint::ORIGIN;
        let b = FloorPoint::on_floor(1.0, 0.0);
        assert_eq!(a.step_toward(b, 5.0), b);
        let mid = a.step_toward(b, 0.25);
        assert!((mid.x - 0.25).abs() < 1e-6);
        assert!(mid.planar_distance(b) < a.planar_distance(b));
    }

    #[test]
    fn box_and_square_checks() {
        let a = FloorPoint::on_floor(0.0, 0.0);
        assert!(a.within_box(FloorPoint::on_floor(1.5, -1.9), 2.0));
        assert!(!a.within_box(FloorPoint::on_floor(2.5, 0.0), 2.0));
        assert!(FloorPoint::on_floor(25.0, 0.0).outside_square(20.0));
        assert!(FloorPoint::on_floor(0.0, -20.5).outside_square(20.0));
        assert!(!FloorPoint::on_floor(20.0, 20.0).outside_square(20.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{ClockConfig, Frame, VirtualClock};

    fn running_clock() -> VirtualClock {
        VirtualClock::new(&ClockConfig { autostart: true, ..ClockConfig::default() })
    }

    #[test]
    fn frame_counter() {
        assert_eq!(Frame::ZERO.next().next(), Frame(2));
        assert_eq!(Frame(9).to_string(), "F9");
    }

    #[test]
    fn stopped_clock_does_not_advance() {
        let mut clock = VirtualClock::new(&ClockConfig::default());
        assert!(!clock.is_running());
        let adv = clock.advance_real(10.0);
        assert_eq!(adv.steps, 0);
        assert_eq!(clock.time_of_day(), "09:00");
    }

    #[test]
    fn one_step_per_interval() {
        let mut clock = running_clock();
        let adv = clock.advance_real(3.0);
        assert_eq!(adv.steps, 3);
        assert_eq!(clock.elapsed_secs, 15);
        assert_eq!(clock.to_string(), "09:00:15");
    }

    #[test]
    fn booster_shortens_interval() {
        let mut clock = running_clock();
        clock.set_booster(10);
        let adv = clock.advance_real(1.0);
        assert_eq!(adv.steps, 10);
        clock.set_booster(0);
        assert_eq!(clock.booster(), 1);
    }

    #[test]
    fn boosted_frames_accumulate_without_drift() {
        let mut clock = running_clock();
        clock.set_booster(10);
        let steps: u32 = (0..60).map(|_| clock.advance_real(1.0 / 60.0).steps).sum();
        assert_eq!(steps, 10);
        assert_eq!(clock.elapsed_secs, 50);

        clock.set_booster(3);
        let steps: u32 = (0..600).map(|_| clock.advance_real(1.0 / 60.0).steps).sum();
        assert_eq!(steps, 30);
    }

    #[test]
    fn minute_boundary_is_reported_once() {
        let mut clock = running_clock();
        // 11 steps = 55 s, still inside 09:00.
        assert!(!clock.advance_real(11.0).minute_crossed);
        let adv = clock.advance_real(1.0);
        assert!(adv.minute_crossed);
        assert_eq!(clock.time_of_day(), "09:01");
        assert!(!clock.advance_real(1.0).minute_crossed);
    }

    #[test]
    fn wraps_past_midnight() {
        let mut clock = VirtualClock::new(&ClockConfig {
            start_secs_of_day: 86_395,
            autostart: true,
            ..ClockConfig::default()
        });
        assert_eq!(clock.hour(), 23);
        clock.advance_real(1.0);
        assert_eq!(clock.hour(), 0);
        assert_eq!(clock.time_of_day(), "00:00");
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, SequenceRng, SimRng};

    #[test]
    fn sim_rng_deterministic() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn sequence_replays_and_cycles() {
        let mut rng = SequenceRng::new(vec![0.1, 0.9]);
        assert!(rng.chance(0.5));
        assert!(!rng.chance(0.5));
        assert!(rng.chance(0.5));
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn pick_covers_range() {
        let mut rng = SequenceRng::new(vec![0.0, 0.5, 1.0]);
        assert_eq!(rng.pick(4), Some(0));
        assert_eq!(rng.pick(4), Some(2));
        assert_eq!(rng.pick(4), Some(3));
        assert_eq!(rng.pick(0), None);
        // Empty pick consumes nothing.
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut rng = SequenceRng::default();
        assert_eq!(rng.unit(), 0.0);
        assert!((rng.range_f32(1.0, 2.0) - 1.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod config {
    use crate::{EngineConfig, SpError, SpeedBand};

    #[test]
    fn defaults_are_valid() {
        let cfg = EngineConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.batch_cap, 20);
        assert_eq!(cfg.floor_bound, 20.0);
    }

    #[test]
    fn rejects_non_positive_speed() {
        let cfg = EngineConfig { scripted_speed: 0.0, ..EngineConfig::default() };
        assert!(matches!(cfg.validate(), Err(SpError::Config(_))));

        let cfg = EngineConfig {
            manual_speed: SpeedBand { min: -1.0, max: 1.0 },
            ..EngineConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_inverted_band_and_bad_probability() {
        let cfg = EngineConfig {
            manual_speed: SpeedBand { min: 2.0, max: 1.0 },
            ..EngineConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = EngineConfig { clear_target_probability: 1.5, ..EngineConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_cap() {
        let cfg = EngineConfig { batch_cap: 0, ..EngineConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

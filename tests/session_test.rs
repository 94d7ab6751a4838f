use fd_trainer::config::SimConfig;
use fd_trainer::dynamics::{self, AircraftState, Control, ControlSet, FlightConfig};
use fd_trainer::gnc::{FlightDirector, HoldPilot, IdlePilot};
use fd_trainer::mission::TargetState;
use fd_trainer::sim::{self, Phase, Rating, Session, SessionEvent};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;
use test_log::test;

fn seeded(seed: u64) -> SimConfig {
    SimConfig { seed: Some(seed), ..SimConfig::default() }
}

fn random_controls(rng: &mut ChaCha8Rng) -> ControlSet {
    Control::iter().filter(|_| rng.gen_bool(0.4)).collect()
}

#[test]
fn state_stays_bounded_under_random_input() {
    let mut session = Session::start(seeded(21)).unwrap();
    let flight = session.config().flight;
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..20_000 {
        let controls = random_controls(&mut rng);
        let dt = rng.gen_range(-0.01..0.2);
        session.tick(&controls, dt);

        let a = session.aircraft();
        assert!(a.roll.abs() <= flight.max_roll);
        assert!(a.pitch.abs() <= flight.max_pitch);
        assert!(a.roll_velocity.abs() <= flight.max_roll_velocity);
        assert!(a.pitch_velocity.abs() <= flight.max_pitch_velocity);
        assert!(flight.speed_range.contains(a.airspeed));
        assert!(flight.altitude_range.contains(a.altitude));
        assert!(a.heading >= 0.0 && a.heading < 360.0);

        let d = session.display();
        assert!(d.fd.x.abs() <= 100.0 && d.fd.y.abs() <= 100.0);
        assert!(d.heading >= 0.0 && d.heading < 360.0);
        assert!(session.stabilized() >= 0.0);

        if !session.is_running() {
            session.restart();
        }
    }
}

#[test]
fn roll_scenario_matches_recurrence() {
    let cfg = FlightConfig::default();
    let controls = ControlSet::none().with(Control::RollRight);
    let s0 = AircraftState::default();
    let s1 = dynamics::step(&s0, &controls, 0.1, &cfg);
    let s2 = dynamics::step(&s1, &controls, 0.1, &cfg);

    let v1 = (0.0 + 0.04) * 0.97;
    let v2 = (v1 + 0.04) * 0.97;
    approx::assert_abs_diff_eq!(s2.roll_velocity, v2, epsilon = 1e-12);
    approx::assert_abs_diff_eq!(s2.roll, v1 + v2, epsilon = 1e-12);
    // heading integrates bank over dt: (v1 + (v1 + v2)) * 0.3 * 0.1
    approx::assert_abs_diff_eq!(s2.heading, 270.0 + (2.0 * v1 + v2) * 0.03, epsilon = 1e-9);
}

#[test]
fn fd_scenario_heading_ten_degrees_right() {
    let fd = FlightDirector::default();
    let state = AircraftState::default();
    let target = TargetState { heading: 280.0, ..TargetState::hold(&state) };
    let g = fd.compute(&state, &target);
    approx::assert_abs_diff_eq!(g.command.x, 30.0, epsilon = 1e-12);

    let mut display = fd_trainer::gnc::DisplayState::from(&state);
    fd.smooth(&mut display, &state, &g);
    approx::assert_abs_diff_eq!(display.fd.x, 4.5, epsilon = 1e-12);
}

#[test]
fn capture_over_many_ticks_fires_once() {
    let mut session = Session::start(seeded(4)).unwrap();
    let hold = TargetState::hold(session.aircraft());
    session.set_targets(hold);

    let mut captures = Vec::new();
    let mut held_for = 0.0;
    for _ in 0..31 {
        held_for += 0.05;
        if let Some(e) = session.tick(&ControlSet::none(), 0.05) {
            captures.push((held_for, e));
        }
    }

    assert_eq!(captures.len(), 1);
    let (at, event) = &captures[0];
    assert!(*at >= 1.5 - 1e-9);
    match event {
        SessionEvent::Captured { previous, next, .. } => {
            assert_eq!(*previous, hold);
            assert_eq!(next, session.targets());
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert!(session.stabilized() < 0.1);
}

#[test]
fn ends_exactly_at_session_length() {
    // 1/32 s is exact in binary, so 210 s is exactly 6720 ticks
    let mut session = Session::start(seeded(8)).unwrap();
    let dt = 1.0 / 32.0;
    for i in 1..6720 {
        // an idle aircraft never meets freshly generated targets
        assert_eq!(session.tick(&ControlSet::none(), dt), None, "tick {}", i);
    }
    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.state().accuracy_samples, 6719);

    let event = session.tick(&ControlSet::none(), dt);
    assert!(matches!(event, Some(SessionEvent::Ended(_))));
    assert_eq!(session.phase(), Phase::Ended);
    assert_eq!(session.state().time_remaining, 0.0);
    assert_eq!(session.state().accuracy_samples, 6719);
}

#[test]
fn idle_pilot_scores_poorly() {
    let config = SimConfig { session_length: 30.0, ..seeded(12) };
    let mut pilot = IdlePilot;
    let run = sim::simulate_with(config, &mut pilot, 1.0 / 60.0).unwrap();
    assert_eq!(run.report.captures, 0);
    assert!(run.report.accuracy < 100.0);
    assert!(run.events.iter().filter(|e| e.is_end()).count() == 1);
}

#[test]
fn holding_speed_up_pins_speed_at_max() {
    let config = SimConfig { session_length: 10.0, ..seeded(2) };
    let mut pilot = HoldPilot(ControlSet::none().with(Control::SpeedUp));
    let run = sim::simulate_with(config, &mut pilot, 1.0 / 60.0).unwrap();
    let last_running = run.trace.iter().rev().find(|s| s.is_running()).unwrap();
    approx::assert_abs_diff_eq!(last_running.display.speed, 400.0, epsilon = 1.0);
}

#[test]
fn report_rating_matches_accuracy() {
    let run = sim::simulate(SimConfig { session_length: 60.0, ..seeded(5) }, 1.0 / 60.0).unwrap();
    let report = &run.report;
    assert!((0.0..=100.0).contains(&report.accuracy));
    assert_eq!(report.rating, Rating::from_accuracy(report.accuracy));
    assert_eq!(report.accuracy, report.accuracy.round());
}

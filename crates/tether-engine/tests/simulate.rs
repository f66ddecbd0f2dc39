//! Integration test: single-control simulation from the live state.

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use proptest::prelude::*;
use tether_core::{Control, PropagationError, SimState, WorldError};
use tether_engine::{simulate_raw, Path, SimSetup};
use tether_test_utils::{env_config, shared_env, CallKind, KinematicWorld, WorldCall};

fn start_at(x: f64) -> SimState {
    let mut s = SimState::at_rest(1);
    s.bodies_mut()[0].position = [x, 0.0, 0.0];
    s
}

fn session(world: KinematicWorld) -> SimSetup {
    SimSetup::new(shared_env(env_config(1, 2), world))
}

#[test]
fn simulate_control_returns_two_state_path() {
    let world = KinematicWorld::new(1).with_state(start_at(2.0));
    let log = world.log();
    let setup = session(world);

    let path = setup
        .simulate_control(&Control::from_slice(&[0.5, 0.0]), 3)
        .unwrap();
    let Path::Control(path) = path else {
        panic!("expected a control path");
    };

    assert_eq!(path.state_count(), 2);
    assert_eq!(path.states()[0], start_at(2.0));
    assert!((path.final_state().bodies()[0].position[0] - 2.15).abs() < 1e-12);
    assert_eq!(path.controls(), &[Control::from_slice(&[0.5, 0.0])]);
    assert_eq!(path.durations(), &[3]);

    let kinds: Vec<CallKind> = log.calls().iter().map(WorldCall::kind).collect();
    assert_eq!(
        kinds,
        vec![
            CallKind::Read,
            CallKind::Write,
            CallKind::Apply,
            CallKind::Step,
            CallKind::Step,
            CallKind::Step,
            CallKind::Read,
        ]
    );
    // The world is left at the end of the path.
    assert_eq!(&setup.current_state().unwrap(), path.final_state());
}

#[test]
fn path_owns_its_control() {
    let setup = session(KinematicWorld::new(1));
    let mut control = Control::from_slice(&[0.25, -0.25]);
    let path = setup.simulate_control(&control, 1).unwrap();
    control.as_mut_slice()[0] = 9.0;

    let recorded = &path.as_control().unwrap().controls()[0];
    assert_eq!(recorded.as_slice(), &[0.25, -0.25]);
}

#[test]
fn simulate_applies_null_control() {
    let world = KinematicWorld::new(1);
    let log = world.log();
    let setup = session(world);

    let path = setup.simulate(2).unwrap();
    assert_eq!(path.as_control().unwrap().controls()[0], Control::zeros(2));
    assert!(log.calls().contains(&WorldCall::Apply(vec![0.0, 0.0])));
}

#[test]
fn simulate_raw_checks_dimension_before_touching_world() {
    let world = KinematicWorld::new(1);
    let log = world.log();
    let setup = session(world);

    let err = setup.simulate_raw(&[1.0, 2.0, 3.0], 2).unwrap_err();
    assert_eq!(
        err,
        PropagationError::ControlDimension {
            expected: 2,
            got: 3
        }
    );
    assert!(log.calls().is_empty());
}

#[test]
fn zero_steps_only_reads() {
    let world = KinematicWorld::new(1).with_state(start_at(1.0));
    let log = world.log();
    let setup = session(world);

    let path = setup.simulate_raw(&[1.0, 1.0], 0).unwrap();
    let path = path.as_control().unwrap();
    assert_eq!(path.states(), &[start_at(1.0), start_at(1.0)]);
    assert_eq!(path.durations(), &[0]);
    assert_eq!(log.calls(), vec![WorldCall::Read]);
}

#[test]
fn read_failure_surfaces() {
    let world = KinematicWorld::new(1).failing_after(CallKind::Read, 0);
    let setup = session(world);
    let err = setup.simulate(1).unwrap_err();
    assert_eq!(
        err,
        PropagationError::World(WorldError::Simulator {
            reason: "injected Read fault".into()
        })
    );
}

#[test]
fn start_read_and_propagation_share_one_guard() {
    const RUNS: usize = 20;
    const STEPS: u32 = 3;
    let world = KinematicWorld::new(1).with_step_delay(Duration::from_micros(50));
    let log = world.log();
    let setup = session(world);
    let si = Arc::clone(setup.space_information());
    let barrier = Arc::new(Barrier::new(2));

    let simulator = {
        let si = Arc::clone(&si);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..RUNS {
                simulate_raw(&si, &[0.5, 0.0], STEPS).unwrap();
            }
            thread::current().id()
        })
    };
    let worker = {
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..RUNS {
                si.propagate(&start_at(0.0), &Control::from_slice(&[0.1, 0.1]), STEPS)
                    .unwrap();
            }
        })
    };
    let simulator_id = simulator.join().unwrap();
    worker.join().unwrap();

    let records = log.records();
    let owned: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.thread == simulator_id)
        .map(|(i, _)| i)
        .collect();
    // read, write, apply, step × STEPS, read
    let block = 4 + STEPS as usize;
    assert_eq!(owned.len(), RUNS * block);
    for chunk in owned.chunks_exact(block) {
        assert_eq!(chunk[block - 1] - chunk[0], block - 1, "simulate interleaved");
        assert_eq!(records[chunk[0]].call, WorldCall::Read);
        assert_eq!(records[chunk[block - 1]].call, WorldCall::Read);
    }
}

proptest! {
    #[test]
    fn simulated_path_shape(
        steps in 0u32..20,
        u0 in -1.0f64..=1.0,
        u1 in -1.0f64..=1.0,
    ) {
        let setup = session(KinematicWorld::new(1));
        let control = Control::from_slice(&[u0, u1]);
        let path = setup.simulate_control(&control, steps).unwrap();
        let path = path.as_control().unwrap();
        prop_assert_eq!(path.state_count(), 2);
        prop_assert_eq!(path.durations(), &[steps]);
        prop_assert_eq!(&path.controls()[0], &control);
    }
}

//! Integration test: guard correctness under contention.
//!
//! Several threads propagate concurrently against one shared world. The
//! instrumented mock records every primitive call with its issuing thread;
//! each propagation must appear in the log as one contiguous, single-thread
//! block `write, apply, step × N, read`.

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use tether_core::{Control, SimState};
use tether_propagator::{SimStatePropagator, StatePropagator};
use tether_test_utils::{env_config, shared_env, CallKind, KinematicWorld};

const THREADS: usize = 4;
const PROPAGATIONS_PER_THREAD: usize = 25;
const STEPS: u32 = 3;

#[test]
fn concurrent_propagations_never_interleave() {
    let world = KinematicWorld::new(1).with_step_delay(Duration::from_micros(50));
    let log = world.log();
    let env = shared_env(env_config(1, 2), world);
    let prop = Arc::new(SimStatePropagator::new(Arc::clone(&env)));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let prop = Arc::clone(&prop);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let control = Control::from_slice(&[t as f64 / 10.0, 0.0]);
                let start = SimState::at_rest(1);
                barrier.wait();
                for _ in 0..PROPAGATIONS_PER_THREAD {
                    prop.propagate(&start, &control, STEPS, 0.01).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let records = log.records();
    let block = 3 + STEPS as usize;
    assert_eq!(records.len(), THREADS * PROPAGATIONS_PER_THREAD * block);

    let expected_kinds: Vec<CallKind> = [CallKind::Write, CallKind::Apply]
        .into_iter()
        .chain(std::iter::repeat_n(CallKind::Step, STEPS as usize))
        .chain([CallKind::Read])
        .collect();

    for chunk in records.chunks_exact(block) {
        let owner = chunk[0].thread;
        assert!(
            chunk.iter().all(|r| r.thread == owner),
            "propagation block interleaved across threads: {chunk:?}"
        );
        let kinds: Vec<CallKind> = chunk.iter().map(|r| r.call.kind()).collect();
        assert_eq!(kinds, expected_kinds);
    }
}

#[test]
fn each_thread_reads_its_own_result() {
    let world = KinematicWorld::new(1).with_step_delay(Duration::from_micros(20));
    let env = shared_env(env_config(1, 1), world);
    let prop = Arc::new(SimStatePropagator::new(env));

    let handles: Vec<_> = (1..=THREADS)
        .map(|t| {
            let prop = Arc::clone(&prop);
            thread::spawn(move || {
                let speed = t as f64;
                let control = Control::from_slice(&[speed]);
                for _ in 0..10 {
                    let end = prop
                        .propagate(&SimState::at_rest(1), &control, 2, 0.5)
                        .unwrap();
                    // Two steps of 0.5 s at `speed` from the origin.
                    assert_eq!(end.bodies()[0].position[0], speed);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}

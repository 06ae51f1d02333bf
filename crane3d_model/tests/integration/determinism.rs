//! Bit-identical replay of identical input sequences.

use super::{FIXED, model_of, same_bits};
use crane3d_model::prelude::*;

/// A force schedule exercising all three axes with sign changes.
fn schedule(i: usize) -> ControlForces {
    let t = i as f64 * FIXED;
    ControlForces::new(40.0 * (0.7 * t).sin(), -25.0 * (1.3 * t).cos(), 8.0 * (0.4 * t).sin())
}

fn replay(model_type: ModelType) -> Vec<ModelState> {
    let mut model = model_of(model_type);
    (0..400)
        .map(|i| {
            // mix both update paths and uneven frame times
            if i % 3 == 0 {
                model.update(FIXED, schedule(i))
            } else {
                model.update_fixed(FIXED, 0.013 + 0.004 * (i % 5) as f64, schedule(i))
            }
        })
        .collect()
}

#[test]
fn identical_inputs_give_identical_snapshots() {
    for model_type in ModelType::ALL {
        let first = replay(model_type);
        let second = replay(model_type);
        assert_eq!(first.len(), second.len());
        for (i, (a, b)) in first.iter().zip(&second).enumerate() {
            assert!(same_bits(a, b), "{model_type}: snapshot {i} differs: {a:?} vs {b:?}");
        }
    }
}

#[test]
fn independent_engines_on_threads_match_sequential_run() {
    let expected: Vec<ModelState> = ModelType::ALL.iter().map(|&t| *replay(t).last().unwrap()).collect();

    let handles: Vec<_> = ModelType::ALL
        .into_iter()
        .map(|t| std::thread::spawn(move || *replay(t).last().unwrap()))
        .collect();

    for (handle, want) in handles.into_iter().zip(&expected) {
        let got = handle.join().expect("engine thread panicked");
        assert!(same_bits(&got, want));
    }
}

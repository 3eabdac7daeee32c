//! End-to-end runs of the segregation model from fixed layouts.

use tessera_core::{run_for, Simulation};
use tessera_schelling::{SchellingParams, SegregationModel};
use tessera_test_utils::{label_counts, parse_layout, Layout, MIXED_10X10, SEEDS, SORTED_6X4};

fn model_from(layout: &Layout, params: SchellingParams, seed: u64) -> SegregationModel {
    SegregationModel::from_layout(
        layout.width(),
        layout.height(),
        params,
        &layout.labels,
        seed,
    )
    .unwrap()
}

#[test]
fn mixed_10x10_keeps_fifty_empty_for_200_steps() {
    let layout = parse_layout(MIXED_10X10);
    let params = SchellingParams {
        density: 0.5,
        want_similar: 0.5,
    };
    for seed in SEEDS {
        let mut model = model_from(&layout, params, seed);
        assert_eq!(model.labels().collect::<Vec<_>>(), layout.labels);
        assert_eq!(model.empty_spots().len(), 50);

        for step in 0..200 {
            model.step();
            assert_eq!(model.empty_spots().len(), 50, "seed {seed} step {step}");
            assert_eq!(label_counts(model.labels()), (50, 25, 25));
            assert!((0.0..=1.0).contains(&model.happiness()));
            assert!((0.0..=1.0).contains(&model.segregation()));
        }
    }
}

#[test]
fn empty_spots_track_the_grid() {
    let layout = parse_layout(MIXED_10X10);
    let mut model = model_from(&layout, SchellingParams::default(), 42);
    for _ in 0..50 {
        model.step();
        let mut listed = model.empty_spots().to_vec();
        listed.sort_unstable();
        let actual: Vec<usize> = model
            .labels()
            .enumerate()
            .filter(|&(_, label)| label == -1)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(listed, actual);
    }
}

#[test]
fn sorted_layout_is_already_settled() {
    let layout = parse_layout(SORTED_6X4);
    let params = SchellingParams {
        density: 0.5,
        want_similar: 0.5,
    };
    let mut model = model_from(&layout, params, 0);
    assert_eq!(model.happiness(), 1.0);
    assert!(model.step());
    assert_eq!(model.relocations(), 0);
    assert_eq!(model.labels().collect::<Vec<_>>(), layout.labels);
    assert_eq!(run_for(&mut model, 100), 1);
}

#[test]
fn settling_leaves_everyone_happy() {
    let layout = parse_layout(MIXED_10X10);
    let params = SchellingParams {
        density: 0.5,
        want_similar: 0.3,
    };
    for seed in SEEDS {
        let mut model = model_from(&layout, params, seed);
        let steps = run_for(&mut model, 500);
        if steps < 500 {
            // The settling step found nobody unhappy and moved nobody.
            assert_eq!(model.relocations(), 0);
            assert_eq!(model.happiness(), 1.0);
        }
    }
}

#[test]
fn random_construction_is_reproducible() {
    let build = |seed| {
        let model = SegregationModel::new(30, 30, SchellingParams::default(), seed).unwrap();
        model.cells().to_vec()
    };
    assert_eq!(build(5), build(5));
    assert_ne!(build(5), build(6));
}

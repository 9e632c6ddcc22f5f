use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use yacht_rr::data::linear_dataset;
use yacht_rr::domain::{FeatureMap, SplitConfig, SweepConfig};
use yacht_rr::fit::{ModelSweepRunner, fit_single, run_sweep};
use yacht_rr::math::output_width;

fn sweep_config(trials: usize, max_degree: usize, test_size: f64) -> SweepConfig {
    SweepConfig {
        trials,
        max_degree,
        split: SplitConfig { test_size },
    }
}

#[test]
fn degree_one_fits_noiseless_linear_data() {
    let mut rng = StdRng::seed_from_u64(2024);
    let ds = linear_dataset(20, 6, &mut rng).unwrap();

    let fit = fit_single(&ds, FeatureMap::Polynomial(1), &SplitConfig { test_size: 0.3 }, &mut rng).unwrap();
    assert!(fit.scores.r2 > 0.99, "r2 = {}", fit.scores.r2);
}

#[test]
fn sweep_on_small_linear_dataset_separates_constant_and_linear() {
    let mut rng = StdRng::seed_from_u64(17);
    let ds = linear_dataset(20, 6, &mut rng).unwrap();

    let res = run_sweep(&ds, sweep_config(50, 5, 0.3), &mut rng).unwrap();
    assert_eq!(res.degrees, vec![0, 1, 2, 3, 4, 5]);

    // A constant predictor can never beat the test mean, so R² <= 0.
    assert!(res.mean_r2[0] <= 1e-12, "degree 0 r2 = {}", res.mean_r2[0]);
    assert!(res.mean_r2[0] > -2.0, "degree 0 r2 = {}", res.mean_r2[0]);
    assert!(res.mean_r2[1] > 0.99, "degree 1 r2 = {}", res.mean_r2[1]);

    // Wider-than-tall designs still produce finite scores.
    for d in 2..=5 {
        assert!(res.mean_mse[d].is_finite(), "degree {d} mse = {}", res.mean_mse[d]);
    }
}

#[test]
fn sweep_with_enough_rows_is_near_perfect_for_every_positive_degree() {
    let mut rng = StdRng::seed_from_u64(5);
    let ds = linear_dataset(80, 2, &mut rng).unwrap();

    let res = run_sweep(&ds, sweep_config(10, 5, 0.3), &mut rng).unwrap();
    assert!(res.mean_r2[0] <= 1e-12);
    for d in 1..=5 {
        assert!(res.mean_r2[d] > 0.99, "degree {d} r2 = {}", res.mean_r2[d]);
        assert!(res.mean_mse[d] < 1e-8, "degree {d} mse = {}", res.mean_mse[d]);
    }
}

#[test]
fn six_feature_quadratic_sweep_is_well_determined() {
    let mut rng = StdRng::seed_from_u64(8);
    let ds = linear_dataset(150, 6, &mut rng).unwrap();

    let res = run_sweep(&ds, sweep_config(5, 2, 0.3), &mut rng).unwrap();
    assert_eq!(res.n_columns, vec![1, 7, 28]);
    assert!(res.mean_r2[1] > 0.99);
    assert!(res.mean_r2[2] > 0.99);
}

#[test]
fn expanded_widths_are_binomial() {
    let ds = linear_dataset(30, 6, &mut StdRng::seed_from_u64(1)).unwrap();
    let res = run_sweep(&ds, sweep_config(1, 4, 0.4), &mut StdRng::seed_from_u64(1)).unwrap();
    for (d, &cols) in res.n_columns.iter().enumerate() {
        assert_eq!(cols, output_width(6, d));
    }
}

#[test]
fn parallel_sweep_matches_sequential_trials() {
    let ds = linear_dataset(24, 3, &mut StdRng::seed_from_u64(3)).unwrap();
    let cfg = sweep_config(8, 3, 0.25);
    let runner = ModelSweepRunner::new(&ds, cfg).unwrap();

    let parallel = runner.run(&mut StdRng::seed_from_u64(99)).unwrap();

    let mut seeds = StdRng::seed_from_u64(99);
    let mut sums_r2 = vec![0.0; 4];
    let mut sums_mse = vec![0.0; 4];
    for trial in 0..8 {
        let seed: u64 = seeds.r#gen();
        let scores = runner.run_trial(trial, seed).unwrap();
        for (d, s) in scores.iter().enumerate() {
            assert_eq!(parallel.r2.get(trial, d), Some(s.r2));
            assert_eq!(parallel.mse.get(trial, d), Some(s.mse));
            sums_r2[d] += s.r2;
            sums_mse[d] += s.mse;
        }
    }

    for d in 0..4 {
        assert_relative_eq!(parallel.mean_r2[d], sums_r2[d] / 8.0, epsilon = 1e-12);
        assert_relative_eq!(parallel.mean_mse[d], sums_mse[d] / 8.0, max_relative = 1e-12);
    }
}

//! Integration tests for driving `rand` / `rand_distr` from numrand sources.

use numrand_core::{RandomSource, XorShift};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

#[test]
fn test_rand_rng_extension_methods() {
    let mut rng = RandomSource::from_seed(42);
    for _ in 0..1000 {
        let v: u8 = rng.gen_range(10..20);
        assert!((10..20).contains(&v));
    }
    let p: f64 = rng.gen();
    assert!((0.0..1.0).contains(&p));
}

#[test]
fn test_rand_distr_standard_normal_moments() {
    let mut rng = RandomSource::new(XorShift::new(7));
    let n = 200_000;
    let samples: Vec<f64> = (0..n).map(|_| StandardNormal.sample(&mut rng)).collect();
    let mean = samples.iter().sum::<f64>() / n as f64;
    let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    assert!(mean.abs() < 0.02, "mean {}", mean);
    assert!((var - 1.0).abs() < 0.02, "variance {}", var);
}

#[test]
fn test_slice_shuffle_is_reproducible() {
    let mut a: Vec<u32> = (0..50).collect();
    let mut b = a.clone();
    a.shuffle(&mut RandomSource::from_seed(3));
    b.shuffle(&mut RandomSource::from_seed(3));
    assert_eq!(a, b);
    let mut sorted = a.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..50).collect::<Vec<_>>());
}

// File: crates/barchart-core/src/data.rs
// Summary: Magnitude sources: fixed samples and a uniform random generator.

use rand::Rng;

/// Produces the ordered magnitude sequence a chart renders.
/// Order is draw order, left to right.
pub trait DataSource {
    fn samples(&self) -> Vec<f32>;
}

/// Caller-supplied samples, returned in order.
#[derive(Clone, Debug)]
pub struct FixedSamples(pub Vec<f32>);

impl DataSource for FixedSamples {
    fn samples(&self) -> Vec<f32> { self.0.clone() }
}

/// Uniformly distributed magnitudes in [0, 1) with a uniformly random count
/// in `min_len..=max_len`.
#[derive(Clone, Copy, Debug)]
pub struct UniformRandom {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for UniformRandom {
    fn default() -> Self { Self { min_len: 5, max_len: 15 } }
}

impl DataSource for UniformRandom {
    fn samples(&self) -> Vec<f32> {
        let mut rng = rand::rng();
        let n = rng.random_range(self.min_len..=self.max_len);
        (0..n).map(|_| rng.random::<f32>()).collect()
    }
}

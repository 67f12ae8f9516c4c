use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::data_source::Produce;

/// Generates a fixed number of normally distributed samples.
pub struct RandomNormal {
    rng: StdRng,
    mean: f64,
    stdev: f64,
    count: usize,
}

impl RandomNormal {
    /// A `seed` of zero seeds the generator from the current time; any other
    /// value makes the output reproducible.
    pub fn new(count: usize, mean: f64, stdev: f64, seed: u64) -> Self {
        let seed = if seed == 0 { time_seed() } else { seed };
        RandomNormal {
            rng: StdRng::seed_from_u64(seed),
            mean,
            stdev,
            count,
        }
    }
}

fn time_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp()) as u64
}

impl Produce for RandomNormal {
    /// Yields no samples when `count` values cannot be allocated.
    fn produce(&mut self) -> Vec<f64> {
        let mut data = Vec::new();
        if let Err(err) = data.try_reserve_exact(self.count) {
            log::error!("Cannot generate {} samples: {}", self.count, err);
            return data;
        }
        data.extend((0..self.count).map(|_| {
            let z: f64 = self.rng.sample(StandardNormal);
            self.mean + self.stdev * z
        }));
        data
    }
}

// Two-pass population statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub stdev: f64,
}

impl Summary {
    /// Returns `None` for an empty sequence.
    pub fn from_samples(data: &[f64]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let variance = data
            .iter()
            .map(|x| {
                let diff = x - mean;
                diff * diff
            })
            .sum::<f64>()
            / n;

        Some(Summary {
            count: data.len(),
            mean,
            variance,
            stdev: variance.sqrt(),
        })
    }
}

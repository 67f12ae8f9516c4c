use std::path::PathBuf;
use std::time::Instant;

use crate::console::Console;
use crate::random_normal::RandomNormal;

/// Something that can produce a finite sequence of samples.
pub trait Produce {
    fn produce(&mut self) -> Vec<f64>;
}

/// A producer whose values arrive one at a time until it signals the end.
///
/// Wrap it in [`OneAtATime`] to get a [`Produce`] implementation.
pub trait ProduceOne {
    /// Returns the next value, or `None` once there is no more data.
    fn produce_one(&mut self) -> Option<f64>;
}

pub struct OneAtATime<P>(pub P);

impl<P: ProduceOne> Produce for OneAtATime<P> {
    fn produce(&mut self) -> Vec<f64> {
        let mut data = Vec::new();
        while let Some(value) = self.0.produce_one() {
            data.push(value);
        }
        data
    }
}

/// A sample producer that records how long its last acquisition took.
pub struct DataSource {
    producer: Box<dyn Produce>,
    last_duration: f64,
}

impl DataSource {
    pub fn new(producer: impl Produce + 'static) -> Self {
        DataSource {
            producer: Box::new(producer),
            last_duration: f64::NAN,
        }
    }

    pub fn acquire(&mut self) -> Vec<f64> {
        let start = Instant::now();
        let data = self.producer.produce();
        self.last_duration = start.elapsed().as_secs_f64();
        log::debug!(
            "Acquired {} samples in {}s",
            data.len(),
            self.last_duration
        );
        data
    }

    /// Seconds spent in the last [`acquire`](Self::acquire), NaN before the first one.
    pub fn last_duration(&self) -> f64 {
        self.last_duration
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Input option {0} not implemented")]
    NotImplemented(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceConfig {
    Console {
        prompt: String,
    },
    RandomNormal {
        mean: f64,
        stdev: f64,
        count: usize,
        seed: u64,
    },
    File {
        path: PathBuf,
    },
    Csv {
        path: PathBuf,
        column: usize,
    },
}

impl SourceConfig {
    pub fn build(self) -> Result<DataSource, SourceError> {
        match self {
            SourceConfig::Console { prompt } => {
                log::debug!("Reading samples from the console");
                Ok(DataSource::new(OneAtATime(Console::stdio(prompt))))
            }
            SourceConfig::RandomNormal {
                mean,
                stdev,
                count,
                seed,
            } => {
                log::debug!(
                    "Generating {} samples: mean={}, stdev={}, seed={}",
                    count,
                    mean,
                    stdev,
                    seed
                );
                Ok(DataSource::new(RandomNormal::new(count, mean, stdev, seed)))
            }
            SourceConfig::File { path } => {
                log::debug!("Requested file input: {}", path.display());
                Err(SourceError::NotImplemented("--file"))
            }
            SourceConfig::Csv { path, column } => {
                log::debug!("Requested csv input: {}[{}]", path.display(), column);
                Err(SourceError::NotImplemented("--csv"))
            }
        }
    }
}

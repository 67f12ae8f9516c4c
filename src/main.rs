mod console;
mod data_source;
mod random_normal;
mod statistics;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::data_source::SourceConfig;
use crate::statistics::Summary;

#[derive(Parser, Debug)]
#[command(name = "data_stats", version)]
#[command(about = "Summary statistics of numbers read from the console or generated at random")]
#[command(group(ArgGroup::new("mode").args(["stdin", "random_normal", "file", "csv"])))]
struct Args {
    /// Read numbers interactively (the default)
    #[arg(long)]
    stdin: bool,

    /// Prompt text for --stdin
    #[arg(long, requires = "stdin", conflicts_with_all = ["random_normal", "file", "csv"])]
    prompt: Option<String>,

    /// Generate normally distributed numbers
    #[arg(long)]
    random_normal: bool,

    /// Mean for --random-normal [default: 0.0]
    #[arg(
        long,
        requires = "random_normal",
        conflicts_with_all = ["stdin", "file", "csv"],
        allow_negative_numbers = true
    )]
    mean: Option<f64>,

    /// Standard deviation for --random-normal [default: 1.0]
    #[arg(
        long,
        requires = "random_normal",
        conflicts_with_all = ["stdin", "file", "csv"],
        allow_negative_numbers = true
    )]
    stdev: Option<f64>,

    /// Number of samples for --random-normal [default: 0]
    #[arg(long, requires = "random_normal", conflicts_with_all = ["stdin", "file", "csv"])]
    count: Option<usize>,

    /// Generator seed for --random-normal, 0 seeds from the clock [default: 0]
    #[arg(long, requires = "random_normal", conflicts_with_all = ["stdin", "file", "csv"])]
    seed: Option<u64>,

    /// Read numbers from a file, one per line (not implemented)
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Read numbers from a CSV column (not implemented)
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Column index for --csv [default: 0]
    #[arg(long, requires = "csv", conflicts_with_all = ["stdin", "random_normal", "file"])]
    column: Option<usize>,
}

impl Args {
    fn source_config(self) -> SourceConfig {
        if let Some(path) = self.file {
            SourceConfig::File { path }
        } else if let Some(path) = self.csv {
            SourceConfig::Csv {
                path,
                column: self.column.unwrap_or(0),
            }
        } else if self.random_normal {
            SourceConfig::RandomNormal {
                mean: self.mean.unwrap_or(0.0),
                stdev: self.stdev.unwrap_or(1.0),
                count: self.count.unwrap_or(0),
                seed: self.seed.unwrap_or(0),
            }
        } else {
            SourceConfig::Console {
                prompt: self.prompt.unwrap_or_default(),
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let args = Args::parse();
    log::debug!("{:?}", args);

    let mut data_source = args.source_config().build().context("Bad arguments")?;

    let data = data_source.acquire();
    println!(
        "Read {} data in {} seconds.",
        data.len(),
        data_source.last_duration()
    );

    match Summary::from_samples(&data) {
        None => println!("N = 0"),
        Some(summary) => {
            println!("N = {}", summary.count);
            println!("Avg = {}", summary.mean);
            println!("Var = {}", summary.variance);
            println!("Stdev = {}", summary.stdev);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn config(args: &[&str]) -> SourceConfig {
        let argv = std::iter::once("data_stats").chain(args.iter().copied());
        Args::try_parse_from(argv).unwrap().source_config()
    }

    fn rejected(args: &[&str]) -> bool {
        let argv = std::iter::once("data_stats").chain(args.iter().copied());
        Args::try_parse_from(argv).is_err()
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn console_is_the_default() {
        let expected = SourceConfig::Console {
            prompt: String::new(),
        };
        assert_eq!(config(&[]), expected);
        assert_eq!(config(&["--stdin"]), expected);
    }

    #[test]
    fn console_prompt() {
        assert_eq!(
            config(&["--stdin", "--prompt=Enter datum"]),
            SourceConfig::Console {
                prompt: "Enter datum".to_string()
            }
        );
    }

    #[test]
    fn random_normal_defaults() {
        assert_eq!(
            config(&["--random-normal"]),
            SourceConfig::RandomNormal {
                mean: 0.0,
                stdev: 1.0,
                count: 0,
                seed: 0
            }
        );
    }

    #[test]
    fn random_normal_options() {
        assert_eq!(
            config(&[
                "--random-normal",
                "--mean=-4.0",
                "--stdev=0.5",
                "--count=10",
                "--seed=9"
            ]),
            SourceConfig::RandomNormal {
                mean: -4.0,
                stdev: 0.5,
                count: 10,
                seed: 9
            }
        );
    }

    #[test]
    fn file_and_csv_modes() {
        assert_eq!(
            config(&["--file=data.txt"]),
            SourceConfig::File {
                path: PathBuf::from("data.txt")
            }
        );
        assert_eq!(
            config(&["--csv=data.csv", "--column=3"]),
            SourceConfig::Csv {
                path: PathBuf::from("data.csv"),
                column: 3
            }
        );
    }

    #[test]
    fn options_under_the_wrong_mode_are_rejected() {
        assert!(rejected(&["--stdin", "--mean=1"]));
        assert!(rejected(&["--random-normal", "--prompt=x"]));
        assert!(rejected(&["--file=data.txt", "--column=2"]));
        assert!(rejected(&["--prompt=x"]));
    }

    #[test]
    fn every_mode_option_conflicts_with_other_modes() {
        let cases: &[(&str, &[&str])] = &[
            ("--prompt=x", &["--random-normal", "--file=d", "--csv=d"]),
            ("--mean=1", &["--stdin", "--file=d", "--csv=d"]),
            ("--stdev=2", &["--stdin", "--file=d", "--csv=d"]),
            ("--count=5", &["--stdin", "--file=d", "--csv=d"]),
            ("--seed=2", &["--stdin", "--file=d", "--csv=d"]),
            ("--column=2", &["--stdin", "--random-normal", "--file=d"]),
        ];
        for (option, modes) in cases {
            for mode in modes.iter() {
                assert!(rejected(&[*mode, *option]), "accepted {} {}", mode, option);
                assert!(rejected(&[*option, *mode]), "accepted {} {}", option, mode);
            }
        }
    }

    #[test]
    fn mode_options_without_a_mode_are_rejected() {
        for option in ["--mean=1", "--stdev=2", "--count=5", "--seed=2", "--column=2"] {
            assert!(rejected(&[option]), "accepted {}", option);
        }
    }

    #[test]
    fn unknown_and_conflicting_arguments_are_rejected() {
        assert!(rejected(&["--bogus"]));
        assert!(rejected(&["--random-normal", "--median=3"]));
        assert!(rejected(&["--stdin", "--random-normal"]));
        assert!(rejected(&["--random-normal", "--count=ten"]));
    }
}

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;
use wavepick::verify::CheckMode;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(
        short,
        long,
        global = true,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute per-aisle and per-order metric tables for every instance of a dataset
    Analyze {
        /// Dataset name under `datasets/`
        dataset: String,
        /// JSON file overriding the default directory layout
        #[arg(short, long, value_name = "FILE")]
        config_file: Option<PathBuf>,
    },
    /// Solve one instance exhaustively and write its solution and objective value
    Solve {
        /// Instance file to solve
        instance: PathBuf,
        /// Where to write the used order/aisle ids
        output: PathBuf,
        /// Where to write the achieved objective value
        solution: PathBuf,
    },
    /// Verify externally produced solutions against their instances and expected optima
    Check {
        /// Directory of instance files
        instance_dir: PathBuf,
        /// Directory of solution files, named like their instances
        output_dir: PathBuf,
        /// Directory of expected-optimum files, named like their instances
        solution_dir: PathBuf,
        /// Tolerance regime for the optimality comparison
        #[arg(long, value_enum, default_value = "standard")]
        mode: CheckModeArg,
    },
    /// Generate small random instances for oracle testing
    Generate {
        /// Directory to write the instances into
        dir: PathBuf,
        /// Number of instances to generate
        #[arg(short = 'n', long, default_value_t = 20)]
        count: usize,
        /// PRNG seed, fixed for reproducible batches
        #[arg(short, long, default_value_t = 420)]
        seed: u64,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CheckModeArg {
    Standard,
    Gap,
}

impl From<CheckModeArg> for CheckMode {
    fn from(arg: CheckModeArg) -> Self {
        match arg {
            CheckModeArg::Standard => CheckMode::Standard,
            CheckModeArg::Gap => CheckMode::Gap,
        }
    }
}

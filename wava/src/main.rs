use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wava::config::AnalyzeConfig;
use wava::io::cli::{Cli, Command};
use wava::{batch, generate, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    match args.command {
        Command::Analyze {
            dataset,
            config_file,
        } => {
            let config = match config_file {
                None => {
                    warn!(
                        "[MAIN] No config file provided, use --config-file to provide a custom layout"
                    );
                    AnalyzeConfig::default()
                }
                Some(config_file) => {
                    let file = File::open(config_file)?;
                    let reader = BufReader::new(file);
                    serde_json::from_reader(reader).context("incorrect config file format")?
                }
            };
            info!("[MAIN] analyzing dataset {dataset} with {config:?}");
            batch::run_analyze(&config, &dataset)
        }
        Command::Solve {
            instance,
            output,
            solution,
        } => batch::run_solve(&instance, &output, &solution),
        Command::Check {
            instance_dir,
            output_dir,
            solution_dir,
            mode,
        } => batch::run_check(&instance_dir, &output_dir, &solution_dir, mode.into()),
        Command::Generate { dir, count, seed } => {
            let mut rng = SmallRng::seed_from_u64(seed);
            generate::run_generate(&dir, count, &mut rng)
        }
    }
}

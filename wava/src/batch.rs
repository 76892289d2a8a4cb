use crate::config::AnalyzeConfig;
use crate::io::tables;
use anyhow::{Context, Result, bail};
use log::{info, warn};
use rayon::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use wavepick::analysis::{aisle_metrics, contained_aisles, order_metrics};
use wavepick::io::{
    UNFEASIBLE, read_expected, read_instance, read_solution, write_objective, write_solution,
};
use wavepick::solve::BruteForceSolver;
use wavepick::verify::{CheckMode, CheckReport, verify};

/// Analyzes every instance file of a dataset: per-aisle and per-order metric
/// tables plus the containment report, one CSV per instance.
///
/// Instances are fully independent, so they are processed as a parallel map;
/// a file that fails to parse is logged and skipped without affecting the
/// rest of the batch.
pub fn run_analyze(config: &AnalyzeConfig, dataset: &str) -> Result<()> {
    let dataset_dir = config.dataset_dir(dataset);
    if !dataset_dir.is_dir() {
        bail!("dataset directory does not exist: {}", dataset_dir.display());
    }
    let output_dir = config.output_dir(dataset);
    if !output_dir.is_dir() {
        warn!(
            "[ANALYZE] no output directory at {}, all usage flags will be false",
            output_dir.display()
        );
    }

    let aisles_dir = config.aisle_metrics_dir(dataset);
    let orders_dir = config.order_metrics_dir(dataset);
    fs::create_dir_all(&aisles_dir)
        .with_context(|| format!("could not create {}", aisles_dir.display()))?;
    fs::create_dir_all(&orders_dir)
        .with_context(|| format!("could not create {}", orders_dir.display()))?;

    let files = files_in(&dataset_dir)?;
    files.par_iter().for_each(|path| {
        if let Err(err) = analyze_instance(config, path, &output_dir, &aisles_dir, &orders_dir) {
            warn!("[ANALYZE] skipping {}: {:#}", path.display(), err);
        }
    });

    info!(
        "[ANALYZE] processed {} instance files from {}",
        files.len(),
        dataset_dir.display()
    );
    Ok(())
}

fn analyze_instance(
    config: &AnalyzeConfig,
    instance_path: &Path,
    output_dir: &Path,
    aisles_dir: &Path,
    orders_dir: &Path,
) -> Result<()> {
    let instance = read_instance(instance_path)?;
    let file_name = instance_path
        .file_name()
        .context("instance path has no file name")?;

    let output_path = output_dir.join(file_name);
    let solution = if output_path.is_file() {
        Some(read_solution(&output_path)?.solution)
    } else {
        warn!(
            "[ANALYZE] no output file for {}, usage flags will be false",
            file_name.to_string_lossy()
        );
        None
    };

    let csv_name = csv_file_name(file_name);
    tables::write_aisle_csv(
        &aisle_metrics(&instance, solution.as_ref()),
        &aisles_dir.join(&csv_name),
    )?;
    tables::write_order_csv(
        &order_metrics(&instance, solution.as_ref()),
        &orders_dir.join(&csv_name),
    )?;

    if config.write_containment {
        let contained: Vec<_> = (0..instance.n_aisles())
            .map(|aisle| contained_aisles(&instance.aisles, aisle))
            .collect();
        let report_name = format!("contained_aisles_{}", file_name.to_string_lossy());
        tables::write_containment_report(&contained, &aisles_dir.join(report_name))?;
    }

    Ok(())
}

/// Solves one instance exhaustively and writes the solution and objective
/// files (the `Unfeasible` literal when no subset pair works).
pub fn run_solve(instance_path: &Path, output_path: &Path, solution_path: &Path) -> Result<()> {
    let instance = read_instance(instance_path)?;
    let best = BruteForceSolver::new(&instance).solve();

    match &best {
        Some(best) => info!("[SOLVE] value obtained: {}", best.objective),
        None => info!("[SOLVE] value obtained: {UNFEASIBLE}"),
    }

    write_solution(best.as_ref().map(|b| &b.solution), output_path)?;
    write_objective(best.as_ref().map(|b| b.objective), solution_path)?;
    Ok(())
}

/// Verifies every instance of a directory against its solution and expected
/// optimum, reporting per file and continuing past failures.
pub fn run_check(
    instance_dir: &Path,
    output_dir: &Path,
    solution_dir: &Path,
    mode: CheckMode,
) -> Result<()> {
    if !instance_dir.is_dir() {
        bail!(
            "instance directory does not exist: {}",
            instance_dir.display()
        );
    }

    let files = files_in(instance_dir)?;
    let mut passed = 0;
    for path in &files {
        let file_name = path.file_name().context("instance path has no file name")?;
        let result = check_instance(
            path,
            &output_dir.join(file_name),
            &solution_dir.join(file_name),
            mode,
        );
        match result {
            Ok(report) if report.is_ok() => {
                passed += 1;
                match report.optimality_error {
                    Some(error) if error > 0.0 => info!(
                        "[CHECK] {} feasible, optimality error {error}",
                        file_name.to_string_lossy()
                    ),
                    _ => info!("[CHECK] success at {}", file_name.to_string_lossy()),
                }
            }
            Ok(report) => {
                for violation in &report.violations {
                    warn!("[CHECK] failed in {}: {violation}", file_name.to_string_lossy());
                }
            }
            Err(err) => warn!("[CHECK] skipping {}: {err:#}", file_name.to_string_lossy()),
        }
    }

    info!("[CHECK] {passed} of {} files passed", files.len());
    Ok(())
}

fn check_instance(
    instance_path: &Path,
    output_path: &Path,
    solution_path: &Path,
    mode: CheckMode,
) -> Result<CheckReport> {
    let instance = read_instance(instance_path)?;
    let solution_file = read_solution(output_path)?;
    let expected = if solution_path.is_file() {
        read_expected(solution_path)?
    } else {
        None
    };
    Ok(verify(&instance, &solution_file, expected, mode))
}

/// Regular files of a directory, sorted for a deterministic processing order.
fn files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("could not read directory {}", dir.display()))?;
    let mut files: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

fn csv_file_name(file_name: &OsStr) -> PathBuf {
    Path::new(file_name).with_extension("csv")
}

use crate::entities::{Instance, ItemId, Solution};
use anyhow::{Context, Result};
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Literal written in place of a solution/objective when no feasible
/// order/aisle subset pair exists.
pub const UNFEASIBLE: &str = "Unfeasible";

/// Writes a solution in the output format: the used-order count, one order id
/// per line, the used-aisle count, one aisle id per line. `None` writes the
/// [`UNFEASIBLE`] literal.
pub fn write_solution(solution: Option<&Solution>, path: &Path) -> Result<()> {
    let content = match solution {
        Some(solution) => render_solution(solution),
        None => UNFEASIBLE.to_string(),
    };
    fs::write(path, content)
        .with_context(|| format!("could not write solution file: {}", path.display()))
}

/// Writes the objective value file: the achieved value, or [`UNFEASIBLE`].
pub fn write_objective(objective: Option<f64>, path: &Path) -> Result<()> {
    let content = match objective {
        Some(value) => value.to_string(),
        None => UNFEASIBLE.to_string(),
    };
    fs::write(path, content)
        .with_context(|| format!("could not write objective file: {}", path.display()))
}

/// Writes an instance in the line-oriented format read by
/// [`read_instance`](super::read_instance).
pub fn write_instance(instance: &Instance, path: &Path) -> Result<()> {
    fs::write(path, render_instance(instance))
        .with_context(|| format!("could not write instance file: {}", path.display()))
}

fn render_solution(solution: &Solution) -> String {
    let mut out = String::new();
    writeln!(out, "{}", solution.orders.len()).unwrap();
    for order in &solution.orders {
        writeln!(out, "{order}").unwrap();
    }
    writeln!(out, "{}", solution.aisles.len()).unwrap();
    for aisle in &solution.aisles {
        writeln!(out, "{aisle}").unwrap();
    }
    out
}

fn render_instance(instance: &Instance) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{} {} {}",
        instance.n_orders(),
        instance.n_items,
        instance.n_aisles()
    )
    .unwrap();
    for order in &instance.orders {
        render_entity_line(&mut out, &order.demand);
    }
    for aisle in &instance.aisles {
        render_entity_line(&mut out, &aisle.supply);
    }
    if let Some(bounds) = instance.bounds {
        writeln!(out, "{} {}", bounds.lb, bounds.ub).unwrap();
    }
    out
}

fn render_entity_line(out: &mut String, quantities: &HashMap<ItemId, u64>) {
    write!(out, "{}", quantities.len()).unwrap();
    // fixed item order keeps re-rendering byte-identical
    for (item, qty) in quantities.iter().sorted() {
        write!(out, " {item} {qty}").unwrap();
    }
    out.push('\n');
}

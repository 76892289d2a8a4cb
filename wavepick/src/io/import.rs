use crate::entities::{Aisle, Bounds, Instance, ItemId, Order, Solution};
use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Contents of a solution (output) file: the used order/aisle ids together
/// with the counts the file declares for them. The two may disagree on
/// malformed files; reconciling them is the verifier's job, not the parser's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionFile {
    pub declared_orders: usize,
    pub declared_aisles: usize,
    pub solution: Solution,
}

/// Reads an instance file (see [`parse_instance`] for the format).
pub fn read_instance(path: &Path) -> Result<Instance> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    parse_instance(&content).with_context(|| format!("malformed instance file: {}", path.display()))
}

/// Parses the line-oriented instance format:
///
/// ```text
/// n_orders n_items n_aisles
/// k item_1 qty_1 ... item_k qty_k     (one line per order)
/// k item_1 qty_1 ... item_k qty_k     (one line per aisle)
/// lb ub                               (optional)
/// ```
pub fn parse_instance(content: &str) -> Result<Instance> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines.next().context("instance file is empty")?;
    let header = parse_ints(header).context("malformed header")?;
    let [n_orders, n_items, n_aisles] = header[..] else {
        bail!("header must contain exactly 3 integers, found {}", header.len());
    };
    let (n_orders, n_items, n_aisles) = (n_orders as usize, n_items as usize, n_aisles as usize);

    let mut orders = Vec::with_capacity(n_orders);
    for o in 0..n_orders {
        let (line_nr, line) = lines
            .next()
            .with_context(|| format!("missing line for order {o}"))?;
        let demand =
            parse_entity_line(line, n_items).with_context(|| format!("line {}", line_nr + 1))?;
        orders.push(Order::new(demand));
    }

    let mut aisles = Vec::with_capacity(n_aisles);
    for a in 0..n_aisles {
        let (line_nr, line) = lines
            .next()
            .with_context(|| format!("missing line for aisle {a}"))?;
        let supply =
            parse_entity_line(line, n_items).with_context(|| format!("line {}", line_nr + 1))?;
        aisles.push(Aisle::new(supply));
    }

    let bounds = match lines.next() {
        None => None,
        Some((line_nr, line)) => {
            let ints = parse_ints(line).with_context(|| format!("line {}", line_nr + 1))?;
            let [lb, ub] = ints[..] else {
                bail!(
                    "bound line must contain exactly 2 integers, found {} (line {})",
                    ints.len(),
                    line_nr + 1
                );
            };
            if lb > ub {
                bail!("lower bound {lb} exceeds upper bound {ub}");
            }
            Some(Bounds { lb, ub })
        }
    };

    Ok(Instance {
        orders,
        aisles,
        n_items,
        bounds,
    })
}

/// Reads a solution (output) file (see [`parse_solution`] for the format).
pub fn read_solution(path: &Path) -> Result<SolutionFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    parse_solution(&content).with_context(|| format!("malformed solution file: {}", path.display()))
}

/// Parses the solution format: the used-order count, one order id per line,
/// the used-aisle count, one aisle id per line.
///
/// A file declaring more ids than it contains still parses; the mismatch
/// surfaces as a structural violation during verification.
pub fn parse_solution(content: &str) -> Result<SolutionFile> {
    let mut values = Vec::new();
    for (line_nr, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: u64 = line
            .parse()
            .with_context(|| format!("expected a single integer on line {}", line_nr + 1))?;
        values.push(value);
    }

    let (&declared_orders, rest) = values.split_first().context("solution file is empty")?;
    let declared_orders = declared_orders as usize;

    let n_order_ids = declared_orders.min(rest.len());
    let orders = rest[..n_order_ids].iter().map(|&v| v as usize).collect();
    let (declared_aisles, aisles) = match rest[n_order_ids..].split_first() {
        None => (0, Vec::new()),
        Some((&count, ids)) => (count as usize, ids.iter().map(|&v| v as usize).collect()),
    };

    Ok(SolutionFile {
        declared_orders,
        declared_aisles,
        solution: Solution { orders, aisles },
    })
}

/// Reads an expected-optimum file: a single objective value, or the literal
/// `Unfeasible` (in which case there is no optimum to compare against).
pub fn read_expected(path: &Path) -> Result<Option<f64>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("could not open expected-value file: {}", path.display()))?;
    let token = content
        .split_whitespace()
        .next()
        .with_context(|| format!("expected-value file is empty: {}", path.display()))?;
    if token == super::UNFEASIBLE {
        return Ok(None);
    }
    let value: f64 = token
        .parse()
        .with_context(|| format!("expected objective value, got {token:?}"))?;
    Ok(Some(value))
}

fn parse_ints(line: &str) -> Result<Vec<u64>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("expected integer, got {token:?}"))
        })
        .collect()
}

/// Parses `k item_1 qty_1 ... item_k qty_k` into a sparse quantity map.
fn parse_entity_line(line: &str, n_items: usize) -> Result<HashMap<ItemId, u64>> {
    let ints = parse_ints(line)?;
    let (&k, pairs) = ints.split_first().context("empty entity line")?;
    let k = k as usize;
    if pairs.len() != 2 * k {
        bail!(
            "declared {k} entries but found {} values after the count",
            pairs.len()
        );
    }
    let mut map = HashMap::with_capacity(k);
    for pair in pairs.chunks_exact(2) {
        let (item, qty) = (pair[0] as usize, pair[1]);
        if item >= n_items {
            bail!("item id {item} out of range [0, {n_items})");
        }
        map.insert(item, qty);
    }
    Ok(map)
}

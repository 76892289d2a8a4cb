use anyhow::{Context, Result};
use log::info;
use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::index::sample;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use wavepick::entities::{Aisle, Bounds, Instance, ItemId, Order};
use wavepick::io::write_instance;

/// Writes `count` small random instances into `dir`, seeded for
/// reproducible batches. Sized so the brute-force oracle stays tractable.
pub fn run_generate(dir: &Path, count: usize, rng: &mut SmallRng) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("could not create {}", dir.display()))?;
    for i in 0..count {
        let instance = random_instance(rng);
        write_instance(&instance, &dir.join(format!("random_instance_{i}.txt")))?;
    }
    info!("[GENERATE] wrote {count} instances to {}", dir.display());
    Ok(())
}

/// A random instance with 3–10 orders/aisles/items. Orders demand 1–3
/// distinct items (1–3 units each), aisles stock up to 6 distinct items
/// (1–6 units each), and the bound window is `[0, 20..=40]`.
pub fn random_instance(rng: &mut SmallRng) -> Instance {
    let n_orders = rng.random_range(3..=10);
    let n_aisles = rng.random_range(3..=10);
    let n_items = rng.random_range(3..=10);

    let orders = (0..n_orders)
        .map(|_| Order::new(random_quantities(rng, n_items, 3, 3)))
        .collect();
    let aisles = (0..n_aisles)
        .map(|_| Aisle::new(random_quantities(rng, n_items, 6, 6)))
        .collect();

    Instance {
        orders,
        aisles,
        n_items,
        bounds: Some(Bounds {
            lb: 0,
            ub: rng.random_range(20..=40),
        }),
    }
}

fn random_quantities(
    rng: &mut SmallRng,
    n_items: usize,
    max_distinct: usize,
    max_qty: u64,
) -> HashMap<ItemId, u64> {
    let distinct = rng.random_range(1..=max_distinct.min(n_items));
    sample(rng, n_items, distinct)
        .into_iter()
        .map(|item| (item, rng.random_range(1..=max_qty)))
        .collect()
}

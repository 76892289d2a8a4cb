use crate::entities::{Instance, Solution};
use itertools::Itertools;
use log::debug;

/// A feasible solution found by exhaustive search, with its objective value.
#[derive(Debug, Clone, PartialEq)]
pub struct BruteForceSolution {
    pub solution: Solution,
    /// Total units collected by the used orders.
    pub collected: u64,
    /// Collected units per used aisle.
    pub objective: f64,
}

/// Exhaustive reference solver: enumerates every non-empty aisle subset and,
/// for each, every order subset, keeping the feasible pair that maximizes
/// collected units per aisle.
///
/// Subsets are enumerated in increasing-size, lexicographic order and an
/// incumbent is only replaced by a strictly better objective, so ties break
/// deterministically towards the earliest maximizer. Runtime is exponential
/// in both dimensions; this is a ground-truth oracle for small instances
/// (≲ 10 orders/aisles), not a production solver.
pub struct BruteForceSolver<'a> {
    instance: &'a Instance,
}

impl<'a> BruteForceSolver<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Searches the full subset space. `None` means no order/aisle subset
    /// pair satisfies both the per-item feasibility constraint and the bound
    /// window.
    pub fn solve(&self) -> Option<BruteForceSolution> {
        let instance = self.instance;
        let bounds = instance.bounds_or_unbounded();
        let mut best: Option<BruteForceSolution> = None;

        for aisle_set in (0..instance.n_aisles()).powerset() {
            if aisle_set.is_empty() {
                continue;
            }

            let mut supply = vec![0u64; instance.n_items];
            for &aisle in &aisle_set {
                for (&item, &qty) in &instance.aisles[aisle].supply {
                    supply[item] += qty;
                }
            }

            for order_set in (0..instance.n_orders()).powerset() {
                let mut demand = vec![0u64; instance.n_items];
                for &order in &order_set {
                    for (&item, &qty) in &instance.orders[order].demand {
                        demand[item] += qty;
                    }
                }

                let collected: u64 = demand.iter().sum();
                if !bounds.contains(collected) {
                    continue;
                }
                if (0..instance.n_items).any(|item| demand[item] > supply[item]) {
                    continue;
                }

                let objective = collected as f64 / aisle_set.len() as f64;
                if best.as_ref().map_or(true, |b| objective > b.objective) {
                    debug!(
                        "[BF] new incumbent: {} units over {} aisles ({objective:.4})",
                        collected,
                        aisle_set.len()
                    );
                    best = Some(BruteForceSolution {
                        solution: Solution {
                            orders: order_set,
                            aisles: aisle_set.clone(),
                        },
                        collected,
                        objective,
                    });
                }
            }
        }

        best
    }
}

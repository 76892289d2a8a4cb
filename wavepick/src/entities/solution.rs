use crate::entities::{AisleId, Instance, OrderId};

/// A candidate solution: the subset of orders to serve and the subset of
/// aisles to visit. Produced externally or by the brute-force solver, and not
/// guaranteed feasible; feasibility is exactly what [`crate::verify`] checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub orders: Vec<OrderId>,
    pub aisles: Vec<AisleId>,
}

impl Solution {
    /// Total units demanded across the used orders.
    pub fn total_collected(&self, instance: &Instance) -> u64 {
        self.orders
            .iter()
            .map(|&o| instance.orders[o].total_units())
            .sum()
    }

    /// Collected units per visited aisle. `None` when no aisles are used, in
    /// which case the objective is undefined.
    pub fn objective(&self, instance: &Instance) -> Option<f64> {
        match self.aisles.len() {
            0 => None,
            n => Some(self.total_collected(instance) as f64 / n as f64),
        }
    }

    pub fn uses_order(&self, order: OrderId) -> bool {
        self.orders.contains(&order)
    }

    pub fn uses_aisle(&self, aisle: AisleId) -> bool {
        self.aisles.contains(&aisle)
    }
}

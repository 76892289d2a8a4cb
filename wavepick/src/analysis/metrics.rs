use crate::analysis::{count_contained, count_satisfiable_orders, rareness_scores, weighted_rareness};
use crate::entities::{AisleId, Instance, OrderId, Solution};
use serde::Serialize;

/// One row of the per-aisle metric table consumed by external
/// plotting/reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AisleMetrics {
    pub aisle: AisleId,
    /// Total units stored in the aisle.
    pub items: u64,
    /// Distinct item types stored.
    pub unique_items: usize,
    /// Orders this aisle alone could fully satisfy.
    pub sat_orders: usize,
    /// Other aisles whose supply this aisle dominates.
    pub contained: usize,
    /// Quantity-weighted sum of the aisle-side item rareness scores.
    pub rareness: f64,
    /// Membership in the supplied solution's used aisles (false without one).
    pub is_used: bool,
}

/// One row of the per-order metric table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderMetrics {
    pub order: OrderId,
    /// Total units demanded by the order.
    pub items: u64,
    /// Distinct item types demanded.
    pub unique_items: usize,
    /// Quantity-weighted sum of the order-side item rareness scores.
    pub rareness: f64,
    pub is_used: bool,
}

/// Computes the full per-aisle metric table for an instance, marking usage
/// against `solution` when one is supplied.
pub fn aisle_metrics(instance: &Instance, solution: Option<&Solution>) -> Vec<AisleMetrics> {
    let scores = rareness_scores(instance.aisles.iter().map(|a| &a.supply), instance.n_items);

    instance
        .aisles
        .iter()
        .enumerate()
        .map(|(id, aisle)| AisleMetrics {
            aisle: id,
            items: aisle.total_units(),
            unique_items: aisle.unique_items(),
            sat_orders: count_satisfiable_orders(aisle, &instance.orders),
            contained: count_contained(&instance.aisles, id),
            rareness: weighted_rareness(&aisle.supply, &scores),
            is_used: solution.is_some_and(|s| s.uses_aisle(id)),
        })
        .collect()
}

/// Computes the full per-order metric table for an instance.
pub fn order_metrics(instance: &Instance, solution: Option<&Solution>) -> Vec<OrderMetrics> {
    let scores = rareness_scores(instance.orders.iter().map(|o| &o.demand), instance.n_items);

    instance
        .orders
        .iter()
        .enumerate()
        .map(|(id, order)| OrderMetrics {
            order: id,
            items: order.total_units(),
            unique_items: order.unique_items(),
            rareness: weighted_rareness(&order.demand, &scores),
            is_used: solution.is_some_and(|s| s.uses_order(id)),
        })
        .collect()
}

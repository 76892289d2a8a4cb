use crate::entities::{Aisle, Order};

/// Whether a single aisle can fully satisfy an order: its supply covers every
/// demanded item in the demanded quantity. Items the aisle lacks count as
/// supply 0, so an order with empty demand is satisfiable by any aisle.
pub fn order_satisfiable(aisle: &Aisle, order: &Order) -> bool {
    order
        .demand
        .iter()
        .all(|(&item, &qty)| qty <= aisle.supply_of(item))
}

/// Number of orders this aisle alone could fully satisfy.
pub fn count_satisfiable_orders(aisle: &Aisle, orders: &[Order]) -> usize {
    orders
        .iter()
        .filter(|order| order_satisfiable(aisle, order))
        .count()
}

mod instance;
mod solution;

pub use instance::{Aisle, AisleId, Bounds, Instance, ItemId, Order, OrderId};
pub use solution::Solution;

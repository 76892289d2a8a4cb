mod containment;
mod metrics;
mod rareness;
mod satisfiability;

pub use containment::{contained_aisles, count_contained};
pub use metrics::{AisleMetrics, OrderMetrics, aisle_metrics, order_metrics};
pub use rareness::{EPS, rareness_scores, weighted_rareness};
pub use satisfiability::{count_satisfiable_orders, order_satisfiable};

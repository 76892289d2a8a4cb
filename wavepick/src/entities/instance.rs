use std::collections::HashMap;

/// Integer identifier of an item type (SKU class), in `[0, n_items)`.
pub type ItemId = usize;
/// Integer identifier of an order, in `[0, n_orders)`.
pub type OrderId = usize;
/// Integer identifier of an aisle, in `[0, n_aisles)`.
pub type AisleId = usize;

/// A customer pick request: a sparse map from item type to demanded quantity.
/// Items absent from the map have demand 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    pub demand: HashMap<ItemId, u64>,
}

impl Order {
    pub fn new(demand: HashMap<ItemId, u64>) -> Self {
        Self { demand }
    }

    pub fn demand_of(&self, item: ItemId) -> u64 {
        self.demand.get(&item).copied().unwrap_or(0)
    }

    /// Total number of units demanded across all item types.
    pub fn total_units(&self) -> u64 {
        self.demand.values().sum()
    }

    /// Number of distinct item types demanded.
    pub fn unique_items(&self) -> usize {
        self.demand.len()
    }
}

/// A warehouse storage location: a sparse map from item type to available quantity.
/// Items absent from the map have supply 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aisle {
    pub supply: HashMap<ItemId, u64>,
}

impl Aisle {
    pub fn new(supply: HashMap<ItemId, u64>) -> Self {
        Self { supply }
    }

    pub fn supply_of(&self, item: ItemId) -> u64 {
        self.supply.get(&item).copied().unwrap_or(0)
    }

    /// Total number of units stored across all item types.
    pub fn total_units(&self) -> u64 {
        self.supply.values().sum()
    }

    /// Number of distinct item types stored.
    pub fn unique_items(&self) -> usize {
        self.supply.len()
    }
}

/// Inclusive window `[lb, ub]` on the total number of units a wave may collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub lb: u64,
    pub ub: u64,
}

impl Bounds {
    /// `[0, u64::MAX]`: the window used when an instance carries no bound line.
    pub const UNBOUNDED: Bounds = Bounds { lb: 0, ub: u64::MAX };

    pub fn contains(&self, collected: u64) -> bool {
        self.lb <= collected && collected <= self.ub
    }
}

/// Instance of the wave picking problem: orders to (partially) serve, aisles
/// to pick from, and an optional window on the total units collected.
///
/// All entities are immutable once parsed; every analysis in this crate is a
/// pure query over this structure.
#[derive(Debug, Clone)]
pub struct Instance {
    pub orders: Vec<Order>,
    pub aisles: Vec<Aisle>,
    /// Number of distinct item types; every item id in any map is `< n_items`.
    pub n_items: usize,
    /// Present in the solver/checker instance variant, absent in the plain analyzer variant.
    pub bounds: Option<Bounds>,
}

impl Instance {
    pub fn n_orders(&self) -> usize {
        self.orders.len()
    }

    pub fn n_aisles(&self) -> usize {
        self.aisles.len()
    }

    pub fn bounds_or_unbounded(&self) -> Bounds {
        self.bounds.unwrap_or(Bounds::UNBOUNDED)
    }
}

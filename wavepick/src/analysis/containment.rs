use crate::entities::{Aisle, AisleId};

/// Ids of all aisles whose supply is entrywise dominated by `target`'s:
/// for every item they stock, `target` stocks at least as much. The target
/// can fully substitute for any aisle in the returned list.
///
/// The relation is irreflexive by definition; the target itself is never
/// included. An aisle stocking strictly more distinct item types than the
/// target cannot be dominated, so those are skipped without a per-item scan.
pub fn contained_aisles(aisles: &[Aisle], target: AisleId) -> Vec<AisleId> {
    let target_supply = &aisles[target].supply;

    aisles
        .iter()
        .enumerate()
        .filter(|&(id, other)| {
            id != target
                && other.supply.len() <= target_supply.len()
                && other
                    .supply
                    .iter()
                    .all(|(item, &qty)| qty <= target_supply.get(item).copied().unwrap_or(0))
        })
        .map(|(id, _)| id)
        .collect()
}

/// Number of aisles dominated by `target`. See [`contained_aisles`].
pub fn count_contained(aisles: &[Aisle], target: AisleId) -> usize {
    contained_aisles(aisles, target).len()
}

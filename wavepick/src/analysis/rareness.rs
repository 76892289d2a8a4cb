use crate::entities::ItemId;
use std::collections::HashMap;

/// Smoothing constant added to the appearance count, so items appearing in
/// very few containers score high but finite.
pub const EPS: f64 = 1e-5;

/// Scarcity score per item type, derived from aggregate quantity and
/// appearance statistics over a set of containers (aisle supplies or order
/// demands; the two sides are scored independently over the same item space).
///
/// `score[e] = 1 / (total_qty[e] * (appearances[e] + EPS))`; an item with zero
/// total quantity is pinned to `1 / EPS`, the maximal (finite) score.
pub fn rareness_scores<'a, I>(containers: I, n_items: usize) -> Vec<f64>
where
    I: IntoIterator<Item = &'a HashMap<ItemId, u64>>,
{
    let mut total_qty = vec![0u64; n_items];
    let mut appearances = vec![0usize; n_items];

    for quantities in containers {
        for (&item, &qty) in quantities {
            total_qty[item] += qty;
            appearances[item] += 1;
        }
    }

    (0..n_items)
        .map(|item| match total_qty[item] {
            0 => 1.0 / EPS,
            qty => 1.0 / (qty as f64 * (appearances[item] as f64 + EPS)),
        })
        .collect()
}

/// Rareness of a whole container: the quantity-weighted sum of its items'
/// scores.
pub fn weighted_rareness(quantities: &HashMap<ItemId, u64>, scores: &[f64]) -> f64 {
    quantities
        .iter()
        .map(|(&item, &qty)| scores[item] * qty as f64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn scores_follow_the_inverse_formula() {
        let containers = [
            HashMap::from([(0, 4), (1, 1)]),
            HashMap::from([(0, 2)]),
            HashMap::from([(1, 3)]),
        ];
        let scores = rareness_scores(containers.iter(), 2);
        // item 0: qty 6 over 2 containers; item 1: qty 4 over 2 containers
        assert!(approx_eq!(f64, scores[0], 1.0 / (6.0 * (2.0 + EPS))));
        assert!(approx_eq!(f64, scores[1], 1.0 / (4.0 * (2.0 + EPS))));
    }

    #[test]
    fn absent_items_score_maximally_rare() {
        let containers = [HashMap::from([(0, 1)])];
        let scores = rareness_scores(containers.iter(), 3);
        assert!(approx_eq!(f64, scores[1], 1.0 / EPS));
        assert!(approx_eq!(f64, scores[2], 1.0 / EPS));
        assert!(scores[1].is_finite());
        assert!(scores[0] < scores[1]);
    }

    #[test]
    fn aggregation_matches_direct_iteration() {
        // the scorer's total-quantity pass must agree with summing containers directly
        let containers = [
            HashMap::from([(0, 2), (2, 5)]),
            HashMap::from([(1, 1), (2, 1)]),
        ];
        let direct: u64 = containers.iter().flat_map(|c| c.values()).sum();

        let mut total_qty = vec![0u64; 3];
        for container in &containers {
            for (&item, &qty) in container {
                total_qty[item] += qty;
            }
        }
        assert_eq!(total_qty.iter().sum::<u64>(), direct);

        // and the scores derived from those totals are consistent
        let scores = rareness_scores(containers.iter(), 3);
        assert!(approx_eq!(f64, scores[2], 1.0 / (6.0 * (2.0 + EPS))));
    }

    #[test]
    fn weighted_rareness_scales_with_quantity() {
        let scores = vec![0.5, 0.25];
        let quantities = HashMap::from([(0, 2), (1, 4)]);
        assert!(approx_eq!(
            f64,
            weighted_rareness(&quantities, &scores),
            2.0 * 0.5 + 4.0 * 0.25
        ));
    }
}

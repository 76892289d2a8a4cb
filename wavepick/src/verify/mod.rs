use crate::entities::{AisleId, Instance, ItemId, OrderId};
use crate::io::SolutionFile;
use std::fmt;

/// Named tolerance regimes for the optimality comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckMode {
    /// Hard pass/fail comparison at absolute tolerance `1e-3`.
    #[default]
    Standard,
    /// Gap measurement at absolute tolerance `1e-4`: a mismatch is graded as
    /// an error value rather than failing the check.
    Gap,
}

impl CheckMode {
    pub fn tolerance(self) -> f64 {
        match self {
            CheckMode::Standard => 1e-3,
            CheckMode::Gap => 1e-4,
        }
    }
}

/// A single problem found while checking a candidate solution. Violations are
/// plain values: a batch run collects and reports them per instance and moves
/// on to the next one.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The declared order/aisle counts disagree with the ids actually present.
    MalformedCounts {
        declared_orders: usize,
        actual_orders: usize,
        declared_aisles: usize,
        actual_aisles: usize,
    },
    /// The solution references an order id the instance does not have.
    UnknownOrder { order: OrderId },
    /// The solution references an aisle id the instance does not have.
    UnknownAisle { aisle: AisleId },
    /// Used-order demand exceeds used-aisle supply for this item type.
    Infeasible {
        item: ItemId,
        demanded: u64,
        supplied: u64,
    },
    BelowLowerBound { collected: u64, lb: u64 },
    AboveUpperBound { collected: u64, ub: u64 },
    /// The solution uses no aisles, so its objective is undefined.
    NoUsedAisles,
    /// The achieved objective differs from the expected optimum beyond the
    /// mode's tolerance.
    OptimalityGap {
        achieved: f64,
        expected: f64,
        gap: f64,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MalformedCounts {
                declared_orders,
                actual_orders,
                declared_aisles,
                actual_aisles,
            } => write!(
                f,
                "declared {declared_orders} orders and {declared_aisles} aisles, found {actual_orders} and {actual_aisles}"
            ),
            Violation::UnknownOrder { order } => {
                write!(f, "order id {order} does not exist in the instance")
            }
            Violation::UnknownAisle { aisle } => {
                write!(f, "aisle id {aisle} does not exist in the instance")
            }
            Violation::Infeasible {
                item,
                demanded,
                supplied,
            } => write!(
                f,
                "demand for item {item} exceeds supply ({demanded} > {supplied})"
            ),
            Violation::BelowLowerBound { collected, lb } => write!(
                f,
                "solution collects {collected} units, below the lower bound {lb}"
            ),
            Violation::AboveUpperBound { collected, ub } => write!(
                f,
                "solution collects {collected} units, above the upper bound {ub}"
            ),
            Violation::NoUsedAisles => write!(f, "no aisles used, objective is undefined"),
            Violation::OptimalityGap {
                achieved,
                expected,
                gap,
            } => write!(
                f,
                "objective {achieved} differs from expected optimum {expected} by {gap}"
            ),
        }
    }
}

/// Outcome of verifying one candidate solution against its instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    pub violations: Vec<Violation>,
    /// Graded optimality error: 0 within tolerance, else the absolute gap.
    /// Only set when an expected optimum was supplied and the objective was
    /// defined.
    pub optimality_error: Option<f64>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks a candidate solution: structural well-formedness, per-item
/// feasibility, the inclusive `[lb, ub]` window on collected units, and
/// (when an expected optimum is supplied) objective optimality.
///
/// Later stages only run once the earlier ones pass; within the feasibility
/// stage every offending item type is reported, not just the first.
pub fn verify(
    instance: &Instance,
    file: &SolutionFile,
    expected: Option<f64>,
    mode: CheckMode,
) -> CheckReport {
    let mut report = CheckReport::default();
    let solution = &file.solution;

    if file.declared_orders != solution.orders.len()
        || file.declared_aisles != solution.aisles.len()
    {
        report.violations.push(Violation::MalformedCounts {
            declared_orders: file.declared_orders,
            actual_orders: solution.orders.len(),
            declared_aisles: file.declared_aisles,
            actual_aisles: solution.aisles.len(),
        });
        return report;
    }

    for &order in &solution.orders {
        if order >= instance.n_orders() {
            report.violations.push(Violation::UnknownOrder { order });
        }
    }
    for &aisle in &solution.aisles {
        if aisle >= instance.n_aisles() {
            report.violations.push(Violation::UnknownAisle { aisle });
        }
    }
    if !report.is_ok() {
        return report;
    }

    let mut demand = vec![0u64; instance.n_items];
    for &order in &solution.orders {
        for (&item, &qty) in &instance.orders[order].demand {
            demand[item] += qty;
        }
    }
    let mut supply = vec![0u64; instance.n_items];
    for &aisle in &solution.aisles {
        for (&item, &qty) in &instance.aisles[aisle].supply {
            supply[item] += qty;
        }
    }
    for item in 0..instance.n_items {
        if demand[item] > supply[item] {
            report.violations.push(Violation::Infeasible {
                item,
                demanded: demand[item],
                supplied: supply[item],
            });
        }
    }
    if !report.is_ok() {
        return report;
    }

    let collected: u64 = demand.iter().sum();
    let bounds = instance.bounds_or_unbounded();
    if collected < bounds.lb {
        report.violations.push(Violation::BelowLowerBound {
            collected,
            lb: bounds.lb,
        });
        return report;
    }
    if collected > bounds.ub {
        report.violations.push(Violation::AboveUpperBound {
            collected,
            ub: bounds.ub,
        });
        return report;
    }

    if let Some(expected) = expected {
        match solution.objective(instance) {
            None => report.violations.push(Violation::NoUsedAisles),
            Some(achieved) => {
                let gap = (achieved - expected).abs();
                report.optimality_error = Some(if gap < mode.tolerance() { 0.0 } else { gap });
                if mode == CheckMode::Standard && gap > mode.tolerance() {
                    report.violations.push(Violation::OptimalityGap {
                        achieved,
                        expected,
                        gap,
                    });
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Solution;
    use crate::io::parse_instance;

    // 2 orders (3 and 2 units), 2 aisles, bounds [2, 5]
    fn instance() -> Instance {
        parse_instance("2 2 2\n2 0 2 1 1\n1 1 2\n2 0 2 1 2\n1 1 1\n2 5\n").unwrap()
    }

    fn file(orders: Vec<usize>, aisles: Vec<usize>) -> SolutionFile {
        SolutionFile {
            declared_orders: orders.len(),
            declared_aisles: aisles.len(),
            solution: Solution { orders, aisles },
        }
    }

    #[test]
    fn a_feasible_solution_passes() {
        let report = verify(&instance(), &file(vec![0], vec![0]), None, CheckMode::Standard);
        assert!(report.is_ok());
    }

    #[test]
    fn declared_count_mismatch_is_malformed() {
        let mut f = file(vec![0], vec![0]);
        f.declared_orders = 2;
        let report = verify(&instance(), &f, None, CheckMode::Standard);
        assert_eq!(report.violations.len(), 1);
        assert!(matches!(
            report.violations[0],
            Violation::MalformedCounts {
                declared_orders: 2,
                actual_orders: 1,
                ..
            }
        ));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let report = verify(&instance(), &file(vec![7], vec![0]), None, CheckMode::Standard);
        assert_eq!(report.violations, vec![Violation::UnknownOrder { order: 7 }]);
    }

    #[test]
    fn demand_exceeding_supply_by_one_unit_is_infeasible() {
        // orders 0+1 demand 3 of item 1; aisle 0 supplies 2
        let report = verify(
            &instance(),
            &file(vec![0, 1], vec![0]),
            None,
            CheckMode::Standard,
        );
        assert_eq!(
            report.violations,
            vec![Violation::Infeasible {
                item: 1,
                demanded: 3,
                supplied: 2,
            }]
        );
    }

    #[test]
    fn bound_edges_are_inclusive() {
        // order 1 collects exactly lb = 2 units
        let at_lb = verify(&instance(), &file(vec![1], vec![0]), None, CheckMode::Standard);
        assert!(at_lb.is_ok());

        // orders 0+1 collect exactly ub = 5 units, spread over both aisles
        let at_ub = verify(
            &instance(),
            &file(vec![0, 1], vec![0, 1]),
            None,
            CheckMode::Standard,
        );
        assert!(at_ub.is_ok());
    }

    #[test]
    fn collecting_past_the_upper_bound_is_rejected() {
        let mut instance = instance();
        instance.bounds = Some(crate::entities::Bounds { lb: 0, ub: 4 });
        let report = verify(
            &instance,
            &file(vec![0, 1], vec![0, 1]),
            None,
            CheckMode::Standard,
        );
        assert_eq!(
            report.violations,
            vec![Violation::AboveUpperBound {
                collected: 5,
                ub: 4,
            }]
        );
    }

    #[test]
    fn collecting_below_the_lower_bound_is_rejected() {
        let report = verify(&instance(), &file(vec![], vec![0]), None, CheckMode::Standard);
        assert_eq!(
            report.violations,
            vec![Violation::BelowLowerBound { collected: 0, lb: 2 }]
        );
    }

    #[test]
    fn optimality_mismatch_fails_the_standard_mode() {
        // order 0 over aisle 0: objective 3.0
        let report = verify(
            &instance(),
            &file(vec![0], vec![0]),
            Some(3.5),
            CheckMode::Standard,
        );
        assert!(!report.is_ok());
        assert!(matches!(
            report.violations[0],
            Violation::OptimalityGap { achieved, expected, .. }
                if achieved == 3.0 && expected == 3.5
        ));
    }

    #[test]
    fn optimality_within_tolerance_passes() {
        let report = verify(
            &instance(),
            &file(vec![0], vec![0]),
            Some(3.0004),
            CheckMode::Standard,
        );
        assert!(report.is_ok());
        assert_eq!(report.optimality_error, Some(0.0));
    }

    #[test]
    fn gap_mode_grades_instead_of_failing() {
        let report = verify(
            &instance(),
            &file(vec![0], vec![0]),
            Some(3.5),
            CheckMode::Gap,
        );
        assert!(report.is_ok());
        assert_eq!(report.optimality_error, Some(0.5));
    }

    #[test]
    fn objective_is_undefined_without_aisles() {
        let mut instance = instance();
        instance.bounds = Some(crate::entities::Bounds { lb: 0, ub: 5 });
        let report = verify(&instance, &file(vec![], vec![]), Some(1.0), CheckMode::Standard);
        assert_eq!(report.violations, vec![Violation::NoUsedAisles]);
    }
}

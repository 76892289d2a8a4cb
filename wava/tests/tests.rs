#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use float_cmp::approx_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use test_case::test_case;

    use wava::config::AnalyzeConfig;
    use wavepick::analysis::{aisle_metrics, order_metrics};
    use wavepick::io::{read_expected, read_instance, read_solution};
    use wavepick::solve::BruteForceSolver;
    use wavepick::verify::{CheckMode, verify};

    fn instance_path(file_name: &str) -> std::path::PathBuf {
        Path::new("../assets/instances").join(file_name)
    }

    #[test_case("tiny_0001.txt"; "tiny 0001")]
    #[test_case("tiny_0002.txt"; "tiny 0002")]
    #[test_case("tiny_0003.txt"; "tiny 0003")]
    fn instances_parse_and_analyze(file_name: &str) {
        let instance = read_instance(&instance_path(file_name)).unwrap();
        let aisles = aisle_metrics(&instance, None);
        let orders = order_metrics(&instance, None);
        assert_eq!(aisles.len(), instance.n_aisles());
        assert_eq!(orders.len(), instance.n_orders());
        // recomputing on the same parsed instance yields identical tables
        assert_eq!(aisles, aisle_metrics(&instance, None));
        assert_eq!(orders, order_metrics(&instance, None));
    }

    #[test_case("tiny_0001.txt"; "tiny 0001")]
    #[test_case("tiny_0002.txt"; "tiny 0002")]
    #[test_case("tiny_0003.txt"; "tiny 0003")]
    fn brute_force_matches_the_recorded_optimum(file_name: &str) {
        let instance = read_instance(&instance_path(file_name)).unwrap();
        let expected = read_expected(&Path::new("../assets/solutions").join(file_name)).unwrap();
        let best = BruteForceSolver::new(&instance).solve();

        match expected {
            None => assert!(best.is_none()),
            Some(value) => {
                let best = best.unwrap();
                assert!(approx_eq!(f64, best.objective, value, epsilon = 1e-9));
            }
        }
    }

    #[test_case("tiny_0001.txt"; "tiny 0001")]
    #[test_case("tiny_0003.txt"; "tiny 0003")]
    fn recorded_solutions_pass_verification(file_name: &str) {
        let instance = read_instance(&instance_path(file_name)).unwrap();
        let solution_file = read_solution(&Path::new("../assets/outputs").join(file_name)).unwrap();
        let expected = read_expected(&Path::new("../assets/solutions").join(file_name)).unwrap();

        let report = verify(&instance, &solution_file, expected, CheckMode::Standard);
        assert!(report.is_ok(), "{:?}", report.violations);
        assert_eq!(report.optimality_error, Some(0.0));
    }

    #[test]
    fn analyze_writes_metric_tables() {
        let root = std::env::temp_dir().join("wava_analyze_test");
        fs::remove_dir_all(&root).ok();
        fs::create_dir_all(root.join("datasets/t")).unwrap();
        fs::create_dir_all(root.join("output/output_t")).unwrap();
        fs::copy(
            "../assets/instances/tiny_0001.txt",
            root.join("datasets/t/tiny_0001.txt"),
        )
        .unwrap();
        fs::copy(
            "../assets/outputs/tiny_0001.txt",
            root.join("output/output_t/tiny_0001.txt"),
        )
        .unwrap();

        let config = AnalyzeConfig {
            root: root.clone(),
            ..AnalyzeConfig::default()
        };
        wava::batch::run_analyze(&config, "t").unwrap();

        let csv = fs::read_to_string(root.join("aisles/t/tiny_0001.csv")).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "aisle,items,uniqueItems,satOrders,contained,isUsed,rareness"
        );
        assert_eq!(lines.len(), 3);
        // the recorded solution uses aisle 0 but not aisle 1
        assert!(lines[1].starts_with("0,5,3,2,1,true,"));
        assert!(lines[2].starts_with("1,1,1,0,0,false,"));

        let orders_csv = fs::read_to_string(root.join("orders/t/tiny_0001.csv")).unwrap();
        assert_eq!(
            orders_csv.lines().next().unwrap(),
            "order,items,uniqueItems,isUsed,rareness"
        );

        // aisle 0 dominates aisle 1, so the containment report exists
        let report = fs::read_to_string(root.join("aisles/t/contained_aisles_tiny_0001.txt")).unwrap();
        assert_eq!(report.trim(), "0 1");

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn generated_instances_survive_the_oracle() {
        let dir = std::env::temp_dir().join("wava_generate_test");
        fs::remove_dir_all(&dir).ok();

        let mut rng = SmallRng::seed_from_u64(420);
        wava::generate::run_generate(&dir, 3, &mut rng).unwrap();

        for i in 0..3 {
            let instance = read_instance(&dir.join(format!("random_instance_{i}.txt"))).unwrap();
            assert!(instance.bounds.is_some());
            // lb = 0, so the empty wave always makes these feasible
            let best = BruteForceSolver::new(&instance).solve().unwrap();
            assert!(best.objective >= 0.0);
        }

        fs::remove_dir_all(&dir).ok();
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use loadplan::config::LPConfig;
    use loadplan::io;
    use loadplan::io::cross_section_svg::{bundle_to_svg, truck_to_svg};
    use loadplan::io::output::PlanOutput;
    use loadplan::io::svg_util::{Color, SvgLayoutTheme, change_brightness};
    use loadplan::planner::LoadPlanner;
    use matryoshka::entities::{Bundle, Order, Pipe, TruckLoad, TruckProfile};
    use matryoshka::io::import::Importer;
    use matryoshka::util::PackingStrategy;

    fn import(path: &str) -> Order {
        let ext_order = io::read_order(Path::new(path)).unwrap();
        Importer::new().import_order(&ext_order).unwrap()
    }

    #[test_case("../assets/sample_order.json"; "sample_order")]
    #[test_case("../assets/heavy_order.json"; "heavy_order")]
    fn test_instance(order_path: &str) {
        let _ = env_logger::builder().is_test(true).try_init();
        let order = import(order_path);
        let planner = LoadPlanner::new(LPConfig::default());
        let result = planner.solve(&order);
        let plan = planner.report(&order, &result);

        assert_eq!(plan.summary.total_pipes, order.pipes.len());
        assert_eq!(plan.summary.trucks_needed, plan.trucks.len());
        let packed_pipes = plan
            .trucks
            .iter()
            .flat_map(|t| &t.load.bundles)
            .map(|b| b.total_pipes)
            .sum::<usize>();
        assert_eq!(packed_pipes, order.pipes.len());
        for (i, truck) in plan.trucks.iter().enumerate() {
            assert_eq!(truck.load.truck_number, i + 1);
            assert!(truck.load.total_weight_kg <= order.truck.max_payload_kg);
        }

        //the plan survives a round trip through its output format
        let output = PlanOutput {
            order: io::read_order(Path::new(order_path)).unwrap(),
            plan,
            config: LPConfig::default(),
        };
        let json = serde_json::to_string(&output).unwrap();
        let back: PlanOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.plan.summary, output.plan.summary);
        assert_eq!(back.config, output.config);

        for truck in &result.trucks {
            let _ = truck_to_svg(
                truck,
                LPConfig::default().svg_draw_options,
                &LPConfig::default().nesting.clearance,
                LPConfig::default().packing.stack_gap_mm,
            );
        }
    }

    #[test]
    fn sample_order_fits_one_truck() {
        let order = import("../assets/sample_order.json");
        assert_eq!(order.n_lines, 7);
        let planner = LoadPlanner::new(LPConfig::default());
        let result = planner.solve(&order);
        let plan = planner.report(&order, &result);

        assert_eq!(plan.summary.trucks_needed, 1);
        assert_eq!(plan.strategy, Some(PackingStrategy::TruckCountFirst));
        assert!(approx_eq!(f64, plan.summary.total_weight_kg, 5044.92, epsilon = 1e-6));

        let stats = &plan.nesting_stats;
        assert!(stats.nesting_enabled);
        assert_eq!(stats.max_levels_used, 4);
        assert_eq!(stats.bundles_with_nesting, 6);
        assert_eq!(stats.estimated_space_reduction_pct, 85.7);

        assert!(plan.weight_limits.is_valid);
        assert_eq!(
            plan.warnings,
            vec![
                "Truck 1: Bundle with TPE800/PN6 weighs 2036kg - requires heavy equipment",
                "Truck 1: Bundle with TPE800/PN6 weighs 2036kg - requires heavy equipment",
            ]
        );

        let truck = &plan.trucks[0];
        assert_eq!(truck.load.bundle_count, 8);
        assert!(truck.load.bundles[0].requires_heavy_extraction);
        assert!(!truck.load.bundles[0].nested[0].requires_heavy_extraction);
        assert!(truck.compliance.is_compliant);
        assert!(truck.compliance.is_cog_optimal);
        assert!(approx_eq!(f64, truck.compliance.cog_x_m, 6.8, epsilon = 1e-9));
    }

    #[test]
    fn heavy_order_falls_back_to_first_fit() {
        let order = import("../assets/heavy_order.json");
        let planner = LoadPlanner::new(LPConfig::default());
        let result = planner.solve(&order);
        let plan = planner.report(&order, &result);

        assert_eq!(plan.summary.trucks_needed, 4);
        assert_eq!(plan.strategy, Some(PackingStrategy::FirstFitDecreasing));
        assert_eq!(plan.nesting_stats.bundles_with_nesting, 0);
        assert_eq!(plan.nesting_stats.max_levels_used, 1);
        assert_eq!(plan.nesting_stats.estimated_space_reduction_pct, -300.0);

        assert!(!plan.weight_limits.is_valid);
        let heavy = plan
            .warnings
            .iter()
            .filter(|w| w.ends_with("requires heavy equipment"))
            .count();
        assert_eq!(heavy, 30);
        assert_eq!(plan.warnings[30], "Order exceeds single truck capacity by 36732kg");
        assert!(plan.trucks.iter().all(|t| t.compliance.is_compliant));
    }

    #[test]
    fn heavy_extraction_threshold_is_configurable() {
        let order = import("../assets/sample_order.json");
        let config = LPConfig {
            heavy_extraction_threshold_kg: 10_000.0,
            ..LPConfig::default()
        };
        let planner = LoadPlanner::new(config);
        let plan = planner.report(&order, &planner.solve(&order));
        assert!(plan.warnings.is_empty());
        assert!(
            plan.trucks[0]
                .load
                .bundles
                .iter()
                .all(|b| !b.requires_heavy_extraction)
        );
    }

    #[test]
    fn disabled_nesting_reports_no_reduction() {
        let order = import("../assets/sample_order.json");
        let mut config = LPConfig::default();
        config.nesting.enabled = false;
        let planner = LoadPlanner::new(config);
        let plan = planner.report(&order, &planner.solve(&order));

        assert_eq!(plan.nesting_stats.estimated_space_reduction_pct, 0.0);
        assert_eq!(plan.nesting_stats.bundles_with_nesting, 0);
        assert_eq!(plan.nesting_stats.max_levels_used, 1);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: LPConfig = serde_json::from_str(
            r#"{"packing": {"strategy": "FirstFitDecreasing", "stack_gap_mm": 20.0,
                "rebalance_iterations": 10, "balance_iterations": 20, "balance_trigger_pct": 15.0,
                "balance_min_improvement": 0.1, "extra_truck_attempts": 4}}"#,
        )
        .unwrap();
        assert_eq!(config.packing.strategy, PackingStrategy::FirstFitDecreasing);
        assert_eq!(config.nesting, LPConfig::default().nesting);
        assert_eq!(config.heavy_extraction_threshold_kg, 2000.0);
        assert_eq!(config.svg_draw_options, LPConfig::default().svg_draw_options);
    }

    #[test]
    fn bundle_svg_contains_every_pipe() {
        let order = import("../assets/sample_order.json");
        let config = LPConfig::default();
        let planner = LoadPlanner::new(config);
        let result = planner.solve(&order);
        let bundle = &result.trucks[0].bundles[0];

        let svg = bundle_to_svg(bundle, config.svg_draw_options, &config.nesting.clearance).to_string();
        //outer and bore circle per pipe
        assert_eq!(svg.matches("<circle").count(), 2 * bundle.total_pipes());
        assert!(svg.contains("Valid:"));
    }

    #[test]
    fn truck_svg_draws_identical_bundles_separately() {
        let config = LPConfig::default();
        let small = Arc::new(Pipe {
            code: "TPE110/PN6".to_string(),
            sdr: 26,
            pressure_class: "PN6".to_string(),
            outer_diameter: 110.0,
            inner_diameter: 101.6,
            wall_thickness: None,
            weight_per_meter: 1.42,
        });
        let mut truck = TruckLoad::new(1, TruckProfile::default(), 12.0);
        for _ in 0..3 {
            truck.add_bundle(Bundle::new(small.clone(), 0));
        }

        let svg = truck_to_svg(
            &truck,
            config.svg_draw_options,
            &config.nesting.clearance,
            config.packing.stack_gap_mm,
        )
        .to_string();
        for idx in 0..3 {
            assert_eq!(svg.matches(&format!("\"truck_1_bundle_{idx}\"")).count(), 1);
        }
        assert_eq!(svg.matches("<circle").count(), 2 * truck.total_pipes());
    }

    #[test]
    fn colors() {
        let color = Color::try_from("#CC824A").unwrap();
        assert_eq!(color, SvgLayoutTheme::EARTH_TONES.truck_fill);
        assert_eq!(color.to_string(), "#CC824A");
        assert_eq!(change_brightness(Color(200, 100, 50), 0.5), Color(100, 50, 25));
        assert!(Color::try_from("#12345").is_err());
        assert!(Color::try_from("#GG0000").is_err());
    }
}

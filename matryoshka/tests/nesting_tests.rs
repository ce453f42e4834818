mod common;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use float_cmp::approx_eq;
    use matryoshka::entities::Pipe;
    use matryoshka::nesting::build_bundles;
    use matryoshka::util::{
        ClearanceConfig, MAX_NESTING_LEVELS, NestingConfig, PLAN_NESTING_LEVELS, assertions,
    };
    use test_case::test_case;

    use crate::common::{init_logger, pipe, pipes, telescoping_set};

    fn config(max_levels: usize) -> NestingConfig {
        NestingConfig {
            max_levels,
            ..NestingConfig::default()
        }
    }

    #[test]
    fn full_telescoping_chain_with_defaults() {
        init_logger();
        let result = build_bundles(&telescoping_set(), &NestingConfig::default());

        assert_eq!(result.bundles.len(), 1);
        let bundle = &result.bundles[0];
        assert_eq!(bundle.host.code, "TPE800/PN6");
        assert_eq!(bundle.depth(), 7);
        assert_eq!(
            bundle.chain_label(),
            "TPE800/PN6 > TPE630/PN6 > TPE500/PN6 > TPE400/PN6 > TPE315/PN6 > TPE200/PN6 > TPE110/PN6"
        );
        assert_eq!(result.pipes_processed, 7);
        assert_eq!(result.pipes_nested, 6);
        assert!(approx_eq!(f64, result.reduction_ratio, 6.0 / 7.0, epsilon = 1e-9));
        assert!(result.unpacked.is_empty());
    }

    #[test]
    fn loading_plan_levels_split_the_chain() {
        let config = NestingConfig::for_loading_plan();
        assert_eq!(config.max_levels, PLAN_NESTING_LEVELS);
        assert_eq!(NestingConfig::default().max_levels, MAX_NESTING_LEVELS);

        let result = build_bundles(&telescoping_set(), &config);
        let labels = result.bundles.iter().map(|b| b.chain_label()).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec![
                "TPE800/PN6 > TPE630/PN6 > TPE500/PN6 > TPE400/PN6",
                "TPE315/PN6 > TPE200/PN6 > TPE110/PN6",
            ]
        );
        assert_eq!(result.pipes_nested, 5);
    }

    #[test_case(0, 7; "zero levels")]
    #[test_case(1, 7; "host only")]
    #[test_case(2, 4; "two levels")]
    #[test_case(10, 1; "ceiling")]
    #[test_case(50, 1; "clamped to ceiling")]
    fn bundle_count_by_max_levels(max_levels: usize, expected_bundles: usize) {
        let result = build_bundles(&telescoping_set(), &config(max_levels));
        assert_eq!(result.bundles.len(), expected_bundles);
        assert!(result.bundles.iter().all(|b| b.depth() <= max_levels.clamp(1, 10)));
    }

    #[test]
    fn disabled_nesting_keeps_every_pipe_alone() {
        let config = NestingConfig {
            enabled: false,
            ..NestingConfig::default()
        };
        let result = build_bundles(&telescoping_set(), &config);
        assert_eq!(result.bundles.len(), 7);
        assert_eq!(result.pipes_nested, 0);
        assert_eq!(result.bundles[0].host.code, "TPE800/PN6");
    }

    #[test]
    fn empty_input() {
        let result = build_bundles(&[], &NestingConfig::default());
        assert!(result.bundles.is_empty());
        assert_eq!(result.pipes_processed, 0);
        assert_eq!(result.reduction_ratio, 0.0);
    }

    #[test]
    fn identical_pipes_do_not_nest() {
        let result = build_bundles(&pipes(&[("TPE400/PN6", 4)]), &NestingConfig::default());
        assert_eq!(result.bundles.len(), 4);
        assert!(result.bundles.iter().all(|b| b.depth() == 1));
    }

    fn heavy_400() -> Arc<Pipe> {
        Arc::new(Pipe {
            code: "TPE400/PN16".to_string(),
            sdr: 11,
            pressure_class: "PN16".to_string(),
            outer_diameter: 400.0,
            inner_diameter: 327.2,
            wall_thickness: None,
            weight_per_meter: 60.0,
        })
    }

    #[test]
    fn prefer_lighter_skips_heavy_guests() {
        let input = vec![pipe("TPE500/PN6"), heavy_400(), pipe("TPE315/PN6")];

        let lighter = build_bundles(&input, &NestingConfig::default());
        assert_eq!(lighter.bundles[0].chain_label(), "TPE500/PN6 > TPE315/PN6");

        let largest = build_bundles(
            &input,
            &NestingConfig {
                prefer_lighter: false,
                ..NestingConfig::default()
            },
        );
        assert_eq!(largest.bundles[0].chain_label(), "TPE500/PN6 > TPE400/PN16");
        assert_eq!(largest.bundles.len(), 2);
    }

    #[test_case(1.5, "TPE500/PN6 > TPE315/PN6"; "default ratio rejects heavy guest")]
    #[test_case(2.5, "TPE500/PN6 > TPE400/PN16"; "raised ratio admits heavy guest")]
    #[test_case(0.3, "TPE500/PN6"; "lowered ratio rejects every guest")]
    fn max_weight_ratio_limits_guests(max_weight_ratio: f64, expected_chain: &str) {
        let input = vec![pipe("TPE500/PN6"), heavy_400(), pipe("TPE315/PN6")];
        let config = NestingConfig {
            max_weight_ratio,
            ..NestingConfig::default()
        };
        let result = build_bundles(&input, &config);
        assert_eq!(result.bundles[0].chain_label(), expected_chain);
    }

    #[test]
    fn every_pipe_ends_up_in_exactly_one_bundle() {
        let input = pipes(&[
            ("TPE800/PN6", 3),
            ("TPE630/PN6", 2),
            ("TPE400/PN6", 5),
            ("TPE250/PN6", 4),
            ("TPE160/PN6", 6),
            ("TPE110/PN6", 7),
        ]);
        let result = build_bundles(&input, &NestingConfig::default());
        let total = result.bundles.iter().map(|b| b.total_pipes()).sum::<usize>();
        assert_eq!(total, input.len());
        assert_eq!(result.pipes_nested, input.len() - result.bundles.len());

        let clearance = ClearanceConfig::default();
        assert!(result.bundles.iter().all(|b| assertions::bundle_is_valid(b, &clearance)));
    }
}

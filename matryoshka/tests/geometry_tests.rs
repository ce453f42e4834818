#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use matryoshka::geometry::circle_packing::{pack_circles_greedy, pack_nested_bundle_cross_section};
    use matryoshka::geometry::hexagonal::{hexagonal_packing, max_rows, pipes_per_row, row_height, stack_height};
    use matryoshka::geometry::primitives::Point;
    use matryoshka::geometry::stacking::{analyze_stack_stability, max_safe_layers, validate_stacking_layers};
    use matryoshka::geometry::{estimate_mixed_stack, estimate_mixed_stack_height};
    use test_case::test_case;

    #[test]
    fn hexagonal_heights() {
        assert!(approx_eq!(f64, row_height(100.0), 86.602_540_378, epsilon = 1e-6));
        assert_eq!(stack_height(100.0, 0), 0.0);
        assert_eq!(stack_height(100.0, 1), 100.0);
        assert!(approx_eq!(f64, stack_height(100.0, 3), 273.205_080_757, epsilon = 1e-6));
    }

    #[test_case(100.0, 99.0, 0; "lower than one pipe")]
    #[test_case(100.0, 100.0, 1; "exactly one pipe")]
    #[test_case(100.0, 273.3, 3; "three rows")]
    #[test_case(0.0, 1000.0, 0; "degenerate diameter")]
    fn rows_in_height(diameter: f64, height: f64, expected: usize) {
        assert_eq!(max_rows(diameter, height), expected);
    }

    #[test_case(100.0, 1000.0, false, 10; "regular row")]
    #[test_case(100.0, 1000.0, true, 9; "offset row")]
    #[test_case(100.0, 50.0, true, 0; "too narrow")]
    #[test_case(-1.0, 1000.0, false, 0; "negative diameter")]
    fn pipes_in_row(diameter: f64, width: f64, offset: bool, expected: usize) {
        assert_eq!(pipes_per_row(diameter, width, offset), expected);
    }

    #[test]
    fn uniform_hexagonal_stack() {
        let packing = hexagonal_packing(100.0, 1000.0, 300.0, false);
        assert_eq!(packing.rows, 3);
        assert_eq!(packing.total_pipes(), 29);
        assert_eq!(packing.max_per_row, 10);
        assert!(packing.positions.iter().filter(|p| p.row == 1).all(|p| p.offset_row));
        assert!(approx_eq!(f64, packing.stack_width, 1000.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, packing.stack_height, 273.205_080_757, epsilon = 1e-6));
        assert!(packing.efficiency > 0.8 && packing.efficiency < 0.85);
    }

    #[test]
    fn mixed_stack_single_row() {
        assert_eq!(estimate_mixed_stack_height(&[], 2480.0, 20.0), 0.0);
        assert_eq!(estimate_mixed_stack_height(&[400.0], 2480.0, 20.0), 400.0);
        assert_eq!(estimate_mixed_stack_height(&[800.0, 800.0, 800.0], 2480.0, 20.0), 800.0);
    }

    #[test]
    fn mixed_stack_multiple_rows() {
        let four = estimate_mixed_stack(&[800.0; 4], 2480.0, 20.0);
        assert_eq!(four.rows(), 2);
        assert!(approx_eq!(f64, four.height, 800.0 + 800.0 * 0.866_025_403_784, epsilon = 1e-6));

        let mixed = estimate_mixed_stack(&[400.0, 800.0, 630.0], 1000.0, 20.0);
        assert_eq!(mixed.row_max_diameters, vec![800.0, 630.0, 400.0]);
        let expected = 800.0 + (715.0 + 515.0) * 0.866_025_403_784;
        assert!(approx_eq!(f64, mixed.height, expected, epsilon = 1e-6));
    }

    #[test]
    fn stack_height_does_not_depend_on_input_order() {
        let a = estimate_mixed_stack_height(&[110.0, 630.0, 400.0, 800.0, 250.0], 2480.0, 20.0);
        let b = estimate_mixed_stack_height(&[800.0, 630.0, 400.0, 250.0, 110.0], 2480.0, 20.0);
        assert_eq!(a, b);
    }

    #[test_case(11, 200.0, 8)]
    #[test_case(11, 400.0, 7)]
    #[test_case(17, 500.0, 3)]
    #[test_case(21, 315.0, 4)]
    #[test_case(26, 630.0, 3)]
    #[test_case(33, 110.0, 4; "unknown sdr")]
    fn safe_layers(sdr: u32, diameter: f64, expected: usize) {
        assert_eq!(max_safe_layers(sdr, diameter), expected);
    }

    #[test]
    fn stacking_layer_warnings() {
        let warning = validate_stacking_layers(630.0, 4, 26);
        assert!(warning.is_some_and(|w| w.contains("should not exceed 3 stacking layers")));
        assert!(validate_stacking_layers(110.0, 4, 26).is_none());
    }

    #[test]
    fn stack_stability() {
        let light = analyze_stack_stability(110.0, 1.42, 12.0, 3, 26, 2480.0);
        assert_eq!(light.pipes_per_row, 22);
        assert_eq!(light.total_pipes, 65);
        assert!(light.is_stable);
        assert!(light.warnings.is_empty());

        let heavy = analyze_stack_stability(630.0, 46.64, 12.0, 4, 26, 2480.0);
        assert_eq!(heavy.total_pipes, 10);
        assert!(!heavy.is_stable);
        assert_eq!(heavy.warnings.len(), 3);
        assert!(heavy.warnings.iter().any(|w| w.starts_with("High load on bottom pipes")));
    }

    #[test]
    fn greedy_packing_fills_floor_first() {
        let packing = pack_circles_greedy(&[100.0; 4], 300.0, 100.0, None, 0.0);
        assert_eq!(packing.total_packed(), 3);
        assert_eq!(packing.unpacked, 1);
        let xs = packing.circles.iter().map(|c| c.circle.center.0).collect::<Vec<_>>();
        assert_eq!(xs, vec![50.0, 150.0, 250.0]);
        assert!(packing.circles.iter().all(|c| c.circle.center.1 == 50.0));
        assert!(approx_eq!(f64, packing.efficiency, 3.0 * std::f64::consts::PI * 2500.0 / 30_000.0, epsilon = 1e-9));
    }

    #[test]
    fn greedy_packing_keeps_labels() {
        let codes = vec!["small".to_string(), "large".to_string()];
        let packing = pack_circles_greedy(&[50.0, 100.0], 1000.0, 1000.0, Some(&codes), 5.0);
        assert_eq!(packing.circles[0].code.as_deref(), Some("large"));
        assert_eq!(packing.circles[1].code.as_deref(), Some("small"));
        let (a, b) = (&packing.circles[0].circle, &packing.circles[1].circle);
        assert!(!a.collides_with(b, 5.0));
    }

    #[test]
    fn nested_cross_section() {
        let packing = pack_nested_bundle_cross_section(700.0, &[100.0, 300.0], 15.0);
        assert_eq!(packing.total_packed(), 2);
        assert_eq!(packing.circles[0].circle.center, Point(0.0, 0.0));
        let second = packing.circles[1].circle.center;
        assert!(approx_eq!(f64, second.0, 215.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, second.1, 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, packing.efficiency, 25_000.0 / 122_500.0, epsilon = 1e-9));

        let crowded = pack_nested_bundle_cross_section(700.0, &[300.0, 300.0], 15.0);
        assert_eq!(crowded.total_packed(), 1);
        assert_eq!(crowded.unpacked, 1);
    }
}

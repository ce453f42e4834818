mod common;

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use matryoshka::entities::{Bundle, PackingResult, TruckLoad, TruckProfile};
    use matryoshka::io::export::{export, export_bundle, round_to};
    use matryoshka::io::ext_repr::{ExtOrder, ExtPackingResult};
    use matryoshka::io::import::Importer;
    use matryoshka::util::PackingStrategy;
    use std::sync::Arc;

    use crate::common::pipe;

    fn parse(json: &str) -> ExtOrder {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn order_lines_expand_into_pipes() {
        let ext_order = parse(
            r#"{
                "name": "expansion",
                "pipes": [
                    {"code": "TPE400/PN6", "outer_diameter_mm": 400, "inner_diameter_mm": 369.4,
                     "sdr": 26, "pressure_class": "PN6", "weight_per_meter": 18.8, "quantity": 3},
                    {"code": "TPE110/PN6", "outer_diameter_mm": 110, "inner_diameter_mm": 101.6,
                     "sdr": 26, "pressure_class": "PN6", "weight_per_meter": 1.42}
                ]
            }"#,
        );
        let order = Importer::new().import_order(&ext_order).unwrap();

        assert_eq!(order.pipes.len(), 4);
        assert_eq!(order.n_lines, 2);
        assert_eq!(order.pipe_length_m, 12.0);
        assert_eq!(order.truck, TruckProfile::default());
        assert!(Arc::ptr_eq(&order.pipes[0], &order.pipes[2]));
        assert!(approx_eq!(f64, order.total_weight(), (3.0 * 18.8 + 1.42) * 12.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, order.pipes[0].wall(), 15.3, epsilon = 1e-9));
    }

    #[test]
    fn zero_quantity_lines_are_skipped() {
        let ext_order = parse(
            r#"{
                "name": "zero",
                "pipe_length_m": 13.0,
                "pipes": [
                    {"code": "TPE400/PN6", "outer_diameter_mm": 400, "inner_diameter_mm": 369.4,
                     "sdr": 26, "pressure_class": "PN6", "weight_per_meter": 18.8, "quantity": 0}
                ]
            }"#,
        );
        let order = Importer::new().import_order(&ext_order).unwrap();
        assert!(order.pipes.is_empty());
        assert_eq!(order.n_lines, 0);
        assert_eq!(order.pipe_length_m, 13.0);
    }

    #[test]
    fn invalid_input_is_rejected() {
        let importer = Importer::new();
        let negative = parse(
            r#"{
                "name": "negative",
                "pipes": [
                    {"code": "TPE400/PN6", "outer_diameter_mm": -400, "inner_diameter_mm": 369.4,
                     "sdr": 26, "pressure_class": "PN6", "weight_per_meter": 18.8}
                ]
            }"#,
        );
        assert!(importer.import_order(&negative).is_err());

        let mut no_length = parse(r#"{"name": "length", "pipes": []}"#);
        no_length.pipe_length_m = 0.0;
        assert!(importer.import_order(&no_length).is_err());

        let mut no_payload = parse(r#"{"name": "payload", "pipes": []}"#);
        no_payload.truck.max_payload_kg = 0.0;
        assert!(importer.import_order(&no_payload).is_err());
    }

    #[test]
    fn exported_bundle_mirrors_the_chain() {
        let mut outer = Bundle::new(pipe("TPE800/PN16"), 0);
        let mut middle = Bundle::new(pipe("TPE500/PN6"), 1);
        middle.children.push(Bundle::new(pipe("TPE315/PN6"), 2));
        outer.children.push(middle);

        let ext = export_bundle(&outer, 12.0);
        assert_eq!(ext.outer_pipe, "TPE800/PN16");
        assert_eq!(ext.nesting_levels, 3);
        assert_eq!(ext.total_pipes, 3);
        assert_eq!(ext.nested.len(), 1);
        assert_eq!(ext.nested[0].nested[0].outer_pipe, "TPE315/PN6");
        assert!(ext.nested[0].nested[0].nested.is_empty());
        assert_eq!(ext.bundle_weight_kg, round_to((168.7 + 29.05 + 11.71) * 12.0, 2));
        assert!(ext.requires_heavy_extraction);
        assert!(!ext.nested[0].requires_heavy_extraction);
    }

    #[test]
    fn exported_result_serializes() {
        let mut truck = TruckLoad::new(1, TruckProfile::default(), 12.0);
        truck.add_bundle(Bundle::new(pipe("TPE630/PN6"), 0));
        let result = PackingResult::new(
            vec![truck],
            Some(PackingStrategy::TruckCountFirst),
            vec![],
        );

        let ext = export(&result);
        assert_eq!(ext.trucks_needed, 1);
        assert_eq!(ext.trucks[0].bundle_count, 1);
        assert_eq!(ext.trucks[0].utilization_pct, round_to(46.64 * 12.0 / 240.0, 1));

        let json = serde_json::to_value(&ext).unwrap();
        assert!(json.get("warnings").is_none());
        assert!(json["trucks"][0]["bundles"][0].get("nested").is_none());

        let back: ExtPackingResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.strategy, Some(PackingStrategy::TruckCountFirst));
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(12.345_6, 2), 12.35);
        assert_eq!(round_to(99.95, 0), 100.0);
        assert_eq!(round_to(-1.25, 1), -1.3);
    }
}

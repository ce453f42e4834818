use itertools::Itertools;
use log::warn;
use ordered_float::OrderedFloat;
use svg::Document;
use svg::node::element::{Group, Rectangle, Title};

use matryoshka::clearance::{minimum_gap_with, validate_with};
use matryoshka::entities::{Bundle, TruckLoad};
use matryoshka::geometry::circle_packing::{pack_circles_greedy, pack_nested_bundle_cross_section};
use matryoshka::geometry::primitives::{Circle, Point};
use matryoshka::util::ClearanceConfig;

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Cross-section of a truck, seen from the rear: the outer pipes of all bundles packed
/// bottom-left in the cargo space, with their nested pipes drawn inside.
pub fn truck_to_svg(
    truck: &TruckLoad,
    options: SvgDrawOptions,
    clearance: &ClearanceConfig,
    stack_gap_mm: f64,
) -> Document {
    let width = truck.profile.internal_width_mm;
    let height = truck.profile.internal_height_mm;
    let theme = &options.theme;
    let stroke_width = f64::min(width, height) * 0.001 * theme.stroke_width_multiplier;

    //placed circles are labelled with the index of their bundle
    let indices = (0..truck.bundles.len()).map(|i| i.to_string()).collect_vec();
    let diameters = truck.bundles.iter().map(|b| b.outer_diameter()).collect_vec();
    let packing = pack_circles_greedy(&diameters, width, height, Some(&indices), stack_gap_mm);
    if packing.unpacked > 0 {
        warn!(
            "[SVG] truck {}: {} bundles could not be placed in the cross-section",
            truck.truck_number, packing.unpacked
        );
    }

    let truck_group = Group::new()
        .set("id", format!("truck_{}", truck.truck_number))
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", theme.truck_fill.to_string())
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        )
        .add(Title::new(format!(
            "truck {}, {}: {:.0} kg ({:.1}%), {} bundles",
            truck.truck_number,
            truck.profile.name,
            truck.total_weight(),
            truck.utilization(),
            truck.bundles.len()
        )));

    let bundles_group = packing
        .circles
        .iter()
        .filter_map(|placed| {
            let idx = placed.code.as_ref()?.parse::<usize>().ok()?;
            let bundle = truck.bundles.get(idx)?;
            Some(
                Group::new()
                    .set("id", format!("truck_{}_bundle_{idx}", truck.truck_number))
                    .add(bundle_group(
                        bundle,
                        placed.circle.center,
                        height,
                        options,
                        clearance,
                        stroke_width,
                    )),
            )
        })
        .fold(Group::new().set("id", "bundles"), |g, b| g.add(b));

    let margin = 0.05 * f64::max(width, height);
    Document::new()
        .set(
            "viewBox",
            (-margin, -margin, width + 2.0 * margin, height + 2.0 * margin),
        )
        .add(truck_group)
        .add(bundles_group)
}

/// Cross-section of a single bundle, with the clearance between every host and its guest
pub fn bundle_to_svg(
    bundle: &Bundle,
    options: SvgDrawOptions,
    clearance: &ClearanceConfig,
) -> Document {
    let diameter = bundle.outer_diameter();
    let stroke_width = diameter * 0.001 * options.theme.stroke_width_multiplier;
    let margin = 0.05 * diameter;
    let half = diameter / 2.0 + margin;

    Document::new()
        .set("viewBox", (-half, -half, 2.0 * half, 2.0 * half))
        .add(bundle_group(
            bundle,
            Point(0.0, 0.0),
            0.0,
            options,
            clearance,
            stroke_width,
        ))
}

fn bundle_group(
    bundle: &Bundle,
    center: Point,
    height: f64,
    options: SvgDrawOptions,
    clearance: &ClearanceConfig,
    stroke_width: f64,
) -> Group {
    let theme = &options.theme;
    let host = &bundle.host;
    let fill = svg_util::change_brightness(theme.pipe_fill, 0.85_f64.powi(bundle.level as i32));

    let mut group = Group::new()
        .set("id", format!("bundle_{}_{}", bundle.level, host.code))
        .add(Title::new(bundle.chain_label()))
        .add(svg_util::circle(
            &Circle::new(center, host.outer_diameter / 2.0),
            height,
            &[
                ("fill", &*fill.to_string()),
                ("stroke", "black"),
                ("stroke-width", &*format!("{stroke_width}")),
            ],
        ))
        .add(svg_util::circle(
            &Circle::new(center, host.inner_diameter / 2.0),
            height,
            &[
                ("fill", &*theme.bore_fill.to_string()),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
            ],
        ));

    let required_gap = minimum_gap_with(host.outer_diameter, clearance);
    if options.clearance_rings {
        let ring_radius = (host.inner_diameter - required_gap) / 2.0;
        if ring_radius > 0.0 {
            group = group.add(svg_util::circle(
                &Circle::new(center, ring_radius),
                height,
                &[
                    ("fill", "none"),
                    ("stroke", &*theme.clearance_color.to_string()),
                    ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                    ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                ],
            ));
        }
    }

    //guests are placed largest first, match them in the same order
    let children = bundle
        .children
        .iter()
        .sorted_by_key(|c| std::cmp::Reverse(OrderedFloat(c.outer_diameter())))
        .collect_vec();
    let child_diameters = children.iter().map(|c| c.outer_diameter()).collect_vec();
    let packing =
        pack_nested_bundle_cross_section(host.inner_diameter, &child_diameters, required_gap);
    if packing.unpacked > 0 {
        warn!(
            "[SVG] {} guests of {} could not be placed in its bore",
            packing.unpacked, host.code
        );
    }

    for (child, placed) in children.iter().zip(&packing.circles) {
        let Point(dx, dy) = placed.circle.center;
        let child_center = Point(center.0 + dx, center.1 + dy);
        let gap = validate_with(host.inner_diameter, host.outer_diameter, child.outer_diameter(), clearance);
        group = group.add(
            Group::new()
                .add(Title::new(gap.message))
                .add(bundle_group(child, child_center, height, options, clearance, stroke_width)),
        );
    }
    group
}

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::primitives::{Circle, Point};

/// A pipe cross-section placed by one of the packing routines
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedCircle {
    pub circle: Circle,
    pub code: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CirclePacking {
    pub circles: Vec<PlacedCircle>,
    pub container_width: f64,
    pub container_height: f64,
    /// Circle area over container area
    pub efficiency: f64,
    pub unpacked: usize,
}

impl CirclePacking {
    fn new(circles: Vec<PlacedCircle>, width: f64, height: f64, container_area: f64, unpacked: usize) -> Self {
        let circle_area = circles.iter().map(|c| c.circle.area()).sum::<f64>();
        let efficiency = match container_area > 0.0 {
            true => circle_area / container_area,
            false => 0.0,
        };
        Self {
            circles,
            container_width: width,
            container_height: height,
            efficiency,
            unpacked,
        }
    }

    pub fn total_packed(&self) -> usize {
        self.circles.len()
    }
}

/// Greedy bottom-left packing of circles in a `width` x `height` rectangle.
///
/// Circles are placed largest first at the lowest (then leftmost) valid candidate position:
/// along the floor, on top of, beside or diagonally above an already placed circle.
/// `codes[i]` labels `diameters[i]`.
pub fn pack_circles_greedy(
    diameters: &[f64],
    width: f64,
    height: f64,
    codes: Option<&[String]>,
    min_gap: f64,
) -> CirclePacking {
    let mut placed: Vec<PlacedCircle> = vec![];
    let mut unpacked = 0;

    let order = diameters
        .iter()
        .enumerate()
        .sorted_by_key(|(_, d)| std::cmp::Reverse(OrderedFloat(**d)));

    for (idx, &diameter) in order {
        let radius = diameter / 2.0;
        let circles = placed.iter().map(|p| &p.circle).collect_vec();
        match lowest_position(radius, width, height, &circles, min_gap) {
            Some(center) => placed.push(PlacedCircle {
                circle: Circle::new(center, radius),
                code: codes.and_then(|c| c.get(idx)).cloned(),
            }),
            None => unpacked += 1,
        }
    }

    CirclePacking::new(placed, width, height, width * height, unpacked)
}

fn lowest_position(
    radius: f64,
    width: f64,
    height: f64,
    placed: &[&Circle],
    min_gap: f64,
) -> Option<Point> {
    if radius <= 0.0 {
        return None;
    }
    let is_valid = |p: Point| {
        let candidate = Circle::new(p, radius);
        candidate.fits_in_rect(width, height)
            && placed.iter().all(|c| !candidate.collides_with(c, min_gap))
    };

    let mut candidates = vec![];

    //floor
    let step = radius / 2.0;
    let mut x = radius;
    while x <= width - radius {
        candidates.push(Point(x, radius));
        x += step;
    }

    for existing in placed {
        let Point(ex, ey) = existing.center;
        let touch = existing.radius + radius;
        candidates.push(Point(ex, ey + touch + min_gap));
        for dx in [-1.0, 1.0] {
            candidates.push(Point(ex + dx * (touch + min_gap), ey));
            //hexagonal stacking position
            let dy = (touch * touch - (touch * 0.5).powi(2)).sqrt();
            candidates.push(Point(ex + dx * touch * 0.5, ey + dy + min_gap / 2.0));
        }
    }

    candidates
        .into_iter()
        .filter(|p| p.0.is_finite() && p.1.is_finite() && is_valid(*p))
        .min_by_key(|p| (OrderedFloat(p.1), OrderedFloat(p.0)))
}

/// Packs the cross-sections of `inner_diameters` inside a circular bore of `outer_bore` diameter.
/// The bore is centered at the origin. Circles are placed largest first: in the center if free,
/// else around already placed circles in 30° steps, else on rings at 30%, 50% and 70% of the bore radius.
pub fn pack_nested_bundle_cross_section(
    outer_bore: f64,
    inner_diameters: &[f64],
    min_gap: f64,
) -> CirclePacking {
    let container = Circle::new(Point(0.0, 0.0), (outer_bore / 2.0).max(0.0));
    let mut placed: Vec<PlacedCircle> = vec![];
    let mut unpacked = 0;

    for &diameter in inner_diameters
        .iter()
        .sorted_by_key(|d| std::cmp::Reverse(OrderedFloat(**d)))
    {
        let radius = diameter / 2.0;
        let circles = placed.iter().map(|p| &p.circle).collect_vec();
        match position_in_circle(radius, &container, &circles, min_gap) {
            Some(center) => placed.push(PlacedCircle {
                circle: Circle::new(center, radius),
                code: None,
            }),
            None => unpacked += 1,
        }
    }

    CirclePacking::new(
        placed,
        outer_bore,
        outer_bore,
        container.area(),
        unpacked,
    )
}

fn position_in_circle(
    radius: f64,
    container: &Circle,
    placed: &[&Circle],
    min_gap: f64,
) -> Option<Point> {
    if radius <= 0.0 {
        return None;
    }
    let is_valid = |p: Point| {
        let candidate = Circle::new(p, radius);
        candidate.fits_in_circle(container, min_gap)
            && placed.iter().all(|c| !candidate.collides_with(c, min_gap))
    };

    let center = container.center;
    if is_valid(center) {
        return Some(center);
    }

    let around_placed = placed.iter().flat_map(|c| {
        let distance = c.radius + radius + min_gap;
        (0..360)
            .step_by(30)
            .map(move |deg| c.center.polar_offset(distance, (deg as f64).to_radians()))
    });
    let rings = [0.3, 0.5, 0.7].into_iter().flat_map(|f| {
        let ring_radius = container.radius * f;
        (0..360)
            .step_by(15)
            .map(move |deg| center.polar_offset(ring_radius, (deg as f64).to_radians()))
    });

    around_placed.chain(rings).find(|p| is_valid(*p))
}

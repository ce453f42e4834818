use crate::entities::Bundle;
use crate::geometry::estimate_mixed_stack_height;
use crate::util::FPA;

/// Static description of a truck type. Dimensions are internal cargo space dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct TruckProfile {
    pub name: String,
    pub max_payload_kg: f64,
    pub internal_length_mm: f64,
    pub internal_width_mm: f64,
    pub internal_height_mm: f64,
    /// Single axle ceiling used for the weight limit report.
    /// Not to be confused with the per-axle limits of [`AxleConfig`](crate::util::AxleConfig).
    pub max_axle_weight_kg: f64,
}

impl Default for TruckProfile {
    fn default() -> Self {
        Self {
            name: "Standard 24t".to_string(),
            max_payload_kg: 24_000.0,
            internal_length_mm: 13_600.0,
            internal_width_mm: 2_480.0,
            internal_height_mm: 2_700.0,
            max_axle_weight_kg: 11_500.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TruckStatus {
    /// Still accepting bundles
    Open,
    /// Final, no more bundles are added or removed
    Closed,
}

/// A truck being loaded with bundles.
/// Weight and utilization are derived from the bundles every time they are requested.
#[derive(Clone, Debug)]
pub struct TruckLoad {
    pub truck_number: usize,
    pub profile: TruckProfile,
    pub pipe_length_m: f64,
    pub bundles: Vec<Bundle>,
    pub status: TruckStatus,
}

impl TruckLoad {
    pub fn new(truck_number: usize, profile: TruckProfile, pipe_length_m: f64) -> Self {
        Self {
            truck_number,
            profile,
            pipe_length_m,
            bundles: vec![],
            status: TruckStatus::Open,
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.bundles
            .iter()
            .map(|b| b.weight(self.pipe_length_m))
            .sum()
    }

    pub fn remaining_capacity(&self) -> f64 {
        self.profile.max_payload_kg - self.total_weight()
    }

    /// Payload utilization in percent
    pub fn utilization(&self) -> f64 {
        match self.profile.max_payload_kg > 0.0 {
            true => self.total_weight() / self.profile.max_payload_kg * 100.0,
            false => 0.0,
        }
    }

    pub fn total_pipes(&self) -> usize {
        self.bundles.iter().map(|b| b.total_pipes()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Estimated height of the cross-section stack formed by the outer pipes of all bundles (mm)
    pub fn stack_height(&self, stack_gap_mm: f64) -> f64 {
        let diameters = self
            .bundles
            .iter()
            .map(|b| b.outer_diameter())
            .collect::<Vec<_>>();
        estimate_mixed_stack_height(&diameters, self.profile.internal_width_mm, stack_gap_mm)
    }

    /// Checks whether `bundle` can be added without exceeding the payload or the internal height
    pub fn can_fit(&self, bundle: &Bundle, stack_gap_mm: f64) -> bool {
        if self.status == TruckStatus::Closed {
            return false;
        }
        if FPA(bundle.weight(self.pipe_length_m)) > FPA(self.remaining_capacity()) {
            return false;
        }
        let diameters = self
            .bundles
            .iter()
            .chain(std::iter::once(bundle))
            .map(|b| b.outer_diameter())
            .collect::<Vec<_>>();
        let height =
            estimate_mixed_stack_height(&diameters, self.profile.internal_width_mm, stack_gap_mm);
        height <= self.profile.internal_height_mm
    }

    pub fn add_bundle(&mut self, bundle: Bundle) {
        debug_assert!(self.status == TruckStatus::Open);
        self.bundles.push(bundle);
    }

    pub fn remove_bundle(&mut self, index: usize) -> Bundle {
        debug_assert!(self.status == TruckStatus::Open);
        self.bundles.remove(index)
    }

    pub fn close(&mut self) {
        self.status = TruckStatus::Closed;
    }
}

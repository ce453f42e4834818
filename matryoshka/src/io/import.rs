use std::sync::Arc;

use anyhow::{Context, Result, bail, ensure};
use log::warn;

use crate::entities::{Order, Pipe, STANDARD_PIPE_LENGTHS_M, TruckProfile};
use crate::io::ext_repr::{ExtOrder, ExtPipe, ExtTruckProfile};

/// Converts external representations of orders, pipes and trucks into internal ones.
#[derive(Clone, Debug, Copy, Default)]
pub struct Importer;

impl Importer {
    pub fn new() -> Importer {
        Importer
    }

    pub fn import_pipe(&self, ext_pipe: &ExtPipe) -> Result<Pipe> {
        let ExtPipe {
            code,
            outer_diameter_mm,
            inner_diameter_mm,
            wall_mm,
            sdr,
            pressure_class,
            weight_per_meter,
            quantity: _,
        } = ext_pipe;

        ensure!(!code.is_empty(), "pipe without code");
        check_non_negative(*outer_diameter_mm, "outer_diameter_mm")
            .and(check_non_negative(*inner_diameter_mm, "inner_diameter_mm"))
            .and(check_non_negative(*weight_per_meter, "weight_per_meter"))
            .and(match wall_mm {
                Some(w) => check_non_negative(*w, "wall_mm"),
                None => Ok(()),
            })
            .with_context(|| format!("invalid pipe {code}"))?;
        if inner_diameter_mm >= outer_diameter_mm {
            warn!(
                "[IMPORT] pipe {code} has an inner diameter ({inner_diameter_mm}) not smaller than its outer diameter ({outer_diameter_mm})"
            );
        }

        Ok(Pipe {
            code: code.clone(),
            sdr: *sdr,
            pressure_class: pressure_class.clone(),
            outer_diameter: *outer_diameter_mm,
            inner_diameter: *inner_diameter_mm,
            wall_thickness: *wall_mm,
            weight_per_meter: *weight_per_meter,
        })
    }

    pub fn import_truck(&self, ext_truck: &ExtTruckProfile) -> Result<TruckProfile> {
        if !(ext_truck.max_payload_kg.is_finite() && ext_truck.max_payload_kg > 0.0) {
            bail!(
                "truck {} has an invalid payload: {}",
                ext_truck.name,
                ext_truck.max_payload_kg
            );
        }
        for (value, field) in [
            (ext_truck.internal_length_mm, "internal_length_mm"),
            (ext_truck.internal_width_mm, "internal_width_mm"),
            (ext_truck.internal_height_mm, "internal_height_mm"),
            (ext_truck.max_axle_weight_kg, "max_axle_weight_kg"),
        ] {
            check_non_negative(value, field)
                .with_context(|| format!("invalid truck {}", ext_truck.name))?;
        }
        Ok(TruckProfile {
            name: ext_truck.name.clone(),
            max_payload_kg: ext_truck.max_payload_kg,
            internal_length_mm: ext_truck.internal_length_mm,
            internal_width_mm: ext_truck.internal_width_mm,
            internal_height_mm: ext_truck.internal_height_mm,
            max_axle_weight_kg: ext_truck.max_axle_weight_kg,
        })
    }

    /// Imports an order, expanding every order line into `quantity` pipe instances
    pub fn import_order(&self, ext_order: &ExtOrder) -> Result<Order> {
        let pipe_length_m = ext_order.pipe_length_m;
        if !(pipe_length_m.is_finite() && pipe_length_m > 0.0) {
            bail!("invalid pipe length: {pipe_length_m}");
        }
        if !STANDARD_PIPE_LENGTHS_M.contains(&pipe_length_m) {
            warn!(
                "[IMPORT] non-standard pipe length {pipe_length_m}m (standard: {STANDARD_PIPE_LENGTHS_M:?})"
            );
        }
        let truck = self.import_truck(&ext_order.truck)?;

        let mut pipes = vec![];
        let mut n_lines = 0;
        for ext_pipe in &ext_order.pipes {
            if ext_pipe.quantity == 0 {
                warn!("[IMPORT] skipping order line {} with zero quantity", ext_pipe.code);
                continue;
            }
            let pipe = Arc::new(self.import_pipe(ext_pipe)?);
            pipes.extend(std::iter::repeat_n(pipe, ext_pipe.quantity));
            n_lines += 1;
        }

        Ok(Order {
            name: ext_order.name.clone(),
            pipes,
            truck,
            pipe_length_m,
            n_lines,
        })
    }
}

fn check_non_negative(value: f64, field: &str) -> Result<()> {
    ensure!(
        value.is_finite() && value >= 0.0,
        "{field} must be a finite, non-negative number, got {value}"
    );
    Ok(())
}

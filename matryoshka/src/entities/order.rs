use std::sync::Arc;

use crate::entities::{Pipe, TruckProfile};

/// Pipe lengths in which stock is produced (m)
pub const STANDARD_PIPE_LENGTHS_M: [f64; 3] = [12.0, 12.5, 13.0];

/// A customer order, expanded into individual pipe instances
#[derive(Clone, Debug)]
pub struct Order {
    pub name: String,
    /// One entry per physical pipe. Pipes of the same line share their `Arc`.
    pub pipes: Vec<Arc<Pipe>>,
    pub truck: TruckProfile,
    pub pipe_length_m: f64,
    /// Number of distinct order lines the pipes were expanded from
    pub n_lines: usize,
}

impl Order {
    pub fn total_weight(&self) -> f64 {
        self.pipes.iter().map(|p| p.weight(self.pipe_length_m)).sum()
    }
}

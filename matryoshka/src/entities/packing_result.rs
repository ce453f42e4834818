use crate::entities::TruckLoad;
use crate::util::PackingStrategy;

/// Final assignment of bundles to trucks, produced by [`pack`](crate::packing::pack).
#[derive(Clone, Debug)]
pub struct PackingResult {
    pub trucks: Vec<TruckLoad>,
    /// Strategy that produced the assignment, `None` for an empty order
    pub strategy: Option<PackingStrategy>,
    /// Advisory messages raised while packing
    pub warnings: Vec<String>,
}

impl PackingResult {
    pub fn new(
        mut trucks: Vec<TruckLoad>,
        strategy: Option<PackingStrategy>,
        warnings: Vec<String>,
    ) -> Self {
        trucks.iter_mut().for_each(|t| t.close());
        Self {
            trucks,
            strategy,
            warnings,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![], None, vec![])
    }

    pub fn trucks_needed(&self) -> usize {
        self.trucks.len()
    }

    pub fn total_weight(&self) -> f64 {
        self.trucks.iter().map(|t| t.total_weight()).sum()
    }

    pub fn total_pipes(&self) -> usize {
        self.trucks.iter().map(|t| t.total_pipes()).sum()
    }

    /// Average payload utilization over all trucks in percent
    pub fn average_utilization(&self) -> f64 {
        match self.trucks.is_empty() {
            true => 0.0,
            false => {
                self.trucks.iter().map(|t| t.utilization()).sum::<f64>() / self.trucks.len() as f64
            }
        }
    }
}

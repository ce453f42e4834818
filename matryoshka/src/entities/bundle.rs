use std::sync::Arc;

use itertools::Itertools;

use crate::entities::Pipe;

/// Bundles heavier than this (kg) need heavy lifting equipment to extract the nested pipes.
pub const HEAVY_EXTRACTION_THRESHOLD_KG: f64 = 2000.0;

/// A telescoping chain of pipes: a host pipe with the bundles nested inside its bore.
/// Bundles are built once by the nesting engine and afterwards only moved between trucks as a whole.
#[derive(Clone, Debug, PartialEq)]
pub struct Bundle {
    pub host: Arc<Pipe>,
    /// Bundles nested directly inside the host, one level deeper
    pub children: Vec<Bundle>,
    /// Nesting level at which the host was placed (0 for an outermost pipe)
    pub level: usize,
}

impl Bundle {
    pub fn new(host: Arc<Pipe>, level: usize) -> Self {
        Self {
            host,
            children: vec![],
            level,
        }
    }

    /// Number of pipes along the deepest telescoping chain, 1 for a lone pipe
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(|c| c.depth()).max().unwrap_or(0)
    }

    /// All pipes in the bundle, host first, depth-first
    pub fn all_pipes(&self) -> Vec<&Arc<Pipe>> {
        let mut pipes = vec![&self.host];
        for child in &self.children {
            pipes.extend(child.all_pipes());
        }
        pipes
    }

    pub fn total_pipes(&self) -> usize {
        1 + self.children.iter().map(|c| c.total_pipes()).sum::<usize>()
    }

    /// Weight of all pipes in the bundle at the given pipe length (kg)
    pub fn weight(&self, length_m: f64) -> f64 {
        self.all_pipes().iter().map(|p| p.weight(length_m)).sum()
    }

    pub fn requires_heavy_extraction(&self, length_m: f64) -> bool {
        self.weight(length_m) > HEAVY_EXTRACTION_THRESHOLD_KG
    }

    pub fn outer_diameter(&self) -> f64 {
        self.host.outer_diameter
    }

    pub fn is_nested(&self) -> bool {
        !self.children.is_empty()
    }

    /// Codes of all pipes in the bundle, e.g. `TPE800/PN6 > TPE630/PN6 > TPE400/PN6`
    pub fn chain_label(&self) -> String {
        self.all_pipes().iter().map(|p| p.code.as_str()).join(" > ")
    }
}

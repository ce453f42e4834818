use std::fmt::{Display, Formatter};

/// A single pipe instance of a catalog type.
/// Catalog data is trusted: `outer_diameter >= inner_diameter + 2 * wall` is not enforced.
#[derive(Clone, Debug, PartialEq)]
pub struct Pipe {
    /// Catalog code, e.g. `TPE400/PN6`
    pub code: String,
    /// Standard Dimension Ratio (wall class)
    pub sdr: u32,
    pub pressure_class: String,
    /// Nominal outer diameter (DN) in mm
    pub outer_diameter: f64,
    /// Bore in mm
    pub inner_diameter: f64,
    pub wall_thickness: Option<f64>,
    /// kg/m
    pub weight_per_meter: f64,
}

impl Pipe {
    pub fn weight(&self, length_m: f64) -> f64 {
        self.weight_per_meter * length_m
    }

    /// Wall thickness as given by the catalog, or derived from both diameters
    pub fn wall(&self) -> f64 {
        self.wall_thickness
            .unwrap_or((self.outer_diameter - self.inner_diameter) / 2.0)
    }
}

impl Display for Pipe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (DN{} SDR{}, {:.2} kg/m)",
            self.code, self.outer_diameter, self.sdr, self.weight_per_meter
        )
    }
}

impl AsRef<Pipe> for Pipe {
    fn as_ref(&self) -> &Pipe {
        self
    }
}

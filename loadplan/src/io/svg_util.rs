use std::fmt::{Display, Formatter};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Circle;

use matryoshka::geometry::primitives;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw a cross-section of every truck
    #[serde(default = "default_true")]
    pub trucks: bool,
    ///Draw a cross-section of every nested bundle
    #[serde(default = "default_true")]
    pub bundles: bool,
    ///Draw the required clearance as a dashed ring inside every host bore
    #[serde(default)]
    pub clearance_rings: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            trucks: true,
            bundles: true,
            clearance_rings: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub truck_fill: Color,
    pub pipe_fill: Color,
    pub bore_fill: Color,
    pub clearance_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        truck_fill: Color(0xCC, 0x82, 0x4A),
        pipe_fill: Color(0xFF, 0xC8, 0x79),
        bore_fill: Color(0x2D, 0x2D, 0x2D),
        clearance_color: Color(0xFF, 0x00, 0x00),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        truck_fill: Color(0xD3, 0xD3, 0xD3),
        pipe_fill: Color(0x7A, 0x7A, 0x7A),
        bore_fill: Color(0xFF, 0xFF, 0xFF),
        clearance_color: Color(0xD0, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;
    let scale = |c: u8| (c as f64 * fraction).clamp(0.0, 255.0) as u8;
    Color(scale(r), scale(g), scale(b))
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self> {
        let hex = s.trim_start_matches('#');
        ensure!(hex.len() == 6, "expected a #RRGGBB color, got {s}");
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .with_context(|| format!("invalid color channel in {s}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

/// Svg circle for a pipe cross-section. `height` flips the y-axis so that the truck floor is at the bottom.
pub fn circle(circle: &primitives::Circle, height: f64, params: &[(&str, &str)]) -> Circle {
    let mut svg_circle = Circle::new()
        .set("cx", circle.center.0)
        .set("cy", height - circle.center.1)
        .set("r", circle.radius);
    for param in params {
        svg_circle = svg_circle.set(param.0, param.1)
    }
    svg_circle
}

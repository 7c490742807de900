// Tunables for populating a field. Defaults match the portfolio background:
// 100 small translucent particles drifting at up to one pixel per frame.

use crate::color::{Color, PALETTE};

pub const DEFAULT_PARTICLE_COUNT: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub radius_range: (f64, f64),
    pub speed_range: (f64, f64),
    pub opacity_range: (f64, f64),
    pub palette: Vec<Color>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: DEFAULT_PARTICLE_COUNT,
            radius_range: (1.0, 3.0),
            speed_range: (-1.0, 1.0),
            opacity_range: (0.1, 0.6),
            palette: PALETTE.to_vec(),
        }
    }
}

impl FieldConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_radius_range(mut self, min: f64, max: f64) -> Self {
        self.radius_range = (min, max);
        self
    }

    pub fn with_speed_range(mut self, min: f64, max: f64) -> Self {
        self.speed_range = (min, max);
        self
    }

    pub fn with_opacity_range(mut self, min: f64, max: f64) -> Self {
        self.opacity_range = (min, max);
        self
    }

    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Returns a copy that is safe to sample from: ranges are ordered, radius
    /// stays positive, opacity stays within (0, 1] and the palette is never empty.
    pub fn validated(&self) -> FieldConfig {
        let defaults = FieldConfig::default();
        let (r_min, r_max) = finite(self.radius_range, defaults.radius_range);
        let (o_min, o_max) = finite(self.opacity_range, defaults.opacity_range);
        let palette = if self.palette.is_empty() {
            PALETTE.to_vec()
        } else {
            self.palette.clone()
        };

        FieldConfig {
            count: self.count,
            radius_range: (r_min.max(f64::EPSILON), r_max.max(f64::EPSILON)),
            speed_range: finite(self.speed_range, defaults.speed_range),
            opacity_range: (
                o_min.max(f64::EPSILON).min(1.0),
                o_max.max(f64::EPSILON).min(1.0),
            ),
            palette,
        }
    }
}

// NaN or infinite bounds fall back to the default bound, and a range whose
// width overflows falls back entirely, since gen_range panics on either
fn finite((a, b): (f64, f64), (default_a, default_b): (f64, f64)) -> (f64, f64) {
    let a = if a.is_finite() { a } else { default_a };
    let b = if b.is_finite() { b } else { default_b };
    let (min, max) = if a <= b { (a, b) } else { (b, a) };
    if (max - min).is_finite() {
        (min, max)
    } else {
        (default_a, default_b)
    }
}

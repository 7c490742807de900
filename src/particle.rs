// Simple particle struct to keep track of individual position, velocity, size, and color

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
    pub opacity: f64,
}

impl Particle {
    pub fn new(
        pos_x: f64,
        pos_y: f64,
        vel_x: f64,
        vel_y: f64,
        radius: f64,
        color: Color,
        opacity: f64,
    ) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
            opacity,
        }
    }

    /// Spawns a particle somewhere inside a `width` x `height` surface with
    /// attributes drawn from `config`. Expects an already validated config.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: u32,
        height: u32,
        config: &FieldConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width as f64;
        let pos_y = rng.gen::<f64>() * height as f64;
        let radius = sample(rng, config.radius_range);
        let vel_x = sample(rng, config.speed_range);
        let vel_y = sample(rng, config.speed_range);
        let color = config.palette[rng.gen_range(0, config.palette.len())];
        let opacity = sample(rng, config.opacity_range);
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color, opacity)
    }

    // Moves by one frame of velocity, then reflects any axis that ended up
    // outside [0, bound]. Position is left where it landed, so a particle can
    // sit past the edge for one frame before heading back.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        if self.pos[0] > width || self.pos[0] < 0.0 {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] > height || self.pos[1] < 0.0 {
            self.vel[1] *= -1.0;
        }
    }
}

// gen_range panics on an empty range
fn sample<R: Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    if max > min {
        rng.gen_range(min, max)
    } else {
        min
    }
}

// A field owns every particle on screen along with the surface size they bounce inside.
// The host keeps exactly one live field and swaps in a fresh one on resize.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::DrawingSurface;
use rand::Rng;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
}

impl Field {
    pub fn initialize<R: Rng + ?Sized>(width: u32, height: u32, count: usize, rng: &mut R) -> Field {
        let config = FieldConfig::default().with_count(count);
        Field::with_config(width, height, &config, rng)
    }

    pub fn with_config<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        config: &FieldConfig,
        rng: &mut R,
    ) -> Field {
        let config = config.validated();
        let mut particles = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            particles.push(Particle::random(rng, width, height, &config));
        }
        Field {
            width,
            height,
            particles,
        }
    }

    /// Throws away every particle and repopulates for the new surface size.
    pub fn resize<R: Rng + ?Sized>(self, width: u32, height: u32, count: usize, rng: &mut R) -> Field {
        Field::initialize(width, height, count, rng)
    }

    pub fn resize_with_config<R: Rng + ?Sized>(
        self,
        width: u32,
        height: u32,
        config: &FieldConfig,
        rng: &mut R,
    ) -> Field {
        Field::with_config(width, height, config, rng)
    }

    pub fn step(&mut self) {
        let width = self.width as f64;
        let height = self.height as f64;
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// Clears `surface` and draws each particle as a filled disc, in index order.
    pub fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear()?;
        for p in &self.particles {
            surface.draw_filled_circle(p.pos[0], p.pos[1], p.radius, p.color, p.opacity)?;
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;
    use crate::surface::{DrawCall, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn initialize_populates_within_bounds() {
        let field = Field::initialize(320, 200, 100, &mut rng(42));
        assert_eq!(field.len(), 100);
        assert_eq!((field.width(), field.height()), (320, 200));
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 320.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 200.0);
            assert!(p.opacity >= 0.1 && p.opacity <= 0.6);
            assert!(p.radius >= 1.0 && p.radius <= 3.0);
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn both_palette_colors_show_up() {
        let field = Field::initialize(100, 100, 200, &mut rng(3));
        for color in PALETTE.iter() {
            assert!(field.particles().iter().any(|p| p.color == *color));
        }
    }

    #[test]
    fn step_flips_velocity_when_leaving_bounds() {
        let mut field = Field::initialize(50, 40, 300, &mut rng(9));
        for _ in 0..200 {
            let before = field.particles().to_vec();
            field.step();
            for (old, new) in before.iter().zip(field.particles()) {
                let x = old.pos[0] + old.vel[0];
                let y = old.pos[1] + old.vel[1];
                if x > 50.0 || x < 0.0 {
                    assert_eq!(new.vel[0], -old.vel[0]);
                } else {
                    assert_eq!(new.vel[0], old.vel[0]);
                }
                if y > 40.0 || y < 0.0 {
                    assert_eq!(new.vel[1], -old.vel[1]);
                } else {
                    assert_eq!(new.vel[1], old.vel[1]);
                }
            }
        }
    }

    #[test]
    fn particles_never_drift_past_one_frame_of_overshoot() {
        let mut field = Field::initialize(60, 30, 100, &mut rng(11));
        for _ in 0..1000 {
            field.step();
            for p in field.particles() {
                assert!(p.pos[0] >= -1.0 - 1e-9 && p.pos[0] <= 61.0 + 1e-9);
                assert!(p.pos[1] >= -1.0 - 1e-9 && p.pos[1] <= 31.0 + 1e-9);
            }
        }
    }

    #[test]
    fn overshoot_then_reflect() {
        let mut field = Field::initialize(100, 100, 1, &mut rng(0));
        {
            let p = &mut field.particles_mut()[0];
            p.pos = [99.0, 50.0];
            p.vel = [2.0, 0.0];
        }
        field.step();
        let p = field.particles()[0];
        assert_eq!(p.pos, [101.0, 50.0]);
        assert_eq!(p.vel[0], -2.0);
        assert_eq!(p.vel[1], 0.0);

        field.step();
        assert_eq!(field.particles()[0].pos, [99.0, 50.0]);
        assert_eq!(field.particles()[0].vel[0], -2.0);
    }

    #[test]
    fn render_draws_in_index_order() {
        let field = Field::initialize(100, 100, 5, &mut rng(5));
        let mut surface = RecordingSurface::new();
        field.render(&mut surface).unwrap();

        let calls = surface.calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0], DrawCall::Clear);
        for (call, p) in calls[1..].iter().zip(field.particles()) {
            assert_eq!(
                *call,
                DrawCall::Circle {
                    x: p.pos[0],
                    y: p.pos[1],
                    radius: p.radius,
                    color: p.color,
                    opacity: p.opacity,
                }
            );
        }
    }

    #[test]
    fn render_twice_without_step_is_identical() {
        let mut field = Field::initialize(200, 100, 30, &mut rng(8));
        field.step();
        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        field.render(&mut first).unwrap();
        field.render(&mut second).unwrap();
        assert_eq!(first.calls(), second.calls());
    }

    #[test]
    fn resize_is_a_full_reset() {
        let mut old = Field::initialize(100, 100, 20, &mut rng(1));
        for _ in 0..10 {
            old.step();
        }
        let other = Field::initialize(800, 600, 50, &mut rng(2));

        let resized_a = old.resize(300, 150, 25, &mut rng(77));
        let resized_b = other.resize(300, 150, 25, &mut rng(77));
        let fresh = Field::initialize(300, 150, 25, &mut rng(77));

        assert_eq!(resized_a, fresh);
        assert_eq!(resized_b, fresh);
        assert_eq!((fresh.width(), fresh.height(), fresh.len()), (300, 150, 25));
    }

    #[test]
    fn resize_with_config_uses_new_tunables() {
        let field = Field::initialize(100, 100, 10, &mut rng(6));
        let config = FieldConfig::default().with_count(3).with_speed_range(0.0, 0.0);
        let field = field.resize_with_config(40, 20, &config, &mut rng(6));
        assert_eq!((field.width(), field.height(), field.len()), (40, 20, 3));
        assert!(field.particles().iter().all(|p| p.vel == [0.0, 0.0]));
    }

    #[test]
    fn infinite_speed_range_still_populates() {
        let config = FieldConfig::default().with_speed_range(-1.0, f64::INFINITY);
        let field = Field::with_config(100, 100, &config, &mut rng(1));
        assert_eq!(field.len(), 100);
        for p in field.particles() {
            assert!(p.vel[0].is_finite() && p.vel[1].is_finite());
            assert!(p.vel[0] >= -1.0 && p.vel[0] <= 1.0);
        }
    }

    #[test]
    fn only_the_latest_frame_is_visible() {
        let mut field = Field::initialize(100, 100, 4, &mut rng(12));
        let mut surface = RecordingSurface::new();
        field.render(&mut surface).unwrap();
        field.step();
        field.render(&mut surface).unwrap();

        assert_eq!(surface.calls().len(), 10);
        let visible = surface.visible();
        assert_eq!(visible.len(), 4);
        for (call, p) in visible.iter().zip(field.particles()) {
            match call {
                DrawCall::Circle { x, y, .. } => assert_eq!((*x, *y), (p.pos[0], p.pos[1])),
                DrawCall::Clear => panic!("clear inside a frame"),
            }
        }

        surface.reset();
        field.render(&mut surface).unwrap();
        assert_eq!(surface.calls().len(), 5);
    }

    #[test]
    fn default_field_is_empty() {
        let mut field = Field::default();
        assert!(field.is_empty());
        assert_eq!((field.width(), field.height()), (0, 0));
        field.step();
    }

    #[test]
    fn empty_field_is_a_no_op() {
        let mut field = Field::initialize(100, 100, 0, &mut rng(0));
        assert!(field.is_empty());
        field.step();
        let mut surface = RecordingSurface::new();
        field.render(&mut surface).unwrap();
        assert_eq!(surface.calls(), &[DrawCall::Clear]);
    }

    #[test]
    fn with_config_honors_count_and_palette() {
        let config = FieldConfig::default()
            .with_count(12)
            .with_palette(vec![PALETTE[1]]);
        let field = Field::with_config(10, 10, &config, &mut rng(4));
        assert_eq!(field.len(), 12);
        assert!(field.particles().iter().all(|p| p.color == PALETTE[1]));
    }
}

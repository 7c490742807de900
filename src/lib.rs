#[macro_use]
mod utils;

pub mod canvas;
pub mod color;
pub mod config;
pub mod field;
pub mod particle;
pub mod surface;

pub use crate::canvas::CanvasSurface;
pub use crate::color::{Color, PALETTE};
pub use crate::config::{FieldConfig, DEFAULT_PARTICLE_COUNT};
pub use crate::field::Field;
pub use crate::particle::Particle;
pub use crate::surface::{DrawCall, DrawingSurface, RecordingSurface};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::mem;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// The page's particle background. JS owns the single instance, calls `frame`
// from its requestAnimationFrame loop and `resize` from the window resize
// listener. Dropping out of the loop is all it takes to stop the animation.
#[wasm_bindgen]
pub struct ParticleBackground {
    surface: CanvasSurface,
    field: Field,
    config: FieldConfig,
    rng: StdRng,
    frame_number: u64,
    profiling: bool,
}

#[wasm_bindgen]
impl ParticleBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<ParticleBackground, JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        let config = FieldConfig::default();
        let mut rng = StdRng::from_entropy();
        let field = Field::with_config(surface.width(), surface.height(), &config, &mut rng);
        log!(
            "particle background: {} particles on {}x{}",
            field.len(),
            field.width(),
            field.height()
        );
        Ok(ParticleBackground {
            surface,
            field,
            config,
            rng,
            frame_number: 0,
            profiling: false,
        })
    }

    // Looks the canvas up by element id and sizes it to the window before populating
    pub fn attach(canvas_id: &str) -> Result<ParticleBackground, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", canvas_id)))?;
        let width = window
            .inner_width()?
            .as_f64()
            .ok_or_else(|| JsValue::from_str("window.innerWidth is not a number"))?
            as u32;
        let height = window
            .inner_height()?
            .as_f64()
            .ok_or_else(|| JsValue::from_str("window.innerHeight is not a number"))?
            as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        ParticleBackground::new(canvas)
    }

    pub fn frame(&mut self) -> Result<(), JsValue> {
        let _timer = if self.profiling {
            Some(Timer::new("ParticleBackground::frame"))
        } else {
            None
        };
        self.field.step();
        self.field.render(&mut self.surface)?;
        self.frame_number += 1;
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.set_size(width, height);
        self.reset_field(width, height);
        log!("particle background resized to {}x{}", width, height);
    }

    pub fn set_particle_count(&mut self, count: usize) {
        self.config.count = count;
        self.reset_field(self.field.width(), self.field.height());
    }

    pub fn set_radius_range(&mut self, min: f64, max: f64) {
        self.config.radius_range = (min, max);
        self.reset_field(self.field.width(), self.field.height());
    }

    pub fn set_speed_range(&mut self, min: f64, max: f64) {
        self.config.speed_range = (min, max);
        self.reset_field(self.field.width(), self.field.height());
    }

    pub fn set_opacity_range(&mut self, min: f64, max: f64) {
        self.config.opacity_range = (min, max);
        self.reset_field(self.field.width(), self.field.height());
    }

    pub fn set_profiling(&mut self, enabled: bool) {
        self.profiling = enabled;
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl ParticleBackground {
    pub fn field(&self) -> &Field {
        &self.field
    }

    fn reset_field(&mut self, width: u32, height: u32) {
        let old = mem::take(&mut self.field);
        self.field = old.resize_with_config(width, height, &self.config, &mut self.rng);
    }
}

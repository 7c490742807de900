// The only drawing capability a field needs: wipe the surface, then stamp translucent discs.

use crate::color::Color;
use std::convert::Infallible;

pub trait DrawingSurface {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn draw_filled_circle(
        &mut self,
        center_x: f64,
        center_y: f64,
        radius: f64,
        color: Color,
        opacity: f64,
    ) -> Result<(), Self::Error>;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        opacity: f64,
    },
}

/// Headless surface that remembers every call made against it.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface { calls: Vec::new() }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    // Calls issued since the most recent clear, i.e. what would be on screen
    pub fn visible(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == DrawCall::Clear)
            .map_or(0, |i| i + 1);
        &self.calls[start..]
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn draw_filled_circle(
        &mut self,
        center_x: f64,
        center_y: f64,
        radius: f64,
        color: Color,
        opacity: f64,
    ) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Circle {
            x: center_x,
            y: center_y,
            radius,
            color,
            opacity,
        });
        Ok(())
    }
}

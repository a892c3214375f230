//! In-memory framebuffer for rendering tests.
//!
//! Pixels start undrawn (`None`) so tests can tell "painted black" apart
//! from "never touched". Draws outside the screen are dropped, like a real
//! panel would clip them.

use std::convert::Infallible;
use std::vec;
use std::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub struct TestDisplay {
    pixels: Vec<Option<Rgb565>>,
}

impl TestDisplay {
    pub fn new() -> Self {
        Self {
            pixels: vec![None; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    fn index(point: Point) -> Option<usize> {
        let in_bounds =
            point.x >= 0 && point.y >= 0 && point.x < SCREEN_WIDTH as i32 && point.y < SCREEN_HEIGHT as i32;
        in_bounds.then(|| point.y as usize * SCREEN_WIDTH as usize + point.x as usize)
    }

    /// Color at `point`, `None` if never drawn or off screen.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        Self::index(point).and_then(|i| self.pixels[i])
    }

    /// Number of drawn pixels matching `f`.
    pub fn count_where(&self, f: impl Fn(Point, Rgb565) -> bool) -> usize {
        self.pixels
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|c| (i, c)))
            .filter(|&(i, c)| {
                let point = Point::new((i % SCREEN_WIDTH as usize) as i32, (i / SCREEN_WIDTH as usize) as i32);
                f(point, c)
            })
            .count()
    }

    /// Number of drawn pixels.
    pub fn drawn_pixels(&self) -> usize {
        self.pixels.iter().filter(|c| c.is_some()).count()
    }

    /// Number of drawn pixels that are not black.
    pub fn lit_pixels(&self) -> usize {
        self.count_where(|_, c| c != BLACK)
    }

    /// Snapshot for before/after comparisons.
    pub fn snapshot(&self) -> Vec<Option<Rgb565>> {
        self.pixels.clone()
    }

    /// Points whose color differs from an earlier snapshot.
    pub fn changed_since(&self, snapshot: &[Option<Rgb565>]) -> Vec<Point> {
        self.pixels
            .iter()
            .zip(snapshot)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(|(i, _)| Point::new((i % SCREEN_WIDTH as usize) as i32, (i / SCREEN_WIDTH as usize) as i32))
            .collect()
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = Self::index(point) {
                self.pixels[i] = Some(color);
            }
        }
        Ok(())
    }
}

use crate::Point;
use std::ops::RangeInclusive;

/// The square drawing surface an animator paints into.
pub trait Canvas {
    fn side(&self) -> u32;
    /// Paints `color` over the whole surface at the given opacity.
    fn fill_overlay(&mut self, color: [u8; 3], alpha: f64);
    fn stroke_segment(&mut self, from: Point, to: Point, color: [u8; 3], thickness: f64);
}

/// Software raster with floating-point channels, so that overlays far fainter
/// than one 8-bit step still darken the surface over many frames.
#[derive(Clone, Debug)]
pub struct RasterCanvas {
    side: u32,
    pixels: Vec<[f32; 3]>,
}

impl RasterCanvas {
    pub fn new(side: u32) -> Self {
        assert!(side > 0);
        Self {
            side,
            pixels: vec![[0.0; 3]; side as usize * side as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.index(x, y)
            .map(|index| color_as_bytes(self.pixels[index]))
    }

    /// Copies the surface into an RGBA8 frame of `side * side` pixels.
    pub fn write_rgba(&self, frame: &mut [u8]) {
        debug_assert_eq!(frame.len(), 4 * self.pixels.len());
        for (pixel, out) in self.pixels.iter().zip(frame.chunks_exact_mut(4)) {
            let [red, green, blue] = color_as_bytes(*pixel);
            out.copy_from_slice(&[red, green, blue, 0xff]);
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.side && y < self.side {
            Some(y as usize * self.side as usize + x as usize)
        } else {
            None
        }
    }

    fn pixel_span(&self, low: f64, high: f64) -> Option<RangeInclusive<u32>> {
        if low.is_nan() || high.is_nan() || high < 0.0 || low >= self.side as f64 {
            return None;
        }
        let first = low.max(0.0).floor() as u32;
        let last = (high.ceil() as u32).min(self.side - 1);
        Some(first..=last)
    }
}

impl Canvas for RasterCanvas {
    fn side(&self) -> u32 {
        self.side
    }

    fn fill_overlay(&mut self, color: [u8; 3], alpha: f64) {
        if alpha.is_nan() || alpha <= 0.0 {
            return;
        }
        let alpha = alpha.min(1.0) as f32;
        let color = color_as_fractions(color);
        for pixel in self.pixels.iter_mut() {
            *pixel = blend_over(color, alpha, *pixel);
        }
    }

    /// Anti-aliased stroke with round ends; zero-length segments leave no mark.
    fn stroke_segment(&mut self, from: Point, to: Point, color: [u8; 3], thickness: f64) {
        if from == to || thickness.is_nan() || thickness <= 0.0 {
            return;
        }
        let half_width = thickness / 2.0;
        let reach = half_width + 1.0;
        let Some(cols) = self.pixel_span(from.x.min(to.x) - reach, from.x.max(to.x) + reach) else {
            return;
        };
        let Some(rows) = self.pixel_span(from.y.min(to.y) - reach, from.y.max(to.y) + reach) else {
            return;
        };

        let color = color_as_fractions(color);
        let max_coverage = thickness.min(1.0);
        for row in rows {
            for col in cols.clone() {
                let center = Point::new(col as f64 + 0.5, row as f64 + 0.5);
                let coverage = (half_width + 0.5 - distance_to_segment(center, from, to))
                    .clamp(0.0, max_coverage);
                if coverage > 0.0
                    && let Some(index) = self.index(col, row)
                {
                    self.pixels[index] = blend_over(color, coverage as f32, self.pixels[index]);
                }
            }
        }
    }
}

fn distance_to_segment(point: Point, from: Point, to: Point) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length_squared = dx * dx + dy * dy;
    let along = if length_squared == 0.0 {
        0.0
    } else {
        (((point.x - from.x) * dx + (point.y - from.y) * dy) / length_squared).clamp(0.0, 1.0)
    };
    point.distance(Point::new(from.x + along * dx, from.y + along * dy))
}

// Source-over onto an opaque surface.
fn blend_over(above: [f32; 3], alpha: f32, below: [f32; 3]) -> [f32; 3] {
    std::array::from_fn(|i| above[i] * alpha + below[i] * (1.0 - alpha))
}

fn color_as_fractions(color: [u8; 3]) -> [f32; 3] {
    color.map(|channel| channel as f32 / 0xff as f32)
}

fn color_as_bytes(color: [f32; 3]) -> [u8; 3] {
    color.map(|channel| (channel.clamp(0.0, 1.0) * 0xff as f32).round() as u8)
}

use crate::{AngularStep, GridConfig, GridCount, Point, StrokeWidth};

const SIDE_TOLERANCE: f64 = 1e-6;

/// Size of the host's drawing area in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_density: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, pixel_density: f64) -> Self {
        Self {
            width,
            height,
            pixel_density,
        }
    }

    /// Side of the square surface, in device pixels. Never zero.
    pub fn side(&self) -> u32 {
        // Logical sizes scaled back up land a hair under whole pixels.
        let side = (self.width.min(self.height) * self.pixel_density + SIDE_TOLERANCE).floor();
        (side as u32).max(1)
    }
}

/// Geometry shared by every oscillator of one grid. Fixed until the next rebuild.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    side: u32,
    count: u32,
    cell_size: f64,
    radius: f64,
    size_ratio: f64,
    stroke_thickness: f64,
    angular_step: f64,
}

impl Layout {
    pub fn new(viewport: Viewport, config: &GridConfig) -> Self {
        let side = viewport.side();
        let count = match config.count {
            GridCount::Fixed(count) => count.max(1),
            GridCount::FromSize => 5 + side / 100,
        };
        let cell_size = side as f64 / count as f64;
        let radius = ((cell_size - config.padding) / 2.0).max(0.0);
        let size_ratio = count as f64 / 16.0;
        let stroke_thickness = match config.stroke {
            StrokeWidth::Scaled(base) => base * size_ratio,
            StrokeWidth::Fixed(thickness) => thickness,
        };
        let angular_step = match config.step {
            AngularStep::Scaled(base) => base / size_ratio,
            AngularStep::Fixed(step) => step,
        };
        Self {
            side,
            count,
            cell_size,
            radius,
            size_ratio,
            stroke_thickness,
            angular_step,
        }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn num_oscillators(&self) -> usize {
        self.count as usize * self.count as usize
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn size_ratio(&self) -> f64 {
        self.size_ratio
    }

    pub fn stroke_thickness(&self) -> f64 {
        self.stroke_thickness
    }

    pub fn angular_step(&self) -> f64 {
        self.angular_step
    }

    pub fn origin(&self, col: u32, row: u32) -> Point {
        Point::new(
            col as f64 * self.cell_size + self.radius,
            row as f64 * self.cell_size + self.radius,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn fixed(count: u32, padding: f64) -> GridConfig {
        GridConfig {
            count: GridCount::Fixed(count),
            padding,
            ..GridConfig::default()
        }
    }

    #[test]
    fn side_uses_smaller_dimension_and_density() {
        assert_eq!(Viewport::new(800.0, 600.0, 1.0).side(), 600);
        assert_eq!(Viewport::new(400.0, 500.0, 2.0).side(), 800);
        assert_eq!(Viewport::new(0.0, 500.0, 1.0).side(), 1);
    }

    #[test]
    fn fractional_scale_keeps_whole_pixels() {
        let config = GridConfig::default();
        let physical_sizes = [
            (2000.0, 1400.0, 1.1),
            (1900.0, 1900.0, 1.1),
            (2000.0, 1000.0, 1.333),
            (2560.0, 1400.0, 1.333),
        ];
        for (width, height, scale) in physical_sizes {
            let viewport = Viewport::new(width / scale, height / scale, scale);
            let expected = (width as u32).min(height as u32);
            assert_eq!(viewport.side(), expected);
            assert_eq!(Layout::new(viewport, &config).count(), 5 + expected / 100);
        }
        assert_eq!(Viewport::new(99.5, 99.5, 1.0).side(), 99);
    }

    #[test]
    fn two_by_two_on_hundred_pixels() {
        let layout = Layout::new(Viewport::new(100.0, 100.0, 1.0), &fixed(2, 0.0));
        assert_eq!(layout.count(), 2);
        assert_eq!(layout.num_oscillators(), 4);
        assert!((layout.cell_size() - 50.0).abs() < 1e-9);
        assert!((layout.radius() - 25.0).abs() < 1e-9);
        assert_eq!(layout.origin(0, 0), Point::new(25.0, 25.0));
        assert_eq!(layout.origin(1, 1), Point::new(75.0, 75.0));
    }

    #[test]
    fn count_grows_with_surface() {
        let config = GridConfig::default();
        assert_eq!(Layout::new(Viewport::new(99.0, 99.0, 1.0), &config).count(), 5);
        assert_eq!(Layout::new(Viewport::new(1080.0, 1920.0, 1.0), &config).count(), 15);
        assert_eq!(Layout::new(Viewport::new(1080.0, 1920.0, 2.0), &config).count(), 26);
    }

    #[test]
    fn padding_shrinks_radius_but_not_cells() {
        let layout = Layout::new(Viewport::new(160.0, 160.0, 1.0), &fixed(4, 6.0));
        assert!((layout.cell_size() - 40.0).abs() < 1e-9);
        assert!((layout.radius() - 17.0).abs() < 1e-9);
        let gap = layout.origin(1, 0).x - layout.origin(0, 0).x - 2.0 * layout.radius();
        assert!((gap - 6.0).abs() < 1e-9);
    }

    #[test]
    fn oversized_padding_collapses_radius() {
        let layout = Layout::new(Viewport::new(40.0, 40.0, 1.0), &fixed(10, 6.0));
        assert_eq!(layout.radius(), 0.0);
    }

    #[test]
    fn size_ratio_scales_stroke_and_step() {
        let layout = Layout::new(Viewport::new(320.0, 320.0, 1.0), &fixed(32, 6.0));
        assert!((layout.size_ratio() - 2.0).abs() < 1e-9);
        assert!((layout.stroke_thickness() - 2.5).abs() < 1e-9);
        assert!((layout.angular_step() - PI / 600.0).abs() < 1e-12);
    }

    #[test]
    fn fixed_stroke_and_step_ignore_ratio() {
        let config = GridConfig {
            count: GridCount::Fixed(32),
            stroke: StrokeWidth::Fixed(1.0),
            step: AngularStep::Fixed(PI / 720.0),
            ..GridConfig::default()
        };
        let layout = Layout::new(Viewport::new(320.0, 320.0, 1.0), &config);
        assert_eq!(layout.stroke_thickness(), 1.0);
        assert_eq!(layout.angular_step(), PI / 720.0);
    }

    #[test]
    fn lattice_spans_surface() {
        let layout = Layout::new(Viewport::new(300.0, 300.0, 1.0), &fixed(6, 0.0));
        let last = layout.origin(5, 5);
        assert!((last.x + layout.radius() - 300.0).abs() < 1e-9);
        assert!((last.y + layout.radius() - 300.0).abs() < 1e-9);
    }
}

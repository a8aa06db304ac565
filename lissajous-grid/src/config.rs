use crate::{Palette, ThrottleMode};
use std::f64::consts::PI;
use std::time::Duration;

const DEFAULT_PADDING: f64 = 6.0;
const DEFAULT_STROKE_BASE: f64 = 1.25;
const DEFAULT_STEP_BASE: f64 = PI / 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridCount {
    Fixed(u32),
    /// `5 + side / 100`: bigger surfaces get more curves.
    FromSize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeWidth {
    /// Multiplied by the grid's size ratio.
    Scaled(f64),
    Fixed(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AngularStep {
    /// Divided by the grid's size ratio, so denser grids turn slower.
    Scaled(f64),
    Fixed(f64),
}

/// Everything that shapes a grid apart from the viewport it is built for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub count: GridCount,
    /// Gap between neighbouring curves, in surface pixels.
    pub padding: f64,
    pub stroke: StrokeWidth,
    pub step: AngularStep,
    pub palette: Palette,
    pub throttle: ThrottleMode,
    /// Frames arriving sooner than this after the last drawn one are dropped.
    pub min_frame_interval: Option<Duration>,
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            count: GridCount::FromSize,
            padding: DEFAULT_PADDING,
            stroke: StrokeWidth::Scaled(DEFAULT_STROKE_BASE),
            step: AngularStep::Scaled(DEFAULT_STEP_BASE),
            palette: Palette::Gradient,
            throttle: ThrottleMode::Clamped,
            min_frame_interval: None,
            seed: None,
        }
    }
}

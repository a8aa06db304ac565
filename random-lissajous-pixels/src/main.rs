#![deny(clippy::all)]
#![forbid(unsafe_code)]

use lissajous_grid::{
    AngularStep, GridConfig, GridCount, LissajousScene, Palette, StrokeWidth, ThrottleMode,
};
use pixels_main_support::{AnimateError, animate};
use std::f64::consts::PI;

const GRID_COUNT: u32 = 15;
const PADDING: f64 = 6.0;
const STROKE_THICKNESS: f64 = 1.0;
const ANGULAR_STEP: f64 = PI / 720.0;

fn main() -> Result<(), AnimateError> {
    env_logger::init();
    let config = GridConfig {
        count: GridCount::Fixed(GRID_COUNT),
        padding: PADDING,
        stroke: StrokeWidth::Fixed(STROKE_THICKNESS),
        step: AngularStep::Fixed(ANGULAR_STEP),
        palette: Palette::Random,
        throttle: ThrottleMode::Unclamped,
        min_frame_interval: None,
        seed: None,
    };
    animate(|viewport, now| LissajousScene::new(viewport, &config, now))
}

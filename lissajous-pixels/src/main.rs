#![deny(clippy::all)]
#![forbid(unsafe_code)]

use lissajous_grid::{GridConfig, LissajousScene};
use pixels_main_support::{AnimateError, animate};
use std::time::Duration;

const FRAME_LOCK: Duration = Duration::from_millis(16);

fn main() -> Result<(), AnimateError> {
    env_logger::init();
    let config = GridConfig {
        min_frame_interval: Some(FRAME_LOCK),
        ..GridConfig::default()
    };
    animate(|viewport, now| LissajousScene::new(viewport, &config, now))
}

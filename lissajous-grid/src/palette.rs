use crate::{Point, Random};

const CHANNEL_MIN: u8 = 100;
const CHANNEL_SPAN: f64 = 155.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    /// Colour follows the curve's place on the surface.
    #[default]
    Gradient,
    Random,
}

impl Palette {
    pub fn color(&self, origin: Point, side: u32, rand: &mut Random) -> [u8; 3] {
        match self {
            Self::Gradient => gradient_color(origin, side),
            Self::Random => [
                rand.next_in_range(CHANNEL_MIN..=u8::MAX),
                rand.next_in_range(CHANNEL_MIN..=u8::MAX),
                rand.next_in_range(CHANNEL_MIN..=u8::MAX),
            ],
        }
    }
}

/// Red tracks the horizontal position, blue the vertical one and green their
/// ratio, so the top-right corner is the greenest.
pub fn gradient_color(origin: Point, side: u32) -> [u8; 3] {
    let x_ratio = origin.x / side as f64;
    let y_ratio = origin.y / side as f64;
    [
        channel(x_ratio),
        channel(x_ratio / y_ratio),
        channel(y_ratio),
    ]
}

fn channel(ratio: f64) -> u8 {
    let value = CHANNEL_MIN as f64 + CHANNEL_SPAN * ratio;
    if value.is_nan() {
        CHANNEL_MIN
    } else {
        value.clamp(CHANNEL_MIN as f64, u8::MAX as f64) as u8
    }
}
